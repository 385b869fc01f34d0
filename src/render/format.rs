/// `1059633675` -> `"1,059,633,675"`
pub fn format_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_millions(value: f64) -> String {
    format!("{:.1}", value)
}

pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(ch),
        }
    }
    out
}

/// One-line headline shown under the year heading.
pub fn headline(country: &str, year: i32, population: u64) -> String {
    format!(
        "{}'s population in {} was {} people.",
        country,
        year,
        format_thousands(population)
    )
}

pub fn interpretation(country: &str, year: i32, population: u64) -> String {
    format!(
        "{}'s population has experienced consistent growth over the decades. \
         In {}, the estimated population was approximately {}. \
         This rise can be attributed to improvements in healthcare, education, and infrastructure.",
        country,
        year,
        format_thousands(population)
    )
}

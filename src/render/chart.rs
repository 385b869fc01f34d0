// SVG chart generation for the dashboard page

use crate::domain::model::{AgeDistributionCurve, AgeGroupEstimate, PopulationRecord};
use crate::render::format::{escape_html, format_millions};

const BUCKET_COLORS: [&str; 3] = ["#FFE600", "#1E90FF", "#FF69B4"];

/// Horizontal bars for the three age buckets, annotated with `"<v> Mn"`.
pub fn age_group_bar_svg(country: &str, year: i32, estimate: &AgeGroupEstimate) -> String {
    let width = 800;
    let height = 350;
    let margin_left = 110;
    let margin_right = 90;
    let margin_top = 45;
    let margin_bottom = 55;
    let chart_width = (width - margin_left - margin_right) as f64;
    let chart_height = (height - margin_top - margin_bottom) as f64;

    let buckets = estimate.buckets();
    let max_value = buckets
        .iter()
        .map(|(_, v)| *v)
        .fold(0.0f64, f64::max)
        .max(1.0);

    let slot = chart_height / buckets.len() as f64;
    let bar_height = slot * 0.8;
    let mut bars = String::new();

    // 與 barh 相同：第一個年齡層在最下方
    for (i, ((label, value), color)) in buckets.iter().zip(BUCKET_COLORS.iter()).enumerate() {
        let row = (buckets.len() - 1 - i) as f64;
        let y = margin_top as f64 + row * slot + (slot - bar_height) / 2.0;
        let bar_width = (value / max_value) * chart_width;
        let center_y = y + bar_height / 2.0;

        bars.push_str(&format!(
            r##"<rect x="{}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>
  <text x="{}" y="{:.1}" text-anchor="end" font-size="12" fill="#374151" dominant-baseline="middle">{}</text>
  <text x="{:.1}" y="{:.1}" font-size="12" font-weight="bold" fill="#111827" dominant-baseline="middle">{} Mn</text>
  "##,
            margin_left, y, bar_width, bar_height, color,
            margin_left - 8, center_y, label,
            margin_left as f64 + bar_width + 8.0, center_y, format_millions(*value)
        ));
    }

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="background:white">
  <text x="{}" y="25" text-anchor="middle" font-size="15" font-weight="600" fill="#111827">{}'s Age Group Distribution in {}</text>
  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#9ca3af" stroke-width="1"/>
  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#9ca3af" stroke-width="1"/>
  {}<text x="{}" y="{}" text-anchor="middle" font-size="12" fill="#374151">Estimated Population (in Millions)</text>
</svg>"##,
        width, height,
        width / 2, escape_html(country), year,
        margin_left, margin_top, margin_left, height - margin_bottom, // y-axis
        margin_left, height - margin_bottom, width - margin_right, height - margin_bottom, // x-axis
        bars,
        margin_left + (width - margin_left - margin_right) / 2, height - 15,
    )
}

/// Population over the full series, with the selected year marked.
pub fn population_line_svg(series: &[PopulationRecord], selected_year: i32) -> String {
    let width = 800;
    let height = 350;
    let margin = 60;
    let chart_width = (width - 2 * margin) as f64;
    let chart_height = (height - 2 * margin) as f64;

    if series.is_empty() {
        return String::from("<svg></svg>");
    }

    let min_year = series.iter().map(|r| r.year).min().unwrap_or(selected_year);
    let max_year = series.iter().map(|r| r.year).max().unwrap_or(selected_year);
    let min_pop = series.iter().map(|r| r.population).min().unwrap_or(0) as f64;
    let max_pop = series.iter().map(|r| r.population).max().unwrap_or(0) as f64;

    let year_span = (max_year - min_year) as f64;
    let pop_span = max_pop - min_pop;

    let x_of = |year: i32| -> f64 {
        if year_span == 0.0 {
            margin as f64 + chart_width / 2.0
        } else {
            margin as f64 + ((year - min_year) as f64 / year_span) * chart_width
        }
    };
    let y_of = |population: u64| -> f64 {
        if pop_span == 0.0 {
            margin as f64 + chart_height / 2.0
        } else {
            margin as f64 + chart_height - ((population as f64 - min_pop) / pop_span) * chart_height
        }
    };

    let mut path = String::from("M");
    for (i, record) in series.iter().enumerate() {
        let cmd = if i == 0 {
            format!("{:.1},{:.1}", x_of(record.year), y_of(record.population))
        } else {
            format!(" L{:.1},{:.1}", x_of(record.year), y_of(record.population))
        };
        path.push_str(&cmd);
    }

    let marker = series
        .iter()
        .find(|r| r.year == selected_year)
        .map(|r| {
            format!(
                r##"<circle cx="{:.1}" cy="{:.1}" r="4" fill="#dc2626"/>"##,
                x_of(r.year),
                y_of(r.population)
            )
        })
        .unwrap_or_default();

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="background:white">
  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#e5e7eb" stroke-width="2"/>
  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#e5e7eb" stroke-width="2"/>
  <text x="{}" y="{}" font-size="11" fill="#6b7280">{}</text>
  <text x="{}" y="{}" font-size="11" fill="#6b7280" text-anchor="end">{}</text>
  <text x="{}" y="{}" font-size="11" fill="#6b7280" text-anchor="end">{} Mn</text>
  <text x="{}" y="{}" font-size="11" fill="#6b7280" text-anchor="end">{} Mn</text>
  <text x="{}" y="{}" text-anchor="middle" font-size="12" fill="#6b7280">Year</text>
  <path d="{}" fill="none" stroke="#1E90FF" stroke-width="2.5"/>
  {}
</svg>"##,
        width, height,
        margin, height - margin, width - margin, height - margin, // x-axis
        margin, margin, margin, height - margin, // y-axis
        margin, height - margin + 20, min_year,
        width - margin, height - margin + 20, max_year,
        margin - 5, height - margin, format_millions(min_pop / 1_000_000.0),
        margin - 5, margin + 4, format_millions(max_pop / 1_000_000.0),
        width / 2, height - 10,
        path,
        marker,
    )
}

/// Filled area under the relative density curve with a dashed marker line.
pub fn age_curve_svg(curve: &AgeDistributionCurve, marker_age: u32) -> String {
    let width = 1000;
    let height = 450;
    let margin = 60;
    let chart_width = (width - 2 * margin) as f64;
    let chart_height = (height - 2 * margin) as f64;

    if curve.points.is_empty() {
        return String::from("<svg></svg>");
    }

    let max_age = curve.points.iter().map(|p| p.age).max().unwrap_or(1).max(1) as f64;
    let max_density = curve.max_density().max(1.0) * 1.1;
    let baseline = margin as f64 + chart_height;

    let x_of = |age: u32| margin as f64 + (age as f64 / max_age) * chart_width;
    let y_of = |density: f64| baseline - (density / max_density) * chart_height;

    let mut area = format!("M{:.1},{:.1}", x_of(0), baseline);
    for point in &curve.points {
        area.push_str(&format!(" L{:.1},{:.1}", x_of(point.age), y_of(point.density)));
    }
    let last_age = curve.points.last().map(|p| p.age).unwrap_or(0);
    area.push_str(&format!(" L{:.1},{:.1} Z", x_of(last_age), baseline));

    let marker_x = x_of(marker_age);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}" style="background:white">
  <text x="{}" y="25" text-anchor="middle" font-size="15" font-weight="600" fill="#111827">Age Distribution Curve (Estimated)</text>
  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#9ca3af" stroke-width="1"/>
  <line x1="{}" y1="{}" x2="{}" y2="{}" stroke="#9ca3af" stroke-width="1"/>
  <path d="{}" fill="skyblue" fill-opacity="0.8" stroke="none"/>
  <line x1="{:.1}" y1="{}" x2="{:.1}" y2="{:.1}" stroke="black" stroke-width="1.5" stroke-dasharray="6,4"/>
  <line x1="{}" y1="45" x2="{}" y2="45" stroke="black" stroke-width="1.5" stroke-dasharray="6,4"/>
  <text x="{}" y="49" font-size="12" fill="#111827">Median Age = {}</text>
  <text x="{}" y="{}" font-size="11" fill="#6b7280">0</text>
  <text x="{}" y="{}" font-size="11" fill="#6b7280" text-anchor="end">{}</text>
  <text x="{}" y="{}" text-anchor="middle" font-size="12" fill="#374151">Age</text>
  <text x="18" y="{}" text-anchor="middle" font-size="12" fill="#374151" transform="rotate(-90, 18, {})">Relative Population (Shape Only)</text>
</svg>"##,
        width, height,
        width / 2,
        margin, height - margin, width - margin, height - margin, // x-axis
        margin, margin, margin, height - margin, // y-axis
        area,
        marker_x, margin, marker_x, baseline,
        width - margin - 190, width - margin - 160,
        width - margin - 152, marker_age,
        margin, height - margin + 20,
        width - margin, height - margin + 20, last_age,
        width / 2, height - 15,
        height / 2, height / 2,
    )
}

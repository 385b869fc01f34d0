use crate::core::insight::MEDIAN_AGE_MARKER;
use crate::domain::model::{AgeDistributionCurve, PopulationRecord, YearInsight};
use crate::render::chart::{age_curve_svg, age_group_bar_svg, population_line_svg};
use crate::render::format::{escape_html, headline, interpretation};

pub fn page_file_name(year: i32) -> String {
    format!("dashboard_{}.html", year)
}

/// Everything one page needs; borrowed from the pipeline's computed data.
pub struct PageContext<'a> {
    pub country: &'a str,
    pub years: &'a [i32],
    pub series: &'a [PopulationRecord],
    pub curve: &'a AgeDistributionCurve,
    pub generated_at: &'a str,
}

fn year_selector(years: &[i32], selected_year: i32) -> String {
    let mut options = String::new();
    for &year in years {
        let selected = if year == selected_year { " selected" } else { "" };
        options.push_str(&format!(
            r#"<option value="{}"{}>{}</option>"#,
            page_file_name(year),
            selected,
            year
        ));
    }

    format!(
        r#"<label for="year">📅 Select a year:</label>
<select id="year" onchange="window.location.href=this.value">{}</select>"#,
        options
    )
}

pub fn render_page(ctx: &PageContext<'_>, insight: &YearInsight) -> String {
    let country = escape_html(ctx.country);

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>{country} Population Insights</title>
<style>
body {{ font-family: sans-serif; max-width: 1040px; margin: 0 auto; padding: 24px; color: #111827; }}
.success {{ background: #dcfce7; color: #166534; padding: 12px 16px; border-radius: 6px; }}
footer {{ color: #6b7280; font-size: 12px; margin-top: 32px; }}
</style>
</head>
<body>
<h1>{country}'s Population Insights Dashboard</h1>
<p>This dashboard helps you explore population data by <strong>year</strong> and <strong>age distribution</strong>.</p>
{selector}
<h3>🗓️ Year: {year}</h3>
<p class="success">📈 {headline}</p>
<p>{interpretation}</p>
<h2>Age Group Distribution (Estimated for Selected Year)</h2>
{bar_chart}
<h2>{country}'s Population Growth Over the Years</h2>
{line_chart}
<h2>Estimated Age Distribution Curve (Shape Only)</h2>
{curve_chart}
<footer>Generated at {generated_at}</footer>
</body>
</html>
"#,
        country = country,
        selector = year_selector(ctx.years, insight.year),
        year = insight.year,
        headline = escape_html(&headline(ctx.country, insight.year, insight.population)),
        interpretation =
            escape_html(&interpretation(ctx.country, insight.year, insight.population)),
        bar_chart = age_group_bar_svg(ctx.country, insight.year, &insight.estimate),
        line_chart = population_line_svg(ctx.series, insight.year),
        curve_chart = age_curve_svg(ctx.curve, MEDIAN_AGE_MARKER),
        generated_at = escape_html(ctx.generated_at),
    )
}

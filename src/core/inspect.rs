//! Read-only views over a dataset: the selector years and the dry-run summary.

use crate::core::source::{parse_population_csv, DataSource};
use crate::core::ConfigProvider;
use crate::domain::model::YearlyPopulation;
use crate::utils::error::Result;
use reqwest::Client;
use serde::Serialize;

/// Fetches and parses the CSV behind `source` (local path or URL).
pub async fn load_dataset(source: &str, client: &Client) -> Result<YearlyPopulation> {
    let source = DataSource::parse(source)?;
    tracing::info!("📥 Loading population data from {}", source);

    let bytes = source.fetch(client).await?;
    let data = parse_population_csv(&bytes)?;

    tracing::debug!(
        "Dataset covers {}-{} ({} years)",
        data.first_year(),
        data.latest_year(),
        data.len()
    );
    Ok(data)
}

/// Sorted distinct years, as offered by the year selector.
pub async fn available_years(source: &str) -> Result<Vec<i32>> {
    let data = load_dataset(source, &Client::new()).await?;
    Ok(data.years())
}

/// What a run would produce, without writing anything.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DryRunReport {
    pub source: String,
    pub output_path: String,
    pub country: String,
    pub years: Vec<i32>,
    pub selected_year: i32,
    pub selected_year_present: bool,
    /// Pages plus index, summary JSON and curve CSV.
    pub artifact_count: usize,
    /// Archive name when output is compressed.
    pub archive: Option<String>,
}

impl DryRunReport {
    pub fn first_year(&self) -> Option<i32> {
        self.years.first().copied()
    }

    pub fn latest_year(&self) -> Option<i32> {
        self.years.last().copied()
    }
}

pub async fn dry_run<C: ConfigProvider>(config: &C) -> Result<DryRunReport> {
    let data = load_dataset(config.source(), &Client::new()).await?;
    let years = data.years();
    let selected_year = config.selected_year().unwrap_or_else(|| data.first_year());

    Ok(DryRunReport {
        source: config.source().to_string(),
        output_path: config.output_path().to_string(),
        country: config.country().to_string(),
        artifact_count: years.len() + 3,
        selected_year_present: data.contains(selected_year),
        selected_year,
        years,
        archive: config
            .compress_output()
            .then(|| config.archive_name().to_string()),
    })
}

use crate::core::insight::{age_distribution_curve, compute_insight};
use crate::core::inspect::load_dataset;
use crate::core::{ConfigProvider, Pipeline, Storage};
use crate::domain::model::{
    AgeDistributionCurve, Artifact, DashboardBundle, YearInsight, YearlyPopulation,
};
use crate::render::page::{page_file_name, render_page, PageContext};
use crate::utils::error::{InsightError, Result};
use reqwest::Client;
use serde::Serialize;
use std::io::Write;
use zip::write::{FileOptions, ZipWriter};

pub const INDEX_FILE: &str = "index.html";
pub const SUMMARY_FILE: &str = "insights.json";
pub const CURVE_FILE: &str = "age_distribution.csv";

#[derive(Serialize)]
struct InsightSummary<'a> {
    generated_at: &'a str,
    country: &'a str,
    selected_year: i32,
    years: &'a [YearInsight],
    age_distribution_curve: &'a AgeDistributionCurve,
}

pub struct DashboardPipeline<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    client: Client,
}

impl<S: Storage, C: ConfigProvider> DashboardPipeline<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            client: Client::new(),
        }
    }

    /// 設定的年份，未指定時取選單的第一個選項
    fn resolve_selected_year(&self, data: &YearlyPopulation) -> Result<i32> {
        let year = self.config.selected_year().unwrap_or_else(|| data.first_year());
        if !data.contains(year) {
            return Err(InsightError::YearNotFound {
                year,
                first: data.first_year(),
                last: data.latest_year(),
            });
        }
        Ok(year)
    }

    fn render_curve_csv(curve: &AgeDistributionCurve) -> Result<Vec<u8>> {
        let mut writer = csv::Writer::from_writer(Vec::new());
        for point in &curve.points {
            writer.serialize(point)?;
        }
        writer.into_inner().map_err(|e| InsightError::RenderError {
            message: format!("Failed to flush curve CSV: {}", e),
        })
    }

    fn build_archive(bundle: &DashboardBundle) -> Result<Vec<u8>> {
        let mut zip = ZipWriter::new(std::io::Cursor::new(Vec::new()));
        for artifact in &bundle.artifacts {
            zip.start_file::<_, ()>(artifact.name.as_str(), FileOptions::default())?;
            zip.write_all(&artifact.content)?;
        }
        let cursor = zip.finish()?;
        Ok(cursor.into_inner())
    }
}

#[async_trait::async_trait]
impl<S: Storage, C: ConfigProvider> Pipeline for DashboardPipeline<S, C> {
    async fn extract(&self) -> Result<YearlyPopulation> {
        load_dataset(self.config.source(), &self.client).await
    }

    async fn transform(&self, data: YearlyPopulation) -> Result<DashboardBundle> {
        let selected_year = self.resolve_selected_year(&data)?;
        tracing::info!("📅 Selected year: {}", selected_year);

        let years = data.years();
        let series: Vec<_> = data.series().collect();
        let curve = age_distribution_curve();
        let generated_at = chrono::Utc::now().to_rfc3339();

        let insights = years
            .iter()
            .map(|&year| compute_insight(&data, year))
            .collect::<Result<Vec<_>>>()?;

        let ctx = PageContext {
            country: self.config.country(),
            years: &years,
            series: &series,
            curve: &curve,
            generated_at: &generated_at,
        };

        let mut artifacts = Vec::with_capacity(insights.len() + 3);
        for insight in &insights {
            let html = render_page(&ctx, insight);
            if insight.year == selected_year {
                artifacts.push(Artifact::new(INDEX_FILE, html.clone()));
            }
            artifacts.push(Artifact::new(page_file_name(insight.year), html));
        }

        let summary = InsightSummary {
            generated_at: &generated_at,
            country: self.config.country(),
            selected_year,
            years: &insights,
            age_distribution_curve: &curve,
        };
        artifacts.push(Artifact::new(
            SUMMARY_FILE,
            serde_json::to_string_pretty(&summary)?,
        ));
        artifacts.push(Artifact::new(CURVE_FILE, Self::render_curve_csv(&curve)?));

        Ok(DashboardBundle {
            selected_year,
            artifacts,
        })
    }

    async fn load(&self, bundle: DashboardBundle) -> Result<String> {
        if self.config.compress_output() {
            let archive_name = self.config.archive_name();
            tracing::debug!(
                "Creating ZIP archive with {} files",
                bundle.artifacts.len()
            );

            let zip_data = Self::build_archive(&bundle)?;
            tracing::debug!("Writing ZIP file ({} bytes) to storage", zip_data.len());
            self.storage.write_file(archive_name, &zip_data).await?;

            return Ok(format!("{}/{}", self.config.output_path(), archive_name));
        }

        for artifact in &bundle.artifacts {
            tracing::debug!(
                "Writing {} ({} bytes)",
                artifact.name,
                artifact.content.len()
            );
            self.storage
                .write_file(&artifact.name, &artifact.content)
                .await?;
        }

        Ok(format!("{}/{}", self.config.output_path(), INDEX_FILE))
    }
}

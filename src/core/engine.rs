use crate::core::Pipeline;
use crate::utils::error::Result;
use std::time::Instant;

pub struct DashboardEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> DashboardEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn run(&self) -> Result<String> {
        let started = Instant::now();
        tracing::info!("Starting dashboard generation...");

        // Extract
        let data = self.pipeline.extract().await?;
        tracing::info!(
            "Loaded {} years ({}-{})",
            data.len(),
            data.first_year(),
            data.latest_year()
        );

        // Transform
        let bundle = self.pipeline.transform(data).await?;
        tracing::info!(
            "Rendered {} artifacts for selected year {}",
            bundle.artifacts.len(),
            bundle.selected_year
        );

        // Load
        let output_path = self.pipeline.load(bundle).await?;
        tracing::info!(
            "Output saved to: {} (took {:?})",
            output_path,
            started.elapsed()
        );

        Ok(output_path)
    }
}

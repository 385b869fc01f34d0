use crate::domain::model::{DashboardBundle, YearlyPopulation};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Destination for the rendered artifacts.
pub trait Storage: Send + Sync {
    fn write_file(
        &self,
        path: &str,
        data: &[u8],
    ) -> impl std::future::Future<Output = Result<()>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    /// Local CSV path or `http(s)` URL.
    fn source(&self) -> &str;
    fn output_path(&self) -> &str;
    fn selected_year(&self) -> Option<i32>;
    fn country(&self) -> &str;
    fn compress_output(&self) -> bool;
    fn archive_name(&self) -> &str {
        "population_insights.zip"
    }
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn extract(&self) -> Result<YearlyPopulation>;
    async fn transform(&self, data: YearlyPopulation) -> Result<DashboardBundle>;
    async fn load(&self, bundle: DashboardBundle) -> Result<String>;
}

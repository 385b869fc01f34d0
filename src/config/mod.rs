pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
use crate::core::ConfigProvider;
#[cfg(feature = "cli")]
use crate::utils::error::Result;
#[cfg(feature = "cli")]
use crate::utils::validation::{self, Validate};
#[cfg(feature = "cli")]
use clap::Parser;
#[cfg(feature = "cli")]
use serde::{Deserialize, Serialize};

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "population-insights")]
#[command(about = "Generate a population insights dashboard from a yearly CSV")]
pub struct CliConfig {
    /// Population CSV (local path or http(s) URL) with `Year` and `Value` columns
    #[arg(long, default_value = "india_population_yearwise.csv")]
    pub input: String,

    #[arg(long, default_value = "./output")]
    pub output_path: String,

    /// Year shown on the landing page (defaults to the earliest year)
    #[arg(long)]
    pub year: Option<i32>,

    #[arg(long, default_value = "India")]
    pub country: String,

    #[arg(long, help = "Pack all generated files into a single ZIP archive")]
    pub zip: bool,

    #[arg(long, help = "Print the years available in the dataset and exit")]
    pub list_years: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

#[cfg(feature = "cli")]
impl ConfigProvider for CliConfig {
    fn source(&self) -> &str {
        &self.input
    }

    fn output_path(&self) -> &str {
        &self.output_path
    }

    fn selected_year(&self) -> Option<i32> {
        self.year
    }

    fn country(&self) -> &str {
        &self.country
    }

    fn compress_output(&self) -> bool {
        self.zip
    }
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_source("input", &self.input)?;
        validation::validate_path("output_path", &self.output_path)?;
        validation::validate_non_empty_string("country", &self.country)?;
        validation::validate_year("year", self.year)
    }
}

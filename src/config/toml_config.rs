use crate::core::ConfigProvider;
use crate::utils::error::{InsightError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

const DEFAULT_COUNTRY: &str = "India";
const DEFAULT_ARCHIVE_NAME: &str = "population_insights.zip";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlConfig {
    pub dashboard: DashboardSection,
    pub source: SourceSection,
    pub selection: Option<SelectionSection>,
    pub output: OutputSection,
    pub logging: Option<LoggingSection>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardSection {
    pub name: String,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceSection {
    pub path: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SelectionSection {
    pub year: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputSection {
    pub path: String,
    pub compress: Option<bool>,
    pub archive_name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
    pub json: Option<bool>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(InsightError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| InsightError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${DATA_DIR})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| InsightError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_non_empty_string("dashboard.name", &self.dashboard.name)?;
        validation::validate_non_empty_string("dashboard.country", self.country())?;
        validation::validate_source("source.path", &self.source.path)?;
        validation::validate_path("output.path", &self.output.path)?;
        validation::validate_year("selection.year", self.selected_year())?;

        if let Some(name) = &self.output.archive_name {
            validation::validate_file_extension("output.archive_name", name, &["zip"])?;
        }

        Ok(())
    }

    pub fn selected_year(&self) -> Option<i32> {
        self.selection.as_ref().and_then(|s| s.year)
    }

    pub fn country(&self) -> &str {
        self.dashboard.country.as_deref().unwrap_or(DEFAULT_COUNTRY)
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }

    pub fn json_logging(&self) -> bool {
        self.logging.as_ref().and_then(|l| l.json).unwrap_or(false)
    }
}

impl ConfigProvider for TomlConfig {
    fn source(&self) -> &str {
        &self.source.path
    }

    fn output_path(&self) -> &str {
        &self.output.path
    }

    fn selected_year(&self) -> Option<i32> {
        TomlConfig::selected_year(self)
    }

    fn country(&self) -> &str {
        TomlConfig::country(self)
    }

    fn compress_output(&self) -> bool {
        self.output.compress.unwrap_or(false)
    }

    fn archive_name(&self) -> &str {
        self.output
            .archive_name
            .as_deref()
            .unwrap_or(DEFAULT_ARCHIVE_NAME)
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

use crate::domain::model::{PopulationRecord, YearlyPopulation};
use crate::utils::error::{InsightError, Result};
use crate::utils::validation::looks_like_url;
use reqwest::Client;
use std::path::PathBuf;
use url::Url;

/// Where the population CSV comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DataSource {
    Local(PathBuf),
    Remote(Url),
}

impl DataSource {
    pub fn parse(source: &str) -> Result<Self> {
        if looks_like_url(source) {
            let url = Url::parse(source).map_err(|e| InsightError::InvalidConfigValueError {
                field: "source".to_string(),
                value: source.to_string(),
                reason: format!("Invalid URL format: {}", e),
            })?;
            Ok(DataSource::Remote(url))
        } else {
            Ok(DataSource::Local(PathBuf::from(source)))
        }
    }

    pub async fn fetch(&self, client: &Client) -> Result<Vec<u8>> {
        match self {
            DataSource::Local(path) => {
                tracing::debug!("Reading population CSV from {}", path.display());
                Ok(tokio::fs::read(path).await?)
            }
            DataSource::Remote(url) => {
                tracing::debug!("Downloading population CSV from {}", url);
                let response = client.get(url.as_str()).send().await?;
                let status = response.status();
                tracing::debug!("Source response status: {}", status);

                if !status.is_success() {
                    return Err(InsightError::RemoteSourceError {
                        url: url.to_string(),
                        status: status.as_u16(),
                    });
                }
                Ok(response.bytes().await?.to_vec())
            }
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::Local(path) => write!(f, "{}", path.display()),
            DataSource::Remote(url) => write!(f, "{}", url),
        }
    }
}

/// Parses CSV bytes with `Year` and `Value` headers. Other columns are ignored.
pub fn parse_population_csv(bytes: &[u8]) -> Result<YearlyPopulation> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(bytes);

    let mut records = Vec::new();
    for row in reader.deserialize::<PopulationRecord>() {
        records.push(row?);
    }
    tracing::debug!("Parsed {} CSV rows", records.len());

    YearlyPopulation::from_records(records)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_ignores_extra_columns() {
        let csv = "Country,Year,Value,Unit\nIndia,1961,458494963,persons\nIndia,1960,445954579,persons\n";
        let data = parse_population_csv(csv.as_bytes()).unwrap();

        assert_eq!(data.years(), vec![1960, 1961]);
        assert_eq!(data.population_for(1960).unwrap(), 445_954_579);
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let csv = "Year , Value\n 2000 , 1059633675 \n";
        let data = parse_population_csv(csv.as_bytes()).unwrap();
        assert_eq!(data.population_for(2000).unwrap(), 1_059_633_675);
    }

    #[test]
    fn test_parse_rejects_non_numeric_population() {
        let csv = "Year,Value\n2000,lots\n";
        let result = parse_population_csv(csv.as_bytes());
        assert!(matches!(result, Err(InsightError::CsvError(_))));
    }

    #[test]
    fn test_parse_requires_value_column() {
        let csv = "Year,Population\n2000,1059633675\n";
        assert!(parse_population_csv(csv.as_bytes()).is_err());
    }

    #[test]
    fn test_parse_header_only_is_empty_dataset() {
        let result = parse_population_csv(b"Year,Value\n");
        assert!(matches!(result, Err(InsightError::EmptyDataset)));
    }

    #[tokio::test]
    async fn test_fetch_local_file() {
        let temp_dir = tempfile::TempDir::new().unwrap();
        let path = temp_dir.path().join("population.csv");
        std::fs::write(&path, "Year,Value\n2000,1059633675\n").unwrap();

        let source = DataSource::Local(path);
        let bytes = source.fetch(&Client::new()).await.unwrap();

        assert_eq!(bytes, b"Year,Value\n2000,1059633675\n");
    }

    #[tokio::test]
    async fn test_fetch_missing_local_file() {
        let source = DataSource::Local(PathBuf::from("no/such/population.csv"));
        let result = source.fetch(&Client::new()).await;
        assert!(matches!(result, Err(InsightError::IoError(_))));
    }

    #[test]
    fn test_data_source_parse() {
        assert_eq!(
            DataSource::parse("india_population_yearwise.csv").unwrap(),
            DataSource::Local(PathBuf::from("india_population_yearwise.csv"))
        );
        assert!(matches!(
            DataSource::parse("https://example.com/pop.csv").unwrap(),
            DataSource::Remote(_)
        ));
        assert!(DataSource::parse("http://").is_err());
    }
}

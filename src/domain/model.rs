use crate::utils::error::{InsightError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// CSV 中的一列：年份與人口數
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PopulationRecord {
    #[serde(rename = "Year")]
    pub year: i32,
    #[serde(rename = "Value")]
    pub population: u64,
}

/// 以年份為鍵的人口資料，載入後唯讀
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct YearlyPopulation {
    by_year: BTreeMap<i32, u64>,
}

impl YearlyPopulation {
    /// Builds the dataset from rows in file order. The first row for a year wins.
    pub fn from_records(records: impl IntoIterator<Item = PopulationRecord>) -> Result<Self> {
        let mut by_year = BTreeMap::new();
        for record in records {
            if by_year.contains_key(&record.year) {
                tracing::warn!(
                    "⚠️ Duplicate row for year {} ignored (keeping first value)",
                    record.year
                );
                continue;
            }
            by_year.insert(record.year, record.population);
        }

        if by_year.is_empty() {
            return Err(InsightError::EmptyDataset);
        }

        Ok(Self { by_year })
    }

    /// Distinct years, ascending. These are the selector options.
    pub fn years(&self) -> Vec<i32> {
        self.by_year.keys().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.by_year.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_year.is_empty()
    }

    pub fn contains(&self, year: i32) -> bool {
        self.by_year.contains_key(&year)
    }

    pub fn first_year(&self) -> i32 {
        // from_records 保證至少一筆
        self.by_year.keys().next().copied().unwrap_or_default()
    }

    pub fn latest_year(&self) -> i32 {
        self.by_year.keys().next_back().copied().unwrap_or_default()
    }

    pub fn population_for(&self, year: i32) -> Result<u64> {
        self.by_year
            .get(&year)
            .copied()
            .ok_or(InsightError::YearNotFound {
                year,
                first: self.first_year(),
                last: self.latest_year(),
            })
    }

    pub fn series(&self) -> impl Iterator<Item = PopulationRecord> + '_ {
        self.by_year
            .iter()
            .map(|(&year, &population)| PopulationRecord { year, population })
    }
}

/// 年齡層比例，以整數百分比保存，三者總和恰為 100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct AgeGroupRatios {
    pub young_pct: u8,
    pub adult_pct: u8,
    pub elderly_pct: u8,
}

impl AgeGroupRatios {
    pub const fn new(young_pct: u8, adult_pct: u8, elderly_pct: u8) -> Self {
        Self {
            young_pct,
            adult_pct,
            elderly_pct,
        }
    }

    pub fn total_pct(&self) -> u32 {
        self.young_pct as u32 + self.adult_pct as u32 + self.elderly_pct as u32
    }

    /// `(young, adult, elderly)` as fractions in `[0, 1]`.
    pub fn as_fractions(&self) -> (f64, f64, f64) {
        (
            self.young_pct as f64 / 100.0,
            self.adult_pct as f64 / 100.0,
            self.elderly_pct as f64 / 100.0,
        )
    }
}

/// Estimated bucket sizes in millions, each rounded to one decimal on its own.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AgeGroupEstimate {
    pub young: f64,
    pub adult: f64,
    pub elderly: f64,
}

impl AgeGroupEstimate {
    pub fn total(&self) -> f64 {
        self.young + self.adult + self.elderly
    }

    /// Bucket label and value, in display order.
    pub fn buckets(&self) -> [(&'static str, f64); 3] {
        [
            ("0–20 Years", self.young),
            ("21–64 Years", self.adult),
            ("65+ Years", self.elderly),
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CurvePoint {
    pub age: u32,
    pub density: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AgeDistributionCurve {
    pub points: Vec<CurvePoint>,
}

impl AgeDistributionCurve {
    pub fn max_density(&self) -> f64 {
        self.points.iter().map(|p| p.density).fold(0.0, f64::max)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YearInsight {
    pub year: i32,
    pub population: u64,
    pub population_millions: f64,
    pub ratios: AgeGroupRatios,
    pub estimate: AgeGroupEstimate,
}

/// 單一輸出檔案
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub name: String,
    pub content: Vec<u8>,
}

impl Artifact {
    pub fn new(name: impl Into<String>, content: impl Into<Vec<u8>>) -> Self {
        Self {
            name: name.into(),
            content: content.into(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct DashboardBundle {
    pub selected_year: i32,
    pub artifacts: Vec<Artifact>,
}

impl DashboardBundle {
    pub fn artifact(&self, name: &str) -> Option<&Artifact> {
        self.artifacts.iter().find(|a| a.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(year: i32, population: u64) -> PopulationRecord {
        PopulationRecord { year, population }
    }

    #[test]
    fn test_years_are_sorted_and_distinct() {
        let data = YearlyPopulation::from_records(vec![
            record(2001, 3),
            record(1999, 1),
            record(2000, 2),
            record(1999, 99),
        ])
        .unwrap();

        assert_eq!(data.years(), vec![1999, 2000, 2001]);
        assert_eq!(data.first_year(), 1999);
        assert_eq!(data.latest_year(), 2001);
        // First occurrence wins
        assert_eq!(data.population_for(1999).unwrap(), 1);
    }

    #[test]
    fn test_missing_year_reports_range() {
        let data = YearlyPopulation::from_records(vec![record(1960, 1), record(1970, 2)]).unwrap();

        match data.population_for(1965) {
            Err(InsightError::YearNotFound { year, first, last }) => {
                assert_eq!((year, first, last), (1965, 1960, 1970));
            }
            other => panic!("unexpected result: {:?}", other),
        }
    }

    #[test]
    fn test_empty_dataset_is_rejected() {
        let result = YearlyPopulation::from_records(Vec::new());
        assert!(matches!(result, Err(InsightError::EmptyDataset)));
    }

    #[test]
    fn test_ratios_as_fractions() {
        let ratios = AgeGroupRatios::new(38, 56, 6);
        assert_eq!(ratios.total_pct(), 100);
        assert_eq!(ratios.as_fractions(), (0.38, 0.56, 0.06));
    }
}

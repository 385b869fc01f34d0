//! Population insight calculator.
//!
//! Everything here is a pure function: the age-group ratios depend only on the
//! year, the estimate only on the population and the ratios, and the age
//! distribution curve on nothing at all.

use crate::domain::model::{
    AgeDistributionCurve, AgeGroupEstimate, AgeGroupRatios, CurvePoint, YearInsight,
    YearlyPopulation,
};
use crate::utils::error::Result;

pub const MAX_AGE: u32 = 100;

/// Age of the dashed reference marker on the distribution chart.
pub const MEDIAN_AGE_MARKER: u32 = 28;

const PERSONS_PER_MILLION: f64 = 1_000_000.0;

/// Static year bands: `(last year of band, ratios)`. Years after the last band
/// use [`LATEST_RATIOS`].
const RATIO_BANDS: [(i32, AgeGroupRatios); 3] = [
    (1979, AgeGroupRatios::new(45, 50, 5)),
    (1999, AgeGroupRatios::new(42, 53, 5)),
    (2010, AgeGroupRatios::new(38, 56, 6)),
];

const LATEST_RATIOS: AgeGroupRatios = AgeGroupRatios::new(36, 57, 7);

pub fn age_group_ratios(year: i32) -> AgeGroupRatios {
    RATIO_BANDS
        .iter()
        .find(|(last_year, _)| year <= *last_year)
        .map(|(_, ratios)| *ratios)
        .unwrap_or(LATEST_RATIOS)
}

/// One decimal place, exact halves go to the even neighbour (223.25 -> 223.2).
fn round_one_decimal(value: f64) -> f64 {
    (value * 10.0).round_ties_even() / 10.0
}

pub fn population_in_millions(population: u64) -> f64 {
    population as f64 / PERSONS_PER_MILLION
}

/// Splits a population into the three buckets, in millions.
///
/// Each bucket is rounded on its own; the rounded buckets are not adjusted to
/// add back up to the rounded total.
pub fn estimate_age_groups(population: u64, ratios: &AgeGroupRatios) -> AgeGroupEstimate {
    let pop_million = population_in_millions(population);
    let (young, adult, elderly) = ratios.as_fractions();

    AgeGroupEstimate {
        young: round_one_decimal(pop_million * young),
        adult: round_one_decimal(pop_million * adult),
        elderly: round_one_decimal(pop_million * elderly),
    }
}

/// Illustrative relative density at `age`, never negative.
pub fn relative_density(age: u32) -> f64 {
    let age = age as f64;
    let value = if age <= 20.0 {
        25.0 - 0.3 * (age - 15.0).abs()
    } else if age <= 64.0 {
        30.0 - 0.4 * (age - 30.0).abs()
    } else {
        10.0 - 0.2 * (age - 70.0).abs()
    };
    value.max(0.0)
}

pub fn age_distribution_curve() -> AgeDistributionCurve {
    AgeDistributionCurve {
        points: (0..=MAX_AGE)
            .map(|age| CurvePoint {
                age,
                density: relative_density(age),
            })
            .collect(),
    }
}

pub fn compute_insight(data: &YearlyPopulation, year: i32) -> Result<YearInsight> {
    let population = data.population_for(year)?;
    let ratios = age_group_ratios(year);
    let estimate = estimate_age_groups(population, &ratios);

    tracing::debug!(
        "Year {}: population={}, buckets={:?}",
        year,
        population,
        estimate
    );

    Ok(YearInsight {
        year,
        population,
        population_millions: population_in_millions(population),
        ratios,
        estimate,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::PopulationRecord;

    fn approx_eq(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_ratio_bands_and_boundaries() {
        assert_eq!(age_group_ratios(1960), AgeGroupRatios::new(45, 50, 5));
        assert_eq!(age_group_ratios(1979), AgeGroupRatios::new(45, 50, 5));
        assert_eq!(age_group_ratios(1980), AgeGroupRatios::new(42, 53, 5));
        assert_eq!(age_group_ratios(1999), AgeGroupRatios::new(42, 53, 5));
        assert_eq!(age_group_ratios(2000), AgeGroupRatios::new(38, 56, 6));
        assert_eq!(age_group_ratios(2010), AgeGroupRatios::new(38, 56, 6));
        assert_eq!(age_group_ratios(2011), AgeGroupRatios::new(36, 57, 7));
        assert_eq!(age_group_ratios(2023), AgeGroupRatios::new(36, 57, 7));
    }

    #[test]
    fn test_estimate_for_year_2000() {
        let ratios = age_group_ratios(2000);
        let estimate = estimate_age_groups(1_059_633_675, &ratios);

        assert_eq!(estimate.young, 402.7);
        assert_eq!(estimate.adult, 593.4);
        assert_eq!(estimate.elderly, 63.6);
    }

    #[test]
    fn test_estimate_is_not_renormalised() {
        // 1.05 Mn split 45/50/5 rounds to 0.5 + 0.5 + 0.1 = 1.1
        let estimate = estimate_age_groups(1_050_000, &age_group_ratios(1970));
        assert_eq!(estimate.young, 0.5);
        assert_eq!(estimate.adult, 0.5);
        assert_eq!(estimate.elderly, 0.1);
        assert!(approx_eq(estimate.total(), 1.1));
    }

    #[test]
    fn test_exact_halves_round_to_even() {
        // 446.5 Mn * 0.50 = 223.25 exactly
        let estimate = estimate_age_groups(446_500_000, &age_group_ratios(1970));
        assert_eq!(estimate.adult, 223.2);

        // 1005 Mn * 0.05 lands on 50.25
        let estimate = estimate_age_groups(1_005_000_000, &age_group_ratios(1995));
        assert_eq!(estimate.elderly, 50.2);

        assert_eq!(round_one_decimal(0.25), 0.2);
        assert_eq!(round_one_decimal(0.75), 0.8);
        assert_eq!(round_one_decimal(402.6608), 402.7);
    }

    #[test]
    fn test_curve_branch_peaks() {
        assert!(approx_eq(relative_density(15), 25.0));
        assert!(approx_eq(relative_density(30), 30.0));
        assert!(approx_eq(relative_density(70), 10.0));
    }

    #[test]
    fn test_curve_branch_boundaries() {
        // 20 is still in the young branch, 21 in the adult one
        assert!(approx_eq(relative_density(20), 23.5));
        assert!(approx_eq(relative_density(21), 26.4));
        assert!(approx_eq(relative_density(64), 16.4));
        assert!(approx_eq(relative_density(65), 9.0));
    }

    #[test]
    fn test_curve_covers_all_ages() {
        let curve = age_distribution_curve();
        assert_eq!(curve.points.len(), 101);
        assert_eq!(curve.points.first().map(|p| p.age), Some(0));
        assert_eq!(curve.points.last().map(|p| p.age), Some(100));
        assert!(approx_eq(curve.max_density(), 30.0));
    }

    #[test]
    fn test_compute_insight() {
        let data = YearlyPopulation::from_records(vec![PopulationRecord {
            year: 2000,
            population: 1_059_633_675,
        }])
        .unwrap();

        let insight = compute_insight(&data, 2000).unwrap();
        assert_eq!(insight.population, 1_059_633_675);
        assert!(approx_eq(insight.population_millions, 1059.633675));
        assert_eq!(insight.ratios, AgeGroupRatios::new(38, 56, 6));

        assert!(compute_insight(&data, 2001).is_err());
    }
}

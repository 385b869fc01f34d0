use population_insights::core::insight::{
    age_distribution_curve, age_group_ratios, compute_insight, estimate_age_groups,
    relative_density, MAX_AGE,
};
use population_insights::domain::model::{PopulationRecord, YearlyPopulation};

/// Roughly India-shaped growth from 1960 to 2023.
fn synthetic_dataset() -> YearlyPopulation {
    let records = (1960..=2023).map(|year| {
        let offset = (year - 1960) as u64;
        PopulationRecord {
            year,
            population: 445_954_579 + offset * 15_713_457 + (offset * offset * 7_919) % 1_000_003,
        }
    });
    YearlyPopulation::from_records(records).unwrap()
}

#[test]
fn test_ratios_sum_to_one_for_every_year() {
    for year in synthetic_dataset().years() {
        let ratios = age_group_ratios(year);
        assert_eq!(ratios.total_pct(), 100, "year {}", year);

        let (young, adult, elderly) = ratios.as_fractions();
        for ratio in [young, adult, elderly] {
            assert!((0.0..=1.0).contains(&ratio));
        }
    }
}

#[test]
fn test_rounded_buckets_stay_within_tolerance() {
    let data = synthetic_dataset();
    for year in data.years() {
        let insight = compute_insight(&data, year).unwrap();
        let diff = (insight.estimate.total() - insight.population_millions).abs();
        assert!(
            diff <= 0.3 + 1e-9,
            "year {}: buckets {:?} vs total {}",
            year,
            insight.estimate,
            insight.population_millions
        );
    }
}

#[test]
fn test_small_populations_stay_within_tolerance() {
    for population in (0..5_000_000u64).step_by(12_345) {
        for year in [1970, 1990, 2005, 2020] {
            let estimate = estimate_age_groups(population, &age_group_ratios(year));
            let diff = (estimate.total() - population as f64 / 1_000_000.0).abs();
            assert!(diff <= 0.3 + 1e-9, "population {} year {}", population, year);
        }
    }
}

#[test]
fn test_curve_is_non_negative() {
    for age in 0..=MAX_AGE {
        assert!(relative_density(age) >= 0.0, "age {}", age);
    }
    assert!(age_distribution_curve()
        .points
        .iter()
        .all(|p| p.density >= 0.0));
}

#[test]
fn test_curve_is_constant_across_calls() {
    let first = age_distribution_curve();
    let data = synthetic_dataset();
    let _ = compute_insight(&data, 1999).unwrap();
    let second = age_distribution_curve();

    assert_eq!(first, second);
}

#[test]
fn test_documented_example_year_2000() {
    let estimate = estimate_age_groups(1_059_633_675, &age_group_ratios(2000));
    assert_eq!((estimate.young, estimate.adult, estimate.elderly), (402.7, 593.4, 63.6));
}

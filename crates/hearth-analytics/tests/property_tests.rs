//! Property-based tests for analytics invariants.
//!
//! These tests verify key mathematical properties that should always hold:
//! - Grouped sums are independent of row order
//! - Pearson correlation is symmetric and shift-invariant
//! - The family score is the maximum of its rows' scores
//! - The legacy formula reproduces `raw * 100` exactly
//! - The normalized formula stays within [0, 100]

use approx::assert_relative_eq;
use hearth_analytics::prelude::*;
use hearth_core::prelude::*;

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

/// Deterministic pseudo-random values from a seed and an index.
fn simple_hash(seed: u64, i: u64) -> u64 {
    let mut x = seed.wrapping_mul(0x9e3779b97f4a7c15).wrapping_add(i);
    x ^= x >> 30;
    x = x.wrapping_mul(0xbf58476d1ce4e5b9);
    x ^= x >> 27;
    x
}

/// Generates a dataset with N rows spread over a handful of families.
fn generate_dataset(n: usize, seed: u64) -> Dataset {
    let categories = [
        "Travel",
        "Entertainment",
        "Groceries",
        "Utilities",
        "Food",
        "Healthcare",
        "Education",
    ];

    let mut records = Vec::with_capacity(n);
    for i in 0..n {
        let hash = simple_hash(seed, i as u64);
        let family = hash % 7;
        let member = hash % 3;

        let income = 2000.0 + (hash % 8000) as f64; // 2000-9999, never zero
        let expenses = 500.0 + (hash % 2500) as f64; // 500-2999, never zero
        let amount = ((hash % 40000) as f64 / 100.0) - 50.0; // -50.00 to 349.99

        let record = Record::builder()
            .family_id(format!("FAM{:03}", family))
            .member_id(format!("FAM{:03}-M{}", family, member))
            .category(categories[hash as usize % categories.len()])
            .amount(amount)
            .income(income)
            .monthly_expenses(expenses)
            .savings((hash % 5000) as f64)
            .loan_payments((hash % 900) as f64)
            .credit_card_spending((hash % 1200) as f64)
            .financial_goals_met((hash % 101) as f64)
            .build()
            .unwrap();
        records.push(record);
    }

    Dataset::from_records(records).unwrap()
}

/// Deterministically permutes rows, keyed on the seed.
fn shuffled(dataset: &Dataset, seed: u64) -> Dataset {
    let mut records: Vec<Record> = dataset.records().to_vec();
    let n = records.len();
    for i in (1..n).rev() {
        let j = (simple_hash(seed, i as u64) as usize) % (i + 1);
        records.swap(i, j);
    }
    Dataset::from_records(records).unwrap()
}

fn sorted_totals<K: Ord + Clone>(rows: Vec<(K, f64)>) -> Vec<(K, f64)> {
    let mut rows = rows;
    rows.sort_by(|a, b| a.0.cmp(&b.0));
    rows
}

// =============================================================================
// PROPERTY: GROUPED SUMS ARE ORDER-INDEPENDENT
// =============================================================================

#[test]
fn property_family_sums_survive_shuffling() {
    for seed in 0..10 {
        for size in [3, 10, 25, 50, 100] {
            let dataset = generate_dataset(size, seed);
            let reshuffled = shuffled(&dataset, seed ^ 0xdead);

            let original = sorted_totals(
                family_spending(&dataset)
                    .into_iter()
                    .map(|row| (row.family_id, row.total_amount))
                    .collect(),
            );
            let permuted = sorted_totals(
                family_spending(&reshuffled)
                    .into_iter()
                    .map(|row| (row.family_id, row.total_amount))
                    .collect(),
            );

            assert_eq!(original.len(), permuted.len());
            for ((key_a, sum_a), (key_b, sum_b)) in original.iter().zip(&permuted) {
                assert_eq!(key_a, key_b);
                assert_relative_eq!(*sum_a, *sum_b, epsilon = 1e-9);
            }
        }
    }
}

#[test]
fn property_member_and_category_sums_survive_shuffling() {
    for seed in 0..5 {
        let dataset = generate_dataset(60, seed);
        let reshuffled = shuffled(&dataset, seed.wrapping_add(99));

        let members_a = sorted_totals(
            member_spending(&dataset)
                .into_iter()
                .map(|row| (row.member_id, row.total_amount))
                .collect(),
        );
        let members_b = sorted_totals(
            member_spending(&reshuffled)
                .into_iter()
                .map(|row| (row.member_id, row.total_amount))
                .collect(),
        );
        for ((key_a, sum_a), (key_b, sum_b)) in members_a.iter().zip(&members_b) {
            assert_eq!(key_a, key_b);
            assert_relative_eq!(*sum_a, *sum_b, epsilon = 1e-9);
        }

        let categories_a = sorted_totals(
            category_spending_totals(&dataset)
                .into_iter()
                .map(|row| (row.category, row.total_amount))
                .collect(),
        );
        let categories_b = sorted_totals(
            category_spending_totals(&reshuffled)
                .into_iter()
                .map(|row| (row.category, row.total_amount))
                .collect(),
        );
        for ((key_a, sum_a), (key_b, sum_b)) in categories_a.iter().zip(&categories_b) {
            assert_eq!(key_a, key_b);
            assert_relative_eq!(*sum_a, *sum_b, epsilon = 1e-9);
        }
    }
}

// =============================================================================
// PROPERTY: CORRELATION IS SYMMETRIC AND SHIFT-INVARIANT
// =============================================================================

#[test]
fn property_correlation_is_symmetric() {
    for seed in 0..10 {
        let n = 20 + (seed as usize % 30);
        let xs: Vec<f64> = (0..n)
            .map(|i| (simple_hash(seed, i as u64) % 10000) as f64 / 100.0)
            .collect();
        let ys: Vec<f64> = (0..n)
            .map(|i| (simple_hash(seed ^ 0xbeef, i as u64) % 10000) as f64 / 100.0)
            .collect();

        let xy = pearson("x", &xs, "y", &ys).unwrap();
        let yx = pearson("y", &ys, "x", &xs).unwrap();
        assert_relative_eq!(xy, yx, epsilon = 1e-12);
        assert!(xy >= -1.0 - 1e-12 && xy <= 1.0 + 1e-12);
    }
}

#[test]
fn property_correlation_is_shift_invariant() {
    for seed in 0..10 {
        let xs: Vec<f64> = (0..40)
            .map(|i| (simple_hash(seed, i) % 5000) as f64 / 50.0)
            .collect();
        let ys: Vec<f64> = (0..40)
            .map(|i| (simple_hash(seed ^ 7, i) % 5000) as f64 / 50.0)
            .collect();
        let shifted: Vec<f64> = xs.iter().map(|x| x + 1000.0).collect();

        let base = pearson("x", &xs, "y", &ys).unwrap();
        let moved = pearson("x", &shifted, "y", &ys).unwrap();
        assert_relative_eq!(base, moved, epsilon = 1e-9);
    }
}

// =============================================================================
// PROPERTY: FAMILY SCORE IS THE MAXIMUM OF ITS ROWS
// =============================================================================

#[test]
fn property_family_score_is_row_maximum() {
    for seed in 0..10 {
        let dataset = generate_dataset(50, seed);
        let scored = ScoredDataset::compute(&dataset, &ScoreConfig::default()).unwrap();
        let report = health_scores(&scored);

        for family in &report.family_scores {
            let expected = scored
                .rows()
                .iter()
                .filter(|row| row.record.family_id == family.family_id)
                .map(|row| row.financial_health_score)
                .fold(f64::NEG_INFINITY, f64::max);
            assert_relative_eq!(family.max_score, expected, epsilon = 1e-12);
        }

        assert_eq!(report.row_scores.len(), dataset.len());
    }
}

// =============================================================================
// PROPERTY: THE LEGACY FORMULA IS `raw * 100`, TERM FOR TERM
// =============================================================================

#[test]
fn property_legacy_score_matches_reference_formula() {
    for seed in 0..10 {
        let dataset = generate_dataset(40, seed);
        let spending = category_spending(&dataset, CategoryScope::Global);
        let scored = ScoredDataset::compute(&dataset, &ScoreConfig::default()).unwrap();

        for (row, (record, &spent)) in scored
            .rows()
            .iter()
            .zip(dataset.iter().zip(&spending))
        {
            let savings_ratio = record.savings / record.income;
            let expenses_ratio = record.monthly_expenses / record.income;
            let loan_ratio = record.loan_payments / record.income;
            let credit_ratio = record.credit_card_spending / record.income;
            let category_ratio = spent / record.monthly_expenses;
            let goals_met = record.financial_goals_met / 100.0;

            let raw = savings_ratio * 0.2
                + (1.0 - expenses_ratio * 0.2)
                + (1.0 - loan_ratio * 0.2)
                + (1.0 - credit_ratio * 0.1)
                + (1.0 - category_ratio * 0.1)
                + goals_met * 0.2;

            assert_relative_eq!(
                row.financial_health_score,
                raw * 100.0,
                epsilon = 1e-9
            );
        }
    }
}

// =============================================================================
// PROPERTY: THE NORMALIZED FORMULA IS BOUNDED
// =============================================================================

#[test]
fn property_normalized_score_stays_in_range() {
    let config = ScoreConfig::new().with_formula(ScoreFormula::Normalized);
    for seed in 0..10 {
        let dataset = generate_dataset(50, seed);
        let scored = ScoredDataset::compute(&dataset, &config).unwrap();
        for row in scored.rows() {
            let score = row.financial_health_score;
            assert!(
                (0.0..=100.0).contains(&score),
                "normalized score {} out of range for seed {}",
                score,
                seed
            );
        }
    }
}

//! The composite financial health score.
//!
//! Scoring happens in two steps: the travel/entertainment spending column
//! is derived for every row, then each row is mapped through the weighted
//! formula. Both steps are configured by [`ScoreConfig`].

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::debug;

use hearth_core::{Category, Dataset, Record};

use crate::error::{AnalyticsError, AnalyticsResult};

/// How far the travel/entertainment spending sum reaches.
///
/// The original tool summed `Amount` over the *entire* table for each
/// matching category and broadcast that total onto every matching row.
/// That behavior is reproduced by [`CategoryScope::Global`], the default.
/// The per-group variants restrict the sum to rows of the same family or
/// member, which is the more plausible intent; they are opt-in and never
/// substituted silently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CategoryScope {
    /// Sum over all rows of the matching category (reproduces the original).
    #[default]
    Global,
    /// Sum over rows of the matching category within the same family.
    PerFamily,
    /// Sum over rows of the matching category within the same member.
    PerMember,
}

/// Which scoring arithmetic to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreFormula {
    /// The original weighted formula, reproduced term for term.
    ///
    /// Four of the six terms are `1 - ratio * partial_weight`, so the
    /// constant `1` terms dominate and the result is not bounded to
    /// [0, 100]. Scores above 100 are normal under this formula.
    #[default]
    Legacy,
    /// A bounded variant: each ratio is clamped to [0, 1] and weighted as
    /// a whole, so the result lies in [0, 100].
    Normalized,
}

/// Configuration for scoring and the derived spending column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ScoreConfig {
    /// Scope of the travel/entertainment spending sum.
    #[serde(default)]
    pub category_scope: CategoryScope,

    /// Scoring arithmetic.
    #[serde(default)]
    pub formula: ScoreFormula,
}

impl ScoreConfig {
    /// Creates a config with default settings (global scope, legacy formula).
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the category spending scope.
    #[must_use]
    pub fn with_scope(mut self, scope: CategoryScope) -> Self {
        self.category_scope = scope;
        self
    }

    /// Sets the scoring formula.
    #[must_use]
    pub fn with_formula(mut self, formula: ScoreFormula) -> Self {
        self.formula = formula;
        self
    }
}

fn scope_key(record: &Record, scope: CategoryScope) -> &str {
    match scope {
        CategoryScope::Global => "",
        CategoryScope::PerFamily => record.family_id.as_str(),
        CategoryScope::PerMember => record.member_id.as_str(),
    }
}

/// Derives the travel/entertainment spending column.
///
/// For a row whose category is Travel or Entertainment, the value is the
/// sum of `Amount` over all rows sharing that category within the
/// configured scope; 0 for every other row.
pub fn category_spending(dataset: &Dataset, scope: CategoryScope) -> Vec<f64> {
    let mut totals: HashMap<(&str, &Category), f64> = HashMap::new();
    for record in dataset {
        if record.category.is_travel_entertainment() {
            *totals
                .entry((scope_key(record, scope), &record.category))
                .or_insert(0.0) += record.amount;
        }
    }

    dataset
        .iter()
        .map(|record| {
            if record.category.is_travel_entertainment() {
                totals[&(scope_key(record, scope), &record.category)]
            } else {
                0.0
            }
        })
        .collect()
}

/// Scores one record given its derived travel/entertainment spending.
///
/// `row` is the 1-based row number, used only for error context. Rows with
/// zero income or zero monthly expenses are rejected rather than allowed
/// to push infinity or NaN into an aggregate.
pub fn score_record(
    record: &Record,
    category_spending: f64,
    formula: ScoreFormula,
    row: usize,
) -> AnalyticsResult<f64> {
    if record.income == 0.0 {
        return Err(AnalyticsError::score_undefined(row, "Income is zero"));
    }
    if record.monthly_expenses == 0.0 {
        return Err(AnalyticsError::score_undefined(
            row,
            "Monthly Expenses is zero",
        ));
    }

    let savings_ratio = record.savings / record.income;
    let expenses_ratio = record.monthly_expenses / record.income;
    let loan_ratio = record.loan_payments / record.income;
    let credit_ratio = record.credit_card_spending / record.income;
    let category_ratio = category_spending / record.monthly_expenses;
    let goals_met = record.financial_goals_met / 100.0;

    let raw = match formula {
        ScoreFormula::Legacy => {
            savings_ratio * 0.2
                + (1.0 - expenses_ratio * 0.2)
                + (1.0 - loan_ratio * 0.2)
                + (1.0 - credit_ratio * 0.1)
                + (1.0 - category_ratio * 0.1)
                + goals_met * 0.2
        }
        ScoreFormula::Normalized => {
            let clamp = |ratio: f64| ratio.clamp(0.0, 1.0);
            clamp(savings_ratio) * 0.2
                + (1.0 - clamp(expenses_ratio)) * 0.2
                + (1.0 - clamp(loan_ratio)) * 0.2
                + (1.0 - clamp(credit_ratio)) * 0.1
                + (1.0 - clamp(category_ratio)) * 0.1
                + clamp(goals_met) * 0.2
        }
    };

    Ok(raw * 100.0)
}

/// One augmented row: the base record plus the two derived columns.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredRow {
    /// The base record.
    #[serde(flatten)]
    pub record: Record,

    /// Derived travel/entertainment spending.
    #[serde(rename = "Travel/Entertainment Spending")]
    pub travel_entertainment_spending: f64,

    /// The composite financial health score.
    #[serde(rename = "Financial Health Score")]
    pub financial_health_score: f64,
}

/// The augmented table: every base row plus the two derived columns.
///
/// Computed once per load and reused by every view for the rest of the
/// session; the snapshot format persists it verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredDataset {
    rows: Vec<ScoredRow>,
}

impl ScoredDataset {
    /// Scores every row of a dataset.
    ///
    /// Fails on the first row whose score is undefined; no partial score
    /// columns are produced.
    pub fn compute(dataset: &Dataset, config: &ScoreConfig) -> AnalyticsResult<Self> {
        let spending = category_spending(dataset, config.category_scope);

        let mut rows = Vec::with_capacity(dataset.len());
        for (index, (record, &spent)) in dataset.iter().zip(&spending).enumerate() {
            let score = score_record(record, spent, config.formula, index + 1)?;
            rows.push(ScoredRow {
                record: record.clone(),
                travel_entertainment_spending: spent,
                financial_health_score: score,
            });
        }

        debug!(
            rows = rows.len(),
            scope = ?config.category_scope,
            formula = ?config.formula,
            "scored dataset"
        );
        Ok(Self { rows })
    }

    /// Rebuilds a scored dataset from already-augmented rows (snapshot read).
    pub fn from_rows(rows: Vec<ScoredRow>) -> AnalyticsResult<Self> {
        if rows.is_empty() {
            return Err(hearth_core::HearthError::EmptyDataset.into());
        }
        Ok(Self { rows })
    }

    /// The augmented rows in load order.
    #[must_use]
    pub fn rows(&self) -> &[ScoredRow] {
        &self.rows
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether there are no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The full per-row score column.
    #[must_use]
    pub fn score_column(&self) -> Vec<f64> {
        self.rows
            .iter()
            .map(|row| row.financial_health_score)
            .collect()
    }

    /// Reassembles the base dataset (for views that only need base columns).
    pub fn base_dataset(&self) -> AnalyticsResult<Dataset> {
        let records = self.rows.iter().map(|row| row.record.clone()).collect();
        Ok(Dataset::from_records(records)?)
    }
}

//! Ready-to-render view results.
//!
//! One function per view the presentation layer can request. Every result
//! is a plain serializable struct; rendering (tables, charts, navigation)
//! happens elsewhere.

use serde::{Deserialize, Serialize};

use hearth_core::{Category, Dataset, FamilyId, MemberId, NumericColumn};

use crate::aggregate::sum_by;
use crate::correlation::column_correlation;
use crate::error::{AnalyticsError, AnalyticsResult};
use crate::score::ScoredDataset;

/// Total spending for one family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilySpendingRow {
    /// The family.
    pub family_id: FamilyId,
    /// Sum of `Amount` over the family's records.
    pub total_amount: f64,
}

/// Total spending for one member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberSpendingRow {
    /// The member.
    pub member_id: MemberId,
    /// Sum of `Amount` over the member's records.
    pub total_amount: f64,
}

/// Total spending for one category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategorySpendingRow {
    /// The spending category.
    pub category: Category,
    /// Sum of `Amount` over the category's records.
    pub total_amount: f64,
}

/// One correlation between two named columns.
///
/// `coefficient` is `None` when the coefficient is undefined (a constant
/// column); `note` then carries the reason so the renderer can say so
/// instead of printing a number.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationResult {
    /// Header name of the first column.
    pub x: String,
    /// Header name of the second column.
    pub y: String,
    /// The Pearson coefficient, if defined.
    pub coefficient: Option<f64>,
    /// Why the coefficient is undefined, if it is.
    pub note: Option<String>,
}

/// The correlations view: two fixed metric pairs plus the underlying
/// columns for scatter rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CorrelationReport {
    /// Income vs monthly expenses.
    pub income_vs_expenses: CorrelationResult,
    /// Savings vs credit card spending.
    pub savings_vs_credit: CorrelationResult,
    /// The `Income` column in row order.
    pub income: Vec<f64>,
    /// The `Monthly Expenses` column in row order.
    pub monthly_expenses: Vec<f64>,
    /// The `Savings` column in row order.
    pub savings: Vec<f64>,
    /// The `Credit Card Spending` column in row order.
    pub credit_card_spending: Vec<f64>,
}

/// Maximum health score for one family.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyScoreRow {
    /// The family.
    pub family_id: FamilyId,
    /// The best per-row score observed for the family.
    pub max_score: f64,
}

/// The health score view: per-family maxima plus the full per-row score
/// column for histogram rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthReport {
    /// One row per family, first-appearance order.
    pub family_scores: Vec<FamilyScoreRow>,
    /// Every row's score, in row order.
    pub row_scores: Vec<f64>,
}

/// Family-level spending totals.
pub fn family_spending(dataset: &Dataset) -> Vec<FamilySpendingRow> {
    sum_by(
        dataset.records(),
        |record| record.family_id.clone(),
        |record| record.amount,
    )
    .into_iter()
    .map(|(family_id, total_amount)| FamilySpendingRow {
        family_id,
        total_amount,
    })
    .collect()
}

/// Member-level spending totals.
pub fn member_spending(dataset: &Dataset) -> Vec<MemberSpendingRow> {
    sum_by(
        dataset.records(),
        |record| record.member_id.clone(),
        |record| record.amount,
    )
    .into_iter()
    .map(|(member_id, total_amount)| MemberSpendingRow {
        member_id,
        total_amount,
    })
    .collect()
}

/// Category-level spending totals.
pub fn category_spending_totals(dataset: &Dataset) -> Vec<CategorySpendingRow> {
    sum_by(
        dataset.records(),
        |record| record.category.clone(),
        |record| record.amount,
    )
    .into_iter()
    .map(|(category, total_amount)| CategorySpendingRow {
        category,
        total_amount,
    })
    .collect()
}

fn correlate(dataset: &Dataset, x: NumericColumn, y: NumericColumn) -> AnalyticsResult<CorrelationResult> {
    match column_correlation(dataset, x, y) {
        Ok(coefficient) => Ok(CorrelationResult {
            x: x.header().to_string(),
            y: y.header().to_string(),
            coefficient: Some(coefficient),
            note: None,
        }),
        Err(err @ AnalyticsError::ZeroVariance { .. }) => Ok(CorrelationResult {
            x: x.header().to_string(),
            y: y.header().to_string(),
            coefficient: None,
            note: Some(err.to_string()),
        }),
        Err(other) => Err(other),
    }
}

/// The correlations view over the two fixed metric pairs.
///
/// A zero-variance column makes that pair's coefficient undefined (carried
/// in the result, with the reason); any other failure aborts the view.
pub fn metric_correlations(dataset: &Dataset) -> AnalyticsResult<CorrelationReport> {
    let income_vs_expenses =
        correlate(dataset, NumericColumn::Income, NumericColumn::MonthlyExpenses)?;
    let savings_vs_credit = correlate(
        dataset,
        NumericColumn::Savings,
        NumericColumn::CreditCardSpending,
    )?;

    Ok(CorrelationReport {
        income_vs_expenses,
        savings_vs_credit,
        income: dataset.column(NumericColumn::Income),
        monthly_expenses: dataset.column(NumericColumn::MonthlyExpenses),
        savings: dataset.column(NumericColumn::Savings),
        credit_card_spending: dataset.column(NumericColumn::CreditCardSpending),
    })
}

/// The health score view: the maximum per-row score within each family.
///
/// The maximum is a deliberate choice (the family's best observed
/// standing), not an average.
pub fn health_scores(scored: &ScoredDataset) -> HealthReport {
    let mut family_scores: Vec<FamilyScoreRow> = Vec::new();
    for row in scored.rows() {
        let score = row.financial_health_score;
        match family_scores
            .iter_mut()
            .find(|entry| entry.family_id == row.record.family_id)
        {
            Some(entry) => {
                if score > entry.max_score {
                    entry.max_score = score;
                }
            }
            None => family_scores.push(FamilyScoreRow {
                family_id: row.record.family_id.clone(),
                max_score: score,
            }),
        }
    }

    HealthReport {
        family_scores,
        row_scores: scored.score_column(),
    }
}

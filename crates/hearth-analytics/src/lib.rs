//! # Hearth Analytics
//!
//! Aggregation and scoring engine for the hearth family financial analytics
//! toolkit.
//!
//! This crate provides:
//!
//! - **Aggregation**: Ordered grouped sums over any grouping key
//! - **Correlation**: Pearson coefficients between named numeric columns
//! - **Scoring**: The composite financial health score with its derived
//!   travel/entertainment spending column
//! - **Views**: The five ready-to-render results requested by the
//!   presentation layer
//!
//! ## Design Philosophy
//!
//! - **Pure Functions**: All inputs explicit, no I/O, no caching
//! - **Single Pass**: Each view is computed in one pass over the rows
//! - **Undefined Means Error**: Division by zero and zero-variance inputs
//!   surface as typed errors, never as NaN in an aggregate
//!
//! ## Example
//!
//! ```rust
//! use hearth_analytics::prelude::*;
//! use hearth_core::prelude::*;
//!
//! # fn sample_record() -> Record {
//! #     Record::builder()
//! #         .family_id("FAM001").member_id("FAM001-M1").category("Groceries")
//! #         .amount(120.0).income(4000.0).monthly_expenses(2200.0)
//! #         .savings(600.0).loan_payments(300.0).credit_card_spending(250.0)
//! #         .financial_goals_met(75.0).build().unwrap()
//! # }
//! let dataset = Dataset::from_records(vec![sample_record()]).unwrap();
//! let scored = ScoredDataset::compute(&dataset, &ScoreConfig::default()).unwrap();
//! let report = health_scores(&scored);
//! assert_eq!(report.family_scores.len(), 1);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]
#![allow(clippy::uninlined_format_args)]
#![allow(clippy::cast_precision_loss)]
#![allow(clippy::similar_names)]
#![allow(clippy::float_cmp)]

pub mod aggregate;
pub mod correlation;
pub mod error;
pub mod score;
pub mod views;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::aggregate::sum_by;
    pub use crate::correlation::{column_correlation, pearson};
    pub use crate::error::{AnalyticsError, AnalyticsResult};
    pub use crate::score::{
        category_spending, score_record, CategoryScope, ScoreConfig, ScoreFormula, ScoredDataset,
        ScoredRow,
    };
    pub use crate::views::{
        category_spending_totals, family_spending, health_scores, member_spending,
        metric_correlations, CategorySpendingRow, CorrelationReport, CorrelationResult,
        FamilyScoreRow, FamilySpendingRow, HealthReport, MemberSpendingRow,
    };
}

// Re-export commonly used items at crate root
pub use error::{AnalyticsError, AnalyticsResult};
pub use score::{CategoryScope, ScoreConfig, ScoreFormula, ScoredDataset};
pub use views::{
    category_spending_totals, family_spending, health_scores, member_spending, metric_correlations,
};

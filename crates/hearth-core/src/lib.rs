//! # Hearth Core
//!
//! Core types and abstractions for the hearth family financial analytics
//! toolkit.
//!
//! This crate provides the foundational building blocks used throughout
//! hearth:
//!
//! - **Types**: Domain-specific types like [`FamilyId`], [`MemberId`],
//!   [`Category`], and the [`Record`] row schema
//! - **Dataset**: The owned, immutable in-memory table with row and column
//!   access
//! - **Errors**: The [`HearthError`] type shared across the workspace
//!
//! ## Design Philosophy
//!
//! - **Type Safety**: Newtypes prevent mixing family and member identifiers
//! - **Explicit Over Implicit**: A fixed ten-column schema, no dynamic rows
//! - **Load Once**: A [`Dataset`] is built once and only read afterwards
//!
//! ## Example
//!
//! ```rust
//! use hearth_core::prelude::*;
//!
//! let record = Record::builder()
//!     .family_id("FAM001")
//!     .member_id("FAM001-M1")
//!     .category(Category::Groceries)
//!     .amount(120.50)
//!     .income(4000.0)
//!     .monthly_expenses(2200.0)
//!     .savings(600.0)
//!     .loan_payments(300.0)
//!     .credit_card_spending(250.0)
//!     .financial_goals_met(75.0)
//!     .build()
//!     .unwrap();
//!
//! let dataset = Dataset::from_records(vec![record]).unwrap();
//! assert_eq!(dataset.len(), 1);
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
#![allow(clippy::return_self_not_must_use)]

pub mod dataset;
pub mod error;
pub mod types;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::dataset::{Dataset, NumericColumn};
    pub use crate::error::{HearthError, HearthResult};
    pub use crate::types::{Category, FamilyId, MemberId, Record, RecordBuilder};
}

// Re-export commonly used types at crate root
pub use dataset::{Dataset, NumericColumn};
pub use error::{HearthError, HearthResult};
pub use types::{Category, FamilyId, MemberId, Record};

//! The in-memory dataset table.
//!
//! A [`Dataset`] is an owned, immutable collection of [`Record`] rows with
//! row access (by index or iteration) and typed column access via
//! [`NumericColumn`]. It is built once by a loader and then only read.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{HearthError, HearthResult};
use crate::types::Record;

/// The numeric columns of the record schema.
///
/// Used wherever a column is selected by name at runtime, e.g. picking the
/// two sides of a correlation. Identifier and category columns are not
/// numeric and are addressed through [`Record`] fields directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NumericColumn {
    /// The `Amount` column.
    Amount,
    /// The `Income` column.
    Income,
    /// The `Monthly Expenses` column.
    MonthlyExpenses,
    /// The `Savings` column.
    Savings,
    /// The `Loan Payments` column.
    LoanPayments,
    /// The `Credit Card Spending` column.
    CreditCardSpending,
    /// The `Financial Goals Met (%)` column.
    FinancialGoalsMet,
}

impl NumericColumn {
    /// Every numeric column, in schema order.
    pub const ALL: [NumericColumn; 7] = [
        NumericColumn::Amount,
        NumericColumn::Income,
        NumericColumn::MonthlyExpenses,
        NumericColumn::Savings,
        NumericColumn::LoanPayments,
        NumericColumn::CreditCardSpending,
        NumericColumn::FinancialGoalsMet,
    ];

    /// The header name as it appears in the source table.
    #[must_use]
    pub fn header(&self) -> &'static str {
        match self {
            NumericColumn::Amount => "Amount",
            NumericColumn::Income => "Income",
            NumericColumn::MonthlyExpenses => "Monthly Expenses",
            NumericColumn::Savings => "Savings",
            NumericColumn::LoanPayments => "Loan Payments",
            NumericColumn::CreditCardSpending => "Credit Card Spending",
            NumericColumn::FinancialGoalsMet => "Financial Goals Met (%)",
        }
    }

    /// Resolves a header name to a column.
    ///
    /// Fails with [`HearthError::ColumnNotFound`] for anything that is not
    /// one of the seven numeric headers.
    pub fn from_header(header: &str) -> HearthResult<Self> {
        Self::ALL
            .into_iter()
            .find(|column| column.header() == header)
            .ok_or_else(|| HearthError::column_not_found(header))
    }

    /// Reads this column's value from a record.
    #[must_use]
    pub fn value(&self, record: &Record) -> f64 {
        match self {
            NumericColumn::Amount => record.amount,
            NumericColumn::Income => record.income,
            NumericColumn::MonthlyExpenses => record.monthly_expenses,
            NumericColumn::Savings => record.savings,
            NumericColumn::LoanPayments => record.loan_payments,
            NumericColumn::CreditCardSpending => record.credit_card_spending,
            NumericColumn::FinancialGoalsMet => record.financial_goals_met,
        }
    }
}

impl fmt::Display for NumericColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.header())
    }
}

/// An owned, immutable table of transaction records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    /// Builds a dataset from records, validating each row.
    ///
    /// Fails with [`HearthError::EmptyDataset`] when no records are given
    /// and with [`HearthError::InvalidRecord`] (carrying the 1-based row
    /// number) on the first non-finite numeric value.
    pub fn from_records(records: Vec<Record>) -> HearthResult<Self> {
        if records.is_empty() {
            return Err(HearthError::EmptyDataset);
        }
        for (index, record) in records.iter().enumerate() {
            if let Some(column) = record.first_non_finite() {
                return Err(HearthError::invalid_record(
                    index + 1,
                    format!("{} is not finite", column),
                ));
            }
        }
        Ok(Self { records })
    }

    /// The records in load order.
    #[must_use]
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset holds no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Row access by 0-based index.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Iterates over rows in load order.
    pub fn iter(&self) -> std::slice::Iter<'_, Record> {
        self.records.iter()
    }

    /// Materializes one numeric column in row order.
    #[must_use]
    pub fn column(&self, column: NumericColumn) -> Vec<f64> {
        self.records
            .iter()
            .map(|record| column.value(record))
            .collect()
    }
}

impl<'a> IntoIterator for &'a Dataset {
    type Item = &'a Record;
    type IntoIter = std::slice::Iter<'a, Record>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

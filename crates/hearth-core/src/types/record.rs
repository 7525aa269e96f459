//! The transaction record schema.

use serde::{Deserialize, Serialize};

use crate::error::{HearthError, HearthResult};
use crate::types::{Category, FamilyId, MemberId};

/// One row of the financial transactions table.
///
/// The serde field names match the source table's header row exactly, so a
/// CSV export or a JSON snapshot deserializes straight into this type.
/// The per-row financial context columns (`income`, `savings`, ...) are a
/// restatement of the owning member's standing, repeated on every row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    /// Owning family.
    #[serde(rename = "Family ID")]
    pub family_id: FamilyId,

    /// Owning member within the family.
    #[serde(rename = "Member ID")]
    pub member_id: MemberId,

    /// Spending classification of this transaction.
    #[serde(rename = "Category")]
    pub category: Category,

    /// Value of this single transaction.
    #[serde(rename = "Amount")]
    pub amount: f64,

    /// The member's income.
    #[serde(rename = "Income")]
    pub income: f64,

    /// The member's total monthly expenses.
    #[serde(rename = "Monthly Expenses")]
    pub monthly_expenses: f64,

    /// The member's savings.
    #[serde(rename = "Savings")]
    pub savings: f64,

    /// The member's monthly loan payments.
    #[serde(rename = "Loan Payments")]
    pub loan_payments: f64,

    /// The member's credit card spending.
    #[serde(rename = "Credit Card Spending")]
    pub credit_card_spending: f64,

    /// Percentage of financial goals met, on a 0-100 scale.
    #[serde(rename = "Financial Goals Met (%)")]
    pub financial_goals_met: f64,
}

impl Record {
    /// Starts building a record.
    #[must_use]
    pub fn builder() -> RecordBuilder {
        RecordBuilder::default()
    }

    /// The numeric columns of this record, paired with their header names.
    #[must_use]
    pub fn numeric_fields(&self) -> [(&'static str, f64); 7] {
        [
            ("Amount", self.amount),
            ("Income", self.income),
            ("Monthly Expenses", self.monthly_expenses),
            ("Savings", self.savings),
            ("Loan Payments", self.loan_payments),
            ("Credit Card Spending", self.credit_card_spending),
            ("Financial Goals Met (%)", self.financial_goals_met),
        ]
    }

    /// Checks every numeric column for a finite value.
    ///
    /// Returns the header name of the first non-finite column, if any.
    #[must_use]
    pub fn first_non_finite(&self) -> Option<&'static str> {
        self.numeric_fields()
            .into_iter()
            .find(|(_, value)| !value.is_finite())
            .map(|(name, _)| name)
    }
}

/// Builder for [`Record`].
#[derive(Debug, Clone, Default)]
pub struct RecordBuilder {
    family_id: Option<FamilyId>,
    member_id: Option<MemberId>,
    category: Option<Category>,
    amount: Option<f64>,
    income: Option<f64>,
    monthly_expenses: Option<f64>,
    savings: Option<f64>,
    loan_payments: Option<f64>,
    credit_card_spending: Option<f64>,
    financial_goals_met: Option<f64>,
}

impl RecordBuilder {
    /// Sets the family ID.
    pub fn family_id(mut self, id: impl Into<FamilyId>) -> Self {
        self.family_id = Some(id.into());
        self
    }

    /// Sets the member ID.
    pub fn member_id(mut self, id: impl Into<MemberId>) -> Self {
        self.member_id = Some(id.into());
        self
    }

    /// Sets the transaction category.
    pub fn category(mut self, category: impl Into<Category>) -> Self {
        self.category = Some(category.into());
        self
    }

    /// Sets the transaction amount.
    pub fn amount(mut self, amount: f64) -> Self {
        self.amount = Some(amount);
        self
    }

    /// Sets the member's income.
    pub fn income(mut self, income: f64) -> Self {
        self.income = Some(income);
        self
    }

    /// Sets the member's monthly expenses.
    pub fn monthly_expenses(mut self, expenses: f64) -> Self {
        self.monthly_expenses = Some(expenses);
        self
    }

    /// Sets the member's savings.
    pub fn savings(mut self, savings: f64) -> Self {
        self.savings = Some(savings);
        self
    }

    /// Sets the member's loan payments.
    pub fn loan_payments(mut self, payments: f64) -> Self {
        self.loan_payments = Some(payments);
        self
    }

    /// Sets the member's credit card spending.
    pub fn credit_card_spending(mut self, spending: f64) -> Self {
        self.credit_card_spending = Some(spending);
        self
    }

    /// Sets the percentage of financial goals met (0-100).
    pub fn financial_goals_met(mut self, percent: f64) -> Self {
        self.financial_goals_met = Some(percent);
        self
    }

    /// Builds the record, failing on any missing field.
    pub fn build(self) -> HearthResult<Record> {
        Ok(Record {
            family_id: self
                .family_id
                .ok_or_else(|| HearthError::missing_field("Family ID"))?,
            member_id: self
                .member_id
                .ok_or_else(|| HearthError::missing_field("Member ID"))?,
            category: self
                .category
                .ok_or_else(|| HearthError::missing_field("Category"))?,
            amount: self
                .amount
                .ok_or_else(|| HearthError::missing_field("Amount"))?,
            income: self
                .income
                .ok_or_else(|| HearthError::missing_field("Income"))?,
            monthly_expenses: self
                .monthly_expenses
                .ok_or_else(|| HearthError::missing_field("Monthly Expenses"))?,
            savings: self
                .savings
                .ok_or_else(|| HearthError::missing_field("Savings"))?,
            loan_payments: self
                .loan_payments
                .ok_or_else(|| HearthError::missing_field("Loan Payments"))?,
            credit_card_spending: self
                .credit_card_spending
                .ok_or_else(|| HearthError::missing_field("Credit Card Spending"))?,
            financial_goals_met: self
                .financial_goals_met
                .ok_or_else(|| HearthError::missing_field("Financial Goals Met (%)"))?,
        })
    }
}

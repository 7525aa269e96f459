//! Spending category classification.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Spending categories observed in the source dataset.
///
/// Unknown labels are preserved verbatim in [`Category::Other`] so that a
/// dataset with new categories still loads and aggregates correctly.
#[derive(Debug, Clone, Hash, Eq, PartialEq, Ord, PartialOrd, Serialize, Deserialize)]
#[serde(into = "String", from = "String")]
pub enum Category {
    /// Travel spending.
    Travel,
    /// Entertainment spending.
    Entertainment,
    /// Grocery spending.
    Groceries,
    /// Utility bills.
    Utilities,
    /// Food and dining out.
    Food,
    /// Healthcare spending.
    Healthcare,
    /// Education spending.
    Education,
    /// Any category label not listed above, preserved as-is.
    Other(String),
}

impl Category {
    /// Returns the category label as it appears in the source table.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Category::Travel => "Travel",
            Category::Entertainment => "Entertainment",
            Category::Groceries => "Groceries",
            Category::Utilities => "Utilities",
            Category::Food => "Food",
            Category::Healthcare => "Healthcare",
            Category::Education => "Education",
            Category::Other(label) => label,
        }
    }

    /// Parses a label, falling back to [`Category::Other`] for unknown ones.
    #[must_use]
    pub fn from_label(label: &str) -> Self {
        match label {
            "Travel" => Category::Travel,
            "Entertainment" => Category::Entertainment,
            "Groceries" => Category::Groceries,
            "Utilities" => Category::Utilities,
            "Food" => Category::Food,
            "Healthcare" => Category::Healthcare,
            "Education" => Category::Education,
            other => Category::Other(other.to_string()),
        }
    }

    /// Whether this category counts toward travel/entertainment spending.
    #[must_use]
    pub fn is_travel_entertainment(&self) -> bool {
        matches!(self, Category::Travel | Category::Entertainment)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl From<String> for Category {
    fn from(s: String) -> Self {
        Category::from_label(&s)
    }
}

impl From<&str> for Category {
    fn from(s: &str) -> Self {
        Category::from_label(s)
    }
}

impl From<Category> for String {
    fn from(category: Category) -> Self {
        category.label().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_roundtrip() {
        for label in ["Travel", "Entertainment", "Groceries", "Utilities"] {
            assert_eq!(Category::from_label(label).label(), label);
        }
    }

    #[test]
    fn test_unknown_label_preserved() {
        let category = Category::from_label("Pet Care");
        assert_eq!(category, Category::Other("Pet Care".to_string()));
        assert_eq!(category.label(), "Pet Care");
    }

    #[test]
    fn test_travel_entertainment_flag() {
        assert!(Category::Travel.is_travel_entertainment());
        assert!(Category::Entertainment.is_travel_entertainment());
        assert!(!Category::Groceries.is_travel_entertainment());
        assert!(!Category::Other("Travel Agency".to_string()).is_travel_entertainment());
    }

    #[test]
    fn test_serde_as_plain_string() {
        let json = serde_json::to_string(&Category::Travel).unwrap();
        assert_eq!(json, "\"Travel\"");
        let back: Category = serde_json::from_str("\"Entertainment\"").unwrap();
        assert_eq!(back, Category::Entertainment);
    }
}

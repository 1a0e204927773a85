//! Domain types representing expense categories.

use std::fmt;

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The fixed category labels offered by the expense form, in menu order.
pub static DEFAULT_CATEGORY_LABELS: Lazy<Vec<&'static str>> = Lazy::new(|| {
    vec![
        "Food",
        "Transportation",
        "Housing",
        "Entertainment",
        "Utilities",
        "Others",
    ]
});

/// Categorises an expense for grouping and reporting.
///
/// The set is closed; free-text input lands in [`Category::Custom`] so that
/// aggregation grouping stays well-defined. Label comparison is
/// case-sensitive throughout.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum Category {
    Food,
    Transportation,
    Housing,
    Entertainment,
    Utilities,
    /// The form's catch-all bucket.
    Others,
    /// A user-supplied label outside the fixed set.
    Custom(String),
}

impl Category {
    /// Maps a form label onto the closed set, falling back to a custom entry.
    pub fn from_label(label: impl AsRef<str>) -> Self {
        match label.as_ref() {
            "Food" => Category::Food,
            "Transportation" => Category::Transportation,
            "Housing" => Category::Housing,
            "Entertainment" => Category::Entertainment,
            "Utilities" => Category::Utilities,
            "Others" => Category::Others,
            other => Category::Custom(other.to_string()),
        }
    }

    /// The label used for display and for grouping keys.
    pub fn label(&self) -> &str {
        match self {
            Category::Food => "Food",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Entertainment => "Entertainment",
            Category::Utilities => "Utilities",
            Category::Others => "Others",
            Category::Custom(name) => name.as_str(),
        }
    }

    pub fn is_custom(&self) -> bool {
        matches!(self, Category::Custom(_))
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_round_trip_through_from_label() {
        for label in DEFAULT_CATEGORY_LABELS.iter() {
            let category = Category::from_label(label);
            assert_eq!(category.label(), *label);
            assert!(!category.is_custom());
        }
    }

    #[test]
    fn unknown_labels_become_custom_entries() {
        let category = Category::from_label("Gifts");
        assert_eq!(category, Category::Custom("Gifts".into()));
        assert!(category.is_custom());
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_ne!(Category::from_label("food"), Category::Food);
    }
}

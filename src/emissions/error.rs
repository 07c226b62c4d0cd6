//! Entry validation error types
//!
//! Defines the errors a raw form entry can produce. Quantity text is
//! validated here, at the data-entry boundary, so a non-numeric value can
//! never reach the estimator as NaN.

use thiserror::Error;

use super::factors::Category;

/// Errors that can occur when validating a logged activity entry
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EntryError {
    /// Quantity text does not parse as a finite number
    #[error("{} quantity must be a number, got '{raw}'", .category.label())]
    InvalidQuantity { category: Category, raw: String },

    /// Quantity parsed but is negative
    #[error("{} quantity cannot be negative", .category.label())]
    NegativeQuantity { category: Category },
}

impl EntryError {
    /// The category whose entry failed validation.
    pub fn category(&self) -> Category {
        match self {
            EntryError::InvalidQuantity { category, .. } => *category,
            EntryError::NegativeQuantity { category } => *category,
        }
    }
}

/// Result type alias for entry validation
pub type EntryResult<T> = Result<T, EntryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = EntryError::InvalidQuantity {
            category: Category::Transport,
            raw: "abc".to_string(),
        };
        assert_eq!(err.to_string(), "Transport quantity must be a number, got 'abc'");

        let err = EntryError::NegativeQuantity {
            category: Category::Food,
        };
        assert_eq!(err.to_string(), "Food quantity cannot be negative");
    }

    #[test]
    fn test_error_category() {
        let err = EntryError::NegativeQuantity {
            category: Category::Energy,
        };
        assert_eq!(err.category(), Category::Energy);
    }
}

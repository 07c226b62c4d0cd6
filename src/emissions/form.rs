//! Activity Logger Form State
//!
//! Raw per-category form input and the state machine behind the activity
//! logger dialog. The state machine is plain data so the whole
//! select/edit/calculate cycle can be tested without a DOM.

use super::error::{EntryError, EntryResult};
use super::estimator::estimate;
use super::factors::{Category, Subtype};

/// One category's raw form entry: an optional subtype choice and the
/// quantity text as typed, pending validation.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CategoryEntry {
    pub subtype: Option<Subtype>,
    pub quantity: String,
}

impl CategoryEntry {
    /// True when neither field has been touched.
    pub fn is_empty(&self) -> bool {
        self.subtype.is_none() && self.quantity.trim().is_empty()
    }
}

/// Raw input across all four categories.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ActivityInput {
    entries: [CategoryEntry; 4],
}

impl ActivityInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entry(&self, category: Category) -> &CategoryEntry {
        &self.entries[category.index()]
    }

    pub fn set_subtype(&mut self, category: Category, subtype: Option<Subtype>) {
        self.entries[category.index()].subtype = subtype;
    }

    pub fn set_quantity(&mut self, category: Category, quantity: impl Into<String>) {
        self.entries[category.index()].quantity = quantity.into();
    }

    /// Validate one category's entry.
    ///
    /// Returns `Ok(None)` when either field is missing (the category is
    /// excluded from the sum), `Ok(Some((subtype, quantity)))` when both
    /// are present and the quantity is a finite, non-negative number, and
    /// an error otherwise. A quantity of zero is a valid entry.
    pub fn validated(&self, category: Category) -> EntryResult<Option<(Subtype, f64)>> {
        let entry = self.entry(category);
        let raw = entry.quantity.trim();
        let Some(subtype) = entry.subtype else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }

        let quantity: f64 = raw.parse().map_err(|_| EntryError::InvalidQuantity {
            category,
            raw: raw.to_string(),
        })?;
        if !quantity.is_finite() {
            return Err(EntryError::InvalidQuantity {
                category,
                raw: raw.to_string(),
            });
        }
        if quantity < 0.0 {
            return Err(EntryError::NegativeQuantity { category });
        }

        Ok(Some((subtype, quantity)))
    }
}

/// State machine behind the activity logger dialog.
///
/// Holds the active tab, the raw input, and the last calculated total.
/// The total is cleared on any input mutation, so a stale estimate can
/// never be saved.
#[derive(Clone, Debug, PartialEq)]
pub struct LoggerForm {
    active: Category,
    input: ActivityInput,
    result: Option<f64>,
    error: Option<EntryError>,
}

impl Default for LoggerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl LoggerForm {
    /// Fresh form: transport tab active, all fields empty, no result.
    pub fn new() -> Self {
        Self {
            active: Category::Transport,
            input: ActivityInput::new(),
            result: None,
            error: None,
        }
    }

    pub fn active(&self) -> Category {
        self.active
    }

    pub fn input(&self) -> &ActivityInput {
        &self.input
    }

    /// The last calculated total, if the input has not changed since.
    pub fn result(&self) -> Option<f64> {
        self.result
    }

    /// The validation error from the last calculation attempt, if any.
    pub fn error(&self) -> Option<&EntryError> {
        self.error.as_ref()
    }

    /// Saving requires a calculated, still-valid result.
    pub fn can_save(&self) -> bool {
        self.result.is_some()
    }

    /// Switch the visible tab. Entries and any calculated result are kept.
    pub fn select_category(&mut self, category: Category) {
        self.active = category;
    }

    pub fn set_subtype(&mut self, category: Category, subtype: Option<Subtype>) {
        self.input.set_subtype(category, subtype);
        self.invalidate();
    }

    pub fn set_quantity(&mut self, category: Category, quantity: impl Into<String>) {
        self.input.set_quantity(category, quantity);
        self.invalidate();
    }

    /// Run the estimator over the current input. Stores either the total
    /// or the first validation error; idempotent for unchanged input.
    pub fn calculate(&mut self) {
        match estimate(&self.input) {
            Ok(total) => {
                self.result = Some(total);
                self.error = None;
            }
            Err(err) => {
                self.result = None;
                self.error = Some(err);
            }
        }
    }

    fn invalidate(&mut self) {
        self.result = None;
        self.error = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions::factors::{EnergySource, TransportMode};

    fn car() -> Subtype {
        Subtype::Transport(TransportMode::Car)
    }

    #[test]
    fn test_validated_excludes_partial_entries() {
        let mut input = ActivityInput::new();
        assert_eq!(input.validated(Category::Transport), Ok(None));

        // Subtype without quantity
        input.set_subtype(Category::Transport, Some(car()));
        assert_eq!(input.validated(Category::Transport), Ok(None));

        // Quantity without subtype
        let mut input = ActivityInput::new();
        input.set_quantity(Category::Transport, "12.0");
        assert_eq!(input.validated(Category::Transport), Ok(None));
    }

    #[test]
    fn test_validated_accepts_zero_and_trims_whitespace() {
        let mut input = ActivityInput::new();
        input.set_subtype(Category::Transport, Some(car()));
        input.set_quantity(Category::Transport, " 0 ");
        assert_eq!(input.validated(Category::Transport), Ok(Some((car(), 0.0))));
    }

    #[test]
    fn test_validated_rejects_non_numeric() {
        let mut input = ActivityInput::new();
        input.set_subtype(Category::Transport, Some(car()));
        input.set_quantity(Category::Transport, "15,5");
        assert_eq!(
            input.validated(Category::Transport),
            Err(EntryError::InvalidQuantity {
                category: Category::Transport,
                raw: "15,5".to_string(),
            })
        );
    }

    #[test]
    fn test_validated_rejects_non_finite() {
        let mut input = ActivityInput::new();
        input.set_subtype(Category::Transport, Some(car()));
        input.set_quantity(Category::Transport, "inf");
        assert!(matches!(
            input.validated(Category::Transport),
            Err(EntryError::InvalidQuantity { .. })
        ));

        input.set_quantity(Category::Transport, "NaN");
        assert!(matches!(
            input.validated(Category::Transport),
            Err(EntryError::InvalidQuantity { .. })
        ));
    }

    #[test]
    fn test_validated_rejects_negative() {
        let mut input = ActivityInput::new();
        input.set_subtype(Category::Energy, Some(Subtype::Energy(EnergySource::Gas)));
        input.set_quantity(Category::Energy, "-3");
        assert_eq!(
            input.validated(Category::Energy),
            Err(EntryError::NegativeQuantity {
                category: Category::Energy,
            })
        );
    }

    #[test]
    fn test_form_initial_state() {
        let form = LoggerForm::new();
        assert_eq!(form.active(), Category::Transport);
        assert_eq!(form.result(), None);
        assert!(!form.can_save());
        for category in Category::ALL {
            assert!(form.input().entry(category).is_empty());
        }
    }

    #[test]
    fn test_select_category_changes_only_active_tab() {
        let mut form = LoggerForm::new();
        form.set_subtype(Category::Transport, Some(car()));
        form.set_quantity(Category::Transport, "15.5");
        form.calculate();

        form.select_category(Category::Food);
        assert_eq!(form.active(), Category::Food);
        // Input and result survive a tab switch
        assert_eq!(form.input().entry(Category::Transport).quantity, "15.5");
        assert!(form.result().is_some());
    }

    #[test]
    fn test_calculate_is_idempotent() {
        let mut form = LoggerForm::new();
        form.set_subtype(Category::Transport, Some(car()));
        form.set_quantity(Category::Transport, "15.5");

        form.calculate();
        let first = form.result();
        form.calculate();
        assert_eq!(form.result(), first);
        assert_eq!(first, Some(0.21 * 15.5));
    }

    #[test]
    fn test_mutation_invalidates_result() {
        let mut form = LoggerForm::new();
        form.set_subtype(Category::Transport, Some(car()));
        form.set_quantity(Category::Transport, "10");
        form.calculate();
        assert!(form.can_save());

        form.set_quantity(Category::Transport, "11");
        assert_eq!(form.result(), None);
        assert!(!form.can_save());

        form.calculate();
        assert!(form.can_save());
        form.set_subtype(Category::Transport, Some(Subtype::Transport(TransportMode::Bus)));
        assert_eq!(form.result(), None);
    }

    #[test]
    fn test_calculate_with_invalid_entry_sets_error_not_result() {
        let mut form = LoggerForm::new();
        form.set_subtype(Category::Transport, Some(car()));
        form.set_quantity(Category::Transport, "fast");
        form.calculate();

        assert_eq!(form.result(), None);
        assert!(!form.can_save());
        let err = form.error().expect("validation error");
        assert_eq!(err.category(), Category::Transport);

        // Fixing the field clears the error and allows a clean calculate
        form.set_quantity(Category::Transport, "5");
        assert!(form.error().is_none());
        form.calculate();
        assert_eq!(form.result(), Some(0.21 * 5.0));
    }

    #[test]
    fn test_empty_form_calculates_to_zero() {
        let mut form = LoggerForm::new();
        form.calculate();
        assert_eq!(form.result(), Some(0.0));
        assert!(form.can_save());
    }
}

//! Emission Estimator
//!
//! Pure sum of factor × quantity over the categories with a complete,
//! valid entry.

use super::error::EntryResult;
use super::factors::Category;
use super::form::ActivityInput;

/// Estimate total emissions in kg CO₂e for the given input.
///
/// Categories with a missing subtype or blank quantity contribute
/// nothing; the empty form sums to zero. The first invalid quantity
/// aborts with its field error rather than folding NaN into the total.
pub fn estimate(input: &ActivityInput) -> EntryResult<f64> {
    let mut total = 0.0;
    for category in Category::ALL {
        if let Some((subtype, quantity)) = input.validated(category)? {
            total += subtype.factor() * quantity;
        }
    }
    Ok(total)
}

/// Single display rounding point: two decimals, with unit.
///
/// Both the in-dialog result card and the save confirmation use this,
/// so "3.255" always reads as "3.26 kg CO₂".
pub fn format_kg(total: f64) -> String {
    format!("{total:.2} kg CO₂")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::emissions::error::EntryError;
    use crate::emissions::factors::{
        EnergySource, MealKind, PurchaseKind, Subtype, TransportMode,
    };

    #[test]
    fn test_single_category() {
        let mut input = ActivityInput::new();
        input.set_subtype(
            Category::Transport,
            Some(Subtype::Transport(TransportMode::Car)),
        );
        input.set_quantity(Category::Transport, "15.5");

        let total = estimate(&input).unwrap();
        assert!((total - 3.255).abs() < 1e-9);
    }

    #[test]
    fn test_multiple_categories_sum() {
        let mut input = ActivityInput::new();
        input.set_subtype(
            Category::Energy,
            Some(Subtype::Energy(EnergySource::Electricity)),
        );
        input.set_quantity(Category::Energy, "25.3");
        input.set_subtype(Category::Food, Some(Subtype::Food(MealKind::Vegan)));
        input.set_quantity(Category::Food, "2");

        let total = estimate(&input).unwrap();
        assert!((total - 26.436).abs() < 1e-9);
    }

    #[test]
    fn test_partial_entries_are_excluded_exactly() {
        let mut input = ActivityInput::new();
        input.set_subtype(
            Category::Transport,
            Some(Subtype::Transport(TransportMode::Car)),
        );
        input.set_quantity(Category::Transport, "10");
        // Subtype chosen but no quantity: excluded, does not error
        input.set_subtype(
            Category::Shopping,
            Some(Subtype::Shopping(PurchaseKind::Electronics)),
        );

        assert_eq!(estimate(&input), Ok(0.21 * 10.0));
    }

    #[test]
    fn test_empty_input_sums_to_zero() {
        assert_eq!(estimate(&ActivityInput::new()), Ok(0.0));
    }

    #[test]
    fn test_zero_quantity_contributes_zero() {
        let mut input = ActivityInput::new();
        input.set_subtype(Category::Food, Some(Subtype::Food(MealKind::Meat)));
        input.set_quantity(Category::Food, "0");
        assert_eq!(estimate(&input), Ok(0.0));
    }

    #[test]
    fn test_zero_factor_subtype() {
        let mut input = ActivityInput::new();
        input.set_subtype(
            Category::Transport,
            Some(Subtype::Transport(TransportMode::Bike)),
        );
        input.set_quantity(Category::Transport, "42");
        assert_eq!(estimate(&input), Ok(0.0));
    }

    #[test]
    fn test_invalid_quantity_aborts_with_its_category() {
        let mut input = ActivityInput::new();
        input.set_subtype(
            Category::Transport,
            Some(Subtype::Transport(TransportMode::Car)),
        );
        input.set_quantity(Category::Transport, "10");
        input.set_subtype(Category::Food, Some(Subtype::Food(MealKind::Vegan)));
        input.set_quantity(Category::Food, "two");

        let err = estimate(&input).unwrap_err();
        assert_eq!(
            err,
            EntryError::InvalidQuantity {
                category: Category::Food,
                raw: "two".to_string(),
            }
        );
    }

    #[test]
    fn test_format_kg_two_decimals() {
        assert_eq!(format_kg(0.21 * 15.5), "3.26 kg CO₂");
        assert_eq!(format_kg(0.0), "0.00 kg CO₂");
        assert_eq!(format_kg(26.436), "26.44 kg CO₂");
    }
}

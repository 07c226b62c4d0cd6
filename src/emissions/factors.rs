//! Emission Factor Table
//!
//! Closed enums for the four activity categories and their subtypes,
//! with the kg CO₂-equivalent conversion factor per unit baked into each
//! variant. Keeping the table as match arms over closed enums means an
//! unrepresented category or subtype cannot exist at runtime.

use serde::{Deserialize, Serialize};

/// One of the four activity domains a user can log.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Transport,
    Energy,
    Food,
    Shopping,
}

impl Category {
    /// All categories, in tab order.
    pub const ALL: [Category; 4] = [
        Category::Transport,
        Category::Energy,
        Category::Food,
        Category::Shopping,
    ];

    /// Display label for tabs and error messages.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Transport => "Transport",
            Category::Energy => "Energy",
            Category::Food => "Food",
            Category::Shopping => "Shopping",
        }
    }

    /// Icon shown next to the category label.
    pub fn icon(&self) -> &'static str {
        match self {
            Category::Transport => "🚗",
            Category::Energy => "⚡",
            Category::Food => "🍽️",
            Category::Shopping => "🛍️",
        }
    }

    /// Label for the subtype selector of this category.
    pub fn subtype_label(&self) -> &'static str {
        match self {
            Category::Transport => "Mode of Transport",
            Category::Energy => "Energy Type",
            Category::Food => "Meal Type",
            Category::Shopping => "Category",
        }
    }

    /// Label for the quantity input of this category.
    pub fn quantity_label(&self) -> &'static str {
        match self {
            Category::Transport => "Distance (km)",
            Category::Energy => "Amount",
            Category::Food => "Number of Meals",
            Category::Shopping => "Number of Items",
        }
    }

    /// Placeholder text for the quantity input.
    pub fn quantity_placeholder(&self) -> &'static str {
        match self {
            Category::Transport => "e.g., 15.5",
            Category::Energy => "e.g., 25.3",
            Category::Food => "e.g., 2",
            Category::Shopping => "e.g., 1",
        }
    }

    /// The selectable subtypes for this category.
    pub fn subtypes(&self) -> &'static [Subtype] {
        match self {
            Category::Transport => &TRANSPORT_SUBTYPES,
            Category::Energy => &ENERGY_SUBTYPES,
            Category::Food => &FOOD_SUBTYPES,
            Category::Shopping => &SHOPPING_SUBTYPES,
        }
    }

    /// Position in [`Category::ALL`], used for per-category storage.
    pub(crate) fn index(&self) -> usize {
        match self {
            Category::Transport => 0,
            Category::Energy => 1,
            Category::Food => 2,
            Category::Shopping => 3,
        }
    }
}

/// How a logged distance was travelled. Factors are kg CO₂e per km.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransportMode {
    Car,
    Bus,
    Train,
    Bike,
    Walk,
}

impl TransportMode {
    pub fn factor(&self) -> f64 {
        match self {
            TransportMode::Car => 0.21,
            TransportMode::Bus => 0.089,
            TransportMode::Train => 0.041,
            TransportMode::Bike => 0.0,
            TransportMode::Walk => 0.0,
        }
    }
}

/// Source of logged energy consumption. Units differ per source
/// (kWh, m³, litres), the factor normalizes each to kg CO₂e per unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnergySource {
    Electricity,
    Gas,
    HeatingOil,
}

impl EnergySource {
    pub fn factor(&self) -> f64 {
        match self {
            EnergySource::Electricity => 0.92,
            EnergySource::Gas => 2.04,
            EnergySource::HeatingOil => 2.52,
        }
    }
}

/// Kind of meal logged. Factors are kg CO₂e per meal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MealKind {
    Meat,
    Vegetarian,
    Vegan,
}

impl MealKind {
    pub fn factor(&self) -> f64 {
        match self {
            MealKind::Meat => 7.26,
            MealKind::Vegetarian => 3.81,
            MealKind::Vegan => 1.58,
        }
    }
}

/// Kind of purchase logged. Factors are kg CO₂e per item.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PurchaseKind {
    Clothing,
    Electronics,
    Household,
}

impl PurchaseKind {
    pub fn factor(&self) -> f64 {
        match self {
            PurchaseKind::Clothing => 22.0,
            PurchaseKind::Electronics => 85.0,
            PurchaseKind::Household => 5.0,
        }
    }
}

/// A concrete choice within a category, tagged by its category.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Subtype {
    Transport(TransportMode),
    Energy(EnergySource),
    Food(MealKind),
    Shopping(PurchaseKind),
}

const TRANSPORT_SUBTYPES: [Subtype; 5] = [
    Subtype::Transport(TransportMode::Car),
    Subtype::Transport(TransportMode::Bus),
    Subtype::Transport(TransportMode::Train),
    Subtype::Transport(TransportMode::Bike),
    Subtype::Transport(TransportMode::Walk),
];

const ENERGY_SUBTYPES: [Subtype; 3] = [
    Subtype::Energy(EnergySource::Electricity),
    Subtype::Energy(EnergySource::Gas),
    Subtype::Energy(EnergySource::HeatingOil),
];

const FOOD_SUBTYPES: [Subtype; 3] = [
    Subtype::Food(MealKind::Meat),
    Subtype::Food(MealKind::Vegetarian),
    Subtype::Food(MealKind::Vegan),
];

const SHOPPING_SUBTYPES: [Subtype; 3] = [
    Subtype::Shopping(PurchaseKind::Clothing),
    Subtype::Shopping(PurchaseKind::Electronics),
    Subtype::Shopping(PurchaseKind::Household),
];

impl Subtype {
    /// Which category this subtype belongs to.
    pub fn category(&self) -> Category {
        match self {
            Subtype::Transport(_) => Category::Transport,
            Subtype::Energy(_) => Category::Energy,
            Subtype::Food(_) => Category::Food,
            Subtype::Shopping(_) => Category::Shopping,
        }
    }

    /// Emission factor in kg CO₂e per unit of quantity.
    pub fn factor(&self) -> f64 {
        match self {
            Subtype::Transport(mode) => mode.factor(),
            Subtype::Energy(source) => source.factor(),
            Subtype::Food(kind) => kind.factor(),
            Subtype::Shopping(kind) => kind.factor(),
        }
    }

    /// Stable string value, used for `<select>` option values.
    pub fn as_str(&self) -> &'static str {
        match self {
            Subtype::Transport(TransportMode::Car) => "car",
            Subtype::Transport(TransportMode::Bus) => "bus",
            Subtype::Transport(TransportMode::Train) => "train",
            Subtype::Transport(TransportMode::Bike) => "bike",
            Subtype::Transport(TransportMode::Walk) => "walk",
            Subtype::Energy(EnergySource::Electricity) => "electricity",
            Subtype::Energy(EnergySource::Gas) => "gas",
            Subtype::Energy(EnergySource::HeatingOil) => "heating_oil",
            Subtype::Food(MealKind::Meat) => "meat",
            Subtype::Food(MealKind::Vegetarian) => "vegetarian",
            Subtype::Food(MealKind::Vegan) => "vegan",
            Subtype::Shopping(PurchaseKind::Clothing) => "clothing",
            Subtype::Shopping(PurchaseKind::Electronics) => "electronics",
            Subtype::Shopping(PurchaseKind::Household) => "household",
        }
    }

    /// Parse a `<select>` option value back into a subtype of the given
    /// category. Unknown strings yield `None` rather than a fallback.
    pub fn parse(category: Category, value: &str) -> Option<Subtype> {
        category
            .subtypes()
            .iter()
            .copied()
            .find(|subtype| subtype.as_str() == value)
    }

    /// Display label shown in the subtype selector.
    pub fn label(&self) -> &'static str {
        match self {
            Subtype::Transport(TransportMode::Car) => "🚗 Car",
            Subtype::Transport(TransportMode::Bus) => "🚌 Bus/Public Transport",
            Subtype::Transport(TransportMode::Train) => "🚊 Train",
            Subtype::Transport(TransportMode::Bike) => "🚲 Bicycle",
            Subtype::Transport(TransportMode::Walk) => "🚶 Walking",
            Subtype::Energy(EnergySource::Electricity) => "⚡ Electricity (kWh)",
            Subtype::Energy(EnergySource::Gas) => "🔥 Natural Gas (m³)",
            Subtype::Energy(EnergySource::HeatingOil) => "🛢️ Heating Oil (L)",
            Subtype::Food(MealKind::Meat) => "🥩 Meat-based meals",
            Subtype::Food(MealKind::Vegetarian) => "🥗 Vegetarian meals",
            Subtype::Food(MealKind::Vegan) => "🌱 Vegan meals",
            Subtype::Shopping(PurchaseKind::Clothing) => "👕 Clothing",
            Subtype::Shopping(PurchaseKind::Electronics) => "📱 Electronics",
            Subtype::Shopping(PurchaseKind::Household) => "🏠 Household Items",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factor_table_values() {
        assert_eq!(Subtype::Transport(TransportMode::Car).factor(), 0.21);
        assert_eq!(Subtype::Transport(TransportMode::Walk).factor(), 0.0);
        assert_eq!(Subtype::Energy(EnergySource::Electricity).factor(), 0.92);
        assert_eq!(Subtype::Food(MealKind::Vegan).factor(), 1.58);
        assert_eq!(Subtype::Shopping(PurchaseKind::Electronics).factor(), 85.0);
    }

    #[test]
    fn test_factors_are_non_negative() {
        for category in Category::ALL {
            for subtype in category.subtypes() {
                assert!(subtype.factor() >= 0.0, "{} factor", subtype.as_str());
            }
        }
    }

    #[test]
    fn test_subtypes_belong_to_their_category() {
        for category in Category::ALL {
            for subtype in category.subtypes() {
                assert_eq!(subtype.category(), category);
            }
        }
    }

    #[test]
    fn test_subtype_string_round_trip() {
        for category in Category::ALL {
            for subtype in category.subtypes() {
                let parsed = Subtype::parse(category, subtype.as_str());
                assert_eq!(parsed, Some(*subtype));
            }
        }
    }

    #[test]
    fn test_parse_rejects_unknown_and_cross_category() {
        assert_eq!(Subtype::parse(Category::Transport, "rocket"), None);
        // "car" is not a valid energy source
        assert_eq!(Subtype::parse(Category::Energy, "car"), None);
        assert_eq!(Subtype::parse(Category::Food, ""), None);
    }

    #[test]
    fn test_category_index_matches_all_order() {
        for (i, category) in Category::ALL.iter().enumerate() {
            assert_eq!(category.index(), i);
        }
    }
}

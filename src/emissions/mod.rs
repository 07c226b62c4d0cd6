//! Emission Estimation
//!
//! The domain core: closed category/subtype enums with their emission
//! factors, typed input validation, and the activity-logger state machine.

pub mod error;
pub mod estimator;
pub mod factors;
pub mod form;

pub use error::{EntryError, EntryResult};
pub use estimator::{estimate, format_kg};
pub use factors::{Category, EnergySource, MealKind, PurchaseKind, Subtype, TransportMode};
pub use form::{ActivityInput, CategoryEntry, LoggerForm};

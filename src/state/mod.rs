//! State Management
//!
//! Global reactive state and the static display metrics.

pub mod global;
pub mod metrics;

pub use global::{provide_global_state, GlobalState, ToastContent, UserType};
pub use metrics::{DisplayMetrics, EmissionLevel, DISPLAY_METRICS};

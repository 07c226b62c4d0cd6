//! UI Components
//!
//! Reusable Leptos components for the dashboard.

pub mod activity_logger;
pub mod emission_chart;
pub mod nav;
pub mod summary_card;
pub mod tips;
pub mod toast;

pub use activity_logger::ActivityLogger;
pub use emission_chart::EmissionChart;
pub use nav::Nav;
pub use summary_card::{GoalCard, SummaryCard};
pub use tips::{Achievements, QuickTips};
pub use toast::Toast;

//! Display Metrics
//!
//! The aggregate figures shown on the dashboard. These are presentation
//! constants - there is no persistence layer feeding them from logged
//! activities.

use crate::emissions::Category;

/// Qualitative banding of a daily emission figure.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EmissionLevel {
    Low,
    Moderate,
    High,
}

impl EmissionLevel {
    /// Band a kg CO₂e figure for one day.
    pub fn for_daily_kg(kg: f64) -> Self {
        if kg <= 5.0 {
            EmissionLevel::Low
        } else if kg <= 12.0 {
            EmissionLevel::Moderate
        } else {
            EmissionLevel::High
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            EmissionLevel::Low => "Excellent!",
            EmissionLevel::Moderate => "Good",
            EmissionLevel::High => "Needs Attention",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            EmissionLevel::Low => "bg-green-600 text-white",
            EmissionLevel::Moderate => "bg-yellow-600 text-white",
            EmissionLevel::High => "bg-red-600 text-white",
        }
    }
}

/// Aggregate figures rendered on the dashboard.
#[derive(Clone, Debug, PartialEq)]
pub struct DisplayMetrics {
    pub today_kg: f64,
    pub weekly_kg: f64,
    pub monthly_kg: f64,
    pub goal_kg: f64,
    /// Today's per-category breakdown, in tab order.
    pub breakdown: [(Category, f64); 4],
    /// Last seven days, oldest first.
    pub weekly_trend: [(&'static str, f64); 7],
}

/// The fixed figures this demo renders.
pub const DISPLAY_METRICS: DisplayMetrics = DisplayMetrics {
    today_kg: 8.5,
    weekly_kg: 42.3,
    monthly_kg: 185.7,
    goal_kg: 150.0,
    breakdown: [
        (Category::Transport, 4.2),
        (Category::Energy, 2.8),
        (Category::Food, 1.3),
        (Category::Shopping, 0.2),
    ],
    weekly_trend: [
        ("Mon", 8.1),
        ("Tue", 6.4),
        ("Wed", 7.2),
        ("Thu", 5.8),
        ("Fri", 9.1),
        ("Sat", 4.2),
        ("Sun", 8.5),
    ],
};

impl DisplayMetrics {
    /// Average kg per day over the displayed week.
    pub fn daily_average(&self) -> f64 {
        self.weekly_kg / 7.0
    }

    /// Fraction of the monthly goal consumed, clamped to [0, 1] for the
    /// progress bar.
    pub fn goal_ratio(&self) -> f64 {
        (self.monthly_kg / self.goal_kg).clamp(0.0, 1.0)
    }

    /// Signed distance from the goal; positive means over.
    pub fn over_goal_kg(&self) -> f64 {
        self.monthly_kg - self.goal_kg
    }

    /// Banding of today's figure for the header badge.
    pub fn today_level(&self) -> EmissionLevel {
        EmissionLevel::for_daily_kg(self.today_kg)
    }

    /// Sum of the breakdown entries.
    pub fn breakdown_total(&self) -> f64 {
        self.breakdown.iter().map(|(_, kg)| kg).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emission_level_bands() {
        assert_eq!(EmissionLevel::for_daily_kg(0.0), EmissionLevel::Low);
        assert_eq!(EmissionLevel::for_daily_kg(5.0), EmissionLevel::Low);
        assert_eq!(EmissionLevel::for_daily_kg(8.5), EmissionLevel::Moderate);
        assert_eq!(EmissionLevel::for_daily_kg(12.0), EmissionLevel::Moderate);
        assert_eq!(EmissionLevel::for_daily_kg(12.1), EmissionLevel::High);
    }

    #[test]
    fn test_display_metrics_helpers() {
        let metrics = DISPLAY_METRICS;
        assert!((metrics.daily_average() - 42.3 / 7.0).abs() < 1e-9);
        // Over goal: ratio clamps to 1 and the overshoot is positive
        assert_eq!(metrics.goal_ratio(), 1.0);
        assert!((metrics.over_goal_kg() - 35.7).abs() < 1e-9);
        assert_eq!(metrics.today_level(), EmissionLevel::Moderate);
        assert!((metrics.breakdown_total() - 8.5).abs() < 1e-9);
    }
}

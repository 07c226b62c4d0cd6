//! Global Application State
//!
//! Reactive state management using Leptos signals.

use leptos::*;

/// Display label toggle for the header. Affects labels only, never the
/// calculation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserType {
    Individual,
    Business,
}

impl UserType {
    pub fn label(&self) -> &'static str {
        match self {
            UserType::Individual => "Individual",
            UserType::Business => "Business",
        }
    }

    /// Adjective used in the logger dialog title.
    pub fn activity_label(&self) -> &'static str {
        match self {
            UserType::Individual => "Personal",
            UserType::Business => "Business",
        }
    }
}

/// Title and description of a toast notification.
#[derive(Clone, Debug, PartialEq)]
pub struct ToastContent {
    pub title: String,
    pub description: String,
}

/// Global application state provided to all components
#[derive(Clone)]
pub struct GlobalState {
    /// Header display-label toggle
    pub user_type: RwSignal<UserType>,
    /// Whether the activity logger overlay is open
    pub show_logger: RwSignal<bool>,
    /// Success message (for toasts)
    pub success: RwSignal<Option<ToastContent>>,
    /// Destructive message (for toasts)
    pub error: RwSignal<Option<ToastContent>>,
}

/// Provide global state to the component tree
pub fn provide_global_state() {
    let state = GlobalState {
        user_type: create_rw_signal(UserType::Individual),
        show_logger: create_rw_signal(false),
        success: create_rw_signal(None),
        error: create_rw_signal(None),
    };

    provide_context(state);
}

impl GlobalState {
    /// Show a success toast (auto-clears after timeout)
    pub fn show_success(&self, title: &str, description: &str) {
        self.success.set(Some(ToastContent {
            title: title.to_string(),
            description: description.to_string(),
        }));

        let success_signal = self.success;
        gloo_timers::callback::Timeout::new(3000, move || {
            success_signal.set(None);
        })
        .forget();
    }

    /// Show a destructive toast (auto-clears after timeout)
    pub fn show_error(&self, title: &str, description: &str) {
        self.error.set(Some(ToastContent {
            title: title.to_string(),
            description: description.to_string(),
        }));

        let error_signal = self.error;
        gloo_timers::callback::Timeout::new(5000, move || {
            error_signal.set(None);
        })
        .forget();
    }

    pub fn open_logger(&self) {
        self.show_logger.set(true);
    }

    pub fn close_logger(&self) {
        self.show_logger.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_type_labels() {
        assert_eq!(UserType::Individual.label(), "Individual");
        assert_eq!(UserType::Business.activity_label(), "Business");
        assert_eq!(UserType::Individual.activity_label(), "Personal");
    }
}

//! Toast Notification Component
//!
//! Shows success and destructive messages with title and description.

use leptos::*;

use crate::state::global::{GlobalState, ToastContent};

/// Toast notification container
#[component]
pub fn Toast() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <div class="fixed bottom-4 right-4 z-50 space-y-2">
            // Success toast
            {move || {
                state.success.get().map(|content| view! {
                    <ToastMessage content=content variant=ToastVariant::Success />
                })
            }}

            // Destructive toast
            {move || {
                state.error.get().map(|content| view! {
                    <ToastMessage content=content variant=ToastVariant::Destructive />
                })
            }}
        </div>
    }
}

#[derive(Clone, Copy)]
enum ToastVariant {
    Success,
    Destructive,
}

#[component]
fn ToastMessage(content: ToastContent, variant: ToastVariant) -> impl IntoView {
    let (icon, bg_class) = match variant {
        ToastVariant::Success => ("✓", "bg-green-600"),
        ToastVariant::Destructive => ("✕", "bg-red-600"),
    };

    view! {
        <div class=format!(
            "flex items-start space-x-3 {} text-white px-4 py-3 rounded-lg shadow-lg \
             transform transition-all duration-300 ease-out animate-slide-in",
            bg_class
        )>
            <span class="text-lg">{icon}</span>
            <div>
                <div class="text-sm font-semibold">{content.title}</div>
                <div class="text-sm opacity-90">{content.description}</div>
            </div>
        </div>
    }
}

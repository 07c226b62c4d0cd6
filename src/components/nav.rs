//! Navigation Component
//!
//! Header bar with brand, user-type toggle and the log-activity button.

use leptos::*;
use leptos_router::*;

use crate::state::global::{GlobalState, UserType};

/// Navigation header component
#[component]
pub fn Nav() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    view! {
        <nav class="bg-gray-800 border-b border-gray-700">
            <div class="container mx-auto px-4">
                <div class="flex items-center justify-between h-16">
                    // Logo and brand
                    <A href="/" class="flex items-center space-x-3">
                        <span class="text-2xl">"🌱"</span>
                        <div>
                            <span class="text-xl font-bold text-white">"EcoTracker"</span>
                            <p class="text-xs text-gray-400">"Your carbon footprint companion"</p>
                        </div>
                    </A>

                    <div class="flex items-center space-x-3">
                        // User type toggle (labels only, never the numbers)
                        <div class="flex bg-gray-700 rounded-lg p-1">
                            <UserTypeButton target=UserType::Individual icon="👤" />
                            <UserTypeButton target=UserType::Business icon="🏢" />
                        </div>

                        <button
                            on:click=move |_| state.open_logger()
                            class="px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg
                                   font-medium transition-colors"
                        >
                            "Log Activity"
                        </button>
                    </div>
                </div>
            </div>
        </nav>
    }
}

/// One side of the individual/business toggle
#[component]
fn UserTypeButton(target: UserType, icon: &'static str) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let user_type = state.user_type;

    view! {
        <button
            on:click=move |_| user_type.set(target)
            class=move || {
                let base = "px-3 py-1 rounded-md text-sm font-medium transition-colors";
                if user_type.get() == target {
                    format!("{} bg-gray-600 text-white", base)
                } else {
                    format!("{} text-gray-400 hover:text-white", base)
                }
            }
        >
            {icon}
            " "
            {target.label()}
        </button>
    }
}

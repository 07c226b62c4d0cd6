//! Achievements and Tips Components
//!
//! Fixed achievement badges and daily tips shown in the dashboard
//! sidebar.

use leptos::*;

struct Achievement {
    icon: &'static str,
    title: &'static str,
    detail: &'static str,
}

const ACHIEVEMENTS: [Achievement; 2] = [
    Achievement {
        icon: "🌿",
        title: "Green Week",
        detail: "7 days under target",
    },
    Achievement {
        icon: "📉",
        title: "Steady Reducer",
        detail: "Reduced by 20% this month",
    },
];

struct Tip {
    title: &'static str,
    detail: &'static str,
}

const TIPS: [Tip; 2] = [
    Tip {
        title: "🚲 Try cycling today",
        detail: "Could save 2.3 kg CO₂ vs driving",
    },
    Tip {
        title: "🌱 Plant-based lunch",
        detail: "Reduce meal emissions by 70%",
    },
];

/// Achievement badges card
#[component]
pub fn Achievements() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4 flex items-center space-x-2">
                <span>"🏆"</span>
                <span>"Achievements"</span>
            </h2>
            <div class="space-y-3">
                {ACHIEVEMENTS.iter().map(|achievement| view! {
                    <div class="flex items-center space-x-3 p-3 rounded-lg bg-green-900/40">
                        <span class="text-2xl">{achievement.icon}</span>
                        <div>
                            <div class="font-medium">{achievement.title}</div>
                            <div class="text-sm text-gray-400">{achievement.detail}</div>
                        </div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

/// Daily tips card
#[component]
pub fn QuickTips() -> impl IntoView {
    view! {
        <section class="bg-gray-800 rounded-xl p-6">
            <h2 class="text-xl font-semibold mb-4">"💡 Today's Tips"</h2>
            <div class="space-y-4">
                {TIPS.iter().map(|tip| view! {
                    <div class="p-3 rounded-lg bg-gray-700/60 border-l-4 border-green-500">
                        <div class="font-medium text-sm">{tip.title}</div>
                        <div class="text-xs text-gray-400 mt-1">{tip.detail}</div>
                    </div>
                }).collect_view()}
            </div>
        </section>
    }
}

//! Summary Card Components
//!
//! Dashboard cards for the aggregate emission figures and goal progress.

use leptos::*;

use crate::state::metrics::DisplayMetrics;

/// Card showing one aggregate kg CO₂ figure with a footer line.
#[component]
pub fn SummaryCard(
    #[prop(into)]
    title: String,
    value_kg: f64,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="text-sm text-gray-400">{title}</div>
            <div class="flex items-baseline space-x-2 mt-2">
                <span class="text-3xl font-bold">{format!("{value_kg:.1}")}</span>
                <span class="text-lg text-gray-400">"kg CO₂"</span>
            </div>
            <div class="mt-2 text-sm">{children()}</div>
        </div>
    }
}

/// Card showing monthly goal progress with a bar and over/under note.
#[component]
pub fn GoalCard(metrics: DisplayMetrics) -> impl IntoView {
    let percent = (metrics.goal_ratio() * 100.0) as i32;
    let over_kg = metrics.over_goal_kg();
    let goal_note = if over_kg > 0.0 {
        format!("{over_kg:.1} kg over goal")
    } else {
        format!("{:.1} kg under goal", -over_kg)
    };
    let bar_class = if over_kg > 0.0 {
        "bg-red-500"
    } else {
        "bg-green-500"
    };

    view! {
        <div class="bg-gray-800 rounded-lg p-4 border border-gray-700 hover:border-gray-600 transition">
            <div class="text-sm text-gray-400 flex items-center space-x-1">
                <span>"🎯"</span>
                <span>"Monthly Goal"</span>
            </div>
            <div class="space-y-3 mt-2">
                <div class="flex justify-between text-sm">
                    <span>"Progress"</span>
                    <span class="font-medium">{format!("{percent}%")}</span>
                </div>
                <div class="w-full bg-gray-600 rounded-full h-2">
                    <div
                        class=format!("{bar_class} rounded-full h-2 transition-all")
                        style=format!("width: {percent}%")
                    />
                </div>
                <div class="text-xs text-gray-400">{goal_note}</div>
            </div>
        </div>
    }
}

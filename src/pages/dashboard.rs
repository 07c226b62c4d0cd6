//! Dashboard Page
//!
//! Main view: aggregate figures, today's breakdown, charts, achievements
//! and tips, plus the activity logger overlay.

use leptos::*;

use crate::components::{Achievements, ActivityLogger, EmissionChart, GoalCard, QuickTips, SummaryCard};
use crate::state::global::GlobalState;
use crate::state::metrics::DISPLAY_METRICS;

/// Dashboard page component
#[component]
pub fn Dashboard() -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");
    let metrics = DISPLAY_METRICS;
    let level = metrics.today_level();

    let today = chrono::Local::now().format("%A, %B %d").to_string();

    // Precomputed footer lines so the card children own plain strings
    let avg_line = format!("Avg: {:.1} kg/day", metrics.daily_average());
    let goal_line = format!("Goal: {:.0} kg", metrics.goal_kg);
    let breakdown = metrics.breakdown;

    let state_for_overlay = state.clone();

    view! {
        <div class="space-y-8">
            // Page header
            <div class="flex items-center justify-between">
                <div class="flex items-center space-x-3">
                    <h1 class="text-3xl font-bold">"Today's Impact"</h1>
                    <span class=format!(
                        "px-3 py-1 rounded-full text-sm font-medium {}",
                        level.badge_class()
                    )>
                        {level.label()}
                    </span>
                </div>
                <div class="text-sm text-gray-400">{today}</div>
            </div>

            // Summary cards
            <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-6">
                <SummaryCard title="Today" value_kg=metrics.today_kg>
                    <span class="text-green-400 font-medium">"↓ -12% from yesterday"</span>
                </SummaryCard>
                <SummaryCard title="This Week" value_kg=metrics.weekly_kg>
                    <span class="text-gray-400">{avg_line}</span>
                </SummaryCard>
                <SummaryCard title="This Month" value_kg=metrics.monthly_kg>
                    <span class="text-gray-400">{goal_line}</span>
                </SummaryCard>
                <GoalCard metrics=metrics.clone() />
            </div>

            // Main content grid
            <div class="grid grid-cols-1 lg:grid-cols-3 gap-8">
                // Activity breakdown and charts
                <section class="lg:col-span-2 bg-gray-800 rounded-xl p-6">
                    <h2 class="text-xl font-semibold mb-4">"Today's Activities"</h2>
                    <div class="space-y-3">
                        {breakdown.into_iter().map(|(category, kg)| view! {
                            <div class="flex items-center justify-between p-4 rounded-lg bg-gray-700/50">
                                <div class="flex items-center space-x-3">
                                    <span class="text-2xl">{category.icon()}</span>
                                    <span class="font-medium">{category.label()}</span>
                                </div>
                                <div class="text-right">
                                    <div class="font-bold text-lg">{format!("{kg:.1}")}</div>
                                    <div class="text-sm text-gray-400">"kg CO₂"</div>
                                </div>
                            </div>
                        }).collect_view()}
                    </div>

                    <EmissionChart metrics=metrics.clone() />
                </section>

                // Sidebar: achievements and tips
                <div class="space-y-6">
                    <Achievements />
                    <QuickTips />
                </div>
            </div>

            // Activity logger overlay
            {move || {
                state_for_overlay.show_logger.get().then(|| {
                    let state_for_close = state_for_overlay.clone();
                    view! {
                        <ActivityLogger on_close=move |_| state_for_close.close_logger() />
                    }
                })
            }}
        </div>
    }
}

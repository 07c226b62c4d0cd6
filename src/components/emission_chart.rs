//! Emission Chart Component
//!
//! Today's breakdown pie and the weekly trend bars, drawn on HTML5
//! Canvas.

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::emissions::Category;
use crate::state::metrics::DisplayMetrics;

/// Fill colors per category, in tab order.
const CATEGORY_COLORS: [&str; 4] = [
    "#FF9800", // Transport (orange)
    "#FFC107", // Energy (amber)
    "#4CAF50", // Food (green)
    "#9C27B0", // Shopping (purple)
];

fn category_color(category: Category) -> &'static str {
    CATEGORY_COLORS[category.index()]
}

/// Breakdown pie and weekly trend bar charts side by side.
#[component]
pub fn EmissionChart(metrics: DisplayMetrics) -> impl IntoView {
    let pie_ref = create_node_ref::<html::Canvas>();
    let bars_ref = create_node_ref::<html::Canvas>();

    // Draw once the canvases are mounted. The data is fixed, so the
    // effect only re-runs on mount.
    let metrics_for_draw = metrics.clone();
    create_effect(move |_| {
        if let Some(canvas) = pie_ref.get() {
            draw_pie(&canvas, &metrics_for_draw);
        }
        if let Some(canvas) = bars_ref.get() {
            draw_trend(&canvas, &metrics_for_draw);
        }
    });

    view! {
        <div class="grid grid-cols-1 lg:grid-cols-2 gap-6 mt-8">
            // Pie chart - today's breakdown
            <div class="bg-gray-700/30 rounded-lg p-4">
                <h3 class="text-lg font-semibold mb-4 text-center">"Today's Breakdown"</h3>
                <canvas
                    node_ref=pie_ref
                    width="400"
                    height="240"
                    class="w-full rounded-lg"
                />
                <PieLegend metrics=metrics.clone() />
            </div>

            // Bar chart - weekly trend
            <div class="bg-gray-700/30 rounded-lg p-4">
                <h3 class="text-lg font-semibold mb-4 text-center">"Weekly Trend"</h3>
                <canvas
                    node_ref=bars_ref
                    width="400"
                    height="240"
                    class="w-full rounded-lg"
                />
            </div>
        </div>
    }
}

/// Legend under the pie showing category colors and values
#[component]
fn PieLegend(metrics: DisplayMetrics) -> impl IntoView {
    view! {
        <div class="flex justify-center flex-wrap gap-4 mt-4">
            {metrics.breakdown.into_iter().map(|(category, kg)| view! {
                <div class="flex items-center space-x-2">
                    <div
                        class="w-3 h-3 rounded-full"
                        style=format!("background-color: {}", category_color(category))
                    />
                    <span class="text-sm text-gray-300">
                        {format!("{} {kg:.1} kg", category.label())}
                    </span>
                </div>
            }).collect_view()}
        </div>
    }
}

fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    match canvas.get_context("2d") {
        Ok(Some(ctx)) => ctx.dyn_into::<CanvasRenderingContext2d>().ok(),
        _ => {
            web_sys::console::warn_1(&"canvas 2d context unavailable".into());
            None
        }
    }
}

/// Draw today's category breakdown as a pie with percentage labels
fn draw_pie(canvas: &HtmlCanvasElement, metrics: &DisplayMetrics) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into()); // gray-800
    ctx.fill_rect(0.0, 0.0, width, height);

    let total = metrics.breakdown_total();
    if total <= 0.0 {
        ctx.set_fill_style(&"#6b7280".into());
        ctx.set_font("16px sans-serif");
        let _ = ctx.fill_text("No emissions today", width / 2.0 - 70.0, height / 2.0);
        return;
    }

    let cx = width / 2.0;
    let cy = height / 2.0;
    let radius = (height / 2.0) - 20.0;

    // Slices, starting at 12 o'clock
    let mut start_angle = -std::f64::consts::FRAC_PI_2;
    for (category, kg) in metrics.breakdown {
        let fraction = kg / total;
        let end_angle = start_angle + fraction * std::f64::consts::PI * 2.0;

        ctx.set_fill_style(&category_color(category).into());
        ctx.begin_path();
        ctx.move_to(cx, cy);
        let _ = ctx.arc(cx, cy, radius, start_angle, end_angle);
        ctx.close_path();
        ctx.fill();

        // Percentage label at the slice midpoint
        if fraction >= 0.05 {
            let mid_angle = (start_angle + end_angle) / 2.0;
            let lx = cx + mid_angle.cos() * radius * 0.65;
            let ly = cy + mid_angle.sin() * radius * 0.65;
            ctx.set_fill_style(&"#ffffff".into());
            ctx.set_font("12px sans-serif");
            let _ = ctx.fill_text(&format!("{:.0}%", fraction * 100.0), lx - 10.0, ly + 4.0);
        }

        start_angle = end_angle;
    }
}

/// Draw the 7-day trend as bars with grid lines and weekday labels
fn draw_trend(canvas: &HtmlCanvasElement, metrics: &DisplayMetrics) {
    let Some(ctx) = context_2d(canvas) else {
        return;
    };

    let width = canvas.width() as f64;
    let height = canvas.height() as f64;

    // Margins
    let margin_left = 40.0;
    let margin_right = 10.0;
    let margin_top = 10.0;
    let margin_bottom = 30.0;

    let chart_width = width - margin_left - margin_right;
    let chart_height = height - margin_top - margin_bottom;

    // Clear canvas
    ctx.set_fill_style(&"#1f2937".into());
    ctx.fill_rect(0.0, 0.0, width, height);

    let max = metrics
        .weekly_trend
        .iter()
        .map(|(_, kg)| *kg)
        .fold(0.0_f64, f64::max)
        .max(1.0)
        * 1.1;

    // Horizontal grid lines with y-axis labels
    ctx.set_stroke_style(&"#374151".into()); // gray-700
    ctx.set_line_width(1.0);
    for i in 0..=4 {
        let y = margin_top + (i as f64 / 4.0) * chart_height;
        ctx.begin_path();
        ctx.move_to(margin_left, y);
        ctx.line_to(width - margin_right, y);
        ctx.stroke();

        let value = max - (i as f64 / 4.0) * max;
        ctx.set_fill_style(&"#9ca3af".into()); // gray-400
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(&format!("{value:.1}"), 5.0, y + 4.0);
    }

    // Bars with weekday labels
    let slot = chart_width / metrics.weekly_trend.len() as f64;
    let bar_width = slot * 0.6;

    for (i, (day, kg)) in metrics.weekly_trend.iter().enumerate() {
        let bar_height = (kg / max) * chart_height;
        let x = margin_left + i as f64 * slot + (slot - bar_width) / 2.0;
        let y = margin_top + chart_height - bar_height;

        ctx.set_fill_style(&"#4CAF50".into());
        ctx.fill_rect(x, y, bar_width, bar_height);

        ctx.set_fill_style(&"#9ca3af".into());
        ctx.set_font("12px sans-serif");
        let _ = ctx.fill_text(day, x + bar_width / 2.0 - 12.0, height - 10.0);
    }
}

//! Activity Logger Component
//!
//! Modal dialog for logging one activity across the four categories,
//! estimating its emissions and confirming the save. All behavior is
//! delegated to the [`LoggerForm`] state machine; this component only
//! mirrors it into the DOM.

use leptos::*;

use crate::emissions::{format_kg, Category, LoggerForm, Subtype};
use crate::state::global::GlobalState;

/// Activity logger dialog, shown as an overlay above the dashboard.
#[component]
pub fn ActivityLogger(
    /// Invoked when the dialog should close (cancel or successful save).
    #[prop(into)]
    on_close: Callback<()>,
) -> impl IntoView {
    let state = use_context::<GlobalState>().expect("GlobalState not found");

    // A fresh form every time the dialog mounts: transport tab active,
    // all fields empty, no result.
    let form = create_rw_signal(LoggerForm::new());

    let on_calculate = move |_| form.update(|f| f.calculate());

    let state_for_save = state.clone();
    let on_save = move |_| match form.with(|f| f.result()) {
        Some(total) => {
            state_for_save.show_success(
                "Activity Saved! 🌱",
                &format!("Added {} to today's tracking.", format_kg(total)),
            );
            on_close.call(());
        }
        None => {
            state_for_save.show_error(
                "Calculate First",
                "Please calculate emissions before saving.",
            );
        }
    };

    let title = move || {
        let user_type = state.user_type.get();
        format!("Log {} Activity", user_type.activity_label())
    };

    // Rebuild the entry panel only when the active tab changes, not on
    // every keystroke.
    let active = create_memo(move |_| form.with(|f| f.active()));

    view! {
        <div class="fixed inset-0 z-40 bg-black/60 flex items-center justify-center p-4">
            <div class="bg-gray-800 rounded-xl w-full max-w-2xl max-h-[90vh] overflow-y-auto p-6 space-y-6">
                // Dialog title
                <h2 class="text-xl font-semibold flex items-center space-x-2">
                    <span>"🧮"</span>
                    <span>{title}</span>
                </h2>

                // Category tabs
                <div class="flex flex-wrap gap-2">
                    {Category::ALL.into_iter().map(|category| view! {
                        <CategoryTab category=category form=form />
                    }).collect_view()}
                </div>

                // Active category entry fields
                {move || view! { <CategoryPanel category=active.get() form=form /> }}

                // Calculation result
                {move || {
                    form.with(|f| f.result()).map(|total| view! {
                        <div class="bg-gray-700 border border-green-600/40 rounded-lg p-6 text-center">
                            <div class="text-3xl font-bold text-green-400 mb-2">
                                {format_kg(total)}
                            </div>
                            <div class="text-sm text-gray-400">
                                "Estimated emissions from this activity"
                            </div>
                        </div>
                    })
                }}

                // Validation failure from the last calculation attempt
                {move || {
                    form.with(|f| f.error().map(|err| err.to_string())).map(|msg| view! {
                        <p class="text-sm text-red-400">{msg}</p>
                    })
                }}

                // Action buttons
                <div class="flex justify-between gap-4">
                    <button
                        on:click=move |_| on_close.call(())
                        class="px-4 py-2 bg-gray-700 hover:bg-gray-600 rounded-lg transition-colors"
                    >
                        "Cancel"
                    </button>
                    <div class="flex gap-2">
                        <button
                            on:click=on_calculate
                            class="px-4 py-2 bg-gray-600 hover:bg-gray-500 rounded-lg
                                   font-medium transition-colors"
                        >
                            "🧮 Calculate"
                        </button>
                        <button
                            on:click=on_save
                            class=move || {
                                let base = "px-4 py-2 bg-green-600 hover:bg-green-700 rounded-lg \
                                            font-medium transition-colors";
                                if form.with(|f| f.can_save()) {
                                    base.to_string()
                                } else {
                                    format!("{} opacity-50", base)
                                }
                            }
                        >
                            "💾 Save Activity"
                        </button>
                    </div>
                </div>
            </div>
        </div>
    }
}

/// One category tab button
#[component]
fn CategoryTab(category: Category, form: RwSignal<LoggerForm>) -> impl IntoView {
    view! {
        <button
            on:click=move |_| form.update(|f| f.select_category(category))
            class=move || {
                let base = "flex items-center space-x-2 px-4 py-2 rounded-lg text-sm \
                            font-medium transition-colors";
                if form.with(|f| f.active()) == category {
                    format!("{} bg-green-600 text-white", base)
                } else {
                    format!("{} bg-gray-700 text-gray-300 hover:bg-gray-600", base)
                }
            }
        >
            <span>{category.icon()}</span>
            <span>{category.label()}</span>
            // Marker for tabs that already hold an entry
            {move || {
                (!form.with(|f| f.input().entry(category).is_empty())).then(|| view! {
                    <span class="w-1.5 h-1.5 bg-white rounded-full" />
                })
            }}
        </button>
    }
}

/// Subtype selector and quantity input for one category
#[component]
fn CategoryPanel(category: Category, form: RwSignal<LoggerForm>) -> impl IntoView {
    let field_error = move || {
        form.with(|f| {
            f.error()
                .filter(|err| err.category() == category)
                .map(|err| err.to_string())
        })
    };

    view! {
        <div class="bg-gray-700/50 rounded-lg p-4 space-y-4">
            <div class="flex items-center space-x-2 font-medium">
                <span>{category.icon()}</span>
                <span>{category.label()}</span>
            </div>

            // Subtype selector: only enumerated subtypes are offered, so an
            // unknown subtype cannot be entered.
            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    {category.subtype_label()}
                </label>
                <select
                    on:change=move |ev| {
                        let parsed = Subtype::parse(category, &event_target_value(&ev));
                        form.update(|f| f.set_subtype(category, parsed));
                    }
                    prop:value=move || {
                        form.with(|f| f.input().entry(category).subtype)
                            .map(|s| s.as_str())
                            .unwrap_or("")
                            .to_string()
                    }
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-green-500 focus:outline-none"
                >
                    <option value="">"Select..."</option>
                    {category.subtypes().iter().map(|subtype| view! {
                        <option value=subtype.as_str()>{subtype.label()}</option>
                    }).collect_view()}
                </select>
            </div>

            // Quantity input
            <div>
                <label class="block text-sm text-gray-400 mb-2">
                    {category.quantity_label()}
                </label>
                <input
                    type="number"
                    step="0.1"
                    placeholder=category.quantity_placeholder()
                    prop:value=move || form.with(|f| f.input().entry(category).quantity.clone())
                    on:input=move |ev| {
                        form.update(|f| f.set_quantity(category, event_target_value(&ev)));
                    }
                    class="w-full bg-gray-700 rounded-lg px-4 py-3 text-white
                           border border-gray-600 focus:border-green-500 focus:outline-none"
                />
                {move || field_error().map(|msg| view! {
                    <p class="text-sm text-red-400 mt-1">{msg}</p>
                })}
            </div>
        </div>
    }
}

use chrono::{Datelike, Utc};
use contracts::shared::period::MonthKey;
use leptos::prelude::*;

use crate::shared::config::use_config;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::shared::state::{use_filter_stores, SelectionOutcome};

/// Twelve months of `year`, January first.
pub fn months_of_year(year: i32) -> Vec<MonthKey> {
    (1..=12)
        .filter_map(|month| MonthKey::new(year, month).ok())
        .collect()
}

pub fn limit_message(cap: usize) -> String {
    format!("You can compare up to {} months at a time.", cap)
}

/// Month multi-select for the comparison charts, bound to the `month-filter` store.
///
/// Selecting one more month than the configured cap leaves the selection
/// unchanged and shows a warning.
#[component]
pub fn MonthSelector() -> impl IntoView {
    let stores = use_filter_stores();
    let notifications = use_notifications();
    let cap = use_config().filters.max_selected_months;

    let initial_year = stores
        .months
        .with_untracked(|m| m.months().last().map(|k| k.year()))
        .unwrap_or_else(|| Utc::now().year());
    let year = RwSignal::new(initial_year);

    let on_toggle = move |month: MonthKey| {
        let outcome = stores.months.update(|m| m.toggle(month, cap));
        if outcome == Some(SelectionOutcome::LimitReached) {
            log::debug!("month selection limit {} reached", cap);
            notifications.warning("Selection limit reached", limit_message(cap));
        }
    };

    view! {
        <div class="month-selector">
            <div class="month-selector__header" style="display: flex; align-items: center; gap: 8px;">
                <button class="pagination-btn" on:click=move |_| year.update(|y| *y -= 1) title="Previous year">
                    {icon("chevron-left")}
                </button>
                <span class="month-selector__year">{move || year.get()}</span>
                <button class="pagination-btn" on:click=move |_| year.update(|y| *y += 1) title="Next year">
                    {icon("chevron-right")}
                </button>
                <span class="month-selector__count" style="margin-left: auto; font-size: 0.8rem;">
                    {move || format!("{} / {} selected", stores.months.with(|m| m.len()), cap)}
                </span>
                <button
                    class="button button--ghost button--small"
                    on:click=move |_| stores.months.reset()
                    disabled=move || stores.months.with(|m| m.is_empty())
                >
                    "Clear"
                </button>
            </div>
            <div class="month-selector__grid" style="display: grid; grid-template-columns: repeat(4, 1fr); gap: 4px; margin-top: 8px;">
                {move || {
                    months_of_year(year.get())
                        .into_iter()
                        .map(|month| {
                            let selected = move || stores.months.with(|m| m.contains(month));
                            view! {
                                <button
                                    class=move || {
                                        if selected() {
                                            "month-selector__month month-selector__month--selected"
                                        } else {
                                            "month-selector__month"
                                        }
                                    }
                                    on:click=move |_| on_toggle(month)
                                >
                                    {month.abbr()}
                                </button>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}

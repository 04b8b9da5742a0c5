//! Sortable table header bound to a persisted [`TableState`].
//!
//! ```ignore
//! <SortableHeaderCell label="Amount" column="amount" table=table align="right" />
//! ```

use leptos::prelude::*;
use thaw::*;

use crate::shared::state::{StoreHandle, TableState};

fn sort_indicator(direction: Option<bool>) -> &'static str {
    match direction {
        Some(false) => " ▲",
        Some(true) => " ▼",
        None => "",
    }
}

/// Click cycles ascending, descending, unsorted.
#[component]
pub fn SortableHeaderCell(
    #[prop(into)]
    label: String,

    /// Column id sent as `orderBy`
    #[prop(into)]
    column: String,

    table: StoreHandle<TableState>,

    #[prop(optional, default = "left")]
    align: &'static str,
) -> impl IntoView {
    let column = StoredValue::new(column);
    let direction = move || table.with(|t| column.with_value(|c| t.sort_direction(c)));

    let header_style = if align == "right" {
        "cursor: pointer; display: flex; justify-content: flex-end; user-select: none;"
    } else {
        "cursor: pointer; display: flex; user-select: none;"
    };

    view! {
        <TableHeaderCell>
            <div
                class="table__sortable-header"
                style=header_style
                on:click=move |_| {
                    column.with_value(|c| table.update(|t| t.toggle_sort(c)));
                }
            >
                {label}
                <span class=move || {
                    if direction().is_some() { "sort-icon sort-icon--active" } else { "sort-icon" }
                }>
                    {move || sort_indicator(direction())}
                </span>
            </div>
        </TableHeaderCell>
    }
}

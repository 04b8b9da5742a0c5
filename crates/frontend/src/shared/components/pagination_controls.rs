use crate::shared::icons::icon;
use crate::shared::state::{StoreHandle, TableState};
use leptos::prelude::*;

/// "from-to of total" line under a page of rows; pages are 1-based.
pub fn range_label(current_page: u32, limit: u32, total: u64) -> String {
    if total == 0 {
        return "0 of 0".to_string();
    }
    let from = u64::from(current_page.saturating_sub(1)) * u64::from(limit) + 1;
    let to = (from + u64::from(limit) - 1).min(total);
    format!("{}-{} of {}", from.min(total), to, total)
}

/// Pager bound to a persisted [`TableState`].
#[component]
pub fn PaginationControls(
    table: StoreHandle<TableState>,

    /// Total rows reported by the backend
    #[prop(into)]
    total_count: Signal<u64>,

    #[prop(optional)]
    page_size_options: Option<Vec<u32>>,
) -> impl IntoView {
    let page_size_opts = page_size_options.unwrap_or_else(|| vec![10, 20, 50, 100]);

    let current_page = move || table.with(|t| t.current_page());
    let total_pages = move || table.with(|t| t.total_pages(total_count.get()));
    let go = move |page: u32| {
        table.update(|t| t.set_page(page));
    };

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| go(1)
                disabled=move || current_page() <= 1
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(current_page().saturating_sub(1).max(1))
                disabled=move || current_page() <= 1
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || format!("Page {} of {}", current_page(), total_pages())}
            </span>
            <button
                class="pagination-btn"
                on:click=move |_| {
                    if current_page() < total_pages() {
                        go(current_page() + 1);
                    }
                }
                disabled=move || current_page() >= total_pages()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| go(total_pages())
                disabled=move || current_page() >= total_pages()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>
            <span class="pagination-range">
                {move || table.with(|t| range_label(t.current_page(), t.limit(), total_count.get()))}
            </span>
            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(limit) = event_target_value(&ev).parse::<u32>() {
                        table.update(|t| t.set_limit(limit));
                    }
                }
                prop:value=move || table.with(|t| t.limit()).to_string()
            >
                {page_size_opts.iter().map(|&size| {
                    view! {
                        <option value=size.to_string() selected=move || table.with(|t| t.limit()) == size>
                            {format!("{} / page", size)}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_label_clamps_last_page() {
        assert_eq!(range_label(1, 10, 0), "0 of 0");
        assert_eq!(range_label(1, 10, 95), "1-10 of 95");
        assert_eq!(range_label(10, 10, 95), "91-95 of 95");
    }
}

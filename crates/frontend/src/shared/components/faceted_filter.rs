use contracts::shared::filters::FilterDimension;
use contracts::shared::options::FilterOption;
use leptos::prelude::*;

use crate::shared::options::with_selected_first;
use crate::shared::state::use_filter_stores;

/// Case-insensitive match on label or value. A blank search keeps everything.
pub fn search_options(options: &[FilterOption], search: &str) -> Vec<FilterOption> {
    let needle = search.trim().to_lowercase();
    options
        .iter()
        .filter(|o| {
            needle.is_empty()
                || o.label.to_lowercase().contains(&needle)
                || o.value.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Multi-select popover for one sales filter dimension.
#[component]
pub fn FacetedFilter(
    dimension: FilterDimension,

    #[prop(into)]
    options: Signal<Vec<FilterOption>>,

    #[prop(into, optional)]
    loading: Signal<bool>,
) -> impl IntoView {
    let stores = use_filter_stores();
    let is_open = RwSignal::new(false);
    let search = RwSignal::new(String::new());

    let selected = move || stores.sales.with(|s| s.filters().values(dimension).to_vec());

    let visible = move || {
        let ordered = with_selected_first(options.get(), &selected());
        search_options(&ordered, &search.get())
    };

    view! {
        <div class="faceted-filter" style="position: relative; display: inline-block;">
            <button
                class="button button--secondary button--small"
                on:click=move |_| is_open.update(|o| *o = !*o)
            >
                {dimension.title()}
                {move || {
                    let count = selected().len();
                    (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                }}
            </button>

            <Show when=move || is_open.get()>
                <div
                    class="faceted-filter__popover"
                    style="position: absolute; z-index: 100; min-width: 220px; max-height: 320px; overflow-y: auto; padding: 8px; background: var(--color-bg-elevated, #fff); border: 1px solid var(--color-border, #ddd); border-radius: 6px;"
                >
                    <input
                        class="form__input"
                        placeholder=move || format!("Search {}", dimension.title())
                        prop:value=move || search.get()
                        on:input=move |ev| search.set(event_target_value(&ev))
                    />
                    {move || {
                        if loading.get() {
                            return view! { <div class="faceted-filter__empty">"Loading..."</div> }.into_any();
                        }
                        let items = visible();
                        if items.is_empty() {
                            return view! { <div class="faceted-filter__empty">"No results found."</div> }.into_any();
                        }
                        items
                            .into_iter()
                            .map(|option| {
                                let value = option.value.clone();
                                let checked = {
                                    let value = value.clone();
                                    move || stores.sales.with(|s| s.filters().contains(dimension, &value))
                                };
                                view! {
                                    <label class="faceted-filter__option" style="display: flex; align-items: center; gap: 6px; padding: 4px 0;">
                                        <input
                                            type="checkbox"
                                            prop:checked=checked
                                            on:change=move |_| {
                                                stores.sales.update(|s| s.toggle(dimension, &value));
                                            }
                                        />
                                        <span style="flex: 1;">{option.label}</span>
                                        {option.count.map(|c| view! { <span class="faceted-filter__count">{c}</span> })}
                                    </label>
                                }
                            })
                            .collect_view()
                            .into_any()
                    }}
                    <Show when=move || !selected().is_empty()>
                        <button
                            class="button button--ghost button--small"
                            style="width: 100%; margin-top: 4px;"
                            on:click=move |_| {
                                stores.sales.update(|s| s.clear(dimension));
                            }
                        >
                            "Clear filters"
                        </button>
                    </Show>
                </div>
            </Show>
        </div>
    }
}

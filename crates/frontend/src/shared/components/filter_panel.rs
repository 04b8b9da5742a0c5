use contracts::shared::filters::FilterDimension;
use leptos::prelude::*;

use crate::shared::icons::icon;
use crate::shared::state::use_filter_stores;

/// Collapsible filter area with an active-filter badge and a slot for
/// pagination in the header row.
#[component]
pub fn FilterPanel(
    #[prop(into)]
    is_expanded: RwSignal<bool>,

    #[prop(into)]
    active_filters_count: Signal<usize>,

    /// Rendered in the header next to the title
    #[prop(optional, into)]
    header_extra: Option<ViewFn>,

    /// Filter widgets
    #[prop(into)]
    filter_content: ViewFn,

    /// Active filter chips
    #[prop(optional, into)]
    filter_tags: Option<ViewFn>,
) -> impl IntoView {
    view! {
        <div class="filter-panel">
            <div class="filter-panel-header">
                <div
                    class="filter-panel-header__left"
                    on:click=move |_| is_expanded.update(|e| *e = !*e)
                >
                    <span class=move || {
                        if is_expanded.get() {
                            "filter-panel__chevron filter-panel__chevron--expanded"
                        } else {
                            "filter-panel__chevron"
                        }
                    }>
                        {icon("chevron-right")}
                    </span>
                    {icon("filter")}
                    <span class="filter-panel__title">"Filters"</span>
                    {move || {
                        let count = active_filters_count.get();
                        (count > 0).then(|| view! { <span class="badge badge--primary">{count}</span> })
                    }}
                </div>
                <div class="filter-panel-header__center">
                    {header_extra.as_ref().map(|extra| extra.run())}
                </div>
            </div>

            <div class=move || {
                if is_expanded.get() {
                    "filter-panel__collapsible filter-panel__collapsible--expanded"
                } else {
                    "filter-panel__collapsible filter-panel__collapsible--collapsed"
                }
            }>
                <div class="filter-panel-content">
                    {filter_content.run()}
                    {filter_tags.as_ref().map(|tags| view! { <div class="filter-panel__tags">{tags.run()}</div> })}
                </div>
            </div>
        </div>
    }
}

/// Removable chip for one active filter value.
#[component]
pub fn FilterTag(
    #[prop(into)]
    label: String,

    on_remove: Callback<()>,
) -> impl IntoView {
    view! {
        <div class="filter-tag">
            <span>{label}</span>
            <span
                class="filter-tag__remove"
                on:click=move |e| {
                    e.stop_propagation();
                    on_remove.run(());
                }
            >
                {icon("x")}
            </span>
        </div>
    }
}

/// One chip per selected sales filter value.
#[component]
pub fn SalesFilterTags() -> impl IntoView {
    let stores = use_filter_stores();

    let tags = move || {
        stores.sales.with(|s| {
            FilterDimension::ALL
                .into_iter()
                .flat_map(|dimension| {
                    s.filters()
                        .values(dimension)
                        .iter()
                        .map(move |value| (dimension, value.clone()))
                        .collect::<Vec<_>>()
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <div class="filter-tags" style="display: flex; flex-wrap: wrap; gap: 6px;">
            {move || {
                tags()
                    .into_iter()
                    .map(|(dimension, value)| {
                        let label = format!("{}: {}", dimension.title(), value);
                        let on_remove = Callback::new(move |_| {
                            stores.sales.update(|s| s.toggle(dimension, &value));
                        });
                        view! { <FilterTag label=label on_remove=on_remove /> }
                    })
                    .collect_view()
            }}
        </div>
    }
}

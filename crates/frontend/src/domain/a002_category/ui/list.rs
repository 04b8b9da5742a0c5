use contracts::domain::a002_category::Category;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_category::api::{billboard_label, delete_category, use_categories};
use crate::domain::a002_category::ui::details::CategoryDetails;
use crate::domain::a003_billboard::api::use_billboards;
use crate::shared::components::{PageHeader, QueryFeedback};
use crate::shared::date_utils::format_datetime;
use crate::shared::form::confirm;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::shared::query::{use_query_client, use_report_scope};

#[component]
pub fn CategoryList() -> impl IntoView {
    let categories = use_categories();
    let billboards = use_billboards();
    let queries = use_query_client();
    let notifications = use_notifications();
    let scope = use_report_scope();
    let editing = RwSignal::new(None::<Option<Category>>);

    let rows = move || {
        let billboards = billboards
            .state
            .with(|s| s.data.as_ref().map(|env| env.data.clone()))
            .unwrap_or_default();
        categories
            .state
            .with(|s| s.data.as_ref().map(|env| env.data.clone()))
            .unwrap_or_default()
            .into_iter()
            .map(|c| {
                let label = billboard_label(&c, &billboards);
                (c, label)
            })
            .collect::<Vec<_>>()
    };

    let remove = move |category: Category| {
        if !confirm(&format!("Delete category \"{}\"?", category.name)) {
            return;
        }
        let client = queries.client();
        let scope = scope.get_untracked();
        spawn_local(async move {
            match delete_category(client, scope, category.id.clone()).await {
                Ok(()) => {
                    notifications.success(format!("Category \"{}\" deleted", category.name));
                    queries.notify_changed();
                }
                Err(e) => notifications.error("Could not delete category", e.message()),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Categories">
                <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    "New category"
                </button>
                <button class="button button--secondary" on:click=move |_| categories.refetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || editing.get().map(|category| view! {
                <CategoryDetails
                    category=category
                    on_saved=Callback::new(move |_| editing.set(None))
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}

            <QueryFeedback
                loading=Signal::derive(move || categories.is_loading())
                error=Signal::derive(move || categories.error().map(|e| e.message()))
                on_retry=Callback::new(move |_| categories.refetch())
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Billboard"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || rows().into_iter().map(|(category, billboard)| {
                            let for_edit = category.clone();
                            let for_delete = category.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{category.name}</td>
                                    <td class="table__cell">{billboard}</td>
                                    <td class="table__cell">
                                        {category.created_at.map(format_datetime).unwrap_or_default()}
                                    </td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost button--small"
                                            title="Edit"
                                            on:click=move |_| editing.set(Some(Some(for_edit.clone())))
                                        >
                                            {icon("edit")}
                                        </button>
                                        <button
                                            class="button button--ghost button--small"
                                            title="Delete"
                                            on:click=move |_| remove(for_delete.clone())
                                        >
                                            {icon("trash")}
                                        </button>
                                    </td>
                                </tr>
                            }
                        }).collect_view()}
                    </tbody>
                </table>
            </div>
        </div>
    }
}

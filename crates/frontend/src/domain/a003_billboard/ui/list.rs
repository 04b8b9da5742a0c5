use contracts::domain::a003_billboard::Billboard;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_billboard::api::{delete_billboard, use_billboards};
use crate::domain::a003_billboard::ui::details::BillboardDetails;
use crate::shared::components::{PageHeader, QueryFeedback};
use crate::shared::date_utils::format_datetime;
use crate::shared::form::confirm;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::shared::query::{use_query_client, use_report_scope};

#[component]
pub fn BillboardList() -> impl IntoView {
    let billboards = use_billboards();
    let queries = use_query_client();
    let notifications = use_notifications();
    let scope = use_report_scope();
    // None: closed, Some(None): new, Some(Some(b)): editing b
    let editing = RwSignal::new(None::<Option<Billboard>>);

    let items = move || {
        billboards
            .state
            .with(|s| s.data.as_ref().map(|env| env.data.clone()))
            .unwrap_or_default()
    };

    let remove = move |billboard: Billboard| {
        if !confirm(&format!(
            "Delete billboard \"{}\"? Categories using it must be moved first.",
            billboard.label
        )) {
            return;
        }
        let client = queries.client();
        let scope = scope.get_untracked();
        spawn_local(async move {
            match delete_billboard(client, scope, billboard.id.clone()).await {
                Ok(()) => {
                    notifications.success(format!("Billboard \"{}\" deleted", billboard.label));
                    queries.notify_changed();
                }
                Err(e) => notifications.error("Could not delete billboard", e.message()),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Billboards" subtitle="Banners shown on category pages".to_string()>
                <button class="button button--primary" on:click=move |_| editing.set(Some(None))>
                    {icon("plus")}
                    "New billboard"
                </button>
                <button class="button button--secondary" on:click=move |_| billboards.refetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || editing.get().map(|billboard| view! {
                <BillboardDetails
                    billboard=billboard
                    on_saved=Callback::new(move |_| editing.set(None))
                    on_cancel=Callback::new(move |_| editing.set(None))
                />
            })}

            <QueryFeedback
                loading=Signal::derive(move || billboards.is_loading())
                error=Signal::derive(move || billboards.error().map(|e| e.message()))
                on_retry=Callback::new(move |_| billboards.refetch())
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Label"</th>
                            <th class="table__header-cell">"Image"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items().into_iter().map(|billboard| {
                            let for_edit = billboard.clone();
                            let for_delete = billboard.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{billboard.label.clone()}</td>
                                    <td class="table__cell">
                                        <img class="billboard-thumb" src=billboard.image_url alt=billboard.label />
                                    </td>
                                    <td class="table__cell">
                                        {billboard.created_at.map(format_datetime).unwrap_or_default()}
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

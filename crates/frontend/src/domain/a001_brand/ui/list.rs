use contracts::domain::a001_brand::Brand;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a001_brand::api::{delete_brand, use_brands};
use crate::domain::a001_brand::ui::details::BrandDetails;
use crate::shared::components::{PageHeader, QueryFeedback};
use crate::shared::date_utils::format_datetime;
use crate::shared::form::confirm;
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::shared::query::{use_query_client, use_report_scope};

/// Which form is open above the table.
#[derive(Clone, Debug, PartialEq)]
enum Editing {
    Closed,
    New,
    Existing(Brand),
}

#[component]
pub fn BrandList() -> impl IntoView {
    let brands = use_brands();
    let queries = use_query_client();
    let notifications = use_notifications();
    let scope = use_report_scope();
    let editing = RwSignal::new(Editing::Closed);

    let items = move || {
        brands
            .state
            .with(|s| s.data.as_ref().map(|env| env.data.clone()))
            .unwrap_or_default()
    };

    let remove = move |brand: Brand| {
        if !confirm(&format!("Delete brand \"{}\"?", brand.name)) {
            return;
        }
        let client = queries.client();
        let scope = scope.get_untracked();
        spawn_local(async move {
            match delete_brand(client, scope, brand.id.clone()).await {
                Ok(()) => {
                    notifications.success(format!("Brand \"{}\" deleted", brand.name));
                    queries.notify_changed();
                }
                Err(e) => notifications.error("Could not delete brand", e.message()),
            }
        });
    };

    view! {
        <div class="page">
            <PageHeader title="Brands">
                <button class="button button--primary" on:click=move |_| editing.set(Editing::New)>
                    {icon("plus")}
                    "New brand"
                </button>
                <button class="button button--secondary" on:click=move |_| brands.refetch()>
                    {icon("refresh")}
                    "Refresh"
                </button>
            </PageHeader>

            {move || {
                let brand = match editing.get() {
                    Editing::Closed => return None,
                    Editing::New => None,
                    Editing::Existing(brand) => Some(brand),
                };
                Some(view! {
                    <BrandDetails
                        brand=brand
                        on_saved=Callback::new(move |_| editing.set(Editing::Closed))
                        on_cancel=Callback::new(move |_| editing.set(Editing::Closed))
                    />
                })
            }}

            <QueryFeedback
                loading=Signal::derive(move || brands.is_loading())
                error=Signal::derive(move || brands.error().map(|e| e.message()))
                on_retry=Callback::new(move |_| brands.refetch())
            />

            <div class="table">
                <table class="table__data table--striped">
                    <thead class="table__head">
                        <tr>
                            <th class="table__header-cell">"Name"</th>
                            <th class="table__header-cell">"Description"</th>
                            <th class="table__header-cell">"Created"</th>
                            <th class="table__header-cell"></th>
                        </tr>
                    </thead>
                    <tbody>
                        {move || items().into_iter().map(|brand| {
                            let for_edit = brand.clone();
                            let for_delete = brand.clone();
                            view! {
                                <tr class="table__row">
                                    <td class="table__cell">{brand.name}</td>
                                    <td class="table__cell">{brand.description.unwrap_or_default()}</td>
                                    <td class="table__cell">{brand.created_at.map(format_datetime).unwrap_or_default()}</td>
                                    <td class="table__cell table__cell--actions">
                                        <button
                                            class="button button--ghost button--small"
                                            title="Edit"
                                            on:click=move |_| editing.set(Editing::Existing(for_edit.clone()))
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

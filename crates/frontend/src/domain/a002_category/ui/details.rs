use contracts::domain::a002_category::{Category, CategoryPayload};
use leptos::prelude::*;

use crate::domain::a002_category::api::{billboard_choices, save_category};
use crate::domain::a003_billboard::api::use_billboards;
use crate::shared::form::{FormField, FormState};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::shared::query::{use_query_client, use_report_scope};

#[component]
pub fn CategoryDetails(
    category: Option<Category>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let queries = use_query_client();
    let notifications = use_notifications();
    let scope = use_report_scope();
    let billboards = use_billboards();

    let id = category.as_ref().map(|c| c.id.clone());
    let is_edit = id.is_some();
    let form = FormState::new(
        category
            .as_ref()
            .map(CategoryPayload::from)
            .unwrap_or_default(),
    );

    let choices = move || {
        billboards
            .state
            .with(|s| s.data.as_ref().map(|env| billboard_choices(&env.data)))
            .unwrap_or_default()
    };

    let save = move || {
        let id = id.clone();
        form.submit(
            notifications,
            move |payload| save_category(queries.client(), scope.get_untracked(), id, payload),
            move |saved: Category| {
                notifications.success(format!("Category \"{}\" saved", saved.name));
                queries.notify_changed();
                on_saved.run(());
            },
        );
    };

    view! {
        <div class="details-container category-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit category" } else { "New category" }}</h3>
            </div>

            <div class="details-form">
                <FormField label="Name" error=Signal::derive(move || form.field_error("name"))>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.values.with(|v| v.name.clone())
                        on:input=move |ev| form.set(|v| v.name = event_target_value(&ev))
                        maxlength="100"
                    />
                </FormField>
                <FormField label="Billboard" error=Signal::derive(move || form.field_error("billboardId"))>
                    <select
                        class="form__select"
                        prop:value=move || form.values.with(|v| v.billboard_id.clone())
                        on:change=move |ev| form.set(|v| v.billboard_id = event_target_value(&ev))
                        disabled=move || billboards.is_loading()
                    >
                        <option value="">"Select a billboard"</option>
                        {move || choices().into_iter().map(|choice| {
                            let selected = form.values.with_untracked(|v| v.billboard_id == choice.value);
                            view! {
                                <option value=choice.value selected=selected>{choice.label}</option>
                            }
                        }).collect_view()}
                    </select>
                </FormField>
            </div>

            <div class="details-actions">
                <button
                    class="button button--primary"
                    on:click=move |_| save()
                    disabled=move || form.submitting.get()
                >
                    {icon("check")}
                    {if is_edit { "Save" } else { "Create" }}
                </button>
                <button class="button button--secondary" on:click=move |_| on_cancel.run(())>
                    {icon("x")}
                    "Cancel"
                </button>
            </div>
        </div>
    }
}

use contracts::domain::a003_billboard::{Billboard, BillboardPayload};
use leptos::prelude::*;

use crate::domain::a003_billboard::api::save_billboard;
use crate::shared::form::{FormField, FormState};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::shared::query::{use_query_client, use_report_scope};

#[component]
pub fn BillboardDetails(
    billboard: Option<Billboard>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let queries = use_query_client();
    let notifications = use_notifications();
    let scope = use_report_scope();

    let id = billboard.as_ref().map(|b| b.id.clone());
    let is_edit = id.is_some();
    let form = FormState::new(
        billboard
            .as_ref()
            .map(BillboardPayload::from)
            .unwrap_or_default(),
    );

    let save = move || {
        let id = id.clone();
        form.submit(
            notifications,
            move |payload| save_billboard(queries.client(), scope.get_untracked(), id, payload),
            move |saved: Billboard| {
                notifications.success(format!("Billboard \"{}\" saved", saved.label));
                queries.notify_changed();
                on_saved.run(());
            },
        );
    };

    // Only preview what would pass validation
    let preview = move || {
        form.values.with(|v| {
            let url = v.image_url.trim();
            (url.starts_with("https://") || url.starts_with("http://")).then(|| url.to_string())
        })
    };

    view! {
        <div class="details-container billboard-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit billboard" } else { "New billboard" }}</h3>
            </div>

            <div class="details-form">
                <FormField label="Label" error=Signal::derive(move || form.field_error("label"))>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.values.with(|v| v.label.clone())
                        on:input=move |ev| form.set(|v| v.label = event_target_value(&ev))
                        maxlength="120"
                    />
                </FormField>
                <FormField
                    label="Background image URL"
                    error=Signal::derive(move || form.field_error("imageUrl"))
                >
                    <input
                        type="url"
                        class="form__input"
                        prop:value=move || form.values.with(|v| v.image_url.clone())
                        on:input=move |ev| form.set(|v| v.image_url = event_target_value(&ev))
                        placeholder="https://"
                    />
                </FormField>
                {move || preview().map(|src| view! {
                    <div class="billboard-preview">
                        <img src=src alt="Billboard preview" />
                    </div>
                })}
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

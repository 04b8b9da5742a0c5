use contracts::domain::a001_brand::{Brand, BrandPayload};
use leptos::prelude::*;

use crate::domain::a001_brand::api::save_brand;
use crate::shared::form::{FormField, FormState};
use crate::shared::icons::icon;
use crate::shared::notify::use_notifications;
use crate::shared::query::{use_query_client, use_report_scope};

#[component]
pub fn BrandDetails(
    /// Record being edited; `None` creates a new brand
    brand: Option<Brand>,
    on_saved: Callback<()>,
    on_cancel: Callback<()>,
) -> impl IntoView {
    let queries = use_query_client();
    let notifications = use_notifications();
    let scope = use_report_scope();

    let id = brand.as_ref().map(|b| b.id.clone());
    let is_edit = id.is_some();
    let form = FormState::new(brand.as_ref().map(BrandPayload::from).unwrap_or_default());

    let save = move || {
        let id = id.clone();
        form.submit(
            notifications,
            move |payload| save_brand(queries.client(), scope.get_untracked(), id, payload),
            move |saved: Brand| {
                log::info!("brand {} saved", saved.id);
                notifications.success(format!("Brand \"{}\" saved", saved.name));
                queries.notify_changed();
                on_saved.run(());
            },
        );
    };

    view! {
        <div class="details-container brand-details">
            <div class="details-header">
                <h3>{if is_edit { "Edit brand" } else { "New brand" }}</h3>
            </div>

            <div class="details-form">
                <FormField label="Name" error=Signal::derive(move || form.field_error("name"))>
                    <input
                        type="text"
                        class="form__input"
                        prop:value=move || form.values.with(|v| v.name.clone())
                        on:input=move |ev| form.set(|v| v.name = event_target_value(&ev))
                        placeholder="Brand name"
                        maxlength="100"
                    />
                </FormField>
                <FormField label="Description" error=Signal::derive(move || form.field_error("description"))>
                    <textarea
                        class="form__textarea"
                        prop:value=move || form.values.with(|v| v.description.clone().unwrap_or_default())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            form.set(|v| v.description = (!value.trim().is_empty()).then_some(value));
                        }
                        placeholder="Optional"
                        rows="3"
                    />
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

//! Form state for create/edit screens.
//!
//! Values are validated before submission; field errors come back either
//! from local validation or from a [`MutationError::Validation`] and are
//! shown inline under each input.

use contracts::shared::validation::{Validate, ValidationErrors};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

use crate::shared::notify::NotificationService;
use crate::shared::query::MutationError;

pub struct FormState<P: Send + Sync + 'static> {
    pub values: RwSignal<P>,
    pub errors: RwSignal<ValidationErrors>,
    pub submitting: RwSignal<bool>,
}

impl<P: Send + Sync + 'static> Clone for FormState<P> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<P: Send + Sync + 'static> Copy for FormState<P> {}

impl<P> FormState<P>
where
    P: Validate + Clone + Send + Sync + 'static,
{
    pub fn new(initial: P) -> Self {
        Self {
            values: RwSignal::new(initial),
            errors: RwSignal::new(ValidationErrors::new()),
            submitting: RwSignal::new(false),
        }
    }

    /// Replace the values, e.g. with the record being edited.
    pub fn load(&self, values: P) {
        self.values.set(values);
        self.errors.set(ValidationErrors::new());
    }

    pub fn set(&self, f: impl FnOnce(&mut P)) {
        self.values.update(f);
    }

    pub fn field_error(&self, field: &str) -> Option<String> {
        self.errors.with(|e| e.field(field).map(str::to_string))
    }

    /// Values ready to send, or `None` with the field errors filled in.
    pub fn validated(&self) -> Option<P> {
        let values = self.values.get_untracked();
        match values.validate() {
            Ok(()) => {
                self.errors.set(ValidationErrors::new());
                Some(values)
            }
            Err(errors) => {
                log::debug!("form has {} invalid field(s)", errors.len());
                self.errors.set(errors);
                None
            }
        }
    }

    /// Validate, then run `send` with the values. Field errors stay on the
    /// form, other failures are shown as an error toast.
    pub fn submit<R, Fut>(
        &self,
        notifications: NotificationService,
        send: impl FnOnce(P) -> Fut,
        on_success: impl FnOnce(R) + 'static,
    ) where
        R: 'static,
        Fut: Future<Output = Result<R, MutationError>> + 'static,
    {
        if self.submitting.get_untracked() {
            return;
        }
        let Some(values) = self.validated() else {
            return;
        };
        self.submitting.set(true);
        let pending = send(values);
        let form = *self;
        spawn_local(async move {
            let result = pending.await;
            let _ = form.submitting.try_set(false);
            match result {
                Ok(saved) => on_success(saved),
                Err(e) => {
                    if let Some(message) = form.apply_error(e) {
                        notifications.error("Could not save", message);
                    }
                }
            }
        });
    }

    /// Field errors are kept for inline display; anything else becomes a
    /// message for a toast.
    pub fn apply_error(&self, error: MutationError) -> Option<String> {
        match error {
            MutationError::Validation(errors) => {
                self.errors.set(errors);
                None
            }
            MutationError::Api(e) => Some(e.message()),
        }
    }
}

/// Browser confirmation dialog; `false` when there is no window.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

/// Label, input slot and the field's error line.
#[component]
pub fn FormField(
    #[prop(into)]
    label: String,

    #[prop(into)]
    error: Signal<Option<String>>,

    children: Children,
) -> impl IntoView {
    view! {
        <div class="form__group">
            <label class="form__label">{label}</label>
            {children()}
            {move || error.get().map(|e| view! { <div class="form__error" role="alert">{e}</div> })}
        </div>
    }
}

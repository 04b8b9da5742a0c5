use leptos::prelude::*;
use thaw::*;

use crate::shared::icons::icon;

/// Loading line or error box for a fetch hook. Renders nothing otherwise.
#[component]
pub fn QueryFeedback(
    #[prop(into)]
    loading: Signal<bool>,

    /// User-facing error text
    #[prop(into)]
    error: Signal<Option<String>>,

    #[prop(optional)]
    on_retry: Option<Callback<()>>,
) -> impl IntoView {
    view! {
        {move || {
            if let Some(message) = error.get() {
                view! {
                    <div class="query-error" role="alert" style="display: flex; align-items: center; gap: 8px; padding: 12px; border-radius: 6px; background: var(--color-error-50, #fef2f2); color: var(--color-error-700, #b91c1c);">
                        {icon("alert")}
                        <span style="flex: 1;">{message}</span>
                        {on_retry.map(|retry| view! {
                            <Button size=ButtonSize::Small appearance=ButtonAppearance::Subtle on_click=move |_| retry.run(())>
                                "Retry"
                            </Button>
                        })}
                    </div>
                }
                .into_any()
            } else if loading.get() {
                view! { <div class="query-loading" style="padding: 12px; opacity: 0.7;">"Loading..."</div> }.into_any()
            } else {
                view! { <></> }.into_any()
            }
        }}
    }
}

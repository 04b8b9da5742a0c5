use leptos::prelude::*;

use super::context::{use_auth, AuthStatus};

/// Renders `children` only with an active session; otherwise the sign-in
/// screen.
#[component]
pub fn RequireAuth(children: ChildrenFn) -> impl IntoView {
    let auth = use_auth();
    let checking = move || auth.status.get() == AuthStatus::Checking && !auth.is_authenticated();

    view! {
        <Show
            when=move || auth.is_authenticated()
            fallback=move || {
                if checking() {
                    view! { <div class="auth-checking">"Checking session..."</div> }.into_any()
                } else {
                    view! { <SignInPage /> }.into_any()
                }
            }
        >
            {children()}
        </Show>
    }
}

#[component]
pub fn SignInPage() -> impl IntoView {
    let auth = use_auth();

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Business Dashboard"</h1>
                <h2>"Sign in to continue"</h2>

                {move || auth.error.get().map(|e| view! { <div class="error-message">{e}</div> })}

                <button class="button button--primary login-button" on:click=move |_| auth.sign_in()>
                    "Sign in"
                </button>
            </div>
        </div>
    }
}

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

const AUTO_DISMISS_MS: u32 = 5_000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Info,
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    fn class(&self) -> &'static str {
        match self {
            NotificationKind::Info => "toast toast--info",
            NotificationKind::Success => "toast toast--success",
            NotificationKind::Warning => "toast toast--warning",
            NotificationKind::Error => "toast toast--error",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub title: String,
    pub message: Option<String>,
}

/// Toast-style messages shown in the corner of the shell.
#[derive(Clone, Copy)]
pub struct NotificationService {
    items: RwSignal<Vec<Notification>>,
    next_id: RwSignal<u64>,
}

impl NotificationService {
    pub fn new() -> Self {
        Self {
            items: RwSignal::new(Vec::new()),
            next_id: RwSignal::new(1),
        }
    }

    pub fn show(&self, kind: NotificationKind, title: impl Into<String>, message: Option<String>) {
        let id = self.next_id.get_untracked();
        self.next_id.set(id + 1);
        self.items.update(|items| {
            items.push(Notification {
                id,
                kind,
                title: title.into(),
                message,
            })
        });

        let service = *self;
        Timeout::new(AUTO_DISMISS_MS, move || service.dismiss(id)).forget();
    }

    pub fn info(&self, title: impl Into<String>) {
        self.show(NotificationKind::Info, title, None);
    }

    pub fn success(&self, title: impl Into<String>) {
        self.show(NotificationKind::Success, title, None);
    }

    pub fn warning(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(NotificationKind::Warning, title, Some(message.into()));
    }

    pub fn error(&self, title: impl Into<String>, message: impl Into<String>) {
        self.show(NotificationKind::Error, title, Some(message.into()));
    }

    pub fn dismiss(&self, id: u64) {
        let _ = self.items.try_update(|items| items.retain(|n| n.id != id));
    }
}

impl Default for NotificationService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_notifications() -> NotificationService {
    use_context::<NotificationService>().expect("NotificationService not provided in context")
}

/// Renders the active notifications. Mount once, inside the shell.
#[component]
pub fn NotificationHost() -> impl IntoView {
    let service = use_notifications();

    view! {
        <div class="toast-host" style="position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 2000;">
            <For
                each=move || service.items.get()
                key=|n| n.id
                children=move |n| {
                    let id = n.id;
                    view! {
                        <div class=n.kind.class() role="status">
                            <div style="display: flex; justify-content: space-between; gap: 12px;">
                                <strong>{n.title}</strong>
                                <button class="toast__close" on:click=move |_| service.dismiss(id)>"×"</button>
                            </div>
                            {n.message.map(|m| view! { <div class="toast__message">{m}</div> })}
                        </div>
                    }
                }
            />
        </div>
    }
}

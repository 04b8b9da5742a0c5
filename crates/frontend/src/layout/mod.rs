pub mod center;
pub mod global_context;
pub mod left;
pub mod tabs;
pub mod top_header;

use leptos::prelude::*;

use crate::shared::notify::NotificationHost;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |    Tabs + active page        |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell() -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <div class="app-body">
                <left::Left>
                    <left::Sidebar />
                </left::Left>

                <div class="app-main">
                    <center::Center />
                </div>
            </div>

            <NotificationHost />
        </div>
    }
}

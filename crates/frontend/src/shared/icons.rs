use leptos::prelude::*;

fn svg(paths: &'static str) -> AnyView {
    view! {
        <svg
            width="16"
            height="16"
            viewBox="0 0 24 24"
            fill="none"
            stroke="currentColor"
            stroke-width="2"
            stroke-linecap="round"
            stroke-linejoin="round"
            aria-hidden="true"
            inner_html=paths
        ></svg>
    }
    .into_any()
}

pub fn icon(name: &str) -> AnyView {
    match name {
        "dashboard" => svg(r#"<rect x="3" y="3" width="7" height="9" rx="1"/><rect x="14" y="3" width="7" height="5" rx="1"/><rect x="14" y="12" width="7" height="9" rx="1"/><rect x="3" y="16" width="7" height="5" rx="1"/>"#),
        "invoice" => svg(r#"<path d="M14 2H6a2 2 0 0 0-2 2v16a2 2 0 0 0 2 2h12a2 2 0 0 0 2-2V8z"/><path d="M14 2v6h6"/><path d="M16 13H8"/><path d="M16 17H8"/>"#),
        "inventory" => svg(r#"<path d="M21 16V8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16z"/><path d="M3.27 6.96 12 12l8.73-5.04"/><path d="M12 22V12"/>"#),
        "tag" => svg(r#"<path d="M20.59 13.41 13.42 20.58a2 2 0 0 1-2.83 0L2 12V2h10l8.59 8.59a2 2 0 0 1 0 2.82z"/><circle cx="7" cy="7" r="1"/>"#),
        "folder" => svg(r#"<path d="M22 19a2 2 0 0 1-2 2H4a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h5l2 3h9a2 2 0 0 1 2 2z"/>"#),
        "image" => svg(r#"<rect x="3" y="3" width="18" height="18" rx="2"/><circle cx="8.5" cy="8.5" r="1.5"/><path d="m21 15-5-5L5 21"/>"#),
        "filter" => svg(r#"<path d="M22 3H2l8 9.46V19l4 2v-8.54z"/>"#),
        "plus" => svg(r#"<path d="M12 5v14"/><path d="M5 12h14"/>"#),
        "edit" => svg(r#"<path d="M12 20h9"/><path d="M16.5 3.5a2.12 2.12 0 0 1 3 3L7 19l-4 1 1-4z"/>"#),
        "trash" => svg(r#"<path d="M3 6h18"/><path d="M19 6v14a2 2 0 0 1-2 2H7a2 2 0 0 1-2-2V6"/><path d="M8 6V4a2 2 0 0 1 2-2h4a2 2 0 0 1 2 2v2"/>"#),
        "refresh" => svg(r#"<path d="M21 12a9 9 0 1 1-3-6.7L21 8"/><path d="M21 3v5h-5"/>"#),
        "logout" => svg(r#"<path d="M9 21H5a2 2 0 0 1-2-2V5a2 2 0 0 1 2-2h4"/><path d="m16 17 5-5-5-5"/><path d="M21 12H9"/>"#),
        "user" => svg(r#"<path d="M20 21v-2a4 4 0 0 0-4-4H8a4 4 0 0 0-4 4v2"/><circle cx="12" cy="7" r="4"/>"#),
        "menu" => svg(r#"<path d="M3 12h18"/><path d="M3 6h18"/><path d="M3 18h18"/>"#),
        "chevron-left" => svg(r#"<path d="m15 18-6-6 6-6"/>"#),
        "chevron-right" => svg(r#"<path d="m9 18 6-6-6-6"/>"#),
        "chevrons-left" => svg(r#"<path d="m11 17-5-5 5-5"/><path d="m18 17-5-5 5-5"/>"#),
        "chevrons-right" => svg(r#"<path d="m6 17 5-5-5-5"/><path d="m13 17 5-5-5-5"/>"#),
        "x" => svg(r#"<path d="M18 6 6 18"/><path d="m6 6 12 12"/>"#),
        "alert" => svg(r#"<circle cx="12" cy="12" r="10"/><path d="M12 8v4"/><path d="M12 16h.01"/>"#),
        "money" => svg(r#"<path d="M12 2v20"/><path d="M17 5H9.5a3.5 3.5 0 0 0 0 7h5a3.5 3.5 0 0 1 0 7H6"/>"#),
        "check" => svg(r#"<path d="M20 6 9 17l-5-5"/>"#),
        _ => svg(r#"<circle cx="12" cy="12" r="9"/>"#),
    }
}

//! Navigation menu. Items open tabs through [`AppGlobalContext`].

use leptos::prelude::*;

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboards",
            icon: "dashboard",
            items: vec![("d100_sales_dashboard", "dashboard")],
        },
        MenuGroup {
            id: "reports",
            label: "Reports",
            icon: "invoice",
            items: vec![("p100_sales_invoice", "invoice"), ("p200_inventory", "inventory")],
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "folder",
            items: vec![
                ("a001_brand", "tag"),
                ("a002_category", "folder"),
                ("a003_billboard", "image"),
            ],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not provided in context");
    let expanded_groups = RwSignal::new(
        menu_groups()
            .iter()
            .map(|g| g.id.to_string())
            .collect::<Vec<_>>(),
    );

    let toggle_group = move |id: &'static str| {
        expanded_groups.update(|items| {
            if let Some(pos) = items.iter().position(|x| x == id) {
                items.remove(pos);
            } else {
                items.push(id.to_string());
            }
        });
    };

    view! {
        <nav class="app-sidebar__content">
            {menu_groups().into_iter().map(|group| {
                let group_id = group.id;
                let is_expanded = move || expanded_groups.with(|g| g.iter().any(|x| x == group_id));
                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| toggle_group(group_id)
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=is_expanded
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=is_expanded>
                            <div class="app-sidebar__children">
                                {group.items.iter().map(|&(key, icon_name)| {
                                    let label = tab_label_for_key(key);
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || ctx.is_active(key)
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(key, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_item_has_a_title() {
        for group in menu_groups() {
            for (key, _) in group.items {
                assert_ne!(tab_label_for_key(key), "Page", "{key} has no title");
            }
        }
    }
}

use leptos::prelude::*;

use crate::shared::config::use_config;
use crate::shared::state::use_filter_stores;

/// Switches the company all reports are scoped to.
#[component]
pub fn CompanySelector(
    /// Companies the signed-in user may access
    #[prop(into)]
    companies: Signal<Vec<String>>,
) -> impl IntoView {
    let stores = use_filter_stores();
    let fallback = use_config().filters.default_company;
    let fallback = StoredValue::new(fallback);

    let current = move || {
        fallback.with_value(|f| stores.company.with(|c| c.primary_company(f)))
    };

    view! {
        <select
            class="company-selector form__select"
            title="Company"
            prop:value=current
            on:change=move |ev| {
                let id = event_target_value(&ev);
                log::info!("switching company to {}", id);
                stores.company.update(|c| c.set_companies(vec![id]));
            }
        >
            {move || {
                company_options(companies.get(), &current())
                    .into_iter()
                    .map(|(id, selected)| {
                        let label = id.clone();
                        view! { <option value=id selected=selected>{label}</option> }
                    })
                    .collect_view()
            }}
        </select>
    }
}

/// Option list with the active company first when it is not offered.
fn company_options(mut list: Vec<String>, active: &str) -> Vec<(String, bool)> {
    if !list.iter().any(|id| id == active) {
        list.insert(0, active.to_string());
    }
    list.into_iter()
        .map(|id| {
            let selected = id == active;
            (id, selected)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn active_company_is_always_selectable() {
        let options = company_options(vec!["BIS".into(), "ACM".into()], "ACM");
        assert_eq!(
            options,
            vec![("BIS".to_string(), false), ("ACM".to_string(), true)]
        );

        let options = company_options(vec!["BIS".into()], "NEW");
        assert_eq!(
            options,
            vec![("NEW".to_string(), true), ("BIS".to_string(), false)]
        );
    }
}

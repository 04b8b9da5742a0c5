use crate::shared::components::table::{format_money, format_number_int};
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatFormat {
    Money,
    Integer,
}

impl StatFormat {
    pub fn format(&self, value: f64) -> String {
        match self {
            StatFormat::Money => format!("${}", format_money(value)),
            StatFormat::Integer => format_number_int(value),
        }
    }
}

/// Headline figure of a dashboard. `None` renders a dash while loading.
#[component]
pub fn StatCard(
    #[prop(into)]
    label: String,

    icon_name: &'static str,

    #[prop(into)]
    value: Signal<Option<f64>>,

    format: StatFormat,

    #[prop(into, optional)]
    subtitle: Signal<Option<String>>,
) -> impl IntoView {
    let formatted = move || match value.get() {
        Some(v) => format.format(v),
        None => "—".to_string(),
    };

    view! {
        <div class="stat-card">
            <div class="stat-card__icon">{icon(icon_name)}</div>
            <div class="stat-card__content">
                <div class="stat-card__label">{label}</div>
                <div class="stat-card__value">{formatted}</div>
                {move || subtitle.get().map(|s| view! { <div class="stat-card__subtitle">{s}</div> })}
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn formats() {
        assert_eq!(StatFormat::Money.format(1234.5), "$1,234.50");
        assert_eq!(StatFormat::Integer.format(1200.0), "1,200");
    }
}

use super::number_format::format_money;
use leptos::prelude::*;
use thaw::*;

/// Right-aligned money cell. Negative values are tinted red.
#[component]
pub fn TableCellMoney(
    #[prop(into)]
    value: Signal<Option<f64>>,

    #[prop(optional, default = false)]
    bold: bool,
) -> impl IntoView {
    let formatted_text = move || match value.get() {
        Some(v) => format_money(v),
        None => "—".to_string(),
    };

    let cell_style = move || {
        let mut styles = Vec::new();
        if value.get().is_some_and(|v| v < 0.0) {
            styles.push("color: var(--color-error-700)");
        }
        if bold {
            styles.push("font-weight: 600");
        }
        styles.join("; ")
    };

    view! {
        <TableCell class="text-right">
            <span style=cell_style>{formatted_text}</span>
        </TableCell>
    }
}

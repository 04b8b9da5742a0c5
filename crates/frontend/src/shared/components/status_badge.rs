use leptos::prelude::*;
use thaw::*;

/// Badge colour for a paid status as sent by the backend
/// (`Paid`, `Partially Paid`, `Unpaid`, `Overdue`, ...).
pub fn paid_status_color(status: &str) -> BadgeColor {
    match status.trim().to_lowercase().as_str() {
        "paid" => BadgeColor::Success,
        "partial" | "partially paid" => BadgeColor::Warning,
        "overdue" => BadgeColor::Danger,
        _ => BadgeColor::Informative,
    }
}

#[component]
pub fn StatusBadge(#[prop(into)] status: String) -> impl IntoView {
    let color = paid_status_color(&status);
    view! {
        <Badge appearance=BadgeAppearance::Tint color=color>
            {status}
        </Badge>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_colours() {
        assert!(matches!(paid_status_color("PAID"), BadgeColor::Success));
        assert!(matches!(paid_status_color("Partially Paid"), BadgeColor::Warning));
        assert!(matches!(paid_status_color("Overdue"), BadgeColor::Danger));
        assert!(matches!(paid_status_color("Unpaid"), BadgeColor::Informative));
    }
}

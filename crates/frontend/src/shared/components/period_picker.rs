use chrono::NaiveDate;
use contracts::shared::period::MonthKey;
use leptos::prelude::*;

use crate::shared::notify::use_notifications;
use crate::shared::state::{use_filter_stores, PeriodNotice};

/// `<input type="month">` value (`2025-01`) to the first or last day of that month.
pub fn parse_month_input(value: &str, end_of_month: bool) -> Option<NaiveDate> {
    let (year, month) = value.trim().split_once('-')?;
    let key = MonthKey::new(year.parse().ok()?, month.parse().ok()?).ok()?;
    Some(if end_of_month {
        key.last_day()
    } else {
        key.first_day()
    })
}

pub fn format_month_input(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%Y-%m").to_string())
        .unwrap_or_default()
}

/// Start/end month inputs bound to the `period-filter` store.
#[component]
pub fn PeriodPicker() -> impl IntoView {
    let stores = use_filter_stores();
    let notifications = use_notifications();

    let report = move |notice: Option<PeriodNotice>| {
        if let Some(notice) = notice {
            notifications.warning("Period adjusted", notice.message());
        }
    };

    view! {
        <div class="period-picker" style="display: flex; align-items: end; gap: 8px;">
            <label class="form__group">
                <span class="form__label">"Start Period"</span>
                <input
                    type="month"
                    class="form__input"
                    prop:value=move || format_month_input(stores.period.with(|p| p.start_period()))
                    on:change=move |ev| {
                        let date = parse_month_input(&event_target_value(&ev), false);
                        report(stores.period.update(|p| p.set_start_period(date)).flatten());
                    }
                />
            </label>
            <label class="form__group">
                <span class="form__label">"End Period"</span>
                <input
                    type="month"
                    class="form__input"
                    prop:value=move || format_month_input(stores.period.with(|p| p.end_period()))
                    on:change=move |ev| {
                        let date = parse_month_input(&event_target_value(&ev), true);
                        report(stores.period.update(|p| p.set_end_period(date)).flatten());
                    }
                />
            </label>
            <button
                class="button button--ghost button--small"
                on:click=move |_| stores.period.reset()
            >
                "Reset"
            </button>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn month_input_round_trip() {
        assert_eq!(
            parse_month_input("2025-02", false),
            NaiveDate::from_ymd_opt(2025, 2, 1)
        );
        assert_eq!(
            parse_month_input("2024-02", true),
            NaiveDate::from_ymd_opt(2024, 2, 29)
        );
        assert_eq!(parse_month_input("", false), None);
        assert_eq!(parse_month_input("2025-13", false), None);
        assert_eq!(format_month_input(NaiveDate::from_ymd_opt(2025, 3, 31)), "2025-03");
        assert_eq!(format_month_input(None), "");
    }
}

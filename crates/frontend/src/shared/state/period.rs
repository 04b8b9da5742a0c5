use chrono::NaiveDate;
use contracts::shared::period::{start_of_month, Period};
use serde::{Deserialize, Serialize};

use crate::shared::storage::PersistedState;

pub const END_PERIOD_RESET_MESSAGE: &str =
    "End Period was reset because it was earlier than the Start Period.";

/// Something the user should be told after a period change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PeriodNotice {
    EndPeriodReset,
}

impl PeriodNotice {
    pub fn message(&self) -> &'static str {
        match self {
            PeriodNotice::EndPeriodReset => END_PERIOD_RESET_MESSAGE,
        }
    }
}

/// Start/end period shared by every period-aware report.
///
/// Whatever setter is used, the end never stays before the first day of
/// the start month: it is cleared and a notice is returned instead. A
/// stored period is held to the same rule when it is read back.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Period", into = "Period")]
pub struct PeriodFilter {
    period: Period,
}

impl From<Period> for PeriodFilter {
    fn from(period: Period) -> Self {
        let mut filter = Self { period };
        if filter.enforce_order().is_some() {
            log::warn!("stored period was out of order; end period dropped");
        }
        filter
    }
}

impl From<PeriodFilter> for Period {
    fn from(filter: PeriodFilter) -> Self {
        filter.period
    }
}

impl PersistedState for PeriodFilter {
    const STORAGE_KEY: &'static str = "period-filter";
}

impl PeriodFilter {
    pub fn period(&self) -> Period {
        self.period
    }

    pub fn start_period(&self) -> Option<NaiveDate> {
        self.period.start_period
    }

    pub fn end_period(&self) -> Option<NaiveDate> {
        self.period.end_period
    }

    pub fn set_start_period(&mut self, start: Option<NaiveDate>) -> Option<PeriodNotice> {
        self.period.start_period = start;
        self.enforce_order()
    }

    pub fn set_end_period(&mut self, end: Option<NaiveDate>) -> Option<PeriodNotice> {
        self.period.end_period = end;
        self.enforce_order()
    }

    pub fn set_period(
        &mut self,
        start: Option<NaiveDate>,
        end: Option<NaiveDate>,
    ) -> Option<PeriodNotice> {
        self.period = Period::new(start, end);
        self.enforce_order()
    }

    pub fn reset(&mut self) {
        self.period = Period::default();
    }

    fn enforce_order(&mut self) -> Option<PeriodNotice> {
        if let (Some(start), Some(end)) = (self.period.start_period, self.period.end_period) {
            if end < start_of_month(start) {
                log::debug!("end period {} precedes start {}, clearing it", end, start);
                self.period.end_period = None;
                return Some(PeriodNotice::EndPeriodReset);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::{KeyValueStorage, MemoryStorage, PersistedStore};
    use std::rc::Rc;

    fn date(y: i32, m: u32, d: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(y, m, d)
    }

    #[test]
    fn later_start_clears_earlier_end() {
        let mut filter = PeriodFilter::default();
        assert_eq!(filter.set_end_period(date(2024, 12, 31)), None);
        let notice = filter.set_start_period(date(2025, 1, 1));
        assert_eq!(notice, Some(PeriodNotice::EndPeriodReset));
        assert!(notice.unwrap().message().starts_with("End Period was reset"));
        assert_eq!(filter.start_period(), date(2025, 1, 1));
        assert_eq!(filter.end_period(), None);
    }

    #[test]
    fn end_within_start_month_is_kept() {
        let mut filter = PeriodFilter::default();
        filter.set_start_period(date(2025, 3, 20));
        assert_eq!(filter.set_end_period(date(2025, 3, 1)), None);
        assert_eq!(filter.end_period(), date(2025, 3, 1));
    }

    #[test]
    fn end_before_start_is_rejected_too() {
        let mut filter = PeriodFilter::default();
        filter.set_start_period(date(2025, 1, 1));
        assert_eq!(
            filter.set_end_period(date(2024, 12, 1)),
            Some(PeriodNotice::EndPeriodReset)
        );
        assert_eq!(filter.end_period(), None);
        assert_eq!(
            filter.set_period(date(2025, 5, 1), date(2025, 2, 28)),
            Some(PeriodNotice::EndPeriodReset)
        );
    }

    #[test]
    fn reset_twice_is_stable() {
        let mut filter = PeriodFilter::default();
        filter.set_period(date(2025, 1, 1), date(2025, 3, 31));
        filter.reset();
        let once = filter;
        filter.reset();
        assert_eq!(filter, once);
        assert_eq!(filter, PeriodFilter::default());
    }

    #[test]
    fn inverted_stored_period_is_repaired_on_load() {
        let storage: Rc<dyn KeyValueStorage> = Rc::new(MemoryStorage::default());
        storage
            .set_item(
                PeriodFilter::STORAGE_KEY,
                r#"{"state":{"startPeriod":"2025-05-01","endPeriod":"2025-02-28"},"version":0}"#,
            )
            .unwrap();

        let store = PersistedStore::<PeriodFilter>::load(storage);
        assert_eq!(store.state().start_period(), date(2025, 5, 1));
        assert_eq!(store.state().end_period(), None);
    }

    #[test]
    fn stored_shape_is_the_plain_period() {
        let mut filter = PeriodFilter::default();
        filter.set_period(date(2025, 1, 1), None);
        assert_eq!(
            serde_json::to_string(&filter).unwrap(),
            r#"{"startPeriod":"2025-01-01","endPeriod":null}"#
        );
    }
}

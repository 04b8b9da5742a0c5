use contracts::shared::period::MonthKey;
use serde::{Deserialize, Serialize};

use crate::shared::storage::PersistedState;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    Added,
    Removed,
    /// The cap was reached; nothing changed.
    LimitReached,
}

/// Months picked in the month selector, kept in calendar order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MonthSelection {
    months: Vec<MonthKey>,
}

impl PersistedState for MonthSelection {
    const STORAGE_KEY: &'static str = "month-filter";
}

impl MonthSelection {
    pub fn months(&self) -> &[MonthKey] {
        &self.months
    }

    pub fn contains(&self, month: MonthKey) -> bool {
        self.months.contains(&month)
    }

    pub fn len(&self) -> usize {
        self.months.len()
    }

    pub fn is_empty(&self) -> bool {
        self.months.is_empty()
    }

    pub fn toggle(&mut self, month: MonthKey, cap: usize) -> SelectionOutcome {
        if let Some(pos) = self.months.iter().position(|m| *m == month) {
            self.months.remove(pos);
            return SelectionOutcome::Removed;
        }
        if self.months.len() >= cap {
            return SelectionOutcome::LimitReached;
        }
        let at = self.months.partition_point(|m| *m < month);
        self.months.insert(at, month);
        SelectionOutcome::Added
    }

    pub fn reset(&mut self) {
        self.months.clear();
    }
}

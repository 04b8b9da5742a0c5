use serde::{Deserialize, Serialize};

use crate::shared::storage::PersistedState;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarState {
    pub is_open: bool,
}

impl Default for SidebarState {
    fn default() -> Self {
        Self { is_open: true }
    }
}

impl PersistedState for SidebarState {
    const STORAGE_KEY: &'static str = "sidebar";
}

impl SidebarState {
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    pub fn set_open(&mut self, open: bool) {
        self.is_open = open;
    }
}

use chrono::{DateTime, Utc};
use contracts::system::auth::Session;
use serde::{Deserialize, Serialize};

use crate::shared::storage::PersistedState;

/// Last known session, kept so a reload does not flash the sign-in screen
/// while `/api/auth/session` is being checked.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SessionState {
    pub session: Option<Session>,
}

impl PersistedState for SessionState {
    const STORAGE_KEY: &'static str = "session";
}

impl SessionState {
    /// The stored session unless it has expired.
    pub fn active(&self, now: DateTime<Utc>) -> Option<&Session> {
        self.session.as_ref().filter(|s| !s.is_expired(now))
    }

    pub fn company_ids(&self, now: DateTime<Utc>) -> Vec<String> {
        self.active(now)
            .map(|s| s.user.company_ids.clone())
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::storage::{MemoryStorage, PersistedStore};
    use contracts::system::auth::SessionUser;
    use std::rc::Rc;

    fn session(expires: &str) -> Session {
        Session {
            user: SessionUser {
                id: "u1".into(),
                name: Some("Ops".into()),
                email: None,
                image: None,
                company_ids: vec!["BIS".into(), "KMS".into()],
            },
            expires: expires.parse().unwrap(),
        }
    }

    #[test]
    fn expired_session_is_not_active() {
        let now: DateTime<Utc> = "2025-03-01T00:00:00Z".parse().unwrap();
        let state = SessionState {
            session: Some(session("2025-02-01T00:00:00Z")),
        };
        assert!(state.active(now).is_none());
        assert!(state.company_ids(now).is_empty());

        let state = SessionState {
            session: Some(session("2025-04-01T00:00:00Z")),
        };
        assert_eq!(state.company_ids(now), vec!["BIS", "KMS"]);
    }

    #[test]
    fn survives_reload() {
        let storage = Rc::new(MemoryStorage::default());
        let mut store = PersistedStore::<SessionState>::load(storage.clone());
        store.replace(SessionState {
            session: Some(session("2030-01-01T00:00:00Z")),
        });

        let reloaded = PersistedStore::<SessionState>::load(storage);
        assert_eq!(
            reloaded.state().session.as_ref().map(|s| s.user.id.as_str()),
            Some("u1")
        );
    }
}

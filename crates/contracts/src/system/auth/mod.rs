use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionUser {
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
    /// Companies the user may switch between; the first one is the default.
    #[serde(default)]
    pub company_ids: Vec<String>,
}

impl SessionUser {
    pub fn display_name(&self) -> &str {
        self.name
            .as_deref()
            .or(self.email.as_deref())
            .unwrap_or(&self.id)
    }
}

/// Body of `GET /api/auth/session`. The endpoint answers `null` or `{}`
/// when nobody is signed in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub user: SessionUser,
    pub expires: DateTime<Utc>,
}

impl Session {
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires <= now
    }
}

/// Query parameters the OAuth provider appends to the callback URL.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OAuthCallbackParams {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default)]
    pub state: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub error_description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignOutResponse {
    #[serde(default)]
    pub url: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_parses_and_expires() {
        let json = r#"{
            "user": {"id": "u1", "email": "ops@example.com", "companyIds": ["BIS", "KMS"]},
            "expires": "2025-06-01T00:00:00Z"
        }"#;
        let session: Session = serde_json::from_str(json).unwrap();
        assert_eq!(session.user.display_name(), "ops@example.com");
        assert_eq!(session.user.company_ids, vec!["BIS", "KMS"]);

        let before: DateTime<Utc> = "2025-05-31T23:59:59Z".parse().unwrap();
        let after: DateTime<Utc> = "2025-06-01T00:00:00Z".parse().unwrap();
        assert!(!session.is_expired(before));
        assert!(session.is_expired(after));
    }

    #[test]
    fn empty_session_object_is_not_a_session() {
        assert!(serde_json::from_str::<Session>("{}").is_err());
        assert_eq!(
            serde_json::from_str::<Option<Session>>("null").unwrap(),
            None
        );
    }
}

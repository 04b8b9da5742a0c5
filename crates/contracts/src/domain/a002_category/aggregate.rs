use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::validation::{Validate, ValidationErrors, ValidationRules};

/// Storefront category, always attached to a billboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: String,
    pub name: String,
    pub billboard_id: String,
    #[serde(default)]
    pub billboard_label: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryPayload {
    pub name: String,
    pub billboard_id: String,
}

impl From<&Category> for CategoryPayload {
    fn from(category: &Category) -> Self {
        Self {
            name: category.name.clone(),
            billboard_id: category.billboard_id.clone(),
        }
    }
}

impl Validate for CategoryPayload {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            "name",
            "Name",
            &self.name,
            ValidationRules::required().max_length(100),
        );
        errors.check(
            "billboardId",
            "Billboard",
            &self.billboard_id,
            ValidationRules::required(),
        );
        errors.into_result()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn category_needs_name_and_billboard() {
        let errors = CategoryPayload::default().validate().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors.field("billboardId"), Some("Billboard is required"));

        let payload = CategoryPayload {
            name: "Shoes".into(),
            billboard_id: "bb-1".into(),
        };
        assert!(payload.validate().is_ok());
        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"name":"Shoes","billboardId":"bb-1"}"#
        );
    }
}

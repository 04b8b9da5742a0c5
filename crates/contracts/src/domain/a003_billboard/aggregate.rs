use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::validation::{Validate, ValidationErrors, ValidationRules};

/// Banner shown on top of a storefront category page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Billboard {
    pub id: String,
    pub label: String,
    pub image_url: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillboardPayload {
    pub label: String,
    pub image_url: String,
}

impl From<&Billboard> for BillboardPayload {
    fn from(billboard: &Billboard) -> Self {
        Self {
            label: billboard.label.clone(),
            image_url: billboard.image_url.clone(),
        }
    }
}

impl Validate for BillboardPayload {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            "label",
            "Label",
            &self.label,
            ValidationRules::required().max_length(120),
        );
        errors.check(
            "imageUrl",
            "Background image",
            &self.image_url,
            ValidationRules::required().url(),
        );
        errors.into_result()
    }
}

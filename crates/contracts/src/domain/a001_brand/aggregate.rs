use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::validation::{Validate, ValidationErrors, ValidationRules};

/// Product brand managed in the CMS.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

/// Body of `POST .../cms/brand` and `PATCH .../cms/brand/{id}`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandPayload {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl From<&Brand> for BrandPayload {
    fn from(brand: &Brand) -> Self {
        Self {
            name: brand.name.clone(),
            description: brand.description.clone(),
        }
    }
}

impl Validate for BrandPayload {
    fn validate(&self) -> Result<(), ValidationErrors> {
        let mut errors = ValidationErrors::new();
        errors.check(
            "name",
            "Name",
            &self.name,
            ValidationRules::required().max_length(100),
        );
        if let Some(description) = &self.description {
            errors.check(
                "description",
                "Description",
                description,
                ValidationRules::none().max_length(500),
            );
        }
        errors.into_result()
    }
}

//! Field validation for CMS form payloads.
//!
//! Payloads are checked on the client before any request is sent; the
//! resulting [`ValidationErrors`] are shown inline next to each field.

use std::collections::BTreeMap;
use std::fmt;

/// Validation rules for a single field.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct ValidationRules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub url: bool,
}

impl ValidationRules {
    pub const fn none() -> Self {
        Self {
            required: false,
            min_length: None,
            max_length: None,
            url: false,
        }
    }

    pub const fn required() -> Self {
        Self {
            required: true,
            ..Self::none()
        }
    }

    pub const fn max_length(self, max: usize) -> Self {
        Self {
            max_length: Some(max),
            ..self
        }
    }

    pub const fn min_length(self, min: usize) -> Self {
        Self {
            min_length: Some(min),
            ..self
        }
    }

    pub const fn url(self) -> Self {
        Self { url: true, ..self }
    }

    /// Validate a string value against the rules. Length is counted in chars.
    pub fn validate_string(&self, value: &str, field_label: &str) -> Result<(), String> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            if self.required {
                return Err(format!("{} is required", field_label));
            }
            return Ok(());
        }

        let len = trimmed.chars().count();
        if let Some(min) = self.min_length {
            if len < min {
                return Err(format!(
                    "{} must contain at least {} characters",
                    field_label, min
                ));
            }
        }

        if let Some(max) = self.max_length {
            if len > max {
                return Err(format!(
                    "{} must not exceed {} characters",
                    field_label, max
                ));
            }
        }

        if self.url && !(trimmed.starts_with("https://") || trimmed.starts_with("http://")) {
            return Err(format!("{} must be a valid URL", field_label));
        }

        Ok(())
    }
}

/// Messages per field name, in field-name order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    fields: BTreeMap<String, Vec<String>>,
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .fields
            .iter()
            .map(|(field, messages)| format!("{}: {}", field, messages.join(", ")))
            .collect();
        write!(f, "{}", parts.join("; "))
    }
}

impl std::error::Error for ValidationErrors {}

impl ValidationErrors {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, field: &str, message: impl Into<String>) {
        self.fields
            .entry(field.to_string())
            .or_default()
            .push(message.into());
    }

    /// Run `rules` on `value` and record the failure under `field`.
    pub fn check(&mut self, field: &str, label: &str, value: &str, rules: ValidationRules) {
        if let Err(message) = rules.validate_string(value, label) {
            self.add(field, message);
        }
    }

    pub fn field(&self, field: &str) -> Option<&str> {
        self.fields
            .get(field)
            .and_then(|messages| messages.first())
            .map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(self)
        }
    }
}

/// Implemented by every create/update payload.
pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_blank() {
        let rules = ValidationRules::required();
        assert_eq!(
            rules.validate_string("   ", "Name"),
            Err("Name is required".to_string())
        );
        assert!(rules.validate_string("Acme", "Name").is_ok());
    }

    #[test]
    fn optional_blank_skips_other_rules() {
        let rules = ValidationRules::none().min_length(3).url();
        assert!(rules.validate_string("", "Image").is_ok());
    }

    #[test]
    fn length_is_counted_in_chars() {
        let rules = ValidationRules::required().max_length(3);
        assert!(rules.validate_string("äöü", "Code").is_ok());
        assert!(rules.validate_string("äöüß", "Code").is_err());
        assert!(ValidationRules::required()
            .min_length(2)
            .validate_string("a", "Code")
            .is_err());
    }

    #[test]
    fn url_rule_requires_scheme() {
        let rules = ValidationRules::required().url();
        assert!(rules.validate_string("https://cdn.example.com/a.png", "Image").is_ok());
        assert_eq!(
            rules.validate_string("cdn.example.com/a.png", "Image"),
            Err("Image must be a valid URL".to_string())
        );
    }

    #[test]
    fn errors_collect_per_field() {
        let mut errors = ValidationErrors::new();
        errors.check("name", "Name", "", ValidationRules::required());
        errors.check("label", "Label", "ok", ValidationRules::required());
        assert_eq!(errors.len(), 1);
        assert_eq!(errors.field("name"), Some("Name is required"));
        assert_eq!(errors.field("label"), None);
        assert_eq!(errors.to_string(), "name: Name is required");
        assert!(errors.into_result().is_err());
        assert!(ValidationErrors::new().into_result().is_ok());
    }
}

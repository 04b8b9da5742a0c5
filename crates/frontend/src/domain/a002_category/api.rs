use contracts::domain::a002_category::{Category, CategoryPayload};
use contracts::domain::a003_billboard::Billboard;
use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::options::FilterOption;

use crate::shared::query::{
    use_resource_list, Endpoint, MutationError, QueryClient, QueryHandle, ReportScope, Resource,
};

pub const CATEGORIES: Resource = Resource::new(
    "a002-category",
    Endpoint::new("cms", "mst", "category"),
);

pub fn use_categories() -> QueryHandle<ApiEnvelope<Category>> {
    use_resource_list(CATEGORIES)
}

pub async fn save_category(
    client: QueryClient,
    scope: ReportScope,
    id: Option<String>,
    payload: CategoryPayload,
) -> Result<Category, MutationError> {
    match id {
        Some(id) => {
            CATEGORIES
                .update(&client, &scope.base, &scope.company_id, &id, &payload)
                .await
        }
        None => {
            CATEGORIES
                .create(&client, &scope.base, &scope.company_id, &payload)
                .await
        }
    }
}

pub async fn delete_category(
    client: QueryClient,
    scope: ReportScope,
    id: String,
) -> Result<(), MutationError> {
    CATEGORIES
        .delete(&client, &scope.base, &scope.company_id, &id)
        .await
}

/// Choices for the billboard select, sorted by label.
pub fn billboard_choices(billboards: &[Billboard]) -> Vec<FilterOption> {
    let mut choices: Vec<FilterOption> = billboards
        .iter()
        .map(|b| FilterOption::new(b.id.clone(), b.label.clone()))
        .collect();
    choices.sort_by(|a, b| a.label.to_lowercase().cmp(&b.label.to_lowercase()));
    choices
}

/// Label shown in the table; falls back to the id when the billboard was
/// not embedded in the response.
pub fn billboard_label(category: &Category, billboards: &[Billboard]) -> String {
    category
        .billboard_label
        .clone()
        .or_else(|| {
            billboards
                .iter()
                .find(|b| b.id == category.billboard_id)
                .map(|b| b.label.clone())
        })
        .unwrap_or_else(|| category.billboard_id.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn billboard(id: &str, label: &str) -> Billboard {
        Billboard {
            id: id.into(),
            label: label.into(),
            image_url: format!("https://cdn/{id}.png"),
            created_at: None,
        }
    }

    #[test]
    fn choices_sorted_case_insensitively() {
        let choices = billboard_choices(&[billboard("2", "winter"), billboard("1", "Autumn")]);
        let labels: Vec<_> = choices.iter().map(|c| c.label.as_str()).collect();
        assert_eq!(labels, ["Autumn", "winter"]);
        assert_eq!(choices[0].value, "1");
    }

    #[test]
    fn label_prefers_embedded_then_lookup() {
        let billboards = [billboard("bb-1", "Summer")];
        let mut category = Category {
            id: "c-1".into(),
            name: "Shoes".into(),
            billboard_id: "bb-1".into(),
            billboard_label: None,
            created_at: None,
        };
        assert_eq!(billboard_label(&category, &billboards), "Summer");

        category.billboard_label = Some("Sale".into());
        assert_eq!(billboard_label(&category, &billboards), "Sale");

        category.billboard_label = None;
        category.billboard_id = "gone".into();
        assert_eq!(billboard_label(&category, &billboards), "gone");
    }
}

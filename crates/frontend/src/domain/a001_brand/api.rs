use contracts::domain::a001_brand::{Brand, BrandPayload};
use contracts::shared::envelope::ApiEnvelope;

use crate::shared::query::{
    use_resource_list, Endpoint, MutationError, QueryClient, QueryHandle, ReportScope, Resource,
};

pub const BRANDS: Resource = Resource::new("a001-brand", Endpoint::new("cms", "mst", "brand"));

pub fn use_brands() -> QueryHandle<ApiEnvelope<Brand>> {
    use_resource_list(BRANDS)
}

/// Create when `id` is `None`, otherwise update.
pub async fn save_brand(
    client: QueryClient,
    scope: ReportScope,
    id: Option<String>,
    payload: BrandPayload,
) -> Result<Brand, MutationError> {
    match id {
        Some(id) => {
            BRANDS
                .update(&client, &scope.base, &scope.company_id, &id, &payload)
                .await
        }
        None => {
            BRANDS
                .create(&client, &scope.base, &scope.company_id, &payload)
                .await
        }
    }
}

pub async fn delete_brand(
    client: QueryClient,
    scope: ReportScope,
    id: String,
) -> Result<(), MutationError> {
    BRANDS
        .delete(&client, &scope.base, &scope.company_id, &id)
        .await
}

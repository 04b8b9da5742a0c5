use contracts::domain::a003_billboard::{Billboard, BillboardPayload};
use contracts::shared::envelope::ApiEnvelope;

use crate::shared::query::{
    use_resource_list, Endpoint, MutationError, QueryClient, QueryHandle, ReportScope, Resource,
};

pub const BILLBOARDS: Resource = Resource::new(
    "a003-billboard",
    Endpoint::new("cms", "mst", "billboard"),
);

pub fn use_billboards() -> QueryHandle<ApiEnvelope<Billboard>> {
    use_resource_list(BILLBOARDS)
}

pub async fn save_billboard(
    client: QueryClient,
    scope: ReportScope,
    id: Option<String>,
    payload: BillboardPayload,
) -> Result<Billboard, MutationError> {
    match id {
        Some(id) => {
            BILLBOARDS
                .update(&client, &scope.base, &scope.company_id, &id, &payload)
                .await
        }
        None => {
            BILLBOARDS
                .create(&client, &scope.base, &scope.company_id, &payload)
                .await
        }
    }
}

pub async fn delete_billboard(
    client: QueryClient,
    scope: ReportScope,
    id: String,
) -> Result<(), MutationError> {
    BILLBOARDS
        .delete(&client, &scope.base, &scope.company_id, &id)
        .await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::http::Method;
    use crate::shared::query::testing::{ManualClock, ScriptedTransport};
    use crate::shared::query::QueryOptions;
    use contracts::shared::filters::FilterSet;
    use contracts::shared::period::Period;
    use futures::executor::block_on;
    use std::rc::Rc;

    #[test]
    fn existing_billboard_is_patched_and_deleted_by_id() {
        let transport = Rc::new(ScriptedTransport::default());
        let client = QueryClient::new(
            transport.clone(),
            Rc::new(ManualClock::default()),
            QueryOptions::default(),
        );
        let scope = ReportScope {
            base: "https://api".into(),
            company_id: "BIS".into(),
            period: Period::default(),
            filters: FilterSet::default(),
        };

        transport.respond(
            200,
            r#"{"id":"bb-1","label":"Summer","imageUrl":"https://cdn/summer.png"}"#,
        );
        let payload = BillboardPayload {
            label: "Summer".into(),
            image_url: "https://cdn/summer.png".into(),
        };
        let saved = block_on(save_billboard(
            client.clone(),
            scope.clone(),
            Some("bb-1".into()),
            payload,
        ))
        .unwrap();
        assert_eq!(saved.label, "Summer");

        transport.respond(204, "");
        block_on(delete_billboard(client, scope, "bb-1".into())).unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].method, Method::Patch);
        assert_eq!(calls[1].method, Method::Delete);
        assert_eq!(calls[1].url, "https://api/BIS/cms/mst/billboard/bb-1");
    }
}

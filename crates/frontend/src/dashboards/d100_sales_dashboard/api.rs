use contracts::dashboards::d100_sales_dashboard::{SalesByPeriodRow, SalesPersonRow};
use contracts::shared::envelope::ApiEnvelope;
use contracts::shared::period::MonthKey;
use leptos::prelude::*;

use crate::shared::query::{
    require_company, require_period, use_query, use_report_scope, ApiRoute, Endpoint,
    QueryError, QueryHandle, QueryKey, QueryParams, QueryRequest, ReportScope,
};
use crate::shared::state::use_filter_stores;

pub const BY_PERIOD: Endpoint = Endpoint::new("dsb", "sls", "get-dashboard/getByPeriod");
pub const BY_SALES_PERSON: Endpoint = Endpoint::new("dsb", "sls", "get-dashboard/getBySalesPerson");
pub const BY_MONTH: Endpoint = Endpoint::new("dsb", "sls", "get-dashboard/getByMonth");

/// Prefix of every dashboard query key.
pub const SCOPE: &str = "d100";

pub type PeriodRows = ApiEnvelope<SalesByPeriodRow>;
pub type SalesPersonRows = ApiEnvelope<SalesPersonRow>;

fn period_report(
    scope: &ReportScope,
    endpoint: Endpoint,
    name: &str,
) -> Result<QueryRequest, QueryError> {
    let company = require_company(Some(scope.company_id.as_str()))?;
    let period = require_period(&scope.period)?;

    let params = QueryParams::new()
        .push_period(&period)
        .push_filters(&scope.filters);
    let key = QueryKey::new(SCOPE)
        .with(name)
        .with(company)
        .with_period(&period)
        .with_filters(&scope.filters);

    Ok(QueryRequest::new(
        key,
        ApiRoute::new(scope.base.as_str(), company, endpoint).url(&params),
    ))
}

/// Monthly totals over the selected period.
pub fn by_period_request(scope: &ReportScope) -> Result<QueryRequest, QueryError> {
    period_report(scope, BY_PERIOD, "by-period")
}

pub fn by_sales_person_request(scope: &ReportScope) -> Result<QueryRequest, QueryError> {
    period_report(scope, BY_SALES_PERSON, "by-sales-person")
}

/// Totals of hand-picked months, sent as repeated `month` keys.
pub fn by_month_request(
    scope: &ReportScope,
    months: &[MonthKey],
) -> Result<QueryRequest, QueryError> {
    let company = require_company(Some(scope.company_id.as_str()))?;
    if months.is_empty() {
        return Err(QueryError::InvalidRequest(
            "Pick at least one month to compare.".to_string(),
        ));
    }
    let labels: Vec<String> = months.iter().map(MonthKey::to_string).collect();

    let params = QueryParams::new()
        .push_all("month", &labels)
        .push_filters(&scope.filters);
    let key = QueryKey::new(SCOPE)
        .with("by-month")
        .with(company)
        .with_list(&labels)
        .with_filters(&scope.filters);

    Ok(QueryRequest::new(
        key,
        ApiRoute::new(scope.base.as_str(), company, BY_MONTH).url(&params),
    ))
}

pub fn use_sales_by_period() -> QueryHandle<PeriodRows> {
    let scope = use_report_scope();
    use_query(Signal::derive(move || scope.with(by_period_request).ok()))
}

pub fn use_sales_by_sales_person() -> QueryHandle<SalesPersonRows> {
    let scope = use_report_scope();
    use_query(Signal::derive(move || {
        scope.with(by_sales_person_request).ok()
    }))
}

pub fn use_month_comparison() -> QueryHandle<PeriodRows> {
    let scope = use_report_scope();
    let stores = use_filter_stores();
    use_query(Signal::derive(move || {
        let months = stores.months.with(|m| m.months().to_vec());
        scope.with(|s| by_month_request(s, &months)).ok()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use contracts::shared::filters::{FilterDimension, FilterSet};
    use contracts::shared::period::Period;

    fn scope() -> ReportScope {
        ReportScope {
            base: "http://localhost:3000".into(),
            company_id: "BIS".into(),
            period: Period::new(
                NaiveDate::from_ymd_opt(2025, 1, 1),
                NaiveDate::from_ymd_opt(2025, 3, 31),
            ),
            filters: FilterSet::default(),
        }
    }

    #[test]
    fn by_period_url_for_bis() {
        let request = by_period_request(&scope()).unwrap();
        assert_eq!(
            request.url,
            "http://localhost:3000/BIS/dsb/sls/get-dashboard/getByPeriod?startPeriod=Jan2025&endPeriod=Mar2025"
        );
        assert!(request.key.starts_with(&QueryKey::new(SCOPE).with("by-period")));
    }

    #[test]
    fn sales_person_filter_is_repeated() {
        let mut scope = scope();
        scope.filters.set(
            FilterDimension::SalesPersonName,
            vec!["A".into(), "B".into()],
        );
        let request = by_sales_person_request(&scope).unwrap();
        assert!(request
            .url
            .ends_with("getBySalesPerson?startPeriod=Jan2025&endPeriod=Mar2025&salesPersonName=A&salesPersonName=B"));
    }

    #[test]
    fn missing_inputs_never_build_a_request() {
        let mut no_company = scope();
        no_company.company_id.clear();
        assert!(by_period_request(&no_company).is_err());

        let mut no_end = scope();
        no_end.period.end_period = None;
        let err = by_sales_person_request(&no_end).unwrap_err();
        assert_eq!(err.message(), "End Period is required.");

        assert!(by_month_request(&scope(), &[]).is_err());
    }

    #[test]
    fn compared_months_keep_their_order() {
        let months = [
            MonthKey::new(2024, 11).unwrap(),
            MonthKey::new(2025, 2).unwrap(),
        ];
        let request = by_month_request(&scope(), &months).unwrap();
        assert_eq!(
            request.url,
            "http://localhost:3000/BIS/dsb/sls/get-dashboard/getByMonth?month=Nov2024&month=Feb2025"
        );
    }
}

use contracts::shared::period::Period;

use super::error::QueryError;
use super::key::QueryKey;
use super::params::QueryParams;

/// Static part of a report URL: `{module}/{sub_module}/{path}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub module: &'static str,
    pub sub_module: &'static str,
    pub path: &'static str,
}

impl Endpoint {
    pub const fn new(module: &'static str, sub_module: &'static str, path: &'static str) -> Self {
        Self {
            module,
            sub_module,
            path,
        }
    }
}

/// `{api}/{company}/{module}/{sub_module}/{path}` for one company.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiRoute {
    base: String,
    company_id: String,
    endpoint: Endpoint,
}

impl ApiRoute {
    pub fn new(base: impl Into<String>, company_id: impl Into<String>, endpoint: Endpoint) -> Self {
        Self {
            base: base.into(),
            company_id: company_id.into(),
            endpoint,
        }
    }

    pub fn company_id(&self) -> &str {
        &self.company_id
    }

    /// Path below the API root, without query string.
    pub fn segment(&self) -> String {
        format!(
            "{}/{}/{}/{}",
            urlencoding::encode(&self.company_id),
            self.endpoint.module,
            self.endpoint.sub_module,
            self.endpoint.path
        )
    }

    pub fn url(&self, params: &QueryParams) -> String {
        let base = self.base.trim_end_matches('/');
        let mut url = if base.is_empty() {
            self.segment()
        } else {
            format!("{}/{}", base, self.segment())
        };
        if !params.is_empty() {
            url.push('?');
            url.push_str(&params.to_query_string());
        }
        url
    }

    /// URL of one record below this route, e.g. `.../brand/{id}`.
    pub fn item_url(&self, id: &str) -> String {
        format!(
            "{}/{}",
            self.url(&QueryParams::new()),
            urlencoding::encode(id)
        )
    }
}

/// A ready-to-send query: cache identity plus absolute URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryRequest {
    pub key: QueryKey,
    pub url: String,
}

impl QueryRequest {
    pub fn new(key: QueryKey, url: impl Into<String>) -> Self {
        Self {
            key,
            url: url.into(),
        }
    }
}

pub fn require_company(company_id: Option<&str>) -> Result<&str, QueryError> {
    match company_id.map(str::trim) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(QueryError::InvalidRequest(
            "Select a company first.".to_string(),
        )),
    }
}

/// Both bounds set and in order.
pub fn require_period(period: &Period) -> Result<Period, QueryError> {
    if period.start_period.is_none() {
        return Err(QueryError::InvalidRequest(
            "Start Period is required.".to_string(),
        ));
    }
    if period.end_period.is_none() {
        return Err(QueryError::InvalidRequest(
            "End Period is required.".to_string(),
        ));
    }
    if !period.is_ordered() {
        return Err(QueryError::InvalidRequest(
            "End Period must not be earlier than Start Period.".to_string(),
        ));
    }
    Ok(*period)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    const BY_PERIOD: Endpoint = Endpoint::new("dsb", "sls", "get-dashboard/getByPeriod");

    #[test]
    fn dashboard_url() {
        let period = Period::new(
            NaiveDate::from_ymd_opt(2025, 1, 1),
            NaiveDate::from_ymd_opt(2025, 3, 31),
        );
        let route = ApiRoute::new("http://localhost:3000/", "BIS", BY_PERIOD);
        let url = route.url(&QueryParams::new().push_period(&period));
        assert_eq!(
            url,
            "http://localhost:3000/BIS/dsb/sls/get-dashboard/getByPeriod?startPeriod=Jan2025&endPeriod=Mar2025"
        );
        assert_eq!(
            ApiRoute::new("", "BIS", BY_PERIOD).url(&QueryParams::new()),
            "BIS/dsb/sls/get-dashboard/getByPeriod"
        );
    }

    #[test]
    fn item_url_appends_encoded_id() {
        let route = ApiRoute::new("https://api", "BIS", Endpoint::new("cms", "mst", "brand"));
        assert_eq!(route.item_url("a b"), "https://api/BIS/cms/mst/brand/a%20b");
    }

    #[test]
    fn missing_inputs_are_invalid() {
        assert!(matches!(
            require_company(None),
            Err(QueryError::InvalidRequest(_))
        ));
        assert!(require_company(Some(" ")).is_err());
        assert_eq!(require_company(Some("BIS")).unwrap(), "BIS");

        let open = Period::new(NaiveDate::from_ymd_opt(2025, 1, 1), None);
        assert!(require_period(&open).is_err());
        let reversed = Period::new(
            NaiveDate::from_ymd_opt(2025, 1, 1),
            NaiveDate::from_ymd_opt(2024, 12, 31),
        );
        assert!(require_period(&reversed).is_err());
    }
}

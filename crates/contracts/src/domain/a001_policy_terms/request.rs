use super::url_state::{DateField, UrlState};
use crate::shared::query_string::{build_query_string, href_with_query, QueryValue};

pub const POLICY_TERMS_API_PATH: &str = "/api/policy-terms";

/// Largest page the Policy API accepts.
pub const MAX_PAGE_SIZE: u32 = 200;

/// Path of a single term on the Policy API.
pub fn detail_path(term_id: &str) -> String {
    format!("{}/{}", POLICY_TERMS_API_PATH, urlencoding::encode(term_id.trim()))
}

/// Query parameters of `GET /api/policy-terms`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PolicyTermsRequest {
    pub q: String,
    pub state: String,
    pub status: String,
    pub exp_from: String,
    pub exp_to: String,
    pub page: u32,
    pub size: u32,
    pub sort: String,
}

impl PolicyTermsRequest {
    /// The API filters expiration dates only; an effective-date range stays
    /// on the client and is applied by `refine_page`.
    pub fn from_url_state(url_state: &UrlState) -> Self {
        let filters = url_state.filters.normalized();
        let (exp_from, exp_to) = match filters.date_field {
            DateField::Expiration => (filters.date_from, filters.date_to),
            DateField::Effective => (String::new(), String::new()),
        };

        Self {
            q: filters.q,
            state: filters.state,
            status: filters.status,
            exp_from,
            exp_to,
            page: url_state.page,
            size: url_state.size.clamp(1, MAX_PAGE_SIZE),
            sort: url_state.sort.clone(),
        }
    }

    pub fn query_string(&self) -> String {
        build_query_string([
            ("q", QueryValue::from(&self.q)),
            ("state", QueryValue::from(&self.state)),
            ("status", QueryValue::from(&self.status)),
            ("exp_from", QueryValue::from(&self.exp_from)),
            ("exp_to", QueryValue::from(&self.exp_to)),
            ("page", QueryValue::from(self.page)),
            ("size", QueryValue::from(self.size)),
            ("sort", QueryValue::from(&self.sort)),
        ])
    }

    pub fn path_and_query(&self) -> String {
        href_with_query(POLICY_TERMS_API_PATH, &self.query_string())
    }
}

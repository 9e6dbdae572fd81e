use contracts::domain::a001_policy_terms::request::{detail_path, PolicyTermsRequest};
use contracts::domain::a001_policy_terms::response::{PolicyTermDetail, PolicyTermPage};
use contracts::domain::a001_policy_terms::url_state::UrlState;
use contracts::shared::api_result::{ApiError, ApiResult};
use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use crate::shared::api_utils::api_url;

async fn fetch_json<T: DeserializeOwned>(path_and_query: &str) -> ApiResult<T> {
    let url = api_url(path_and_query);
    log::debug!("GET {}", url);

    let response = Request::get(&url)
        .header("Accept", "application/json")
        .send()
        .await
        .map_err(|e| {
            log::warn!("Policy API unreachable at {}: {}", url, e);
            ApiError::network(e.to_string())
        })?;

    if !response.ok() {
        log::warn!("Policy API returned {} for {}", response.status(), url);
        return Err(ApiError::http(response.status()));
    }

    response.json::<T>().await.map_err(|e| {
        log::warn!("Failed to decode Policy API response from {}: {}", url, e);
        ApiError::network(e.to_string())
    })
}

/// Fetch one page of policy terms for the given URL state.
pub async fn fetch_policy_terms(url_state: &UrlState) -> ApiResult<PolicyTermPage> {
    let request = PolicyTermsRequest::from_url_state(url_state);
    fetch_json(&request.path_and_query()).await
}

pub async fn fetch_policy_term(term_id: &str) -> ApiResult<PolicyTermDetail> {
    fetch_json(&detail_path(term_id)).await
}

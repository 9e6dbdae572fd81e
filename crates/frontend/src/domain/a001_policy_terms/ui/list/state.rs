use contracts::domain::a001_policy_terms::response::PolicyTermPage;
use contracts::shared::api_result::{ApiError, ApiResult};
use leptos::logging::log;
use leptos::prelude::*;

#[derive(Debug, Clone, Default)]
pub struct PolicyTermListState {
    pub page: Option<PolicyTermPage>,
    pub error: Option<ApiError>,
    pub is_loaded: bool,
    /// Sequence number of the latest request; older responses are dropped.
    pub request_seq: u64,
}

pub fn create_state() -> RwSignal<PolicyTermListState> {
    RwSignal::new(PolicyTermListState::default())
}

/// Store the result of request `seq`.
///
/// Returns false when a newer request has started or the page owning `state`
/// is already gone.
pub fn apply_response(
    state: RwSignal<PolicyTermListState>,
    seq: u64,
    result: ApiResult<PolicyTermPage>,
) -> bool {
    match state.try_with_untracked(|s| s.request_seq) {
        Some(latest) if latest == seq => {}
        Some(_) => {
            log!("Discarding stale policy terms response #{}", seq);
            return false;
        }
        None => return false,
    }

    state
        .try_update(|s| {
            match result {
                Ok(page) => {
                    s.page = Some(page);
                    s.error = None;
                }
                Err(err) => {
                    s.page = None;
                    s.error = Some(err);
                }
            }
            s.is_loaded = true;
        })
        .is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::reactive::owner::Owner;

    fn empty_page() -> PolicyTermPage {
        PolicyTermPage {
            items: Vec::new(),
            page: 0,
            size: 20,
            total_elements: Some(0),
            total_pages: 0,
        }
    }

    #[test]
    fn test_latest_response_is_applied() {
        let owner = Owner::new();
        let state = owner.with(create_state);
        state.update(|s| s.request_seq = 2);

        assert!(apply_response(state, 2, Ok(empty_page())));
        state.with_untracked(|s| {
            assert!(s.is_loaded);
            assert!(s.page.is_some());
            assert!(s.error.is_none());
        });

        assert!(apply_response(state, 2, Err(ApiError::http(503))));
        state.with_untracked(|s| {
            assert!(s.page.is_none());
            assert_eq!(s.error, Some(ApiError::http(503)));
        });
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let owner = Owner::new();
        let state = owner.with(create_state);
        state.update(|s| s.request_seq = 3);

        assert!(!apply_response(state, 2, Ok(empty_page())));
        state.with_untracked(|s| assert!(!s.is_loaded));
    }

    #[test]
    fn test_response_after_page_left_is_ignored() {
        let owner = Owner::new();
        let state = owner.with(create_state);
        state.update(|s| s.request_seq = 1);
        drop(owner);

        assert!(!apply_response(state, 1, Err(ApiError::network("aborted"))));
    }
}

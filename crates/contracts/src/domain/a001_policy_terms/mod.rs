//! Policy terms: DTOs, URL state, filter synchronization and list helpers.

pub mod chips;
pub mod filter_sync;
pub mod listing;
pub mod refine;
pub mod request;
pub mod response;
pub mod url_state;

/// Route of the list page, used as the base of every filter/pager href.
pub const LIST_PATH: &str = "/policy-terms";

/// Route of a single term's detail page.
pub fn detail_href(term_id: &str) -> String {
    format!("{}/{}", LIST_PATH, urlencoding::encode(term_id))
}

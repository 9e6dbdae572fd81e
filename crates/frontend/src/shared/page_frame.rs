//! PageFrame: standard root wrapper for every routed page.
//!
//! Sets `id` (`"{entity}--{category}"`, e.g. `"a001_policy_terms--list"`) and
//! `data-page-category` on the root DOM element.

use leptos::prelude::*;

pub const PAGE_CAT_LIST: &str = "list";
pub const PAGE_CAT_DETAIL: &str = "detail";
pub const PAGE_CAT_SYSTEM: &str = "system";

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div id=page_id class=class data-page-category=category>
            {children()}
        </div>
    }
}

use contracts::domain::a001_policy_terms::listing::ListingSummary;
use leptos::prelude::*;

use crate::shared::icons::icon;

/// Prev/Next links of a list page. Links are plain anchors so the router
/// keeps the filters carried in their query strings.
#[component]
pub fn PaginationControls(summary: ListingSummary) -> impl IntoView {
    let page_link = |enabled: bool, href: String, label: &'static str, icon_name: &'static str| {
        if enabled {
            view! {
                <a class="pagination-controls__link" href=href>
                    {icon(icon_name)}
                    <span>{label}</span>
                </a>
            }
            .into_any()
        } else {
            view! {
                <span class="pagination-controls__link pagination-controls__link--disabled" aria-disabled="true">
                    {icon(icon_name)}
                    <span>{label}</span>
                </span>
            }
            .into_any()
        }
    };

    view! {
        <nav class="pagination-controls" aria-label="Pagination">
            {page_link(summary.has_previous, summary.previous_href.clone(), "Prev", "chevron-left")}
            <span class="pagination-controls__info">
                {format!("{} / {}", summary.page + 1, summary.total_pages.max(1))}
            </span>
            {page_link(summary.has_next, summary.next_href.clone(), "Next", "chevron-right")}
        </nav>
    }
}

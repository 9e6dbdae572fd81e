use super::response::PolicyTermPage;
use super::url_state::UrlState;

/// Which empty-state row the table shows, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    None,
    /// Rows exist on other pages but none here survived refinement.
    PageScoped,
    /// The API reported no rows at all.
    Global,
}

impl EmptyState {
    pub fn title(self) -> Option<&'static str> {
        match self {
            EmptyState::None => None,
            EmptyState::PageScoped => Some("No matches on this page"),
            EmptyState::Global => Some("No policy terms matched your filters."),
        }
    }

    pub fn hint(self) -> Option<&'static str> {
        match self {
            EmptyState::PageScoped => Some("Try Next/Prev, or adjust filters."),
            _ => None,
        }
    }
}

/// Caption, pager links and empty state of one rendered list page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingSummary {
    pub page: u32,
    pub total_pages: u32,
    pub total_elements: u64,
    pub has_previous: bool,
    pub has_next: bool,
    pub previous_href: String,
    pub next_href: String,
    pub empty_state: EmptyState,
}

impl ListingSummary {
    pub fn new(path: &str, url_state: &UrlState, page: &PolicyTermPage, visible_rows: usize) -> Self {
        let total_elements = page.total_elements();
        let has_results = total_elements > 0;
        let empty_state = match (visible_rows, has_results) {
            (0, true) => EmptyState::PageScoped,
            (0, false) => EmptyState::Global,
            _ => EmptyState::None,
        };
        let next_start = (u64::from(page.page) + 1) * u64::from(page.size);

        Self {
            page: page.page,
            total_pages: page.total_pages,
            total_elements,
            has_previous: page.page > 0,
            has_next: next_start < total_elements,
            previous_href: url_state.with_page(page.page.saturating_sub(1)).href(path),
            next_href: url_state.with_page(page.page.saturating_add(1)).href(path),
            empty_state,
        }
    }

    pub fn caption(&self) -> String {
        format!(
            "Showing page {} of {} ({} total)",
            u64::from(self.page) + 1,
            self.total_pages.max(1),
            self.total_elements
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn page(page: u32, size: u32, total: Option<u64>, total_pages: u32) -> PolicyTermPage {
        PolicyTermPage {
            items: Vec::new(),
            page,
            size,
            total_elements: total,
            total_pages,
        }
    }

    #[test]
    fn test_middle_page() {
        let url_state = UrlState::parse("q=acme&page=1");
        let summary = ListingSummary::new("/policy-terms", &url_state, &page(1, 20, Some(45), 3), 20);
        assert!(summary.has_previous);
        assert!(summary.has_next);
        assert_eq!(summary.caption(), "Showing page 2 of 3 (45 total)");
        assert_eq!(
            summary.previous_href,
            "/policy-terms?q=acme&page=0&size=20&sort=effective_to_date%2Casc"
        );
        assert_eq!(
            summary.next_href,
            "/policy-terms?q=acme&page=2&size=20&sort=effective_to_date%2Casc"
        );
        assert_eq!(summary.empty_state, EmptyState::None);
    }

    #[test]
    fn test_last_page_has_no_next() {
        let summary = ListingSummary::new("/policy-terms", &UrlState::default(), &page(2, 20, Some(60), 3), 20);
        assert!(!summary.has_next);
    }

    #[test]
    fn test_first_page_previous_stays_on_zero() {
        let summary = ListingSummary::new("/policy-terms", &UrlState::default(), &page(0, 20, Some(5), 1), 5);
        assert!(!summary.has_previous);
        assert!(summary.previous_href.contains("page=0"));
    }

    #[test]
    fn test_empty_states() {
        let state = UrlState::default();
        let scoped = ListingSummary::new("/policy-terms", &state, &page(0, 20, Some(30), 2), 0);
        assert_eq!(scoped.empty_state, EmptyState::PageScoped);
        assert_eq!(scoped.empty_state.hint(), Some("Try Next/Prev, or adjust filters."));

        let global = ListingSummary::new("/policy-terms", &state, &page(0, 20, Some(0), 0), 0);
        assert_eq!(global.empty_state, EmptyState::Global);
        assert_eq!(global.caption(), "Showing page 1 of 1 (0 total)");
    }
}

//! Keeps the filter bar's draft in sync with the list page URL.
//!
//! The synchronizer owns the draft filters and at most one pending deferred
//! commit. Edits are debounced; Search, Clear and chip removal commit at
//! once. A commit never navigates when the resulting query string equals the
//! current one.
//!
//! ```text
//!            edit ──────────────► Editing ──┐ edit (reschedule)
//!   Idle ◄── commit (fire / search / clear / remove_chip) ◄──┘
//! ```
//!
//! The host drives timers through [`CommitScheduler`] and applies the returned
//! [`CommitOutcome`]; nothing here touches the browser.

use std::collections::BTreeSet;

use super::chips::{derive_view, next_url_state, FilterChipKey, FilterView};
use super::url_state::{FilterField, FilterSet, UrlState};
use crate::shared::query_string::href_with_query;

pub const DEFAULT_DEBOUNCE_MS: u32 = 400;

/// Identifies one scheduled commit. Tickets are never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CommitTicket(u64);

/// Handle of a scheduled commit.
pub trait ScheduledCommit {
    fn cancel(self);
}

/// Runs deferred commits. When `delay_ms` elapses the host must call
/// [`FilterSynchronizer::fire`] with the ticket.
pub trait CommitScheduler {
    type Handle: ScheduledCommit;

    fn schedule(&mut self, delay_ms: u32, ticket: CommitTicket) -> Self::Handle;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SyncPhase {
    Idle,
    Editing,
}

/// What the host should do after a commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CommitOutcome {
    /// Replace the current history entry with `href`.
    Navigate { href: String },
    /// URL unchanged, but the caller asked to re-fetch.
    Refresh,
    Unchanged,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CommitOptions {
    pub refresh_if_unchanged: bool,
    /// Go back to page 0 even when the filters did not change.
    pub reset_page: bool,
}

pub struct FilterSynchronizer<S: CommitScheduler> {
    path: String,
    url_state: UrlState,
    draft: FilterSet,
    /// Fields edited since the last commit; guarded against URL re-sync.
    edited: BTreeSet<FilterField>,
    pending: Option<(CommitTicket, S::Handle)>,
    next_ticket: u64,
    scheduler: S,
    debounce_ms: u32,
}

impl<S: CommitScheduler> FilterSynchronizer<S> {
    pub fn new(path: impl Into<String>, url_state: UrlState, scheduler: S) -> Self {
        Self {
            path: path.into(),
            draft: url_state.filters.clone(),
            url_state,
            edited: BTreeSet::new(),
            pending: None,
            next_ticket: 0,
            scheduler,
            debounce_ms: DEFAULT_DEBOUNCE_MS,
        }
    }

    pub fn with_debounce(mut self, debounce_ms: u32) -> Self {
        self.debounce_ms = debounce_ms;
        self
    }

    pub fn phase(&self) -> SyncPhase {
        if self.edited.is_empty() {
            SyncPhase::Idle
        } else {
            SyncPhase::Editing
        }
    }

    pub fn draft(&self) -> &FilterSet {
        &self.draft
    }

    pub fn url_state(&self) -> &UrlState {
        &self.url_state
    }

    pub fn has_pending_commit(&self) -> bool {
        self.pending.is_some()
    }

    pub fn view(&self) -> FilterView {
        derive_view(&self.draft, &self.url_state)
    }

    /// User typed into a field; (re)starts the debounce window.
    pub fn edit(&mut self, field: FilterField, value: impl Into<String>) {
        self.draft.set(field, value);
        self.edited.insert(field);
        self.cancel_pending();

        let ticket = CommitTicket(self.next_ticket);
        self.next_ticket += 1;
        let handle = self.scheduler.schedule(self.debounce_ms, ticket);
        self.pending = Some((ticket, handle));
    }

    /// The debounce window of `ticket` elapsed. Stale tickets yield `None`.
    pub fn fire(&mut self, ticket: CommitTicket) -> Option<CommitOutcome> {
        match self.pending.take() {
            Some((pending, _elapsed)) if pending == ticket => {
                Some(self.commit(CommitOptions::default()))
            }
            other => {
                self.pending = other;
                log::debug!("Ignoring stale filter commit {:?}", ticket);
                None
            }
        }
    }

    /// Form submission: commit now.
    pub fn search(&mut self, options: CommitOptions) -> CommitOutcome {
        self.cancel_pending();
        self.commit(options)
    }

    /// Reset every field and commit now.
    pub fn clear(&mut self) -> CommitOutcome {
        self.cancel_pending();
        self.draft = FilterSet::default();
        self.commit(CommitOptions {
            reset_page: true,
            ..CommitOptions::default()
        })
    }

    /// Drop one active filter and commit now.
    pub fn remove_chip(&mut self, key: FilterChipKey) -> CommitOutcome {
        self.cancel_pending();
        for field in key.fields() {
            self.draft.clear(*field);
        }
        self.commit(CommitOptions::default())
    }

    /// The URL changed outside the synchronizer (pager, back/forward).
    ///
    /// Fields edited since the last commit keep their draft value.
    pub fn sync_from_url(&mut self, url_state: UrlState) {
        if url_state == self.url_state {
            return;
        }
        for field in FilterField::ALL {
            if !self.edited.contains(&field) {
                self.draft.set(field, url_state.filters.get(field));
            }
        }
        self.url_state = url_state;
    }

    /// Cancel any pending commit. Called on unmount.
    pub fn teardown(&mut self) {
        self.cancel_pending();
        self.edited.clear();
    }

    fn cancel_pending(&mut self) {
        if let Some((_, handle)) = self.pending.take() {
            handle.cancel();
        }
    }

    fn commit(&mut self, options: CommitOptions) -> CommitOutcome {
        self.edited.clear();

        let mut next = next_url_state(&self.draft, &self.url_state);
        if options.reset_page {
            next.page = 0;
        }
        let next_query = next.to_query_string();

        if next_query == self.url_state.to_query_string() {
            return if options.refresh_if_unchanged {
                log::debug!("Filters unchanged, refreshing");
                CommitOutcome::Refresh
            } else {
                CommitOutcome::Unchanged
            };
        }

        let href = href_with_query(&self.path, &next_query);
        log::debug!("Filters committed: {}", href);
        self.url_state = next;
        CommitOutcome::Navigate { href }
    }
}

impl<S: CommitScheduler> Drop for FilterSynchronizer<S> {
    fn drop(&mut self) {
        self.cancel_pending();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::{Cell, RefCell};
    use std::rc::Rc;

    const PATH: &str = "/policy-terms";

    struct Timer {
        due: u64,
        ticket: CommitTicket,
        cancelled: Rc<Cell<bool>>,
    }

    #[derive(Default)]
    struct ClockState {
        now: u64,
        timers: Vec<Timer>,
    }

    /// Virtual time; timers only fire from `advance`.
    #[derive(Clone, Default)]
    struct ManualClock {
        inner: Rc<RefCell<ClockState>>,
    }

    struct ManualHandle {
        cancelled: Rc<Cell<bool>>,
    }

    impl ScheduledCommit for ManualHandle {
        fn cancel(self) {
            self.cancelled.set(true);
        }
    }

    impl CommitScheduler for ManualClock {
        type Handle = ManualHandle;

        fn schedule(&mut self, delay_ms: u32, ticket: CommitTicket) -> ManualHandle {
            let cancelled = Rc::new(Cell::new(false));
            let mut state = self.inner.borrow_mut();
            let due = state.now + u64::from(delay_ms);
            state.timers.push(Timer {
                due,
                ticket,
                cancelled: cancelled.clone(),
            });
            ManualHandle { cancelled }
        }
    }

    impl ManualClock {
        fn live_timers(&self) -> usize {
            self.inner
                .borrow()
                .timers
                .iter()
                .filter(|t| !t.cancelled.get())
                .count()
        }

        fn next_due(&self, until: u64) -> Option<(u64, CommitTicket)> {
            let mut state = self.inner.borrow_mut();
            let index = state
                .timers
                .iter()
                .enumerate()
                .filter(|(_, t)| !t.cancelled.get() && t.due <= until)
                .min_by_key(|(_, t)| t.due)
                .map(|(i, _)| i)?;
            let timer = state.timers.remove(index);
            Some((timer.due, timer.ticket))
        }

        /// Move time forward, firing due timers in order.
        fn advance(
            &self,
            sync: &mut FilterSynchronizer<ManualClock>,
            ms: u64,
        ) -> Vec<CommitOutcome> {
            let until = self.inner.borrow().now + ms;
            let mut outcomes = Vec::new();
            while let Some((due, ticket)) = self.next_due(until) {
                self.inner.borrow_mut().now = due;
                outcomes.extend(sync.fire(ticket));
            }
            self.inner.borrow_mut().now = until;
            outcomes
        }
    }

    fn setup(query: &str) -> (FilterSynchronizer<ManualClock>, ManualClock) {
        let clock = ManualClock::default();
        let sync = FilterSynchronizer::new(PATH, UrlState::parse(query), clock.clone());
        (sync, clock)
    }

    fn navigations(outcomes: &[CommitOutcome]) -> Vec<&str> {
        outcomes
            .iter()
            .filter_map(|o| match o {
                CommitOutcome::Navigate { href } => Some(href.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_single_edit_navigates_after_window() {
        let (mut sync, clock) = setup("");
        sync.edit(FilterField::Keyword, "acme");
        assert_eq!(sync.phase(), SyncPhase::Editing);

        assert!(clock.advance(&mut sync, 399).is_empty());
        let outcomes = clock.advance(&mut sync, 1);
        assert_eq!(
            navigations(&outcomes),
            vec!["/policy-terms?q=acme&page=0&size=20&sort=effective_to_date%2Casc"]
        );
        assert_eq!(sync.phase(), SyncPhase::Idle);
        assert!(!sync.has_pending_commit());
        assert!(clock.advance(&mut sync, 5_000).is_empty());
    }

    #[test]
    fn test_burst_of_edits_navigates_once_with_final_value() {
        let (mut sync, clock) = setup("");
        sync.edit(FilterField::Keyword, "a");
        clock.advance(&mut sync, 150);
        sync.edit(FilterField::Keyword, "ac");
        clock.advance(&mut sync, 150);
        sync.edit(FilterField::Keyword, "acm");
        assert_eq!(clock.live_timers(), 1);

        let outcomes = clock.advance(&mut sync, 1_000);
        assert_eq!(
            navigations(&outcomes),
            vec!["/policy-terms?q=acm&page=0&size=20&sort=effective_to_date%2Casc"]
        );
    }

    #[test]
    fn test_search_cancels_pending_and_commits_now() {
        let (mut sync, clock) = setup("");
        sync.edit(FilterField::State, "NY");

        let outcome = sync.search(CommitOptions::default());
        assert_eq!(
            outcome,
            CommitOutcome::Navigate {
                href: "/policy-terms?state=NY&page=0&size=20&sort=effective_to_date%2Casc".into()
            }
        );
        assert_eq!(clock.live_timers(), 0);
        assert!(clock.advance(&mut sync, 1_000).is_empty());
    }

    #[test]
    fn test_unchanged_search_refreshes_only_on_request() {
        let (mut sync, _clock) = setup("q=acme&page=2");
        assert_eq!(sync.search(CommitOptions::default()), CommitOutcome::Unchanged);
        assert_eq!(
            sync.search(CommitOptions {
                refresh_if_unchanged: true,
                ..CommitOptions::default()
            }),
            CommitOutcome::Refresh
        );
        assert_eq!(sync.url_state().page, 2);
    }

    #[test]
    fn test_edit_back_to_committed_value_does_not_navigate() {
        let (mut sync, clock) = setup("q=acme");
        sync.edit(FilterField::Keyword, "acm");
        sync.edit(FilterField::Keyword, "acme ");
        assert!(navigations(&clock.advance(&mut sync, 400)).is_empty());
        assert_eq!(sync.phase(), SyncPhase::Idle);
    }

    #[test]
    fn test_clear_resets_all_fields() {
        let (mut sync, _clock) = setup(
            "q=acme&state=CA&status=ACTIVE&date_field=effective&date_from=2024-01-01&page=4&size=50&sort=status%2Cdesc",
        );
        let outcome = sync.clear();
        assert_eq!(
            outcome,
            CommitOutcome::Navigate {
                href: "/policy-terms?page=0&size=50&sort=status%2Cdesc".into()
            }
        );
        assert_eq!(sync.draft(), &FilterSet::default());
        assert!(sync.view().chips.is_empty());
    }

    #[test]
    fn test_clear_without_filters_returns_to_first_page() {
        let (mut sync, _clock) = setup("page=3");
        assert_eq!(
            sync.clear(),
            CommitOutcome::Navigate {
                href: "/policy-terms?page=0&size=20&sort=effective_to_date%2Casc".into()
            }
        );
        assert_eq!(sync.url_state().page, 0);

        let (mut sync, _clock) = setup("page=0");
        assert_eq!(sync.clear(), CommitOutcome::Unchanged);
    }

    #[test]
    fn test_remove_chip_commits_remaining_filters() {
        let (mut sync, _clock) = setup("q=acme&state=CA&page=3");
        let outcome = sync.remove_chip(FilterChipKey::State);
        assert_eq!(
            outcome,
            CommitOutcome::Navigate {
                href: "/policy-terms?q=acme&page=0&size=20&sort=effective_to_date%2Casc".into()
            }
        );
        assert_eq!(sync.draft().state, "");
        assert_eq!(sync.draft().q, "acme");
    }

    #[test]
    fn test_remove_date_range_chip_clears_both_endpoints() {
        let (mut sync, _clock) = setup("date_from=2024-01-01&date_to=2024-02-01");
        sync.remove_chip(FilterChipKey::DateRange);
        assert_eq!(sync.draft().date_from, "");
        assert_eq!(sync.draft().date_to, "");
    }

    #[test]
    fn test_external_url_change_resyncs_draft() {
        let (mut sync, _clock) = setup("q=acme");
        sync.sync_from_url(UrlState::parse("q=kim&status=EXPIRED&page=1"));
        assert_eq!(sync.draft().q, "kim");
        assert_eq!(sync.draft().status, "EXPIRED");
        assert_eq!(sync.phase(), SyncPhase::Idle);
    }

    #[test]
    fn test_external_url_change_preserves_field_being_edited() {
        let (mut sync, clock) = setup("q=acme&state=CA");
        sync.edit(FilterField::Keyword, "acme holdings");
        sync.sync_from_url(UrlState::parse("q=acme&state=TX&page=5"));

        assert_eq!(sync.draft().q, "acme holdings");
        assert_eq!(sync.draft().state, "TX");
        assert!(sync.has_pending_commit());

        let outcomes = clock.advance(&mut sync, 400);
        assert_eq!(
            navigations(&outcomes),
            vec!["/policy-terms?q=acme%20holdings&state=TX&page=0&size=20&sort=effective_to_date%2Casc"]
        );
    }

    #[test]
    fn test_own_navigation_echo_is_noop() {
        let (mut sync, _clock) = setup("");
        sync.search(CommitOptions::default());
        sync.edit(FilterField::Keyword, "walker");
        let committed = match sync.search(CommitOptions::default()) {
            CommitOutcome::Navigate { href } => href,
            other => panic!("expected navigation, got {:?}", other),
        };
        sync.edit(FilterField::State, "OR");

        let query = committed.split_once('?').map(|(_, q)| q).unwrap_or("");
        sync.sync_from_url(UrlState::parse(query));
        assert_eq!(sync.draft().state, "OR");
        assert_eq!(sync.phase(), SyncPhase::Editing);
    }

    #[test]
    fn test_pager_navigation_keeps_page_on_unchanged_search() {
        let (mut sync, _clock) = setup("status=ACTIVE");
        sync.sync_from_url(UrlState::parse("status=ACTIVE&page=2"));
        assert_eq!(sync.search(CommitOptions::default()), CommitOutcome::Unchanged);
    }

    #[test]
    fn test_teardown_cancels_pending_commit() {
        let (mut sync, clock) = setup("");
        sync.edit(FilterField::Status, "CANCELLED");
        assert_eq!(clock.live_timers(), 1);

        sync.teardown();
        assert_eq!(clock.live_timers(), 0);
        assert!(clock.advance(&mut sync, 1_000).is_empty());
    }

    #[test]
    fn test_drop_cancels_pending_commit() {
        let (mut sync, clock) = setup("");
        sync.edit(FilterField::Status, "EXPIRED");
        drop(sync);
        assert_eq!(clock.live_timers(), 0);
    }

    #[test]
    fn test_stale_ticket_is_ignored() {
        let (mut sync, _clock) = setup("");
        sync.edit(FilterField::Keyword, "a");
        sync.edit(FilterField::Keyword, "ab");
        assert_eq!(sync.fire(CommitTicket(0)), None);
        assert!(sync.has_pending_commit());
        assert!(matches!(
            sync.fire(CommitTicket(1)),
            Some(CommitOutcome::Navigate { .. })
        ));
    }

    #[test]
    fn test_view_tracks_draft() {
        let (mut sync, _clock) = setup("page=2");
        sync.edit(FilterField::DateField, "effective");
        sync.edit(FilterField::DateTo, "2024-06-30");
        let view = sync.view();
        assert_eq!(view.chips.len(), 1);
        assert_eq!(view.chips[0].label, "Effective: … to 2024-06-30");
        assert_eq!(
            view.query_preview,
            "date_field=effective&date_to=2024-06-30&page=0&size=20&sort=effective_to_date%2Casc"
        );
    }

    #[test]
    fn test_custom_debounce_window() {
        let clock = ManualClock::default();
        let mut sync = FilterSynchronizer::new(PATH, UrlState::default(), clock.clone())
            .with_debounce(50);
        sync.edit(FilterField::Keyword, "x");
        assert_eq!(navigations(&clock.advance(&mut sync, 50)).len(), 1);
    }
}

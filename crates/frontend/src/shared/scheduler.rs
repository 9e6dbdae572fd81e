//! Browser-side commit scheduling for the filter synchronizer.
//!
//! A `gloo_timers` timeout writes the ticket into a signal when it elapses;
//! the owning component watches that signal and calls `fire`.

use contracts::domain::a001_policy_terms::filter_sync::{
    CommitScheduler, CommitTicket, ScheduledCommit,
};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

pub struct BrowserScheduler {
    fired: WriteSignal<Option<CommitTicket>>,
}

impl BrowserScheduler {
    pub fn new(fired: WriteSignal<Option<CommitTicket>>) -> Self {
        Self { fired }
    }
}

pub struct BrowserTimeout(Timeout);

impl ScheduledCommit for BrowserTimeout {
    fn cancel(self) {
        // the returned closure is the never-run callback
        drop(self.0.cancel());
    }
}

impl CommitScheduler for BrowserScheduler {
    type Handle = BrowserTimeout;

    fn schedule(&mut self, delay_ms: u32, ticket: CommitTicket) -> BrowserTimeout {
        let fired = self.fired;
        BrowserTimeout(Timeout::new(delay_ms, move || {
            // the page may already be gone
            let _ = fired.try_set(Some(ticket));
        }))
    }
}

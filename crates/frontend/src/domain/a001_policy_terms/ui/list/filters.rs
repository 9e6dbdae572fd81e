//! Filter bar of the policy terms list.
//!
//! Owns a `FilterSynchronizer` for the lifetime of the list page. The
//! synchronizer decides when to navigate; this component only renders the
//! draft and applies the returned outcomes to the router.

use contracts::domain::a001_policy_terms::chips::{FilterChipKey, FilterView};
use contracts::domain::a001_policy_terms::filter_sync::{
    CommitOptions, CommitOutcome, CommitTicket, FilterSynchronizer,
};
use contracts::domain::a001_policy_terms::url_state::{DateField, FilterField, FilterSet, UrlState};
use contracts::domain::a001_policy_terms::LIST_PATH;
use leptos::ev;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use thaw::*;

use crate::shared::components::date_input::DateInput;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::config::config;
use crate::shared::scheduler::BrowserScheduler;

type Synchronizer = FilterSynchronizer<BrowserScheduler>;

#[component]
pub fn PolicyTermsFilters(
    /// Committed state parsed from the current location
    #[prop(into)]
    url_state: Signal<UrlState>,
    /// Whether a fetch is in flight
    #[prop(into)]
    busy: Signal<bool>,
    /// Re-fetch the current URL without navigating
    on_refresh: Callback<()>,
) -> impl IntoView {
    let (fired, set_fired) = signal(None::<CommitTicket>);
    let sync = StoredValue::new_local(
        Synchronizer::new(
            LIST_PATH,
            url_state.get_untracked(),
            BrowserScheduler::new(set_fired),
        )
        .with_debounce(config().filters.debounce_ms),
    );
    let navigate = StoredValue::new_local(use_navigate());

    let draft = RwSignal::new(FilterSet::default());
    let filter_view = RwSignal::new(FilterView::default());
    let is_expanded = RwSignal::new(true);

    // Mirror the synchronizer into signals after every mutation
    let publish = move || {
        sync.with_value(|s| {
            draft.set(s.draft().clone());
            filter_view.set(s.view());
        });
    };
    publish();

    let apply = move |outcome: CommitOutcome| match outcome {
        CommitOutcome::Navigate { href } => navigate.with_value(|nav| {
            nav(
                &href,
                NavigateOptions {
                    replace: true,
                    ..Default::default()
                },
            )
        }),
        CommitOutcome::Refresh => on_refresh.run(()),
        CommitOutcome::Unchanged => {}
    };

    let run = move |op: &dyn Fn(&mut Synchronizer) -> CommitOutcome| {
        let mut outcome = CommitOutcome::Unchanged;
        sync.update_value(|s| outcome = op(s));
        publish();
        apply(outcome);
    };

    let on_edit = move |field: FilterField, value: String| {
        sync.update_value(|s| s.edit(field, value));
        publish();
    };

    // Debounce timer elapsed
    Effect::new(move |_| {
        if let Some(ticket) = fired.get() {
            let mut outcome = None;
            sync.update_value(|s| outcome = s.fire(ticket));
            publish();
            if let Some(outcome) = outcome {
                apply(outcome);
            }
        }
    });

    // Back/forward or a pager link changed the URL
    Effect::new(move |_| {
        let next = url_state.get();
        sync.update_value(|s| s.sync_from_url(next));
        publish();
    });

    on_cleanup(move || {
        let _ = sync.try_update_value(|s| s.teardown());
    });

    let on_submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        run(&|s| {
            s.search(CommitOptions {
                refresh_if_unchanged: true,
                ..CommitOptions::default()
            })
        });
    };

    let text_input = move |field: FilterField, placeholder: &'static str| {
        view! {
            <input
                type="text"
                class="filter-input"
                placeholder=placeholder
                aria-label=placeholder
                prop:value=move || draft.with(|d| d.get(field).to_string())
                on:input=move |ev| on_edit(field, event_target_value(&ev))
            />
        }
    };

    let date_input = move |field: FilterField, label: &'static str| {
        view! {
            <DateInput
                label=label
                value=Signal::derive(move || draft.with(|d| d.get(field).to_string()))
                on_change=move |value| on_edit(field, value)
            />
        }
    };

    view! {
        <form class="policy-filters" on:submit=on_submit>
            <FilterPanel
                is_expanded=is_expanded
                active_filters_count=Signal::derive(move || filter_view.with(|v| v.chips.len()))
            >
                <Flex gap=FlexGap::Small align=FlexAlign::End attr:style="flex-wrap: wrap;">
                    {text_input(FilterField::Keyword, "Search policy # or insured")}
                    {text_input(FilterField::State, "State (e.g. CA)")}
                    {text_input(FilterField::Status, "Status")}
                    <select
                        class="filter-input"
                        aria-label="Date field"
                        prop:value=move || draft.with(|d| d.date_field.as_str().to_string())
                        on:change=move |ev| on_edit(FilterField::DateField, event_target_value(&ev))
                    >
                        {DateField::ALL
                            .into_iter()
                            .map(|field| view! { <option value=field.as_str()>{field.label()}</option> })
                            .collect_view()}
                    </select>
                    {date_input(FilterField::DateFrom, "From date")}
                    {date_input(FilterField::DateTo, "To date")}
                    <button type="submit" class="button button--primary" disabled=move || busy.get()>
                        "Search"
                    </button>
                    <Button
                        appearance=ButtonAppearance::Secondary
                        on_click=move |_| run(&|s| s.clear())
                    >
                        "Clear"
                    </Button>
                </Flex>

                <div class="filter-panel__tags">
                    {move || {
                        filter_view
                            .with(|v| v.chips.clone())
                            .into_iter()
                            .map(|chip| {
                                let key: FilterChipKey = chip.key;
                                view! {
                                    <FilterTag
                                        label=chip.label
                                        on_remove=Callback::new(move |_| run(&|s| s.remove_chip(key)))
                                    />
                                }
                            })
                            .collect_view()
                    }}
                    <Show when=move || filter_view.with(|v| !v.chips.is_empty())>
                        <button
                            type="button"
                            class="filter-panel__clear-all"
                            on:click=move |_| run(&|s| s.clear())
                        >
                            "Clear all"
                        </button>
                    </Show>
                </div>

                <div class="filter-panel__preview">
                    <span class="filter-panel__preview-label">"Query: "</span>
                    <code>{move || filter_view.with(|v| v.query_preview.clone())}</code>
                </div>
            </FilterPanel>
        </form>
    }
}

pub mod filters;
pub mod state;

use self::filters::PolicyTermsFilters;
use self::state::{apply_response, create_state};
use crate::domain::a001_policy_terms::api;
use crate::shared::components::page_header::{PageHeader, WarningBanner};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::date_utils::format_date;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use contracts::domain::a001_policy_terms::listing::ListingSummary;
use contracts::domain::a001_policy_terms::refine::refine_page;
use contracts::domain::a001_policy_terms::response::{PolicyTermPage, PolicyTermSummary};
use contracts::domain::a001_policy_terms::url_state::UrlState;
use contracts::domain::a001_policy_terms::{detail_href, LIST_PATH};
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_location;
use thaw::*;

#[component]
pub fn PolicyTermList() -> impl IntoView {
    let location = use_location();
    let url_state = Memo::new(move |_| UrlState::parse(&location.search.get()));
    let state = create_state();
    let (loading, set_loading) = signal(false);
    let (refresh_tick, set_refresh_tick) = signal(0u64);

    // Re-fetch whenever the URL state changes or a refresh is requested
    Effect::new(move |_| {
        let current = url_state.get();
        refresh_tick.track();

        let seq = state.with_untracked(|s| s.request_seq) + 1;
        state.update(|s| s.request_seq = seq);
        set_loading.set(true);

        spawn_local(async move {
            let result = api::fetch_policy_terms(&current).await;
            apply_response(state, seq, result);
            let _ = set_loading.try_set(false);
        });
    });

    let on_refresh = Callback::new(move |_: ()| set_refresh_tick.update(|t| *t += 1));

    view! {
        <PageFrame page_id="a001_policy_terms--list" category=PAGE_CAT_LIST>
            <PageHeader
                eyebrow="Oasis Horizon"
                title="Policy Terms"
                subtitle="Read-only policy inquiry for underwriters."
            >
                {()}
            </PageHeader>

            <PolicyTermsFilters url_state=url_state busy=loading on_refresh=on_refresh />

            {move || {
                state.with(|s| {
                    if !s.is_loaded {
                        view! {
                            <div class="page__loading">
                                <Spinner />
                            </div>
                        }
                        .into_any()
                    } else if let Some(err) = &s.error {
                        view! {
                            <WarningBanner
                                title="Policy terms are temporarily unavailable."
                                message=err.to_string()
                            />
                        }
                        .into_any()
                    } else if let Some(page) = &s.page {
                        render_page(page, &url_state.get())
                    } else {
                        view! { <></> }.into_any()
                    }
                })
            }}
        </PageFrame>
    }
}

fn render_page(page: &PolicyTermPage, url_state: &UrlState) -> AnyView {
    let rows = refine_page(&page.items, &url_state.filters);
    let summary = ListingSummary::new(LIST_PATH, url_state, page, rows.len());
    let caption = summary.caption();
    let empty_state = summary.empty_state;

    view! {
        <div class="list-toolbar">
            <span class="list-toolbar__caption">{caption}</span>
            <PaginationControls summary=summary.clone() />
        </div>

        <div class="table-wrapper">
            <Table attr:style="width: 100%;">
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell>"Policy"</TableHeaderCell>
                        <TableHeaderCell>"Insured"</TableHeaderCell>
                        <TableHeaderCell>"Status"</TableHeaderCell>
                        <TableHeaderCell>"Term"</TableHeaderCell>
                        <TableHeaderCell>"Effective"</TableHeaderCell>
                        <TableHeaderCell>"Expiration"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>
                    {rows
                        .into_iter()
                        .map(|term| view! { <PolicyTermRow term=term /> })
                        .collect_view()}
                    {empty_state.title().map(|title| view! {
                        <TableRow>
                            <TableCell attr:colspan="6">
                                <div class="empty-state">
                                    <p class="empty-state__title">{title}</p>
                                    {empty_state.hint().map(|hint| view! {
                                        <p class="empty-state__hint">{hint}</p>
                                    })}
                                </div>
                            </TableCell>
                        </TableRow>
                    })}
                </TableBody>
            </Table>
        </div>

        <div class="list-toolbar list-toolbar--bottom">
            <PaginationControls summary=summary />
        </div>
    }
    .into_any()
}

#[component]
fn PolicyTermRow(term: PolicyTermSummary) -> impl IntoView {
    let href = detail_href(&term.id.to_string());
    let term_label = format!("#{} · {}", term.term_number, term.state);

    view! {
        <TableRow>
            <TableCell>
                <a class="table__link" href=href>{term.policy_number}</a>
            </TableCell>
            <TableCell>{term.insured_name}</TableCell>
            <TableCell>
                <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                    {term.status}
                </Badge>
            </TableCell>
            <TableCell>{term_label}</TableCell>
            <TableCell>{format_date(term.effective_from_date)}</TableCell>
            <TableCell>{format_date(term.effective_to_date)}</TableCell>
        </TableRow>
    }
}

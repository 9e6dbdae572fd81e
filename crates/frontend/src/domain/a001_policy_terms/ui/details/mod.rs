use crate::domain::a001_policy_terms::api;
use crate::shared::components::page_header::{PageHeader, WarningBanner};
use crate::shared::date_utils::{format_date, format_money, format_optional_date, format_timestamp};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DETAIL};
use contracts::domain::a001_policy_terms::response::PolicyTermDetail;
use contracts::domain::a001_policy_terms::LIST_PATH;
use contracts::shared::api_result::ApiError;
use leptos::logging::log;
use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_router::hooks::use_params_map;
use thaw::*;

#[component]
pub fn PolicyTermDetails() -> impl IntoView {
    let params = use_params_map();
    let term_id = Memo::new(move |_| params.with(|p| p.get("term_id").unwrap_or_default()));

    let (detail, set_detail) = signal::<Option<PolicyTermDetail>>(None);
    let (error, set_error) = signal::<Option<ApiError>>(None);
    let (loading, set_loading) = signal(true);

    Effect::new(move |_| {
        let id = term_id.get();
        set_loading.set(true);
        spawn_local(async move {
            let result = api::fetch_policy_term(&id).await;
            // Skip responses for a page that was left or a term no longer shown
            if term_id.try_get_untracked().as_deref() != Some(id.as_str()) {
                return;
            }
            match result {
                Ok(term) => {
                    let _ = set_detail.try_set(Some(term));
                    let _ = set_error.try_set(None);
                }
                Err(err) => {
                    log!("Failed to load policy term {}: {:?}", id, err);
                    let _ = set_detail.try_set(None);
                    let _ = set_error.try_set(Some(err));
                }
            }
            let _ = set_loading.try_set(false);
        });
    });

    view! {
        <PageFrame page_id="a001_policy_terms--detail" category=PAGE_CAT_DETAIL>
            <a class="back-link" href=LIST_PATH>
                {icon("chevron-left")}
                <span>"Back to policy terms"</span>
            </a>

            {move || {
                if loading.get() {
                    return view! {
                        <div class="page__loading">
                            <Spinner />
                        </div>
                    }
                    .into_any();
                }
                if let Some(err) = error.get() {
                    return view! {
                        <PageHeader eyebrow="Policy Term" title="Policy term">
                            {()}
                        </PageHeader>
                        <WarningBanner
                            title="This policy term could not be loaded."
                            message=err.to_string()
                        />
                    }
                    .into_any();
                }
                match detail.get() {
                    Some(term) => render_detail(term).into_any(),
                    None => view! { <></> }.into_any(),
                }
            }}
        </PageFrame>
    }
}

fn render_detail(term: PolicyTermDetail) -> impl IntoView {
    let summary = term.summary;
    let fields: Vec<(&'static str, String)> = vec![
        ("Term", format!("#{}", summary.term_number)),
        ("Status", summary.status.clone()),
        ("State", summary.state.clone()),
        ("Balance Due", format_money(&summary.balance_due)),
        ("Effective", format_date(summary.effective_from_date)),
        ("Expiration", format_date(summary.effective_to_date)),
        ("Next Due", format_optional_date(summary.next_due_date)),
        ("Last Payment", format_optional_date(summary.last_payment_date)),
        ("Created", format_timestamp(&term.created_at)),
        ("Updated", format_timestamp(&term.updated_at)),
    ];

    view! {
        <PageHeader
            eyebrow="Policy Term"
            title=summary.policy_number
            subtitle=summary.insured_name
        >
            <Badge appearance=BadgeAppearance::Tint color=BadgeColor::Brand>
                {summary.status}
            </Badge>
        </PageHeader>

        <dl class="detail-grid">
            {fields
                .into_iter()
                .map(|(label, value)| view! {
                    <div class="detail-grid__item">
                        <dt class="detail-grid__label">{label}</dt>
                        <dd class="detail-grid__value">{value}</dd>
                    </div>
                })
                .collect_view()}
        </dl>
    }
}

use crate::shared::page_frame::{PageFrame, PAGE_CAT_SYSTEM};
use contracts::domain::a001_policy_terms::LIST_PATH;
use leptos::prelude::*;

#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <PageFrame page_id="home--system" category=PAGE_CAT_SYSTEM>
            <div class="home">
                <p class="home__eyebrow">"Oasis Horizon"</p>
                <h1 class="home__title">"Policy Inquiry/Search"</h1>
                <p class="home__lead">
                    "A read-only workspace for underwriters to explore policies, "
                    "grounded summaries, and AI-assisted search."
                </p>
                <a class="button button--primary" href=LIST_PATH>"Browse policy terms"</a>
            </div>
        </PageFrame>
    }
}

#[component]
pub fn NotFoundPage() -> impl IntoView {
    view! {
        <PageFrame page_id="not-found--system" category=PAGE_CAT_SYSTEM>
            <div class="home">
                <h1 class="home__title">"Page not found"</h1>
                <a href="/">"Back to home"</a>
            </div>
        </PageFrame>
    }
}

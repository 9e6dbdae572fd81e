use crate::domain::a001_policy_terms::ui::details::PolicyTermDetails;
use crate::domain::a001_policy_terms::ui::list::PolicyTermList;
use crate::layout::Shell;
use crate::system::pages::home::{HomePage, NotFoundPage};
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/policy-terms") view=PolicyTermList />
                    <Route path=path!("/policy-terms/:term_id") view=PolicyTermDetails />
                </Routes>
            </Shell>
        </Router>
    }
}

//! TopHeader component - application top navigation bar.

use crate::shared::icons::icon;
use contracts::domain::a001_policy_terms::LIST_PATH;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    view! {
        <div class="top-header">
            <div class="top-header__brand">
                {icon("policy")}
                <a class="top-header__title" href="/">"Oasis Horizon"</a>
            </div>

            <nav class="top-header__nav">
                <a class="top-header__link" href="/">"Home"</a>
                <a class="top-header__link" href=LIST_PATH>"Policy Terms"</a>
            </nav>
        </div>
    }
}

pub mod assistant;
pub mod top_header;

use assistant::AssistantDrawerToggle;
use leptos::prelude::*;
use top_header::TopHeader;

/// Main application shell.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |              Routed page                 |
/// |                               [assistant]|
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <TopHeader />

            <main class="app-main">
                {children()}
            </main>

            <AssistantDrawerToggle />
        </div>
    }
}

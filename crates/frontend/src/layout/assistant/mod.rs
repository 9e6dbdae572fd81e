//! Assistant drawer: a floating toggle and a slide-in panel with tabs.
//!
//! The panel is a placeholder surface; tabs show static text only.

use crate::shared::icons::icon;
use leptos::ev;
use leptos::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistantTab {
    Search,
    Summary,
}

impl AssistantTab {
    pub const ALL: [AssistantTab; 2] = [AssistantTab::Search, AssistantTab::Summary];

    pub fn label(self) -> &'static str {
        match self {
            AssistantTab::Search => "AI Search",
            AssistantTab::Summary => "Policy Summary",
        }
    }

    pub fn placeholder(self) -> &'static str {
        match self {
            AssistantTab::Search => {
                "Ask questions about policies in plain language. AI search is coming soon."
            }
            AssistantTab::Summary => {
                "Grounded summaries of the selected policy will appear here."
            }
        }
    }
}

pub fn toggle_label(open: bool) -> &'static str {
    if open {
        "Close Assistant"
    } else {
        "Open Assistant"
    }
}

/// Floating button that opens and closes the drawer
#[component]
pub fn AssistantDrawerToggle() -> impl IntoView {
    let open = RwSignal::new(false);
    let label = move || toggle_label(open.get());

    view! {
        <button
            type="button"
            class="assistant-toggle"
            title=label
            aria-label=label
            aria-expanded=move || open.get().to_string()
            on:click=move |_| open.update(|o| *o = !*o)
        >
            {icon("sparkles")}
        </button>
        <AssistantDrawer open=open />
    }
}

#[component]
pub fn AssistantDrawer(open: RwSignal<bool>) -> impl IntoView {
    let active_tab = RwSignal::new(AssistantTab::Search);

    let handle = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && open.get_untracked() {
            open.set(false);
        }
    });
    on_cleanup(move || handle.remove());

    view! {
        <Show when=move || open.get()>
            <div class="assistant-drawer" role="dialog" aria-modal="true" aria-label="Assistant">
                <button
                    type="button"
                    class="assistant-drawer__backdrop"
                    aria-label="Close Assistant"
                    on:click=move |_| open.set(false)
                ></button>

                <aside class="assistant-drawer__panel">
                    <div class="assistant-drawer__header">
                        <h2 class="assistant-drawer__title">"Assistant"</h2>
                        <button
                            type="button"
                            class="assistant-drawer__close"
                            aria-label="Close Assistant"
                            on:click=move |_| open.set(false)
                        >
                            {icon("x")}
                        </button>
                    </div>

                    <div class="assistant-drawer__tabs" role="tablist">
                        {AssistantTab::ALL
                            .into_iter()
                            .map(|tab| view! {
                                <button
                                    type="button"
                                    role="tab"
                                    aria-selected=move || (active_tab.get() == tab).to_string()
                                    class=move || {
                                        if active_tab.get() == tab {
                                            "assistant-tab assistant-tab--active"
                                        } else {
                                            "assistant-tab"
                                        }
                                    }
                                    on:click=move |_| active_tab.set(tab)
                                >
                                    {tab.label()}
                                </button>
                            })
                            .collect_view()}
                    </div>

                    <div class="assistant-drawer__body" role="tabpanel">
                        <p>{move || active_tab.get().placeholder()}</p>
                    </div>
                </aside>
            </div>
        </Show>
    }
}

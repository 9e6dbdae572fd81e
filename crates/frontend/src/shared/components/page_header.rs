use leptos::prelude::*;

/// PageHeader component - reusable header for list and detail pages
#[component]
pub fn PageHeader(
    /// Page title (required)
    #[prop(into)]
    title: String,

    /// Small caption above the title
    #[prop(optional, into)]
    eyebrow: MaybeProp<String>,

    /// Optional subtitle
    #[prop(optional, into)]
    subtitle: MaybeProp<String>,

    /// Children content (pass empty fragment if not needed)
    children: Children,
) -> impl IntoView {
    view! {
        <div class="page-header">
            <div class="page-header__content">
                <div class="page-header__text">
                    {move || eyebrow.get().map(|s| view! {
                        <div class="page-header__eyebrow">{s}</div>
                    })}
                    <h1 class="page-header__title">{title}</h1>
                    {move || subtitle.get().map(|s| view! {
                        <div class="page-header__subtitle">{s}</div>
                    })}
                </div>
            </div>
            <div class="page-header__actions">
                {children()}
            </div>
        </div>
    }
}

/// Non-blocking warning shown when a fetch fails
#[component]
pub fn WarningBanner(
    #[prop(into)] title: String,
    #[prop(into)] message: String,
) -> impl IntoView {
    view! {
        <div
            role="alert"
            style="padding: 12px 16px; margin-bottom: 16px; background: var(--color-error-50, #fff4e5); border: 1px solid var(--color-error-100, #ffd8a8); border-radius: 8px; color: var(--color-error, #8a4b08);"
        >
            <strong>{title}</strong>
            <div>{message}</div>
        </div>
    }
}

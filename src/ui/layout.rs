//! Page layout shell: persistent header plus the routed content region.

use leptos::prelude::*;

use crate::ui::components::{ButtonSize, ButtonVariant, LinkButton, LogInIcon};

/// Static icon shown next to the repository link.
pub const GITHUB_ICON: &str = "/static/github.svg";

/// Layout shell wrapping every page.
///
/// Renders the header (title link, navigation, optional login control)
/// followed by `<main id="content">`, which hosts whatever the router
/// passes as `children`. The content region is present for every
/// configuration.
///
/// # Example
///
/// ```rust,ignore
/// view! {
///     <Layout title="Q&A" use_login=false login_url="/.auth/login/aad">
///         <ChatPage chat_url="/chat" />
///     </Layout>
/// }
/// ```
#[component]
pub fn Layout(
    /// Title shown in the header link.
    #[prop(into)]
    title: String,
    /// Whether the login control is rendered.
    use_login: bool,
    /// Auth provider login endpoint.
    #[prop(into)]
    login_url: String,
    /// Source repository, linked with the GitHub icon when set.
    #[prop(default = None)]
    repository_url: Option<String>,
    /// Routed page content.
    children: Children,
) -> impl IntoView {
    view! {
        <div class="layout flex flex-col min-h-screen">
            <header
                role="banner"
                class="sticky top-0 z-50 w-full bg-surfaceContainer backdrop-blur shadow-sm shrink-0"
            >
                <div class="container mx-auto flex h-14 md:h-16 items-center justify-between gap-4 px-4 md:px-6 max-w-5xl">
                    <a href="/" class="header-title flex items-center gap-2 hover:opacity-80 transition-opacity">
                        <h3 class="text-base md:text-lg font-semibold">{title}</h3>
                    </a>
                    <nav>
                        <ul class="flex items-center gap-2">
                            {repository_url.map(|url| view! { <RepositoryLink url=url /> })}
                        </ul>
                    </nav>
                    {use_login.then(|| view! { <LoginButton login_url=login_url /> })}
                </div>
            </header>

            <main id="content" class="flex-1 container mx-auto px-4 md:px-6 py-4 md:py-8 max-w-5xl">
                {children()}
            </main>
        </div>
    }
}

/// Login control. The sign-in flow belongs to the auth provider behind
/// `login_url`; this only links to it.
#[component]
pub fn LoginButton(
    /// Auth provider login endpoint.
    #[prop(into)]
    login_url: String,
) -> impl IntoView {
    view! {
        <LinkButton
            href=login_url
            id="login-button"
            variant=ButtonVariant::Outline
            size=ButtonSize::Sm
        >
            <LogInIcon />
            "Login"
        </LinkButton>
    }
}

#[component]
fn RepositoryLink(url: String) -> impl IntoView {
    view! {
        <li>
            <a
                href=url
                target="_blank"
                rel="noopener noreferrer"
                title="Source code"
                class="flex items-center p-2 rounded-xl hover:bg-surface transition-all"
            >
                <img src=GITHUB_ICON alt="GitHub" aria-hidden="true" height="20" width="20" />
            </a>
        </li>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(use_login: bool, repository_url: Option<&str>) -> String {
        Owner::new().with(|| {
            let repository_url = repository_url.map(str::to_owned);
            view! {
                <Layout
                    title="Q&A Sample"
                    use_login=use_login
                    login_url="/.auth/login/aad"
                    repository_url=repository_url
                >
                    <p id="page-body">"page"</p>
                </Layout>
            }
            .to_html()
        })
    }

    #[test]
    fn login_control_present_only_when_enabled() {
        assert!(render(true, None).contains(r#"id="login-button""#));
        assert!(!render(false, None).contains(r#"id="login-button""#));
    }

    #[test]
    fn login_control_links_to_provider() {
        let html = render(true, None);
        assert!(html.contains(r#"href="/.auth/login/aad""#));
    }

    #[test]
    fn content_region_always_present_with_children() {
        for use_login in [false, true] {
            let html = render(use_login, None);
            assert!(html.contains(r#"<main id="content""#));
            let main_at = html.find("<main").unwrap();
            let body_at = html.find(r#"id="page-body""#).unwrap();
            assert!(body_at > main_at);
        }
    }

    #[test]
    fn header_has_title_link_home() {
        let html = render(false, None);
        assert!(html.contains(r#"role="banner""#));
        assert!(html.contains(r#"<a href="/""#));
        assert!(html.contains("Q&amp;A Sample"));
    }

    #[test]
    fn repository_link_uses_github_icon() {
        let without = render(false, None);
        assert!(!without.contains(GITHUB_ICON));

        let with = render(false, Some("https://github.com/example/qa"));
        assert!(with.contains(GITHUB_ICON));
        assert!(with.contains(r#"href="https://github.com/example/qa""#));
    }
}

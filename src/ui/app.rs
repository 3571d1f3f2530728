//! Document shell and page rendering.

use leptos::prelude::*;

use crate::config::AppConfig;
use crate::ui::chat::ChatPage;
use crate::ui::components::{ButtonVariant, LinkButton};
use crate::ui::layout::Layout;

/// Pages the server mounts inside the layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    /// Example prompts and question form at `/`.
    Chat,
    /// Fallback for unknown paths.
    NotFound,
}

impl Page {
    /// Label used in the document `<title>`.
    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::NotFound => "Not Found",
        }
    }
}

/// Render `page` inside the layout as a complete HTML document.
///
/// Each call runs in a fresh reactive [`Owner`], so signals created while
/// rendering are dropped with the response.
pub fn render_page(config: &AppConfig, page: Page) -> String {
    let document_title = format!("{} - {}", page.label(), config.ui.title);
    let title = config.ui.title.clone();
    let use_login = config.auth.use_login;
    let login_url = config.auth.login_url.clone();
    let repository_url = config.ui.repository_url.clone();

    let owner = Owner::new();
    let body = owner.with(|| {
        let content = page_content(config, page);
        view! {
            <Document title=document_title>
                <Layout
                    title=title
                    use_login=use_login
                    login_url=login_url
                    repository_url=repository_url
                >
                    {content}
                </Layout>
            </Document>
        }
        .to_html()
    });
    tracing::debug!(name: "page.rendered", page = page.label(), bytes = body.len(), "Page rendered");
    format!("<!DOCTYPE html>{body}")
}

fn page_content(config: &AppConfig, page: Page) -> AnyView {
    match page {
        Page::Chat => {
            let chat_url = config.backend.chat_url.clone();
            view! { <ChatPage chat_url=chat_url /> }.into_any()
        }
        Page::NotFound => view! { <NotFoundPage /> }.into_any(),
    }
}

/// `<html>` element with local-only assets.
#[component]
fn Document(title: String, children: Children) -> impl IntoView {
    view! {
        <html lang="ja" class="dark">
            <head>
                <meta charset="utf-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1" />
                <title>{title}</title>
                <link rel="stylesheet" href="/static/app.css" />
                <script defer src="/static/examples.js"></script>
            </head>
            <body class="min-h-screen bg-background text-textPrimary antialiased">
                {children()}
            </body>
        </html>
    }
}

/// 404 Not Found page.
#[component]
fn NotFoundPage() -> impl IntoView {
    view! {
        <div class="flex flex-col items-center justify-center py-20">
            <h1 class="text-4xl font-bold mb-4">"404"</h1>
            <p class="text-textMuted mb-6">"Page not found"</p>
            <LinkButton href="/" variant=ButtonVariant::Primary>
                "Go Home"
            </LinkButton>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(use_login: bool) -> AppConfig {
        let flag = if use_login { "true" } else { "false" };
        AppConfig::load_from_args(["qa-chat-ui", "--use-login", flag]).expect("config should load")
    }

    #[test]
    fn document_starts_with_doctype_and_title() {
        let config = config(false);
        let html = render_page(&config, Page::Chat);
        assert!(html.starts_with("<!DOCTYPE html><html"));
        assert!(html.contains("<title>Chat - "));
        assert!(html.contains(r#"href="/static/app.css""#));
    }

    #[test]
    fn login_follows_flag_on_every_page() {
        for page in [Page::Chat, Page::NotFound] {
            assert!(render_page(&config(true), page).contains(r#"id="login-button""#));
            assert!(!render_page(&config(false), page).contains(r#"id="login-button""#));
        }
    }

    #[test]
    fn not_found_is_rendered_inside_content_region() {
        let html = render_page(&config(false), Page::NotFound);
        let main_at = html.find(r#"<main id="content""#).expect("content region");
        let not_found_at = html.find("Page not found").expect("404 body");
        assert!(not_found_at > main_at);
    }
}

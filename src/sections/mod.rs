//! Section renderers.
//!
//! Every section goes through [`render`], which owns the three-state
//! contract: a placeholder while the portfolio loads, an inline notice when
//! it failed, and the section's own layout once it is ready. Sections never
//! look at the loader directly, so one broken section cannot take down the
//! others.

pub mod about;
pub mod contact;
pub mod education;
pub mod experience;
pub mod footer;
pub mod hero;
pub mod projects;
pub mod skills;
pub mod timeline;

use crate::loader::LoadState;
use crate::models::portfolio::PortfolioDocument;

pub trait Section {
    /// Anchor id; doubles as the navigation id.
    fn id(&self) -> &'static str;

    /// Used in "Loading skills..." and "Error loading skills: ...".
    fn noun(&self) -> &'static str;

    fn tag(&self) -> &'static str {
        "section"
    }

    /// Layout for a loaded document. Responsible for its own empty state.
    fn render_ready(&self, doc: &PortfolioDocument) -> String;
}

pub fn render(section: &dyn Section, state: &LoadState) -> String {
    let (phase, body) = match state {
        LoadState::Loading => ("loading", loading_placeholder(section.noun())),
        LoadState::Failed(msg) => ("error", error_notice(section.noun(), msg)),
        LoadState::Ready(doc) => ("ready", section.render_ready(doc)),
    };
    format!(
        "<{tag} id=\"{id}\" class=\"section section-{id}\" data-state=\"{phase}\">{body}</{tag}>",
        tag = section.tag(),
        id = section.id(),
        phase = phase,
        body = body,
    )
}

fn loading_placeholder(noun: &str) -> String {
    format!(
        "<div class=\"section-loading\" aria-busy=\"true\"><div class=\"spinner\"></div><p>Loading {}...</p></div>",
        html_escape(noun)
    )
}

fn error_notice(noun: &str, message: &str) -> String {
    format!(
        "<div class=\"section-error\" role=\"alert\">Error loading {}: {}</div>",
        html_escape(noun),
        html_escape(message)
    )
}

/// Explicit "nothing to show" text for an empty collection.
pub(crate) fn empty_state(text: &str) -> String {
    format!("<p class=\"empty-state\">{}</p>", html_escape(text))
}

/// Eyebrow line plus heading, shared by most sections.
pub(crate) fn section_header(eyebrow: &str, title: &str) -> String {
    format!(
        "<header class=\"section-header\"><span class=\"eyebrow\">{}</span><h2>{}</h2></header>",
        html_escape(eyebrow),
        html_escape(title)
    )
}

/// Bullet list, or nothing when empty.
pub(crate) fn bullet_list(class: &str, items: &[String]) -> String {
    let items: Vec<&String> = items.iter().filter(|s| !s.trim().is_empty()).collect();
    if items.is_empty() {
        return String::new();
    }
    let mut html = format!("<ul class=\"{}\">", class);
    for item in items {
        html.push_str(&format!("<li>{}</li>", html_escape(item)));
    }
    html.push_str("</ul>");
    html
}

pub(crate) fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

/// Lowercase, whitespace to dashes; used for test ids like `skill-tailwind-css`.
pub(crate) fn slugify(s: &str) -> String {
    s.to_lowercase().split_whitespace().collect::<Vec<_>>().join("-")
}

/// Non-empty, non-placeholder link target.
pub(crate) fn usable_url(url: Option<&str>) -> Option<&str> {
    url.map(str::trim).filter(|u| !u.is_empty() && *u != "#")
}

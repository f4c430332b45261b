//! Page composition: navbar, every section in document order, footer, and
//! the navigation script, handed to the `index` template as one context.

use serde::Serialize;
use serde_json::{json, Value};

use crate::contact::FormView;
use crate::loader::LoadState;
use crate::nav::{NavConfig, NavigationController, NAV_JS};
use crate::sections::{self, html_escape, Section};
use crate::theme::Theme;

/// One-shot notice (the "toast") carried over a redirect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Notice {
    pub kind: String,
    pub message: String,
}

pub struct PageInput<'a> {
    pub state: &'a LoadState,
    pub nav: NavConfig,
    pub form: &'a FormView,
    pub notice: Option<Notice>,
    pub theme: Theme,
}

/// Brand text in the navbar: "<first name>.dev" or "Portfolio".
pub fn brand(state: &LoadState) -> String {
    state
        .document()
        .and_then(|doc| doc.personal.first_name())
        .map(|first| format!("{}.dev", first))
        .unwrap_or_else(|| "Portfolio".to_string())
}

fn page_title(state: &LoadState) -> String {
    let Some(doc) = state.document() else {
        return "Portfolio".to_string();
    };
    let name = doc.personal.name.trim();
    let title = doc.personal.title.trim();
    match (name.is_empty(), title.is_empty()) {
        (true, _) => "Portfolio".to_string(),
        (false, true) => name.to_string(),
        (false, false) => format!("{} - {}", name, title),
    }
}

fn controller_for(state: &LoadState, config: NavConfig) -> NavigationController {
    let items = state
        .document()
        .and_then(|doc| doc.navigation.clone())
        .unwrap_or_default();
    NavigationController::new(items, config)
}

fn render_navbar(nav: &NavigationController, brand: &str, theme: Theme) -> String {
    let link = |id: &str, label: &str, class: &str| -> String {
        let active = if nav.active_section() == id { " active" } else { "" };
        format!(
            "<a href=\"#{id}\" class=\"{class}{active}\" data-nav=\"{id}\" data-nav-item=\"{id}\">{label}</a>",
            id = html_escape(id),
            class = class,
            active = active,
            label = html_escape(label),
        )
    };

    let mut desktop = String::new();
    let mut mobile = String::new();
    for item in nav.items() {
        desktop.push_str(&link(&item.id, &item.label, "nav-link"));
        mobile.push_str(&link(&item.id, &item.label, "mobile-link"));
    }

    let scrolled = if nav.is_scrolled() { " scrolled" } else { "" };
    let menu_open = nav.is_mobile_menu_open();
    let next_theme = theme.toggled();

    format!(
        r##"<nav class="site-nav{scrolled}">
<div class="nav-inner">
<a href="#home" class="brand" data-nav="home" data-testid="link-home">{brand}</a>
<div class="nav-links">{desktop}</div>
<div class="nav-tools"><a class="theme-toggle" href="/theme/{next}" aria-label="Switch to {next} theme">{next_label}</a><button type="button" class="menu-toggle" aria-expanded="{expanded}" aria-label="{menu_label}">&#9776;</button></div>
</div>
</nav>
<div class="mobile-menu{open}"><div class="mobile-panel">{mobile}</div><div class="menu-backdrop"></div></div>"##,
        scrolled = scrolled,
        brand = html_escape(brand),
        desktop = desktop,
        next = next_theme.as_str(),
        next_label = if next_theme == Theme::Dark { "&#9790;" } else { "&#9788;" },
        expanded = menu_open,
        menu_label = if menu_open { "Close menu" } else { "Open menu" },
        open = if menu_open { " open" } else { "" },
        mobile = mobile,
    )
}

/// JSON for `<script type="application/json">`, safe against `</script>`.
fn script_json(value: &Value) -> String {
    value.to_string().replace("</", "<\\/")
}

/// Build the template context for the whole page.
pub fn compose(input: &PageInput<'_>) -> Value {
    let state = input.state;
    let nav = controller_for(state, input.nav);

    let contact = sections::contact::Contact { form: input.form };
    let body: [&dyn Section; 7] = [
        &sections::hero::Hero,
        &sections::about::About,
        &sections::skills::Skills,
        &sections::projects::Projects,
        &sections::experience::Experience,
        &sections::education::Education,
        &contact,
    ];
    let rendered: Vec<String> = body.iter().map(|s| sections::render(*s, state)).collect();
    let footer = sections::render(&sections::footer::Footer::current(), state);

    let nav_config = json!({
        "headerOffset": nav.config().header_offset,
        "scrollThreshold": nav.config().scroll_threshold,
        "bandTop": nav.config().band_top,
        "bandBottom": nav.config().band_bottom,
        "items": nav.items(),
    });

    json!({
        "title": page_title(state),
        "theme": input.theme,
        "loading": state.is_loading(),
        "navbar": render_navbar(&nav, &brand(state), input.theme),
        "sections": rendered,
        "footer": footer,
        "nav_config": script_json(&nav_config),
        "nav_js": NAV_JS,
        "notice": input.notice,
    })
}

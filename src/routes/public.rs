use std::net::IpAddr;
use std::sync::Arc;

use rocket::form::Form;
use rocket::http::{Cookie, CookieJar, SameSite, Status};
use rocket::request::FlashMessage;
use rocket::response::{Flash, Redirect};
use rocket::State;
use rocket_dyn_templates::Template;

use crate::config::FolioConfig;
use crate::contact::{
    self, ContactDelivery, ContactSubmission, FormView, SubmitOutcome, DELIVERY_FAILED_NOTICE,
    RATE_LIMITED_NOTICE, SENT_NOTICE,
};
use crate::loader::DataLoader;
use crate::page::{self, Notice, PageInput};
use crate::rate_limit::RateLimiter;
use crate::theme::{Theme, THEME_COOKIE};

/// Where the contact form sends the browser back to.
const CONTACT_ANCHOR: &str = "/#contact";

fn render_index(
    loader: &DataLoader,
    config: &FolioConfig,
    form: &FormView,
    notice: Option<Notice>,
    theme: Theme,
) -> Template {
    let state = loader.snapshot();
    let context = page::compose(&PageInput {
        state: &state,
        nav: config.nav_config(),
        form,
        notice,
        theme,
    });
    Template::render("index", &context)
}

// ── Page ───────────────────────────────────────────────

#[get("/")]
pub fn index(
    loader: &State<Arc<DataLoader>>,
    config: &State<FolioConfig>,
    theme: Theme,
    flash: Option<FlashMessage<'_>>,
) -> Template {
    let notice = flash.map(|f| Notice {
        kind: f.kind().to_string(),
        message: f.message().to_string(),
    });
    render_index(loader, config, &FormView::default(), notice, theme)
}

// ── Contact form ───────────────────────────────────────

#[allow(clippy::too_many_arguments)]
#[post("/contact", data = "<form>")]
pub fn contact_submit(
    form: Form<ContactSubmission>,
    client_ip: Option<IpAddr>,
    loader: &State<Arc<DataLoader>>,
    config: &State<FolioConfig>,
    limiter: &State<RateLimiter>,
    delivery: &State<Arc<dyn ContactDelivery>>,
    theme: Theme,
) -> Result<Flash<Redirect>, (Status, Template)> {
    let key = RateLimiter::client_key("contact", client_ip);

    match contact::submit(&form, limiter, &key, config, delivery.inner().as_ref()) {
        SubmitOutcome::Sent | SubmitOutcome::Dropped => {
            Ok(Flash::success(Redirect::to(CONTACT_ANCHOR), SENT_NOTICE))
        }
        SubmitOutcome::RateLimited => {
            Ok(Flash::error(Redirect::to(CONTACT_ANCHOR), RATE_LIMITED_NOTICE))
        }
        SubmitOutcome::DeliveryFailed => {
            Ok(Flash::error(Redirect::to(CONTACT_ANCHOR), DELIVERY_FAILED_NOTICE))
        }
        SubmitOutcome::Invalid(view) => Err((
            Status::UnprocessableEntity,
            render_index(loader, config, &view, None, theme),
        )),
    }
}

// ── Theme ──────────────────────────────────────────────

#[get("/theme/<mode>")]
pub fn set_theme(mode: &str, cookies: &CookieJar<'_>) -> Option<Redirect> {
    let theme = Theme::parse(mode)?;

    let mut cookie = Cookie::new(THEME_COOKIE, theme.as_str());
    cookie.set_same_site(SameSite::Lax);
    cookie.set_path("/");
    cookies.add(cookie);

    Some(Redirect::to("/"))
}

pub fn routes() -> Vec<rocket::Route> {
    routes![index, contact_submit, set_theme]
}

use rocket::request::{FromRequest, Outcome, Request};
use serde::Serialize;

pub const THEME_COOKIE: &str = "theme";

/// Light/dark flag. Only decorative rendering reads it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Theme {
    type Error = ();

    async fn from_request(request: &'r Request<'_>) -> Outcome<Self, Self::Error> {
        let theme = request
            .cookies()
            .get(THEME_COOKIE)
            .and_then(|c| Theme::parse(c.value()))
            .unwrap_or_default();
        Outcome::Success(theme)
    }
}

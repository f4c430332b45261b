use rocket::serde::json::Json;
use rocket::State;
use serde::Serialize;
use std::sync::Arc;

use crate::loader::{DataLoader, LoadState};
use crate::models::portfolio::PortfolioDocument;

/// The loader snapshot as the page script sees it.
#[derive(Debug, Serialize)]
pub struct PortfolioResponse {
    pub loading: bool,
    pub error: Option<String>,
    pub data: Option<Arc<PortfolioDocument>>,
}

impl From<LoadState> for PortfolioResponse {
    fn from(state: LoadState) -> Self {
        match state {
            LoadState::Loading => PortfolioResponse {
                loading: true,
                error: None,
                data: None,
            },
            LoadState::Failed(msg) => PortfolioResponse {
                loading: false,
                error: Some(msg),
                data: None,
            },
            LoadState::Ready(doc) => PortfolioResponse {
                loading: false,
                error: None,
                data: Some(doc),
            },
        }
    }
}

// ── Portfolio snapshot ─────────────────────────────────

#[get("/portfolio")]
pub fn portfolio(loader: &State<Arc<DataLoader>>) -> Json<PortfolioResponse> {
    Json(loader.snapshot().into())
}

pub fn routes() -> Vec<rocket::Route> {
    routes![portfolio]
}

use rocket::fairing::{Fairing, Info, Kind};
use rocket::tokio;
use rocket::{Orbit, Rocket};
use std::sync::Arc;

use crate::loader::DataLoader;

/// Starts the one portfolio load once Rocket is listening. Requests that
/// arrive before it finishes see the loading state.
pub struct PortfolioLoad;

#[rocket::async_trait]
impl Fairing for PortfolioLoad {
    fn info(&self) -> Info {
        Info {
            name: "Portfolio Load",
            kind: Kind::Liftoff,
        }
    }

    async fn on_liftoff(&self, rocket: &Rocket<Orbit>) {
        let Some(loader) = rocket.state::<Arc<DataLoader>>() else {
            log::error!("[task] DataLoader not found in managed state");
            return;
        };
        let loader = Arc::clone(loader);
        tokio::spawn(async move {
            loader.load().await;
        });
    }
}

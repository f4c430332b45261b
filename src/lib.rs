#[macro_use]
extern crate rocket;

use std::sync::Arc;
use std::time::Duration;

use rocket::fairing::{Fairing, Info, Kind};
use rocket::figment::Figment;
use rocket::fs::FileServer;
use rocket::http::Header;
use rocket::response::content::RawHtml;
use rocket::{Build, Rocket};
use rocket_dyn_templates::Template;

pub mod boot;
pub mod config;
pub mod contact;
pub mod loader;
pub mod models;
pub mod nav;
pub mod page;
pub mod rate_limit;
pub mod routes;
pub mod sections;
pub mod tasks;
pub mod theme;


use config::FolioConfig;
use contact::{ContactDelivery, LogDelivery};
use loader::{DataLoader, DataSource};
use rate_limit::RateLimiter;

pub const STATIC_DIR: &str = "website/static";
pub const TEMPLATE_DIR: &str = "website/templates";

/// The page and the snapshot API reflect loader state, so neither may be cached.
pub struct NoCacheDynamic;

#[rocket::async_trait]
impl Fairing for NoCacheDynamic {
    fn info(&self) -> Info {
        Info {
            name: "No-Cache Dynamic Pages",
            kind: Kind::Response,
        }
    }

    async fn on_response<'r>(&self, req: &'r rocket::Request<'_>, res: &mut rocket::Response<'r>) {
        let path = req.uri().path().as_str();
        if path == "/" || path.starts_with("/api/") {
            res.set_header(Header::new("Cache-Control", "no-store, no-cache, must-revalidate, max-age=0"));
        }
    }
}

#[catch(404)]
fn not_found() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>404</h1><p>Page not found.</p><a href='/'>← Home</a></body></html>".to_string())
}

#[catch(422)]
fn unprocessable() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>422</h1><p>The form could not be read.</p><a href='/#contact'>← Back to the form</a></body></html>".to_string())
}

#[catch(500)]
fn server_error() -> RawHtml<String> {
    RawHtml("<html><body style='font-family:sans-serif;text-align:center;padding:80px'><h1>500</h1><p>Internal server error.</p><a href='/'>← Home</a></body></html>".to_string())
}

/// Rocket's figment with the template directory defaulted to `website/templates`.
pub fn figment() -> Figment {
    rocket::Config::figment().join(("template_dir", TEMPLATE_DIR))
}

/// Everything except boot checks and the liftoff load.
pub fn assemble(
    figment: Figment,
    config: FolioConfig,
    loader: Arc<DataLoader>,
    delivery: Arc<dyn ContactDelivery>,
) -> Rocket<Build> {
    rocket::custom(figment)
        .manage(loader)
        .manage(config)
        .manage(RateLimiter::new())
        .manage(delivery)
        .attach(Template::fairing())
        .attach(NoCacheDynamic)
        .mount("/", routes::public::routes())
        .mount("/api", routes::api::routes())
        .mount("/", FileServer::from(STATIC_DIR))
        .register("/", catchers![not_found, unprocessable, server_error])
}

/// The production server: config, boot checks, and a portfolio load that
/// starts once Rocket is listening.
pub fn build() -> Rocket<Build> {
    let _ = env_logger::try_init();

    let figment = figment();
    let config = FolioConfig::from_figment(&figment);

    // create missing directories, abort on missing templates
    boot::run(&config);

    let loader = Arc::new(DataLoader::new(
        DataSource::parse(&config.data_source),
        Duration::from_secs(config.fetch_timeout_secs),
    ));

    assemble(figment, config, loader, Arc::new(LogDelivery)).attach(tasks::PortfolioLoad)
}

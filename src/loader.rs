use log::{error, info};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};
use std::time::Duration;

use crate::models::portfolio::PortfolioDocument;

/// Where the portfolio JSON comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum DataSource {
    File(PathBuf),
    Remote(url::Url),
}

impl DataSource {
    /// `http(s)://` strings are remote; anything else is a file path.
    pub fn parse(raw: &str) -> Self {
        match url::Url::parse(raw) {
            Ok(u) if u.scheme() == "http" || u.scheme() == "https" => DataSource::Remote(u),
            _ => DataSource::File(PathBuf::from(raw)),
        }
    }
}

impl std::fmt::Display for DataSource {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DataSource::File(p) => write!(f, "{}", p.display()),
            DataSource::Remote(u) => write!(f, "{}", u),
        }
    }
}

#[derive(Debug)]
pub enum LoadError {
    /// I/O or network failure before a response arrived.
    Fetch(String),
    /// The server answered with a non-success status.
    Status(u16),
    /// The body is not a JSON object.
    Malformed(String),
}

impl std::fmt::Display for LoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoadError::Fetch(e) => write!(f, "Failed to load portfolio data: {}", e),
            LoadError::Status(code) => write!(f, "Failed to load portfolio data (HTTP {})", code),
            LoadError::Malformed(e) => write!(f, "Invalid portfolio data: {}", e),
        }
    }
}

impl std::error::Error for LoadError {}

/// Snapshot of the loader, shared by every section.
#[derive(Debug, Clone)]
pub enum LoadState {
    Loading,
    Failed(String),
    Ready(Arc<PortfolioDocument>),
}

impl LoadState {
    pub fn document(&self) -> Option<&PortfolioDocument> {
        match self {
            LoadState::Ready(doc) => Some(doc),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, LoadState::Loading)
    }
}

/// Process-wide portfolio loader. Loads once; the result never changes.
pub struct DataLoader {
    source: DataSource,
    timeout: Duration,
    started: AtomicBool,
    state: RwLock<LoadState>,
}

impl DataLoader {
    pub fn new(source: DataSource, timeout: Duration) -> Self {
        DataLoader {
            source,
            timeout,
            started: AtomicBool::new(false),
            state: RwLock::new(LoadState::Loading),
        }
    }

    /// A loader that already holds `state` and will never fetch.
    pub fn with_state(state: LoadState) -> Self {
        let loader = DataLoader::new(
            DataSource::File(PathBuf::new()),
            Duration::from_secs(0),
        );
        loader.started.store(true, Ordering::SeqCst);
        loader.set(state);
        loader
    }

    pub fn snapshot(&self) -> LoadState {
        match self.state.read() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Fetch and parse the document. Only the first call does any work.
    pub async fn load(&self) {
        if self.started.swap(true, Ordering::SeqCst) {
            return;
        }
        info!("Loading portfolio data from {}", self.source);

        let result = match &self.source {
            DataSource::File(path) => match rocket::tokio::fs::read_to_string(path).await {
                Ok(body) => parse(&body),
                Err(e) => Err(LoadError::Fetch(format!("{}: {}", path.display(), e))),
            },
            DataSource::Remote(url) => {
                let url = url.clone();
                let timeout = self.timeout;
                rocket::tokio::task::spawn_blocking(move || fetch_remote(&url, timeout))
                    .await
                    .unwrap_or_else(|e| Err(LoadError::Fetch(e.to_string())))
                    .and_then(|body| parse(&body))
            }
        };

        match result {
            Ok(doc) => {
                info!(
                    "Portfolio data ready: {} project(s), {} experience, {} education",
                    doc.projects.len(),
                    doc.experience.len(),
                    doc.education.len()
                );
                self.set(LoadState::Ready(Arc::new(doc)));
            }
            Err(e) => {
                error!("{}", e);
                self.set(LoadState::Failed(e.to_string()));
            }
        }
    }

    fn set(&self, state: LoadState) {
        match self.state.write() {
            Ok(mut guard) => *guard = state,
            Err(poisoned) => *poisoned.into_inner() = state,
        }
    }
}

fn parse(body: &str) -> Result<PortfolioDocument, LoadError> {
    PortfolioDocument::from_json(body).map_err(LoadError::Malformed)
}

fn fetch_remote(url: &url::Url, timeout: Duration) -> Result<String, LoadError> {
    let client = reqwest::blocking::Client::builder()
        .timeout(timeout)
        .build()
        .map_err(|e| LoadError::Fetch(format!("HTTP client error: {}", e)))?;

    let resp = client
        .get(url.as_str())
        .header("Accept", "application/json")
        .send()
        .map_err(|e| LoadError::Fetch(e.to_string()))?;

    if !resp.status().is_success() {
        return Err(LoadError::Status(resp.status().as_u16()));
    }

    resp.text().map_err(|e| LoadError::Fetch(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn loader_for(path: &std::path::Path) -> DataLoader {
        DataLoader::new(DataSource::File(path.to_path_buf()), Duration::from_secs(1))
    }

    #[test]
    fn source_parse() {
        assert!(matches!(
            DataSource::parse("https://example.com/portfolio-data.json"),
            DataSource::Remote(_)
        ));
        assert_eq!(
            DataSource::parse("website/static/portfolio-data.json"),
            DataSource::File(PathBuf::from("website/static/portfolio-data.json"))
        );
        assert!(matches!(DataSource::parse("C:\\data.json"), DataSource::File(_)));
    }

    #[test]
    fn starts_loading() {
        let loader = loader_for(std::path::Path::new("missing.json"));
        assert!(loader.snapshot().is_loading());
    }

    #[rocket::async_test]
    async fn loads_file_once() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"personal": {{"name": "Ada"}}}}"#).unwrap();
        let loader = loader_for(file.path());

        loader.load().await;
        let doc = loader.snapshot().document().cloned().unwrap();
        assert_eq!(doc.personal.name, "Ada");

        // Later edits are never picked up.
        std::fs::write(file.path(), r#"{"personal": {"name": "Grace"}}"#).unwrap();
        loader.load().await;
        assert_eq!(loader.snapshot().document().unwrap().personal.name, "Ada");
    }

    #[rocket::async_test]
    async fn missing_file_fails() {
        let dir = tempfile::tempdir().unwrap();
        let loader = loader_for(&dir.path().join("nope.json"));
        loader.load().await;
        match loader.snapshot() {
            LoadState::Failed(msg) => assert!(msg.starts_with("Failed to load portfolio data")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[rocket::async_test]
    async fn malformed_body_fails() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "<!doctype html><p>not json</p>").unwrap();
        let loader = loader_for(file.path());
        loader.load().await;
        match loader.snapshot() {
            LoadState::Failed(msg) => assert!(msg.starts_with("Invalid portfolio data")),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    /// Answer exactly one HTTP request with `status` and `body`, then close.
    fn serve_once(status: &'static str, body: &'static str) -> url::Url {
        use std::io::{BufRead, BufReader};
        use std::net::TcpListener;

        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut reader = BufReader::new(stream.try_clone().unwrap());
            let mut line = String::new();
            while reader.read_line(&mut line).unwrap() > 0 && line != "\r\n" {
                line.clear();
            }
            write!(
                stream,
                "HTTP/1.1 {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status,
                body.len(),
                body
            )
            .unwrap();
        });
        url::Url::parse(&format!("http://{}/portfolio-data.json", addr)).unwrap()
    }

    fn remote_loader(url: url::Url) -> DataLoader {
        DataLoader::new(DataSource::Remote(url), Duration::from_secs(5))
    }

    #[rocket::async_test]
    async fn remote_not_found_fails_with_status() {
        let loader = remote_loader(serve_once("404 Not Found", "nope"));
        loader.load().await;
        match loader.snapshot() {
            LoadState::Failed(msg) => assert_eq!(msg, "Failed to load portfolio data (HTTP 404)"),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[rocket::async_test]
    async fn remote_html_body_fails_as_invalid() {
        let loader = remote_loader(serve_once("200 OK", "<!doctype html><p>maintenance</p>"));
        loader.load().await;
        match loader.snapshot() {
            LoadState::Failed(msg) => assert!(msg.starts_with("Invalid portfolio data: "), "{}", msg),
            other => panic!("expected failure, got {:?}", other),
        }
    }

    #[rocket::async_test]
    async fn remote_document_loads() {
        let loader = remote_loader(serve_once("200 OK", r#"{"personal": {"name": "Ada"}}"#));
        loader.load().await;
        assert_eq!(loader.snapshot().document().unwrap().personal.name, "Ada");
    }

    #[test]
    fn with_state_never_fetches() {
        let loader = DataLoader::with_state(LoadState::Failed("boom".into()));
        assert!(matches!(loader.snapshot(), LoadState::Failed(m) if m == "boom"));
    }

    #[test]
    fn status_error_message() {
        assert_eq!(
            LoadError::Status(404).to_string(),
            "Failed to load portfolio data (HTTP 404)"
        );
    }
}

use log::{error, info, warn};
use std::fs;
use std::path::Path;
use std::process;

use crate::config::FolioConfig;
use crate::loader::DataSource;

/// Required directories that will be created if missing
const REQUIRED_DIRS: &[&str] = &["website", "website/static", "website/static/css", "website/templates"];

/// The page cannot render without these
const CRITICAL_TEMPLATES: &[&str] = &["website/templates/index.html.tera"];

/// Static assets the page links to
const STATIC_ASSETS: &[&str] = &["website/static/css/site.css"];

#[derive(Debug, Default, PartialEq)]
pub struct BootReport {
    pub warnings: u32,
    pub errors: u32,
}

/// Run all boot checks. Call this before Rocket launches.
/// Creates missing directories, warns about missing files, and
/// aborts if critical files are absent.
pub fn run(config: &FolioConfig) {
    info!("Folio boot check starting...");

    let report = check(Path::new("."), config);

    if report.errors > 0 {
        error!(
            "Boot check FAILED: {} error(s), {} warning(s). Aborting.",
            report.errors, report.warnings
        );
        process::exit(1);
    }

    if report.warnings > 0 {
        warn!(
            "Boot check passed with {} warning(s). Some sections may not render correctly.",
            report.warnings
        );
    } else {
        info!("Boot check passed. All systems go.");
    }
}

/// The checks behind [`run`], relative to `root`.
pub fn check(root: &Path, config: &FolioConfig) -> BootReport {
    let mut report = BootReport::default();

    // ── 1. Directories ─────────────────────────────────
    for dir in REQUIRED_DIRS {
        let path = root.join(dir);
        if !path.exists() {
            match fs::create_dir_all(&path) {
                Ok(_) => info!("  Created directory: {}", dir),
                Err(e) => {
                    error!("  FAILED to create directory {}: {}", dir, e);
                    report.errors += 1;
                }
            }
        }
    }

    // ── 2. Critical templates ──────────────────────────
    for file in CRITICAL_TEMPLATES {
        if !root.join(file).exists() {
            error!("  MISSING critical template: {}", file);
            report.errors += 1;
        }
    }

    // ── 3. Static assets ───────────────────────────────
    for file in STATIC_ASSETS {
        if !root.join(file).exists() {
            warn!("  Missing static asset: {} (page will be unstyled)", file);
            report.warnings += 1;
        }
    }

    // ── 4. Portfolio data ──────────────────────────────
    // A missing file is not fatal: every section shows the load error instead.
    match DataSource::parse(&config.data_source) {
        DataSource::File(path) => {
            let path = if path.is_absolute() { path } else { root.join(path) };
            if !path.exists() {
                warn!("  Portfolio data not found: {}", path.display());
                report.warnings += 1;
            }
        }
        DataSource::Remote(url) => info!("  Portfolio data will be fetched from {}", url),
    }

    // ── 5. Rocket.toml exists ───────────────────────────
    if !root.join("Rocket.toml").exists() {
        warn!("  Rocket.toml not found, using default config");
        report.warnings += 1;
    }

    report
}

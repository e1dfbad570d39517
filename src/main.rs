//! Character Catalog - headless host: loads the catalog and prints the first page

use mimalloc::MiMalloc;

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

use character_catalog::constants::{APP_NAME, APP_VERSION, NO_RESULTS_MESSAGE};
use character_catalog::logging::{data_dir, init_logging};
use character_catalog::{load_full_catalog, CatalogSession, HttpPageSource, Settings};
use std::process::ExitCode;
use tracing::{error, info};

fn main() -> ExitCode {
    let data_dir = data_dir();
    std::fs::create_dir_all(&data_dir).ok();

    // Guard must live for the whole run
    let _log_guard = init_logging(&data_dir);

    info!(version = APP_VERSION, "{} starting", APP_NAME);

    let settings = Settings::from_env();
    let source = HttpPageSource::new(settings.api_url.clone());
    let mut session = CatalogSession::new(&settings);

    let runtime = match tokio::runtime::Runtime::new() {
        Ok(rt) => rt,
        Err(e) => {
            error!(error = %e, "Failed to start async runtime");
            return ExitCode::FAILURE;
        }
    };
    if session.begin_load() {
        let result = runtime.block_on(load_full_catalog(&source));
        session.finish_load(result);
    }

    if let Some(message) = session.error_message() {
        error!(url = %source.base_url(), "Catalog load failed");
        eprintln!("{}", message);
        return ExitCode::FAILURE;
    }

    let view = session.view();
    if view.no_results() {
        println!("{}", NO_RESULTS_MESSAGE);
    }
    for c in &view.visible {
        println!("{}\t{}\t{}\t{}", c.name, c.species, c.status, c.location.name);
    }
    println!(
        "Page {} ({} of {} characters)",
        session.page().current_page,
        view.visible.len(),
        view.filtered_count
    );

    info!(total = session.catalog().len(), "{} finished", APP_NAME);
    ExitCode::SUCCESS
}

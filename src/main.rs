mod application;
mod domain;
mod infrastructure;
mod interfaces;

use crate::application::{AnalyzeUseCase, ChartsUseCase, InsightUseCase, LoadStatementUseCase};
use crate::infrastructure::cache::ParseCache;
use crate::infrastructure::config::Settings;
use crate::infrastructure::llm_clients::gemini::GeminiClient;
use crate::interfaces::http::{start_server, AppState};
use actix_web::web;
use std::sync::Arc;
use tracing::{error, info};

/// Parsed tables kept for reuse across requests. Eviction is FIFO, so
/// the cache never holds more than this many tables.
const PARSE_CACHE_CAPACITY: usize = 64;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenvy::dotenv().ok();
    let _ = tracing_subscriber::fmt().with_env_filter("info").try_init();

    let settings = match Settings::load() {
        Ok(settings) => settings,
        Err(e) => {
            error!(error = %e, "refusing to start");
            std::process::exit(1);
        }
    };

    let gemini = Arc::new(GeminiClient::new(settings.gemini.clone()));
    let loader = LoadStatementUseCase::new(Arc::new(ParseCache::new(PARSE_CACHE_CAPACITY)));
    let insight = InsightUseCase::new(gemini);
    let analyze_use_case = AnalyzeUseCase::new(loader, insight, ChartsUseCase::new());
    let state = web::Data::new(AppState { analyze_use_case });

    info!(
        host = %settings.server.host,
        port = settings.server.port,
        model = %settings.gemini.model,
        "starting financial decoder"
    );
    start_server(&settings, state)?.await
}

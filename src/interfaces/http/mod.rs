use crate::application::AnalyzeUseCase;
use crate::domain::error::{AppError, Result};
use crate::domain::options::AnalysisOptions;
use crate::domain::statement::{StatementKind, StatementUpload};
use crate::infrastructure::config::Settings;
use actix_cors::Cors;
use actix_web::{dev::Server, get, post, web, App, HttpResponse, HttpServer, Responder};
use base64::Engine;
use serde::Deserialize;
use serde_json::json;
use tracing::{error, warn};

pub mod page;

/// Upper bound on a JSON request body. Three spreadsheets encoded as
/// base64 fit comfortably below this; anything larger is rejected
/// before it reaches a handler.
const MAX_JSON_BYTES: usize = 64 * 1024 * 1024;

pub struct AppState {
    pub analyze_use_case: AnalyzeUseCase,
}

#[derive(Deserialize)]
pub struct AnalyzeRequest {
    #[serde(default)]
    pub files: FileSlots,
    #[serde(default)]
    pub options: AnalysisOptions,
}

/// One optional slot per statement kind, mirroring the three upload
/// controls on the page.
#[derive(Default, Deserialize)]
pub struct FileSlots {
    pub balance_sheet: Option<FilePayload>,
    pub profit_loss: Option<FilePayload>,
    pub cash_flow: Option<FilePayload>,
}

#[derive(Deserialize)]
pub struct FilePayload {
    pub file_name: String,
    /// Base64-encoded file bytes.
    pub content: String,
}

fn decode_uploads(slots: FileSlots) -> Result<Vec<StatementUpload>> {
    let ordered = [
        (StatementKind::BalanceSheet, slots.balance_sheet),
        (StatementKind::ProfitLoss, slots.profit_loss),
        (StatementKind::CashFlow, slots.cash_flow),
    ];

    let mut uploads = Vec::new();
    for (kind, slot) in ordered {
        if let Some(payload) = slot {
            let content = base64::prelude::BASE64_STANDARD
                .decode(payload.content.as_bytes())
                .map_err(|e| {
                    AppError::ValidationError(format!(
                        "file '{}' is not valid base64: {}",
                        payload.file_name, e
                    ))
                })?;
            uploads.push(StatementUpload {
                kind,
                file_name: payload.file_name,
                content,
            });
        }
    }
    Ok(uploads)
}

#[get("/")]
async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/html; charset=utf-8")
        .body(page::INDEX_HTML)
}

#[get("/health")]
async fn health() -> impl Responder {
    HttpResponse::Ok().json(json!({ "status": "ok" }))
}

#[post("/analyze")]
async fn analyze(data: web::Data<AppState>, req: web::Json<AnalyzeRequest>) -> impl Responder {
    let AnalyzeRequest { files, options } = req.into_inner();

    let uploads = match decode_uploads(files) {
        Ok(uploads) => uploads,
        Err(e) => {
            warn!(error = %e, "rejected analyze request");
            return HttpResponse::BadRequest().body(e.to_string());
        }
    };

    match data.analyze_use_case.execute(uploads, &options).await {
        Ok(report) => HttpResponse::Ok().json(report),
        Err(e @ AppError::ValidationError(_)) => {
            warn!(error = %e, "rejected analyze request");
            HttpResponse::BadRequest().body(e.to_string())
        }
        Err(e) => {
            error!(error = %e, "analysis failed");
            HttpResponse::InternalServerError().body(e.to_string())
        }
    }
}

pub fn start_server(settings: &Settings, state: web::Data<AppState>) -> std::io::Result<Server> {
    let server = HttpServer::new(move || {
        let cors = Cors::permissive(); // Allow all origins for local tool

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .app_data(web::JsonConfig::default().limit(MAX_JSON_BYTES))
            .service(index)
            .service(web::scope("/api").service(health).service(analyze))
    })
    .bind(settings.bind_address())?
    .run();

    Ok(server)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::{ChartsUseCase, InsightUseCase, LoadStatementUseCase};
    use crate::infrastructure::cache::ParseCache;
    use crate::infrastructure::llm_clients::LLMClient;
    use actix_web::http::StatusCode;
    use actix_web::test;
    use async_trait::async_trait;
    use std::sync::Arc;

    struct StubClient;

    #[async_trait]
    impl LLMClient for StubClient {
        async fn generate(&self, _prompt: &str) -> Result<String> {
            Ok("Steady results with healthy liquidity.".to_string())
        }
    }

    fn test_state() -> web::Data<AppState> {
        let loader = LoadStatementUseCase::new(Arc::new(ParseCache::new(8)));
        let insight = InsightUseCase::new(Arc::new(StubClient));
        let analyze_use_case = AnalyzeUseCase::new(loader, insight, ChartsUseCase::new());
        web::Data::new(AppState { analyze_use_case })
    }

    fn encode(bytes: &[u8]) -> String {
        base64::prelude::BASE64_STANDARD.encode(bytes)
    }

    #[actix_web::test]
    async fn test_index_serves_page() {
        let app = test::init_service(App::new().service(index)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let body = test::call_and_read_body(&app, req).await;
        let html = String::from_utf8(body.to_vec()).unwrap();
        assert!(html.contains("Gemini Pro Financial Decoder"));
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let app = test::init_service(App::new().service(web::scope("/api").service(health))).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["status"], "ok");
    }

    #[actix_web::test]
    async fn test_analyze_returns_report() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .service(web::scope("/api").service(analyze)),
        )
        .await;

        let payload = json!({
            "files": {
                "balance_sheet": {
                    "file_name": "balance.csv",
                    "content": encode(b"Item,Amount\nCash,100\nDebt,50\n"),
                }
            },
            "options": { "include_charts": true, "analysis_depth": "standard" }
        });
        let req = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(&payload)
            .to_request();
        let body: serde_json::Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["banner"]["status"], "success");
        let section = &body["sections"][0];
        assert_eq!(section["kind"], "balance_sheet");
        assert_eq!(section["display_name"], "Balance Sheet");
        assert_eq!(section["insight"], "Steady results with healthy liquidity.");
        assert_eq!(section["table"]["row_count"], 2);
        assert_eq!(section["table"]["column_count"], 2);
    }

    #[actix_web::test]
    async fn test_analyze_rejects_empty_request() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .service(web::scope("/api").service(analyze)),
        )
        .await;

        let req = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(&json!({}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_analyze_rejects_bad_base64() {
        let app = test::init_service(
            App::new()
                .app_data(test_state())
                .service(web::scope("/api").service(analyze)),
        )
        .await;

        let payload = json!({
            "files": {
                "cash_flow": { "file_name": "cash.csv", "content": "not base64!!" }
            }
        });
        let req = test::TestRequest::post()
            .uri("/api/analyze")
            .set_json(&payload)
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let body = test::read_body(resp).await;
        let text = String::from_utf8(body.to_vec()).unwrap();
        assert!(text.contains("not valid base64"));
    }
}

use crate::application::use_cases::digest::TableDigest;
use crate::application::use_cases::prompts::build_analysis_prompt;
use crate::domain::statement::StatementKind;
use crate::domain::table::DataTable;
use crate::infrastructure::llm_clients::LLMClient;
use std::sync::Arc;
use std::time::Instant;
use tracing::{info, warn};

pub struct InsightUseCase {
    llm_client: Arc<dyn LLMClient + Send + Sync>,
}

impl InsightUseCase {
    pub fn new(llm_client: Arc<dyn LLMClient + Send + Sync>) -> Self {
        Self { llm_client }
    }

    /// Generate the insight text for one statement. Failures do not
    /// propagate: the returned text carries the error message so the
    /// report still renders this and every other statement.
    pub async fn execute(&self, kind: StatementKind, table: &DataTable) -> String {
        let digest = TableDigest::from_table(table);
        let prompt = build_analysis_prompt(kind, &digest.to_prompt_json());

        let started = Instant::now();
        match self.llm_client.generate(&prompt).await {
            Ok(text) => {
                info!(
                    kind = kind.display_name(),
                    elapsed_ms = started.elapsed().as_millis() as u64,
                    "insight generated"
                );
                text
            }
            Err(err) => {
                warn!(
                    kind = kind.display_name(),
                    error = %err,
                    "insight generation failed"
                );
                format!("Error generating summary: {}", err)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::{AppError, Result};
    use crate::domain::table::Cell;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct ScriptedClient {
        reply: Option<String>,
        seen_prompts: Mutex<Vec<String>>,
    }

    impl ScriptedClient {
        fn succeeding(reply: &str) -> Self {
            Self {
                reply: Some(reply.to_string()),
                seen_prompts: Mutex::new(Vec::new()),
            }
        }

        fn failing() -> Self {
            Self {
                reply: None,
                seen_prompts: Mutex::new(Vec::new()),
            }
        }
    }

    #[async_trait]
    impl LLMClient for ScriptedClient {
        async fn generate(&self, prompt: &str) -> Result<String> {
            self.seen_prompts.lock().unwrap().push(prompt.to_string());
            match &self.reply {
                Some(text) => Ok(text.clone()),
                None => Err(AppError::InsightFailure(
                    "API error (429): quota exceeded".to_string(),
                )),
            }
        }
    }

    fn sample_table() -> DataTable {
        DataTable::new(
            vec!["Item".to_string(), "Amount".to_string()],
            vec![
                vec![Cell::Text("Cash".to_string()), Cell::Number(1200.0)],
                vec![Cell::Text("Debt".to_string()), Cell::Number(-300.0)],
            ],
        )
    }

    #[actix_web::test]
    async fn test_success_returns_client_text() {
        let client = Arc::new(ScriptedClient::succeeding("Liquidity looks healthy."));
        let use_case = InsightUseCase::new(client.clone());

        let insight = use_case
            .execute(StatementKind::BalanceSheet, &sample_table())
            .await;

        assert_eq!(insight, "Liquidity looks healthy.");
        let prompts = client.seen_prompts.lock().unwrap();
        assert_eq!(prompts.len(), 1);
        assert!(prompts[0].contains("balance sheet data"));
        assert!(prompts[0].contains("\"Cash\""));
    }

    #[actix_web::test]
    async fn test_failure_is_swallowed_into_text() {
        let use_case = InsightUseCase::new(Arc::new(ScriptedClient::failing()));

        let insight = use_case
            .execute(StatementKind::CashFlow, &sample_table())
            .await;

        assert!(insight.starts_with("Error generating summary:"));
        assert!(insight.contains("quota exceeded"));
    }
}

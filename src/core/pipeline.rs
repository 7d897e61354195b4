use crate::core::observe::build_summary;
use crate::domain::model::{SeriesObservation, Summary};
use crate::domain::ports::{LanguageModel, Pipeline, SeriesSource};
use crate::utils::error::{AgentError, Result};
use regex::Regex;

/// THINK -> ACT -> OBSERVE -> RESPOND over a language model and a series
/// source. One run per question; any failing step ends the run.
pub struct AgentPipeline<L: LanguageModel, D: SeriesSource> {
    llm: L,
    source: D,
}

impl<L: LanguageModel, D: SeriesSource> AgentPipeline<L, D> {
    pub fn new(llm: L, source: D) -> Self {
        Self { llm, source }
    }
}

fn think_prompt(question: &str) -> String {
    format!(
        "What FRED series code would help answer the question below?\n\
         Question: {question}\n\n\
         Common FRED codes: UNRATE (unemployment), FPCPITOTLZGUSA (CPI inflation),\n\
         GDP, DFF (fed funds rate)\n\n\
         Return ONLY valid JSON in this exact format: \
         {{\"explanation\": \"why this helps\", \"series_code\": \"EXACT_FRED_CODE\"}}"
    )
}

fn respond_prompt(question: &str, summary_json: &str) -> String {
    format!(
        "Answer this question using the data:\n\
         Question: {question}\n\
         Data: {summary_json}\n\n\
         Provide a brief, clear answer citing specific numbers."
    )
}

/// Pull a series code out of a model response. Prefers the requested JSON
/// shape (with or without Markdown fences); falls back to the first token
/// that looks like a catalog code. Ambiguous answers resolve to the first
/// match, deterministically.
fn extract_series_code(response: &str) -> Option<String> {
    let body = response
        .trim()
        .trim_start_matches("```json")
        .trim_start_matches("```")
        .trim_end_matches("```")
        .trim();

    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        if let Some(code) = value.get("series_code").and_then(|v| v.as_str()) {
            let code = code.trim();
            if !code.is_empty() {
                return Some(code.to_string());
            }
        }
    }

    let pattern = Regex::new(r"\b[A-Z][A-Z0-9]{2,}\b").ok()?;
    pattern.find(body).map(|m| m.as_str().to_string())
}

#[async_trait::async_trait]
impl<L: LanguageModel, D: SeriesSource> Pipeline for AgentPipeline<L, D> {
    async fn think(&self, question: &str) -> Result<String> {
        if question.trim().is_empty() {
            return Err(AgentError::ResolutionError {
                message: "question is empty".to_string(),
            });
        }

        let prompt = think_prompt(question);
        tracing::debug!("THINK prompt:\n{}", prompt);

        let response =
            self.llm
                .send(&prompt)
                .await
                .map_err(|e| AgentError::ResolutionError {
                    message: e.to_string(),
                })?;
        tracing::debug!("THINK response:\n{}", response);

        extract_series_code(&response).ok_or_else(|| AgentError::ResolutionError {
            message: format!("no series code found in: {}", response.trim()),
        })
    }

    async fn act(&self, series_id: &str) -> Result<SeriesObservation> {
        if series_id.trim().is_empty() {
            return Err(AgentError::FetchError {
                message: "series identifier is empty".to_string(),
            });
        }

        self.source.fetch(series_id).await.map_err(|e| match e {
            AgentError::FetchError { .. } => e,
            other => AgentError::FetchError {
                message: other.to_string(),
            },
        })
    }

    fn observe(&self, series: &SeriesObservation) -> Result<Summary> {
        build_summary(series)
    }

    async fn respond(&self, question: &str, summary: &Summary) -> Result<String> {
        let summary_json = serde_json::to_string_pretty(summary)?;
        let prompt = respond_prompt(question, &summary_json);
        tracing::debug!("RESPOND prompt:\n{}", prompt);

        self.llm
            .send(&prompt)
            .await
            .map_err(|e| AgentError::GenerationError {
                message: e.to_string(),
            })
    }
}

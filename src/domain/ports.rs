use crate::domain::model::{SeriesObservation, Summary};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Opaque text-in/text-out capability over a language model provider.
pub trait LanguageModel: Send + Sync {
    fn send(&self, prompt: &str) -> impl std::future::Future<Output = Result<String>> + Send;
}

/// Opaque lookup capability over a statistics data provider.
pub trait SeriesSource: Send + Sync {
    fn fetch(
        &self,
        series_id: &str,
    ) -> impl std::future::Future<Output = Result<SeriesObservation>> + Send;
}

pub trait ConfigProvider: Send + Sync {
    fn llm_endpoint(&self) -> &str;
    fn data_endpoint(&self) -> &str;
    fn model(&self) -> &str;
    fn lookback_days(&self) -> i64;
}

#[async_trait]
pub trait Pipeline: Send + Sync {
    async fn think(&self, question: &str) -> Result<String>;
    async fn act(&self, series_id: &str) -> Result<SeriesObservation>;
    fn observe(&self, series: &SeriesObservation) -> Result<Summary>;
    async fn respond(&self, question: &str, summary: &Summary) -> Result<String>;
}

use crate::domain::ports::Pipeline;
use crate::utils::error::Result;

/// Runs one question through the pipeline, strictly in sequence.
pub struct AgentEngine<P: Pipeline> {
    pipeline: P,
}

impl<P: Pipeline> AgentEngine<P> {
    pub fn new(pipeline: P) -> Self {
        Self { pipeline }
    }

    pub async fn answer(&self, question: &str) -> Result<String> {
        tracing::info!("THINK: choosing a series");
        let series_id = self.pipeline.think(question).await?;
        tracing::info!("Series code: {}", series_id);

        tracing::info!("ACT: fetching {}", series_id);
        let series = self.pipeline.act(&series_id).await?;
        tracing::info!("Fetched {} data points", series.points.len());

        tracing::info!("OBSERVE: summarizing");
        let summary = self.pipeline.observe(&series)?;
        tracing::info!(
            "Latest: {} {} ({})",
            summary.current_value,
            summary.units,
            summary.current_date
        );

        tracing::info!("RESPOND: generating answer");
        let answer = self.pipeline.respond(question, &summary).await?;

        Ok(answer)
    }
}

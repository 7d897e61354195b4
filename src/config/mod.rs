pub mod credentials;

use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{
    validate_non_empty_string, validate_positive_number, validate_url, Validate,
};
use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "econ-agent")]
#[command(about = "Answer economic questions with an LLM plus a FRED data lookup")]
pub struct CliConfig {
    #[arg(long, default_value = "https://generativelanguage.googleapis.com")]
    pub llm_endpoint: String,

    #[arg(long, default_value = "https://api.stlouisfed.org")]
    pub data_endpoint: String,

    #[arg(long, default_value = "gemini-2.5-flash")]
    pub model: String,

    #[arg(
        long,
        default_value = "1460",
        help = "How far back to fetch observations, in days"
    )]
    pub lookback_days: i64,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ConfigProvider for CliConfig {
    fn llm_endpoint(&self) -> &str {
        &self.llm_endpoint
    }

    fn data_endpoint(&self) -> &str {
        &self.data_endpoint
    }

    fn model(&self) -> &str {
        &self.model
    }

    fn lookback_days(&self) -> i64 {
        self.lookback_days
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("llm_endpoint", &self.llm_endpoint)?;
        validate_url("data_endpoint", &self.data_endpoint)?;
        validate_non_empty_string("model", &self.model)?;
        validate_positive_number("lookback_days", self.lookback_days, 1)?;
        Ok(())
    }
}

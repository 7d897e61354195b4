use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgentError {
    #[error("Missing credential: {name} is not set")]
    StartupError { name: String },

    #[error("Could not resolve a series code: {message}")]
    ResolutionError { message: String },

    #[error("Series lookup failed: {message}")]
    FetchError { message: String },

    #[error("Series contains no observations")]
    EmptySeriesError,

    #[error("Answer generation failed: {message}")]
    GenerationError { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Unexpected provider response: {message}")]
    ProviderResponseError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

impl AgentError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            AgentError::StartupError { name } => {
                format!("{} is not set. Export it before starting.", name)
            }
            AgentError::ResolutionError { .. } => {
                "I could not work out which data series answers that question.".to_string()
            }
            AgentError::FetchError { message } => {
                format!("The statistics provider rejected the lookup: {}", message)
            }
            AgentError::EmptySeriesError => {
                "The series came back with no data points.".to_string()
            }
            AgentError::GenerationError { .. } => {
                "The language model failed while writing the answer.".to_string()
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            AgentError::StartupError { name } => format!("Run: export {}=<your key>", name),
            AgentError::ResolutionError { .. } => {
                "Try rephrasing the question around a single indicator.".to_string()
            }
            AgentError::FetchError { .. } => {
                "Check that the series code exists in the provider's catalog.".to_string()
            }
            AgentError::EmptySeriesError => {
                "Try a longer lookback window with --lookback-days.".to_string()
            }
            AgentError::GenerationError { .. } | AgentError::ApiError(_) => {
                "Check network connectivity and API quota, then ask again.".to_string()
            }
            _ => "Check the configuration values and try again.".to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AgentError>;

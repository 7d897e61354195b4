use crate::utils::error::{AgentError, Result};

/// Provider secrets, read once at startup. A missing key is fatal before the
/// read loop starts; it is never a per-question error.
#[derive(Debug, Clone)]
pub struct Credentials {
    pub fred_api_key: String,
    pub google_api_key: String,
}

impl Credentials {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            fred_api_key: read_required("FRED_API_KEY")?,
            google_api_key: read_required("GOOGLE_API_KEY")?,
        })
    }
}

fn read_required(name: &str) -> Result<String> {
    match std::env::var(name) {
        Ok(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(AgentError::StartupError {
            name: name.to_string(),
        }),
    }
}

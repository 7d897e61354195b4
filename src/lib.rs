pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::{FredClient, GeminiClient};
pub use config::{credentials::Credentials, CliConfig};
pub use core::{agent::AgentEngine, pipeline::AgentPipeline};
pub use utils::error::{AgentError, Result};

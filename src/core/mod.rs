pub mod agent;
pub mod observe;
pub mod pipeline;

pub use crate::domain::model::{SeriesObservation, SeriesPoint, Summary, Trend};
pub use crate::domain::ports::{ConfigProvider, LanguageModel, Pipeline, SeriesSource};
pub use crate::utils::error::Result;

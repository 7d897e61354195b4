pub mod model;
pub mod ports;

pub use model::{SeriesObservation, SeriesPoint, Summary, Trend};
pub use ports::{ConfigProvider, LanguageModel, Pipeline, SeriesSource};

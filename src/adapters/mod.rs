pub mod fred;
pub mod gemini;

pub use fred::FredClient;
pub use gemini::GeminiClient;

use chrono::NaiveDate;
use serde::Serialize;

/// One (date, value) observation within a published time series.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SeriesPoint {
    pub date: NaiveDate,
    pub value: f64,
}

/// A fetched time series: metadata plus points in ascending date order.
#[derive(Debug, Clone)]
pub struct SeriesObservation {
    pub title: String,
    pub units: String,
    pub points: Vec<SeriesPoint>,
}

/// Qualitative direction of the two most recent observations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Trend {
    Up,
    Down,
    Flat,
}

impl std::fmt::Display for Trend {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Trend::Up => write!(f, "up"),
            Trend::Down => write!(f, "down"),
            Trend::Flat => write!(f, "flat"),
        }
    }
}

/// Compact view of a series, embedded as JSON into the answer prompt.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    pub title: String,
    pub current_value: f64,
    pub current_date: NaiveDate,
    pub units: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trend: Option<Trend>,
}

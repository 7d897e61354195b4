use crate::domain::model::{SeriesObservation, Summary, Trend};
use crate::utils::error::{AgentError, Result};

/// Reduce a series to its latest point plus a qualitative trend.
///
/// Pure and deterministic: the trend compares the two most recent points and
/// is omitted when the series holds a single one.
pub fn build_summary(series: &SeriesObservation) -> Result<Summary> {
    let latest = series.points.last().ok_or(AgentError::EmptySeriesError)?;

    let trend = if series.points.len() >= 2 {
        let previous = &series.points[series.points.len() - 2];
        Some(if latest.value > previous.value {
            Trend::Up
        } else if latest.value < previous.value {
            Trend::Down
        } else {
            Trend::Flat
        })
    } else {
        None
    };

    Ok(Summary {
        title: series.title.clone(),
        current_value: latest.value,
        current_date: latest.date,
        units: series.units.clone(),
        trend,
    })
}

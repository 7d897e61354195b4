use crate::domain::model::{SeriesObservation, SeriesPoint};
use crate::domain::ports::SeriesSource;
use crate::utils::error::{AgentError, Result};
use chrono::{Duration as ChronoDuration, NaiveDate, Utc};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct SeriesInfoResponse {
    seriess: Vec<SeriesInfo>,
}

#[derive(Debug, Deserialize)]
struct SeriesInfo {
    title: String,
    units: String,
}

#[derive(Debug, Deserialize)]
struct ObservationsResponse {
    observations: Vec<RawObservation>,
}

#[derive(Debug, Deserialize)]
struct RawObservation {
    date: String,
    value: String,
}

/// Lookup client for the FRED series and observations endpoints.
///
/// Observations are restricted to a lookback window ending today; the
/// provider marks missing values with "." and those points are skipped.
#[derive(Debug, Clone)]
pub struct FredClient {
    base_url: String,
    api_key: String,
    lookback_days: i64,
    client: reqwest::Client,
}

impl FredClient {
    pub fn new(
        base_url: impl Into<String>,
        api_key: impl Into<String>,
        lookback_days: i64,
    ) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(30))
            .build()?;

        Ok(Self {
            base_url: base_url.into(),
            api_key: api_key.into(),
            lookback_days,
            client,
        })
    }

    async fn series_info(&self, series_id: &str) -> Result<SeriesInfo> {
        let url = format!("{}/fred/series", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("series_id", series_id),
                ("api_key", self.api_key.as_str()),
                ("file_type", "json"),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AgentError::FetchError {
                message: format!("{} for series {}", response.status(), series_id),
            });
        }

        let payload: SeriesInfoResponse = response.json().await?;
        payload
            .seriess
            .into_iter()
            .next()
            .ok_or_else(|| AgentError::FetchError {
                message: format!("no metadata returned for series {}", series_id),
            })
    }

    async fn observations(&self, series_id: &str) -> Result<Vec<SeriesPoint>> {
        let start = Utc::now().date_naive() - ChronoDuration::days(self.lookback_days);
        let start_str = start.format("%Y-%m-%d").to_string();
        let url = format!("{}/fred/series/observations", self.base_url);
        let response = self
            .client
            .get(&url)
            .query(&[
                ("series_id", series_id),
                ("api_key", self.api_key.as_str()),
                ("file_type", "json"),
                ("observation_start", start_str.as_str()),
            ])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(AgentError::FetchError {
                message: format!("{} for series {}", response.status(), series_id),
            });
        }

        let payload: ObservationsResponse = response.json().await?;
        let mut points = Vec::with_capacity(payload.observations.len());
        for raw in payload.observations {
            if raw.value == "." {
                continue;
            }

            let date = match NaiveDate::parse_from_str(&raw.date, "%Y-%m-%d") {
                Ok(date) => date,
                Err(e) => {
                    tracing::warn!("Skipping observation with bad date '{}': {}", raw.date, e);
                    continue;
                }
            };
            let value = match raw.value.parse::<f64>() {
                Ok(value) => value,
                Err(e) => {
                    tracing::warn!("Skipping observation with bad value '{}': {}", raw.value, e);
                    continue;
                }
            };

            points.push(SeriesPoint { date, value });
        }

        points.sort_by_key(|point| point.date);
        Ok(points)
    }
}

impl SeriesSource for FredClient {
    async fn fetch(&self, series_id: &str) -> Result<SeriesObservation> {
        let info = self.series_info(series_id).await?;
        tracing::debug!("Series {}: {} ({})", series_id, info.title, info.units);

        let points = self.observations(series_id).await?;
        tracing::debug!("Series {}: {} points", series_id, points.len());

        Ok(SeriesObservation {
            title: info.title,
            units: info.units,
            points,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;

    fn mock_series_info(server: &MockServer, series_id: &str) {
        server.mock(|when, then| {
            when.method(GET)
                .path("/fred/series")
                .query_param("series_id", series_id)
                .query_param("api_key", "test-key")
                .query_param("file_type", "json");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "seriess": [{"title": "Unemployment Rate", "units": "Percent"}]
                }));
        });
    }

    #[tokio::test]
    async fn test_fetch_returns_title_units_and_points() {
        let server = MockServer::start();
        mock_series_info(&server, "UNRATE");
        server.mock(|when, then| {
            when.method(GET)
                .path("/fred/series/observations")
                .query_param("series_id", "UNRATE");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "observations": [
                        {"date": "2024-04-01", "value": "3.9"},
                        {"date": "2024-05-01", "value": "4.0"}
                    ]
                }));
        });

        let client = FredClient::new(server.base_url(), "test-key", 1460).unwrap();
        let series = client.fetch("UNRATE").await.unwrap();

        assert_eq!(series.title, "Unemployment Rate");
        assert_eq!(series.units, "Percent");
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[1].value, 4.0);
    }

    #[tokio::test]
    async fn test_fetch_skips_missing_value_placeholders() {
        let server = MockServer::start();
        mock_series_info(&server, "UNRATE");
        server.mock(|when, then| {
            when.method(GET)
                .path("/fred/series/observations")
                .query_param("series_id", "UNRATE");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "observations": [
                        {"date": "2024-03-01", "value": "."},
                        {"date": "2024-04-01", "value": "3.9"},
                        {"date": "2024-05-01", "value": "4.0"}
                    ]
                }));
        });

        let client = FredClient::new(server.base_url(), "test-key", 1460).unwrap();
        let series = client.fetch("UNRATE").await.unwrap();
        assert_eq!(series.points.len(), 2);
        assert_eq!(series.points[0].value, 3.9);
    }

    #[tokio::test]
    async fn test_fetch_sorts_points_by_date() {
        let server = MockServer::start();
        mock_series_info(&server, "UNRATE");
        server.mock(|when, then| {
            when.method(GET)
                .path("/fred/series/observations")
                .query_param("series_id", "UNRATE");
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "observations": [
                        {"date": "2024-05-01", "value": "4.0"},
                        {"date": "2024-04-01", "value": "3.9"}
                    ]
                }));
        });

        let client = FredClient::new(server.base_url(), "test-key", 1460).unwrap();
        let series = client.fetch("UNRATE").await.unwrap();
        assert_eq!(series.points[0].value, 3.9);
        assert_eq!(series.points[1].value, 4.0);
    }

    #[tokio::test]
    async fn test_fetch_unknown_series_is_fetch_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET)
                .path("/fred/series")
                .query_param("series_id", "BOGUSCODE");
            then.status(400)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({
                    "error_code": 400,
                    "error_message": "Bad Request. The series does not exist."
                }));
        });

        let client = FredClient::new(server.base_url(), "test-key", 1460).unwrap();
        let result = client.fetch("BOGUSCODE").await;
        assert!(matches!(result, Err(AgentError::FetchError { .. })));
    }

    #[tokio::test]
    async fn test_fetch_requests_lookback_window_start() {
        let server = MockServer::start();
        mock_series_info(&server, "GDP");

        let expected_start = (Utc::now().date_naive() - ChronoDuration::days(30))
            .format("%Y-%m-%d")
            .to_string();
        let observations_mock = server.mock(|when, then| {
            when.method(GET)
                .path("/fred/series/observations")
                .query_param("series_id", "GDP")
                .query_param("observation_start", &expected_start);
            then.status(200)
                .header("Content-Type", "application/json")
                .json_body(serde_json::json!({"observations": []}));
        });

        let client = FredClient::new(server.base_url(), "test-key", 30).unwrap();
        let series = client.fetch("GDP").await.unwrap();

        observations_mock.assert();
        assert!(series.points.is_empty());
    }
}

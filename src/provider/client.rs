use chrono::{DateTime, SecondsFormat, Utc};
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use reqwest::{Client, Response};
use serde_json::Value;

use crate::grid_data::types::TimeRange;
use crate::provider::config::ProviderConfig;
use crate::provider::error::ProviderError;

const AUTH_TOKEN_HEADER: &str = "auth-token";
const CLIENT_USER_AGENT: &str = "GridMixDashboard/1.0";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProviderEndpoint {
    /// `carbon-intensity/past-range`, the requested window
    PastRange,
    /// `power-breakdown/history`, recent history only
    RecentHistory,
}

impl ProviderEndpoint {
    pub fn path(&self) -> &'static str {
        match self {
            ProviderEndpoint::PastRange => "carbon-intensity/past-range",
            ProviderEndpoint::RecentHistory => "power-breakdown/history",
        }
    }
}

/// Response body plus the endpoint that produced it.
#[derive(Debug, Clone)]
pub struct ProviderPayload {
    pub endpoint: ProviderEndpoint,
    pub body: Value,
}

#[derive(Clone, Debug)]
pub struct ElectricityMapsClient {
    config: ProviderConfig,
    client: Client,
}

impl ElectricityMapsClient {
    pub fn new(config: ProviderConfig) -> Self {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static(CLIENT_USER_AGENT));

        let client = Client::builder()
            .default_headers(headers)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Failed to build provider HTTP client, using defaults: {}", e);
                Client::new()
            });

        Self { config, client }
    }

    /// Fetches the history for `zone` over `range` ending at `now`.
    ///
    /// The past-range endpoint needs a paid plan; any non-success answer
    /// from it falls back once to the recent-history endpoint. A failed
    /// fallback is reported with the fallback's status.
    pub async fn fetch_history(
        &self,
        zone: &str,
        range: TimeRange,
        now: DateTime<Utc>,
    ) -> Result<ProviderPayload, ProviderError> {
        let start = range.start_from(now).to_rfc3339_opts(SecondsFormat::Millis, true);
        let end = now.to_rfc3339_opts(SecondsFormat::Millis, true);

        let resp = self
            .get(ProviderEndpoint::PastRange, &[("zone", zone), ("start", start.as_str()), ("end", end.as_str())])
            .await?;

        if resp.status().is_success() {
            return Ok(ProviderPayload {
                endpoint: ProviderEndpoint::PastRange,
                body: Self::decode(resp).await?,
            });
        }

        tracing::warn!(
            "Failed to fetch {} data for {}: {}. Falling back to recent history.",
            range,
            zone,
            resp.status()
        );

        let fallback = self.get(ProviderEndpoint::RecentHistory, &[("zone", zone)]).await?;
        let status = fallback.status();
        if !status.is_success() {
            tracing::error!("Recent history fallback for {} failed: {}", zone, status);
            return Err(ProviderError::Status {
                status,
                endpoint: ProviderEndpoint::RecentHistory.path().to_string(),
            });
        }

        Ok(ProviderPayload {
            endpoint: ProviderEndpoint::RecentHistory,
            body: Self::decode(fallback).await?,
        })
    }

    async fn get(&self, endpoint: ProviderEndpoint, query: &[(&str, &str)]) -> Result<Response, ProviderError> {
        let url = format!("{}/{}", self.config.base_url, endpoint.path());
        tracing::debug!("GET {}", url);

        let resp = self
            .client
            .get(&url)
            .header(AUTH_TOKEN_HEADER, self.config.api_token.as_str())
            .query(query)
            .send()
            .await?;

        Ok(resp)
    }

    async fn decode(resp: Response) -> Result<Value, ProviderError> {
        resp.json::<Value>()
            .await
            .map_err(|e| ProviderError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, extract::Query, http::StatusCode, routing::get};
    use chrono::TimeZone;
    use serde_json::json;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    type Hits = Arc<Mutex<Vec<String>>>;

    fn token_of(headers: &axum::http::HeaderMap) -> String {
        headers
            .get(AUTH_TOKEN_HEADER)
            .and_then(|h| h.to_str().ok())
            .unwrap_or("<none>")
            .to_string()
    }

    async fn spawn_provider(primary: StatusCode, fallback: StatusCode) -> (String, Hits) {
        let hits: Hits = Arc::new(Mutex::new(Vec::new()));
        let primary_hits = hits.clone();
        let fallback_hits = hits.clone();

        let app = Router::new()
            .route(
                "/carbon-intensity/past-range",
                get(move |headers: axum::http::HeaderMap, Query(q): Query<HashMap<String, String>>| {
                    let hits = primary_hits.clone();
                    async move {
                        hits.lock().unwrap().push(format!(
                            "past-range zone={} token={} windowed={}",
                            q.get("zone").cloned().unwrap_or_default(),
                            token_of(&headers),
                            q.contains_key("start") && q.contains_key("end"),
                        ));
                        (
                            primary,
                            Json(json!({
                                "zone": "IN",
                                "data": [{ "datetime": "2024-01-01T00:00:00.000Z", "carbonIntensity": 610 }]
                            })),
                        )
                    }
                }),
            )
            .route(
                "/power-breakdown/history",
                get(move |headers: axum::http::HeaderMap, Query(q): Query<HashMap<String, String>>| {
                    let hits = fallback_hits.clone();
                    async move {
                        hits.lock().unwrap().push(format!(
                            "history zone={} token={}",
                            q.get("zone").cloned().unwrap_or_default(),
                            token_of(&headers),
                        ));
                        (
                            fallback,
                            Json(json!({
                                "zone": "IN",
                                "history": [{
                                    "datetime": "2024-01-01T00:00:00.000Z",
                                    "powerProductionBreakdown": { "coal": 100, "solar": 50 }
                                }]
                            })),
                        )
                    }
                }),
            );

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        (format!("http://{}", addr), hits)
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap()
    }

    #[tokio::test]
    async fn test_requests_carry_user_agent() {
        let app = Router::new().route(
            "/carbon-intensity/past-range",
            get(|headers: axum::http::HeaderMap| async move {
                let agent = headers
                    .get(USER_AGENT)
                    .and_then(|h| h.to_str().ok())
                    .unwrap_or_default()
                    .to_string();
                Json(json!({ "data": [], "agent": agent }))
            }),
        );
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        let client = ElectricityMapsClient::new(ProviderConfig::new(format!("http://{}", addr), "secret"));
        let payload = client.fetch_history("IN", TimeRange::OneYear, now()).await.unwrap();

        assert_eq!(payload.body["agent"], CLIENT_USER_AGENT);
    }

    #[tokio::test]
    async fn test_primary_success() {
        let (base_url, hits) = spawn_provider(StatusCode::OK, StatusCode::OK).await;
        let client = ElectricityMapsClient::new(ProviderConfig::new(base_url, "secret"));

        let payload = client.fetch_history("IN", TimeRange::OneYear, now()).await.unwrap();

        assert_eq!(payload.endpoint, ProviderEndpoint::PastRange);
        assert_eq!(payload.body["data"][0]["carbonIntensity"], 610);
        assert_eq!(
            *hits.lock().unwrap(),
            vec!["past-range zone=IN token=secret windowed=true".to_string()]
        );
    }

    #[tokio::test]
    async fn test_falls_back_on_primary_failure() {
        let (base_url, hits) = spawn_provider(StatusCode::FORBIDDEN, StatusCode::OK).await;
        let client = ElectricityMapsClient::new(ProviderConfig::new(base_url, "secret"));

        let payload = client.fetch_history("DE", TimeRange::FiveYears, now()).await.unwrap();

        assert_eq!(payload.endpoint, ProviderEndpoint::RecentHistory);
        assert_eq!(payload.body["history"][0]["powerProductionBreakdown"]["coal"], 100);
        let hits = hits.lock().unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[1], "history zone=DE token=secret");
    }

    #[tokio::test]
    async fn test_fallback_failure_reports_fallback_status() {
        let (base_url, _hits) =
            spawn_provider(StatusCode::FORBIDDEN, StatusCode::UNAUTHORIZED).await;
        let client = ElectricityMapsClient::new(ProviderConfig::new(base_url, ""));

        let err = client.fetch_history("IN", TimeRange::OneYear, now()).await.unwrap_err();

        assert_eq!(err.upstream_status(), Some(StatusCode::UNAUTHORIZED));
    }

    #[tokio::test]
    async fn test_empty_token_is_sent_as_is() {
        let (base_url, hits) = spawn_provider(StatusCode::OK, StatusCode::OK).await;
        let client = ElectricityMapsClient::new(ProviderConfig::new(base_url, ""));

        client.fetch_history("IN", TimeRange::OneYear, now()).await.unwrap();

        assert_eq!(
            hits.lock().unwrap()[0],
            "past-range zone=IN token= windowed=true"
        );
    }

    #[tokio::test]
    async fn test_unreachable_provider_is_network_error() {
        let client = ElectricityMapsClient::new(ProviderConfig::new("http://127.0.0.1:1", "secret"));

        let err = client.fetch_history("IN", TimeRange::OneYear, now()).await.unwrap_err();

        assert!(matches!(err, ProviderError::Network(_)));
        assert_eq!(err.upstream_status(), None);
    }
}

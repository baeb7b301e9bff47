//! Client for the external itinerary-generation service.
//!
//! [`ItineraryService`] is the seam the workflow talks to. The production
//! implementation, [`HttpItineraryClient`], speaks the service's JSON API:
//!
//! - `POST {base}/itinerary/` with `{"query": "..."}` creates an itinerary
//! - `GET {base}/itinerary/{id}` fetches a stored one
//!
//! Both answer with an object carrying the generated text in
//! `itinerary_response`. Every failure is normalized into a [`RoamError`]:
//! transport problems, non-success statuses (using the service's `detail`
//! message when it sends one) and bodies without usable text.

use async_trait::async_trait;
use log::{debug, warn};
use reqwest::{Client, Response, StatusCode};
use serde::Deserialize;

use crate::{
    config::ServiceConfig,
    error::{Result, RoamError, TransportResultExt},
    models::{Itinerary, ItineraryRequest},
};

/// Operations offered by an itinerary-generation backend.
#[async_trait]
pub trait ItineraryService: Send + Sync {
    /// Generates a new itinerary for the request's query.
    async fn create_itinerary(&self, request: &ItineraryRequest) -> Result<Itinerary>;

    /// Fetches a previously generated itinerary.
    async fn get_itinerary(&self, id: &str) -> Result<Itinerary>;
}

/// Success body as sent by the service; `itinerary_response` may be null.
#[derive(Deserialize)]
struct RawItinerary {
    #[serde(default)]
    id: Option<serde_json::Value>,
    #[serde(default)]
    query: Option<String>,
    #[serde(default)]
    itinerary_response: Option<String>,
    #[serde(default)]
    created_at: Option<serde_json::Value>,
    #[serde(default)]
    updated_at: Option<serde_json::Value>,
}

/// FastAPI-style error body.
#[derive(Deserialize)]
struct ErrorBody {
    detail: serde_json::Value,
}

/// reqwest-backed [`ItineraryService`].
#[derive(Debug, Clone)]
pub struct HttpItineraryClient {
    client: Client,
    config: ServiceConfig,
}

impl HttpItineraryClient {
    /// Creates a client with a default reqwest client.
    pub fn new(config: ServiceConfig) -> Self {
        Self::with_client(config, Client::new())
    }

    /// Creates a client around an existing reqwest client.
    pub fn with_client(config: ServiceConfig, client: Client) -> Self {
        Self { client, config }
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }
}

#[async_trait]
impl ItineraryService for HttpItineraryClient {
    async fn create_itinerary(&self, request: &ItineraryRequest) -> Result<Itinerary> {
        let url = self.config.endpoint("itinerary/");
        debug!("POST {url} query={:?}", request.query);

        let response = self
            .client
            .post(&url)
            .json(request)
            .send()
            .await
            .transport_context("Request to create itinerary failed")?;

        let status = response.status();
        if !status.is_success() {
            let message = error_message(response, "Failed to generate itinerary").await;
            warn!("Itinerary service returned {status}: {message}");
            return Err(RoamError::Service {
                status: status.as_u16(),
                message,
            });
        }

        parse_itinerary(response).await
    }

    async fn get_itinerary(&self, id: &str) -> Result<Itinerary> {
        let id = checked_itinerary_id(id)?;
        let url = self.config.resource_url("itinerary", id)?;
        debug!("GET {url}");

        let response = self
            .client
            .get(url)
            .send()
            .await
            .transport_context("Request to fetch itinerary failed")?;

        let status = response.status();
        if status == StatusCode::NOT_FOUND {
            return Err(RoamError::ItineraryNotFound { id: id.to_string() });
        }
        if !status.is_success() {
            let message = error_message(response, "Failed to fetch itinerary").await;
            warn!("Itinerary service returned {status}: {message}");
            return Err(RoamError::Service {
                status: status.as_u16(),
                message,
            });
        }

        parse_itinerary(response).await
    }
}

/// Trims `id` and rejects values that cannot name a single path segment.
///
/// # Errors
///
/// Returns `RoamError::InvalidItineraryId` for a blank ID, `.` or `..`.
pub fn checked_itinerary_id(id: &str) -> Result<&str> {
    let trimmed = id.trim();
    if trimmed.is_empty() || trimmed == "." || trimmed == ".." {
        return Err(RoamError::InvalidItineraryId { id: id.to_string() });
    }
    Ok(trimmed)
}

/// Reads a success body and insists on non-blank itinerary text.
async fn parse_itinerary(response: Response) -> Result<Itinerary> {
    let body = response
        .text()
        .await
        .transport_context("Failed to read itinerary response")?;
    itinerary_from_body(&body)
}

/// Decodes a service body. Missing metadata is allowed; numeric IDs are
/// kept as text and timestamps without an offset are dropped.
fn itinerary_from_body(body: &str) -> Result<Itinerary> {
    let raw: RawItinerary = serde_json::from_str(body)
        .map_err(|e| RoamError::malformed(format!("response is not a JSON object: {e}")))?;

    let text = match raw.itinerary_response {
        Some(text) if !text.trim().is_empty() => text,
        Some(_) => return Err(RoamError::malformed("itinerary text is empty")),
        None => {
            return Err(RoamError::malformed(
                "missing 'itinerary_response' field",
            ))
        }
    };

    Ok(Itinerary {
        id: raw.id.and_then(scalar_to_string),
        query: raw.query,
        itinerary_response: text,
        created_at: raw.created_at.and_then(timestamp_from_value),
        updated_at: raw.updated_at.and_then(timestamp_from_value),
    })
}

/// Builds a human-readable message for a non-success response: the
/// service's `detail` string when present, otherwise `fallback` with the
/// status code.
async fn error_message(response: Response, fallback: &str) -> String {
    let status = response.status();
    let detail = match response.text().await {
        Ok(body) => serde_json::from_str::<ErrorBody>(&body)
            .ok()
            .and_then(|b| match b.detail {
                serde_json::Value::String(s) if !s.trim().is_empty() => Some(s),
                _ => None,
            }),
        Err(e) => {
            debug!("Could not read error body: {e}");
            None
        }
    };

    detail.unwrap_or_else(|| format!("{fallback} (HTTP {})", status.as_u16()))
}

fn scalar_to_string(value: serde_json::Value) -> Option<String> {
    match value {
        serde_json::Value::String(s) => Some(s),
        serde_json::Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn timestamp_from_value(value: serde_json::Value) -> Option<jiff::Timestamp> {
    value.as_str().and_then(|s| s.parse().ok())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_service_body() {
        let body = r##"{
            "id": "0190b6b5-7c1f-7000-8000-000000000001",
            "query": "Plan a trip",
            "itinerary_response": "# Day 1\nLouvre",
            "created_at": "2025-06-01T10:00:00.123456Z",
            "updated_at": "2025-06-01T10:00:05+00:00"
        }"##;

        let itinerary = itinerary_from_body(body).unwrap();
        assert_eq!(itinerary.itinerary_response, "# Day 1\nLouvre");
        assert_eq!(
            itinerary.id.as_deref(),
            Some("0190b6b5-7c1f-7000-8000-000000000001")
        );
        assert_eq!(itinerary.query.as_deref(), Some("Plan a trip"));
        assert!(itinerary.created_at.is_some());
        assert!(itinerary.updated_at.is_some());
        assert!(itinerary.has_metadata());
    }

    #[test]
    fn test_unusable_timestamps_are_dropped() {
        let body = r#"{
            "itinerary_response": "Day 1: ...",
            "created_at": "2025-06-01T10:00:00",
            "updated_at": 1717236000
        }"#;

        let itinerary = itinerary_from_body(body).unwrap();
        assert_eq!(itinerary.created_at, None);
        assert_eq!(itinerary.updated_at, None);
        assert!(!itinerary.has_metadata());
    }

    #[test]
    fn test_numeric_id_is_kept_as_text() {
        let itinerary = itinerary_from_body(r#"{"id":42,"itinerary_response":"Day 1"}"#).unwrap();
        assert_eq!(itinerary.id.as_deref(), Some("42"));
    }

    #[test]
    fn test_null_text_is_malformed() {
        let err = itinerary_from_body(r#"{"itinerary_response":null}"#).unwrap_err();
        assert!(err.to_string().contains("missing 'itinerary_response' field"));
    }

    #[test]
    fn test_checked_itinerary_id() {
        assert_eq!(checked_itinerary_id("  abc ").unwrap(), "abc");
        assert_eq!(checked_itinerary_id("a/b?c").unwrap(), "a/b?c");
        for id in ["", "   ", ".", ".."] {
            assert!(matches!(
                checked_itinerary_id(id),
                Err(RoamError::InvalidItineraryId { .. })
            ));
        }
    }
}

//! HTTP client for the segment and requested-analysis endpoints.

use std::fmt;

use motion_model::{RequestedAnalysis, SegmentCreated, SegmentCriteria, SegmentId};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::config::ApiConfig;
use crate::error::{ClientError, Result};

/// Header carrying the API key.
pub const API_KEY_HEADER: &str = "x-api-key";

/// User agent string for API requests.
const USER_AGENT_VALUE: &str = concat!("motion-api/", env!("CARGO_PKG_VERSION"));

/// Resource-creation endpoints used by the submitter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    /// `POST /player_group_segments`
    Segments,
    /// `POST /requested_analyses`
    RequestedAnalyses,
}

impl Endpoint {
    pub fn path(&self) -> &'static str {
        match self {
            Endpoint::Segments => "/player_group_segments",
            Endpoint::RequestedAnalyses => "/requested_analyses",
        }
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

/// Operations the submitter needs from the vendor API.
///
/// Each call issues exactly one request and never retries.
pub trait MotionApi {
    /// Creates a player group segment and returns its `analysis_segment_id`.
    fn create_segment(&self, criteria: &SegmentCriteria) -> Result<SegmentId>;

    /// Creates a requested analysis and returns the decoded response body.
    fn create_requested_analysis(&self, analysis: &RequestedAnalysis) -> Result<Value>;
}

impl<T: MotionApi + ?Sized> MotionApi for &T {
    fn create_segment(&self, criteria: &SegmentCriteria) -> Result<SegmentId> {
        (**self).create_segment(criteria)
    }

    fn create_requested_analysis(&self, analysis: &RequestedAnalysis) -> Result<Value> {
        (**self).create_requested_analysis(analysis)
    }
}

/// Blocking [`MotionApi`] implementation over HTTPS.
#[derive(Debug, Clone)]
pub struct HttpMotionApi {
    client: Client,
    config: ApiConfig,
}

impl HttpMotionApi {
    /// Creates a client from the given configuration.
    ///
    /// The API key, when present, is installed as a default sensitive header.
    pub fn new(config: ApiConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        match config.api_key() {
            Some(key) => {
                let mut value =
                    HeaderValue::from_str(key).map_err(|_| ClientError::InvalidApiKey)?;
                value.set_sensitive(true);
                headers.insert(API_KEY_HEADER, value);
            }
            None => {
                tracing::warn!("no API key configured; requests will be sent unauthenticated");
            }
        }

        let client = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT_VALUE)
            .timeout(config.timeout())
            .build()
            .map_err(ClientError::ClientBuild)?;

        Ok(Self { client, config })
    }

    /// POSTs a JSON body and returns the parsed JSON response of a 2xx answer.
    fn post_json<B>(&self, endpoint: Endpoint, body: &B) -> Result<Value>
    where
        B: Serialize + ?Sized,
    {
        let url = self.config.url(endpoint.path());
        tracing::debug!(%url, "sending request");

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .map_err(|source| ClientError::Transport { endpoint, source })?;

        let status = response.status();
        let text = response
            .text()
            .map_err(|source| ClientError::Transport { endpoint, source })?;
        tracing::debug!(status = status.as_u16(), bytes = text.len(), "received response");

        if !status.is_success() {
            return Err(ClientError::Api {
                endpoint,
                status: status.as_u16(),
                body: text,
            });
        }

        serde_json::from_str(&text).map_err(|e| ClientError::ResponseShape {
            endpoint,
            reason: format!("body is not valid JSON: {e}"),
            body: text,
        })
    }
}

/// Extracts the segment id from a segment-creation response.
pub fn parse_segment_created(body: &Value) -> Result<SegmentId> {
    let shape_error = |reason: String, body: &Value| ClientError::ResponseShape {
        endpoint: Endpoint::Segments,
        reason,
        body: body.to_string(),
    };
    if body.get("analysis_segment_id").is_none() {
        return Err(shape_error(
            "missing field `analysis_segment_id`".to_string(),
            body,
        ));
    }
    match SegmentCreated::deserialize(body) {
        Ok(created) => Ok(created.analysis_segment_id),
        Err(e) => Err(shape_error(e.to_string(), body)),
    }
}

impl MotionApi for HttpMotionApi {
    fn create_segment(&self, criteria: &SegmentCriteria) -> Result<SegmentId> {
        let body = self.post_json(Endpoint::Segments, criteria)?;
        parse_segment_created(&body)
    }

    fn create_requested_analysis(&self, analysis: &RequestedAnalysis) -> Result<Value> {
        self.post_json(Endpoint::RequestedAnalyses, analysis)
    }
}

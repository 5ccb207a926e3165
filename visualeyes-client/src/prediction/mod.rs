//! Client for the remote attention-prediction service.

mod request;
mod response;

use std::time::Duration;

use tracing::{debug, warn};

use visualeyes_core::config::ClientConfig;
use visualeyes_core::constants::PREDICT_PATH;
use visualeyes_core::errors::{PredictionError, VisualEyesResult};
use visualeyes_core::models::{AreaOfInterest, Prediction};

use crate::codec;

/// Wraps reqwest with the service's auth scheme and response envelope.
/// One attempt per call; there is no retry policy.
#[derive(Debug)]
pub struct PredictionClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl PredictionClient {
    pub fn new(config: ClientConfig) -> Result<Self, PredictionError> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()
            .map_err(|e| PredictionError::Service {
                reason: format!("http client construction failed: {e}"),
            })?;
        Ok(Self { http, config })
    }

    /// Submit a rendered artboard (and any areas of interest) for
    /// prediction. Suspends until the service answers or the transport
    /// gives up; transport failures surface as [`PredictionError::Service`],
    /// never as a panic.
    pub async fn submit(
        &self,
        image_data_url: &str,
        api_key: &str,
        areas: &[AreaOfInterest],
    ) -> Result<Prediction, PredictionError> {
        let form = request::build_form(image_data_url, areas)?;
        let url = format!("{}{}", self.config.endpoint_url, PREDICT_PATH);

        debug!(areas = areas.len(), %url, "submitting prediction request");

        let resp = self
            .http
            .post(&url)
            .multipart(form)
            .header("Authorization", format!("Token {api_key}"))
            .header("cache-control", "no-cache")
            .send()
            .await
            .map_err(|e| {
                warn!(error = %e, "prediction request failed before a response");
                PredictionError::Service {
                    reason: format!("network error: {e}"),
                }
            })?;

        // Status is interpreted before the body is touched.
        let status = resp.status().as_u16();
        if let Some(err) = response::classify_status(status) {
            warn!(status, "prediction request rejected");
            return Err(err);
        }

        let body = resp.text().await.map_err(|e| PredictionError::Service {
            reason: format!("failed to read response body: {e}"),
        })?;

        let prediction = response::parse_envelope(&body)?;
        debug!(
            scored_areas = prediction.areas.len(),
            "prediction request succeeded"
        );
        Ok(prediction)
    }

    /// Fetch the heatmap image bytes from the URL the service returned.
    pub async fn fetch_image(&self, url: &str) -> VisualEyesResult<Vec<u8>> {
        debug!(%url, "fetching heatmap image");

        let resp = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| PredictionError::Service {
                reason: format!("heatmap fetch failed: {e}"),
            })?;

        let status = resp.status();
        if !status.is_success() {
            return Err(PredictionError::Service {
                reason: format!("heatmap fetch returned HTTP {status}"),
            }
            .into());
        }

        let body = resp.bytes().await.map_err(|e| PredictionError::Service {
            reason: format!("heatmap body read failed: {e}"),
        })?;

        Ok(codec::decode_binary(body.as_ref())?)
    }
}

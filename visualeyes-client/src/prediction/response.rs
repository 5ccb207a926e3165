//! Response interpretation: HTTP status first, then the JSON envelope.

use serde::Deserialize;

use visualeyes_core::errors::PredictionError;
use visualeyes_core::models::{AreaScore, Prediction};

/// The service's JSON envelope for a 200 response.
#[derive(Debug, Deserialize)]
struct Envelope {
    code: String,
    #[serde(default)]
    url: Option<String>,
    #[serde(default)]
    aoi: Vec<AreaScore>,
}

/// Map a non-200 status to its error. `None` means proceed to the body.
pub(crate) fn classify_status(status: u16) -> Option<PredictionError> {
    match status {
        200 => None,
        401 => Some(PredictionError::InvalidKey),
        402 => Some(PredictionError::UpgradeRequired),
        403 => Some(PredictionError::QuotaExceeded),
        other => Some(PredictionError::Service {
            reason: format!("unexpected HTTP status {other}"),
        }),
    }
}

/// Parse a 200 body. The envelope's `code` must be the literal `"success"`
/// regardless of the HTTP status.
pub(crate) fn parse_envelope(body: &str) -> Result<Prediction, PredictionError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|e| PredictionError::Service {
            reason: format!("malformed response body: {e}"),
        })?;

    if envelope.code != "success" {
        return Err(PredictionError::Service {
            reason: format!("service reported code {:?}", envelope.code),
        });
    }

    let heatmap_url = envelope.url.ok_or_else(|| PredictionError::Service {
        reason: "success envelope carries no heatmap url".to_string(),
    })?;

    Ok(Prediction {
        heatmap_url,
        areas: envelope.aoi,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_table_maps_to_error_kinds() {
        assert!(classify_status(200).is_none());
        assert!(matches!(
            classify_status(401),
            Some(PredictionError::InvalidKey)
        ));
        assert!(matches!(
            classify_status(402),
            Some(PredictionError::UpgradeRequired)
        ));
        assert!(matches!(
            classify_status(403),
            Some(PredictionError::QuotaExceeded)
        ));
        assert!(matches!(
            classify_status(500),
            Some(PredictionError::Service { .. })
        ));
    }

    #[test]
    fn success_envelope_parses() {
        let body = r#"{"code":"success","url":"https://x/img.jpg","aoi":[{"id":"a1","score":77}]}"#;
        let prediction = parse_envelope(body).unwrap();
        assert_eq!(prediction.heatmap_url, "https://x/img.jpg");
        assert_eq!(prediction.areas.len(), 1);
        assert_eq!(prediction.areas[0].id, "a1");
        assert_eq!(prediction.areas[0].score, 77);
    }

    #[test]
    fn missing_aoi_defaults_to_empty() {
        let body = r#"{"code":"success","url":"https://x/img.jpg"}"#;
        let prediction = parse_envelope(body).unwrap();
        assert!(prediction.areas.is_empty());
    }

    #[test]
    fn non_success_code_is_a_service_error_even_on_http_200() {
        let body = r#"{"code":"error","url":"https://x/img.jpg"}"#;
        assert!(matches!(
            parse_envelope(body),
            Err(PredictionError::Service { .. })
        ));
    }

    #[test]
    fn malformed_body_is_a_service_error() {
        assert!(matches!(
            parse_envelope("not json"),
            Err(PredictionError::Service { .. })
        ));
    }
}

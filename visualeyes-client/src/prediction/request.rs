//! Multipart request construction for the prediction endpoint.

use std::collections::HashSet;

use reqwest::multipart::Form;

use visualeyes_core::constants::PLATFORM;
use visualeyes_core::errors::PredictionError;
use visualeyes_core::models::{AoiPolygon, AreaOfInterest};

/// Build the multipart form: `isTransparent`, `platform`, `image`, and —
/// when any areas are present — the `aoi` polygon list as JSON.
///
/// Every area id must be unique within one request; duplicates abort before
/// any network I/O.
pub(crate) fn build_form(
    image_data_url: &str,
    areas: &[AreaOfInterest],
) -> Result<Form, PredictionError> {
    let mut seen = HashSet::new();
    for area in areas {
        if !seen.insert(area.id.as_str()) {
            return Err(PredictionError::DuplicateAreaId {
                id: area.id.clone(),
            });
        }
    }

    let mut form = Form::new()
        .text("isTransparent", "true")
        .text("platform", PLATFORM)
        .text("image", image_data_url.to_string());

    if !areas.is_empty() {
        let polygons: Vec<AoiPolygon> = areas.iter().map(AoiPolygon::from_area).collect();
        let json = serde_json::to_string(&polygons).map_err(|e| PredictionError::Service {
            reason: format!("aoi serialization failed: {e}"),
        })?;
        form = form.text("aoi", json);
    }

    Ok(form)
}

#[cfg(test)]
mod tests {
    use super::*;
    use visualeyes_core::models::Bounds;

    fn area(id: &str) -> AreaOfInterest {
        AreaOfInterest::new(id, "#3E21DE", Bounds::new(0.0, 0.0, 100.0, 50.0))
    }

    #[test]
    fn duplicate_ids_abort_construction() {
        let err = build_form("data:image/jpg;base64,", &[area("a1"), area("a1")]).unwrap_err();
        assert!(matches!(
            err,
            PredictionError::DuplicateAreaId { id } if id == "a1"
        ));
    }

    #[test]
    fn distinct_ids_build_a_form() {
        assert!(build_form("data:image/jpg;base64,", &[area("a1"), area("a2")]).is_ok());
    }

    #[test]
    fn empty_area_list_builds_a_form() {
        assert!(build_form("data:image/jpg;base64,", &[]).is_ok());
    }
}

use std::f64::consts::TAU;

use rand::Rng;
use tracing::debug;

use crate::error::{InvalidInput, ParkingError};
use crate::geometry::BoundingBox;
use crate::rectangle::{RectangleRecord, rectangles_to_json};
use crate::transform::{LocalFrame, VERTEX_TEMPLATE};

/// Name under which an explicit street orientation is accepted and reported.
pub const ORIENTATION: &str = "orientation";

/// Id given to the single rectangle placed per bounding box.
pub const RECTANGLE_ID: u32 = 1;

/// Draws a street orientation uniformly from `[0, 2π)`.
pub fn sample_orientation<R: Rng>(rng: &mut R) -> f64 {
    rng.random_range(0.0..TAU)
}

/// Places a parking rectangle in `bbox` for a street running at
/// `orientation` radians. The output only depends on its arguments.
pub fn parking_rectangles(
    bbox: &BoundingBox,
    orientation: f64,
) -> Result<Vec<RectangleRecord>, ParkingError> {
    if !orientation.is_finite() {
        return Err(InvalidInput::NotFinite { field: ORIENTATION }.into());
    }

    let center = bbox.center();
    let frame = LocalFrame::new(center, orientation);
    debug!(
        latitude = center.latitude,
        longitude = center.longitude,
        orientation,
        diagonal = bbox.diagonal(),
        "placing parking rectangle"
    );

    let vertices = frame.transform(VERTEX_TEMPLATE);
    if let Some(index) = vertices.iter().position(|v| !v.is_finite()) {
        return Err(ParkingError::NonFiniteVertex { index });
    }

    Ok(vec![RectangleRecord::new(RECTANGLE_ID, vertices)])
}

/// Like [`calculate_parking_rectangles`], drawing a missing orientation from `rng`.
pub fn calculate_parking_rectangles_with_rng<R: Rng>(
    bbox: &BoundingBox,
    orientation: Option<f64>,
    rng: &mut R,
) -> Result<Vec<RectangleRecord>, ParkingError> {
    let orientation = orientation.unwrap_or_else(|| sample_orientation(rng));
    parking_rectangles(bbox, orientation)
}

/// Places a parking rectangle in `bbox`.
///
/// No street data is available, so unless `orientation` is given the street
/// direction is simulated with a fresh random angle. Two calls with the same
/// box then return different rectangles; pass an orientation to get
/// reproducible output.
pub fn calculate_parking_rectangles(
    bbox: &BoundingBox,
    orientation: Option<f64>,
) -> Result<Vec<RectangleRecord>, ParkingError> {
    calculate_parking_rectangles_with_rng(bbox, orientation, &mut rand::rng())
}

/// [`calculate_parking_rectangles`] serialized with [`rectangles_to_json`].
pub fn calculate_parking_rectangles_json(
    bbox: &BoundingBox,
    orientation: Option<f64>,
) -> Result<String, ParkingError> {
    rectangles_to_json(&calculate_parking_rectangles(bbox, orientation)?)
}

use std::ops::RangeInclusive;

use geo_types::{Coord, Point};

use crate::error::InvalidInput;
use crate::geodesy::great_circle_distance;

pub const LATITUDE_TOP_LEFT: &str = "latitude_top_left";
pub const LONGITUDE_TOP_LEFT: &str = "longitude_top_left";
pub const LATITUDE_BOTTOM_RIGHT: &str = "latitude_bottom_right";
pub const LONGITUDE_BOTTOM_RIGHT: &str = "longitude_bottom_right";

pub const LATITUDE_RANGE: RangeInclusive<f64> = -90.0..=90.0;
pub const LONGITUDE_RANGE: RangeInclusive<f64> = -180.0..=180.0;

/// A geographic position in degrees.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.latitude.is_finite() && self.longitude.is_finite()
    }
}

// geo-types puts longitude on x and latitude on y
impl From<GeoPoint> for Coord<f64> {
    fn from(value: GeoPoint) -> Self {
        Coord {
            x: value.longitude,
            y: value.latitude,
        }
    }
}

impl From<Coord<f64>> for GeoPoint {
    fn from(value: Coord<f64>) -> Self {
        Self::new(value.y, value.x)
    }
}

impl From<GeoPoint> for Point<f64> {
    fn from(value: GeoPoint) -> Self {
        Point::new(value.longitude, value.latitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub top_left: GeoPoint,
    pub bottom_right: GeoPoint,
}

impl BoundingBox {
    /// Builds a bounding box, rejecting non-finite or out of range corners.
    pub fn new(
        latitude_top_left: f64,
        longitude_top_left: f64,
        latitude_bottom_right: f64,
        longitude_bottom_right: f64,
    ) -> Result<Self, InvalidInput> {
        Ok(Self {
            top_left: GeoPoint::new(
                check_range(LATITUDE_TOP_LEFT, latitude_top_left, LATITUDE_RANGE)?,
                check_range(LONGITUDE_TOP_LEFT, longitude_top_left, LONGITUDE_RANGE)?,
            ),
            bottom_right: GeoPoint::new(
                check_range(LATITUDE_BOTTOM_RIGHT, latitude_bottom_right, LATITUDE_RANGE)?,
                check_range(
                    LONGITUDE_BOTTOM_RIGHT,
                    longitude_bottom_right,
                    LONGITUDE_RANGE,
                )?,
            ),
        })
    }

    /// Same as [`BoundingBox::new`] but starting from textual input.
    pub fn parse(
        latitude_top_left: &str,
        longitude_top_left: &str,
        latitude_bottom_right: &str,
        longitude_bottom_right: &str,
    ) -> Result<Self, InvalidInput> {
        Self::new(
            parse_coordinate(LATITUDE_TOP_LEFT, latitude_top_left)?,
            parse_coordinate(LONGITUDE_TOP_LEFT, longitude_top_left)?,
            parse_coordinate(LATITUDE_BOTTOM_RIGHT, latitude_bottom_right)?,
            parse_coordinate(LONGITUDE_BOTTOM_RIGHT, longitude_bottom_right)?,
        )
    }

    /// Arithmetic mean of the two corners. This is not the geodesic midpoint,
    /// which only matters for boxes spanning many degrees.
    pub fn center(&self) -> GeoPoint {
        GeoPoint::new(
            (self.top_left.latitude + self.bottom_right.latitude) / 2.0,
            (self.top_left.longitude + self.bottom_right.longitude) / 2.0,
        )
    }

    /// Great circle distance between the corners in meters.
    pub fn diagonal(&self) -> f64 {
        great_circle_distance(
            self.top_left.latitude,
            self.top_left.longitude,
            self.bottom_right.latitude,
            self.bottom_right.longitude,
        )
    }
}

pub fn parse_coordinate(field: &'static str, value: &str) -> Result<f64, InvalidInput> {
    value
        .trim()
        .parse::<f64>()
        .map_err(|_| InvalidInput::NotNumeric {
            field,
            value: value.to_owned(),
        })
}

pub(crate) fn check_range(
    field: &'static str,
    value: f64,
    range: RangeInclusive<f64>,
) -> Result<f64, InvalidInput> {
    if !value.is_finite() {
        return Err(InvalidInput::NotFinite { field });
    }
    if !range.contains(&value) {
        return Err(InvalidInput::OutOfRange {
            field,
            value,
            min: *range.start(),
            max: *range.end(),
        });
    }
    Ok(value)
}

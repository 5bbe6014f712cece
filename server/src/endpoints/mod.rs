use std::collections::HashMap;

use actix_web::{App, Error, dev::{ServiceFactory, ServiceRequest}};
use street_lines::calculator::ORIENTATION;
use street_lines::geometry::{
    LATITUDE_BOTTOM_RIGHT, LATITUDE_TOP_LEFT, LONGITUDE_BOTTOM_RIGHT, LONGITUDE_TOP_LEFT,
};
use street_lines::{BoundingBox, InvalidInput, parse_coordinate};

pub mod rectangles;

pub fn services<T: ServiceFactory<ServiceRequest, Config = (), Error = Error, InitError = ()>>(
    app: App<T>,
) -> App<T> {
    rectangles::services(app)
}

/// Reads the bounding box corners from the query, falling back to
/// 0.0 / 1.0 / 2.0 / 3.0 for absent parameters.
pub fn get_bbox(query: &HashMap<String, String>) -> Result<BoundingBox, InvalidInput> {
    let get_coord = |key: &'static str, default: f64| match query.get(key) {
        Some(val) => parse_coordinate(key, val),
        None => Ok(default),
    };

    BoundingBox::new(
        get_coord(LATITUDE_TOP_LEFT, 0.0)?,
        get_coord(LONGITUDE_TOP_LEFT, 1.0)?,
        get_coord(LATITUDE_BOTTOM_RIGHT, 2.0)?,
        get_coord(LONGITUDE_BOTTOM_RIGHT, 3.0)?,
    )
}

pub fn get_orientation(query: &HashMap<String, String>) -> Result<Option<f64>, InvalidInput> {
    query
        .get(ORIENTATION)
        .map(|val| parse_coordinate(ORIENTATION, val))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use street_lines::GeoPoint;

    fn query(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn test_get_bbox_defaults() {
        let bbox = get_bbox(&query(&[])).unwrap();
        assert_eq!(bbox.top_left, GeoPoint::new(0.0, 1.0));
        assert_eq!(bbox.bottom_right, GeoPoint::new(2.0, 3.0));
    }

    #[test]
    fn test_get_bbox_partial() {
        let bbox = get_bbox(&query(&[
            ("latitude_top_left", "55.2575578"),
            ("longitude_bottom_right", "11.536422"),
        ]))
        .unwrap();
        assert_eq!(bbox.top_left, GeoPoint::new(55.2575578, 1.0));
        assert_eq!(bbox.bottom_right, GeoPoint::new(2.0, 11.536422));
    }

    #[test]
    fn test_get_bbox_non_numeric() {
        let bbox = get_bbox(&query(&[("longitude_top_left", "east")]));
        assert!(matches!(
            bbox.unwrap_err(),
            InvalidInput::NotNumeric {
                field: "longitude_top_left",
                ..
            }
        ));
    }

    #[test]
    fn test_get_orientation() {
        assert_eq!(get_orientation(&query(&[])).unwrap(), None);
        assert_eq!(
            get_orientation(&query(&[("orientation", "1.5")])).unwrap(),
            Some(1.5)
        );
        let north = get_orientation(&query(&[("orientation", "north")]));
        assert!(north.is_err());
    }
}

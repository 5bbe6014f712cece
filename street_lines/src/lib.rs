//! Places a simulated parking spot footprint inside a bounding box.
//!
//! A 2.5 m × 5 m rectangle is laid out in street-local meters, rotated to the
//! street orientation, scaled to degrees with the WGS84 radii of curvature at
//! the box center and finally moved onto that center.

pub mod calculator;
pub mod error;
pub mod geodesy;
pub mod geometry;
pub mod matrix;
pub mod rectangle;
pub mod transform;

pub use calculator::{
    calculate_parking_rectangles, calculate_parking_rectangles_json,
    calculate_parking_rectangles_with_rng, parking_rectangles, sample_orientation,
};
pub use error::{InvalidInput, ParkingError};
pub use geodesy::great_circle_distance;
pub use geometry::{BoundingBox, GeoPoint, parse_coordinate};
pub use matrix::Matrix2;
pub use rectangle::{RectangleRecord, rectangles_to_json};
pub use transform::{LocalFrame, transform_coordinates};

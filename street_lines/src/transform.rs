use geo_types::Coord;

use crate::geometry::GeoPoint;
use crate::matrix::Matrix2;

/// Width of a parking spot across the street, in meters.
pub const SPOT_WIDTH: f64 = 2.5;
/// Length of a parking spot along the street, in meters.
pub const SPOT_LENGTH: f64 = 5.0;
/// Distance from the street center to the near edge of the spot, in meters.
pub const STREET_OFFSET: f64 = 2.0;

/// Corners of a parking spot in street-local meters, `x` across the street and
/// `y` along it. The order is the a, b, c, d labelling of the output.
pub const VERTEX_TEMPLATE: [Coord<f64>; 4] = [
    Coord {
        x: -SPOT_WIDTH / 2.0,
        y: STREET_OFFSET,
    },
    Coord {
        x: -SPOT_WIDTH / 2.0,
        y: STREET_OFFSET + SPOT_LENGTH,
    },
    Coord {
        x: SPOT_WIDTH / 2.0,
        y: STREET_OFFSET + SPOT_LENGTH,
    },
    Coord {
        x: SPOT_WIDTH / 2.0,
        y: STREET_OFFSET,
    },
];

/// A street-local metric frame anchored at `center`.
///
/// Local points are rotated, then normalized to degrees, then translated onto
/// the center. Normalization scales the axes differently, so it does not
/// commute with the rotation and the order is fixed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LocalFrame {
    pub center: GeoPoint,
    pub rotation: Matrix2,
    pub normalization: Matrix2,
}

impl LocalFrame {
    pub fn new(center: GeoPoint, orientation: f64) -> Self {
        Self {
            center,
            rotation: Matrix2::rotation(orientation),
            normalization: Matrix2::normalization(center.latitude),
        }
    }

    pub fn to_geo(&self, point: Coord<f64>) -> GeoPoint {
        let offset = self.normalization.apply(self.rotation.apply(point));
        GeoPoint::new(
            offset.y + self.center.latitude,
            offset.x + self.center.longitude,
        )
    }

    /// Maps a geographic point back into local meters. `None` when either
    /// matrix cannot be inverted.
    pub fn to_local(&self, point: GeoPoint) -> Option<Coord<f64>> {
        let offset = Coord {
            x: point.longitude - self.center.longitude,
            y: point.latitude - self.center.latitude,
        };
        let rotated = self.normalization.inverse()?.apply(offset);
        Some(self.rotation.inverse()?.apply(rotated))
    }

    pub fn transform<const N: usize>(&self, points: [Coord<f64>; N]) -> [GeoPoint; N] {
        points.map(|point| self.to_geo(point))
    }
}

/// Places local meter `points` around `center`, keeping their order.
pub fn transform_coordinates<const N: usize>(
    points: [Coord<f64>; N],
    rotation: Matrix2,
    normalization: Matrix2,
    center: GeoPoint,
) -> [GeoPoint; N] {
    LocalFrame {
        center,
        rotation,
        normalization,
    }
    .transform(points)
}

use std::f64::consts::PI;

use geo_types::Coord;

use crate::geodesy::{meridian_radius_of_curvature, prime_vertical_radius_of_curvature};

/// A 2×2 matrix, indexed `m[row][column]`.
///
/// Points are treated as row vectors, so [`Matrix2::apply`] computes `p · M`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Matrix2(pub [[f64; 2]; 2]);

impl Matrix2 {
    pub const IDENTITY: Self = Self([[1.0, 0.0], [0.0, 1.0]]);

    pub fn diagonal(first: f64, second: f64) -> Self {
        Self([[first, 0.0], [0.0, second]])
    }

    /// `[[cos θ, -sin θ], [sin θ, cos θ]]` for an angle in radians.
    pub fn rotation(theta: f64) -> Self {
        let (sin, cos) = theta.sin_cos();
        Self([[cos, -sin], [sin, cos]])
    }

    /// Scales meter offsets to degree offsets around `reference_latitude`.
    ///
    /// The result is `diag(1 / g_lat, 1 / g_lon)` where `g_lat` is the length
    /// of one degree along the meridian and `g_lon` the length of one degree
    /// along the parallel. The first output component is a longitude offset
    /// and the second a latitude offset.
    pub fn normalization(reference_latitude: f64) -> Self {
        let degree = PI / 180.0;
        let g_lat = meridian_radius_of_curvature(reference_latitude) * degree;
        let g_lon = prime_vertical_radius_of_curvature(reference_latitude)
            * (reference_latitude * degree).cos()
            * degree;

        Self::diagonal(1.0 / g_lat, 1.0 / g_lon)
    }

    pub fn apply(&self, point: Coord<f64>) -> Coord<f64> {
        let m = &self.0;
        Coord {
            x: point.x * m[0][0] + point.y * m[1][0],
            y: point.x * m[0][1] + point.y * m[1][1],
        }
    }

    pub fn determinant(&self) -> f64 {
        let m = &self.0;
        m[0][0] * m[1][1] - m[0][1] * m[1][0]
    }

    /// `None` for singular or non-finite matrices.
    pub fn inverse(&self) -> Option<Self> {
        let det = self.determinant();
        if det == 0.0 || !det.is_finite() {
            return None;
        }
        let [[a, b], [c, d]] = self.0;
        Some(Self([[d / det, -b / det], [-c / det, a / det]]))
    }

    pub fn is_finite(&self) -> bool {
        self.0.iter().flatten().all(|x| x.is_finite())
    }
}

impl Default for Matrix2 {
    fn default() -> Self {
        Self::IDENTITY
    }
}

//! Radii of curvature of the WGS84 ellipsoid and a spherical distance helper.
//!
//! All latitudes and longitudes are in degrees, all lengths in meters.

/// Equatorial radius of the WGS84 ellipsoid.
pub const WGS84_SEMI_MAJOR_AXIS: f64 = 6_378_137.0;
/// Polar radius of the WGS84 ellipsoid.
pub const WGS84_SEMI_MINOR_AXIS: f64 = 6_356_752.314_245;
/// First eccentricity squared, `1 - b²/a²`.
pub const WGS84_ECCENTRICITY_SQUARED: f64 = 1.0
    - (WGS84_SEMI_MINOR_AXIS * WGS84_SEMI_MINOR_AXIS)
        / (WGS84_SEMI_MAJOR_AXIS * WGS84_SEMI_MAJOR_AXIS);

/// Mean earth radius used by [`great_circle_distance`].
pub const EARTH_RADIUS: f64 = 6_371_000.0;

fn curvature_denominator(latitude: f64) -> f64 {
    let sin_lat = latitude.to_radians().sin();
    1.0 - WGS84_ECCENTRICITY_SQUARED * sin_lat * sin_lat
}

/// North-south radius of curvature `M(φ) = a(1 - e²) / (1 - e² sin²φ)^(3/2)`.
pub fn meridian_radius_of_curvature(latitude: f64) -> f64 {
    WGS84_SEMI_MAJOR_AXIS * (1.0 - WGS84_ECCENTRICITY_SQUARED)
        / curvature_denominator(latitude).powf(1.5)
}

/// East-west radius of curvature `N(φ) = a / sqrt(1 - e² sin²φ)`.
pub fn prime_vertical_radius_of_curvature(latitude: f64) -> f64 {
    WGS84_SEMI_MAJOR_AXIS / curvature_denominator(latitude).sqrt()
}

/// Haversine distance between two points on a sphere of radius [`EARTH_RADIUS`].
pub fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let delta_phi = (lat2 - lat1).to_radians();
    let delta_lambda = (lon2 - lon1).to_radians();

    let a = (delta_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (delta_lambda / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS * c
}

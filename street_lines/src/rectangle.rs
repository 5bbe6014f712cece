use geo_types::{Coord, LineString, Polygon};
use serde::{Deserialize, Serialize};
use serde_json::ser::PrettyFormatter;

use crate::error::ParkingError;
use crate::geometry::GeoPoint;

/// One parking spot footprint. Vertices are labelled a, b, c, d in order and
/// serialize as flat `<label>_longitude` / `<label>_latitude` keys.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(into = "FlatRecord", from = "FlatRecord")]
pub struct RectangleRecord {
    pub id: u32,
    pub vertices: [GeoPoint; 4],
}

impl RectangleRecord {
    pub fn new(id: u32, vertices: [GeoPoint; 4]) -> Self {
        Self { id, vertices }
    }

    /// Closed polygon a → b → c → d → a in lon/lat order.
    pub fn to_polygon(&self) -> Polygon<f64> {
        let ring: Vec<Coord<f64>> = self.vertices.iter().copied().map(Coord::from).collect();
        Polygon::new(LineString::from(ring), vec![])
    }
}

#[derive(Serialize, Deserialize)]
struct FlatRecord {
    id: u32,
    a_longitude: f64,
    a_latitude: f64,
    b_longitude: f64,
    b_latitude: f64,
    c_longitude: f64,
    c_latitude: f64,
    d_longitude: f64,
    d_latitude: f64,
}

impl From<RectangleRecord> for FlatRecord {
    fn from(value: RectangleRecord) -> Self {
        let [a, b, c, d] = value.vertices;
        Self {
            id: value.id,
            a_longitude: a.longitude,
            a_latitude: a.latitude,
            b_longitude: b.longitude,
            b_latitude: b.latitude,
            c_longitude: c.longitude,
            c_latitude: c.latitude,
            d_longitude: d.longitude,
            d_latitude: d.latitude,
        }
    }
}

impl From<FlatRecord> for RectangleRecord {
    fn from(value: FlatRecord) -> Self {
        Self {
            id: value.id,
            vertices: [
                GeoPoint::new(value.a_latitude, value.a_longitude),
                GeoPoint::new(value.b_latitude, value.b_longitude),
                GeoPoint::new(value.c_latitude, value.c_longitude),
                GeoPoint::new(value.d_latitude, value.d_longitude),
            ],
        }
    }
}

/// Pretty JSON array of records, indented by four spaces.
pub fn rectangles_to_json(records: &[RectangleRecord]) -> Result<String, ParkingError> {
    let mut buf = Vec::new();
    let mut serializer =
        serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"    "));
    records.serialize(&mut serializer)?;
    Ok(String::from_utf8(buf)?)
}

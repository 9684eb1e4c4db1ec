/// Geographic coordinate in decimal degrees, longitude first.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoPoint {
    pub longitude: f64,
    pub latitude: f64,
}

impl GeoPoint {
    pub fn new(longitude: f64, latitude: f64) -> Self {
        Self {
            longitude,
            latitude,
        }
    }
}

/// Decode the delimited point encoding used by the overlay resource.
///
/// Point groups are separated by `,`, coordinates within a group by a single
/// space, longitude first. Overlay data is expected to contain sparse noise,
/// so any group that does not yield exactly two parseable numbers is dropped
/// without error. Empty or fully unparsable input yields an empty sequence.
pub fn parse_point_string(encoded: &str) -> Vec<GeoPoint> {
    let mut points = Vec::new();

    for group in encoded.split(',') {
        let coordinates: Vec<f64> = group
            .split_whitespace()
            .filter_map(|token| token.parse::<f64>().ok())
            .collect();

        if let [longitude, latitude] = coordinates[..] {
            points.push(GeoPoint::new(longitude, latitude));
        }
    }

    points
}

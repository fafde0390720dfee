use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

static WKT_POINT: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[a-zA-Z]+\(([-\d.]+)\s+([-\d.]+)\)").expect("WKT point pattern is valid")
});

/// Geographic point
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PointCoordinates {
    pub lat: f64,
    pub lon: f64,
}

/// Parse WKT point coordinates, written `POINT(longitude latitude)`.
///
/// Missing or malformed input yields `None`.
pub fn parse_point_coordinates(wkt: Option<&str>) -> Option<PointCoordinates> {
    let captures = WKT_POINT.captures(wkt?)?;
    let lon = captures.get(1)?.as_str().parse::<f64>().ok()?;
    let lat = captures.get(2)?.as_str().parse::<f64>().ok()?;
    Some(PointCoordinates { lat, lon })
}

use crate::coords::Geodetic;
use crate::sun::solar_subpoint;

/// Quarter arc of the mean-radius sphere in meters, round(6371 * pi * 500):
/// the ground distance from the subsolar point to the terminator.
pub const HALF_EARTH_CIRCUMFERENCE: f64 = 10_007_543.0;

/// Spherical radius used for ground distances, meters
const DISTANCE_RADIUS: f64 = 6_378_137.0;

/// Line-of-sight distance to the visible horizon from `altitude` meters,
/// in meters. Flat-earth approximation; 12.756 is twice the mean earth
/// radius in thousands of km.
pub fn horizon_distance(altitude: f64) -> f64 {
    (12.756 * altitude).sqrt() * 1000.0
}

/// Whether a satellite over `point` is inside the earth's shadow at `date`.
///
/// Compares the great-circle distance between the subsolar point and the
/// satellite ground point against the terminator arc pushed out by the
/// horizon distance for the satellite's altitude. Spherical-earth
/// approximation; atmospheric refraction and the penumbra are ignored.
pub fn is_eclipsed(point: &Geodetic, date: chrono::DateTime<chrono::Utc>) -> bool {
    let (sun_lat, sun_lon) = solar_subpoint(date);
    let distance = great_circle_distance(sun_lat, sun_lon, point.latitude, point.longitude);
    distance > HALF_EARTH_CIRCUMFERENCE + horizon_distance(point.altitude * 1000.0)
}

/// Haversine great-circle distance between two geographic points, meters.
fn great_circle_distance(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let (lat1, lon1) = (lat1.to_radians(), lon1.to_radians());
    let (lat2, lon2) = (lat2.to_radians(), lon2.to_radians());
    let sin_dlat = ((lat2 - lat1) / 2.0).sin();
    let sin_dlon = ((lon2 - lon1) / 2.0).sin();
    let h = sin_dlat * sin_dlat + lat1.cos() * lat2.cos() * sin_dlon * sin_dlon;
    2.0 * DISTANCE_RADIUS * h.sqrt().asin()
}

use crate::coords::{shadow, Geodetic};
use crate::sat::Satellite;

/// Number of samples per orbital period
const STEPS_PER_PERIOD: f64 = 180.0;

/// One sample of a ground track.
#[derive(Debug, Clone, Copy)]
pub struct TrackPoint {
    pub time: chrono::DateTime<chrono::Utc>,
    pub subpoint: Geodetic,
    /// True while the satellite is inside the earth's shadow
    pub eclipsed: bool,
}

/// Samples the satellite ground track starting at `start`.
///
/// `path_length` is measured in orbital periods; each period is sampled in
/// 180 steps. Returns an empty track for lengths below one step. Consumers
/// can split the returned points on the `eclipsed` flag to draw shadowed
/// segments.
pub fn ground_track(
    sat: &Satellite,
    start: chrono::DateTime<chrono::Utc>,
    path_length: f64,
) -> Vec<TrackPoint> {
    if path_length < 1.0 / STEPS_PER_PERIOD {
        return Vec::new();
    }

    let period = sat.predict(start).period;
    let step_ms = period * 1000.0 / STEPS_PER_PERIOD;
    let samples = (STEPS_PER_PERIOD * path_length) as i64 + 2;

    (0..samples)
        .map(|i| {
            let time = start + chrono::Duration::milliseconds((step_ms * i as f64) as i64);
            let prediction = sat.predict(time);
            TrackPoint {
                time,
                eclipsed: shadow::is_eclipsed(&prediction.subpoint, time),
                subpoint: prediction.subpoint,
            }
        })
        .collect()
}

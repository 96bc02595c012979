use crate::coords::{shadow, EarthCenteredInertial, EciVector, Geodetic};
use crate::sgp4::Orbit;
use crate::tle::{FormatError, Tle};

/// A tracked satellite: a decoded element set plus its initialized
/// propagator.
#[derive(Debug, Clone)]
pub struct Satellite {
    orbit: Orbit,
}

/// Everything known about a satellite at one instant. Recomputed in full
/// on every `predict` call.
#[derive(Debug, Clone, Copy)]
pub struct Prediction {
    /// Inertial position, km
    pub position: EarthCenteredInertial,
    /// Inertial velocity, km/s
    pub velocity: EciVector,
    /// Geodetic ground point and altitude
    pub subpoint: Geodetic,
    /// Scalar speed, km/s
    pub speed: f64,
    /// Orbital period, seconds
    pub period: f64,
}

impl Satellite {
    /// Builds a satellite from a single three-line element set.
    pub fn from_tle(text: &str) -> Result<Satellite, FormatError> {
        Ok(Satellite::new(Tle::parse(text)?))
    }

    pub fn new(tle: Tle) -> Satellite {
        Satellite {
            orbit: Orbit::new(tle),
        }
    }

    pub fn tle(&self) -> &Tle {
        self.orbit.tle()
    }

    pub fn orbit(&self) -> &Orbit {
        &self.orbit
    }

    /// Propagates to `date` and derives the ground point.
    pub fn predict(&self, date: chrono::DateTime<chrono::Utc>) -> Prediction {
        let state = self.orbit.propagate(date);
        let subpoint = Geodetic::from_eci(&state.position, date);
        Prediction {
            position: state.position,
            velocity: state.velocity,
            subpoint,
            speed: state.speed,
            period: state.period,
        }
    }

    /// Whether the satellite is inside the earth's shadow at `date`.
    pub fn is_eclipsed(&self, date: chrono::DateTime<chrono::Utc>) -> bool {
        let prediction = self.predict(date);
        shadow::is_eclipsed(&prediction.subpoint, date)
    }
}

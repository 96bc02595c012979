//! Satellite ground-track prediction from two-line element sets.
//!
//! Decodes NORAD TLE records, initializes the near-earth SGP4 analytic
//! model, and propagates to arbitrary timestamps, producing inertial
//! position/velocity, geodetic latitude/longitude/altitude, orbital period
//! and speed, plus a ground-track sampler and an earth-shadow test.
//!
//! ```
//! use chrono::TimeZone;
//! use groundtrack::Satellite;
//!
//! let sat = Satellite::from_tle(
//!     "ISS (ZARYA)
//! 1 25544U 98067A   20148.21301450  .00001715  00000-0  38778-4 0  9992
//! 2 25544  51.6435  92.2789 0002570 358.0648 144.9972 15.49396855228767",
//! )?;
//! let p = sat.predict(chrono::Utc.with_ymd_and_hms(2020, 5, 27, 12, 0, 0).unwrap());
//! println!(
//!     "lat {:.2} lon {:.2} alt {:.0} km, {:.2} km/s",
//!     p.subpoint.latitude, p.subpoint.longitude, p.subpoint.altitude, p.speed
//! );
//! # Ok::<(), groundtrack::FormatError>(())
//! ```
//!
//! Deep-space orbits (period above ~225 minutes) are outside the model;
//! TLE checksums are not verified. Kepler and geodetic iterations run to a
//! fixed cap and silently keep the last estimate, matching the reference
//! SGP4 formulation.

pub mod coords;
pub mod sat;
pub mod sgp4;
pub mod sun;
pub mod time;
pub mod tle;
pub mod track;

pub use coords::shadow::{horizon_distance, is_eclipsed};
pub use coords::{EarthCenteredInertial, EciVector, Geodetic};
pub use sat::{Prediction, Satellite};
pub use sgp4::{Orbit, State};
pub use tle::{decode, FormatError, Tle};
pub use track::{ground_track, TrackPoint};

pub mod eci;
pub mod geodetic;
pub mod shadow;

pub use eci::{EarthCenteredInertial, EciVector};
pub use geodetic::Geodetic;

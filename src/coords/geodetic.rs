use crate::coords::EarthCenteredInertial;
use crate::sgp4::vals::XKMPER;
use crate::time::sidereal_time;

/// WGS-84 semi-minor axis, km
const SEMI_MINOR: f64 = 6356.7523142;

/// A point referenced to the ellipsoidal earth model: latitude and
/// longitude in degrees, altitude above the ellipsoid in km.
#[derive(Debug, Clone, Copy)]
pub struct Geodetic {
    pub latitude: f64,
    pub longitude: f64,
    pub altitude: f64,
}

impl Geodetic {
    /// Converts an inertial position to geodetic coordinates, removing
    /// earth rotation via the sidereal angle at `date`.
    ///
    /// Latitude is refined with a fixed 20 iterations rather than a
    /// convergence check; the residual is far below the model's accuracy.
    pub fn from_eci(
        pos: &EarthCenteredInertial,
        date: chrono::DateTime<chrono::Utc>,
    ) -> Geodetic {
        // Adapted from https://celestrak.com/columns/v02n03/
        let a = XKMPER;
        let f = (a - SEMI_MINOR) / a;
        let e2 = 2.0 * f - f * f;

        let r = (pos.x * pos.x + pos.y * pos.y).sqrt();
        let longitude = pos.y.atan2(pos.x) - sidereal_time(date);
        let mut latitude = pos.z.atan2(r);
        let mut c = 1.0;
        for _ in 0..20 {
            let sinlat = latitude.sin();
            c = 1.0 / (1.0 - e2 * sinlat * sinlat).sqrt();
            latitude = (pos.z + a * c * e2 * sinlat).atan2(r);
        }
        let altitude = r / latitude.cos() - a * c;

        let mut longitude = longitude.to_degrees() % 360.0;
        if longitude > 180.0 {
            longitude -= 360.0;
        } else if longitude < -180.0 {
            longitude += 360.0;
        }

        Geodetic {
            latitude: latitude.to_degrees(),
            longitude,
            altitude,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_approx_eq::assert_approx_eq;
    use chrono::TimeZone;

    #[test]
    fn test_equatorial_point() {
        // A point on the x axis at gmst ~0 sits near the equator at the
        // prime meridian; pick a date and back the rotation out instead
        let date = chrono::Utc.with_ymd_and_hms(2020, 5, 27, 5, 6, 44).unwrap();
        let theta = sidereal_time(date);
        let r = XKMPER + 400.0;
        let pos = EarthCenteredInertial::new(r * theta.cos(), r * theta.sin(), 0.0);
        let geo = Geodetic::from_eci(&pos, date);
        assert_approx_eq!(geo.latitude, 0.0, 1.0E-6);
        assert_approx_eq!(geo.longitude, 0.0, 1.0E-6);
        assert_approx_eq!(geo.altitude, 400.0, 1.0E-6);
    }

    #[test]
    fn test_mid_latitude_refinement() {
        // Geocentric 60 deg at 7000 km radius; the ellipsoid refinement
        // pushes the geodetic latitude to ~60.151 deg at ~638 km altitude
        let date = chrono::Utc.with_ymd_and_hms(2020, 5, 27, 0, 0, 0).unwrap();
        let theta = sidereal_time(date);
        let (big_r, z) = (3500.0, 7000.0 * 60.0_f64.to_radians().sin());
        let pos = EarthCenteredInertial::new(big_r * theta.cos(), big_r * theta.sin(), z);
        let geo = Geodetic::from_eci(&pos, date);
        assert_approx_eq!(geo.latitude, 60.151, 0.01);
        assert_approx_eq!(geo.altitude, 637.9, 2.0);
        assert_approx_eq!(geo.longitude, 0.0, 1.0E-6);
    }

    #[test]
    fn test_output_ranges() {
        let date = chrono::Utc.with_ymd_and_hms(2021, 1, 2, 3, 4, 5).unwrap();
        for k in 0..36 {
            let angle = k as f64 * 10.0_f64.to_radians();
            let pos = EarthCenteredInertial::new(
                7000.0 * angle.cos(),
                7000.0 * angle.sin(),
                2000.0 * (angle * 3.0).sin(),
            );
            let geo = Geodetic::from_eci(&pos, date);
            assert!((-90.0..=90.0).contains(&geo.latitude));
            assert!((-180.0..=180.0).contains(&geo.longitude));
        }
    }
}

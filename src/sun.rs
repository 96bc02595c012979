use chrono::Timelike;

use crate::time::julian_day;

const RAD: f64 = 0.017453292519943295;

/// Calculates the geographic point where the sun is directly overhead at a
/// given instant, returned as (latitude, longitude) in degrees.
///
/// Low-precision closed-form evaluation following the NOAA solar
/// calculator. Minutes past midnight are taken from the UTC hour and
/// minute only, matching the reference.
pub fn solar_subpoint(date: chrono::DateTime<chrono::Utc>) -> (f64, f64) {
    let day_fraction = (date.hour() * 60 + date.minute()) as f64 / 1440.0;
    let jc = (julian_day(date) - 2_451_545.0) / 36_525.0;

    let mean_long_sun = (280.46646 + jc * (36_000.76983 + jc * 0.0003032)) % 360.0;
    let mean_anom_sun = 357.52911 + jc * (35_999.05029 - 0.0001537 * jc);
    let sun_eq_of_center = (RAD * mean_anom_sun).sin()
        * (1.914602 - jc * (0.004817 + 0.000014 * jc))
        + (RAD * 2.0 * mean_anom_sun).sin() * (0.019993 - 0.000101 * jc)
        + (RAD * 3.0 * mean_anom_sun).sin() * 0.000289;
    let sun_true_long = mean_long_sun + sun_eq_of_center;
    let omega = 125.04 - 1934.136 * jc;
    let sun_app_long = sun_true_long - 0.00569 - 0.00478 * (RAD * omega).sin();

    let mean_obliq_ecliptic =
        23.0 + (26.0 + (21.448 - jc * (46.815 + jc * (0.00059 - jc * 0.001813))) / 60.0) / 60.0;
    let obliq_corr = mean_obliq_ecliptic + 0.00256 * (RAD * omega).cos();

    let latitude = ((RAD * obliq_corr).sin() * (RAD * sun_app_long).sin()).asin() / RAD;

    let eccent = 0.016708634 - jc * (0.000042037 + 0.0000001267 * jc);
    let y = (RAD * (obliq_corr / 2.0)).tan() * (RAD * (obliq_corr / 2.0)).tan();
    let eq_of_time = 4.0
        * ((y * (2.0 * RAD * mean_long_sun).sin() - 2.0 * eccent * (RAD * mean_anom_sun).sin()
            + 4.0 * eccent * y * (RAD * mean_anom_sun).sin() * (2.0 * RAD * mean_long_sun).cos()
            - 0.5 * y * y * (4.0 * RAD * mean_long_sun).sin()
            - 1.25 * eccent * eccent * (2.0 * RAD * mean_anom_sun).sin())
            / RAD);

    let true_solar_time = (day_fraction * 1440.0 + eq_of_time) % 1440.0;
    let longitude = if true_solar_time / 4.0 < 0.0 {
        -(true_solar_time / 4.0 + 180.0)
    } else {
        -(true_solar_time / 4.0 - 180.0)
    };

    (latitude, longitude)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_declination_bounded_by_obliquity() {
        for month in 1..=12 {
            let date = chrono::Utc.with_ymd_and_hms(2024, month, 15, 6, 0, 0).unwrap();
            let (lat, lon) = solar_subpoint(date);
            assert!(lat.abs() < 23.5, "declination {} out of bounds", lat);
            assert!((-180.0..=180.0).contains(&lon));
        }
    }

    #[test]
    fn test_equinox_declination_near_zero() {
        let date = chrono::Utc.with_ymd_and_hms(2024, 3, 20, 3, 6, 0).unwrap();
        let (lat, _) = solar_subpoint(date);
        assert!(lat.abs() < 0.2, "equinox declination was {}", lat);
    }

    #[test]
    fn test_june_solstice_declination() {
        let date = chrono::Utc.with_ymd_and_hms(2024, 6, 20, 20, 51, 0).unwrap();
        let (lat, _) = solar_subpoint(date);
        assert!((lat - 23.43).abs() < 0.1, "solstice declination was {}", lat);
    }

    #[test]
    fn test_noon_sun_near_greenwich() {
        // At 12:00 UTC the sun is within the equation of time (~4 deg) of
        // the Greenwich meridian
        let date = chrono::Utc.with_ymd_and_hms(2024, 4, 15, 12, 0, 0).unwrap();
        let (_, lon) = solar_subpoint(date);
        assert!(lon.abs() < 5.0, "noon longitude was {}", lon);
    }
}

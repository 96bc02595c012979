use std::f64::consts::TAU;

/// Calculates the Julian day for a given point in time.
pub fn julian_day(date: chrono::DateTime<chrono::Utc>) -> f64 {
    date.timestamp_millis() as f64 / 86_400_000.0 + 2_440_587.5
}

/// Calculates the Greenwich Mean Sidereal Time in radians at a point in time.
///
/// Evaluates the GMST polynomial in Julian centuries of UT from J2000.0
/// (1992 Astronomical Almanac form) and reduces the result into [0, 2pi).
pub fn sidereal_time(date: chrono::DateTime<chrono::Utc>) -> f64 {
    let t = (julian_day(date) - 2_451_545.0) / 36_525.0;
    let gmst = 67_310.54841
        + (876_600.0 * 3600.0 + 8_640_184.812866) * t
        + 0.093104 * t * t
        - 6.2E-6 * t * t * t;
    // gmst is in seconds of time; 240 s of time per degree
    (gmst * (std::f64::consts::PI / 180.0) / 240.0).rem_euclid(TAU)
}

/// Calculates the Julian date of day 0.0 of `year` (midnight ending Dec 31
/// of the previous year). Combined with a day-of-year fraction this gives
/// the Julian date of any instant.
pub fn julian_date_of_year(year: i32) -> f64 {
    // Astronomical Formulae for Calculators, Jean Meeus, pages 23-25
    let year = year - 1;
    let a = year / 100;
    let b = 2 - a + (a / 4);
    (365.25 * year as f64).floor() + (30.6001f64 * 14.0).floor() + 1_720_994.5 + b as f64
}

use thiserror::Error;

use crate::time::{julian_date_of_year, julian_day};

/// Error raised when TLE text does not follow the fixed-column format.
#[derive(Debug, Error)]
pub enum FormatError {
    #[error("expected a positive multiple of 3 non-blank lines, got {0}")]
    LineCount(usize),
    #[error("line {line} must start with '{marker}'")]
    LineMarker { line: usize, marker: char },
    #[error("line {line} is shorter than the TLE column layout requires")]
    LineLength { line: usize },
    #[error("field {field} is not a valid number: {value:?}")]
    Field { field: &'static str, value: String },
}

/// A decoded NORAD two-line element set (three lines counting the name
/// header). Immutable once decoded; angles are kept in the degrees and
/// revolutions-per-day units of the wire format.
///
/// The per-line checksum column is present in the format but intentionally
/// not verified.
#[derive(Debug, Clone)]
pub struct Tle {
    /// Satellite name from the header line (first 24 columns, trimmed)
    pub name: String,
    /// NORAD catalog number
    pub satellite_number: u32,
    /// Classification (U = unclassified)
    pub classification: char,
    /// International designator: last two digits of launch year
    pub intl_designator_year: String,
    /// International designator: launch number of the year
    pub intl_designator_launch: String,
    /// International designator: piece of the launch
    pub intl_designator_piece: String,
    /// Epoch year, expanded to four digits
    pub epoch_year: i32,
    /// Epoch day of the year including fractional day
    pub epoch_day: f64,
    /// First time derivative of mean motion, divided by two
    pub first_derivative: f64,
    /// Second time derivative of mean motion, divided by six
    pub second_derivative: f64,
    /// BSTAR drag term
    pub bstar: f64,
    /// Ephemeris type
    pub ephemeris_type: u32,
    /// Element set number
    pub element_number: u32,
    /// Inclination in degrees
    pub inclination: f64,
    /// Right ascension of the ascending node in degrees
    pub right_ascension: f64,
    /// Eccentricity (the field carries an implied leading decimal point)
    pub eccentricity: f64,
    /// Argument of perigee in degrees
    pub argument_of_perigee: f64,
    /// Mean anomaly in degrees
    pub mean_anomaly: f64,
    /// Mean motion in revolutions per day
    pub mean_motion: f64,
    /// Revolution number at epoch
    pub revolution_number: u32,
}

/// Decodes a string holding one or more three-line element sets.
///
/// Blank lines are discarded before counting; the remaining line count must
/// be a positive multiple of 3.
pub fn decode(text: &str) -> Result<Vec<Tle>, FormatError> {
    let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
    if lines.is_empty() || lines.len() % 3 != 0 {
        return Err(FormatError::LineCount(lines.len()));
    }
    lines
        .chunks(3)
        .map(|group| Tle::from_lines(group[0], group[1], group[2]))
        .collect()
}

impl Tle {
    /// Parses a single three-line record.
    pub fn parse(text: &str) -> Result<Tle, FormatError> {
        let lines: Vec<&str> = text.lines().filter(|l| !l.trim().is_empty()).collect();
        if lines.len() != 3 {
            return Err(FormatError::LineCount(lines.len()));
        }
        Tle::from_lines(lines[0], lines[1], lines[2])
    }

    fn from_lines(name: &str, line1: &str, line2: &str) -> Result<Tle, FormatError> {
        if !line1.starts_with('1') {
            return Err(FormatError::LineMarker { line: 2, marker: '1' });
        }
        if !line2.starts_with('2') {
            return Err(FormatError::LineMarker { line: 3, marker: '2' });
        }

        let name = name.get(..24).unwrap_or(name).trim().to_string();

        let two_digit_year: i32 = parse_int("epoch year", field(2, line1, 18, 20)?)? as i32;
        // Conventional pivot: 57..99 are 19xx, 00..56 are 20xx
        let epoch_year = two_digit_year + if two_digit_year < 57 { 2000 } else { 1900 };

        Ok(Tle {
            name,
            satellite_number: parse_int("satellite number", field(2, line1, 2, 7)?)?,
            classification: field(2, line1, 7, 8)?.chars().next().unwrap_or(' '),
            intl_designator_year: field(2, line1, 9, 11)?.to_string(),
            intl_designator_launch: field(2, line1, 11, 14)?.to_string(),
            intl_designator_piece: field(2, line1, 14, 17)?.trim().to_string(),
            epoch_year,
            epoch_day: parse_float("epoch day", field(2, line1, 20, 32)?)?,
            first_derivative: parse_float("first derivative", field(2, line1, 33, 43)?)?,
            second_derivative: parse_packed("second derivative", field(2, line1, 44, 52)?)?,
            bstar: parse_packed("bstar", field(2, line1, 53, 61)?)?,
            ephemeris_type: parse_int("ephemeris type", field(2, line1, 62, 63)?)?,
            element_number: parse_int("element number", field(2, line1, 64, 68)?)?,
            inclination: parse_float("inclination", field(3, line2, 8, 16)?)?,
            right_ascension: parse_float("right ascension", field(3, line2, 17, 25)?)?,
            eccentricity: parse_implied_point("eccentricity", field(3, line2, 26, 33)?)?,
            argument_of_perigee: parse_float("argument of perigee", field(3, line2, 34, 42)?)?,
            mean_anomaly: parse_float("mean anomaly", field(3, line2, 43, 51)?)?,
            mean_motion: parse_float("mean motion", field(3, line2, 52, 63)?)?,
            revolution_number: parse_int("revolution number", field(3, line2, 63, 68)?)?,
        })
    }

    /// The combined international designator, e.g. "98067A".
    pub fn international_designator(&self) -> String {
        format!(
            "{}{}{}",
            self.intl_designator_year, self.intl_designator_launch, self.intl_designator_piece
        )
    }

    /// Julian day of the element set epoch.
    pub fn epoch_jd(&self) -> f64 {
        julian_date_of_year(self.epoch_year) + self.epoch_day
    }

    /// The element set epoch as a timestamp (millisecond precision).
    pub fn epoch(&self) -> chrono::DateTime<chrono::Utc> {
        let millis = ((self.epoch_jd() - 2_440_587.5) * 86_400_000.0).round() as i64;
        chrono::DateTime::from_timestamp_millis(millis).unwrap_or_default()
    }

    /// Minutes between `date` and the element set epoch. Negative for
    /// instants before the epoch.
    pub fn time_since_epoch(&self, date: chrono::DateTime<chrono::Utc>) -> f64 {
        (julian_day(date) - self.epoch_jd()) * 1440.0
    }
}

fn field<'a>(line: usize, text: &'a str, start: usize, end: usize) -> Result<&'a str, FormatError> {
    text.get(start..end).ok_or(FormatError::LineLength { line })
}

fn parse_float(name: &'static str, raw: &str) -> Result<f64, FormatError> {
    raw.trim().parse().map_err(|_| FormatError::Field {
        field: name,
        value: raw.to_string(),
    })
}

fn parse_int(name: &'static str, raw: &str) -> Result<u32, FormatError> {
    raw.trim().parse().map_err(|_| FormatError::Field {
        field: name,
        value: raw.to_string(),
    })
}

/// Parses a field with an implied leading decimal point ("0006703" -> 0.0006703).
fn parse_implied_point(name: &'static str, raw: &str) -> Result<f64, FormatError> {
    format!(".{}", raw.trim())
        .parse()
        .map_err(|_| FormatError::Field {
            field: name,
            value: raw.to_string(),
        })
}

/// Parses the packed signed-exponent notation used by the second-derivative
/// and BSTAR fields: "12345-3" is 0.12345e-3, "-12345-3" is -0.12345e-3.
/// Splitting on '+'/'-' yields three parts when a leading sign is present;
/// the exponent is always applied as a negative power of ten.
fn parse_packed(name: &'static str, raw: &str) -> Result<f64, FormatError> {
    let err = || FormatError::Field {
        field: name,
        value: raw.to_string(),
    };
    let parts: Vec<&str> = raw.split(['+', '-']).collect();
    let (sign, mantissa, exponent) = match parts.len() {
        2 => (1.0, parts[0], parts[1]),
        3 => (-1.0, parts[1], parts[2]),
        _ => return Err(err()),
    };
    let mantissa: f64 = format!(".{}", mantissa.trim()).parse().map_err(|_| err())?;
    let exponent: i32 = exponent.trim().parse().map_err(|_| err())?;
    Ok(sign * mantissa * 10f64.powi(-exponent))
}

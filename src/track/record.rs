//! A single synoptic observation from a best-track file.
//!
//! Lines are whitespace delimited with nine positional fields:
//!
//! ```text
//! Id       Name   Date   Time Lat   Lon    Basin Wind Pres
//! AL102024 MILTON 241009 1800 25.1N 085.3W AL    85   965
//! ```

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::TrackError;

/// Number of positional fields on a track line.
pub const FIELD_COUNT: usize = 9;

#[derive(Debug, Clone, PartialEq)]
pub struct TrackRecord {
    pub storm_id: String,
    pub name: String,
    pub observed_at: NaiveDateTime,
    pub latitude: f32,
    pub longitude: f32,
    /// Sustained wind in knots.
    pub intensity: u16,
    /// Central pressure in millibars.
    pub pressure: Option<u16>,
}

impl TrackRecord {
    /// Parses one line of a track file. `line_no` is 1-based and only used in errors.
    pub fn from_line(line: &str, line_no: usize) -> Result<Self, TrackError> {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < FIELD_COUNT {
            return Err(TrackError::malformed(
                line_no,
                format!("expected {} fields, found {}", FIELD_COUNT, fields.len()),
            ));
        }

        let storm_id = fields[0].to_string();
        let name = fields[1].to_string();
        let observed_at = parse_synoptic_time(fields[2], fields[3]).ok_or_else(|| {
            TrackError::malformed(
                line_no,
                format!("bad synoptic time `{} {}`", fields[2], fields[3]),
            )
        })?;
        let latitude = parse_coordinate(fields[4], Axis::Latitude)?;
        let longitude = parse_coordinate(fields[5], Axis::Longitude)?;
        // fields[6] is the basin, which the storm id already carries
        let intensity = fields[7].parse::<u16>().map_err(|_| {
            TrackError::malformed(line_no, format!("bad intensity `{}`", fields[7]))
        })?;
        let pressure = parse_pressure(fields[8]);

        Ok(TrackRecord {
            storm_id,
            name,
            observed_at,
            latitude,
            longitude,
            intensity,
            pressure,
        })
    }

    pub fn position(&self) -> (f32, f32) {
        (self.latitude, self.longitude)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    fn limit(self) -> f32 {
        match self {
            Axis::Latitude => 90.0,
            Axis::Longitude => 180.0,
        }
    }
}

/// Combines a `YYMMDD` date and a packed `HHMM` time.
///
/// Two digit years are read as `20YY`, which holds for the lifetime of the feed.
fn parse_synoptic_time(date: &str, time: &str) -> Option<NaiveDateTime> {
    if date.len() != 6 || !date.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    let year = 2000 + date[0..2].parse::<i32>().ok()?;
    let month = date[2..4].parse::<u32>().ok()?;
    let day = date[4..6].parse::<u32>().ok()?;
    let date = NaiveDate::from_ymd_opt(year, month, day)?;

    let packed = time.parse::<u32>().ok()?;
    let time = NaiveTime::from_hms_opt(packed / 100, packed % 100, 0)?;

    Some(date.and_time(time))
}

/// Converts `25.1N` / `085.3W` style values to signed degrees.
fn parse_coordinate(raw: &str, axis: Axis) -> Result<f32, TrackError> {
    let invalid = || TrackError::InvalidCoordinate {
        value: raw.to_string(),
    };

    let mut chars = raw.chars();
    let hemisphere = chars.next_back().ok_or_else(invalid)?;
    let digits = chars.as_str();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit() || b == b'.') {
        return Err(invalid());
    }
    let magnitude = digits.parse::<f32>().map_err(|_| invalid())?;
    if magnitude > axis.limit() {
        return Err(invalid());
    }

    match (axis, hemisphere.to_ascii_uppercase()) {
        (Axis::Latitude, 'N') | (Axis::Longitude, 'E') => Ok(magnitude),
        (Axis::Latitude, 'S') | (Axis::Longitude, 'W') => Ok(-magnitude),
        _ => Err(invalid()),
    }
}

// Unknown pressure shows up as placeholders, so anything unreadable is missing.
fn parse_pressure(s: &str) -> Option<u16> {
    s.parse::<i32>()
        .ok()
        .filter(|&p| p > 0)
        .and_then(|p| u16::try_from(p).ok())
}

// -- Tests -------------------------------------------------------------------

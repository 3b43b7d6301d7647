//! Derived statistics over a chronologically ordered track.

use chrono::NaiveDateTime;

use super::{TrackError, TrackRecord};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min_lat: f32,
    pub max_lat: f32,
    pub min_lon: f32,
    pub max_lon: f32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrackSummary {
    pub storm_id: String,
    pub name: String,
    pub peak_intensity: u16,
    pub peak_time: NaiveDateTime,
    pub peak_pressure: Option<u16>,
    pub bounds: Bounds,
    pub formation_time: NaiveDateTime,
    pub latest_time: NaiveDateTime,
    pub latest_intensity: u16,
    pub latest_pressure: Option<u16>,
    pub latest_position: (f32, f32),
}

/// Summarises records already ordered oldest first.
///
/// The peak is the first record holding the maximum intensity.
pub fn summarize(records: &[TrackRecord]) -> Result<TrackSummary, TrackError> {
    let first = records.first().ok_or(TrackError::EmptySeries)?;

    let mut peak = first;
    let mut bounds = Bounds::at(first.latitude, first.longitude);
    let mut latest = first;

    for record in records {
        if record.intensity > peak.intensity {
            peak = record;
        }
        bounds.extend(record.latitude, record.longitude);
        latest = record;
    }

    Ok(TrackSummary {
        storm_id: first.storm_id.clone(),
        name: first.name.clone(),
        peak_intensity: peak.intensity,
        peak_time: peak.observed_at,
        peak_pressure: peak.pressure,
        bounds,
        formation_time: first.observed_at,
        latest_time: latest.observed_at,
        latest_intensity: latest.intensity,
        latest_pressure: latest.pressure,
        latest_position: latest.position(),
    })
}

/// How much map to show around a track.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Framing {
    /// Fixed margins in degrees added to each side of the bounds.
    Margins {
        west: f32,
        east: f32,
        south: f32,
        north: f32,
    },
    /// Scale the bounds about their centre.
    Zoom(f32),
}

impl Default for Framing {
    fn default() -> Self {
        Framing::Margins {
            west: 7.0,
            east: 5.0,
            south: 3.0,
            north: 4.0,
        }
    }
}

/// Map window in degrees, clamped to the globe.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Extent {
    pub west: f32,
    pub east: f32,
    pub south: f32,
    pub north: f32,
}

impl Bounds {
    fn at(lat: f32, lon: f32) -> Self {
        Bounds {
            min_lat: lat,
            max_lat: lat,
            min_lon: lon,
            max_lon: lon,
        }
    }

    fn extend(&mut self, lat: f32, lon: f32) {
        self.min_lat = self.min_lat.min(lat);
        self.max_lat = self.max_lat.max(lat);
        self.min_lon = self.min_lon.min(lon);
        self.max_lon = self.max_lon.max(lon);
    }

    pub fn center(&self) -> (f32, f32) {
        (
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        )
    }

    pub fn framed(&self, framing: Framing) -> Extent {
        let (west, east, south, north) = match framing {
            Framing::Margins {
                west,
                east,
                south,
                north,
            } => (
                self.min_lon - west,
                self.max_lon + east,
                self.min_lat - south,
                self.max_lat + north,
            ),
            Framing::Zoom(factor) => {
                let (lat_center, lon_center) = self.center();
                let half_lat = (self.max_lat - self.min_lat) * factor / 2.0;
                let half_lon = (self.max_lon - self.min_lon) * factor / 2.0;
                (
                    lon_center - half_lon,
                    lon_center + half_lon,
                    lat_center - half_lat,
                    lat_center + half_lat,
                )
            }
        };

        Extent {
            west: west.max(-180.0),
            east: east.min(180.0),
            south: south.max(-90.0),
            north: north.min(90.0),
        }
    }
}

// -- Tests -------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn record(hour: u32, lat: f32, lon: f32, intensity: u16, pressure: Option<u16>) -> TrackRecord {
        TrackRecord {
            storm_id: "AL102024".to_string(),
            name: "MILTON".to_string(),
            observed_at: NaiveDate::from_ymd_opt(2024, 10, 9)
                .unwrap()
                .and_hms_opt(hour, 0, 0)
                .unwrap(),
            latitude: lat,
            longitude: lon,
            intensity,
            pressure,
        }
    }

    #[test]
    fn should_fail_on_empty_series() {
        assert_eq!(summarize(&[]), Err(TrackError::EmptySeries));
    }

    #[test]
    fn should_summarise_single_record() {
        let r = record(18, 25.1, -85.3, 85, Some(965));
        let s = summarize(std::slice::from_ref(&r)).unwrap();

        assert_eq!(s.peak_intensity, 85);
        assert_eq!(s.peak_pressure, Some(965));
        assert_eq!(s.peak_time, r.observed_at);
        assert_eq!(s.formation_time, r.observed_at);
        assert_eq!(s.latest_time, r.observed_at);
        assert_eq!(s.latest_position, (25.1, -85.3));
        assert_eq!(
            s.bounds,
            Bounds {
                min_lat: 25.1,
                max_lat: 25.1,
                min_lon: -85.3,
                max_lon: -85.3
            }
        );
    }

    #[test]
    fn should_take_first_peak_on_ties() {
        let records = vec![
            record(0, 20.0, -90.0, 40, Some(990)),
            record(6, 21.0, -89.0, 120, Some(930)),
            record(12, 22.0, -88.0, 120, Some(925)),
            record(18, 23.5, -86.0, 100, None),
        ];
        let s = summarize(&records).unwrap();

        assert_eq!(s.peak_intensity, 120);
        assert_eq!(s.peak_time, records[1].observed_at);
        assert_eq!(s.peak_pressure, Some(930));
        assert_eq!(s.formation_time, records[0].observed_at);
        assert_eq!(s.latest_time, records[3].observed_at);
        assert_eq!(s.latest_intensity, 100);
        assert_eq!(s.latest_pressure, None);
        assert_eq!(s.bounds.min_lat, 20.0);
        assert_eq!(s.bounds.max_lat, 23.5);
        assert_eq!(s.bounds.min_lon, -90.0);
        assert_eq!(s.bounds.max_lon, -86.0);
    }

    #[test]
    fn should_frame_with_margins() {
        let bounds = Bounds {
            min_lat: 20.0,
            max_lat: 30.0,
            min_lon: -90.0,
            max_lon: -80.0,
        };
        let e = bounds.framed(Framing::default());

        assert_eq!(
            e,
            Extent {
                west: -97.0,
                east: -75.0,
                south: 17.0,
                north: 34.0
            }
        );
    }

    #[test]
    fn should_frame_with_zoom() {
        let bounds = Bounds {
            min_lat: 20.0,
            max_lat: 30.0,
            min_lon: -90.0,
            max_lon: -80.0,
        };
        let e = bounds.framed(Framing::Zoom(1.5));

        assert_eq!(
            e,
            Extent {
                west: -92.5,
                east: -77.5,
                south: 17.5,
                north: 32.5
            }
        );
    }

    #[test]
    fn should_clamp_frame_to_globe() {
        let bounds = Bounds {
            min_lat: -88.0,
            max_lat: 88.0,
            min_lon: 178.0,
            max_lon: 179.0,
        };
        let e = bounds.framed(Framing::default());

        assert_eq!(e.south, -90.0);
        assert_eq!(e.north, 90.0);
        assert_eq!(e.east, 180.0);
        assert_eq!(e.west, 171.0);
    }
}

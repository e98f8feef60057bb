//! Profile index rows.

use chrono::NaiveDateTime;
use geo::geometry::Point;
use serde::{Deserialize, Deserializer, Serialize};

/// One profile row from a GDAC index file.
///
/// Both backends produce this shape regardless of which index flavor
/// they read.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProfileRecord {
    /// Data file path relative to the GDAC `dac` directory.
    pub file: String,

    /// Profile timestamp (UTC).
    pub date: NaiveDateTime,

    pub latitude: f64,

    pub longitude: f64,

    pub ocean: Option<String>,

    pub profiler_type: Option<String>,

    pub institution: Option<String>,

    /// Space-separated parameter list; synthetic index only.
    pub parameters: Option<String>,

    /// Last index update for this row (UTC).
    pub date_update: Option<NaiveDateTime>,
}

impl ProfileRecord {
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }

    /// Whether the row's parameter list carries `name`.
    pub fn has_parameter(&self, name: &str) -> bool {
        self.parameters
            .as_deref()
            .is_some_and(|list| list.split_whitespace().any(|p| p == name))
    }
}

/// A [`ProfileRecord`] annotated with its relation to a line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnnotatedProfile {
    #[serde(flatten)]
    pub record: ProfileRecord,

    /// Minimum geodesic distance to any line station (km).
    pub distance_from_line: f64,

    /// Label of the station at that minimum.
    pub nearest_station: String,

    /// Geodesic distance from the line's first station to the nearest
    /// station (km). Straight-line from the origin, not cumulative
    /// track length.
    pub distance_along_line: f64,
}

/// An index row as it appears on disk.
///
/// Rows may lack coordinates or a date; those can never match a
/// spatial/date query and are dropped on load.
#[derive(Debug, Deserialize)]
pub(crate) struct RawRecord {
    file: String,

    #[serde(default, deserialize_with = "compact_date")]
    date: Option<NaiveDateTime>,

    latitude: Option<f64>,

    longitude: Option<f64>,

    #[serde(default)]
    ocean: Option<String>,

    #[serde(default)]
    profiler_type: Option<String>,

    #[serde(default)]
    institution: Option<String>,

    #[serde(default)]
    parameters: Option<String>,

    #[serde(default, deserialize_with = "compact_date")]
    date_update: Option<NaiveDateTime>,
}

impl RawRecord {
    pub(crate) fn into_record(self) -> Option<ProfileRecord> {
        let (date, latitude, longitude) = match (self.date, self.latitude, self.longitude) {
            (Some(date), Some(latitude), Some(longitude)) => (date, latitude, longitude),
            _ => return None,
        };
        Some(ProfileRecord {
            file: self.file,
            date,
            latitude,
            longitude,
            ocean: self.ocean,
            profiler_type: self.profiler_type,
            institution: self.institution,
            parameters: self.parameters,
            date_update: self.date_update,
        })
    }
}

/// `YYYYMMDDHHMMSS` index timestamps; empty fields are missing data.
fn compact_date<'de, D>(deserializer: D) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw: Option<String> = Option::deserialize(deserializer)?;
    match raw.as_deref() {
        None | Some("") => Ok(None),
        Some(s) => NaiveDateTime::parse_from_str(s, "%Y%m%d%H%M%S")
            .map(Some)
            .map_err(serde::de::Error::custom),
    }
}

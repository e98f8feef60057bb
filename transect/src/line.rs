use crate::{resources::Resources, TransectError};
use geo::geometry::{Coord, Point};
use log::debug;
use serde::Deserialize;
use std::path::Path;

/// A single reference station on a transect line.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Station {
    /// Station label. Sources without names use a positional index
    /// rendered as text.
    pub station: String,

    /// Degrees, -90..90.
    pub latitude: f64,

    /// Degrees, -180..180.
    pub longitude: f64,
}

impl Station {
    pub fn point(&self) -> Point<f64> {
        Point::new(self.longitude, self.latitude)
    }
}

/// An ordered, non-empty sequence of reference stations.
///
/// Station order is meaningful: the first station is the origin for
/// along-line distances.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    name: String,
    stations: Vec<Station>,
}

impl Line {
    /// Builds a line from stations, preserving their order.
    pub fn from_stations(
        name: impl Into<String>,
        stations: Vec<Station>,
    ) -> Result<Self, TransectError> {
        let name = name.into();
        if stations.is_empty() {
            return Err(TransectError::EmptyLine(name));
        }
        Ok(Self { name, stations })
    }

    /// Parses a line definition file with `station`, `latitude`, and
    /// `longitude` columns, preserving row order.
    pub fn from_csv_path(name: impl Into<String>, path: &Path) -> Result<Self, TransectError> {
        let mut reader = csv::Reader::from_path(path)?;
        let mut stations = Vec::new();
        for row in reader.deserialize() {
            stations.push(row?);
        }
        Self::from_stations(name, stations)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn len(&self) -> usize {
        self.stations.len()
    }

    pub fn is_empty(&self) -> bool {
        // Constructors reject empty station sequences.
        false
    }

    /// The along-line origin.
    pub fn origin(&self) -> &Station {
        &self.stations[0]
    }

    /// Min/max latitude and longitude over all stations.
    ///
    /// This is the line's literal extent; the search radius is not
    /// applied here, so a profile within radius of a boundary station
    /// can still fall outside the box.
    pub fn bounding_box(&self) -> BoundingBox {
        let origin = self.origin().point();
        let mut bbox = BoundingBox {
            min: origin.0,
            max: origin.0,
        };
        for station in &self.stations {
            bbox.min.x = bbox.min.x.min(station.longitude);
            bbox.min.y = bbox.min.y.min(station.latitude);
            bbox.max.x = bbox.max.x.max(station.longitude);
            bbox.max.y = bbox.max.y.max(station.latitude);
        }
        bbox
    }
}

/// Line input forms accepted by [`LineSpec::load`].
#[derive(Debug, Clone, PartialEq)]
pub enum LineSpec {
    /// A named line bundled with the crate or provided via a config
    /// directory.
    Named(String),

    /// Raw latitude/longitude pairs. Recognized but not yet
    /// implemented.
    Points(Vec<(f64, f64)>),
}

impl LineSpec {
    /// Loads the referenced line definition.
    ///
    /// Names are lower-cased and resolved to `<name>.csv` through
    /// `resources`.
    pub fn load(&self, resources: &Resources) -> Result<Line, TransectError> {
        match self {
            Self::Named(name) => {
                let name = name.to_lowercase();
                let path = resources.resolve(&format!("{name}.csv"))?;
                debug!("loading line definition {path:?}");
                Line::from_csv_path(name, &path)
            }
            Self::Points(_) => Err(TransectError::UnsupportedInput),
        }
    }
}

impl From<&str> for LineSpec {
    fn from(name: &str) -> Self {
        Self::Named(name.to_string())
    }
}

impl From<String> for LineSpec {
    fn from(name: String) -> Self {
        Self::Named(name)
    }
}

/// Min/max latitude and longitude enclosing a line's stations.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Coord<f64>,
    pub max: Coord<f64>,
}

impl BoundingBox {
    /// Inclusive on all edges.
    pub fn contains(&self, point: Point<f64>) -> bool {
        let (x, y) = (point.x(), point.y());
        self.min.x <= x && x <= self.max.x && self.min.y <= y && y <= self.max.y
    }
}

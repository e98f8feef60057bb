//! Transect line definitions and geodesic distance measurement.
//!
//! A *line* is an ordered sequence of named reference stations
//! (e.g. the WOCE/GO-SHIP repeat hydrography sections). Station order
//! is meaningful: the first station is the origin for along-line
//! distances. Bundled definitions live in this crate's `resources/`
//! directory and can be shadowed by a user config directory.

mod distance;
mod error;
mod line;
mod resources;

pub use crate::{
    distance::{geodesic_km, measure_distances, Nearest},
    error::TransectError,
    line::{BoundingBox, Line, LineSpec, Station},
    resources::Resources,
};

//! Whole-index loading with chained subsetting.

use crate::{record::RawRecord, DateWindow, IndexError, ProfileRecord};
use log::debug;
use std::{io::Read, path::Path};
use transect::BoundingBox;

/// Index flavors available from a GDAC mirror.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IndexKind {
    /// Core profile index.
    Core,

    /// Synthetic (BGC) profile index.
    Synthetic,
}

impl IndexKind {
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Core => "ar_index_global_prof.txt",
            Self::Synthetic => "argo_synthetic-profile_index.txt",
        }
    }
}

/// A GDAC profile index held in memory, narrowed by chained subset
/// calls.
#[derive(Debug, Clone)]
pub struct ProfIndex {
    rows: Vec<ProfileRecord>,
}

impl ProfIndex {
    /// Reads the whole index of the given kind from `mirror`.
    pub fn load(mirror: &Path, kind: IndexKind) -> Result<Self, IndexError> {
        let path = mirror.join(kind.file_name());
        if !path.exists() {
            return Err(IndexError::Path(path));
        }
        let rows = read_index(std::fs::File::open(&path)?)?;
        debug!("loaded {} rows from {path:?}", rows.len());
        Ok(Self { rows })
    }

    /// Keeps rows whose parameter list carries `parameter`.
    #[must_use]
    pub fn subset_parameter(self, parameter: &str) -> Self {
        self.retain(|row| row.has_parameter(parameter))
    }

    /// Keeps rows whose profile date falls in `window`.
    #[must_use]
    pub fn subset_date(self, window: &DateWindow) -> Self {
        self.retain(|row| window.contains(row.date))
    }

    /// Keeps rows inside `bbox` (inclusive edges).
    #[must_use]
    pub fn subset_rect(self, bbox: &BoundingBox) -> Self {
        self.retain(|row| bbox.contains(row.point()))
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn into_rows(self) -> Vec<ProfileRecord> {
        self.rows
    }

    fn retain(self, keep: impl Fn(&ProfileRecord) -> bool) -> Self {
        Self {
            rows: self.rows.into_iter().filter(|row| keep(row)).collect(),
        }
    }
}

/// Parses a GDAC index: `#`-prefixed header comments, a CSV header
/// row, then data rows. Rows without coordinates or a date are
/// dropped.
pub(crate) fn read_index<R: Read>(reader: R) -> Result<Vec<ProfileRecord>, IndexError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .comment(Some(b'#'))
        .from_reader(reader);
    let mut rows = Vec::new();
    for raw in csv_reader.deserialize::<RawRecord>() {
        if let Some(record) = raw?.into_record() {
            rows.push(record);
        }
    }
    Ok(rows)
}

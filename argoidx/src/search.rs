//! Single-pass index search.

use crate::{index::IndexKind, record::RawRecord, DateWindow, IndexError, ProfileRecord};
use log::debug;
use std::path::{Path, PathBuf};
use transect::BoundingBox;

/// Search modes for the streaming backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchMode {
    /// Default core profile index.
    Core,

    /// BGC-aware synthetic profile index.
    BgcSynthetic,
}

impl SearchMode {
    fn kind(self) -> IndexKind {
        match self {
            Self::Core => IndexKind::Core,
            Self::BgcSynthetic => IndexKind::Synthetic,
        }
    }
}

/// Streaming searcher over a GDAC index file.
///
/// Unlike [`ProfIndex`](crate::ProfIndex), nothing is held in memory
/// up front; rows are matched as they are read and only matches are
/// materialized.
#[derive(Debug, Clone)]
pub struct SearchIndex {
    path: PathBuf,
    parameter: Option<String>,
}

impl SearchIndex {
    /// Opens the index of the given mode under `mirror`.
    ///
    /// Fails when the index file is absent, so a bad mirror path
    /// surfaces before any query work.
    pub fn open(mirror: &Path, mode: SearchMode) -> Result<Self, IndexError> {
        let path = mirror.join(mode.kind().file_name());
        if !path.exists() {
            return Err(IndexError::Path(path));
        }
        Ok(Self {
            path,
            parameter: None,
        })
    }

    /// Restricts matches to rows carrying `parameter`.
    #[must_use]
    pub fn search_params(mut self, parameter: &str) -> Self {
        self.parameter = Some(parameter.to_string());
        self
    }

    /// Runs one pass over the index, materializing the rows inside
    /// `bbox` and `window`.
    pub fn search(
        &self,
        bbox: &BoundingBox,
        window: &DateWindow,
    ) -> Result<Vec<ProfileRecord>, IndexError> {
        let file = std::fs::File::open(&self.path)?;
        let mut csv_reader = csv::ReaderBuilder::new()
            .comment(Some(b'#'))
            .from_reader(file);

        let mut rows = Vec::new();
        for raw in csv_reader.deserialize::<RawRecord>() {
            let Some(record) = raw?.into_record() else {
                continue;
            };
            if !window.contains(record.date) || !bbox.contains(record.point()) {
                continue;
            }
            if let Some(parameter) = &self.parameter {
                if !record.has_parameter(parameter) {
                    continue;
                }
            }
            rows.push(record);
        }
        debug!("search matched {} rows in {:?}", rows.len(), self.path);
        Ok(rows)
    }
}

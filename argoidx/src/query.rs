//! Line-proximity profile queries.

use crate::{
    AnnotatedProfile, DateWindow, IndexError, IndexKind, ProfIndex, SearchIndex, SearchMode,
    Variable,
};
use log::debug;
use std::path::Path;
use transect::{LineSpec, Resources};

/// Data-access strategy used to gather candidate rows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Backend {
    /// Load the whole index, then narrow with chained subsets.
    #[default]
    Index,

    /// Stream the index once, matching rows as they are read.
    Search,
}

/// Finds all profiles within a radius of a line in a date window.
///
/// Candidates are pre-filtered by the line's bounding rectangle so
/// the per-station geodesic scan only runs on rows that are already
/// in the line's neighborhood.
#[derive(Debug, Clone)]
pub struct ProfilesQuery {
    line: LineSpec,
    radius_km: f64,
    window: DateWindow,
    variable: Variable,
    backend: Backend,
}

impl ProfilesQuery {
    pub fn builder() -> ProfilesQueryBuilder {
        ProfilesQueryBuilder::default()
    }

    /// Runs the query against line `resources` and a GDAC `mirror`.
    ///
    /// An empty result is a valid outcome. Backend errors propagate
    /// unmodified.
    pub fn run(
        &self,
        resources: &Resources,
        mirror: &Path,
    ) -> Result<Vec<AnnotatedProfile>, IndexError> {
        let line = self.line.load(resources)?;
        let bbox = line.bounding_box();

        let now = std::time::Instant::now();
        let candidates = match (self.backend, &self.variable) {
            (Backend::Index, Variable::Core) => ProfIndex::load(mirror, IndexKind::Core)?
                .subset_date(&self.window)
                .subset_rect(&bbox)
                .into_rows(),
            (Backend::Index, Variable::Bgc(parameter)) => {
                ProfIndex::load(mirror, IndexKind::Synthetic)?
                    .subset_parameter(parameter)
                    .subset_date(&self.window)
                    .subset_rect(&bbox)
                    .into_rows()
            }
            (Backend::Search, Variable::Core) => {
                SearchIndex::open(mirror, SearchMode::Core)?.search(&bbox, &self.window)?
            }
            (Backend::Search, Variable::Bgc(parameter)) => {
                SearchIndex::open(mirror, SearchMode::BgcSynthetic)?
                    .search_params(parameter)
                    .search(&bbox, &self.window)?
            }
        };
        let search_runtime = now.elapsed();
        let candidate_count = candidates.len();

        let now = std::time::Instant::now();
        let mut annotated = Vec::new();
        for record in candidates {
            let nearest = line.nearest(record.point());
            // Strict: a candidate exactly at the radius is excluded.
            if nearest.distance_km < self.radius_km {
                annotated.push(AnnotatedProfile {
                    distance_from_line: nearest.distance_km,
                    nearest_station: nearest.station.station.clone(),
                    distance_along_line: line.along_km(nearest.station),
                    record,
                });
            }
        }
        let measure_runtime = now.elapsed();

        debug!(
            "profiles; line: {}, candidates: {candidate_count}, kept: {}, search_exec: {search_runtime:?}, measure_exec: {measure_runtime:?}",
            line.name(),
            annotated.len(),
        );

        Ok(annotated)
    }
}

#[derive(Debug, Default)]
pub struct ProfilesQueryBuilder {
    line: Option<LineSpec>,
    radius_km: Option<f64>,
    window: Option<DateWindow>,
    variable: Variable,
    backend: Backend,
}

impl ProfilesQueryBuilder {
    #[must_use]
    pub fn line(mut self, line: impl Into<LineSpec>) -> Self {
        self.line = Some(line.into());
        self
    }

    /// Acceptable distance from the line, in kilometers.
    #[must_use]
    pub fn radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = Some(radius_km);
        self
    }

    #[must_use]
    pub fn window(mut self, window: DateWindow) -> Self {
        self.window = Some(window);
        self
    }

    #[must_use]
    pub fn variable(mut self, variable: Variable) -> Self {
        self.variable = variable;
        self
    }

    #[must_use]
    pub fn backend(mut self, backend: Backend) -> Self {
        self.backend = backend;
        self
    }

    pub fn build(self) -> Result<ProfilesQuery, IndexError> {
        let line = self.line.ok_or(IndexError::Builder("line"))?;
        let radius_km = self.radius_km.ok_or(IndexError::Builder("radius_km"))?;
        let window = self.window.ok_or(IndexError::Builder("window"))?;
        Ok(ProfilesQuery {
            line,
            radius_km,
            window,
            variable: self.variable,
            backend: self.backend,
        })
    }
}

//! Argo profile-index search backends and line-proximity queries.

mod error;
mod index;
mod query;
mod record;
mod search;
mod variable;
mod window;

pub use crate::{
    error::IndexError,
    index::{IndexKind, ProfIndex},
    query::{Backend, ProfilesQuery, ProfilesQueryBuilder},
    record::{AnnotatedProfile, ProfileRecord},
    search::{SearchIndex, SearchMode},
    variable::Variable,
    window::{DateBound, DateWindow},
};

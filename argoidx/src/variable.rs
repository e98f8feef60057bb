//! Argo variable selection.

use std::{convert::Infallible, fmt, str::FromStr};

/// Argo variable of interest.
///
/// Core physical variables live in the standard profile index; any
/// other parameter name selects the synthetic (BGC) index restricted
/// to that parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Variable {
    /// `core`, `TEMP`, or `PSAL`.
    #[default]
    Core,

    /// A proper BGC parameter name, e.g. `DOXY`.
    Bgc(String),
}

const CORE_NAMES: [&str; 3] = ["core", "TEMP", "PSAL"];

impl From<&str> for Variable {
    fn from(name: &str) -> Self {
        if CORE_NAMES.contains(&name) {
            Self::Core
        } else {
            Self::Bgc(name.to_string())
        }
    }
}

impl FromStr for Variable {
    type Err = Infallible;

    fn from_str(name: &str) -> Result<Self, Infallible> {
        Ok(Self::from(name))
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Core => f.write_str("core"),
            Self::Bgc(name) => f.write_str(name),
        }
    }
}

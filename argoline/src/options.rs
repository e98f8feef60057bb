use argoidx::{Backend, DateBound, Variable};
use clap::{Args, Parser, ValueEnum};
use std::path::PathBuf;

/// Find Argo float profiles near named transect lines.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub enum Cli {
    /// Print the annotated profile table as CSV.
    Csv(Query),

    /// Print the annotated profile table as JSON.
    Json(Query),

    /// List available line names.
    Lines(Lines),
}

#[derive(Debug, Clone, Args)]
pub struct Query {
    /// Directory holding GDAC index files.
    #[arg(short, long)]
    pub mirror: PathBuf,

    /// Directory holding extra line definitions. Defaults to the
    /// `config` directory next to the working directory.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Named line, e.g. "ar7w".
    #[arg(short, long)]
    pub line: String,

    /// Acceptable distance from the line, in kilometers.
    #[arg(short, long)]
    pub radius: f64,

    /// Earliest date, "yyyy-mm" or "yyyy-mm-dd".
    #[arg(short, long)]
    pub since: DateBound,

    /// Latest date (whole month or day), implicit present when
    /// omitted.
    #[arg(short, long)]
    pub until: Option<DateBound>,

    /// Argo variable. "core", "TEMP", and "PSAL" use the core index;
    /// any other parameter name the synthetic BGC index.
    #[arg(short, long, default_value = "core")]
    pub variable: Variable,

    /// Data-access backend.
    #[arg(short, long, value_enum, default_value = "index")]
    pub backend: BackendArg,
}

#[derive(Debug, Clone, Args)]
pub struct Lines {
    /// Directory holding extra line definitions. Defaults to the
    /// `config` directory next to the working directory.
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BackendArg {
    /// Load the whole index, then subset.
    Index,

    /// Stream the index in one search pass.
    Search,
}

impl From<BackendArg> for Backend {
    fn from(arg: BackendArg) -> Self {
        match arg {
            BackendArg::Index => Self::Index,
            BackendArg::Search => Self::Search,
        }
    }
}

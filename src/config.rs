//! Per-run configuration.
//!
//! Everything the pipeline needs is read once from the command line and
//! passed around as an explicit [`RunConfig`]; there is no module-level
//! state.

use std::path::PathBuf;

/// Default location of the data file, relative to the site root.
pub const DEFAULT_DATA_FILE: &str = "_data/papers.yml";

/// Configuration for one run of the pipeline.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// Contact email sent with every E-utilities request.
    pub email: String,

    /// Author to search, formatted "LastName INITIALS".
    pub author: String,

    /// Cap on the number of records searched.
    pub max: usize,

    /// Print full record info, including abstracts, to stdout.
    pub verbose: bool,

    /// Skip writing the data file.
    pub do_not_populate: bool,

    /// Where the serialized citations are written.
    pub data_file: PathBuf,
}

impl RunConfig {
    /// Create a configuration with the default data file path.
    pub fn new(email: impl Into<String>, author: impl Into<String>, max: usize) -> Self {
        Self {
            email: email.into(),
            author: author.into(),
            max,
            verbose: false,
            do_not_populate: false,
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
        }
    }

    /// Enable verbose console output.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Suppress the data-file write.
    pub fn do_not_populate(mut self, do_not_populate: bool) -> Self {
        self.do_not_populate = do_not_populate;
        self
    }

    /// Override the data file path.
    pub fn data_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.data_file = path.into();
        self
    }
}

//! Output stage: the YAML data file and the verbose console display.

pub mod display;
pub mod yaml;

use std::io;

use crate::config::RunConfig;
use crate::models::Citation;

/// Apply the output contract for one run.
///
/// Verbose mode prints every record to stdout. Unless dry-run is set, the
/// full ordered sequence is then dumped to the configured data file in a
/// single write, replacing any prior content.
pub fn emit(citations: &[Citation], config: &RunConfig) -> io::Result<()> {
    if config.verbose {
        display::print_records(citations);
    }
    if !config.do_not_populate {
        yaml::write_data_file(citations, &config.data_file)?;
    }
    Ok(())
}

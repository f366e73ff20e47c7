//! Data sources that produce presence records
//!
//! The aggregation engine never knows where records came from. A source is
//! chosen once per run from configuration:
//!
//! - [`SyntheticSource`]: seeded pseudo-random data for a fixed roster
//! - [`CsvSource`]: a rectangular CSV file (name column + 0/1 flag columns)

mod csv_file;
mod synthetic;

pub use csv_file::{parse_records, CsvSource};
pub use synthetic::SyntheticSource;

use crate::config::AnalyzerConfig;
use crate::error::Result;
use crate::record::PresenceRecord;

/// Anything that can supply the records for one run
pub trait DataSource {
    /// Short human-readable description, used in logs
    fn describe(&self) -> String;

    /// Produce the records in display order
    fn load(&self) -> Result<Vec<PresenceRecord>>;
}

/// Pick the source named by the configuration
///
/// An `input` path selects the CSV source; otherwise data is generated.
pub fn from_config(config: &AnalyzerConfig) -> Box<dyn DataSource> {
    match &config.input {
        Some(path) => Box::new(CsvSource::new(path)),
        None => Box::new(SyntheticSource::new(
            config.roster.clone(),
            config.time_unit_count,
            config.random_seed,
        )),
    }
}

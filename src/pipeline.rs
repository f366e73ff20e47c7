//! One analysis run: load, summarize, partition
//!
//! [`analyze`] either returns a complete [`Analysis`] or an error. Renderers
//! only ever see finished results.

use crate::aggregate::{partition_by_threshold, summarize, AttendanceSummary, Partition};
use crate::error::Result;
use crate::record::PresenceRecord;
use crate::source::DataSource;
use tracing::{debug, info};

/// Everything the renderers need from one run
#[derive(Debug, Clone)]
pub struct Analysis {
    pub records: Vec<PresenceRecord>,
    pub summaries: Vec<AttendanceSummary>,
    pub partition: Partition,
    pub threshold: f64,
    /// Shared presence length `T`
    pub time_units: usize,
}

impl Analysis {
    /// Aggregate already-loaded records
    pub fn from_records(records: Vec<PresenceRecord>, threshold: f64) -> Result<Self> {
        let summaries = summarize(&records, threshold)?;
        let partition = partition_by_threshold(&summaries, threshold);
        let time_units = records.first().map_or(0, PresenceRecord::time_units);

        debug!(
            "Summarized {} students over {} days: {} below, {} clear",
            summaries.len(),
            time_units,
            partition.below.len(),
            partition.clear.len()
        );

        Ok(Self {
            records,
            summaries,
            partition,
            threshold,
            time_units,
        })
    }
}

/// Run the data source and the aggregation engine
pub fn analyze(source: &dyn DataSource, threshold: f64) -> Result<Analysis> {
    info!("Loading attendance from {}", source.describe());
    let records = source.load()?;
    debug!("Loaded {} records", records.len());

    Analysis::from_records(records, threshold)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AttendanceError;
    use crate::source::SyntheticSource;

    struct FixedSource(Vec<PresenceRecord>);

    impl DataSource for FixedSource {
        fn describe(&self) -> String {
            "fixed".to_string()
        }

        fn load(&self) -> Result<Vec<PresenceRecord>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_analyze_fixed_records() {
        let source = FixedSource(vec![
            PresenceRecord::from_flags("Aarav", &[1, 1, 1, 1]),
            PresenceRecord::from_flags("Vihaan", &[1, 0, 0, 0]),
        ]);
        let analysis = analyze(&source, 75.0).unwrap();

        assert_eq!(analysis.time_units, 4);
        assert_eq!(analysis.summaries.len(), 2);
        assert_eq!(analysis.partition.below.len(), 1);
        assert_eq!(analysis.partition.below[0].entity_name, "Vihaan");
        assert_eq!(analysis.partition.clear[0].entity_name, "Aarav");
    }

    #[test]
    fn test_analyze_propagates_shape_error() {
        let source = FixedSource(vec![
            PresenceRecord::from_flags("Aarav", &[1, 1, 1]),
            PresenceRecord::from_flags("Vihaan", &[1, 0]),
        ]);
        let err = analyze(&source, 75.0).unwrap_err();
        assert!(matches!(err, AttendanceError::ShapeMismatch { .. }));
    }

    #[test]
    fn test_analyze_empty_roster() {
        let source = SyntheticSource::new(Vec::new(), 10, 42);
        let err = analyze(&source, 75.0).unwrap_err();
        assert!(matches!(err, AttendanceError::EmptyInput(_)));
    }

    #[test]
    fn test_analyze_is_repeatable() {
        let source = SyntheticSource::new(vec!["A".into(), "B".into(), "C".into()], 10, 42);
        let first = analyze(&source, 75.0).unwrap();
        let second = analyze(&source, 75.0).unwrap();
        assert_eq!(first.summaries, second.summaries);
        assert_eq!(first.partition, second.partition);
    }
}

//! rollcall - attendance analyzer
//!
//! Computes per-student attendance totals and percentages from a presence
//! matrix, flags students below a minimum threshold, and renders the result
//! as a console report (or JSON/CSV/HTML) plus an SVG bar chart.
//!
//! ```
//! use rollcall::aggregate::{partition_by_threshold, summarize};
//! use rollcall::record::PresenceRecord;
//!
//! let records = vec![
//!     PresenceRecord::from_flags("Aarav", &[1, 1, 1, 1]),
//!     PresenceRecord::from_flags("Saanvi", &[1, 0, 1, 0]),
//! ];
//! let summaries = summarize(&records, 75.0).unwrap();
//! let partition = partition_by_threshold(&summaries, 75.0);
//! assert_eq!(partition.below[0].entity_name, "Saanvi");
//! ```

pub mod aggregate;
pub mod chart;
pub mod cli;
pub mod config;
pub mod csv_output;
pub mod error;
pub mod html_output;
pub mod json_output;
pub mod pipeline;
pub mod record;
pub mod report;
pub mod source;

pub use aggregate::{partition_by_threshold, summarize, AttendanceSummary, Partition};
pub use error::{AttendanceError, Result};
pub use record::PresenceRecord;

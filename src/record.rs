//! Presence records: one entity and its per-day presence flags

/// A single entity's presence over the tracked time-units
///
/// Records are built once per run by a [`crate::source::DataSource`] and are
/// not modified afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresenceRecord {
    /// Display name, unique within a run
    pub entity_name: String,
    /// One flag per time-unit (`true` = present)
    pub presence: Vec<bool>,
}

impl PresenceRecord {
    pub fn new(entity_name: impl Into<String>, presence: Vec<bool>) -> Self {
        Self {
            entity_name: entity_name.into(),
            presence,
        }
    }

    /// Build a record from numeric flags; any non-zero value counts as present
    pub fn from_flags(entity_name: impl Into<String>, flags: &[u8]) -> Self {
        Self::new(entity_name, flags.iter().map(|&f| f != 0).collect())
    }

    /// Number of time-units recorded
    pub fn time_units(&self) -> usize {
        self.presence.len()
    }

    /// Number of time-units marked present
    pub fn present_count(&self) -> usize {
        self.presence.iter().filter(|&&p| p).count()
    }
}

//! Seeded synthetic attendance data

use super::DataSource;
use crate::error::Result;
use crate::record::PresenceRecord;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Generates a presence matrix for a fixed roster
///
/// Each flag is an independent fair 0/1 draw. The same roster, length and
/// seed always produce the same records.
#[derive(Debug, Clone)]
pub struct SyntheticSource {
    roster: Vec<String>,
    time_units: usize,
    seed: u64,
}

impl SyntheticSource {
    pub fn new(roster: Vec<String>, time_units: usize, seed: u64) -> Self {
        Self {
            roster,
            time_units,
            seed,
        }
    }
}

impl DataSource for SyntheticSource {
    fn describe(&self) -> String {
        format!(
            "synthetic ({} students x {} days, seed {})",
            self.roster.len(),
            self.time_units,
            self.seed
        )
    }

    fn load(&self) -> Result<Vec<PresenceRecord>> {
        let mut rng = StdRng::seed_from_u64(self.seed);

        let records = self
            .roster
            .iter()
            .map(|name| {
                let presence = (0..self.time_units)
                    .map(|_| rng.gen_range(0..2u8) == 1)
                    .collect();
                PresenceRecord::new(name.clone(), presence)
            })
            .collect();

        Ok(records)
    }
}

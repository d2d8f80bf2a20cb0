//! Session configuration handed over by the host once the dataset loads.
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use slot_grid::DatasetBounds;

use crate::state::Snapshot;

/// Everything the selection state machine needs from the host.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Coverage bounds discovered from the loaded table's headers.
    pub bounds: DatasetBounds,
    /// Date the session opens on.
    pub start_date: NaiveDate,
}

impl Config {
    /// Seeds the first selection state of the session.
    pub fn initial_snapshot(&self) -> Snapshot {
        Snapshot::initial(self.start_date)
    }
}

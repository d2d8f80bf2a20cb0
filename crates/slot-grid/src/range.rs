//! Dataset coverage bounds.
use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::key::UtcKey;

/// Coverage window of the loaded temperature table.
///
/// The lower bound is fixed by the data generation process
/// (2020-01-01T00:00:00Z is the earliest published key); the upper bound
/// tracks the newest column header found at load time. The window is
/// half-open at 'latest + 3h', since the newest grid point still covers
/// the three hours it aggregates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetBounds {
    latest: DateTime<Utc>,
}

impl DatasetBounds {
    /// First calendar date (in viewer-local terms) with any data.
    pub fn earliest_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2020, 1, 1).expect("fixed calendar date is valid")
    }

    /// Builds bounds from the newest key known to be in the table.
    #[inline]
    pub const fn new(latest: DateTime<Utc>) -> Self {
        Self { latest }
    }

    /// Scans column headers for lookup keys, keeping the newest.
    ///
    /// Non-key columns (the zone-name column, row labels) are skipped,
    /// not errors. Returns [`None`] when no header parses as a key.
    pub fn from_headers<'a, I>(headers: I) -> Option<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        headers
            .into_iter()
            .filter_map(|header| header.parse::<UtcKey>().ok())
            .map(|key| key.instant())
            .max()
            .map(Self::new)
    }

    /// The newest grid point present in the table.
    #[inline]
    pub const fn latest(&self) -> DateTime<Utc> {
        self.latest
    }

    /// Open upper bound on covered instants.
    pub fn upper(&self) -> DateTime<Utc> {
        self.latest + Duration::hours(3)
    }
}

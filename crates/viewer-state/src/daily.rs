//! Optional per-day aggregate lookup.
use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use slot_grid::DateKey;

/// Min/max/mean readings for one local calendar day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DailySummary {
    /// Lowest reading of the day.
    pub min: f64,
    /// Highest reading of the day.
    pub max: f64,
    /// Mean of the day's readings.
    pub mean: f64,
}

/// Daily aggregate columns, keyed by their local-date column names.
///
/// Days can be missing; that's a valid state, not an error. Lookups
/// return [`Option`] and the caller omits the optional fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DailyTable {
    days: HashMap<DateKey, DailySummary>,
}

impl DailyTable {
    /// Builds the table from named columns, skipping any whose name
    /// doesn't spell a local-date key.
    pub fn from_columns<'a, I>(columns: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, DailySummary)>,
    {
        let days = columns
            .into_iter()
            .filter_map(|(name, summary)| match name.parse::<DateKey>() {
                Ok(key) => Some((key, summary)),
                Err(_) => None,
            })
            .collect();

        Self { days }
    }

    /// Looks up one day, [`None`] when the dataset has no aggregates for
    /// it.
    pub fn get(&self, key: &DateKey) -> Option<&DailySummary> {
        self.days.get(key)
    }

    /// Number of days with aggregates.
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// True when no aggregate columns were found.
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use slot_grid::daily_key;

    use super::*;

    const SUMMARY: DailySummary = DailySummary {
        min: 18.2,
        max: 31.0,
        mean: 24.1,
    };

    #[test]
    fn test_lookup_degrades_over_missing_days() {
        let table = DailyTable::from_columns([
            ("X2020.07.15", SUMMARY),
            // not a date column, skipped rather than an error
            ("X2020.02.30", SUMMARY),
        ]);

        assert_eq!(table.len(), 1);

        let present = daily_key(NaiveDate::from_ymd_opt(2020, 7, 15).unwrap());
        assert_eq!(table.get(&present), Some(&SUMMARY));

        let absent = daily_key(NaiveDate::from_ymd_opt(2020, 7, 16).unwrap());
        assert_eq!(table.get(&absent), None);
    }

    #[test]
    fn test_empty_table() {
        let table = DailyTable::from_columns([]);

        assert!(table.is_empty());
    }
}

//! Mapping a selection onto what the renderer should do this cycle.
use chrono::NaiveDate;
use serde::Serialize;
use slot_grid::{DatasetBounds, DateKey, Rejection, Slot, UtcKey, daily_key, derive_key};

use crate::state::Snapshot;

/// Both dataset keys for a successful derivation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct RenderKeys {
    /// Column key for the 3-hourly temperature reading.
    pub utc: UtcKey,
    /// Column key for the optional daily aggregates.
    pub daily: DateKey,
}

/// What the renderer should do with the current selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Look up and draw these keys.
    Render(RenderKeys),
    /// Show the rejection's message instead of data.
    Reject(Rejection),
    /// Draw nothing this cycle; the state machine hasn't reconciled the
    /// selection yet and the next event will.
    Skip,
}

impl Outcome {
    /// Resolves the outcome for a raw (date, slot) pair.
    ///
    /// Unlike a [`Snapshot`], a raw pair may be mid-update (the date
    /// replaced, the slot not yet migrated); that state comes out as
    /// [`Outcome::Skip`] rather than an error.
    pub fn for_selection(date: NaiveDate, slot: Slot, bounds: &DatasetBounds) -> Self {
        match derive_key(date, slot, bounds) {
            Ok(utc) => Self::Render(RenderKeys {
                utc,
                daily: daily_key(date),
            }),
            Err(rejection) if rejection.is_transient() => {
                debug!(
                    message = "selection not reconciled, skipping render cycle",
                    %date,
                    %slot,
                );
                Self::Skip
            }
            Err(rejection) => Self::Reject(rejection),
        }
    }
}

impl Snapshot {
    /// Resolves the render outcome for this snapshot against the loaded
    /// dataset bounds.
    pub fn render(&self, bounds: &DatasetBounds) -> Outcome {
        Outcome::for_selection(self.date(), self.slot(), bounds)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use slot_grid::Slot;

    use super::*;
    use crate::state::Event;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    fn bounds() -> DatasetBounds {
        DatasetBounds::new(Utc.with_ymd_and_hms(2021, 1, 1, 0, 0, 0).unwrap())
    }

    #[test]
    fn test_successful_render_carries_both_keys() {
        let snapshot = Snapshot::initial(date(2020, 7, 15))
            .apply(Event::SlotChanged(Slot::from_hour(14)));

        match snapshot.render(&bounds()) {
            Outcome::Render(keys) => {
                assert_eq!(keys.utc.to_string(), "X2020.07.15.18.00.00");
                assert_eq!(keys.daily.to_string(), "X2020.07.15");
            }
            other => panic!("expected a render outcome, got {other:?}"),
        }
    }

    #[test]
    fn test_out_of_range_dates_reject_with_a_reason() {
        let early = Snapshot::initial(date(2019, 12, 31));
        assert_eq!(early.render(&bounds()), Outcome::Reject(Rejection::BeforeRange));

        let late = Snapshot::initial(date(2021, 6, 1));
        assert_eq!(late.render(&bounds()), Outcome::Reject(Rejection::AfterRange));
    }

    #[test]
    fn test_unreconciled_selection_skips_the_cycle() {
        // a pair the migrator hasn't run on: daylight date, standard slot
        let outcome = Outcome::for_selection(date(2020, 7, 15), Slot::from_hour(1), &bounds());

        assert_eq!(outcome, Outcome::Skip);
    }
}

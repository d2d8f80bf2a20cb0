//! Immutable selection snapshots and the event transitions between them.
use chrono::NaiveDate;
use slot_grid::{Slot, SlotGrid};

/// A user interaction with the picker widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// A new calendar date was picked.
    DateChanged(NaiveDate),
    /// A different slot was picked from the active grid.
    SlotChanged(Slot),
}

/// One fully reconciled selection.
///
/// Every event produces a whole new snapshot; there is no partial update.
/// The slot is a member of the grid in every snapshot that exists, so a
/// renderer handed a snapshot can never observe a stale (date, slot) mix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Snapshot {
    date: NaiveDate,
    grid: SlotGrid,
}

impl Snapshot {
    /// Opens a session on 'date' with the grid's default selection.
    pub fn initial(date: NaiveDate) -> Self {
        Self {
            date,
            grid: SlotGrid::for_date(date, None),
        }
    }

    /// Applies one event, producing the next snapshot.
    ///
    /// A date change runs the full resolve + migrate chain before the
    /// snapshot is returned, keeping the ordering guarantee the render
    /// step depends on.
    pub fn apply(&self, event: Event) -> Self {
        match event {
            Event::DateChanged(date) => {
                let grid = SlotGrid::for_date(date, Some(self.grid.selected()));

                debug!(
                    message = "date changed, rebuilt slot grid",
                    %date,
                    kind = ?grid.kind(),
                    slot = %grid.selected(),
                );

                Self { date, grid }
            }
            Event::SlotChanged(slot) => match self.grid.select(slot) {
                Some(grid) => Self {
                    date: self.date,
                    grid,
                },
                None => {
                    // the widget only offers grid members, so this is a
                    // stray event from mid-update UI state
                    warn!(message = "ignoring slot outside the active grid", %slot);
                    *self
                }
            },
        }
    }

    /// The selected calendar date.
    #[inline]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// The resolved grid + selection for the date.
    #[inline]
    pub const fn grid(&self) -> SlotGrid {
        self.grid
    }

    /// The selected slot, identical to 'snapshot.grid().selected()'.
    #[inline]
    pub const fn slot(&self) -> Slot {
        self.grid.selected()
    }
}

#[cfg(test)]
mod tests {
    use slot_grid::DayKind;

    use super::*;

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_initial_snapshot_selects_the_first_slot() {
        let snapshot = Snapshot::initial(date(2020, 6, 10));

        assert_eq!(snapshot.grid().kind(), DayKind::Daylight);
        assert_eq!(snapshot.slot().hour(), 2);
    }

    #[test]
    fn test_date_change_migrates_the_selection() {
        let _ = tracing_subscriber::fmt().with_test_writer().try_init();

        let snapshot = Snapshot::initial(date(2020, 3, 7))
            .apply(Event::SlotChanged(Slot::from_hour(22)));
        assert_eq!(snapshot.slot().hour(), 22);

        let snapshot = snapshot.apply(Event::DateChanged(date(2020, 3, 8)));

        assert_eq!(snapshot.grid().kind(), DayKind::SpringForward);
        assert_eq!(snapshot.slot().hour(), 23);
    }

    #[test]
    fn test_stray_slot_event_is_ignored() {
        let snapshot = Snapshot::initial(date(2020, 6, 10));
        let unchanged = snapshot.apply(Event::SlotChanged(Slot::from_hour(3)));

        assert_eq!(unchanged, snapshot);
    }

    #[test]
    fn test_selection_is_always_a_grid_member() {
        let events = [
            Event::SlotChanged(Slot::from_hour(22)),
            Event::DateChanged(date(2020, 3, 8)),
            Event::DateChanged(date(2020, 3, 9)),
            Event::SlotChanged(Slot::from_hour(23)),
            Event::DateChanged(date(2020, 11, 1)),
            Event::DateChanged(date(2020, 11, 2)),
            Event::DateChanged(date(2020, 7, 4)),
        ];

        let mut snapshot = Snapshot::initial(date(2020, 1, 1));

        for event in events {
            snapshot = snapshot.apply(event);

            assert!(
                snapshot.grid().kind().contains(snapshot.slot()),
                "after {event:?}"
            );
        }
    }
}

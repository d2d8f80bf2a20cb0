//! [`DayKind`] with the authoritative slot grids, and [`SlotGrid`].
use chrono::NaiveDate;

use crate::dst::DstStatus;
use crate::migrate::migrate;
use crate::slot::Slot;

/// Builds a grid table in a const context.
const fn grid(hours: [u8; 8]) -> [Slot; 8] {
    let mut slots = [Slot::from_hour(0); 8];

    let mut i = 0;
    while i < hours.len() {
        slots[i] = Slot::from_hour(hours[i]);
        i += 1;
    }

    slots
}

/// Regular grid while DST is active.
const DAYLIGHT: [Slot; 8] = grid([2, 5, 8, 11, 14, 17, 20, 23]);

/// Regular grid during standard time.
const STANDARD: [Slot; 8] = grid([1, 4, 7, 10, 13, 16, 19, 22]);

/// Irregular grid for the day containing the spring-forward transition.
const SPRING_FORWARD: [Slot; 8] = grid([1, 5, 8, 11, 14, 17, 20, 23]);

/// Irregular grid for the day containing the fall-back transition.
const FALL_BACK: [Slot; 8] = grid([2, 4, 7, 10, 13, 16, 19, 22]);

/// The DST disposition of one calendar day, derived from whether the day
/// and the day after it observe DST.
///
/// The transition days get irregular grids: the day containing the
/// transition has to offer the wall-clock hours that actually occur on
/// it, while still landing every selection on the dataset's even 3-hour
/// UTC spacing once the following day reverts to a regular pattern.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayKind {
    /// DST in effect for the whole day.
    Daylight,
    /// Standard time for the whole day.
    Standard,
    /// Clocks jump forward during this day; one wall-clock hour is skipped.
    SpringForward,
    /// Clocks fall back during this day; one wall-clock hour repeats.
    FallBack,
}

impl DayKind {
    /// Resolves the day kind from the two-day DST status pair. Total over
    /// all four combinations.
    pub const fn from_status(status: DstStatus) -> Self {
        match (status.today, status.tomorrow) {
            (true, true) => Self::Daylight,
            (false, false) => Self::Standard,
            (false, true) => Self::SpringForward,
            (true, false) => Self::FallBack,
        }
    }

    /// Shortcut for 'DayKind::from_status(DstStatus::of(date))'.
    pub fn of(date: NaiveDate) -> Self {
        Self::from_status(DstStatus::of(date))
    }

    /// The authoritative set of selectable slots for a day of this kind.
    /// Always exactly 8 slots, in ascending order.
    pub const fn slots(self) -> &'static [Slot; 8] {
        match self {
            Self::Daylight => &DAYLIGHT,
            Self::Standard => &STANDARD,
            Self::SpringForward => &SPRING_FORWARD,
            Self::FallBack => &FALL_BACK,
        }
    }

    /// Returns true if a DST transition occurs during a day of this kind.
    #[inline]
    pub const fn is_transition(self) -> bool {
        matches!(self, Self::SpringForward | Self::FallBack)
    }

    /// Membership test against this day's grid.
    pub const fn contains(self, slot: Slot) -> bool {
        let slots = self.slots();

        let mut i = 0;
        while i < slots.len() {
            if slots[i].hour() == slot.hour() {
                return true;
            }
            i += 1;
        }

        false
    }
}

/// A resolved grid coupled with its selected member.
///
/// The constructors run the resolver + migrator, so 'selected' is a
/// member of 'kind.slots()' in every value of this type that exists.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotGrid {
    kind: DayKind,
    selected: Slot,
}

impl SlotGrid {
    /// Resolves the grid for 'date', migrating 'prior' into it (or taking
    /// the first member when there is no prior selection).
    pub fn for_date(date: NaiveDate, prior: Option<Slot>) -> Self {
        let kind = DayKind::of(date);

        let selected = match prior {
            Some(old) => migrate(old, kind),
            None => kind.slots()[0],
        };

        Self { kind, selected }
    }

    /// Re-selects a member of the current grid, returning [`None`] if
    /// 'slot' isn't one.
    pub fn select(self, slot: Slot) -> Option<Self> {
        self.kind.contains(slot).then_some(Self {
            kind: self.kind,
            selected: slot,
        })
    }

    /// The kind of day this grid was resolved for.
    #[inline]
    pub const fn kind(&self) -> DayKind {
        self.kind
    }

    /// The selected member of the grid.
    #[inline]
    pub const fn selected(&self) -> Slot {
        self.selected
    }

    /// All selectable slots, identical to 'grid.kind().slots()'.
    #[inline]
    pub const fn slots(&self) -> &'static [Slot; 8] {
        self.kind.slots()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hours(kind: DayKind) -> [u8; 8] {
        kind.slots().map(|slot| slot.hour())
    }

    fn date(year: i32, month: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(year, month, day).unwrap()
    }

    #[test]
    fn test_kind_from_status() {
        let status = |today, tomorrow| DstStatus { today, tomorrow };

        assert_eq!(DayKind::from_status(status(true, true)), DayKind::Daylight);
        assert_eq!(
            DayKind::from_status(status(false, false)),
            DayKind::Standard
        );
        assert_eq!(
            DayKind::from_status(status(false, true)),
            DayKind::SpringForward
        );
        assert_eq!(DayKind::from_status(status(true, false)), DayKind::FallBack);
    }

    #[test]
    fn test_grid_tables() {
        assert_eq!(hours(DayKind::Daylight), [2, 5, 8, 11, 14, 17, 20, 23]);
        assert_eq!(hours(DayKind::Standard), [1, 4, 7, 10, 13, 16, 19, 22]);
        assert_eq!(
            hours(DayKind::SpringForward),
            [1, 5, 8, 11, 14, 17, 20, 23]
        );
        assert_eq!(hours(DayKind::FallBack), [2, 4, 7, 10, 13, 16, 19, 22]);
    }

    #[test]
    fn test_grid_spacing() {
        for kind in [
            DayKind::Daylight,
            DayKind::Standard,
            DayKind::SpringForward,
            DayKind::FallBack,
        ] {
            let hours = hours(kind);

            // strictly ascending implies all 8 are distinct
            assert!(hours.windows(2).all(|pair| pair[0] < pair[1]), "{kind:?}");

            let irregular = hours
                .windows(2)
                .filter(|pair| pair[1] - pair[0] != 3)
                .count();

            if kind.is_transition() {
                assert_eq!(irregular, 1, "{kind:?}");
            } else {
                assert_eq!(irregular, 0, "{kind:?}");
            }
        }
    }

    #[test]
    fn test_spring_forward_day() {
        let kind = DayKind::of(date(2020, 3, 8));

        assert_eq!(kind, DayKind::SpringForward);
        assert!(kind.is_transition());
        assert_eq!(hours(kind), [1, 5, 8, 11, 14, 17, 20, 23]);
    }

    #[test]
    fn test_fall_back_day() {
        let kind = DayKind::of(date(2020, 11, 1));

        assert_eq!(kind, DayKind::FallBack);
        assert!(kind.is_transition());
        assert_eq!(hours(kind), [2, 4, 7, 10, 13, 16, 19, 22]);
    }

    #[test]
    fn test_for_date_defaults_and_select() {
        let grid = SlotGrid::for_date(date(2020, 6, 10), None);

        assert_eq!(grid.kind(), DayKind::Daylight);
        assert_eq!(grid.selected().hour(), 2);

        let reselected = grid.select(Slot::from_hour(14)).unwrap();
        assert_eq!(reselected.selected().hour(), 14);

        // 3 is never a member of any grid
        assert!(grid.select(Slot::from_hour(3)).is_none());
    }
}

//! Selection migration across grid changes.
use crate::grid::DayKind;
use crate::slot::Slot;

/// Maps the previously selected slot onto the grid of a newly resolved
/// day, preserving the nearest equivalent hour.
///
/// The regular grids sit on complementary 'mod 3' residues (daylight
/// slots on 2, standard slots on 1), so a selection carried over from the
/// other regime is always exactly one hour away from a member. The
/// transition grids each have one irregular member (2 on a fall-back day,
/// 1 on a spring-forward day) that absorbs the neighbor the residue rule
/// alone would push out of the grid.
///
/// Total for any slot drawn from any of the four grids; the result is
/// always a member of the new grid.
pub fn migrate(old: Slot, new: DayKind) -> Slot {
    let hour = old.hour();

    let migrated = match new {
        DayKind::Daylight => {
            if hour % 3 == 1 {
                hour + 1
            } else {
                hour
            }
        }
        DayKind::Standard => {
            if hour % 3 == 2 {
                hour - 1
            } else {
                hour
            }
        }
        DayKind::FallBack => {
            if hour == 1 {
                2
            } else if hour % 3 == 2 && hour != 2 {
                hour - 1
            } else {
                hour
            }
        }
        DayKind::SpringForward => {
            if hour == 2 {
                1
            } else if hour % 3 == 1 && hour != 1 {
                hour + 1
            } else {
                hour
            }
        }
    };

    let slot = Slot::from_hour(migrated);

    debug_assert!(
        new.contains(slot),
        "migrated slot {slot} is not a member of the {new:?} grid"
    );

    slot
}

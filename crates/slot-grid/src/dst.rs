//! DST status queries against the fixed viewer zone.
use chrono::{LocalResult, NaiveDate, NaiveTime, TimeZone};
use chrono_tz::{OffsetComponents, Tz};

/// The one civil-time zone the viewer models. The entire slot scheme is
/// defined in terms of this zone's clock.
pub(crate) const ZONE: Tz = Tz::America__New_York;

/// Whether DST is observed on a date and on the date right after it.
///
/// The pair is what the grid resolver dispatches on: a mismatch between
/// the two flags means the transition falls inside the queried day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DstStatus {
    /// DST in effect at local midnight of the queried date.
    pub today: bool,
    /// DST in effect at local midnight of the following date.
    pub tomorrow: bool,
}

impl DstStatus {
    /// Evaluates the DST predicate for 'date' and the day after it.
    pub fn of(date: NaiveDate) -> Self {
        let today = observes_dst(date);

        // saturates at the calendar bound; the status can't change past it
        let tomorrow = date.succ_opt().map(observes_dst).unwrap_or(today);

        Self { today, tomorrow }
    }
}

/// Checks whether DST is in effect at local midnight of 'date'.
///
/// Midnight matters: probing at an arbitrary hour could land on the far
/// side of the very transition this predicate is used to detect.
pub fn observes_dst(date: NaiveDate) -> bool {
    let midnight = date.and_time(NaiveTime::MIN);

    match ZONE.offset_from_local_datetime(&midnight) {
        LocalResult::Single(offset) => !offset.dst_offset().is_zero(),
        // a fold repeats the pre-transition offset first
        LocalResult::Ambiguous(first, _) => !first.dst_offset().is_zero(),
        // no midnight gap exists in this zone (transitions run at 01:00 or
        // 02:00 local), but a skipped midnight would open the day in DST
        LocalResult::None => true,
    }
}

//! UTC key derivation and selection validation.
use chrono::{Duration, LocalResult, NaiveDate, TimeZone, Utc};

use crate::dst::ZONE;
use crate::grid::DayKind;
use crate::key::{DateKey, UtcKey};
use crate::range::DatasetBounds;
use crate::slot::Slot;

/// Why a (date, slot) selection can't produce a lookup key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum Rejection {
    /// The selected date predates the dataset.
    #[error("no data is available before 2020-01-01")]
    BeforeRange,
    /// The selection is past the newest reading in the table.
    #[error("no data has been published for the selected time yet")]
    AfterRange,
    /// The slot hasn't been reconciled with the date's grid yet. Expected
    /// mid-update; callers skip the render cycle and the next event
    /// resolves it.
    #[error("slot is out of sync with the selected date's grid")]
    InconsistentSlot,
}

impl Rejection {
    /// True for the transient mid-update guard, which is never surfaced
    /// to the user.
    #[inline]
    pub const fn is_transient(&self) -> bool {
        matches!(self, Self::InconsistentSlot)
    }
}

/// Derives the canonical dataset key for a local selection.
///
/// The local instant 'date at slot' is converted through the fixed zone,
/// the fall-back repeated-hour correction is applied, and the result is
/// validated against the dataset window. Rejections come out in a fixed
/// priority: [`BeforeRange`], then [`AfterRange`], then
/// [`InconsistentSlot`].
///
/// [`BeforeRange`]: [`Rejection::BeforeRange`]
/// [`AfterRange`]: [`Rejection::AfterRange`]
/// [`InconsistentSlot`]: [`Rejection::InconsistentSlot`]
pub fn derive_key(
    date: NaiveDate,
    slot: Slot,
    bounds: &DatasetBounds,
) -> Result<UtcKey, Rejection> {
    // the picker's lower bound is enforced here, not at the widget
    if date < DatasetBounds::earliest_date() {
        return Err(Rejection::BeforeRange);
    }

    let kind = DayKind::of(date);

    let naive = date
        .and_hms_opt(slot.hour() as u32, 0, 0)
        .expect("slot hours are always within 0..24");

    let local = match ZONE.from_local_datetime(&naive) {
        LocalResult::Single(local) => local,
        // the fold repeats an hour; take the first occurrence
        LocalResult::Ambiguous(first, _) => first,
        // a slot naming the skipped hour can only be a stale selection
        // mid-update, and there is no instant to range check
        LocalResult::None => return Err(Rejection::InconsistentSlot),
    };

    let converted = local.with_timezone(&Utc);

    // The repeated hour of a fall-back day: naive conversion reads "2" on
    // the post-transition clock, but the dataset was generated from the
    // first (still-DST) occurrence, one hour earlier. Assumes the fixed
    // one-hour offset of the modeled zone.
    let utc = if matches!(kind, DayKind::FallBack) && slot.hour() == 2 {
        trace!(message = "applied fall-back repeated-hour correction", %date);
        converted - Duration::hours(1)
    } else {
        converted
    };

    if utc >= bounds.upper() {
        return Err(Rejection::AfterRange);
    }

    if !kind.contains(slot) {
        debug!(message = "slot not in the date's grid", %date, %slot, ?kind);
        return Err(Rejection::InconsistentSlot);
    }

    Ok(UtcKey::from_instant(utc))
}

/// Key into the daily aggregate tables for the same selection.
///
/// Valid whenever [`derive_key`] succeeds for the date; the aggregate
/// column itself may still be absent, which is a valid state for the
/// caller to degrade over.
#[inline]
pub fn daily_key(date: NaiveDate) -> DateKey {
    DateKey::from_date(date)
}

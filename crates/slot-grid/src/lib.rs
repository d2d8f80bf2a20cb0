#![deny(clippy::suspicious, clippy::complexity, clippy::perf, clippy::style)]
#![deny(missing_docs)]
//! Maps a discrete local-time selection onto the fixed 3-hour UTC grid
//! the temperature dataset is indexed on.
//!
//! The dataset's columns sit on an even 3-hour UTC spacing, while the UI
//! exposes a local-hour picker in a zone whose clock shifts twice a year
//! across the DST transitions. Reconciling the two takes four steps,
//! each its own module:
//!
//! - [`DstStatus`]: whether a date (and the date after it) observes DST.
//! - [`DayKind`]: the authoritative 8-slot grid for that status pair,
//!   including the irregular grids on the two transition days.
//! - [`migrate`]: carries a selection from one grid onto another when the
//!   date changes.
//! - [`derive_key`]: converts a reconciled selection to the canonical
//!   [`UtcKey`] column name, applying the fall-back repeated-hour
//!   correction and validating against the dataset's [`DatasetBounds`].
//!
//! Everything here is pure and O(1); the crate does no I/O.

#[macro_use]
extern crate tracing;

pub mod derive;
pub mod dst;
pub mod grid;
pub mod key;
mod migrate;
mod range;
mod slot;

pub use crate::derive::{Rejection, daily_key, derive_key};
pub use crate::dst::DstStatus;
pub use crate::grid::{DayKind, SlotGrid};
pub use crate::key::{DateKey, InvalidKey, UtcKey};
pub use crate::migrate::migrate;
pub use crate::range::DatasetBounds;
pub use crate::slot::{InvalidSlot, Slot};

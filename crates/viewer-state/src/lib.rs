//! Event-driven selection state for the temperature viewer.
//!
//! The slot reconciliation itself lives in [`slot_grid`]; this crate
//! holds the single-writer session state around it. Every user
//! interaction becomes an [`Event`], every event produces a fresh
//! [`Snapshot`] (never an in-place mutation), and each snapshot resolves
//! to an [`Outcome`] telling the renderer to draw, show a message, or
//! sit the cycle out.

#[macro_use]
extern crate tracing;

mod config;
mod daily;
mod render;
mod state;

pub use crate::config::Config;
pub use crate::daily::{DailySummary, DailyTable};
pub use crate::render::{Outcome, RenderKeys};
pub use crate::state::{Event, Snapshot};

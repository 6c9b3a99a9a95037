//! weekfit - Weekly workout planner
//!
//! A static workout catalog, a seven-day schedule of pure snapshot
//! operations, and the derived weekly summaries on top of them.

pub mod catalog;
pub mod schedule;
pub mod summary;
pub mod tui;

pub use schedule::{Planner, Schedule};

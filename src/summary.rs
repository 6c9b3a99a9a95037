//! Summary module - derived weekly totals and focus split
//!
//! Pure functions over a schedule snapshot; recomputed from scratch on
//! every change, never cached.

use std::collections::HashMap;

use crate::catalog::{FocusArea, Workout};
use crate::schedule::Schedule;

/// Total minutes assigned over a single day's sequence
pub fn day_duration(workouts: &[&'static Workout]) -> u32 {
    workouts.iter().map(|w| w.duration_mins).sum()
}

/// Total minutes assigned across the whole week. Rest days have empty
/// sequences and contribute nothing.
pub fn total_scheduled_minutes(schedule: &Schedule) -> u32 {
    schedule
        .days()
        .iter()
        .map(|day| day_duration(&day.workouts))
        .sum()
}

/// Count assigned workouts per focus area. A workout tagged with two areas
/// counts once for each; areas with no occurrences are absent from the map.
pub fn focus_counts(schedule: &Schedule) -> HashMap<FocusArea, u32> {
    let mut counts = HashMap::new();
    for day in schedule.days() {
        for workout in &day.workouts {
            for area in workout.focus {
                *counts.entry(*area).or_insert(0) += 1;
            }
        }
    }
    counts
}

/// Render minutes for display: "45m", "1h 20m", "2h 0m"
pub fn format_duration(minutes: u32) -> String {
    let hours = minutes / 60;
    let mins = minutes % 60;
    if hours > 0 {
        format!("{}h {}m", hours, mins)
    } else {
        format!("{}m", mins)
    }
}

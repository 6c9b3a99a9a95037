//! Schedule store - the in-memory week model and its mutation operations
//!
//! The schedule is a value: every operation takes a snapshot and returns a
//! new one, and the presentation layer replaces its copy wholesale. Nothing
//! here persists; the week resets to the default assignment each session.

use std::str::FromStr;

use anyhow::{anyhow, bail, Result};
use chrono::Datelike;
use serde::Serialize;
use tracing::debug;

use crate::catalog::{find_workout, FocusFilter, Workout};

/// Days of the week, one record each in a schedule
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl Weekday {
    pub fn label(&self) -> &'static str {
        match self {
            Weekday::Mon => "Mon",
            Weekday::Tue => "Tue",
            Weekday::Wed => "Wed",
            Weekday::Thu => "Thu",
            Weekday::Fri => "Fri",
            Weekday::Sat => "Sat",
            Weekday::Sun => "Sun",
        }
    }

    /// All weekdays in schedule order
    pub fn all() -> &'static [Weekday] {
        &[
            Weekday::Mon,
            Weekday::Tue,
            Weekday::Wed,
            Weekday::Thu,
            Weekday::Fri,
            Weekday::Sat,
            Weekday::Sun,
        ]
    }

    /// Map the host clock's weekday onto the schedule (for "today" markers)
    pub fn from_chrono(day: chrono::Weekday) -> Weekday {
        match day {
            chrono::Weekday::Mon => Weekday::Mon,
            chrono::Weekday::Tue => Weekday::Tue,
            chrono::Weekday::Wed => Weekday::Wed,
            chrono::Weekday::Thu => Weekday::Thu,
            chrono::Weekday::Fri => Weekday::Fri,
            chrono::Weekday::Sat => Weekday::Sat,
            chrono::Weekday::Sun => Weekday::Sun,
        }
    }

    pub fn today() -> Weekday {
        Weekday::from_chrono(chrono::Local::now().weekday())
    }
}

impl FromStr for Weekday {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "mon" | "monday" => Ok(Weekday::Mon),
            "tue" | "tuesday" => Ok(Weekday::Tue),
            "wed" | "wednesday" => Ok(Weekday::Wed),
            "thu" | "thursday" => Ok(Weekday::Thu),
            "fri" | "friday" => Ok(Weekday::Fri),
            "sat" | "saturday" => Ok(Weekday::Sat),
            "sun" | "sunday" => Ok(Weekday::Sun),
            other => bail!("unknown weekday: {other}"),
        }
    }
}

/// A day's training focus label
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Focus {
    Strength,
    Cardio,
    Mobility,
    Recovery,
}

impl Focus {
    pub fn name(&self) -> &'static str {
        match self {
            Focus::Strength => "Strength",
            Focus::Cardio => "Cardio",
            Focus::Mobility => "Mobility",
            Focus::Recovery => "Recovery",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Energy {
    High,
    Moderate,
    Low,
}

impl Energy {
    pub fn name(&self) -> &'static str {
        match self {
            Energy::High => "High",
            Energy::Moderate => "Moderate",
            Energy::Low => "Low",
        }
    }
}

/// Intended time-of-day slot for a day's training
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Anchor {
    Am,
    Midday,
    Pm,
}

impl Anchor {
    pub fn name(&self) -> &'static str {
        match self {
            Anchor::Am => "AM",
            Anchor::Midday => "Midday",
            Anchor::Pm => "PM",
        }
    }
}

/// Energy strategy presets that select the focus rotation pool
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub enum Strategy {
    Balanced,
    Push,
    Recovery,
}

impl Strategy {
    pub fn name(&self) -> &'static str {
        match self {
            Strategy::Balanced => "Balanced",
            Strategy::Push => "Push",
            Strategy::Recovery => "Recovery",
        }
    }

    pub fn all() -> &'static [Strategy] {
        &[Strategy::Balanced, Strategy::Push, Strategy::Recovery]
    }

    /// Ordered, cyclic focus pool the strategy rotates through
    pub fn focus_pool(&self) -> &'static [Focus] {
        match self {
            Strategy::Balanced => &[Focus::Strength, Focus::Cardio, Focus::Mobility],
            Strategy::Push => &[Focus::Strength, Focus::Cardio],
            Strategy::Recovery => &[Focus::Mobility, Focus::Recovery],
        }
    }

    /// Next preset in display order (for cycling in the TUI)
    pub fn next(&self) -> Strategy {
        match self {
            Strategy::Balanced => Strategy::Push,
            Strategy::Push => Strategy::Recovery,
            Strategy::Recovery => Strategy::Balanced,
        }
    }
}

impl FromStr for Strategy {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "balanced" => Ok(Strategy::Balanced),
            "push" => Ok(Strategy::Push),
            "recovery" => Ok(Strategy::Recovery),
            other => bail!("unknown strategy: {other}"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl FromStr for Direction {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "forward" | "fwd" => Ok(Direction::Forward),
            "backward" | "back" => Ok(Direction::Backward),
            other => bail!("unknown direction: {other}"),
        }
    }
}

/// One day of the week's plan
#[derive(Debug, Clone, Serialize)]
pub struct DayPlan {
    pub id: &'static str,
    pub day: Weekday,
    pub focus: Focus,
    pub energy: Energy,
    pub anchor: Anchor,
    /// Catalog references only; never two entries with the same id
    pub workouts: Vec<&'static Workout>,
    pub notes: String,
    pub is_rest_day: bool,
}

/// An immutable snapshot of the full week
#[derive(Debug, Clone, Serialize)]
pub struct Schedule {
    days: Vec<DayPlan>,
}

impl Schedule {
    /// The default week assignment used at session start.
    /// Fails only if a referenced workout id is missing from the catalog,
    /// which is a configuration mistake and grounds to stop immediately.
    pub fn default_week() -> Result<Schedule> {
        let pick = |id: &str| -> Result<&'static Workout> {
            find_workout(id).ok_or_else(|| anyhow!("workout '{}' not in catalog", id))
        };

        let days = vec![
            DayPlan {
                id: "mon",
                day: Weekday::Mon,
                focus: Focus::Strength,
                energy: Energy::High,
                anchor: Anchor::Am,
                workouts: vec![pick("w2")?, pick("w7")?],
                notes: "Emphasize eccentric tempo; track pushing numbers.".to_string(),
                is_rest_day: false,
            },
            DayPlan {
                id: "tue",
                day: Weekday::Tue,
                focus: Focus::Cardio,
                energy: Energy::Moderate,
                anchor: Anchor::Pm,
                workouts: vec![pick("w3")?],
                notes: "Keep HR in tempo zone; post-run mobility for calves.".to_string(),
                is_rest_day: false,
            },
            DayPlan {
                id: "wed",
                day: Weekday::Wed,
                focus: Focus::Mobility,
                energy: Energy::Low,
                anchor: Anchor::Midday,
                workouts: vec![pick("w4")?, pick("w8")?],
                notes: "Perfect day for restorative flow and breath work.".to_string(),
                is_rest_day: false,
            },
            DayPlan {
                id: "thu",
                day: Weekday::Thu,
                focus: Focus::Strength,
                energy: Energy::High,
                anchor: Anchor::Am,
                workouts: vec![pick("w5")?],
                notes: "Focus on explosive intent; video KB swing technique.".to_string(),
                is_rest_day: false,
            },
            DayPlan {
                id: "fri",
                day: Weekday::Fri,
                focus: Focus::Cardio,
                energy: Energy::Moderate,
                anchor: Anchor::Am,
                workouts: vec![pick("w6")?],
                notes: "Zone 2 ride; sit tall and keep cadence above 90.".to_string(),
                is_rest_day: false,
            },
            DayPlan {
                id: "sat",
                day: Weekday::Sat,
                focus: Focus::Strength,
                energy: Energy::Moderate,
                anchor: Anchor::Midday,
                workouts: vec![pick("w1")?],
                notes: "Finish with optional core session if energy allows.".to_string(),
                is_rest_day: false,
            },
            DayPlan {
                id: "sun",
                day: Weekday::Sun,
                focus: Focus::Recovery,
                energy: Energy::Low,
                anchor: Anchor::Pm,
                workouts: vec![],
                notes: "Hydrate, long walk outside, stretch hamstrings.".to_string(),
                is_rest_day: true,
            },
        ];

        Ok(Schedule { days })
    }

    pub fn days(&self) -> &[DayPlan] {
        &self.days
    }

    pub fn day(&self, day_id: &str) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.id == day_id)
    }

    pub fn day_for(&self, weekday: Weekday) -> Option<&DayPlan> {
        self.days.iter().find(|d| d.day == weekday)
    }

    /// Add a workout to a day. Forces the rest flag off and appends unless
    /// the workout id is already assigned (idempotent). Unknown `day_id`
    /// returns the snapshot unchanged.
    pub fn add_workout(&self, day_id: &str, workout: &'static Workout) -> Schedule {
        self.map_day(day_id, |day| {
            day.is_rest_day = false;
            if !day.workouts.iter().any(|w| w.id == workout.id) {
                day.workouts.push(workout);
            }
        })
    }

    /// Remove a workout from a day. The rest flag is re-evaluated from the
    /// resulting sequence even when nothing matched: emptying a day marks
    /// it as rest. The reverse is not derived - `add_workout` clears the
    /// flag explicitly instead. Intentional asymmetry, kept as designed.
    pub fn remove_workout(&self, day_id: &str, workout_id: &str) -> Schedule {
        self.map_day(day_id, |day| {
            day.workouts.retain(|w| w.id != workout_id);
            day.is_rest_day = day.workouts.is_empty();
        })
    }

    /// Flip a day's rest flag. Entering rest clears the workouts; leaving
    /// rest does not restore them.
    pub fn toggle_rest(&self, day_id: &str) -> Schedule {
        self.map_day(day_id, |day| {
            day.is_rest_day = !day.is_rest_day;
            if day.is_rest_day {
                day.workouts.clear();
            }
        })
    }

    /// Rotate every day's focus one step through the strategy's pool.
    /// A focus not present in the pool normalizes to the pool's first
    /// entry before the offset is applied. Workouts, rest flags, energy,
    /// and anchors are untouched.
    pub fn rotate_focus(&self, direction: Direction, strategy: Strategy) -> Schedule {
        let pool = strategy.focus_pool();
        let days = self
            .days
            .iter()
            .map(|day| {
                let current = pool.iter().position(|f| *f == day.focus).unwrap_or(0);
                let offset = match direction {
                    Direction::Forward => 1,
                    Direction::Backward => pool.len() - 1,
                };
                let next = pool[(current + offset) % pool.len()];
                DayPlan {
                    focus: next,
                    ..day.clone()
                }
            })
            .collect();
        Schedule { days }
    }

    /// Apply `f` to the named day, cloning everything else by value.
    fn map_day(&self, day_id: &str, f: impl Fn(&mut DayPlan)) -> Schedule {
        let days = self
            .days
            .iter()
            .map(|day| {
                let mut day = day.clone();
                if day.id == day_id {
                    f(&mut day);
                }
                day
            })
            .collect();
        Schedule { days }
    }
}

/// Current planner state: the schedule snapshot plus UI selection.
/// Each operation swaps the snapshot for the one the pure ops return.
pub struct Planner {
    schedule: Schedule,
    pub active_day: Weekday,
    pub focus_filter: FocusFilter,
    pub strategy: Strategy,
}

impl Planner {
    pub fn new() -> Result<Planner> {
        Ok(Planner {
            schedule: Schedule::default_week()?,
            active_day: Weekday::Mon,
            focus_filter: FocusFilter::All,
            strategy: Strategy::Balanced,
        })
    }

    pub fn schedule(&self) -> &Schedule {
        &self.schedule
    }

    pub fn active_plan(&self) -> &DayPlan {
        // A schedule always carries all seven weekdays
        self.schedule
            .day_for(self.active_day)
            .unwrap_or(&self.schedule.days()[0])
    }

    pub fn add_workout(&mut self, day_id: &str, workout: &'static Workout) {
        debug!(day_id, workout = workout.id, "add workout");
        self.schedule = self.schedule.add_workout(day_id, workout);
    }

    pub fn remove_workout(&mut self, day_id: &str, workout_id: &str) {
        debug!(day_id, workout_id, "remove workout");
        self.schedule = self.schedule.remove_workout(day_id, workout_id);
    }

    pub fn toggle_rest(&mut self, day_id: &str) {
        debug!(day_id, "toggle rest");
        self.schedule = self.schedule.toggle_rest(day_id);
    }

    pub fn shift_week(&mut self, direction: Direction) {
        debug!(strategy = self.strategy.name(), "shift week");
        self.schedule = self.schedule.rotate_focus(direction, self.strategy);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::find_workout;

    fn week() -> Schedule {
        Schedule::default_week().unwrap()
    }

    fn ids(schedule: &Schedule, day_id: &str) -> Vec<&'static str> {
        schedule
            .day(day_id)
            .unwrap()
            .workouts
            .iter()
            .map(|w| w.id)
            .collect()
    }

    #[test]
    fn test_default_week_shape() {
        let schedule = week();
        assert_eq!(schedule.days().len(), 7);
        for weekday in Weekday::all() {
            let matching = schedule.days().iter().filter(|d| d.day == *weekday).count();
            assert_eq!(matching, 1, "{} should appear once", weekday.label());
        }
        let sunday = schedule.day("sun").unwrap();
        assert!(sunday.is_rest_day);
        assert!(sunday.workouts.is_empty());
    }

    #[test]
    fn test_add_workout_appends() {
        let schedule = week().add_workout("tue", find_workout("w1").unwrap());
        assert_eq!(ids(&schedule, "tue"), vec!["w3", "w1"]);
    }

    #[test]
    fn test_add_workout_is_idempotent() {
        let workout = find_workout("w1").unwrap();
        let once = week().add_workout("tue", workout);
        let twice = once.add_workout("tue", workout);
        assert_eq!(ids(&once, "tue"), ids(&twice, "tue"));
    }

    #[test]
    fn test_add_workout_clears_rest_flag() {
        let schedule = week().add_workout("sun", find_workout("w8").unwrap());
        let sunday = schedule.day("sun").unwrap();
        assert!(!sunday.is_rest_day);
        assert_eq!(ids(&schedule, "sun"), vec!["w8"]);
    }

    #[test]
    fn test_add_workout_unknown_day_is_identity() {
        let before = week();
        let after = before.add_workout("someday", find_workout("w1").unwrap());
        assert_eq!(after.days().len(), 7);
        for (a, b) in after.days().iter().zip(before.days().iter()) {
            assert_eq!(ids(&after, a.id), ids(&before, b.id));
            assert_eq!(a.is_rest_day, b.is_rest_day);
        }
    }

    #[test]
    fn test_add_does_not_touch_other_days() {
        let schedule = week().add_workout("tue", find_workout("w1").unwrap());
        assert_eq!(ids(&schedule, "mon"), vec!["w2", "w7"]);
        assert_eq!(ids(&schedule, "wed"), vec!["w4", "w8"]);
    }

    #[test]
    fn test_remove_workout() {
        let schedule = week().remove_workout("mon", "w2");
        assert_eq!(ids(&schedule, "mon"), vec!["w7"]);
        assert!(!schedule.day("mon").unwrap().is_rest_day);
    }

    #[test]
    fn test_remove_twice_is_noop() {
        let once = week().remove_workout("mon", "w2");
        let twice = once.remove_workout("mon", "w2");
        assert_eq!(ids(&once, "mon"), ids(&twice, "mon"));
        assert_eq!(
            once.day("mon").unwrap().is_rest_day,
            twice.day("mon").unwrap().is_rest_day
        );
    }

    #[test]
    fn test_remove_to_empty_marks_rest() {
        let schedule = week().remove_workout("tue", "w3");
        let tuesday = schedule.day("tue").unwrap();
        assert!(tuesday.workouts.is_empty());
        assert!(tuesday.is_rest_day);
    }

    #[test]
    fn test_remove_missing_id_still_reevaluates_rest() {
        // Leave rest mode without adding anything back, then remove a
        // workout that was never there: the empty sequence re-marks rest.
        let schedule = week().toggle_rest("sun").remove_workout("sun", "w1");
        assert!(schedule.day("sun").unwrap().is_rest_day);
    }

    #[test]
    fn test_toggle_rest_clears_workouts() {
        let schedule = week().toggle_rest("mon");
        let monday = schedule.day("mon").unwrap();
        assert!(monday.is_rest_day);
        assert!(monday.workouts.is_empty());
    }

    #[test]
    fn test_toggle_rest_roundtrips_flag_not_workouts() {
        let original = week();
        let toggled = original.toggle_rest("mon").toggle_rest("mon");
        let monday = toggled.day("mon").unwrap();
        assert_eq!(monday.is_rest_day, original.day("mon").unwrap().is_rest_day);
        // Clearing on rest is not reversible
        assert!(monday.workouts.is_empty());
    }

    #[test]
    fn test_rotate_focus_balanced_forward() {
        let schedule = week().rotate_focus(Direction::Forward, Strategy::Balanced);
        // Mon was Strength -> Cardio, Tue was Cardio -> Mobility
        assert_eq!(schedule.day("mon").unwrap().focus, Focus::Cardio);
        assert_eq!(schedule.day("tue").unwrap().focus, Focus::Mobility);
        // Wed was Mobility -> wraps to Strength
        assert_eq!(schedule.day("wed").unwrap().focus, Focus::Strength);
    }

    #[test]
    fn test_rotate_focus_roundtrip_for_pool_members() {
        let original = week();
        let back = original
            .rotate_focus(Direction::Forward, Strategy::Balanced)
            .rotate_focus(Direction::Backward, Strategy::Balanced);
        for day in original.days() {
            // Sunday's Recovery focus is not in the Balanced pool and
            // normalizes instead of round-tripping
            if day.focus == Focus::Recovery {
                continue;
            }
            assert_eq!(back.day(day.id).unwrap().focus, day.focus);
        }
    }

    #[test]
    fn test_rotate_focus_normalizes_unknown_focus() {
        // Sunday is Recovery, absent from the Balanced pool: treated as
        // pool index 0 (Strength), so forward lands on Cardio.
        let schedule = week().rotate_focus(Direction::Forward, Strategy::Balanced);
        assert_eq!(schedule.day("sun").unwrap().focus, Focus::Cardio);
    }

    #[test]
    fn test_rotate_focus_push_pool_both_directions() {
        // Pool length 2: forward and backward from Strength both land on Cardio
        let forward = week().rotate_focus(Direction::Forward, Strategy::Push);
        let backward = week().rotate_focus(Direction::Backward, Strategy::Push);
        assert_eq!(forward.day("mon").unwrap().focus, Focus::Cardio);
        assert_eq!(backward.day("mon").unwrap().focus, Focus::Cardio);
    }

    #[test]
    fn test_rotate_focus_touches_only_focus() {
        let original = week();
        let rotated = original.rotate_focus(Direction::Forward, Strategy::Recovery);
        for (day, was) in rotated.days().iter().zip(original.days().iter()) {
            assert_eq!(ids(&rotated, day.id), ids(&original, was.id));
            assert_eq!(day.is_rest_day, was.is_rest_day);
            assert_eq!(day.energy, was.energy);
            assert_eq!(day.anchor, was.anchor);
        }
    }

    #[test]
    fn test_planner_swaps_snapshots() {
        let mut planner = Planner::new().unwrap();
        planner.remove_workout("tue", "w3");
        assert!(planner.schedule().day("tue").unwrap().is_rest_day);
        planner.add_workout("tue", find_workout("w6").unwrap());
        assert!(!planner.schedule().day("tue").unwrap().is_rest_day);
    }

    #[test]
    fn test_today_is_a_schedule_weekday() {
        let today = Weekday::today();
        assert!(Weekday::all().contains(&today));
        assert_eq!(
            today,
            Weekday::from_chrono(chrono::Local::now().weekday())
        );
    }

    #[test]
    fn test_weekday_from_str() {
        assert_eq!("wed".parse::<Weekday>().unwrap(), Weekday::Wed);
        assert_eq!("Sunday".parse::<Weekday>().unwrap(), Weekday::Sun);
        assert!("someday".parse::<Weekday>().is_err());
    }
}

//! Workout catalog - static library of available sessions

use std::str::FromStr;

use anyhow::{bail, Result};
use serde::Serialize;

/// Focus areas a workout can target
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum FocusArea {
    Strength,
    Cardio,
    Mobility,
    Recovery,
    Mindfulness,
}

impl FocusArea {
    pub fn name(&self) -> &'static str {
        match self {
            FocusArea::Strength => "Strength",
            FocusArea::Cardio => "Cardio",
            FocusArea::Mobility => "Mobility",
            FocusArea::Recovery => "Recovery",
            FocusArea::Mindfulness => "Mindfulness",
        }
    }

    /// All focus areas for iteration
    pub fn all() -> &'static [FocusArea] {
        &[
            FocusArea::Strength,
            FocusArea::Cardio,
            FocusArea::Mobility,
            FocusArea::Recovery,
            FocusArea::Mindfulness,
        ]
    }
}

impl FromStr for FocusArea {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "strength" => Ok(FocusArea::Strength),
            "cardio" => Ok(FocusArea::Cardio),
            "mobility" => Ok(FocusArea::Mobility),
            "recovery" => Ok(FocusArea::Recovery),
            "mindfulness" => Ok(FocusArea::Mindfulness),
            other => bail!("unknown focus area: {other}"),
        }
    }
}

/// Library filter: either everything or a single focus area
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusFilter {
    All,
    Only(FocusArea),
}

impl FocusFilter {
    pub fn label(&self) -> &'static str {
        match self {
            FocusFilter::All => "All",
            FocusFilter::Only(area) => area.name(),
        }
    }

    /// Next filter in display order (All -> each area -> All)
    pub fn next(&self) -> FocusFilter {
        let areas = FocusArea::all();
        match self {
            FocusFilter::All => FocusFilter::Only(areas[0]),
            FocusFilter::Only(area) => {
                let idx = areas.iter().position(|a| a == area).unwrap_or(0);
                match areas.get(idx + 1) {
                    Some(next) => FocusFilter::Only(*next),
                    None => FocusFilter::All,
                }
            }
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, Hash)]
pub enum Equipment {
    Bodyweight,
    Dumbbells,
    Kettlebell,
    Bands,
    Bike,
    Treadmill,
    Mat,
}

impl Equipment {
    pub fn name(&self) -> &'static str {
        match self {
            Equipment::Bodyweight => "Bodyweight",
            Equipment::Dumbbells => "Dumbbells",
            Equipment::Kettlebell => "Kettlebell",
            Equipment::Bands => "Bands",
            Equipment::Bike => "Bike",
            Equipment::Treadmill => "Treadmill",
            Equipment::Mat => "Mat",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq, PartialOrd, Ord)]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub fn name(&self) -> &'static str {
        match self {
            Difficulty::Beginner => "Beginner",
            Difficulty::Intermediate => "Intermediate",
            Difficulty::Advanced => "Advanced",
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Workout {
    pub id: &'static str,
    pub name: &'static str,
    /// Non-empty; the first entry is the primary tag for display
    pub focus: &'static [FocusArea],
    pub duration_mins: u32,
    pub difficulty: Difficulty,
    pub equipment: &'static [Equipment],
    pub description: &'static str,
    pub calories: Option<u32>,
}

impl Workout {
    pub fn primary_focus(&self) -> FocusArea {
        self.focus[0]
    }
}

/// The fixed workout library (not configurable at runtime)
pub const WORKOUT_LIBRARY: &[Workout] = &[
    Workout {
        id: "w1",
        name: "Full-Body Circuit",
        focus: &[FocusArea::Strength, FocusArea::Cardio],
        duration_mins: 35,
        difficulty: Difficulty::Intermediate,
        equipment: &[Equipment::Bodyweight],
        description: "Rotational bodyweight circuit with compound moves and active recovery blocks.",
        calories: Some(290),
    },
    Workout {
        id: "w2",
        name: "Strength Upper Split",
        focus: &[FocusArea::Strength],
        duration_mins: 45,
        difficulty: Difficulty::Intermediate,
        equipment: &[Equipment::Dumbbells],
        description: "Push/pull supersets with tempo work and accessory isolation finishers.",
        calories: Some(360),
    },
    Workout {
        id: "w3",
        name: "Interval Run",
        focus: &[FocusArea::Cardio],
        duration_mins: 30,
        difficulty: Difficulty::Beginner,
        equipment: &[Equipment::Treadmill],
        description: "5k based run with alternating base, tempo, and threshold intervals.",
        calories: Some(310),
    },
    Workout {
        id: "w4",
        name: "Mobility Flow",
        focus: &[FocusArea::Mobility, FocusArea::Recovery],
        duration_mins: 25,
        difficulty: Difficulty::Beginner,
        equipment: &[Equipment::Mat],
        description: "Breath-led mobility flow to improve thoracic rotation and hip stability.",
        calories: None,
    },
    Workout {
        id: "w5",
        name: "Lower Body Power",
        focus: &[FocusArea::Strength],
        duration_mins: 50,
        difficulty: Difficulty::Advanced,
        equipment: &[Equipment::Kettlebell, Equipment::Bands],
        description: "Contrast training session with KB swings, plyo lunges, and isometric holds.",
        calories: Some(420),
    },
    Workout {
        id: "w6",
        name: "Low-Impact Conditioning",
        focus: &[FocusArea::Cardio, FocusArea::Mobility],
        duration_mins: 40,
        difficulty: Difficulty::Beginner,
        equipment: &[Equipment::Bike],
        description: "Zone 2 conditioning ride paired with mobility resets every 8 minutes.",
        calories: Some(280),
    },
    Workout {
        id: "w7",
        name: "Core + Stability",
        focus: &[FocusArea::Mobility, FocusArea::Strength],
        duration_mins: 20,
        difficulty: Difficulty::Beginner,
        equipment: &[Equipment::Bodyweight, Equipment::Bands],
        description: "Core strength and anti-rotation series with balance drills.",
        calories: None,
    },
    Workout {
        id: "w8",
        name: "Guided Recovery",
        focus: &[FocusArea::Recovery, FocusArea::Mindfulness],
        duration_mins: 18,
        difficulty: Difficulty::Beginner,
        equipment: &[Equipment::Mat],
        description: "Box breathing, guided stretch holds, and low-impact tissue release.",
        calories: None,
    },
];

pub fn find_workout(id: &str) -> Option<&'static Workout> {
    WORKOUT_LIBRARY.iter().find(|w| w.id == id)
}

/// Filter the catalog by focus area, preserving catalog order.
/// `FocusFilter::All` returns every entry unchanged.
pub fn filter_by_focus(
    catalog: &'static [Workout],
    filter: FocusFilter,
) -> Vec<&'static Workout> {
    match filter {
        FocusFilter::All => catalog.iter().collect(),
        FocusFilter::Only(area) => catalog
            .iter()
            .filter(|w| w.focus.contains(&area))
            .collect(),
    }
}

/// Sanity-check the catalog at startup. The library is static, so any
/// failure here is a build-time mistake, not a runtime condition.
pub fn validate_library() -> Result<()> {
    for (i, workout) in WORKOUT_LIBRARY.iter().enumerate() {
        if workout.id.is_empty() {
            bail!("catalog entry {} has an empty id", i);
        }
        if workout.focus.is_empty() {
            bail!("workout '{}' has no focus tags", workout.id);
        }
        if workout.duration_mins == 0 {
            bail!("workout '{}' has zero duration", workout.id);
        }
        if workout.calories == Some(0) {
            bail!("workout '{}' has a zero calorie estimate", workout.id);
        }
        let duplicate = WORKOUT_LIBRARY[..i].iter().any(|w| w.id == workout.id);
        if duplicate {
            bail!("duplicate workout id '{}'", workout.id);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_library_is_valid() {
        validate_library().unwrap();
    }

    #[test]
    fn test_find_workout() {
        let workout = find_workout("w3").unwrap();
        assert_eq!(workout.name, "Interval Run");
        assert_eq!(workout.duration_mins, 30);
        assert!(find_workout("w99").is_none());
    }

    #[test]
    fn test_filter_all_is_identity() {
        let filtered = filter_by_focus(WORKOUT_LIBRARY, FocusFilter::All);
        assert_eq!(filtered.len(), WORKOUT_LIBRARY.len());
        for (got, expected) in filtered.iter().zip(WORKOUT_LIBRARY.iter()) {
            assert_eq!(got.id, expected.id);
        }
    }

    #[test]
    fn test_filter_by_area_keeps_order() {
        let strength = filter_by_focus(WORKOUT_LIBRARY, FocusFilter::Only(FocusArea::Strength));
        let ids: Vec<_> = strength.iter().map(|w| w.id).collect();
        assert_eq!(ids, vec!["w1", "w2", "w5", "w7"]);
    }

    #[test]
    fn test_filter_matches_any_tag() {
        // w8 is the only entry tagged Mindfulness, and not as primary
        let mindful = filter_by_focus(WORKOUT_LIBRARY, FocusFilter::Only(FocusArea::Mindfulness));
        assert_eq!(mindful.len(), 1);
        assert_eq!(mindful[0].id, "w8");
    }

    #[test]
    fn test_filter_cycle_returns_to_all() {
        let mut filter = FocusFilter::All;
        for _ in 0..=FocusArea::all().len() {
            filter = filter.next();
        }
        assert_eq!(filter, FocusFilter::All);
    }

    #[test]
    fn test_focus_area_from_str() {
        assert_eq!("cardio".parse::<FocusArea>().unwrap(), FocusArea::Cardio);
        assert!("yoga".parse::<FocusArea>().is_err());
    }
}

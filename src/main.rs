//! weekfit - Weekly workout planner
//!
//! Session-only planning: every invocation starts from the default week.

use anyhow::Result;
use clap::{Parser, Subcommand};

use weekfit::catalog::{self, FocusArea, FocusFilter, WORKOUT_LIBRARY};
use weekfit::schedule::{Direction, Schedule, Strategy, Weekday};
use weekfit::summary::{day_duration, focus_counts, format_duration, total_scheduled_minutes};
use weekfit::tui::App;

#[derive(Parser)]
#[command(name = "weekfit")]
#[command(author, version, about = "Weekly workout planner with a terminal dashboard")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Open the TUI dashboard
    Tui {
        /// Day to start on (defaults to today)
        #[arg(short, long, env = "WEEKFIT_DAY")]
        day: Option<Weekday>,
    },

    /// Print the default week
    Show,

    /// List the workout library
    Library {
        /// Filter by focus area (e.g., "strength")
        #[arg(short, long)]
        focus: Option<FocusArea>,
    },

    /// Add a workout to a day and print the result
    Add {
        /// Day id (e.g., "mon")
        day: String,

        /// Workout id (e.g., "w3")
        workout: String,
    },

    /// Remove a workout from a day and print the result
    Remove {
        /// Day id (e.g., "mon")
        day: String,

        /// Workout id (e.g., "w3")
        workout: String,
    },

    /// Toggle a day's rest flag and print the result
    Rest {
        /// Day id (e.g., "sun")
        day: String,
    },

    /// Rotate every day's focus through the strategy pool
    Shift {
        /// "forward" or "backward"
        direction: Direction,

        /// Rotation strategy: balanced, push, or recovery
        #[arg(short, long, default_value = "balanced")]
        strategy: Strategy,
    },

    /// Show weekly totals and focus split
    Summary,

    /// Dump the schedule and summary as JSON
    Export,
}

fn main() -> Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt::init();

    // The catalog is static; a bad entry should stop everything up front
    catalog::validate_library()?;

    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Tui { day }) => {
            let mut app = App::new(day)?;
            app.run()?;
        }

        Some(Commands::Show) => {
            print_week(&Schedule::default_week()?);
        }

        Some(Commands::Library { focus }) => {
            let filter = match focus {
                Some(area) => FocusFilter::Only(area),
                None => FocusFilter::All,
            };
            for workout in catalog::filter_by_focus(WORKOUT_LIBRARY, filter) {
                let tags: Vec<_> = workout.focus.iter().map(|f| f.name()).collect();
                let gear: Vec<_> = workout.equipment.iter().map(|e| e.name()).collect();
                println!(
                    "{:3} | {:24} | {:9} | {:12} | {} | {}",
                    workout.id,
                    workout.name,
                    format_duration(workout.duration_mins),
                    workout.difficulty.name(),
                    tags.join(", "),
                    if gear.is_empty() { "-".to_string() } else { gear.join(", ") },
                );
                match workout.calories {
                    Some(kcal) => println!("      {} (~{} kcal)", workout.description, kcal),
                    None => println!("      {}", workout.description),
                }
            }
        }

        Some(Commands::Add { day, workout }) => {
            let schedule = Schedule::default_week()?;
            match catalog::find_workout(&workout) {
                Some(w) => {
                    if schedule.day(&day).is_none() {
                        println!("No day '{}' in the week; nothing changed", day);
                    }
                    print_week(&schedule.add_workout(&day, w));
                }
                None => println!("No workout '{}' in the library", workout),
            }
        }

        Some(Commands::Remove { day, workout }) => {
            let schedule = Schedule::default_week()?;
            if schedule.day(&day).is_none() {
                println!("No day '{}' in the week; nothing changed", day);
            }
            print_week(&schedule.remove_workout(&day, &workout));
        }

        Some(Commands::Rest { day }) => {
            let schedule = Schedule::default_week()?;
            if schedule.day(&day).is_none() {
                println!("No day '{}' in the week; nothing changed", day);
            }
            print_week(&schedule.toggle_rest(&day));
        }

        Some(Commands::Shift { direction, strategy }) => {
            let schedule = Schedule::default_week()?.rotate_focus(direction, strategy);
            println!("Strategy: {}", strategy.name());
            print_week(&schedule);
        }

        Some(Commands::Summary) => {
            let schedule = Schedule::default_week()?;
            println!(
                "Scheduled time: {}",
                format_duration(total_scheduled_minutes(&schedule))
            );
            let counts = focus_counts(&schedule);
            let mut split: Vec<_> = counts.iter().collect();
            split.sort_by_key(|(area, _)| area.name());
            println!("Focus split:");
            for (area, count) in split {
                println!("  {:12} {}", area.name(), count);
            }
        }

        Some(Commands::Export) => {
            let schedule = Schedule::default_week()?;
            let export = serde_json::json!({
                "schedule": &schedule,
                "total_minutes": total_scheduled_minutes(&schedule),
                "focus_counts": focus_counts(&schedule)
                    .iter()
                    .map(|(area, count)| (area.name(), *count))
                    .collect::<std::collections::BTreeMap<_, _>>(),
            });
            println!("{}", serde_json::to_string_pretty(&export)?);
        }

        None => {
            // Default: show TUI
            let mut app = App::new(None)?;
            app.run()?;
        }
    }

    Ok(())
}

fn print_week(schedule: &Schedule) {
    println!("{:-<72}", "");
    for day in schedule.days() {
        let plan = if day.is_rest_day {
            "rest".to_string()
        } else {
            let names: Vec<_> = day.workouts.iter().map(|w| w.name).collect();
            format!(
                "{} ({})",
                names.join(", "),
                format_duration(day_duration(&day.workouts))
            )
        };
        println!(
            "{:3} | {:9} | {:8} | {:6} | {}",
            day.day.label(),
            day.focus.name(),
            day.energy.name(),
            day.anchor.name(),
            plan,
        );
    }
    println!("{:-<72}", "");
    println!(
        "Total: {}",
        format_duration(total_scheduled_minutes(schedule))
    );
}

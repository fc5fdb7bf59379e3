use std::path::PathBuf;

use clap::{Parser, Subcommand, value_parser};

/// Upper bound for one logged food's calories.
pub const MAX_LOGGED_CALORIES: i64 = 10_000;
/// Upper bound for one logged food's macro, fiber or weight grams.
pub const MAX_LOGGED_GRAMS: i64 = 5_000;

/// Stage Prep: derive calorie, macro and meal targets from an athlete assessment.
#[derive(Parser, Debug)]
#[command(name = "stage_prep")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Path to the saved plan snapshot.
    #[arg(short, long, default_value = "stage_prep_snapshot.json")]
    pub file: PathBuf,

    /// Path to the meal planner tracker.
    #[arg(short, long, default_value = "meal_planner.json")]
    pub tracker: PathBuf,

    /// Log filter used when RUST_LOG is unset.
    #[arg(long, default_value = "warn")]
    pub log_level: String,
}

#[derive(Subcommand, Debug, Default)]
pub enum Command {
    /// Walk the assessment wizard and generate a plan.
    Assess,

    /// Generate a plan from an assessment form JSON file.
    Analyze {
        /// Path to the assessment form JSON.
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Show the saved plan.
    #[default]
    Show,

    /// Rebuild the saved plan with a new current weight.
    Recalculate {
        /// Current bodyweight in kg.
        #[arg(short, long)]
        weight: f64,
    },

    /// Export the saved plan as CSV.
    Export {
        /// Output CSV path.
        #[arg(long, default_value = "stage_prep_plan.csv")]
        csv: PathBuf,
    },

    /// Log an eaten food against a meal slot.
    Log {
        /// Meal slot: morning, afternoon, evening or night.
        #[arg(short, long)]
        slot: String,

        /// Food name.
        #[arg(short, long)]
        name: String,

        #[arg(long, value_parser = value_parser!(u32).range(0..=MAX_LOGGED_CALORIES))]
        calories: u32,

        #[arg(long, default_value = "0", value_parser = value_parser!(u32).range(0..=MAX_LOGGED_GRAMS))]
        protein: u32,

        #[arg(long, default_value = "0", value_parser = value_parser!(u32).range(0..=MAX_LOGGED_GRAMS))]
        carbs: u32,

        #[arg(long, default_value = "0", value_parser = value_parser!(u32).range(0..=MAX_LOGGED_GRAMS))]
        fats: u32,

        #[arg(long, default_value = "0", value_parser = value_parser!(u32).range(0..=MAX_LOGGED_GRAMS))]
        fiber: u32,

        /// Estimated weight in grams.
        #[arg(long, default_value = "0", value_parser = value_parser!(u32).range(0..=MAX_LOGGED_GRAMS))]
        grams: u32,
    },

    /// Show meal planner progress per slot.
    Tracker,

    /// Clear stored state.
    Reset {
        /// Delete the saved plan snapshot.
        #[arg(long)]
        snapshot: bool,

        /// Reset the meal planner tracker to its defaults.
        #[arg(long)]
        tracker: bool,

        /// Clear logged foods but keep the current meal targets.
        #[arg(long)]
        log: bool,
    },
}

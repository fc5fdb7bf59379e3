pub mod cli;
pub mod error;
pub mod intake;
pub mod interface;
pub mod logging;
pub mod models;
pub mod planner;
pub mod state;

pub use error::{PrepError, Result};
pub use intake::{RawAssessment, validate_assessment};
pub use models::{AssessmentInput, EnergyMacroTargets, GeneratedMeal, MealSlot, StagePrepPlan};
pub use planner::{analyze, analyze_input, build_meal_plan, compute_targets};

pub mod calculations;
pub mod catalog;
pub mod constants;
pub mod meals;

pub use calculations::{
    activity_multiplier, calculate_bmr, compute_targets, phase_adjustment, round_nutrition,
};
pub use catalog::{FOOD_CATALOG, FoodCatalog};
pub use constants::*;
pub use meals::{build_meal_plan, build_meal_plan_with, scale_item, total_nutrition};

use tracing::info;

use crate::error::Result;
use crate::intake::{RawAssessment, validate_assessment};
use crate::models::{AssessmentInput, StagePrepPlan};

/// Compute targets and meals for an already validated input.
pub fn analyze_input(input: AssessmentInput) -> StagePrepPlan {
    let targets = compute_targets(&input);
    let meals = build_meal_plan(&input, &targets);

    info!(
        phase = ?input.phase,
        daily_calories = targets.daily_calories,
        protein = targets.protein_grams,
        carbs = targets.carb_grams,
        fats = targets.fat_grams,
        "stage prep plan generated"
    );

    StagePrepPlan {
        input,
        targets,
        meals,
    }
}

/// Validate a submitted form and produce a full plan.
///
/// Nothing is computed unless validation succeeds.
pub fn analyze(raw: &RawAssessment) -> Result<StagePrepPlan> {
    let input = validate_assessment(raw)?;
    Ok(analyze_input(input))
}

/// Rebuild a plan from its echoed assessment with a new current weight.
///
/// The whole plan is recomputed; nothing from the old one is reused.
pub fn recalculate_with_weight(plan: &StagePrepPlan, weight_kg: f64) -> Result<StagePrepPlan> {
    let mut raw = RawAssessment::from(&plan.input);
    raw.current_weight_kg = weight_kg;
    analyze(&raw)
}

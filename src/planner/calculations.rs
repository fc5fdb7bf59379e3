use tracing::debug;

use crate::models::{AssessmentInput, EnergyMacroTargets, Phase};
use crate::planner::constants::*;

/// Round to the nearest whole number, floored at 0.
#[inline]
pub fn round_nutrition(value: f64) -> u32 {
    value.round().max(0.0) as u32
}

/// Round to a fixed number of decimal places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// Basal metabolic rate (Mifflin-St Jeor, male coefficients), unrounded.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32) -> f64 {
    BMR_WEIGHT_COEFF * weight_kg + BMR_HEIGHT_COEFF * height_cm - BMR_AGE_COEFF * age as f64
        + BMR_CONSTANT
}

/// Activity multiplier from total weekly training plus cardio sessions.
///
/// Step function: <=4 → 1.45, <=7 → 1.60, <=10 → 1.72, otherwise 1.82.
pub fn activity_multiplier(sessions: u32) -> f64 {
    ACTIVITY_STEPS
        .iter()
        .find(|(upper, _)| sessions <= *upper)
        .map(|(_, mult)| *mult)
        .unwrap_or(ACTIVITY_MULT_MAX)
}

/// Daily calorie adjustment applied to TDEE for a phase.
///
/// Cutting deepens from -250 to -550 kcal as fat-loss priority goes 0 → 100.
pub fn phase_adjustment(phase: Phase, fat_loss_priority: f64) -> f64 {
    match phase {
        Phase::Bulking => BULKING_SURPLUS_KCAL,
        Phase::PeakWeek => -PEAK_WEEK_DEFICIT_KCAL,
        Phase::Cutting => {
            -CUTTING_BASE_DEFICIT_KCAL
                - (fat_loss_priority / 100.0 * CUTTING_PRIORITY_DEFICIT_KCAL).round()
        }
    }
}

/// Carb grams filling whatever calories protein and fat leave over.
///
/// Floors at 0 when protein and fat already exceed the budget.
pub fn remaining_carb_grams(daily_calories: u32, protein_grams: u32, fat_grams: u32) -> u32 {
    let left = daily_calories as f64
        - protein_grams as f64 * KCAL_PER_GRAM_PROTEIN
        - fat_grams as f64 * KCAL_PER_GRAM_FAT;
    round_nutrition(left / KCAL_PER_GRAM_CARBS)
}

/// Percentage of the reference protein intake that the target covers.
pub fn muscle_retention_score(protein_grams: u32, weight_kg: f64) -> u32 {
    let reference = (weight_kg * RETENTION_PROTEIN_PER_KG).max(1.0);
    round_nutrition(protein_grams as f64 / reference * 100.0)
}

/// Projected weekly fat change in kg (negative when in surplus), 2 decimals.
pub fn fat_loss_rate_per_week(tdee: f64, daily_calories: u32) -> f64 {
    round_to((tdee - daily_calories as f64) / KCAL_PER_KG_FAT, 2)
}

/// Carb-load and water guidance text for a phase.
pub fn phase_guidance(phase: Phase) -> (&'static str, &'static str) {
    match phase {
        Phase::PeakWeek => (PEAK_WEEK_CARB_LOAD, PEAK_WEEK_WATER),
        Phase::Bulking | Phase::Cutting => (DEFAULT_CARB_LOAD, DEFAULT_WATER),
    }
}

/// Derive energy and macro targets from a validated assessment.
///
/// Intermediate BMR and TDEE stay unrounded; only reported figures are
/// rounded.
pub fn compute_targets(input: &AssessmentInput) -> EnergyMacroTargets {
    let weight = input.current_weight_kg;

    let bmr = calculate_bmr(weight, input.height_cm, input.age);
    let multiplier = activity_multiplier(input.total_sessions());
    let tdee = bmr * multiplier;

    let adjustment = phase_adjustment(input.phase, input.fat_loss_priority);
    let daily_calories = round_nutrition(tdee + adjustment);

    let factors = macro_factors(input.phase);
    let protein_grams = round_nutrition(weight * factors.protein_per_kg);
    let fat_grams = round_nutrition(weight * factors.fats_per_kg);
    let carb_grams = remaining_carb_grams(daily_calories, protein_grams, fat_grams);

    let (carb_load, water) = phase_guidance(input.phase);

    debug!(
        bmr,
        multiplier,
        tdee,
        adjustment,
        daily_calories,
        protein_grams,
        carb_grams,
        fat_grams,
        "computed energy targets"
    );

    EnergyMacroTargets {
        bmr: round_nutrition(bmr),
        tdee: round_nutrition(tdee),
        daily_calories,
        protein_grams,
        carb_grams,
        fat_grams,
        confidence_score: CONFIDENCE_SCORE,
        muscle_retention_score: muscle_retention_score(protein_grams, weight),
        fat_loss_rate_per_week_kg: fat_loss_rate_per_week(tdee, daily_calories),
        carb_load_guidance: carb_load.to_string(),
        water_guidance: water.to_string(),
    }
}

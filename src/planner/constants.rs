use crate::models::{MealSlot, Phase};

// ─────────────────────────────────────────────────────────────────────────────
// Energy expenditure
// ─────────────────────────────────────────────────────────────────────────────

/// Mifflin-St Jeor coefficients (male variant; the model has no sex field).
pub const BMR_WEIGHT_COEFF: f64 = 10.0;
pub const BMR_HEIGHT_COEFF: f64 = 6.25;
pub const BMR_AGE_COEFF: f64 = 5.0;
pub const BMR_CONSTANT: f64 = 5.0;

/// Activity multiplier steps: (inclusive upper bound on weekly sessions, multiplier).
pub const ACTIVITY_STEPS: [(u32, f64); 3] = [(4, 1.45), (7, 1.60), (10, 1.72)];

/// Multiplier once weekly sessions exceed every step.
pub const ACTIVITY_MULT_MAX: f64 = 1.82;

// ─────────────────────────────────────────────────────────────────────────────
// Phase policy
// ─────────────────────────────────────────────────────────────────────────────

pub const BULKING_SURPLUS_KCAL: f64 = 250.0;
pub const PEAK_WEEK_DEFICIT_KCAL: f64 = 100.0;

/// Cutting deficit is the base plus up to the scaled amount at fat-loss priority 100.
pub const CUTTING_BASE_DEFICIT_KCAL: f64 = 250.0;
pub const CUTTING_PRIORITY_DEFICIT_KCAL: f64 = 300.0;

/// Grams per kg of bodyweight.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MacroFactors {
    pub protein_per_kg: f64,
    pub fats_per_kg: f64,
}

pub fn macro_factors(phase: Phase) -> MacroFactors {
    match phase {
        Phase::Bulking => MacroFactors {
            protein_per_kg: 2.0,
            fats_per_kg: 0.9,
        },
        Phase::PeakWeek => MacroFactors {
            protein_per_kg: 2.2,
            fats_per_kg: 0.7,
        },
        Phase::Cutting => MacroFactors {
            protein_per_kg: 2.4,
            fats_per_kg: 0.75,
        },
    }
}

/// Rice portion multiplier.
pub fn carb_bias(phase: Phase) -> f64 {
    match phase {
        Phase::PeakWeek => 1.12,
        Phase::Bulking => 1.06,
        Phase::Cutting => 1.0,
    }
}

pub const KCAL_PER_GRAM_PROTEIN: f64 = 4.0;
pub const KCAL_PER_GRAM_CARBS: f64 = 4.0;
pub const KCAL_PER_GRAM_FAT: f64 = 9.0;

// ─────────────────────────────────────────────────────────────────────────────
// Informational metrics
// ─────────────────────────────────────────────────────────────────────────────

/// Placeholder, not statistically derived.
pub const CONFIDENCE_SCORE: u32 = 92;

/// Protein reference (g/kg) that scores 100% muscle retention.
pub const RETENTION_PROTEIN_PER_KG: f64 = 2.2;

pub const KCAL_PER_KG_FAT: f64 = 7700.0;

pub const PEAK_WEEK_CARB_LOAD: &str =
    "Front-load carbs 3 days out, then taper by 20% before show day.";
pub const DEFAULT_CARB_LOAD: &str =
    "Use higher carbs on heavy training days and reduce 15% on rest days.";
pub const PEAK_WEEK_WATER: &str =
    "Keep water stable first, then controlled taper in final 36 hours.";
pub const DEFAULT_WATER: &str = "Maintain 4-5L daily with sodium consistency for fullness.";

// ─────────────────────────────────────────────────────────────────────────────
// Meal slots
// ─────────────────────────────────────────────────────────────────────────────

/// Share of daily calories per slot, in [`MealSlot::ALL`] order.
pub const SLOT_CALORIE_RATIOS: [f64; 4] = [0.26, 0.34, 0.14, 0.26];

/// Fiber estimate as a fraction of total meal grams.
pub const FIBER_PER_GRAM: f64 = 0.03;

pub fn slot_calorie_ratio(slot: MealSlot) -> f64 {
    match slot {
        MealSlot::Morning => SLOT_CALORIE_RATIOS[0],
        MealSlot::Afternoon => SLOT_CALORIE_RATIOS[1],
        MealSlot::Evening => SLOT_CALORIE_RATIOS[2],
        MealSlot::Night => SLOT_CALORIE_RATIOS[3],
    }
}

pub fn budget_alternative(slot: MealSlot) -> &'static str {
    match slot {
        MealSlot::Morning => "Switch whey with milk + soy chunks for better value.",
        MealSlot::Afternoon => "Rice + dal + eggs delivers better protein per rupee.",
        MealSlot::Evening => "Roasted chana replaces expensive protein bars.",
        MealSlot::Night => "Roti + paneer/chicken keeps prep sustainable daily.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_ratios_sum_to_one() {
        let sum: f64 = SLOT_CALORIE_RATIOS.iter().sum();
        assert!((sum - 1.0).abs() < 1e-12);
    }

    #[test]
    fn test_slot_ratio_lookup_matches_table() {
        for (i, slot) in MealSlot::ALL.iter().enumerate() {
            assert_eq!(slot_calorie_ratio(*slot), SLOT_CALORIE_RATIOS[i]);
        }
    }

    #[test]
    fn test_activity_steps_ascending() {
        for pair in ACTIVITY_STEPS.windows(2) {
            assert!(pair[0].0 < pair[1].0);
            assert!(pair[0].1 < pair[1].1);
        }
        assert!(ACTIVITY_STEPS[2].1 < ACTIVITY_MULT_MAX);
    }
}

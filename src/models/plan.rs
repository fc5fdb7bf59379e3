use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::{AssessmentInput, EnergyMacroTargets, GeneratedMeal, MealSlot, NutritionTotals};

/// Full engine output: the echoed assessment, its targets, and four meals.
///
/// Stored as `{ form, analysis, meals }`. A plan is never edited in place;
/// recalculation produces a new one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StagePrepPlan {
    #[serde(rename = "form")]
    pub input: AssessmentInput,

    #[serde(rename = "analysis")]
    pub targets: EnergyMacroTargets,

    pub meals: BTreeMap<MealSlot, GeneratedMeal>,
}

impl StagePrepPlan {
    pub fn meal(&self, slot: MealSlot) -> Option<&GeneratedMeal> {
        self.meals.get(&slot)
    }

    /// Calorie budget per slot.
    pub fn meal_targets(&self) -> BTreeMap<MealSlot, u32> {
        self.meals
            .iter()
            .map(|(slot, meal)| (*slot, meal.totals.calories))
            .collect()
    }

    /// Per-slot totals used to seed the meal planner's running totals.
    pub fn meal_base_nutrition(&self) -> BTreeMap<MealSlot, NutritionTotals> {
        self.meals
            .iter()
            .map(|(slot, meal)| (*slot, meal.totals))
            .collect()
    }
}

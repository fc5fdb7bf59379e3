use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::models::{MealSlot, NutritionTotals, Phase, StagePrepPlan};

/// Phase locked in by the most recently applied plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PhaseStrategy {
    pub phase: Phase,
    pub locked_at: DateTime<Utc>,
}

/// A food logged against a meal slot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanEntry {
    pub id: u64,
    pub meal: MealSlot,
    pub food_name: String,
    pub nutrition: NutritionTotals,
    pub added_at: DateTime<Utc>,
}

/// Running per-slot totals: a plan's targets and base nutrition plus
/// whatever has been logged on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealPlannerState {
    meal_targets: BTreeMap<MealSlot, u32>,
    meal_base_nutrition: BTreeMap<MealSlot, NutritionTotals>,
    meal_additions: BTreeMap<MealSlot, NutritionTotals>,
    phase_strategy: Option<PhaseStrategy>,
    /// Newest first.
    scan_history: Vec<ScanEntry>,
    #[serde(default)]
    next_id: u64,
}

/// Seed targets and base nutrition used before any plan is applied:
/// (slot, target kcal, base kcal, protein, carbs, fats).
const DEFAULT_SLOTS: [(MealSlot, u32, u32, u32, u32, u32); 4] = [
    (MealSlot::Morning, 800, 650, 30, 80, 15),
    (MealSlot::Afternoon, 900, 750, 40, 100, 20),
    (MealSlot::Evening, 400, 280, 15, 40, 8),
    (MealSlot::Night, 700, 760, 48, 70, 22),
];

impl Default for MealPlannerState {
    fn default() -> Self {
        let mut meal_targets = BTreeMap::new();
        let mut meal_base_nutrition = BTreeMap::new();
        for (slot, target, calories, protein, carbs, fats) in DEFAULT_SLOTS {
            meal_targets.insert(slot, target);
            meal_base_nutrition.insert(
                slot,
                NutritionTotals {
                    calories,
                    protein,
                    carbs,
                    fats,
                    ..Default::default()
                },
            );
        }

        Self {
            meal_targets,
            meal_base_nutrition,
            meal_additions: MealSlot::ALL
                .into_iter()
                .map(|slot| (slot, NutritionTotals::default()))
                .collect(),
            phase_strategy: None,
            scan_history: Vec::new(),
            next_id: 1,
        }
    }
}

impl MealPlannerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace targets and base nutrition with a plan's and lock its phase.
    pub fn apply_plan(&mut self, plan: &StagePrepPlan) {
        self.apply_plan_at(plan, Utc::now());
    }

    pub fn apply_plan_at(&mut self, plan: &StagePrepPlan, now: DateTime<Utc>) {
        self.meal_targets = plan.meal_targets();
        self.meal_base_nutrition = plan.meal_base_nutrition();
        self.phase_strategy = Some(PhaseStrategy {
            phase: plan.input.phase,
            locked_at: now,
        });

        info!(
            phase = ?plan.input.phase,
            daily_calories = plan.targets.daily_calories,
            "stage prep plan synced to meal planner"
        );
    }

    /// Add nutrition to a slot and record it in the history.
    pub fn add_to_meal(
        &mut self,
        slot: MealSlot,
        food_name: &str,
        nutrition: NutritionTotals,
    ) -> &ScanEntry {
        self.add_to_meal_at(slot, food_name, nutrition, Utc::now())
    }

    pub fn add_to_meal_at(
        &mut self,
        slot: MealSlot,
        food_name: &str,
        nutrition: NutritionTotals,
        now: DateTime<Utc>,
    ) -> &ScanEntry {
        *self.meal_additions.entry(slot).or_default() += nutrition;

        let id = self.next_id.max(1);
        self.next_id = id + 1;
        self.scan_history.insert(
            0,
            ScanEntry {
                id,
                meal: slot,
                food_name: food_name.to_string(),
                nutrition,
                added_at: now,
            },
        );
        &self.scan_history[0]
    }

    pub fn meal_target(&self, slot: MealSlot) -> u32 {
        self.meal_targets.get(&slot).copied().unwrap_or_default()
    }

    pub fn base_nutrition(&self, slot: MealSlot) -> NutritionTotals {
        self.meal_base_nutrition
            .get(&slot)
            .copied()
            .unwrap_or_default()
    }

    pub fn additions(&self, slot: MealSlot) -> NutritionTotals {
        self.meal_additions.get(&slot).copied().unwrap_or_default()
    }

    /// Base nutrition plus everything logged against the slot.
    pub fn meal_total(&self, slot: MealSlot) -> NutritionTotals {
        self.base_nutrition(slot) + self.additions(slot)
    }

    /// Calories left before the slot target; negative once over.
    pub fn remaining_calories(&self, slot: MealSlot) -> i64 {
        self.meal_target(slot) as i64 - self.meal_total(slot).calories as i64
    }

    pub fn phase_strategy(&self) -> Option<&PhaseStrategy> {
        self.phase_strategy.as_ref()
    }

    pub fn history(&self) -> &[ScanEntry] {
        &self.scan_history
    }

    /// Drop logged additions and history, keeping targets and phase.
    pub fn reset_additions(&mut self) {
        for totals in self.meal_additions.values_mut() {
            *totals = NutritionTotals::default();
        }
        self.scan_history.clear();
    }
}

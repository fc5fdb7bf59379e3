use std::collections::BTreeMap;

use tracing::debug;

use crate::models::{
    AssessmentInput, BudgetLevel, DietType, EnergyMacroTargets, FoodId, GeneratedMeal, MealItem,
    MealSlot, NutritionTotals,
};
use crate::planner::calculations::round_nutrition;
use crate::planner::catalog::{FOOD_CATALOG, FoodCatalog};
use crate::planner::constants::{
    FIBER_PER_GRAM, budget_alternative, carb_bias, slot_calorie_ratio,
};

/// A catalog food at a portion size, before nutrition is looked up.
type Portion = (FoodId, u32);

/// Scale a catalog entry to `grams`, rounding each nutrient on its own.
pub fn scale_item(catalog: &FoodCatalog, food_id: FoodId, grams: u32) -> MealItem {
    let scaled = catalog.get(food_id).scaled(grams as f64);
    MealItem {
        food_id,
        name: food_id.label().to_string(),
        grams,
        calories: round_nutrition(scaled.calories),
        protein: round_nutrition(scaled.protein),
        carbs: round_nutrition(scaled.carbs),
        fats: round_nutrition(scaled.fats),
    }
}

/// Sum item nutrition; fiber is 3% of total grams, rounded once.
pub fn total_nutrition(items: &[MealItem]) -> NutritionTotals {
    let grams: u32 = items.iter().map(|i| i.grams).sum();
    NutritionTotals {
        calories: items.iter().map(|i| i.calories).sum(),
        protein: items.iter().map(|i| i.protein).sum(),
        carbs: items.iter().map(|i| i.carbs).sum(),
        fats: items.iter().map(|i| i.fats).sum(),
        fiber: round_nutrition(grams as f64 * FIBER_PER_GRAM),
        estimated_weight: grams,
    }
}

/// Slot's share of the daily calories.
pub fn slot_calorie_budget(daily_calories: u32, slot: MealSlot) -> u32 {
    round_nutrition(daily_calories as f64 * slot_calorie_ratio(slot))
}

/// Foods and portions for a slot, from the diet/budget/phase decision table.
pub fn select_portions(slot: MealSlot, input: &AssessmentInput) -> Vec<Portion> {
    let veg = input.diet_type == DietType::Vegetarian;
    let low = input.budget_level == BudgetLevel::Low;

    match slot {
        MealSlot::Morning if veg => vec![
            (FoodId::Oats, 60),
            (FoodId::Milk, 250),
            (FoodId::SoyChunks, if low { 30 } else { 40 }),
        ],
        MealSlot::Morning => vec![
            (FoodId::Oats, 60),
            (FoodId::EggWhites, 150),
            (FoodId::WholeEgg, 50),
        ],
        MealSlot::Afternoon => {
            let bias = carb_bias(input.phase);
            if veg {
                vec![
                    (FoodId::RiceCooked, round_nutrition(120.0 * bias)),
                    (FoodId::Paneer, if low { 90 } else { 130 }),
                    (FoodId::DalCooked, 120),
                    (FoodId::Sabzi, 100),
                ]
            } else {
                let protein = if low {
                    (FoodId::EggWhites, 200)
                } else {
                    (FoodId::ChickenBreast, 150)
                };
                vec![
                    (FoodId::RiceCooked, round_nutrition(130.0 * bias)),
                    protein,
                    (FoodId::Sabzi, 100),
                ]
            }
        }
        MealSlot::Evening if low => vec![(FoodId::RoastedChana, 55), (FoodId::Banana, 110)],
        MealSlot::Evening => vec![
            (FoodId::RoastedChana, 40),
            (FoodId::Banana, 110),
            (FoodId::Curd, 120),
        ],
        MealSlot::Night if veg => vec![
            (FoodId::Paneer, 120),
            (FoodId::Roti, 70),
            (FoodId::DalCooked, 100),
        ],
        MealSlot::Night => vec![
            (FoodId::ChickenBreast, if low { 120 } else { 160 }),
            (FoodId::Roti, 70),
            (FoodId::Sabzi, 120),
        ],
    }
}

/// Build one slot's meal against a catalog.
pub fn build_meal(
    catalog: &FoodCatalog,
    slot: MealSlot,
    input: &AssessmentInput,
    targets: &EnergyMacroTargets,
) -> GeneratedMeal {
    let items: Vec<MealItem> = select_portions(slot, input)
        .into_iter()
        .map(|(food_id, grams)| scale_item(catalog, food_id, grams))
        .collect();

    let mut totals = total_nutrition(&items);
    // Displayed calories come from the daily split, not the items.
    totals.calories = slot_calorie_budget(targets.daily_calories, slot);

    GeneratedMeal {
        title: slot.title().to_string(),
        slot,
        items,
        totals,
        budget_alternative: budget_alternative(slot).to_string(),
    }
}

/// Build all four meals against a specific catalog.
pub fn build_meal_plan_with(
    catalog: &FoodCatalog,
    input: &AssessmentInput,
    targets: &EnergyMacroTargets,
) -> BTreeMap<MealSlot, GeneratedMeal> {
    let meals: BTreeMap<MealSlot, GeneratedMeal> = MealSlot::ALL
        .into_iter()
        .map(|slot| (slot, build_meal(catalog, slot, input, targets)))
        .collect();

    debug!(
        diet = ?input.diet_type,
        budget = ?input.budget_level,
        phase = ?input.phase,
        items = meals.values().map(|m| m.items.len()).sum::<usize>(),
        "built meal plan"
    );

    meals
}

/// Build all four meals against the standard catalog.
pub fn build_meal_plan(
    input: &AssessmentInput,
    targets: &EnergyMacroTargets,
) -> BTreeMap<MealSlot, GeneratedMeal> {
    build_meal_plan_with(&FOOD_CATALOG, input, targets)
}

use crate::models::{Choice, GeneratedMeal, MealSlot, StagePrepPlan};
use crate::state::MealPlannerState;

/// Display the full plan report.
pub fn display_plan(plan: &StagePrepPlan) {
    let input = &plan.input;
    let targets = &plan.targets;

    println!();
    println!("=== Stage Prep Plan ({} phase) ===", input.phase.label());
    println!();
    println!("Daily calories: {} kcal", targets.daily_calories);
    println!(
        "Protein: {}g | Carbs: {}g | Fats: {}g",
        targets.protein_grams, targets.carb_grams, targets.fat_grams
    );
    println!(
        "BMR: {} | TDEE: {} | {}% confidence score",
        targets.bmr, targets.tdee, targets.confidence_score
    );
    println!(
        "Competition date: {}",
        input
            .competition_date
            .map(|d| d.to_string())
            .unwrap_or_else(|| "Not set".to_string())
    );

    for slot in MealSlot::ALL {
        if let Some(meal) = plan.meal(slot) {
            display_meal(meal);
        }
    }

    println!();
    println!("--- Insights ---");
    println!("Muscle retention: {}%", targets.muscle_retention_score);
    println!("Fat loss rate: {} kg/week", targets.fat_loss_rate_per_week_kg);
    println!("Carb load: {}", targets.carb_load_guidance);
    println!("Water: {}", targets.water_guidance);
    println!();
}

/// Display one meal card.
pub fn display_meal(meal: &GeneratedMeal) {
    println!();
    println!(
        "[{}] {} kcal | P {}g C {}g F {}g | fiber {}g",
        meal.title,
        meal.totals.calories,
        meal.totals.protein,
        meal.totals.carbs,
        meal.totals.fats,
        meal.totals.fiber
    );

    let width = meal.items.iter().map(|i| i.name.len()).max().unwrap_or(10);
    for item in &meal.items {
        println!(
            "  {:<width$} {:>4}g - {:>4} kcal | P {:>3} C {:>3} F {:>3}",
            item.name,
            item.grams,
            item.calories,
            item.protein,
            item.carbs,
            item.fats,
            width = width
        );
    }
    println!("  Budget: {}", meal.budget_alternative);
}

/// Display per-slot progress of the meal planner tracker.
pub fn display_tracker(state: &MealPlannerState) {
    println!();
    println!("=== Meal Planner ===");
    if let Some(strategy) = state.phase_strategy() {
        println!(
            "Phase strategy: {} (locked {})",
            strategy.phase.label(),
            strategy.locked_at.format("%Y-%m-%d %H:%M UTC")
        );
    }
    println!();

    for slot in MealSlot::ALL {
        display_slot_progress(state, slot);
    }

    let history = state.history();
    if !history.is_empty() {
        println!();
        println!("--- Logged ({} items) ---", history.len());
        for entry in history {
            println!(
                "  #{} {:<9} {} ({} kcal)",
                entry.id,
                entry.meal.title(),
                entry.food_name,
                entry.nutrition.calories
            );
        }
    }
    println!();
}

/// One line of target, total and remaining for a slot.
pub fn display_slot_progress(state: &MealPlannerState, slot: MealSlot) {
    let total = state.meal_total(slot);
    let remaining = state.remaining_calories(slot);
    let status = if remaining < 0 { "Over" } else { "On Track" };

    println!(
        "  {:<9} {:>5} / {:>5} kcal ({:>+5} left) | P {:>3} C {:>3} F {:>3} | {}",
        slot.title(),
        total.calories,
        state.meal_target(slot),
        remaining,
        total.protein,
        total.carbs,
        total.fats,
        status
    );
}

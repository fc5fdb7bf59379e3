use stage_prep_rs::models::{
    AssessmentInput, BudgetLevel, DietType, FoodId, GeneratedMeal, MealSlot, Phase,
};
use stage_prep_rs::planner::{
    FOOD_CATALOG, analyze_input, build_meal_plan, compute_targets, scale_item,
};

fn profile(diet: DietType, budget: BudgetLevel, phase: Phase) -> AssessmentInput {
    AssessmentInput {
        diet_type: diet,
        budget_level: budget,
        phase,
        ..Default::default()
    }
}

fn portions(meal: &GeneratedMeal) -> Vec<(FoodId, u32)> {
    meal.items.iter().map(|i| (i.food_id, i.grams)).collect()
}

fn meal_for(input: &AssessmentInput, slot: MealSlot) -> GeneratedMeal {
    let targets = compute_targets(input);
    build_meal_plan(input, &targets).remove(&slot).unwrap()
}

#[test]
fn test_plan_has_four_ordered_slots() {
    let input = AssessmentInput::default();
    let targets = compute_targets(&input);
    let meals = build_meal_plan(&input, &targets);

    let slots: Vec<MealSlot> = meals.keys().copied().collect();
    assert_eq!(slots, MealSlot::ALL.to_vec());
    for (slot, meal) in &meals {
        assert_eq!(meal.slot, *slot);
        assert_eq!(meal.title, slot.title());
        assert!(!meal.items.is_empty());
    }
}

#[test]
fn test_scaling_at_100g_matches_catalog() {
    for id in FoodId::ALL {
        let facts = FOOD_CATALOG.get(id);
        let item = scale_item(&FOOD_CATALOG, id, 100);
        assert_eq!(item.calories, facts.calories.round() as u32, "{:?}", id);
        assert_eq!(item.protein, facts.protein.round() as u32, "{:?}", id);
        assert_eq!(item.carbs, facts.carbs.round() as u32, "{:?}", id);
        assert_eq!(item.fats, facts.fats.round() as u32, "{:?}", id);
    }
}

#[test]
fn test_slot_calories_come_from_ratio_split() {
    let input = AssessmentInput::default();
    let plan = analyze_input(input);
    assert_eq!(plan.targets.daily_calories, 2509);

    let expected = [652, 853, 351, 652];
    for (slot, kcal) in MealSlot::ALL.into_iter().zip(expected) {
        let meal = plan.meal(slot).unwrap();
        assert_eq!(meal.totals.calories, kcal, "{}", slot);
    }

    // item calories are not what the slot reports
    let morning = plan.meal(MealSlot::Morning).unwrap();
    assert_eq!(morning.item_calories(), 233 + 78 + 72);
    assert_ne!(morning.item_calories(), morning.totals.calories);
}

#[test]
fn test_macros_and_fiber_come_from_items() {
    let meal = meal_for(&AssessmentInput::default(), MealSlot::Morning);
    let protein: u32 = meal.items.iter().map(|i| i.protein).sum();
    let carbs: u32 = meal.items.iter().map(|i| i.carbs).sum();
    let fats: u32 = meal.items.iter().map(|i| i.fats).sum();

    assert_eq!(meal.totals.protein, protein);
    assert_eq!(meal.totals.carbs, carbs);
    assert_eq!(meal.totals.fats, fats);
    assert_eq!(meal.totals.estimated_weight, 260);
    assert_eq!(meal.totals.fiber, 8);
}

#[test]
fn test_morning_by_diet_and_budget() {
    let veg_low = meal_for(
        &profile(DietType::Vegetarian, BudgetLevel::Low, Phase::Cutting),
        MealSlot::Morning,
    );
    assert_eq!(
        portions(&veg_low),
        vec![(FoodId::Oats, 60), (FoodId::Milk, 250), (FoodId::SoyChunks, 30)]
    );

    let veg_high = meal_for(
        &profile(DietType::Vegetarian, BudgetLevel::High, Phase::Cutting),
        MealSlot::Morning,
    );
    assert_eq!(portions(&veg_high)[2], (FoodId::SoyChunks, 40));

    let non_veg = meal_for(
        &profile(DietType::NonVegetarian, BudgetLevel::Low, Phase::Cutting),
        MealSlot::Morning,
    );
    assert_eq!(
        portions(&non_veg),
        vec![(FoodId::Oats, 60), (FoodId::EggWhites, 150), (FoodId::WholeEgg, 50)]
    );
}

#[test]
fn test_afternoon_substitutes_egg_whites_on_low_budget() {
    let low = meal_for(
        &profile(DietType::NonVegetarian, BudgetLevel::Low, Phase::Cutting),
        MealSlot::Afternoon,
    );
    assert_eq!(
        portions(&low),
        vec![(FoodId::RiceCooked, 130), (FoodId::EggWhites, 200), (FoodId::Sabzi, 100)]
    );

    let medium = meal_for(
        &profile(DietType::NonVegetarian, BudgetLevel::Medium, Phase::Bulking),
        MealSlot::Afternoon,
    );
    // 130 * 1.06 = 137.8
    assert_eq!(
        portions(&medium),
        vec![
            (FoodId::RiceCooked, 138),
            (FoodId::ChickenBreast, 150),
            (FoodId::Sabzi, 100)
        ]
    );
}

#[test]
fn test_afternoon_vegetarian() {
    let meal = meal_for(
        &profile(DietType::Vegetarian, BudgetLevel::Low, Phase::PeakWeek),
        MealSlot::Afternoon,
    );
    assert_eq!(
        portions(&meal),
        vec![
            (FoodId::RiceCooked, 134),
            (FoodId::Paneer, 90),
            (FoodId::DalCooked, 120),
            (FoodId::Sabzi, 100)
        ]
    );
}

#[test]
fn test_evening_by_budget() {
    let low = meal_for(
        &profile(DietType::Vegetarian, BudgetLevel::Low, Phase::Cutting),
        MealSlot::Evening,
    );
    assert_eq!(
        portions(&low),
        vec![(FoodId::RoastedChana, 55), (FoodId::Banana, 110)]
    );

    for budget in [BudgetLevel::Medium, BudgetLevel::High] {
        let meal = meal_for(
            &profile(DietType::NonVegetarian, budget, Phase::Cutting),
            MealSlot::Evening,
        );
        assert_eq!(
            portions(&meal),
            vec![(FoodId::RoastedChana, 40), (FoodId::Banana, 110), (FoodId::Curd, 120)]
        );
    }
}

#[test]
fn test_night_by_diet_and_budget() {
    let veg = meal_for(
        &profile(DietType::Vegetarian, BudgetLevel::Medium, Phase::Cutting),
        MealSlot::Night,
    );
    assert_eq!(
        portions(&veg),
        vec![(FoodId::Paneer, 120), (FoodId::Roti, 70), (FoodId::DalCooked, 100)]
    );

    let low = meal_for(
        &profile(DietType::NonVegetarian, BudgetLevel::Low, Phase::Cutting),
        MealSlot::Night,
    );
    assert_eq!(portions(&low)[0], (FoodId::ChickenBreast, 120));

    let high = meal_for(
        &profile(DietType::NonVegetarian, BudgetLevel::High, Phase::Cutting),
        MealSlot::Night,
    );
    assert_eq!(
        portions(&high),
        vec![(FoodId::ChickenBreast, 160), (FoodId::Roti, 70), (FoodId::Sabzi, 120)]
    );
}

#[test]
fn test_budget_alternatives_are_fixed() {
    let a = analyze_input(profile(DietType::Vegetarian, BudgetLevel::Low, Phase::Bulking));
    let b = analyze_input(profile(DietType::NonVegetarian, BudgetLevel::High, Phase::PeakWeek));
    for slot in MealSlot::ALL {
        assert_eq!(
            a.meal(slot).unwrap().budget_alternative,
            b.meal(slot).unwrap().budget_alternative
        );
    }
    assert_eq!(
        a.meal(MealSlot::Evening).unwrap().budget_alternative,
        "Roasted chana replaces expensive protein bars."
    );
}

#[test]
fn test_every_combination_builds() {
    for diet in [DietType::Vegetarian, DietType::NonVegetarian] {
        for budget in [BudgetLevel::Low, BudgetLevel::Medium, BudgetLevel::High] {
            for phase in [Phase::Bulking, Phase::Cutting, Phase::PeakWeek] {
                let plan = analyze_input(profile(diet, budget, phase));
                assert_eq!(plan.meals.len(), 4);
                let split: u32 = plan.meals.values().map(|m| m.totals.calories).sum();
                // independent rounding per slot can drift by a couple of kcal
                assert!(split.abs_diff(plan.targets.daily_calories) <= 2);
            }
        }
    }
}

#[test]
fn test_plan_is_deterministic() {
    let input = profile(DietType::Vegetarian, BudgetLevel::Medium, Phase::PeakWeek);
    assert_eq!(analyze_input(input.clone()), analyze_input(input));
}

#[test]
fn test_meal_targets_and_base_nutrition() {
    let plan = analyze_input(AssessmentInput::default());
    let targets = plan.meal_targets();
    let base = plan.meal_base_nutrition();

    assert_eq!(targets.len(), 4);
    assert_eq!(targets[&MealSlot::Afternoon], 853);
    assert_eq!(base[&MealSlot::Afternoon].calories, 853);
    assert_eq!(
        base[&MealSlot::Night],
        plan.meal(MealSlot::Night).unwrap().totals
    );
}

use std::io;
use std::path::Path;

use crate::error::Result;
use crate::models::{MealSlot, StagePrepPlan};

const HEADER: [&str; 9] = [
    "slot", "row", "food", "grams", "calories", "protein", "carbs", "fats", "fiber",
];

/// Write the plan as CSV: one row per item, then a totals row per slot.
pub fn write_plan<W: io::Write>(plan: &StagePrepPlan, writer: W) -> Result<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(HEADER)?;

    for slot in MealSlot::ALL {
        let Some(meal) = plan.meal(slot) else {
            continue;
        };

        for item in &meal.items {
            wtr.write_record([
                slot.key().to_string(),
                "item".to_string(),
                item.name.clone(),
                item.grams.to_string(),
                item.calories.to_string(),
                item.protein.to_string(),
                item.carbs.to_string(),
                item.fats.to_string(),
                String::new(),
            ])?;
        }

        let totals = &meal.totals;
        wtr.write_record([
            slot.key().to_string(),
            "total".to_string(),
            meal.title.clone(),
            totals.estimated_weight.to_string(),
            totals.calories.to_string(),
            totals.protein.to_string(),
            totals.carbs.to_string(),
            totals.fats.to_string(),
            totals.fiber.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}

/// Write the plan CSV to a file.
pub fn write_plan_csv(plan: &StagePrepPlan, path: &Path) -> Result<()> {
    let file = std::fs::File::create(path)?;
    write_plan(plan, file)
}

use std::fs;
use std::path::Path;

use clap::Parser;

use stage_prep_rs::cli::{Cli, Command};
use stage_prep_rs::error::{PrepError, Result};
use stage_prep_rs::interface::{
    display_plan, display_slot_progress, display_tracker, prompt_yes_no, run_assessment_wizard,
    write_plan_csv,
};
use stage_prep_rs::intake::RawAssessment;
use stage_prep_rs::logging::LoggingConfig;
use stage_prep_rs::models::{MealSlot, NutritionTotals, StagePrepPlan};
use stage_prep_rs::planner::{analyze, recalculate_with_weight};
use stage_prep_rs::state::{
    JsonFileStore, MealPlannerState, SnapshotStore, load_tracker, save_tracker,
};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    LoggingConfig::from_env(&cli.log_level).init();

    let mut store = JsonFileStore::new(&cli.file);
    let command = cli.command.unwrap_or_default();

    match command {
        Command::Assess => cmd_assess(&mut store, &cli.tracker),
        Command::Analyze { input } => cmd_analyze(&mut store, &cli.tracker, &input),
        Command::Show => cmd_show(&mut store),
        Command::Recalculate { weight } => cmd_recalculate(&mut store, &cli.tracker, weight),
        Command::Export { csv } => cmd_export(&mut store, &csv),
        Command::Log {
            slot,
            name,
            calories,
            protein,
            carbs,
            fats,
            fiber,
            grams,
        } => {
            let nutrition = NutritionTotals {
                calories,
                protein,
                carbs,
                fats,
                fiber,
                estimated_weight: grams,
            };
            cmd_log(&cli.tracker, &slot, &name, nutrition)
        }
        Command::Tracker => cmd_tracker(&cli.tracker),
        Command::Reset {
            snapshot,
            tracker,
            log,
        } => cmd_reset(&mut store, &cli.tracker, snapshot, tracker, log),
    }
}

/// Save a new plan, push it into the meal planner, and show it.
fn publish_plan(store: &mut JsonFileStore, tracker_path: &Path, plan: &StagePrepPlan) -> Result<()> {
    store.save(plan)?;

    let mut tracker = load_tracker(tracker_path)?;
    tracker.apply_plan(plan);
    save_tracker(tracker_path, &tracker)?;

    display_plan(plan);
    println!(
        "Analysis complete. {} kcal plan synced to meal planner.",
        plan.targets.daily_calories
    );
    Ok(())
}

/// Run the interactive assessment wizard.
fn cmd_assess(store: &mut JsonFileStore, tracker_path: &Path) -> Result<()> {
    // Start from the last assessment when there is one.
    let start = match store.load()? {
        Some(plan) => RawAssessment::from(&plan.input),
        None => RawAssessment::default(),
    };

    println!("Stage Prep Engine: complete the assessment to generate your plan.");
    let raw = run_assessment_wizard(start)?;

    let plan = analyze(&raw)?;
    publish_plan(store, tracker_path, &plan)
}

/// Analyze a form stored as JSON.
fn cmd_analyze(store: &mut JsonFileStore, tracker_path: &Path, input: &Path) -> Result<()> {
    let content = fs::read_to_string(input)?;
    let raw: RawAssessment = serde_json::from_str(&content)?;

    let plan = analyze(&raw)?;
    publish_plan(store, tracker_path, &plan)
}

fn cmd_show(store: &mut JsonFileStore) -> Result<()> {
    match store.load()? {
        Some(plan) => {
            display_plan(&plan);
            Ok(())
        }
        None => {
            println!("No saved plan. Run 'assess' or 'analyze' first.");
            Ok(())
        }
    }
}

/// Rebuild the saved plan for a new bodyweight.
fn cmd_recalculate(store: &mut JsonFileStore, tracker_path: &Path, weight: f64) -> Result<()> {
    let plan = store.load()?.ok_or(PrepError::SnapshotNotFound)?;
    let updated = recalculate_with_weight(&plan, weight)?;

    println!(
        "Recalculated for {} kg: {} -> {} kcal",
        weight, plan.targets.daily_calories, updated.targets.daily_calories
    );
    publish_plan(store, tracker_path, &updated)
}

fn cmd_export(store: &mut JsonFileStore, csv_path: &Path) -> Result<()> {
    let plan = store.load()?.ok_or(PrepError::SnapshotNotFound)?;
    write_plan_csv(&plan, csv_path)?;
    println!("Plan written to {}", csv_path.display());
    Ok(())
}

/// Add a food to the tracker and show the slot's remaining budget.
fn cmd_log(tracker_path: &Path, slot: &str, name: &str, nutrition: NutritionTotals) -> Result<()> {
    let slot: MealSlot = slot.parse()?;

    let mut tracker = load_tracker(tracker_path)?;
    let entry_id = tracker.add_to_meal(slot, name, nutrition).id;
    save_tracker(tracker_path, &tracker)?;

    println!("Logged #{}: {} to {}", entry_id, name, slot.title());
    display_slot_progress(&tracker, slot);
    Ok(())
}

fn cmd_tracker(tracker_path: &Path) -> Result<()> {
    let tracker = load_tracker(tracker_path)?;
    display_tracker(&tracker);
    Ok(())
}

/// Clear the saved snapshot and/or the tracker.
fn cmd_reset(
    store: &mut JsonFileStore,
    tracker_path: &Path,
    snapshot: bool,
    tracker: bool,
    log: bool,
) -> Result<()> {
    if !snapshot && !tracker && !log {
        println!("Please specify at least one reset option:");
        println!("  --snapshot  Delete the saved plan");
        println!("  --tracker   Reset the meal planner tracker");
        println!("  --log       Clear logged foods, keep meal targets");
        return Ok(());
    }

    if !prompt_yes_no("Clear the selected state?", false)? {
        return Ok(());
    }

    if snapshot {
        store.clear()?;
        println!("Saved plan deleted.");
    }

    if tracker {
        save_tracker(tracker_path, &MealPlannerState::default())?;
        println!("Meal planner tracker reset.");
    } else if log {
        let mut state = load_tracker(tracker_path)?;
        state.reset_additions();
        save_tracker(tracker_path, &state)?;
        println!("Logged foods cleared.");
    }

    Ok(())
}

use dialoguer::{Confirm, Input, Select};

use crate::error::{PrepError, Result};
use crate::intake::{PRIORITY_MAX, PRIORITY_MIN, RawAssessment};
use crate::models::{BudgetLevel, Choice, DietType, ExperienceLevel, Phase};

/// Number of wizard steps.
pub const WIZARD_STEPS: usize = 3;

/// Prompt for a number, keeping `current` as the default.
pub fn prompt_number(prompt: &str, field: &str, current: f64) -> Result<f64> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(format_number(current))
        .interact_text()?;

    input
        .trim()
        .parse()
        .map_err(|_| PrepError::invalid(field, format!("is not a number (got '{}')", input.trim())))
}

/// Prompt for one of a choice's labels, preselecting `current` when it matches.
pub fn prompt_choice<T: Choice>(prompt: &str, current: &str) -> Result<String> {
    let labels: Vec<&str> = T::VARIANTS.iter().map(|v| v.label()).collect();
    let default = labels
        .iter()
        .position(|l| l.eq_ignore_ascii_case(current.trim()))
        .unwrap_or(0);

    let selection = Select::new()
        .with_prompt(prompt)
        .items(&labels)
        .default(default)
        .interact()?;

    Ok(labels[selection].to_string())
}

/// Prompt for an optional `YYYY-MM-DD` date; empty leaves it unset.
pub fn prompt_date(prompt: &str, current: &str) -> Result<String> {
    let input: String = Input::new()
        .with_prompt(prompt)
        .default(current.to_string())
        .allow_empty(true)
        .interact_text()?;
    Ok(input.trim().to_string())
}

/// Prompt for a 0-100 priority slider.
pub fn prompt_priority(label: &str, field: &str, current: f64) -> Result<f64> {
    let prompt = format!("{} ({}-{})", label, PRIORITY_MIN, PRIORITY_MAX);
    prompt_number(&prompt, field, current)
}

/// Step 1: body metrics.
pub fn prompt_body_metrics(raw: &mut RawAssessment) -> Result<()> {
    raw.age = prompt_number("Age", "age", raw.age)?;
    raw.height_cm = prompt_number("Height (cm)", "heightCm", raw.height_cm)?;
    raw.current_weight_kg =
        prompt_number("Current Weight (kg)", "currentWeightKg", raw.current_weight_kg)?;
    raw.target_stage_weight_kg = prompt_number(
        "Target Stage Weight (kg)",
        "targetStageWeightKg",
        raw.target_stage_weight_kg,
    )?;
    raw.body_fat_percent =
        prompt_number("Body Fat % (if known)", "bodyFatPercent", raw.body_fat_percent)?;
    raw.experience = prompt_choice::<ExperienceLevel>("Experience Level", &raw.experience)?;
    Ok(())
}

/// Step 2: competition, phase, frequency, diet and budget.
pub fn prompt_training_profile(raw: &mut RawAssessment) -> Result<()> {
    raw.competition_date =
        prompt_date("Competition Date (YYYY-MM-DD, blank if none)", &raw.competition_date)?;
    raw.phase = prompt_choice::<Phase>("Current Phase", &raw.phase)?;
    raw.training_frequency = prompt_number(
        "Training Frequency / Week",
        "trainingFrequency",
        raw.training_frequency,
    )?;
    raw.cardio_frequency =
        prompt_number("Cardio Frequency / Week", "cardioFrequency", raw.cardio_frequency)?;
    raw.diet_type = prompt_choice::<DietType>("Diet Type", &raw.diet_type)?;
    raw.budget_level = prompt_choice::<BudgetLevel>("Budget Level", &raw.budget_level)?;
    Ok(())
}

/// Step 3: priority sliders.
pub fn prompt_priorities(raw: &mut RawAssessment) -> Result<()> {
    raw.fullness_priority = prompt_priority(
        "Muscle fullness priority",
        "fullnessPriority",
        raw.fullness_priority,
    )?;
    raw.fat_loss_priority =
        prompt_priority("Fat loss priority", "fatLossPriority", raw.fat_loss_priority)?;
    raw.dryness_priority =
        prompt_priority("Stage dryness priority", "drynessPriority", raw.dryness_priority)?;
    raw.strength_priority = prompt_priority(
        "Strength retention priority",
        "strengthPriority",
        raw.strength_priority,
    )?;
    Ok(())
}

/// Walk the three assessment steps, starting from `start`.
pub fn run_assessment_wizard(start: RawAssessment) -> Result<RawAssessment> {
    let mut raw = start;

    for step in 0..WIZARD_STEPS {
        let completion = (step + 1) as f64 / WIZARD_STEPS as f64 * 100.0;
        println!();
        println!(
            "=== Step {}/{} ({:.0}% complete) ===",
            step + 1,
            WIZARD_STEPS,
            completion
        );

        match step {
            0 => prompt_body_metrics(&mut raw)?,
            1 => prompt_training_profile(&mut raw)?,
            _ => prompt_priorities(&mut raw)?,
        }
    }

    Ok(raw)
}

/// Prompt for yes/no confirmation.
pub fn prompt_yes_no(prompt: &str, default: bool) -> Result<bool> {
    Ok(Confirm::new()
        .with_prompt(prompt)
        .default(default)
        .interact()?)
}

/// Whole numbers without a trailing `.0`.
fn format_number(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(78.0), "78");
        assert_eq!(format_number(78.5), "78.5");
        assert_eq!(format_number(-2.0), "-2");
    }
}

//! Validation boundary between the loosely typed assessment form and the engine.
//!
//! Everything fallible about an assessment happens here. Once a
//! [`RawAssessment`] has been turned into an [`AssessmentInput`], target and
//! meal computation cannot fail.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use strsim::jaro_winkler;
use tracing::debug;

use crate::error::{PrepError, Result};
use crate::models::assessment::optional_date;
use crate::models::{AssessmentInput, BudgetLevel, Choice, DietType, ExperienceLevel, Phase};

pub const MAX_AGE: u32 = 120;
pub const MAX_HEIGHT_CM: f64 = 272.0;
pub const MAX_WEIGHT_KG: f64 = 400.0;
pub const MAX_SESSIONS_PER_WEEK: u32 = 28;
pub const PRIORITY_MIN: f64 = 0.0;
pub const PRIORITY_MAX: f64 = 100.0;

/// Minimum Jaro-Winkler similarity for a "did you mean" suggestion.
const SUGGESTION_THRESHOLD: f64 = 0.8;

/// The assessment form as submitted: numbers unchecked, choices as text.
///
/// Every field except `competitionDate` must be present, and unknown keys
/// are rejected, so a misspelled field never falls back to a default.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawAssessment {
    pub age: f64,
    pub height_cm: f64,
    pub current_weight_kg: f64,
    pub target_stage_weight_kg: f64,
    pub body_fat_percent: f64,
    pub experience: String,
    #[serde(default)]
    pub competition_date: String,
    pub phase: String,
    pub training_frequency: f64,
    pub cardio_frequency: f64,
    pub diet_type: String,
    pub budget_level: String,
    pub fullness_priority: f64,
    pub fat_loss_priority: f64,
    pub dryness_priority: f64,
    pub strength_priority: f64,
}

impl Default for RawAssessment {
    fn default() -> Self {
        RawAssessment::from(&AssessmentInput::default())
    }
}

impl From<&AssessmentInput> for RawAssessment {
    fn from(input: &AssessmentInput) -> Self {
        Self {
            age: input.age as f64,
            height_cm: input.height_cm,
            current_weight_kg: input.current_weight_kg,
            target_stage_weight_kg: input.target_stage_weight_kg,
            body_fat_percent: input.body_fat_percent,
            experience: input.experience_level.label().to_string(),
            competition_date: input
                .competition_date
                .map(|d| d.format(optional_date::FORMAT).to_string())
                .unwrap_or_default(),
            phase: input.phase.label().to_string(),
            training_frequency: input.training_sessions_per_week as f64,
            cardio_frequency: input.cardio_sessions_per_week as f64,
            diet_type: input.diet_type.label().to_string(),
            budget_level: input.budget_level.label().to_string(),
            fullness_priority: input.fullness_priority,
            fat_loss_priority: input.fat_loss_priority,
            dryness_priority: input.dryness_priority,
            strength_priority: input.strength_priority,
        }
    }
}

/// Validate and normalize a submitted form.
///
/// Fails with `InvalidInput` on the first bad field. Priorities outside
/// `[0, 100]` are clamped rather than rejected.
pub fn validate_assessment(raw: &RawAssessment) -> Result<AssessmentInput> {
    let input = AssessmentInput {
        age: whole_number("age", raw.age, 1, MAX_AGE)?,
        height_cm: positive_up_to("heightCm", raw.height_cm, MAX_HEIGHT_CM)?,
        current_weight_kg: positive_up_to("currentWeightKg", raw.current_weight_kg, MAX_WEIGHT_KG)?,
        target_stage_weight_kg: positive_up_to(
            "targetStageWeightKg",
            raw.target_stage_weight_kg,
            MAX_WEIGHT_KG,
        )?,
        body_fat_percent: within("bodyFatPercent", raw.body_fat_percent, 0.0, 100.0)?,
        experience_level: parse_choice::<ExperienceLevel>("experience", &raw.experience)?,
        competition_date: parse_date("competitionDate", &raw.competition_date)?,
        phase: parse_choice::<Phase>("phase", &raw.phase)?,
        training_sessions_per_week: whole_number(
            "trainingFrequency",
            raw.training_frequency,
            0,
            MAX_SESSIONS_PER_WEEK,
        )?,
        cardio_sessions_per_week: whole_number(
            "cardioFrequency",
            raw.cardio_frequency,
            0,
            MAX_SESSIONS_PER_WEEK,
        )?,
        diet_type: parse_choice::<DietType>("dietType", &raw.diet_type)?,
        budget_level: parse_choice::<BudgetLevel>("budgetLevel", &raw.budget_level)?,
        fullness_priority: clamp_priority("fullnessPriority", raw.fullness_priority)?,
        fat_loss_priority: clamp_priority("fatLossPriority", raw.fat_loss_priority)?,
        dryness_priority: clamp_priority("drynessPriority", raw.dryness_priority)?,
        strength_priority: clamp_priority("strengthPriority", raw.strength_priority)?,
    };

    debug!(
        phase = ?input.phase,
        diet = ?input.diet_type,
        budget = ?input.budget_level,
        "assessment validated"
    );

    Ok(input)
}

/// Re-run validation on an already typed input, e.g. one loaded from disk.
pub fn revalidate(input: &AssessmentInput) -> Result<AssessmentInput> {
    validate_assessment(&RawAssessment::from(input))
}

/// Parse a form choice by label or alias, case-insensitively.
pub fn parse_choice<T: Choice>(field: &str, value: &str) -> Result<T> {
    let wanted = value.trim().to_lowercase();

    let found = T::VARIANTS.iter().copied().find(|variant| {
        variant.label().to_lowercase() == wanted
            || variant.aliases().iter().any(|a| a.to_lowercase() == wanted)
    });
    if let Some(variant) = found {
        return Ok(variant);
    }

    let accepted: Vec<&str> = T::VARIANTS.iter().map(|v| v.label()).collect();
    let mut constraint = format!(
        "must be one of {} (got '{}')",
        accepted.join(", "),
        value.trim()
    );

    let best = T::VARIANTS
        .iter()
        .map(|v| (v.label(), jaro_winkler(&v.label().to_lowercase(), &wanted)))
        .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
        .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));
    if let Some((label, _)) = best {
        constraint.push_str(&format!("; did you mean '{}'?", label));
    }

    Err(PrepError::invalid(field, constraint))
}

fn finite(field: &str, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(PrepError::invalid(field, "must be a finite number"))
    }
}

fn positive_up_to(field: &str, value: f64, max: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if value <= 0.0 || value > max {
        return Err(PrepError::invalid(
            field,
            format!("must be greater than 0 and at most {} (got {})", max, value),
        ));
    }
    Ok(value)
}

fn within(field: &str, value: f64, min: f64, max: f64) -> Result<f64> {
    let value = finite(field, value)?;
    if !(min..=max).contains(&value) {
        return Err(PrepError::invalid(
            field,
            format!("must be between {} and {} (got {})", min, max, value),
        ));
    }
    Ok(value)
}

fn whole_number(field: &str, value: f64, min: u32, max: u32) -> Result<u32> {
    let value = within(field, value, min as f64, max as f64)?;
    if value.fract() != 0.0 {
        return Err(PrepError::invalid(
            field,
            format!("must be a whole number (got {})", value),
        ));
    }
    Ok(value as u32)
}

fn clamp_priority(field: &str, value: f64) -> Result<f64> {
    Ok(finite(field, value)?.clamp(PRIORITY_MIN, PRIORITY_MAX))
}

fn parse_date(field: &str, value: &str) -> Result<Option<NaiveDate>> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }
    NaiveDate::parse_from_str(value, optional_date::FORMAT)
        .map(Some)
        .map_err(|_| PrepError::invalid(field, format!("must be a YYYY-MM-DD date (got '{}')", value)))
}

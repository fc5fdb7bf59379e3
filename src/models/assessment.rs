use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A closed set of labelled choices offered by the assessment form.
pub trait Choice: Copy + PartialEq + 'static {
    /// Every variant, in form order.
    const VARIANTS: &'static [Self];

    /// Label shown in the form and used in stored snapshots.
    fn label(self) -> &'static str;

    /// Extra spellings accepted on input besides the label.
    fn aliases(self) -> &'static [&'static str] {
        &[]
    }
}

/// Training-cycle stage governing calorie and macro policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Bulking,
    Cutting,
    #[serde(rename = "Peak Week", alias = "PeakWeek")]
    PeakWeek,
}

impl Choice for Phase {
    const VARIANTS: &'static [Self] = &[Phase::Bulking, Phase::Cutting, Phase::PeakWeek];

    fn label(self) -> &'static str {
        match self {
            Phase::Bulking => "Bulking",
            Phase::Cutting => "Cutting",
            Phase::PeakWeek => "Peak Week",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            Phase::PeakWeek => &["PeakWeek", "peak-week", "peak_week"],
            _ => &[],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DietType {
    Vegetarian,
    #[serde(rename = "Non-veg", alias = "NonVegetarian")]
    NonVegetarian,
}

impl Choice for DietType {
    const VARIANTS: &'static [Self] = &[DietType::Vegetarian, DietType::NonVegetarian];

    fn label(self) -> &'static str {
        match self {
            DietType::Vegetarian => "Vegetarian",
            DietType::NonVegetarian => "Non-veg",
        }
    }

    fn aliases(self) -> &'static [&'static str] {
        match self {
            DietType::Vegetarian => &["Veg"],
            DietType::NonVegetarian => &["NonVegetarian", "Non-vegetarian", "Nonveg"],
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum BudgetLevel {
    Low,
    Medium,
    High,
}

impl Choice for BudgetLevel {
    const VARIANTS: &'static [Self] = &[BudgetLevel::Low, BudgetLevel::Medium, BudgetLevel::High];

    fn label(self) -> &'static str {
        match self {
            BudgetLevel::Low => "Low",
            BudgetLevel::Medium => "Medium",
            BudgetLevel::High => "High",
        }
    }
}

/// Informational only; no formula reads it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl Choice for ExperienceLevel {
    const VARIANTS: &'static [Self] = &[
        ExperienceLevel::Beginner,
        ExperienceLevel::Intermediate,
        ExperienceLevel::Advanced,
    ];

    fn label(self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

/// A validated snapshot of one athlete's assessment.
///
/// Only produced by intake validation (or [`Default`]), so every numeric
/// field is finite and within bounds and priorities sit in `[0, 100]`.
/// Serialized with the assessment form's field names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentInput {
    pub age: u32,
    pub height_cm: f64,
    pub current_weight_kg: f64,
    pub target_stage_weight_kg: f64,
    pub body_fat_percent: f64,
    #[serde(rename = "experience")]
    pub experience_level: ExperienceLevel,
    #[serde(default, with = "optional_date")]
    pub competition_date: Option<NaiveDate>,
    pub phase: Phase,
    #[serde(rename = "trainingFrequency")]
    pub training_sessions_per_week: u32,
    #[serde(rename = "cardioFrequency")]
    pub cardio_sessions_per_week: u32,
    pub diet_type: DietType,
    pub budget_level: BudgetLevel,
    pub fullness_priority: f64,
    pub fat_loss_priority: f64,
    pub dryness_priority: f64,
    pub strength_priority: f64,
}

impl AssessmentInput {
    /// Training plus cardio sessions per week.
    #[inline]
    pub fn total_sessions(&self) -> u32 {
        self.training_sessions_per_week + self.cardio_sessions_per_week
    }
}

impl Default for AssessmentInput {
    /// The wizard's starting form.
    fn default() -> Self {
        Self {
            age: 24,
            height_cm: 173.0,
            current_weight_kg: 78.0,
            target_stage_weight_kg: 72.0,
            body_fat_percent: 14.0,
            experience_level: ExperienceLevel::Intermediate,
            competition_date: None,
            phase: Phase::Cutting,
            training_sessions_per_week: 6,
            cardio_sessions_per_week: 4,
            diet_type: DietType::NonVegetarian,
            budget_level: BudgetLevel::Medium,
            fullness_priority: 70.0,
            fat_loss_priority: 82.0,
            dryness_priority: 75.0,
            strength_priority: 68.0,
        }
    }
}

/// Stores an unset competition date as `""`, the way the form does.
pub(crate) mod optional_date {
    use chrono::NaiveDate;
    use serde::{Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%Y-%m-%d";

    pub fn serialize<S: Serializer>(date: &Option<NaiveDate>, s: S) -> Result<S::Ok, S::Error> {
        match date {
            Some(d) => s.serialize_str(&d.format(FORMAT).to_string()),
            None => s.serialize_str(""),
        }
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(d: D) -> Result<Option<NaiveDate>, D::Error> {
        let raw: Option<String> = Option::deserialize(d)?;
        match raw.as_deref().map(str::trim) {
            None | Some("") => Ok(None),
            Some(text) => NaiveDate::parse_from_str(text, FORMAT)
                .map(Some)
                .map_err(serde::de::Error::custom),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_labels_match_serde_names() {
        let json = serde_json::to_string(&Phase::PeakWeek).unwrap();
        assert_eq!(json, "\"Peak Week\"");
        let json = serde_json::to_string(&DietType::NonVegetarian).unwrap();
        assert_eq!(json, "\"Non-veg\"");
    }

    #[test]
    fn test_serde_accepts_variant_names() {
        let phase: Phase = serde_json::from_str("\"PeakWeek\"").unwrap();
        assert_eq!(phase, Phase::PeakWeek);
    }

    #[test]
    fn test_empty_competition_date() {
        let input = AssessmentInput::default();
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["competitionDate"], "");
        assert_eq!(json["trainingFrequency"], 6);

        let back: AssessmentInput = serde_json::from_value(json).unwrap();
        assert_eq!(back, input);
    }

    #[test]
    fn test_competition_date_roundtrip() {
        let input = AssessmentInput {
            competition_date: NaiveDate::from_ymd_opt(2026, 11, 28),
            ..Default::default()
        };
        let json = serde_json::to_value(&input).unwrap();
        assert_eq!(json["competitionDate"], "2026-11-28");
        let back: AssessmentInput = serde_json::from_value(json).unwrap();
        assert_eq!(back.competition_date, input.competition_date);
    }

    #[test]
    fn test_total_sessions() {
        assert_eq!(AssessmentInput::default().total_sessions(), 10);
    }
}

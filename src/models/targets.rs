use serde::{Deserialize, Serialize};

/// Energy and macro targets derived from one assessment.
///
/// Serialized with the analysis field names the stored snapshot uses
/// (`protein`, `carbs`, `carbLoadPlan`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnergyMacroTargets {
    pub bmr: u32,
    pub tdee: u32,
    pub daily_calories: u32,
    #[serde(rename = "protein")]
    pub protein_grams: u32,
    #[serde(rename = "carbs")]
    pub carb_grams: u32,
    #[serde(rename = "fats")]
    pub fat_grams: u32,
    #[serde(rename = "confidence")]
    pub confidence_score: u32,
    pub muscle_retention_score: u32,
    #[serde(rename = "fatLossRatePerWeek")]
    pub fat_loss_rate_per_week_kg: f64,
    #[serde(rename = "carbLoadPlan")]
    pub carb_load_guidance: String,
    pub water_guidance: String,
}

pub mod assessment;
pub mod food;
pub mod meal;
pub mod plan;
pub mod targets;

pub use assessment::{AssessmentInput, BudgetLevel, Choice, DietType, ExperienceLevel, Phase};
pub use food::{FoodFacts, FoodId};
pub use meal::{GeneratedMeal, MealItem, MealSlot, NutritionTotals};
pub use plan::StagePrepPlan;
pub use targets::EnergyMacroTargets;

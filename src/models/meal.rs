use std::fmt;
use std::ops::{Add, AddAssign};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::PrepError;
use crate::models::FoodId;

/// One of the four fixed daily meal times.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MealSlot {
    Morning,
    Afternoon,
    Evening,
    Night,
}

impl MealSlot {
    pub const ALL: [MealSlot; 4] = [
        MealSlot::Morning,
        MealSlot::Afternoon,
        MealSlot::Evening,
        MealSlot::Night,
    ];

    pub fn title(self) -> &'static str {
        match self {
            MealSlot::Morning => "Morning",
            MealSlot::Afternoon => "Afternoon",
            MealSlot::Evening => "Evening",
            MealSlot::Night => "Night",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            MealSlot::Morning => "morning",
            MealSlot::Afternoon => "afternoon",
            MealSlot::Evening => "evening",
            MealSlot::Night => "night",
        }
    }
}

impl fmt::Display for MealSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for MealSlot {
    type Err = PrepError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        MealSlot::ALL
            .into_iter()
            .find(|slot| slot.key() == wanted)
            .ok_or_else(|| PrepError::UnknownSlot(s.to_string()))
    }
}

/// A catalog food at a fixed portion, with its scaled nutrition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MealItem {
    pub food_id: FoodId,
    pub name: String,
    pub grams: u32,
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
}

/// Summed nutrition of a meal, or of food logged against a slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NutritionTotals {
    pub calories: u32,
    pub protein: u32,
    pub carbs: u32,
    pub fats: u32,
    pub fiber: u32,
    pub estimated_weight: u32,
}

/// Field-wise sum, saturating at `u32::MAX`.
impl Add for NutritionTotals {
    type Output = NutritionTotals;

    fn add(self, other: NutritionTotals) -> NutritionTotals {
        NutritionTotals {
            calories: self.calories.saturating_add(other.calories),
            protein: self.protein.saturating_add(other.protein),
            carbs: self.carbs.saturating_add(other.carbs),
            fats: self.fats.saturating_add(other.fats),
            fiber: self.fiber.saturating_add(other.fiber),
            estimated_weight: self.estimated_weight.saturating_add(other.estimated_weight),
        }
    }
}

impl AddAssign for NutritionTotals {
    fn add_assign(&mut self, other: NutritionTotals) {
        *self = *self + other;
    }
}

/// A generated meal for one slot.
///
/// `totals.calories` is the slot's share of the daily budget, not the sum of
/// the item calories; the other totals are item sums.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedMeal {
    pub title: String,
    pub slot: MealSlot,
    pub items: Vec<MealItem>,
    pub totals: NutritionTotals,
    pub budget_alternative: String,
}

impl GeneratedMeal {
    /// Sum of the item calories, which may differ from `totals.calories`.
    pub fn item_calories(&self) -> u32 {
        self.items.iter().map(|i| i.calories).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_from_str() {
        assert_eq!("Morning".parse::<MealSlot>().unwrap(), MealSlot::Morning);
        assert_eq!(" night ".parse::<MealSlot>().unwrap(), MealSlot::Night);
        assert!(matches!(
            "brunch".parse::<MealSlot>(),
            Err(PrepError::UnknownSlot(_))
        ));
    }

    #[test]
    fn test_slot_order() {
        let mut slots = vec![MealSlot::Night, MealSlot::Morning, MealSlot::Evening];
        slots.sort();
        assert_eq!(
            slots,
            vec![MealSlot::Morning, MealSlot::Evening, MealSlot::Night]
        );
    }

    #[test]
    fn test_totals_add() {
        let a = NutritionTotals {
            calories: 100,
            protein: 10,
            carbs: 5,
            fats: 2,
            fiber: 1,
            estimated_weight: 50,
        };
        let mut b = a;
        b += a;
        assert_eq!(b.calories, 200);
        assert_eq!(b.estimated_weight, 100);
    }
}

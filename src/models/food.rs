use serde::{Deserialize, Serialize};

/// Identifier of a food in the nutrition catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FoodId {
    Oats,
    EggWhites,
    WholeEgg,
    RiceCooked,
    ChickenBreast,
    Paneer,
    DalCooked,
    Roti,
    SoyChunks,
    RoastedChana,
    Milk,
    Banana,
    Sabzi,
    Curd,
}

impl FoodId {
    pub const COUNT: usize = 14;

    pub const ALL: [FoodId; FoodId::COUNT] = [
        FoodId::Oats,
        FoodId::EggWhites,
        FoodId::WholeEgg,
        FoodId::RiceCooked,
        FoodId::ChickenBreast,
        FoodId::Paneer,
        FoodId::DalCooked,
        FoodId::Roti,
        FoodId::SoyChunks,
        FoodId::RoastedChana,
        FoodId::Milk,
        FoodId::Banana,
        FoodId::Sabzi,
        FoodId::Curd,
    ];

    /// Position of this id in [`FoodId::ALL`].
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Name shown on meal cards.
    pub fn label(self) -> &'static str {
        match self {
            FoodId::Oats => "Oats",
            FoodId::EggWhites => "Egg whites",
            FoodId::WholeEgg => "Whole egg",
            FoodId::RiceCooked => "Rice (cooked)",
            FoodId::ChickenBreast => "Chicken breast",
            FoodId::Paneer => "Paneer",
            FoodId::DalCooked => "Dal",
            FoodId::Roti => "Roti",
            FoodId::SoyChunks => "Soy chunks",
            FoodId::RoastedChana => "Roasted chana",
            FoodId::Milk => "Milk",
            FoodId::Banana => "Banana",
            FoodId::Sabzi => "Sabzi",
            FoodId::Curd => "Curd",
        }
    }
}

/// Nutrition facts per 100 g of a food.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct FoodFacts {
    pub calories: f64,
    pub protein: f64,
    pub carbs: f64,
    pub fats: f64,
}

impl FoodFacts {
    pub const fn new(calories: f64, protein: f64, carbs: f64, fats: f64) -> Self {
        Self {
            calories,
            protein,
            carbs,
            fats,
        }
    }

    /// Facts for `grams` of the food (unrounded).
    #[inline]
    pub fn scaled(&self, grams: f64) -> FoodFacts {
        let ratio = grams / 100.0;
        FoodFacts {
            calories: self.calories * ratio,
            protein: self.protein * ratio,
            carbs: self.carbs * ratio,
            fats: self.fats * ratio,
        }
    }

    /// Non-negative, finite values only.
    pub fn is_valid(&self) -> bool {
        [self.calories, self.protein, self.carbs, self.fats]
            .into_iter()
            .all(|v| v.is_finite() && v >= 0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_matches_all_order() {
        for (i, id) in FoodId::ALL.iter().enumerate() {
            assert_eq!(id.index(), i);
        }
    }

    #[test]
    fn test_scaled() {
        let facts = FoodFacts::new(200.0, 10.0, 20.0, 5.0);
        let half = facts.scaled(50.0);
        assert!((half.calories - 100.0).abs() < 1e-9);
        assert!((half.fats - 2.5).abs() < 1e-9);
    }

    #[test]
    fn test_is_valid() {
        assert!(FoodFacts::new(1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!FoodFacts::new(-1.0, 0.0, 0.0, 0.0).is_valid());
        assert!(!FoodFacts::new(f64::NAN, 0.0, 0.0, 0.0).is_valid());
    }

    #[test]
    fn test_serde_key() {
        let json = serde_json::to_string(&FoodId::RoastedChana).unwrap();
        assert_eq!(json, "\"roastedChana\"");
    }
}

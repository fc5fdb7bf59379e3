use std::sync::LazyLock;

use crate::error::{PrepError, Result};
use crate::models::{FoodFacts, FoodId};

/// Per-100g facts for the standard catalog.
const STANDARD_ENTRIES: [(FoodId, FoodFacts); FoodId::COUNT] = [
    (FoodId::Oats, FoodFacts::new(389.0, 16.9, 66.3, 6.9)),
    (FoodId::EggWhites, FoodFacts::new(52.0, 11.0, 0.7, 0.2)),
    (FoodId::WholeEgg, FoodFacts::new(143.0, 13.0, 1.1, 10.0)),
    (FoodId::RiceCooked, FoodFacts::new(130.0, 2.7, 28.0, 0.3)),
    (FoodId::ChickenBreast, FoodFacts::new(165.0, 31.0, 0.0, 3.6)),
    (FoodId::Paneer, FoodFacts::new(265.0, 18.0, 6.0, 20.0)),
    (FoodId::DalCooked, FoodFacts::new(116.0, 9.0, 20.0, 0.4)),
    (FoodId::Roti, FoodFacts::new(297.0, 9.0, 49.0, 3.0)),
    (FoodId::SoyChunks, FoodFacts::new(345.0, 52.0, 33.0, 0.5)),
    (FoodId::RoastedChana, FoodFacts::new(369.0, 22.0, 60.0, 6.0)),
    (FoodId::Milk, FoodFacts::new(61.0, 3.2, 4.8, 3.3)),
    (FoodId::Banana, FoodFacts::new(89.0, 1.1, 23.0, 0.3)),
    (FoodId::Sabzi, FoodFacts::new(45.0, 2.0, 8.0, 1.0)),
    (FoodId::Curd, FoodFacts::new(60.0, 3.5, 4.7, 3.0)),
];

/// The built-in catalog, shared read-only.
pub static FOOD_CATALOG: LazyLock<FoodCatalog> = LazyLock::new(FoodCatalog::standard);

/// Read-only mapping from every [`FoodId`] to its per-100g facts.
///
/// Construction fails unless every id has valid facts, so lookups are total.
#[derive(Debug, Clone, PartialEq)]
pub struct FoodCatalog {
    facts: [FoodFacts; FoodId::COUNT],
}

impl FoodCatalog {
    /// Build a catalog from entries; later entries for the same id win.
    pub fn new<I>(entries: I) -> Result<Self>
    where
        I: IntoIterator<Item = (FoodId, FoodFacts)>,
    {
        let mut slots: [Option<FoodFacts>; FoodId::COUNT] = [None; FoodId::COUNT];
        for (id, facts) in entries {
            if !facts.is_valid() {
                return Err(PrepError::invalid(
                    "catalog",
                    format!("has negative or non-finite facts for {:?}", id),
                ));
            }
            slots[id.index()] = Some(facts);
        }

        let mut facts = [FoodFacts::default(); FoodId::COUNT];
        for id in FoodId::ALL {
            facts[id.index()] = slots[id.index()].ok_or_else(|| {
                PrepError::invalid("catalog", format!("is missing an entry for {:?}", id))
            })?;
        }

        Ok(Self { facts })
    }

    /// The built-in table.
    pub fn standard() -> Self {
        let mut facts = [FoodFacts::default(); FoodId::COUNT];
        for (id, entry) in STANDARD_ENTRIES {
            facts[id.index()] = entry;
        }
        Self { facts }
    }

    #[inline]
    pub fn get(&self, id: FoodId) -> &FoodFacts {
        &self.facts[id.index()]
    }

    pub fn len(&self) -> usize {
        self.facts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.facts.is_empty()
    }
}

impl Default for FoodCatalog {
    fn default() -> Self {
        Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_covers_every_id() {
        let rebuilt = FoodCatalog::new(STANDARD_ENTRIES).unwrap();
        assert_eq!(rebuilt, FoodCatalog::standard());
        assert_eq!(FOOD_CATALOG.len(), FoodId::COUNT);
    }

    #[test]
    fn test_lookup() {
        let oats = FOOD_CATALOG.get(FoodId::Oats);
        assert_eq!(oats.calories, 389.0);
        assert_eq!(oats.protein, 16.9);
        let chicken = FOOD_CATALOG.get(FoodId::ChickenBreast);
        assert_eq!(chicken.carbs, 0.0);
    }

    #[test]
    fn test_missing_entry_rejected() {
        let partial = STANDARD_ENTRIES
            .into_iter()
            .filter(|(id, _)| *id != FoodId::Curd);
        let err = FoodCatalog::new(partial).unwrap_err();
        assert_eq!(err.field(), Some("catalog"));
    }

    #[test]
    fn test_negative_facts_rejected() {
        let mut entries = STANDARD_ENTRIES.to_vec();
        entries.push((FoodId::Milk, FoodFacts::new(-5.0, 0.0, 0.0, 0.0)));
        assert!(FoodCatalog::new(entries).is_err());
    }

    #[test]
    fn test_override_entry() {
        let mut entries = STANDARD_ENTRIES.to_vec();
        entries.push((FoodId::Milk, FoodFacts::new(42.0, 3.4, 5.0, 1.0)));
        let catalog = FoodCatalog::new(entries).unwrap();
        assert_eq!(catalog.get(FoodId::Milk).calories, 42.0);
    }
}

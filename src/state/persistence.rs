use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::error::{PrepError, Result};
use crate::intake::revalidate;
use crate::models::StagePrepPlan;
use crate::state::MealPlannerState;

/// Load/save of the most recent plan snapshot.
///
/// The engine never touches storage itself; callers pick a store.
pub trait SnapshotStore {
    /// The stored plan, or `None` when nothing usable is stored.
    fn load(&mut self) -> Result<Option<StagePrepPlan>>;

    /// Replace the stored plan.
    fn save(&mut self, plan: &StagePrepPlan) -> Result<()>;

    fn clear(&mut self) -> Result<()>;
}

/// Snapshot kept as one pretty-printed JSON file.
///
/// A file that no longer parses, or whose form fails validation, is deleted
/// and treated as empty.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotStore for JsonFileStore {
    fn load(&mut self) -> Result<Option<StagePrepPlan>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        let checked = serde_json::from_str::<StagePrepPlan>(&content)
            .map_err(PrepError::from)
            .and_then(check_stored_form);

        match checked {
            Ok(plan) => Ok(Some(plan)),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "discarding unusable snapshot");
                fs::remove_file(&self.path)?;
                Ok(None)
            }
        }
    }

    fn save(&mut self, plan: &StagePrepPlan) -> Result<()> {
        save_json(&self.path, plan)?;
        info!(path = %self.path.display(), "snapshot saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        if self.path.exists() {
            fs::remove_file(&self.path)?;
        }
        Ok(())
    }
}

/// A stored form must still pass intake validation unchanged.
fn check_stored_form(plan: StagePrepPlan) -> Result<StagePrepPlan> {
    let normalized = revalidate(&plan.input)?;
    if normalized != plan.input {
        return Err(PrepError::invalid("form", "stored form is not normalized"));
    }
    Ok(plan)
}

/// In-process snapshot store.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    snapshot: Option<StagePrepPlan>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SnapshotStore for MemoryStore {
    fn load(&mut self) -> Result<Option<StagePrepPlan>> {
        Ok(self.snapshot.clone())
    }

    fn save(&mut self, plan: &StagePrepPlan) -> Result<()> {
        self.snapshot = Some(plan.clone());
        Ok(())
    }

    fn clear(&mut self) -> Result<()> {
        self.snapshot = None;
        Ok(())
    }
}

/// Load the meal planner tracker; a missing file gives the defaults.
pub fn load_tracker<P: AsRef<Path>>(path: P) -> Result<MealPlannerState> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(MealPlannerState::default());
    }
    load_json(path)
}

pub fn save_tracker<P: AsRef<Path>>(path: P, state: &MealPlannerState) -> Result<()> {
    save_json(path, state)
}

fn save_json<P: AsRef<Path>, T: Serialize + ?Sized>(path: P, value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    fs::write(path, json)?;
    Ok(())
}

fn load_json<P: AsRef<Path>, T: DeserializeOwned>(path: P) -> Result<T> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{AssessmentInput, MealSlot, NutritionTotals};
    use crate::planner::analyze_input;
    use std::io::Write;
    use tempfile::{NamedTempFile, tempdir};

    #[test]
    fn test_snapshot_roundtrip() {
        let dir = tempdir().unwrap();
        let mut store = JsonFileStore::new(dir.path().join("snapshot.json"));
        assert!(store.load().unwrap().is_none());

        let plan = analyze_input(AssessmentInput::default());
        store.save(&plan).unwrap();

        let loaded = store.load().unwrap().unwrap();
        assert_eq!(loaded, plan);
    }

    #[test]
    fn test_snapshot_uses_form_field_names() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let mut store = JsonFileStore::new(&path);
        store.save(&analyze_input(AssessmentInput::default())).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(value["form"]["phase"], "Cutting");
        assert_eq!(value["analysis"]["dailyCalories"], 2509);
        assert_eq!(value["meals"]["morning"]["title"], "Morning");
    }

    #[test]
    fn test_corrupt_snapshot_discarded() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(b"{ not json").unwrap();
        let path = file.path().to_path_buf();

        let mut store = JsonFileStore::new(&path);
        assert!(store.load().unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_out_of_bounds_form_discarded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let mut store = JsonFileStore::new(&path);
        store.save(&analyze_input(AssessmentInput::default())).unwrap();

        let mut value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        value["form"]["currentWeightKg"] = serde_json::json!(-78.0);
        fs::write(&path, value.to_string()).unwrap();

        assert!(store.load().unwrap().is_none());
        assert!(!path.exists());
    }

    #[test]
    fn test_unclamped_priority_discarded() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let mut store = JsonFileStore::new(&path);
        store.save(&analyze_input(AssessmentInput::default())).unwrap();

        let mut value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        value["form"]["fatLossPriority"] = serde_json::json!(400.0);
        fs::write(&path, value.to_string()).unwrap();

        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_clear() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("snapshot.json");
        let mut store = JsonFileStore::new(&path);
        store.save(&analyze_input(AssessmentInput::default())).unwrap();
        store.clear().unwrap();
        assert!(!path.exists());
        // clearing twice is fine
        store.clear().unwrap();
    }

    #[test]
    fn test_memory_store() {
        let mut store = MemoryStore::new();
        assert!(store.load().unwrap().is_none());
        let plan = analyze_input(AssessmentInput::default());
        store.save(&plan).unwrap();
        assert_eq!(store.load().unwrap(), Some(plan));
        store.clear().unwrap();
        assert!(store.load().unwrap().is_none());
    }

    #[test]
    fn test_tracker_roundtrip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tracker.json");

        let mut state = load_tracker(&path).unwrap();
        assert_eq!(state, MealPlannerState::default());

        state.add_to_meal(
            MealSlot::Afternoon,
            "Dal rice",
            NutritionTotals {
                calories: 420,
                ..Default::default()
            },
        );
        save_tracker(&path, &state).unwrap();

        let reloaded = load_tracker(&path).unwrap();
        assert_eq!(reloaded, state);
    }
}

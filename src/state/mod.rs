mod manager;
mod persistence;

pub use manager::{MealPlannerState, PhaseStrategy, ScanEntry};
pub use persistence::{JsonFileStore, MemoryStore, SnapshotStore, load_tracker, save_tracker};

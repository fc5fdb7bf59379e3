pub mod export;
pub mod prompts;
pub mod render;

pub use export::{write_plan, write_plan_csv};
pub use prompts::{
    prompt_body_metrics, prompt_priorities, prompt_training_profile, prompt_yes_no,
    run_assessment_wizard,
};
pub use render::{display_meal, display_plan, display_slot_progress, display_tracker};

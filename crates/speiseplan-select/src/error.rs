use speiseplan_core::{Category, CoreError, Weekday};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlanError {
    #[error("No eligible items for category {category} on {day}")]
    NoCandidates { category: Category, day: Weekday },
    #[error("Invalid planner configuration: {0}")]
    Config(String),
    #[error("Config deserialization failed: {0}")]
    Snapshot(#[from] serde_json::Error),
    #[error(transparent)]
    Core(#[from] CoreError),
}

pub type Result<T> = std::result::Result<T, PlanError>;

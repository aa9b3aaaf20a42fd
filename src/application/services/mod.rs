pub mod clone_executor;
pub mod status_classifier;

pub use clone_executor::{CloneExecutor, CloneOutcome};
pub use status_classifier::StatusClassifier;

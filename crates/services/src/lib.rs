#![forbid(unsafe_code)]

pub mod error;
pub mod learner;
pub mod learning_services;

pub use error::{LearnerStateError, LearningServicesError};
pub use learner::{LearnerSnapshot, LearnerStateService};
pub use learning_services::LearningServices;

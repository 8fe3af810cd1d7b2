mod keys;
mod service;
mod snapshot;

pub use service::LearnerStateService;
pub use snapshot::LearnerSnapshot;

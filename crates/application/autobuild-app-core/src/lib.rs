pub mod app;
pub mod app_core;
mod async_runtime;
pub mod domain;
pub mod error;
pub mod orchestrator;
pub mod paths;
pub mod persistence;
pub mod pipeline;
pub mod ports;

pub use app::AutoBuildApplication;
pub use app_core::*;
pub use domain::{AppSettings, AppState, BuildForm, DependencyStatus, Notification};
pub use error::{missing_dependencies_message, BuildError};
pub use orchestrator::{BuildOrchestrator, BuildReporter};
pub use pipeline::{BuildEnvelope, BuildEvent, BuildOutcome, BuildRunId, BuildState};
pub use ports::*;

pub mod probe;
pub mod process;

// Re-exports for convenience
pub use probe::ToolProbe;
pub use process::{ProcessOutcome, ProcessRunner, RunError};

pub mod layout;
pub mod request;
pub mod steps;
pub mod templates;

pub use layout::{BuildLayout, ProjectPaths};
pub use request::{sanitize_product_name, BuildInput, BuildRequest, RequestError};
pub use steps::{BuildStage, CommandLine, PipelineStep, StepPlan, ToolPaths};
pub use templates::{render_manifest, ManifestError};

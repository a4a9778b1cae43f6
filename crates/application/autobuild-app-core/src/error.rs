use camino::Utf8PathBuf;
use thiserror::Error;

use autobuild_core::{ManifestError, RequestError};
use autobuild_infra::RunError;

const INSTALL_HINT: &str =
    "Please ensure Node.js, npm, and npx are properly installed and available in your system's PATH.";

/// Text shown when required tools are absent, both at startup and when a
/// build refuses to start.
pub fn missing_dependencies_message(missing: &[String]) -> String {
    format!("Missing dependencies: {}.\n{INSTALL_HINT}", missing.join(", "))
}

#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Missing dependencies: {}", .missing.join(", "))]
    MissingDependency { missing: Vec<String> },

    #[error("Could not resolve the full path for {tool}.")]
    ToolNotResolvable { tool: String },

    #[error(transparent)]
    Validation(#[from] RequestError),

    #[error("Could not generate package.json: {0}")]
    Manifest(#[from] ManifestError),

    #[error("`{command}` exited with {}", describe_exit(*.exit_code))]
    ProcessFailed {
        command: String,
        exit_code: Option<i32>,
    },

    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("lost output of `{command}`: {source}")]
    ProcessIo {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Build finished, but no installer was found in the dist folder.")]
    ArtifactNotFound { dist_dir: Utf8PathBuf },

    #[error("Failed to {action} {path}: {source}")]
    Io {
        action: &'static str,
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Could not save build log. Reason: {source}")]
    LogPersistence {
        path: Utf8PathBuf,
        #[source]
        source: std::io::Error,
    },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code".to_string(),
    }
}

impl BuildError {
    pub fn io(action: &'static str, path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        BuildError::Io {
            action,
            path: path.into(),
            source,
        }
    }

    /// Single summary shown to the user when a build ends with this error.
    pub fn user_message(&self) -> String {
        match self {
            BuildError::MissingDependency { missing } => missing_dependencies_message(missing),
            BuildError::ProcessFailed { command, .. } => {
                format!("A build step failed ('{command}'). See log above for details.")
            }
            BuildError::Validation(e) => e.to_string(),
            BuildError::ArtifactNotFound { .. } => self.to_string(),
            other => format!("An unexpected error occurred: {other}"),
        }
    }
}

impl From<RunError> for BuildError {
    fn from(e: RunError) -> Self {
        match e {
            RunError::Spawn { command, source } => BuildError::Spawn { command, source },
            RunError::ProcessFailed { command, exit_code } => {
                BuildError::ProcessFailed { command, exit_code }
            }
            RunError::Io { command, source } => BuildError::ProcessIo { command, source },
        }
    }
}

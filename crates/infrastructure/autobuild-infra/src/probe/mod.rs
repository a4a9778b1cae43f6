use std::ffi::OsString;
use std::path::PathBuf;

use autobuild_config::REQUIRED_TOOLS;

/// Looks tools up on an executable search path.
///
/// Without an explicit path the process `PATH` is consulted on every call, so
/// a re-check picks up tools installed while the app is open.
#[derive(Debug, Clone, Default)]
pub struct ToolProbe {
    search_path: Option<OsString>,
}

impl ToolProbe {
    pub fn from_env() -> Self {
        Self { search_path: None }
    }

    pub fn with_search_path(paths: impl Into<OsString>) -> Self {
        Self {
            search_path: Some(paths.into()),
        }
    }

    pub fn resolve(&self, tool: &str) -> Option<PathBuf> {
        let res = match &self.search_path {
            Some(paths) => {
                let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
                which::which_in(tool, Some(paths), cwd)
            }
            None => which::which(tool),
        };

        match res {
            Ok(path) => {
                tracing::debug!("Found {tool} at: {}", path.display());
                Some(path)
            }
            Err(e) => {
                tracing::debug!("{tool} not found on search path: {e}");
                None
            }
        }
    }

    /// Names from `tools` that cannot be resolved, in the given order.
    pub fn missing(&self, tools: &[&str]) -> Vec<String> {
        tools
            .iter()
            .filter(|tool| self.resolve(tool).is_none())
            .map(|tool| tool.to_string())
            .collect()
    }

    pub fn missing_required(&self) -> Vec<String> {
        self.missing(&REQUIRED_TOOLS)
    }
}

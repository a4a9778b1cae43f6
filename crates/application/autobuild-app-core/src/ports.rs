use std::path::PathBuf;

use async_trait::async_trait;
use camino::Utf8Path;

use autobuild_core::CommandLine;
use autobuild_infra::{ProcessOutcome, ProcessRunner, RunError, ToolProbe};

use crate::domain::AppSettings;

#[async_trait]
pub trait CommandRunner: Send + Sync + 'static {
    async fn run(
        &self,
        command: &CommandLine,
        working_dir: &Utf8Path,
        on_line: &mut (dyn FnMut(String) + Send),
    ) -> Result<ProcessOutcome, RunError>;
}

pub trait DependencyProbe: Send + Sync + 'static {
    fn missing_required(&self) -> Vec<String>;
    fn resolve(&self, tool: &str) -> Option<PathBuf>;
}

pub trait SettingsRepo: Send + Sync + 'static {
    fn load(&self) -> anyhow::Result<AppSettings>;
    fn save(&self, settings: &AppSettings) -> anyhow::Result<()>;
}

#[async_trait]
impl CommandRunner for ProcessRunner {
    async fn run(
        &self,
        command: &CommandLine,
        working_dir: &Utf8Path,
        on_line: &mut (dyn FnMut(String) + Send),
    ) -> Result<ProcessOutcome, RunError> {
        ProcessRunner::run(self, command, working_dir, on_line).await
    }
}

impl DependencyProbe for ToolProbe {
    fn missing_required(&self) -> Vec<String> {
        ToolProbe::missing_required(self)
    }

    fn resolve(&self, tool: &str) -> Option<PathBuf> {
        ToolProbe::resolve(self, tool)
    }
}

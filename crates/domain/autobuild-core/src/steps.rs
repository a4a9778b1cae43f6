use std::fmt;
use std::path::PathBuf;

use camino::Utf8PathBuf;

use crate::layout::ProjectPaths;

/// Stages of a build in the order they run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuildStage {
    CheckDependencies,
    PrepareWorkspace,
    Scaffold,
    Customize,
    Install,
    Bundle,
    Package,
    CollectArtifacts,
}

impl BuildStage {
    pub const ALL: [BuildStage; 8] = [
        BuildStage::CheckDependencies,
        BuildStage::PrepareWorkspace,
        BuildStage::Scaffold,
        BuildStage::Customize,
        BuildStage::Install,
        BuildStage::Bundle,
        BuildStage::Package,
        BuildStage::CollectArtifacts,
    ];

    /// 1-based position, as shown in the log.
    pub fn number(self) -> usize {
        Self::ALL
            .iter()
            .position(|s| *s == self)
            .map(|ix| ix + 1)
            .unwrap_or(0)
    }

    pub fn title(self) -> &'static str {
        match self {
            BuildStage::CheckDependencies => "Checking dependencies",
            BuildStage::PrepareWorkspace => "Setting up temporary build directory",
            BuildStage::Scaffold => "Creating React app",
            BuildStage::Customize => "Customizing project files",
            BuildStage::Install => "Installing dependencies",
            BuildStage::Bundle => "Building React app",
            BuildStage::Package => "Building Electron app",
            BuildStage::CollectArtifacts => "Copying build artifact to output folder",
        }
    }

    /// Log line announcing the stage.
    pub fn banner(self) -> String {
        let detail = match self {
            BuildStage::Scaffold => " with 'create-react-app'. This may take a while",
            BuildStage::Install => " with 'npm install'",
            BuildStage::Bundle => " with 'npm run build'",
            BuildStage::Package => " with 'npm run dist'",
            _ => "",
        };
        format!("Step {}: {}{}...", self.number(), self.title(), detail)
    }
}

/// Program plus arguments, passed to the OS as a vector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommandLine {
    pub program: PathBuf,
    pub args: Vec<String>,
}

impl CommandLine {
    pub fn new<I, S>(program: impl Into<PathBuf>, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            program: program.into(),
            args: args.into_iter().map(Into::into).collect(),
        }
    }

    pub fn program_display(&self) -> String {
        self.program.to_string_lossy().into_owned()
    }

    pub fn argv(&self) -> Vec<String> {
        std::iter::once(self.program_display())
            .chain(self.args.iter().cloned())
            .collect()
    }

    /// True when the trailing arguments equal `tail`.
    pub fn matches_tail(&self, tail: &[&str]) -> bool {
        self.args.len() >= tail.len()
            && self.args[self.args.len() - tail.len()..]
                .iter()
                .zip(tail)
                .all(|(a, b)| a == b)
    }
}

impl fmt::Display for CommandLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.argv().join(" "))
    }
}

/// One external invocation of the fixed pipeline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PipelineStep {
    pub stage: BuildStage,
    pub command: CommandLine,
    pub working_dir: Utf8PathBuf,
}

/// Absolute paths of the tools the pipeline invokes directly.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ToolPaths {
    pub npx: PathBuf,
    pub npm: PathBuf,
}

/// The four external invocations of a build.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepPlan {
    pub scaffold: PipelineStep,
    pub install: PipelineStep,
    pub bundle: PipelineStep,
    pub package: PipelineStep,
}

impl StepPlan {
    pub fn new(
        tools: &ToolPaths,
        work_dir: &Utf8PathBuf,
        project: &ProjectPaths,
        package_name: &str,
    ) -> Self {
        let in_project = |stage: BuildStage, args: &[&str]| PipelineStep {
            stage,
            command: CommandLine::new(tools.npm.clone(), args.iter().copied()),
            working_dir: project.root().to_path_buf(),
        };

        Self {
            scaffold: PipelineStep {
                stage: BuildStage::Scaffold,
                command: CommandLine::new(
                    tools.npx.clone(),
                    ["create-react-app".to_string(), package_name.to_string()],
                ),
                working_dir: work_dir.clone(),
            },
            install: in_project(BuildStage::Install, &["install"]),
            bundle: in_project(BuildStage::Bundle, &["run", "build"]),
            package: in_project(BuildStage::Package, &["run", "dist"]),
        }
    }

    pub fn in_order(&self) -> [&PipelineStep; 4] {
        [&self.scaffold, &self.install, &self.bundle, &self.package]
    }
}

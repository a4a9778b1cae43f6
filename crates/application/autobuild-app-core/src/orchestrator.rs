use std::sync::Arc;

use anyhow::Context;
use camino::{Utf8Path, Utf8PathBuf};
use tokio::sync::mpsc;

use autobuild_config::{is_artifact_name, BUILD_LOG_FILE_NAME};
use autobuild_core::templates::{ELECTRON_JS, INDEX_JS, PRELOAD_JS};
use autobuild_core::{
    render_manifest, BuildInput, BuildLayout, BuildRequest, BuildStage, PipelineStep,
    ProjectPaths, StepPlan, ToolPaths,
};

use crate::error::BuildError;
use crate::pipeline::{BuildEnvelope, BuildEvent, BuildOutcome, BuildRunId};
use crate::ports::{CommandRunner, DependencyProbe};

/// Event sender for one run that also keeps every log line it emitted.
pub struct BuildReporter {
    run_id: BuildRunId,
    tx: mpsc::UnboundedSender<BuildEnvelope>,
    lines: Vec<String>,
}

impl BuildReporter {
    pub fn new(run_id: BuildRunId, tx: mpsc::UnboundedSender<BuildEnvelope>) -> Self {
        Self {
            run_id,
            tx,
            lines: Vec::new(),
        }
    }

    pub fn run_id(&self) -> BuildRunId {
        self.run_id
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    pub fn log(&mut self, line: impl Into<String>) {
        let line = line.into();
        tracing::info!(target: "autobuild::build", "{line}");
        self.lines.push(line.clone());
        self.send(BuildEvent::Log(line));
    }

    pub fn status(&mut self, text: impl Into<String>) {
        self.send(BuildEvent::Status(text.into()));
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.send(BuildEvent::Success(message.into()));
    }

    pub fn failure(&mut self, message: impl Into<String>) {
        self.send(BuildEvent::Failure(message.into()));
    }

    pub fn done(&mut self) {
        self.send(BuildEvent::Done);
    }

    fn send(&self, event: BuildEvent) {
        // The receiver going away only means nobody is watching anymore.
        let _ = self.tx.send(BuildEnvelope {
            run_id: self.run_id,
            event,
        });
    }
}

/// Runs the fixed scaffold/install/bundle/package sequence for one request.
#[derive(Clone)]
pub struct BuildOrchestrator {
    runner: Arc<dyn CommandRunner>,
    probe: Arc<dyn DependencyProbe>,
    layout: BuildLayout,
}

impl BuildOrchestrator {
    pub fn new(
        runner: Arc<dyn CommandRunner>,
        probe: Arc<dyn DependencyProbe>,
        layout: BuildLayout,
    ) -> Self {
        Self {
            runner,
            probe,
            layout,
        }
    }

    pub fn layout(&self) -> &BuildLayout {
        &self.layout
    }

    /// Runs the build on a dedicated worker thread. Every event is tagged
    /// with `run_id`; the last one is always `Done`.
    pub fn start(
        &self,
        input: BuildInput,
        run_id: BuildRunId,
        tx: mpsc::UnboundedSender<BuildEnvelope>,
    ) -> anyhow::Result<()> {
        let this = self.clone();
        std::thread::Builder::new()
            .name("autobuild-worker".into())
            .spawn(move || {
                let mut reporter = BuildReporter::new(run_id, tx);
                let rt = match crate::async_runtime::runtime() {
                    Ok(rt) => rt,
                    Err(e) => {
                        reporter.failure(format!("Failed to start async runtime: {e}"));
                        reporter.done();
                        return;
                    }
                };
                rt.block_on(this.execute(&input, &mut reporter));
            })
            .context("Failed to start build worker thread")?;
        Ok(())
    }

    pub async fn execute(&self, input: &BuildInput, reporter: &mut BuildReporter) -> BuildOutcome {
        let mut output_folder = None;
        let res = self.run_steps(input, reporter, &mut output_folder).await;

        let outcome = match res {
            Ok((folder, artifacts)) => {
                let message = format!("Build successful!\nInstaller located in: {folder}");
                tracing::info!(run_id = %reporter.run_id(), artifacts = artifacts.len(), "build succeeded");
                reporter.success(message.clone());
                BuildOutcome::Succeeded {
                    output_folder: folder,
                    artifacts,
                    message,
                }
            }
            Err(e) => {
                tracing::warn!(run_id = %reporter.run_id(), error = %e, "build failed");
                let message = e.user_message();
                reporter.log(message.clone());
                reporter.failure(message.clone());
                BuildOutcome::Failed { message }
            }
        };

        if let Some(folder) = output_folder {
            persist_log(&folder, reporter).await;
        }
        reporter.done();
        outcome
    }

    async fn run_steps(
        &self,
        input: &BuildInput,
        reporter: &mut BuildReporter,
        output_folder: &mut Option<Utf8PathBuf>,
    ) -> Result<(Utf8PathBuf, Vec<Utf8PathBuf>), BuildError> {
        let request = BuildRequest::from_input(input);
        let folder = self.layout.output_folder(request.product_name());
        *output_folder = Some(folder.clone());
        tokio::fs::create_dir_all(&folder)
            .await
            .map_err(|e| BuildError::io("create output folder", folder.clone(), e))?;
        request.validate()?;

        enter(reporter, BuildStage::CheckDependencies);
        let missing = self.probe.missing_required();
        if !missing.is_empty() {
            return Err(BuildError::MissingDependency { missing });
        }
        let tools = self.resolve_tools()?;
        reporter.log("Dependencies found.");

        enter(reporter, BuildStage::PrepareWorkspace);
        self.recreate_work_dir(reporter).await?;
        reporter.log("Temporary directory created.");

        let project = self.layout.project(request.package_name());
        let plan = StepPlan::new(
            &tools,
            &self.layout.work_dir,
            &project,
            request.package_name(),
        );

        self.run_step(&plan.scaffold, reporter).await?;
        reporter.log("React app created.");

        enter(reporter, BuildStage::Customize);
        write_project_files(&project, &request).await?;
        reporter.log("Project files customized.");

        self.run_step(&plan.install, reporter).await?;
        reporter.log("Dependencies installed.");

        self.run_step(&plan.bundle, reporter).await?;
        reporter.log("React app built.");

        self.run_step(&plan.package, reporter).await?;
        reporter.log("Electron app built.");

        enter(reporter, BuildStage::CollectArtifacts);
        let dist_dir = project.dist_dir();
        let artifacts = collect_artifacts(&dist_dir, &folder, reporter).await?;
        if artifacts.is_empty() {
            return Err(BuildError::ArtifactNotFound { dist_dir });
        }

        Ok((folder, artifacts))
    }

    fn resolve_tools(&self) -> Result<ToolPaths, BuildError> {
        let resolve = |tool: &str| {
            self.probe
                .resolve(tool)
                .ok_or_else(|| BuildError::ToolNotResolvable {
                    tool: tool.to_string(),
                })
        };
        Ok(ToolPaths {
            npx: resolve("npx")?,
            npm: resolve("npm")?,
        })
    }

    async fn recreate_work_dir(&self, reporter: &mut BuildReporter) -> Result<(), BuildError> {
        let work_dir = &self.layout.work_dir;
        if tokio::fs::try_exists(work_dir).await.unwrap_or(false) {
            reporter.log(format!("Removing existing temporary directory: {work_dir}"));
            if let Err(e) = tokio::fs::remove_dir_all(work_dir).await {
                tracing::warn!(path = %work_dir, "failed to remove temporary directory: {e}");
            }
        }
        tokio::fs::create_dir_all(work_dir)
            .await
            .map_err(|e| BuildError::io("create", work_dir.clone(), e))
    }

    async fn run_step(
        &self,
        step: &PipelineStep,
        reporter: &mut BuildReporter,
    ) -> Result<(), BuildError> {
        enter(reporter, step.stage);
        let mut forward = |line: String| reporter.log(line);
        self.runner
            .run(&step.command, &step.working_dir, &mut forward)
            .await?;
        Ok(())
    }
}

fn enter(reporter: &mut BuildReporter, stage: BuildStage) {
    reporter.status(format!(
        "Step {} of {}: {}...",
        stage.number(),
        BuildStage::ALL.len(),
        stage.title()
    ));
    reporter.log(stage.banner());
}

async fn write_project_files(
    project: &ProjectPaths,
    request: &BuildRequest,
) -> Result<(), BuildError> {
    let manifest = render_manifest(request.product_name(), request.package_name())?;
    let files = [
        (project.app_js(), request.source_code()),
        (project.index_js(), INDEX_JS),
        (project.electron_js(), ELECTRON_JS),
        (project.preload_js(), PRELOAD_JS),
        (project.manifest(), manifest.as_str()),
    ];

    for (path, contents) in files {
        if let Err(e) = tokio::fs::write(&path, contents).await {
            return Err(BuildError::io("write", path, e));
        }
    }
    Ok(())
}

async fn collect_artifacts(
    dist_dir: &Utf8Path,
    output_folder: &Utf8Path,
    reporter: &mut BuildReporter,
) -> Result<Vec<Utf8PathBuf>, BuildError> {
    let mut entries = match tokio::fs::read_dir(dist_dir).await {
        Ok(entries) => entries,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            reporter.log(format!("No dist folder at {dist_dir}"));
            return Ok(Vec::new());
        }
        Err(e) => return Err(BuildError::io("read", dist_dir, e)),
    };

    let mut names = Vec::new();
    while let Some(entry) = entries
        .next_entry()
        .await
        .map_err(|e| BuildError::io("read", dist_dir, e))?
    {
        let is_file = entry.file_type().await.map(|t| t.is_file()).unwrap_or(false);
        if !is_file {
            continue;
        }
        let Ok(name) = entry.file_name().into_string() else {
            continue;
        };
        if is_artifact_name(&name) {
            names.push(name);
        }
    }
    names.sort();

    let mut copied = Vec::with_capacity(names.len());
    for name in names {
        let dest = output_folder.join(&name);
        tokio::fs::copy(dist_dir.join(&name), &dest)
            .await
            .map_err(|e| BuildError::io("copy artifact to", dest.clone(), e))?;
        reporter.log(format!("Copied: {name} to {output_folder}"));
        copied.push(dest);
    }
    Ok(copied)
}

async fn persist_log(output_folder: &Utf8Path, reporter: &mut BuildReporter) {
    reporter.log("Finalizing build: saving log file...");
    let path = output_folder.join(BUILD_LOG_FILE_NAME);
    let contents = reporter.lines().join("\n");

    match tokio::fs::write(&path, contents).await {
        Ok(()) => reporter.log(format!("Build log saved to: {path}")),
        Err(source) => {
            let e = BuildError::LogPersistence { path, source };
            tracing::warn!("{e}");
            reporter.log(format!("Error: {e}"));
        }
    }
}

use std::path::Path;
use std::sync::Arc;

use anyhow::Context;
use tokio::sync::mpsc;

use autobuild_infra::{ProcessRunner, ToolProbe};

use crate::app_core::{reduce, DomainEvent};
use crate::domain::AppState;
use crate::orchestrator::BuildOrchestrator;
use crate::persistence::FilePersistence;
use crate::pipeline::{BuildEnvelope, BuildRunId};
use crate::ports::{CommandRunner, DependencyProbe, SettingsRepo};

pub struct AutoBuildApplication {
    pub state: AppState,

    settings_repo: Box<dyn SettingsRepo>,
    runner: Arc<dyn CommandRunner>,
    probe: Arc<dyn DependencyProbe>,

    msg_rx: mpsc::UnboundedReceiver<BuildEnvelope>,
    msg_tx: mpsc::UnboundedSender<BuildEnvelope>,
}

impl Default for AutoBuildApplication {
    fn default() -> Self {
        Self::new()
    }
}

impl AutoBuildApplication {
    pub fn new() -> Self {
        Self::with_ports(
            FilePersistence::new(),
            Arc::new(ProcessRunner::new()),
            Arc::new(ToolProbe::from_env()),
        )
    }

    pub fn with_ports(
        settings_repo: impl SettingsRepo,
        runner: Arc<dyn CommandRunner>,
        probe: Arc<dyn DependencyProbe>,
    ) -> Self {
        let (msg_tx, msg_rx) = mpsc::unbounded_channel();
        let state = AppState {
            layout: crate::paths::resolve_layout(&Default::default()),
            ..AppState::default()
        };
        Self {
            state,
            settings_repo: Box::new(settings_repo),
            runner,
            probe,
            msg_rx,
            msg_tx,
        }
    }

    pub fn load_initial_state(&mut self) -> anyhow::Result<()> {
        let settings = self.settings_repo.load()?;
        self.apply(DomainEvent::SettingsLoaded(settings));
        self.recheck_dependencies();
        Ok(())
    }

    // --- Actions ---

    pub fn recheck_dependencies(&mut self) {
        let missing = self.probe.missing_required();
        if missing.is_empty() {
            tracing::info!("All dependencies detected");
        } else {
            tracing::warn!(?missing, "Missing dependencies");
        }
        self.apply(DomainEvent::DependenciesChecked { missing });
    }

    /// Starts a build of the current form. Refused while another build runs.
    pub fn start_build(&mut self) -> anyhow::Result<BuildRunId> {
        if self.is_build_running() {
            anyhow::bail!("A build is already running");
        }

        let run_id: BuildRunId = uuid::Uuid::new_v4();
        let input = self.state.form.to_input();
        let orchestrator = BuildOrchestrator::new(
            self.runner.clone(),
            self.probe.clone(),
            self.state.layout.clone(),
        );

        self.apply(DomainEvent::BuildStarted { run_id });
        self.remember_build();

        if let Err(e) = orchestrator.start(input, run_id, self.msg_tx.clone()) {
            self.state.build.running = false;
            self.apply(DomainEvent::UserError(e.to_string()));
            return Err(e);
        }
        Ok(run_id)
    }

    /// Drains every pending build event. Call from the UI tick.
    pub fn handle_build_events(&mut self) {
        while let Ok(BuildEnvelope { run_id, event }) = self.msg_rx.try_recv() {
            if self.state.build.run_id != Some(run_id) {
                tracing::debug!(%run_id, "dropping event from a stale build");
                continue;
            }
            self.apply(DomainEvent::Build { run_id, event });
        }
    }

    pub fn load_source_file(&mut self, path: &Path) -> anyhow::Result<()> {
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        self.state.form.source_code = source;
        Ok(())
    }

    pub fn report_error(&mut self, message: impl Into<String>) {
        self.apply(DomainEvent::UserError(message.into()));
    }

    pub fn dismiss_notification(&mut self) {
        self.apply(DomainEvent::NotificationDismissed);
    }

    pub fn sender(&self) -> mpsc::UnboundedSender<BuildEnvelope> {
        self.msg_tx.clone()
    }

    pub fn is_build_running(&self) -> bool {
        self.state.build.is_running()
    }

    // --- State Management ---

    fn apply(&mut self, ev: DomainEvent) {
        self.state = reduce(std::mem::take(&mut self.state), ev);
    }

    fn remember_build(&mut self) {
        let mut settings = self.state.settings.clone();
        settings.last_product_name = Some(self.state.form.product_name.trim().to_string());
        settings.last_build_at = Some(chrono::Utc::now());

        match self.settings_repo.save(&settings) {
            Ok(()) => self.state.settings = settings,
            Err(e) => tracing::warn!("Failed to save settings: {e:#}"),
        }
    }
}

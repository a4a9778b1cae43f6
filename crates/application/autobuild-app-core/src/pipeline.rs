use camino::Utf8PathBuf;
use uuid::Uuid;

pub type BuildRunId = Uuid;

/// What a build worker reports to whoever drains the channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildEvent {
    Log(String),
    Status(String),
    Failure(String),
    Success(String),
    Done,
}

impl BuildEvent {
    pub fn is_terminal(&self) -> bool {
        matches!(self, BuildEvent::Failure(_) | BuildEvent::Success(_))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnvelope {
    pub run_id: BuildRunId,
    pub event: BuildEvent,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildOutcome {
    Succeeded {
        output_folder: Utf8PathBuf,
        artifacts: Vec<Utf8PathBuf>,
        message: String,
    },
    Failed {
        message: String,
    },
}

impl BuildOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self, BuildOutcome::Succeeded { .. })
    }

    pub fn message(&self) -> &str {
        match self {
            BuildOutcome::Succeeded { message, .. } | BuildOutcome::Failed { message } => message,
        }
    }
}

/// Presentation-side view of the current or last build.
#[derive(Debug, Clone, Default)]
pub struct BuildState {
    pub run_id: Option<BuildRunId>,
    pub running: bool,
    pub log: Vec<String>,
    pub succeeded: Option<bool>,
}

impl BuildState {
    pub fn starting(run_id: BuildRunId) -> Self {
        Self {
            run_id: Some(run_id),
            running: true,
            log: Vec::new(),
            succeeded: None,
        }
    }

    pub fn is_running(&self) -> bool {
        self.running
    }
}

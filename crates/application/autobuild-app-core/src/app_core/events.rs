use crate::domain::AppSettings;
use crate::pipeline::{BuildEvent, BuildRunId};

#[derive(Debug, Clone)]
pub enum DomainEvent {
    SettingsLoaded(AppSettings),
    DependenciesChecked { missing: Vec<String> },

    BuildStarted { run_id: BuildRunId },
    Build { run_id: BuildRunId, event: BuildEvent },

    NotificationDismissed,
    UserError(String),
}

use crate::domain::{AppState, DependencyStatus, Notification};
use crate::error::missing_dependencies_message;
use crate::pipeline::{BuildEvent, BuildState};

use super::events::DomainEvent;

pub fn reduce(mut state: AppState, ev: DomainEvent) -> AppState {
    match ev {
        DomainEvent::SettingsLoaded(settings) => {
            state.layout = crate::paths::resolve_layout(&settings);
            if let Some(name) = settings
                .last_product_name
                .as_deref()
                .filter(|n| !n.trim().is_empty())
            {
                state.form.product_name = name.to_string();
            }
            state.settings = settings;
        }

        DomainEvent::DependenciesChecked { missing } => {
            if missing.is_empty() {
                state.dependencies = DependencyStatus::Ready;
                state.status_line = "All dependencies detected.".into();
            } else {
                state.status_line = format!("Missing dependencies: {}", missing.join(", "));
                state.notification = Some(Notification::Error {
                    title: "Missing Dependencies".into(),
                    message: missing_dependencies_message(&missing),
                });
                state.dependencies = DependencyStatus::Missing(missing);
            }
        }

        DomainEvent::BuildStarted { run_id } => {
            state.build = BuildState::starting(run_id);
            state.notification = None;
            state.status_line = "Build started...".into();
        }

        DomainEvent::Build { run_id: _, event } => apply_build_event(&mut state, event),

        DomainEvent::NotificationDismissed => state.notification = None,

        DomainEvent::UserError(message) => {
            state.notification = Some(Notification::Error {
                title: "Error".into(),
                message,
            });
        }
    }
    state
}

fn apply_build_event(state: &mut AppState, event: BuildEvent) {
    match event {
        BuildEvent::Log(line) => state.build.log.push(line),
        BuildEvent::Status(text) => state.status_line = text,
        BuildEvent::Failure(message) => {
            state.build.succeeded = Some(false);
            state.status_line = "Build failed. See log for details.".into();
            state.notification = Some(Notification::Error {
                title: "Build Failed".into(),
                message,
            });
        }
        BuildEvent::Success(message) => {
            state.build.succeeded = Some(true);
            state.status_line = "Build successful!".into();
            state.notification = Some(Notification::Info {
                title: "Success".into(),
                message,
            });
        }
        BuildEvent::Done => state.build.running = false,
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use autobuild_core::{BuildInput, BuildLayout};

use crate::pipeline::BuildState;

/// Preferences persisted between sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppSettings {
    #[serde(default)]
    pub last_product_name: Option<String>,
    /// Overrides the per-user cache location of the scratch project.
    #[serde(default)]
    pub work_root: Option<String>,
    /// Overrides the Downloads folder as the parent of output folders.
    #[serde(default)]
    pub output_root: Option<String>,
    #[serde(default)]
    pub last_build_at: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone, Default)]
pub struct BuildForm {
    pub product_name: String,
    pub source_code: String,
}

impl BuildForm {
    pub fn to_input(&self) -> BuildInput {
        BuildInput::new(self.product_name.clone(), self.source_code.clone())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DependencyStatus {
    Unknown,
    Ready,
    Missing(Vec<String>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notification {
    Info { title: String, message: String },
    Error { title: String, message: String },
}

impl Notification {
    pub fn title(&self) -> &str {
        match self {
            Notification::Info { title, .. } | Notification::Error { title, .. } => title,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            Notification::Info { message, .. } | Notification::Error { message, .. } => message,
        }
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Notification::Error { .. })
    }
}

/// `Default` is cheap and uses relative placeholder paths; the application
/// replaces the layout once settings are known.
#[derive(Debug, Clone)]
pub struct AppState {
    pub form: BuildForm,
    pub settings: AppSettings,
    pub layout: BuildLayout,
    pub dependencies: DependencyStatus,
    pub build: BuildState,
    pub status_line: String,
    pub notification: Option<Notification>,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            form: BuildForm {
                product_name: autobuild_config::DEFAULT_PRODUCT_NAME.to_string(),
                source_code: String::new(),
            },
            settings: AppSettings::default(),
            layout: BuildLayout::new(
                autobuild_config::TEMP_DIR_NAME,
                autobuild_config::DOWNLOADS_DIR_NAME,
            ),
            dependencies: DependencyStatus::Unknown,
            build: BuildState::default(),
            status_line: String::new(),
            notification: None,
        }
    }
}

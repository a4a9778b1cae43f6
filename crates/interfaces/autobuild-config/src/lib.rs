//! Central configuration constants for the build pipeline and its front-ends.

use std::time::Duration;

/// Window title and the display name used by both front-ends.
pub const APP_NAME: &str = "ElectronAutoBuild";

/// Product name used when the sanitized user input ends up empty.
pub const DEFAULT_PRODUCT_NAME: &str = "MyReactElectronApp";

/// Executables that must be resolvable on `PATH`, in probe order.
pub const REQUIRED_TOOLS: [&str; 3] = ["node", "npm", "npx"];

/// Directory name of the scratch project area below the work root.
pub const TEMP_DIR_NAME: &str = "temp_build";

/// Name of the persisted build log inside the output folder.
pub const BUILD_LOG_FILE_NAME: &str = "build_log.txt";

/// Directory electron-builder writes installers to, relative to the project.
pub const DIST_DIR_NAME: &str = "dist";

/// File suffixes recognised as distributable artifacts. Matched case-sensitively.
pub const ARTIFACT_SUFFIXES: [&str; 5] = [".exe", ".dmg", ".AppImage", ".msi", ".zip"];

/// How often the UI polls the build event channel while a build runs.
pub const EVENT_POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Fallback downloads directory name below the home directory.
pub const DOWNLOADS_DIR_NAME: &str = "Downloads";

/// Returns true when `file_name` ends in one of the recognised artifact suffixes.
pub fn is_artifact_name(file_name: &str) -> bool {
    ARTIFACT_SUFFIXES
        .iter()
        .any(|suffix| file_name.ends_with(suffix))
}

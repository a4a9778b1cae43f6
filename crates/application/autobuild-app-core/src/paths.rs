//! Default locations for the scratch project and the output folders.

use camino::Utf8PathBuf;
use directories::{BaseDirs, ProjectDirs, UserDirs};

use autobuild_config::{DOWNLOADS_DIR_NAME, TEMP_DIR_NAME};
use autobuild_core::BuildLayout;

use crate::domain::AppSettings;

pub(crate) const QUALIFIER: &str = "com";
pub(crate) const ORG: &str = "autobuild";
pub(crate) const APP: &str = "electron-autobuild";

fn to_utf8(path: std::path::PathBuf) -> Utf8PathBuf {
    Utf8PathBuf::from_path_buf(path)
        .unwrap_or_else(|p| Utf8PathBuf::from(p.to_string_lossy().into_owned()))
}

/// `<cache dir>/temp_build`, or `./temp_build` when no cache dir is known.
pub fn default_work_dir() -> Utf8PathBuf {
    ProjectDirs::from(QUALIFIER, ORG, APP)
        .map(|dirs| to_utf8(dirs.cache_dir().join(TEMP_DIR_NAME)))
        .unwrap_or_else(|| Utf8PathBuf::from(TEMP_DIR_NAME))
}

/// The user's Downloads folder, falling back to `<home>/Downloads`.
pub fn default_output_root() -> Utf8PathBuf {
    if let Some(downloads) = UserDirs::new().and_then(|u| u.download_dir().map(|d| d.to_path_buf()))
    {
        return to_utf8(downloads);
    }
    BaseDirs::new()
        .map(|b| to_utf8(b.home_dir().join(DOWNLOADS_DIR_NAME)))
        .unwrap_or_else(|| Utf8PathBuf::from(DOWNLOADS_DIR_NAME))
}

/// Applies the settings overrides on top of the defaults. A work root
/// override names the parent; `temp_build` is always appended.
pub fn resolve_layout(settings: &AppSettings) -> BuildLayout {
    let non_empty = |v: &Option<String>| {
        v.as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(Utf8PathBuf::from)
    };

    let work_dir = non_empty(&settings.work_root)
        .map(|root| root.join(TEMP_DIR_NAME))
        .unwrap_or_else(default_work_dir);
    let output_root = non_empty(&settings.output_root).unwrap_or_else(default_output_root);

    BuildLayout::new(work_dir, output_root)
}

use camino::{Utf8Path, Utf8PathBuf};

use autobuild_config::{BUILD_LOG_FILE_NAME, DIST_DIR_NAME};

/// Filesystem roots a build works in.
///
/// `work_dir` is wiped and recreated for every build; `output_root` only ever
/// gains a per-product subfolder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildLayout {
    pub work_dir: Utf8PathBuf,
    pub output_root: Utf8PathBuf,
}

impl BuildLayout {
    pub fn new(work_dir: impl Into<Utf8PathBuf>, output_root: impl Into<Utf8PathBuf>) -> Self {
        Self {
            work_dir: work_dir.into(),
            output_root: output_root.into(),
        }
    }

    pub fn output_folder(&self, product_name: &str) -> Utf8PathBuf {
        self.output_root.join(product_name)
    }

    pub fn build_log_path(&self, product_name: &str) -> Utf8PathBuf {
        self.output_folder(product_name).join(BUILD_LOG_FILE_NAME)
    }

    pub fn project(&self, package_name: &str) -> ProjectPaths {
        ProjectPaths::new(self.work_dir.join(package_name))
    }
}

/// Locations inside the scaffolded project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectPaths {
    root: Utf8PathBuf,
}

impl ProjectPaths {
    pub fn new(root: Utf8PathBuf) -> Self {
        Self { root }
    }

    pub fn root(&self) -> &Utf8Path {
        &self.root
    }

    pub fn src_dir(&self) -> Utf8PathBuf {
        self.root.join("src")
    }

    pub fn public_dir(&self) -> Utf8PathBuf {
        self.root.join("public")
    }

    pub fn dist_dir(&self) -> Utf8PathBuf {
        self.root.join(DIST_DIR_NAME)
    }

    pub fn app_js(&self) -> Utf8PathBuf {
        self.src_dir().join("App.js")
    }

    pub fn index_js(&self) -> Utf8PathBuf {
        self.src_dir().join("index.js")
    }

    pub fn electron_js(&self) -> Utf8PathBuf {
        self.public_dir().join("electron.js")
    }

    pub fn preload_js(&self) -> Utf8PathBuf {
        self.public_dir().join("preload.js")
    }

    pub fn manifest(&self) -> Utf8PathBuf {
        self.root.join("package.json")
    }
}

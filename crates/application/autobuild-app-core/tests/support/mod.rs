#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use camino::{Utf8Path, Utf8PathBuf};
use tempfile::TempDir;

use autobuild_app_core::{
    BuildEvent, BuildOrchestrator, BuildOutcome, BuildReporter, CommandRunner, DependencyProbe,
};
use autobuild_core::{BuildInput, BuildLayout, CommandLine};
use autobuild_infra::{ProcessOutcome, RunError};

/// Pretends to be npx/npm: scaffolds directories, writes dist files and can
/// fail a chosen step.
#[derive(Default)]
pub struct StubRunner {
    pub calls: Mutex<Vec<String>>,
    pub fail_tail: Option<Vec<&'static str>>,
    pub dist_files: Vec<&'static str>,
    pub skip_dist: bool,
}

impl StubRunner {
    pub fn producing(dist_files: &[&'static str]) -> Self {
        Self {
            dist_files: dist_files.to_vec(),
            ..Self::default()
        }
    }

    pub fn failing_on(mut self, tail: &[&'static str]) -> Self {
        self.fail_tail = Some(tail.to_vec());
        self
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CommandRunner for StubRunner {
    async fn run(
        &self,
        command: &CommandLine,
        working_dir: &Utf8Path,
        on_line: &mut (dyn FnMut(String) + Send),
    ) -> Result<ProcessOutcome, RunError> {
        let display = command.to_string();
        on_line(format!("> {display}"));
        self.calls.lock().unwrap().push(command.args.join(" "));

        if let Some(tail) = &self.fail_tail {
            if command.matches_tail(tail) {
                on_line("npm ERR! something broke".into());
                return Err(RunError::ProcessFailed {
                    command: display,
                    exit_code: Some(1),
                });
            }
        }

        if command.args.first().map(String::as_str) == Some("create-react-app") {
            let project = working_dir.join(&command.args[1]);
            std::fs::create_dir_all(project.join("src")).unwrap();
            std::fs::create_dir_all(project.join("public")).unwrap();
        }

        if command.matches_tail(&["run", "dist"]) && !self.skip_dist {
            let dist = working_dir.join("dist");
            std::fs::create_dir_all(dist.join("win-unpacked")).unwrap();
            std::fs::write(dist.join("latest.yml"), "version: 1.0.0").unwrap();
            for name in &self.dist_files {
                std::fs::write(dist.join(name), format!("installer {name}")).unwrap();
            }
        }

        on_line(format!("done: {}", command.args.join(" ")));
        Ok(ProcessOutcome::from_code(0))
    }
}

pub struct StubProbe {
    pub missing: Vec<String>,
    pub unresolvable: Vec<String>,
}

impl StubProbe {
    pub fn all_present() -> Self {
        Self {
            missing: Vec::new(),
            unresolvable: Vec::new(),
        }
    }

    pub fn missing(tools: &[&str]) -> Self {
        Self {
            missing: tools.iter().map(|t| t.to_string()).collect(),
            unresolvable: Vec::new(),
        }
    }
}

impl DependencyProbe for StubProbe {
    fn missing_required(&self) -> Vec<String> {
        self.missing.clone()
    }

    fn resolve(&self, tool: &str) -> Option<PathBuf> {
        if self.unresolvable.iter().any(|t| t == tool) || self.missing.iter().any(|t| t == tool) {
            return None;
        }
        Some(PathBuf::from(format!("/usr/bin/{tool}")))
    }
}

pub struct Sandbox {
    _dir: TempDir,
    pub root: Utf8PathBuf,
    pub layout: BuildLayout,
}

impl Sandbox {
    pub fn new() -> Self {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf8 tempdir");
        let layout = BuildLayout::new(root.join("work/temp_build"), root.join("Downloads"));
        Self {
            _dir: dir,
            root,
            layout,
        }
    }

    pub fn orchestrator(&self, runner: Arc<StubRunner>, probe: StubProbe) -> BuildOrchestrator {
        BuildOrchestrator::new(runner, Arc::new(probe), self.layout.clone())
    }
}

pub const SAMPLE_APP: &str = "export default function App() { return <h1>Hi</h1>; }";

/// Runs a build inline and returns its outcome plus every event it emitted.
pub async fn run_build(
    orchestrator: &BuildOrchestrator,
    input: BuildInput,
) -> (BuildOutcome, Vec<BuildEvent>) {
    let run_id = uuid::Uuid::new_v4();
    let (tx, mut rx) = tokio::sync::mpsc::unbounded_channel();
    let mut reporter = BuildReporter::new(run_id, tx);
    let outcome = orchestrator.execute(&input, &mut reporter).await;
    drop(reporter);

    let mut events = Vec::new();
    while let Ok(envelope) = rx.try_recv() {
        assert_eq!(envelope.run_id, run_id);
        events.push(envelope.event);
    }
    (outcome, events)
}

pub fn log_lines(events: &[BuildEvent]) -> Vec<String> {
    events
        .iter()
        .filter_map(|e| match e {
            BuildEvent::Log(line) => Some(line.clone()),
            _ => None,
        })
        .collect()
}

pub fn terminal_events(events: &[BuildEvent]) -> Vec<BuildEvent> {
    events.iter().filter(|e| e.is_terminal()).cloned().collect()
}

/// Expected `build_log.txt` contents: every log line up to and including the
/// finalizing announcement.
pub fn expected_log_file(events: &[BuildEvent]) -> String {
    let lines = log_lines(events);
    let end = lines
        .iter()
        .position(|l| l == "Finalizing build: saving log file...")
        .expect("finalizing line");
    lines[..=end].join("\n")
}

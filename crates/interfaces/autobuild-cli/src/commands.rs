use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use camino::Utf8Path;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::sync::mpsc;

use autobuild_app_core::{
    missing_dependencies_message, BuildEvent, BuildOrchestrator, BuildOutcome, BuildReporter,
    CommandRunner, DependencyProbe,
};
use autobuild_config::REQUIRED_TOOLS;
use autobuild_core::{BuildInput, BuildLayout};

/// Prints where each required tool resolves. Returns the missing ones.
pub fn cmd_doctor(probe: &dyn DependencyProbe) -> Vec<String> {
    println!(":: Checking required tools...");
    for tool in REQUIRED_TOOLS {
        match probe.resolve(tool) {
            Some(path) => println!("   {tool:<5} {}", path.display()),
            None => println!("   {tool:<5} MISSING"),
        }
    }

    let missing = probe.missing_required();
    if missing.is_empty() {
        println!("\n:: All dependencies detected.");
    } else {
        println!("\n{}", missing_dependencies_message(&missing));
    }
    missing
}

/// Builds `source` into an installer, streaming the log to stdout.
pub async fn cmd_build(
    name: &str,
    source: &Utf8Path,
    layout: BuildLayout,
    runner: Arc<dyn CommandRunner>,
    probe: Arc<dyn DependencyProbe>,
) -> anyhow::Result<BuildOutcome> {
    let source_code = std::fs::read_to_string(source)
        .with_context(|| format!("Failed to read source file {source}"))?;

    println!(":: Building {name}");
    println!("   Source: {source}");
    println!("   Work:   {}", layout.work_dir);
    println!("   Output: {}", layout.output_root);

    let pb = ProgressBar::new_spinner();
    pb.set_style(ProgressStyle::default_spinner().template("{spinner:.green} {msg}")?);
    pb.enable_steady_tick(Duration::from_millis(100));

    let orchestrator = BuildOrchestrator::new(runner, probe, layout);
    let input = BuildInput::new(name, source_code);
    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut reporter = BuildReporter::new(uuid::Uuid::new_v4(), tx);

    let build = orchestrator.execute(&input, &mut reporter);
    let render = async {
        while let Some(envelope) = rx.recv().await {
            match envelope.event {
                BuildEvent::Log(line) => pb.println(line),
                BuildEvent::Status(text) => pb.set_message(text),
                BuildEvent::Success(_) | BuildEvent::Failure(_) => {}
                BuildEvent::Done => break,
            }
        }
    };
    let (outcome, ()) = tokio::join!(build, render);

    if outcome.is_success() {
        pb.finish_with_message("Build successful!");
    } else {
        pb.abandon_with_message("Build failed.");
    }
    println!("\n{}", outcome.message());

    Ok(outcome)
}

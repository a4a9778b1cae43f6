mod support;

use std::sync::Arc;

use autobuild_app_core::{BuildEvent, BuildOutcome};
use autobuild_core::BuildInput;

use support::{
    expected_log_file, log_lines, run_build, terminal_events, Sandbox, StubProbe, StubRunner,
    SAMPLE_APP,
};

#[tokio::test]
async fn successful_build_copies_installers_and_persists_the_log() {
    let sandbox = Sandbox::new();
    let runner = Arc::new(StubRunner::producing(&["MyApp Setup 1.0.0.exe", "MyApp-1.0.0.zip"]));
    let orchestrator = sandbox.orchestrator(runner.clone(), StubProbe::all_present());

    let input = BuildInput::new("MyApp", format!("\n  {SAMPLE_APP}  \n"));
    let (outcome, events) = run_build(&orchestrator, input).await;

    let out = sandbox.root.join("Downloads/MyApp");
    match &outcome {
        BuildOutcome::Succeeded {
            output_folder,
            artifacts,
            message,
        } => {
            assert_eq!(output_folder, &out);
            assert_eq!(
                artifacts,
                &vec![out.join("MyApp Setup 1.0.0.exe"), out.join("MyApp-1.0.0.zip")]
            );
            assert_eq!(message, &format!("Build successful!\nInstaller located in: {out}"));
        }
        other => panic!("expected success, got {other:?}"),
    }

    assert_eq!(
        runner.calls(),
        vec!["create-react-app myapp", "install", "run build", "run dist"]
    );
    assert!(!out.join("latest.yml").exists());
    assert!(!out.join("win-unpacked").exists());

    let project = sandbox.layout.work_dir.join("myapp");
    assert_eq!(
        std::fs::read_to_string(project.join("src/App.js")).unwrap(),
        SAMPLE_APP
    );
    assert_eq!(
        std::fs::read_to_string(project.join("public/preload.js")).unwrap(),
        "// Preload script"
    );
    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(project.join("package.json")).unwrap())
            .unwrap();
    assert_eq!(manifest["build"]["productName"], "MyApp");
    assert_eq!(manifest["name"], "myapp");

    assert_eq!(
        terminal_events(&events),
        vec![BuildEvent::Success(outcome.message().to_string())]
    );
    assert_eq!(events.last(), Some(&BuildEvent::Done));

    let lines = log_lines(&events);
    assert!(lines.contains(&format!("Copied: MyApp Setup 1.0.0.exe to {out}")));
    assert_eq!(
        lines.last().map(String::as_str),
        Some(format!("Build log saved to: {}", out.join("build_log.txt")).as_str())
    );
    assert_eq!(
        std::fs::read_to_string(out.join("build_log.txt")).unwrap(),
        expected_log_file(&events)
    );
}

#[tokio::test]
async fn stage_banners_are_logged_in_order() {
    let sandbox = Sandbox::new();
    let runner = Arc::new(StubRunner::producing(&["app.dmg"]));
    let orchestrator = sandbox.orchestrator(runner, StubProbe::all_present());

    let (_, events) = run_build(&orchestrator, BuildInput::new("App", SAMPLE_APP)).await;
    let banners: Vec<String> = log_lines(&events)
        .into_iter()
        .filter(|l| l.starts_with("Step "))
        .collect();

    assert_eq!(banners.len(), 8);
    for (ix, banner) in banners.iter().enumerate() {
        assert!(banner.starts_with(&format!("Step {}: ", ix + 1)), "{banner}");
    }
    assert!(events
        .iter()
        .any(|e| matches!(e, BuildEvent::Status(s) if s == "Step 5 of 8: Installing dependencies...")));
}

#[tokio::test]
async fn missing_tool_fails_before_the_work_dir_exists() {
    let sandbox = Sandbox::new();
    let runner = Arc::new(StubRunner::producing(&["app.exe"]));
    let orchestrator = sandbox.orchestrator(runner.clone(), StubProbe::missing(&["npx"]));

    let (outcome, events) = run_build(&orchestrator, BuildInput::new("App", SAMPLE_APP)).await;

    assert!(!outcome.is_success());
    assert!(outcome.message().starts_with("Missing dependencies: npx."));
    assert!(runner.calls().is_empty());
    assert!(!sandbox.layout.work_dir.exists());
    assert_eq!(terminal_events(&events).len(), 1);
    assert_eq!(events.last(), Some(&BuildEvent::Done));

    let log_path = sandbox.root.join("Downloads/App/build_log.txt");
    assert_eq!(
        std::fs::read_to_string(log_path).unwrap(),
        expected_log_file(&events)
    );
}

#[tokio::test]
async fn unresolvable_tool_is_an_unexpected_error() {
    let sandbox = Sandbox::new();
    let runner = Arc::new(StubRunner::producing(&["app.exe"]));
    let mut probe = StubProbe::all_present();
    probe.unresolvable.push("npm".into());
    let orchestrator = sandbox.orchestrator(runner.clone(), probe);

    let (outcome, _) = run_build(&orchestrator, BuildInput::new("App", SAMPLE_APP)).await;

    assert_eq!(
        outcome.message(),
        "An unexpected error occurred: Could not resolve the full path for npm."
    );
    assert!(runner.calls().is_empty());
    assert!(!sandbox.layout.work_dir.exists());
}

#[tokio::test]
async fn blank_source_never_invokes_a_process() {
    let sandbox = Sandbox::new();
    let runner = Arc::new(StubRunner::producing(&["app.exe"]));
    let orchestrator = sandbox.orchestrator(runner.clone(), StubProbe::all_present());

    let (outcome, events) = run_build(&orchestrator, BuildInput::new("App", "  \n\t ")).await;

    assert_eq!(outcome, BuildOutcome::Failed {
        message: "React code cannot be empty.".into()
    });
    assert!(runner.calls().is_empty());
    assert!(!sandbox.layout.work_dir.exists());
    assert_eq!(
        terminal_events(&events),
        vec![BuildEvent::Failure("React code cannot be empty.".into())]
    );
    assert!(sandbox.root.join("Downloads/App/build_log.txt").exists());
}

#[tokio::test]
async fn no_recognised_installer_is_a_failure() {
    let sandbox = Sandbox::new();
    let runner = Arc::new(StubRunner::producing(&["MyApp.EXE"]));
    let orchestrator = sandbox.orchestrator(runner.clone(), StubProbe::all_present());

    let (outcome, events) = run_build(&orchestrator, BuildInput::new("MyApp", SAMPLE_APP)).await;

    assert_eq!(
        outcome.message(),
        "Build finished, but no installer was found in the dist folder."
    );
    assert_eq!(runner.calls().len(), 4);
    assert!(!events.iter().any(|e| matches!(e, BuildEvent::Success(_))));
}

#[tokio::test]
async fn missing_dist_folder_is_a_failure() {
    let sandbox = Sandbox::new();
    let runner = Arc::new(StubRunner {
        skip_dist: true,
        ..StubRunner::producing(&["app.exe"])
    });
    let orchestrator = sandbox.orchestrator(runner, StubProbe::all_present());

    let (outcome, _) = run_build(&orchestrator, BuildInput::new("MyApp", SAMPLE_APP)).await;

    assert_eq!(
        outcome.message(),
        "Build finished, but no installer was found in the dist folder."
    );
}

#[tokio::test]
async fn failed_install_stops_the_pipeline() {
    let sandbox = Sandbox::new();
    let runner = Arc::new(StubRunner::producing(&["app.exe"]).failing_on(&["install"]));
    let orchestrator = sandbox.orchestrator(runner.clone(), StubProbe::all_present());

    let (outcome, events) = run_build(&orchestrator, BuildInput::new("MyApp", SAMPLE_APP)).await;

    assert_eq!(runner.calls(), vec!["create-react-app myapp", "install"]);
    let expected = "A build step failed ('/usr/bin/npm install'). See log above for details.";
    assert_eq!(outcome.message(), expected);
    assert_eq!(
        terminal_events(&events),
        vec![BuildEvent::Failure(expected.into())]
    );

    let lines = log_lines(&events);
    assert!(lines.contains(&"npm ERR! something broke".to_string()));
    assert!(lines.contains(&expected.to_string()));
    assert!(!lines.iter().any(|l| l.starts_with("Step 6")));
    assert_eq!(
        std::fs::read_to_string(sandbox.root.join("Downloads/MyApp/build_log.txt")).unwrap(),
        expected_log_file(&events)
    );
}

#[tokio::test]
async fn previous_work_dir_is_replaced() {
    let sandbox = Sandbox::new();
    std::fs::create_dir_all(&sandbox.layout.work_dir).unwrap();
    std::fs::write(sandbox.layout.work_dir.join("stale.txt"), "old").unwrap();

    let runner = Arc::new(StubRunner::producing(&["app.AppImage"]));
    let orchestrator = sandbox.orchestrator(runner, StubProbe::all_present());
    let (outcome, events) = run_build(&orchestrator, BuildInput::new("App", SAMPLE_APP)).await;

    assert!(outcome.is_success());
    assert!(!sandbox.layout.work_dir.join("stale.txt").exists());
    assert!(log_lines(&events).contains(&format!(
        "Removing existing temporary directory: {}",
        sandbox.layout.work_dir
    )));
}

#[tokio::test]
async fn product_name_is_sanitized_for_folders() {
    let sandbox = Sandbox::new();
    let runner = Arc::new(StubRunner::producing(&["app.msi"]));
    let orchestrator = sandbox.orchestrator(runner.clone(), StubProbe::all_present());

    let (outcome, _) = run_build(&orchestrator, BuildInput::new("My App!!", SAMPLE_APP)).await;

    assert!(outcome.is_success());
    assert!(sandbox.root.join("Downloads/MyApp/app.msi").exists());
    assert!(sandbox.layout.work_dir.join("myapp/package.json").exists());
    assert_eq!(runner.calls()[0], "create-react-app myapp");
}

#[tokio::test]
async fn unwritable_output_still_finishes_with_done() {
    let sandbox = Sandbox::new();
    // A plain file where the output root should be makes every write below it fail.
    std::fs::write(&sandbox.layout.output_root, "not a directory").unwrap();

    let runner = Arc::new(StubRunner::producing(&["app.exe"]));
    let orchestrator = sandbox.orchestrator(runner.clone(), StubProbe::all_present());
    let (outcome, events) = run_build(&orchestrator, BuildInput::new("App", SAMPLE_APP)).await;

    assert!(outcome
        .message()
        .starts_with("An unexpected error occurred: Failed to create output folder"));
    assert!(runner.calls().is_empty());

    let lines = log_lines(&events);
    assert!(lines
        .iter()
        .any(|l| l.starts_with("Error: Could not save build log. Reason:")));
    assert_eq!(events.last(), Some(&BuildEvent::Done));
    assert_eq!(terminal_events(&events).len(), 1);
}

mod support;

use std::sync::Arc;
use std::time::{Duration, Instant};

use autobuild_app_core::persistence::FilePersistence;
use autobuild_app_core::{
    AutoBuildApplication, BuildEnvelope, BuildEvent, DependencyStatus, SettingsRepo,
};

use support::{Sandbox, StubProbe, StubRunner, SAMPLE_APP};

fn app(sandbox: &Sandbox, runner: StubRunner, probe: StubProbe) -> AutoBuildApplication {
    let mut app = AutoBuildApplication::with_ports(
        FilePersistence::in_dir(sandbox.root.join("config")),
        Arc::new(runner),
        Arc::new(probe),
    );
    app.state.layout = sandbox.layout.clone();
    app
}

fn wait_until_idle(app: &mut AutoBuildApplication) {
    let deadline = Instant::now() + Duration::from_secs(10);
    while app.is_build_running() {
        assert!(Instant::now() < deadline, "build did not finish");
        std::thread::sleep(Duration::from_millis(10));
        app.handle_build_events();
    }
}

#[test]
fn build_runs_to_completion_and_releases_the_controls() {
    let sandbox = Sandbox::new();
    let mut app = app(
        &sandbox,
        StubRunner::producing(&["app.exe"]),
        StubProbe::all_present(),
    );
    app.state.form.product_name = "Notes".into();
    app.state.form.source_code = SAMPLE_APP.into();

    app.start_build().expect("start");
    assert!(app.is_build_running());
    assert!(app.start_build().is_err(), "second build must be refused");

    wait_until_idle(&mut app);

    assert_eq!(app.state.build.succeeded, Some(true));
    assert_eq!(app.state.status_line, "Build successful!");
    let note = app.state.notification.clone().expect("notification");
    assert!(!note.is_error());
    assert!(note.message().starts_with("Build successful!\nInstaller located in:"));
    assert!(app
        .state
        .build
        .log
        .iter()
        .any(|l| l.starts_with("Build log saved to:")));

    let saved = FilePersistence::in_dir(sandbox.root.join("config"))
        .load()
        .expect("settings");
    assert_eq!(saved.last_product_name.as_deref(), Some("Notes"));
    assert!(saved.last_build_at.is_some());
}

#[test]
fn failed_build_reports_once_and_can_be_retried() {
    let sandbox = Sandbox::new();
    let mut app = app(
        &sandbox,
        StubRunner::producing(&["app.exe"]).failing_on(&["run", "build"]),
        StubProbe::all_present(),
    );
    app.state.form.source_code = SAMPLE_APP.into();

    app.start_build().expect("start");
    wait_until_idle(&mut app);

    assert_eq!(app.state.build.succeeded, Some(false));
    assert_eq!(app.state.status_line, "Build failed. See log for details.");
    let note = app.state.notification.clone().expect("notification");
    assert!(note.is_error());
    assert_eq!(note.title(), "Build Failed");

    app.dismiss_notification();
    assert!(app.state.notification.is_none());
    assert!(app.start_build().is_ok());
    wait_until_idle(&mut app);
}

#[test]
fn stale_run_events_are_ignored() {
    let sandbox = Sandbox::new();
    let mut app = app(
        &sandbox,
        StubRunner::producing(&["app.exe"]),
        StubProbe::all_present(),
    );
    app.state.form.source_code = SAMPLE_APP.into();

    let current = app.start_build().expect("start");
    let stale = uuid::Uuid::new_v4();
    assert_ne!(current, stale);
    app.sender()
        .send(BuildEnvelope {
            run_id: stale,
            event: BuildEvent::Log("from an older build".into()),
        })
        .unwrap();
    app.sender()
        .send(BuildEnvelope {
            run_id: stale,
            event: BuildEvent::Done,
        })
        .unwrap();

    wait_until_idle(&mut app);

    assert!(!app.state.build.log.iter().any(|l| l == "from an older build"));
    assert_eq!(app.state.build.succeeded, Some(true));
}

#[test]
fn startup_check_reports_missing_tools() {
    let sandbox = Sandbox::new();
    let mut app = app(
        &sandbox,
        StubRunner::default(),
        StubProbe::missing(&["node", "npm"]),
    );

    app.load_initial_state().expect("load");

    assert_eq!(
        app.state.dependencies,
        DependencyStatus::Missing(vec!["node".into(), "npm".into()])
    );
    assert_eq!(app.state.status_line, "Missing dependencies: node, npm");
    assert_eq!(
        app.state.notification.as_ref().map(|n| n.title()),
        Some("Missing Dependencies")
    );
}

#[test]
fn source_can_be_loaded_from_a_file() {
    let sandbox = Sandbox::new();
    let mut app = app(
        &sandbox,
        StubRunner::default(),
        StubProbe::all_present(),
    );
    let path = sandbox.root.join("App.js");
    std::fs::write(&path, SAMPLE_APP).unwrap();

    app.load_source_file(path.as_std_path()).expect("load");
    assert_eq!(app.state.form.source_code, SAMPLE_APP);
    assert!(app
        .load_source_file(sandbox.root.join("missing.js").as_std_path())
        .is_err());
}

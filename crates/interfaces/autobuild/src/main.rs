#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
    if let Err(err) = autobuild_ui::run() {
        eprintln!("ElectronAutoBuild failed: {err}");
        std::process::exit(1);
    }
}

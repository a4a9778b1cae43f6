use autobuild_core::CommandLine;

#[cfg(target_os = "windows")]
const CREATE_NO_WINDOW: u32 = 0x0800_0000;

/// Command string used for the log announcement and in error messages.
///
/// On Windows only the executable is quoted, and only when it contains a
/// space (e.g. `C:\Program Files\nodejs\npm.cmd`). Arguments containing quotes
/// or other metacharacters are not escaped there.
#[cfg(target_os = "windows")]
pub fn command_display(cmd: &CommandLine) -> String {
    let mut parts = cmd.argv();
    if parts[0].contains(' ') {
        parts[0] = format!("\"{}\"", parts[0]);
    }
    parts.join(" ")
}

#[cfg(not(target_os = "windows"))]
pub fn command_display(cmd: &CommandLine) -> String {
    let parts = cmd.argv();
    shlex::try_join(parts.iter().map(String::as_str)).unwrap_or_else(|_| parts.join(" "))
}

/// Keeps console windows from flashing up for every npm call in the GUI build.
#[cfg(target_os = "windows")]
pub fn configure(cmd: &mut tokio::process::Command) {
    cmd.creation_flags(CREATE_NO_WINDOW);
}

#[cfg(not(target_os = "windows"))]
pub fn configure(_cmd: &mut tokio::process::Command) {}

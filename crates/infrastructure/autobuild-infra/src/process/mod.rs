//! Runs one external command and streams its merged output line by line.

use std::io::{BufRead, BufReader};
use std::process::Stdio;

use camino::Utf8Path;
use thiserror::Error;
use tokio::sync::mpsc;

use autobuild_core::CommandLine;

pub mod platform;

#[derive(Debug, Error)]
pub enum RunError {
    #[error("failed to start `{command}`: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },
    #[error("`{command}` exited with {}", describe_exit(*exit_code))]
    ProcessFailed {
        command: String,
        exit_code: Option<i32>,
    },
    #[error("IO error while running `{command}`: {source}")]
    Io {
        command: String,
        #[source]
        source: std::io::Error,
    },
}

fn describe_exit(code: Option<i32>) -> String {
    match code {
        Some(code) => format!("exit code {code}"),
        None => "no exit code (terminated by signal)".to_string(),
    }
}

impl RunError {
    /// Command string as announced in the log.
    pub fn command(&self) -> &str {
        match self {
            RunError::Spawn { command, .. }
            | RunError::ProcessFailed { command, .. }
            | RunError::Io { command, .. } => command,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessOutcome {
    pub exit_code: i32,
    pub was_successful: bool,
}

impl ProcessOutcome {
    pub fn from_code(exit_code: i32) -> Self {
        Self {
            exit_code,
            was_successful: exit_code == 0,
        }
    }
}

/// Spawns commands with stdout and stderr sharing a single pipe.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl ProcessRunner {
    pub fn new() -> Self {
        Self
    }

    /// Runs `command` in `working_dir`, handing every output line to `on_line`
    /// in arrival order. The first line is always the command announcement.
    ///
    /// Output is drained on a blocking thread while the child runs, so a
    /// chatty child never stalls on a full pipe.
    pub async fn run(
        &self,
        command: &CommandLine,
        working_dir: &Utf8Path,
        on_line: &mut (dyn FnMut(String) + Send),
    ) -> Result<ProcessOutcome, RunError> {
        let shown = platform::command_display(command);
        on_line(format!("> {shown}"));
        tracing::debug!(command = %shown, cwd = %working_dir, "spawning process");

        let io_err = |source| RunError::Io {
            command: shown.clone(),
            source,
        };

        let (reader, writer) = std::io::pipe().map_err(io_err)?;
        let mut child = {
            let stderr_writer = writer.try_clone().map_err(io_err)?;
            let mut cmd = tokio::process::Command::new(&command.program);
            cmd.args(&command.args)
                .current_dir(working_dir)
                .stdin(Stdio::null())
                .stdout(writer)
                .stderr(stderr_writer);
            platform::configure(&mut cmd);
            cmd.spawn().map_err(|source| RunError::Spawn {
                command: shown.clone(),
                source,
            })?
            // `cmd` drops here together with our copies of the write end, so
            // the reader sees EOF once the child closes its side.
        };

        let (line_tx, mut line_rx) = mpsc::unbounded_channel::<String>();
        let pump = tokio::task::spawn_blocking(move || -> std::io::Result<()> {
            let mut reader = BufReader::new(reader);
            let mut buf = Vec::new();
            loop {
                buf.clear();
                if reader.read_until(b'\n', &mut buf)? == 0 {
                    break;
                }
                let line = String::from_utf8_lossy(&buf).trim_end().to_string();
                if line_tx.send(line).is_err() {
                    break;
                }
            }
            Ok(())
        });

        while let Some(line) = line_rx.recv().await {
            on_line(line);
        }

        let pump_res = pump.await;
        let status = child.wait().await.map_err(io_err)?;

        match pump_res {
            Ok(Ok(())) => {}
            Ok(Err(e)) => {
                tracing::warn!(command = %shown, "output stream ended with error: {e}");
            }
            Err(e) => {
                tracing::warn!(command = %shown, "output reader task failed: {e}");
            }
        }

        match status.code() {
            Some(0) => Ok(ProcessOutcome::from_code(0)),
            code => {
                tracing::debug!(command = %shown, ?code, "process failed");
                Err(RunError::ProcessFailed {
                    command: shown,
                    exit_code: code,
                })
            }
        }
    }
}

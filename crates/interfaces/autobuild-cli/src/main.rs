use std::sync::Arc;

use camino::Utf8PathBuf;
use clap::{Parser, Subcommand};
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use autobuild_app_core::paths::resolve_layout;
use autobuild_app_core::persistence::FilePersistence;
use autobuild_app_core::AppSettings;
use autobuild_cli::commands;
use autobuild_config::DEFAULT_PRODUCT_NAME;
use autobuild_infra::{ProcessRunner, ToolProbe};

#[derive(Parser)]
#[command(author, version, about)]
struct Cli {
    #[arg(short, long, global = true)]
    verbose: bool,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that node, npm and npx can be found
    Doctor,
    /// Turn a React App.js into a desktop installer
    Build {
        #[arg(short, long, default_value = DEFAULT_PRODUCT_NAME)]
        name: String,
        #[arg(short, long)]
        source: Utf8PathBuf,
        #[arg(long, env = "AUTOBUILD_OUTPUT_ROOT")]
        output_root: Option<Utf8PathBuf>,
        #[arg(long, env = "AUTOBUILD_WORK_ROOT")]
        work_root: Option<Utf8PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let level = if cli.verbose {
        Level::DEBUG
    } else {
        Level::WARN
    };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match cli.command {
        Commands::Doctor => {
            let missing = commands::cmd_doctor(&ToolProbe::from_env());
            if !missing.is_empty() {
                std::process::exit(1);
            }
        }
        Commands::Build {
            name,
            source,
            output_root,
            work_root,
        } => {
            let mut settings = FilePersistence::new()
                .load_settings()
                .unwrap_or_else(|e| {
                    tracing::warn!("Ignoring unreadable settings: {e:#}");
                    AppSettings::default()
                });
            if let Some(root) = output_root {
                settings.output_root = Some(root.into_string());
            }
            if let Some(root) = work_root {
                settings.work_root = Some(root.into_string());
            }

            let outcome = commands::cmd_build(
                &name,
                &source,
                resolve_layout(&settings),
                Arc::new(ProcessRunner::new()),
                Arc::new(ToolProbe::from_env()),
            )
            .await?;
            if !outcome.is_success() {
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

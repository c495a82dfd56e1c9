use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;
use tabular_lens::client::HttpServiceClient;
use tabular_lens::config::Config;
use tabular_lens::connectivity;
use tabular_lens::intake::{Intake, IntakeEvent};
use tabular_lens::lifecycle::UploadController;
use tabular_lens::models::FileHandle;
use tabular_lens::render::{self, text};
use tabular_lens::utils::{init_logger, LogTarget};
use tracing::info;

#[derive(Debug, Parser)]
#[command(name = "tabular-lens", version, about = "Submit CSV/Excel files for profiling")]
struct Cli {
    /// Analysis service base URL (overrides ANALYSIS_SERVICE_URL)
    #[arg(long, global = true)]
    server: Option<String>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Interactive terminal front-end (default)
    Tui,
    /// Upload one file and print the analysis summary
    Upload {
        path: PathBuf,
        /// Print the full report as JSON instead of the summary
        #[arg(long)]
        json: bool,
    },
    /// Check whether the analysis service is reachable
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<ExitCode> {
    let cli = Cli::parse();

    let mut config = Config::from_env()?;
    if let Some(server) = cli.server {
        config = config.with_base_url(server);
    }

    match cli.command.unwrap_or(Command::Tui) {
        Command::Tui => {
            let _guard = init_logger(LogTarget::File(&config.logging.log_dir))?;
            tabular_lens::tui::run(config).await?;
            Ok(ExitCode::SUCCESS)
        }
        Command::Upload { path, json } => {
            init_logger(LogTarget::Stderr)?;
            upload(&config, path, json).await
        }
        Command::Health => {
            init_logger(LogTarget::Stderr)?;
            let client = HttpServiceClient::new(&config);
            let status = connectivity::check(&client).await;
            println!("Backend Status: {}", status);
            Ok(if status.is_reachable() {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            })
        }
    }
}

async fn upload(config: &Config, path: PathBuf, json: bool) -> anyhow::Result<ExitCode> {
    let mut intake = Intake::new();
    let Some(path) = intake.handle(IntakeEvent::PickerChange(vec![path])).selected else {
        return Ok(ExitCode::FAILURE);
    };

    let file = FileHandle::from_path(&path).await?;
    info!("Selected {} ({})", file.name(), file.media_type());

    let mut controller = UploadController::new(HttpServiceClient::new(config));
    let submitted = controller.submit(file).await.is_ok();

    let mut stdout = std::io::stdout().lock();
    match controller.state().report() {
        Some(report) if json => {
            serde_json::to_writer_pretty(&mut stdout, report)?;
            writeln!(stdout)?;
        }
        _ => {
            let view = render::project(controller.state(), &intake);
            text::write_view(&mut stdout, &view)?;
        }
    }

    Ok(if submitted {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    })
}

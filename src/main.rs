use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{info, warn};

use royalty_dashboard::app::DashboardUseCase;
use royalty_dashboard::config::Config;
use royalty_dashboard::server::{start_server, AppState};
use royalty_dashboard::{logging, metrics};

#[derive(Parser)]
#[command(name = "royalty_dashboard")]
#[command(about = "Cross-platform royalty analytics for streaming reports")]
#[command(version)]
struct Cli {
    /// Config file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the dashboard API and front-end
    Serve {
        #[arg(long)]
        host: Option<String>,
        #[arg(long)]
        port: Option<u16>,
        /// Directory holding the three platform reports
        #[arg(long)]
        data_dir: Option<PathBuf>,
        /// Directory holding the dashboard front-end
        #[arg(long)]
        static_dir: Option<PathBuf>,
    },
    /// Run the pipeline once and print the dashboard payload as JSON
    Report {
        #[arg(long)]
        data_dir: Option<PathBuf>,
        #[arg(long)]
        pretty: bool,
    },
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<Config> {
    match path {
        Some(path) => {
            let mut config = Config::from_file(path)
                .with_context(|| format!("loading config {}", path.display()))?;
            config.apply_env(|key| std::env::var(key).ok())?;
            Ok(config)
        }
        None => Ok(Config::load()?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();
    let mut config = load_config(cli.config.as_ref())?;

    let guard = logging::init_logging(&config.server.log_dir);

    let exit_code = match cli.command {
        Commands::Serve {
            host,
            port,
            data_dir,
            static_dir,
        } => {
            if let Some(host) = host {
                config.server.host = host;
            }
            if let Some(port) = port {
                config.server.port = port;
            }
            if let Some(dir) = data_dir {
                config.data.dir = dir;
            }
            if let Some(dir) = static_dir {
                config.server.static_dir = dir;
            }

            metrics::init_metrics();
            info!(data_dir = %config.data.dir.display(), "starting dashboard server");

            let state = AppState {
                dashboard: DashboardUseCase::from_config(&config.data),
            };
            start_server(state, &config.server).await?;
            0
        }
        Commands::Report { data_dir, pretty } => {
            if let Some(dir) = data_dir {
                config.data.dir = dir;
            }

            let use_case = DashboardUseCase::from_config(&config.data);
            let payload = tokio::task::spawn_blocking(move || use_case.fetch()).await?;

            let out = if pretty {
                serde_json::to_string_pretty(&payload)?
            } else {
                serde_json::to_string(&payload)?
            };
            println!("{out}");

            match payload.get("error").and_then(|e| e.as_str()) {
                Some(error) => {
                    warn!(error, "report produced the empty fallback payload");
                    1
                }
                None => 0,
            }
        }
    };

    // Flush the file log before a non-zero exit skips destructors
    drop(guard);
    if exit_code != 0 {
        std::process::exit(exit_code);
    }
    Ok(())
}

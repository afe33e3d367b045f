use std::fs::File;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use ayurassist::analysis::{AnalysisClient, HttpAnalysisClient};
use ayurassist::core::config::{AyurConfig, load_config, resolve};
use ayurassist::{oneshot, tui};
use clap::Parser;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};

#[derive(Parser)]
#[command(
    name = "ayurassist",
    about = "Ayurvedic clinical decision support in the terminal"
)]
struct Args {
    /// Analysis service endpoint (overrides env and config file)
    #[arg(long)]
    api_url: Option<String>,

    /// Analyze this text once, print the result and exit
    #[arg(short, long)]
    query: Option<String>,

    /// Where to write the debug log
    #[arg(long, default_value = "ayurassist.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> std::io::Result<ExitCode> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let log_config = ConfigBuilder::new().set_time_format_rfc3339().build();
    if let Ok(log_file) = File::create(&args.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let config = load_config().unwrap_or_else(|e| {
        log::warn!("Ignoring config file: {}", e);
        eprintln!("Warning: {e}. Using defaults.");
        AyurConfig::default()
    });
    let resolved = resolve(&config, args.api_url.as_deref());
    log::info!("AyurAssist starting up, service: {}", resolved.api_url);

    let client: Arc<dyn AnalysisClient> = Arc::new(HttpAnalysisClient::new(
        resolved.api_url,
        resolved.flags,
        resolved.request_timeout,
    ));

    match args.query {
        Some(query) => {
            let (text, ok) = oneshot::analyze_to_text(client, &query).await;
            print!("{text}");
            Ok(if ok { ExitCode::SUCCESS } else { ExitCode::FAILURE })
        }
        None => {
            tui::run(client)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

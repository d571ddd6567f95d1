use std::path::PathBuf;

use chrono::Local;
use clap::Parser;
use presdocs::{
    info_time,
    process::{run, Outcome},
    ApiConfig, Fetcher, ReqwestClient, Scenario, ENDPOINT, FILE_PATH, FIRST_POSITION,
    LAST_POSITION, PER_PAGE, SCENARIO_END, SCENARIO_START,
};
use tracing::Level;

#[derive(Parser)]
#[command(name = "presdocs")]
#[command(about = "Extract presidential documents from the Federal Register into CSV", long_about = None)]
struct Cli {
    /// First publication date, DD.MM.YYYY
    #[arg(long, default_value = SCENARIO_START)]
    start_date: String,

    /// Last publication date, DD.MM.YYYY
    #[arg(long, default_value = SCENARIO_END)]
    end_date: String,

    #[arg(long, default_value_t = FIRST_POSITION)]
    first_position: usize,

    #[arg(long, default_value_t = LAST_POSITION)]
    last_position: usize,

    #[arg(long, default_value_t = PER_PAGE)]
    per_page: usize,

    #[arg(long, default_value = ENDPOINT)]
    endpoint: String,

    #[arg(short, long, default_value = FILE_PATH)]
    output: PathBuf,

    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_max_level(if cli.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let start_time = Local::now();
    let config = ApiConfig {
        endpoint: cli.endpoint,
        per_page: cli.per_page,
        ..ApiConfig::default()
    };
    let scenario = Scenario {
        start_date: cli.start_date,
        end_date: cli.end_date,
        positions: cli.first_position..=cli.last_position,
        output: cli.output,
    };
    let fetcher = Fetcher::new(ReqwestClient::new(), config);

    // Failures are reported, never turned into an exit code.
    match run(&fetcher, &scenario).await {
        Ok(outcome @ Outcome::NoDocuments) => println!("{outcome}"),
        Ok(outcome @ Outcome::Written { .. }) => println!("\n{outcome}"),
        Err(e) => println!("Error: {e}"),
    }
    info_time!(start_time, "Full program time:");
}

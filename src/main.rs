use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result, bail};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use campsite_check::adapters::recgov::client::RecGovClient;
use campsite_check::checker::CampsiteChecker;
use campsite_check::config::load_config;
use campsite_check::domain::dates::{self, DateSpec};

/// Checks recreation.gov campsite availability and prints booking links.
///
/// Dates are given either explicitly (--start-date, optionally --end-date)
/// or as a recurring pattern (--month, --year, --day-of-week), which checks
/// every such weekday in the month.
#[derive(Parser)]
#[command(author, version, about)]
struct Args {
    /// Month to check (1-12), e.g. Jan = 1
    #[arg(long, conflicts_with_all = ["start_date", "end_date"])]
    month: Option<u32>,

    /// Year to check [YYYY]
    #[arg(long, requires = "month")]
    year: Option<i32>,

    /// First night of each stay, e.g. Friday
    #[arg(long, requires = "month")]
    day_of_week: Option<String>,

    /// Consecutive number of nights desired, e.g. 2
    #[arg(long, default_value_t = 1)]
    num_nights: u32,

    /// Arrival date [YYYY-MM-DD]
    #[arg(long)]
    start_date: Option<String>,

    /// Departure date [YYYY-MM-DD]; defaults to the day after arrival
    #[arg(long, requires = "start_date")]
    end_date: Option<String>,

    /// Path to the YAML config file
    #[arg(long)]
    config: Option<PathBuf>,
}

fn build_date_spec(args: &Args) -> Result<DateSpec> {
    match (&args.start_date, args.month) {
        (Some(start), None) => {
            let start = dates::parse_date(start)?;
            let end = args
                .end_date
                .as_deref()
                .map(dates::parse_date)
                .transpose()?;
            Ok(DateSpec::Explicit { start, end })
        }
        (None, Some(month)) => {
            let (Some(year), Some(day_of_week)) = (args.year, args.day_of_week.as_deref()) else {
                bail!("--month requires --year and --day-of-week");
            };
            Ok(DateSpec::Recurring {
                year,
                month,
                weekday: dates::parse_weekday(day_of_week)?,
                nights: args.num_nights,
            })
        }
        (Some(_), Some(_)) => bail!("--start-date and --month are mutually exclusive"),
        (None, None) => {
            bail!("supply either --start-date [--end-date] or --month --year --day-of-week")
        }
    }
}

fn find_config_path() -> PathBuf {
    // Check common locations for config file
    let candidates = [
        PathBuf::from("config.yaml"),
        exe_dir().join("config.yaml"),
    ];

    for path in &candidates {
        if path.exists() {
            return path.clone();
        }
    }

    candidates[0].clone()
}

fn exe_dir() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(Path::to_path_buf))
        .unwrap_or_else(|| PathBuf::from("."))
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .init();

    let args = Args::parse();
    let spec = build_date_spec(&args)?;

    let config_path = args.config.clone().unwrap_or_else(find_config_path);
    let config = load_config(&config_path)?;

    let client = Arc::new(
        RecGovClient::new(config.search.clone()).context("failed to build HTTP client")?,
    );
    let checker = CampsiteChecker::new(client, &config);

    let offers = checker.find_campsites(&spec).await?;
    if offers.is_empty() {
        println!("No matching campsites found.");
    } else {
        for offer in &offers {
            println!("{offer}");
        }
    }

    Ok(())
}

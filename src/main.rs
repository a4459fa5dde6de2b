//! Command-line wrapper: `datediff 11 11 1918, 01 09 1939`

use clap::Parser;
use datediff::DateDiff;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

/// Count the days between two dates
#[derive(Debug, Parser)]
#[command(name = "datediff")]
#[command(author, version, about = "Count the days between two DD MM YYYY dates", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Two dates separated by a comma, e.g. `11 11 1918, 01 09 1939`
    #[arg(required = true, num_args = 1..)]
    dates: Vec<String>,
}

/// Determine log filter level from verbosity count
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn init_logging(verbose: u8) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(log_filter_from_verbosity(verbose)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .compact(),
        )
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let input = cli.dates.join(" ");
    tracing::info!(%input, "computing date difference");

    let diff: DateDiff = input.parse()?;
    if cli.json {
        println!("{}", serde_json::to_string(&diff)?);
    } else {
        println!("{diff}");
    }

    Ok(())
}

use clap::Parser;
use tracing::info;
use zoneparse_application::ParseZoneUseCase;
use zoneparse_domain::CliOverrides;

mod bootstrap;

#[derive(Parser)]
#[command(name = "zoneparse")]
#[command(version)]
#[command(about = "Parse BIND zone files into typed JSON records")]
struct Cli {
    /// Zone file path (stdin when omitted or "-")
    #[arg(value_name = "FILE")]
    zone: Option<String>,

    /// Configuration file path
    #[arg(short = 'c', long, value_name = "FILE")]
    config: Option<String>,

    /// Emit one ordered list instead of records grouped by type
    #[arg(long)]
    flatten: bool,

    /// Fail on the first record whose rdata cannot be decoded
    #[arg(long)]
    strict: bool,

    /// Drop the trailing dot from fully qualified names
    #[arg(long)]
    no_trailing_dot: bool,

    /// Concatenate TXT segments without a separating space
    #[arg(long)]
    compact_txt: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let cli_overrides = CliOverrides {
        flatten: cli.flatten,
        strict: cli.strict,
        no_trailing_dot: cli.no_trailing_dot,
        compact_txt: cli.compact_txt,
        log_level: cli.log_level.clone(),
    };

    let config = bootstrap::load_config(cli.config.as_deref(), cli_overrides)?;

    bootstrap::init_logging(&config);
    bootstrap::log_config(&config);

    let text = bootstrap::read_zone_text(cli.zone.as_deref())?;
    let zone = ParseZoneUseCase::new(config.parser).execute(&text)?;

    let json = if cli.pretty {
        serde_json::to_string_pretty(&zone)?
    } else {
        serde_json::to_string(&zone)?
    };
    println!("{}", json);

    info!(records = zone.records.len(), "Done");
    Ok(())
}

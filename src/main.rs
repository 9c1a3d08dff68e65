use std::path::PathBuf;

use clap::Parser;
use daily_excuse::{Generator, GeneratorConfig, Vocabulary};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

/// Generate a high-grade excuse to not attend the daily meeting
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Seed for reproducible excuses
    #[arg(long)]
    seed: Option<u64>,

    /// Number of excuses to generate
    #[arg(short = 'n', long, default_value_t = 1)]
    count: usize,

    /// Built-in excuse set
    #[arg(long, value_enum, default_value_t = Vocabulary::Classic)]
    vocabulary: Vocabulary,

    /// File of causes, one per line, replacing the built-in ones
    #[arg(long, value_name = "FILE")]
    causes: Option<PathBuf>,

    /// Print grammar statistics and its JSON form instead of an excuse
    #[arg(long)]
    debug: bool,

    /// Verbosity on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn setup_logging(verbosity: u8) {
    let filter = match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };

    // stdout carries the excuses only
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_filter(filter);

    tracing_subscriber::registry().with(fmt_layer).init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    setup_logging(cli.verbose);

    let generator = Generator::with_config(GeneratorConfig {
        seed: cli.seed,
        vocabulary: cli.vocabulary,
        causes_file: cli.causes,
    })?;

    if cli.debug {
        let root = generator.root();
        println!("count: {}", root.count());
        println!("max_length: {}", root.max_length());
        println!("{}", root.to_json()?);
        return Ok(());
    }

    for excuse in generator.generate_many(cli.count) {
        println!("{}", excuse);
    }

    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing::{info, warn};

use ratecheck::config::Config;
use ratecheck::router::PrefixTable;
use ratecheck::tariff::PhoneNumber;
use ratecheck::telemetry::{init_tracing, TracingConfig};
use ratecheck::{datagen, ingest};

#[derive(Parser, Debug)]
#[command(name = "ratecheck")]
#[command(author, version, about = "Least-cost operator lookup for phone numbers")]
struct Args {
    /// Path to config file
    #[arg(short, long, value_name = "FILE", global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Look up the cheapest operator for phone numbers
    Lookup {
        /// Phone number(s) to look up rates for
        #[arg(value_name = "NUMBER", required = true)]
        numbers: Vec<String>,

        /// Path to a file containing operator pricing data
        #[arg(short, long, value_name = "FILE")]
        rates: Option<PathBuf>,
    },

    /// Write a synthetic rate-table file to stdout
    Generate {
        /// Number of operators to generate
        #[arg(long, default_value_t = 3)]
        operators: usize,

        /// Number of prefixes per operator
        #[arg(long, default_value_t = 10)]
        prefixes: usize,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    let config = match &args.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };

    init_tracing(&TracingConfig {
        service_name: "ratecheck".to_string(),
        log_level: config.telemetry.log_level.clone(),
        json_logs: config.telemetry.json_logs,
    })?;

    match args.command {
        Command::Lookup { numbers, rates } => lookup(&config, &numbers, rates),
        Command::Generate {
            operators,
            prefixes,
        } => generate(operators, prefixes),
    }
}

fn lookup(config: &Config, numbers: &[String], rates: Option<PathBuf>) -> Result<()> {
    let rates_path = rates
        .or_else(|| config.rates.clone())
        .context("no rates file given: pass --rates or set `rates` in the config file")?;

    let operators = ingest::load_path(&rates_path)?;
    if operators.is_empty() {
        anyhow::bail!("no operator tables found in {}", rates_path.display());
    }

    info!(
        operators = operators.len(),
        rates = %rates_path.display(),
        "rate tables loaded"
    );

    let table = PrefixTable::build(operators);

    for raw in numbers {
        let number = match PhoneNumber::new(raw.as_str()) {
            Ok(number) => number,
            Err(err) => {
                warn!(number = %raw, %err, "skipping invalid number");
                println!("{raw}: invalid number");
                continue;
            }
        };

        match table.best_offer(&number) {
            Some((prefix, operator, price)) => {
                println!(
                    "{number}: operator={} prefix={prefix} price={price}",
                    operator.name()
                );
            }
            None => println!("{number}: no matching prefix"),
        }
    }

    Ok(())
}

fn generate(operators: usize, prefixes: usize) -> Result<()> {
    let mut rng = rand::rng();

    let mut generated = Vec::with_capacity(operators);
    for i in 0..operators {
        let name = operator_name(i);
        generated.push(datagen::random_operator(&mut rng, &name, prefixes)?);
    }

    info!(operators = generated.len(), prefixes, "rate tables generated");
    print!("{}", datagen::render(&generated));

    Ok(())
}

/// Spreadsheet-style names: A, B, ..., Z, AA, AB, ...
fn operator_name(index: usize) -> String {
    let mut name = String::new();
    let mut n = index + 1;
    while n > 0 {
        n -= 1;
        name.insert(0, (b'A' + (n % 26) as u8) as char);
        n /= 26;
    }
    name
}

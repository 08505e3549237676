use std::io::{self, Read};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use itertools::Itertools;
use lazyseq::{countdown, flatten_values, Cursor, Fibonacci, Interleave, Source, Value};
use num_bigint::BigUint;
use parser::literal::parse_literal;
use tracing::debug;
use tracing_subscriber::EnvFilter;

const MAX_COUNTDOWN: i64 = 1_000_000;

#[derive(Parser, Debug)]
#[command(name = "lazyseq", about = "Lazy sequence protocol demonstrations")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Print the first values of the Fibonacci producer, one per line.
    Fib {
        /// How many values to take.
        #[arg(long, default_value_t = 10)]
        count: usize,
        /// Start from `(PREV, CURR)` instead of `(0, 1)`.
        #[arg(long, num_args = 2, value_names = ["PREV", "CURR"])]
        seed: Option<Vec<BigUint>>,
    },
    /// Walk the countdown source with two cursors in lockstep.
    Countdown {
        /// At most 1_000_000: the whole countdown is built before walking it.
        #[arg(long, default_value_t = 3, value_parser = clap::value_parser!(i64).range(..=MAX_COUNTDOWN))]
        from: i64,
    },
    /// Flatten a nested literal such as `[[], [[]], 5]`.
    Flatten {
        /// Fail instead of descending into more nested containers than this.
        #[arg(long)]
        max_depth: Option<usize>,
        /// Literal to flatten; read from stdin when omitted.
        literal: Option<String>,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "parsed arguments");

    match cli.command {
        Commands::Fib { count, seed } => run_fib(count, seed),
        Commands::Countdown { from } => run_countdown(from),
        Commands::Flatten { max_depth, literal } => run_flatten(max_depth, literal)?,
    }

    Ok(())
}

fn run_fib(count: usize, seed: Option<Vec<BigUint>>) {
    let fib = match seed.as_deref() {
        Some([prev, curr]) => Fibonacci::seeded(prev.clone(), curr.clone()),
        _ => Fibonacci::new(),
    };
    for value in fib.take(count).iter() {
        println!("{}", value);
    }
}

fn run_countdown(from: i64) {
    let seq = countdown(from);
    let lockstep = Interleave::new(vec![(seq.cursor(), 1), (seq.cursor(), 1)]);
    for value in lockstep.iter() {
        println!("{}", value);
    }
}

fn run_flatten(max_depth: Option<usize>, literal: Option<String>) -> Result<()> {
    let raw_literal = match literal {
        Some(literal) => literal,
        None => {
            let mut raw_literal = String::new();
            io::stdin()
                .read_to_string(&mut raw_literal)
                .context("failed to read literal from stdin")?;
            raw_literal
        }
    };
    let value = Value::from(parse_literal(&raw_literal).context("failed to parse literal")?);
    let items = match value {
        Value::List(items) => items,
        scalar => vec![scalar],
    };

    let mut flat = flatten_values(items);
    if let Some(limit) = max_depth {
        flat = flat.with_max_depth(limit);
    }
    let scalars = flat
        .iter()
        .collect::<Result<Vec<_>, _>>()
        .context("failed to flatten literal")?;
    println!("[{}]", scalars.iter().format(", "));
    Ok(())
}

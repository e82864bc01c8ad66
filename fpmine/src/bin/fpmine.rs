//! Command-line front end: reads transactions, mines them, prints one
//! itemset per line.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

use fpmine::{MinSupport, MiningConfig};

const EXAMPLE_TRANSACTIONS: &[&[&str]] = &[
    &["a", "b", "c", "d", "e", "f", "g", "h"],
    &["a", "f", "g"],
    &["b", "d", "e", "f", "j"],
    &["a", "b", "d", "i", "k"],
    &["a", "b", "e", "g"],
];

#[derive(Parser, Debug)]
#[command(name = "fpmine")]
#[command(about = "Mine frequent itemsets with FP-Growth")]
struct Args {
    /// Transactions file, one transaction per line.
    #[arg(required_unless_present = "example")]
    input: Option<PathBuf>,

    /// Mine the built-in five-transaction example instead of a file.
    #[arg(long, conflicts_with = "input")]
    example: bool,

    /// Absolute count (`2`) or fraction of transactions (`0.4`).
    #[arg(short = 's', long, default_value = "2")]
    min_support: MinSupport,

    /// Longest itemset to report.
    #[arg(long)]
    max_len: Option<usize>,

    /// Enumerate single-path trees directly.
    #[arg(long)]
    single_path: bool,

    /// Item separator. Defaults to any whitespace.
    #[arg(short, long)]
    delimiter: Option<char>,

    /// Verbose output (repeat for trace-level events).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn parse_transactions(text: &str, delimiter: Option<char>) -> Vec<Vec<String>> {
    text.lines()
        .map(|line| match delimiter {
            Some(d) => line
                .split(d)
                .map(str::trim)
                .filter(|item| !item.is_empty())
                .map(String::from)
                .collect(),
            None => line.split_whitespace().map(String::from).collect(),
        })
        .filter(|tx: &Vec<String>| !tx.is_empty())
        .collect()
}

fn format_itemset<S: AsRef<str>>(items: &[S], support: usize) -> String {
    let joined: Vec<&str> = items.iter().map(|item| item.as_ref()).collect();
    format!("Frequent Itemset: {{{}}}, Support: {}", joined.join(", "), support)
}

fn run(args: Args) -> fpmine::Result<()> {
    let transactions = match &args.input {
        Some(path) => parse_transactions(&std::fs::read_to_string(path)?, args.delimiter),
        None => EXAMPLE_TRANSACTIONS
            .iter()
            .map(|tx| tx.iter().map(|item| item.to_string()).collect())
            .collect(),
    };

    let mut config = MiningConfig::new(args.min_support).with_single_path(args.single_path);
    config.max_len = args.max_len;

    let itemsets = fpmine::mine_with_config(&transactions, &config)?;
    for (items, support) in itemsets.iter() {
        println!("{}", format_itemset(&items, support));
    }
    Ok(())
}

fn main() -> ExitCode {
    let args = Args::parse();

    let log_level = match args.verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

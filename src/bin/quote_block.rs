//! Price every request in a quote batch file
//!
//! Outputs one row per request with the monthly premium

use anyhow::Context;
use clap::Parser;
use premium_estimator::{
    display::format_thousands,
    quote::{load_requests, loader::DEFAULT_QUOTES_PATH},
    rates::DEFAULT_RATES_PATH,
    batch::write_results,
    QuoteRunner,
};
use std::fs::File;
use std::io::BufWriter;
use std::path::PathBuf;
use std::time::Instant;

#[derive(Parser, Debug)]
#[command(name = "quote_block", about = "Price a CSV batch of quote requests.")]
struct Args {
    /// Quote batch CSV (Category,Gender,Age,CoverageUnit,Term,Smoker)
    #[arg(default_value = DEFAULT_QUOTES_PATH)]
    input: PathBuf,

    /// Directory with rate table CSVs
    #[arg(long, default_value = DEFAULT_RATES_PATH)]
    rates_dir: PathBuf,

    /// Output CSV path
    #[arg(long, default_value = "quote_block_output.csv")]
    output: PathBuf,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let start = Instant::now();
    println!("Loading requests from {}...", args.input.display());

    let requests = load_requests(&args.input)
        .with_context(|| format!("loading quote requests from {}", args.input.display()))?;
    println!("Loaded {} requests in {:?}", requests.len(), start.elapsed());

    let runner = QuoteRunner::from_csv_path(&args.rates_dir)
        .with_context(|| format!("loading rate tables from {}", args.rates_dir.display()))?;
    let results = runner.run_batch(&requests);

    let file = File::create(&args.output)
        .with_context(|| format!("creating {}", args.output.display()))?;
    write_results(BufWriter::new(file), &results)
        .with_context(|| format!("writing {}", args.output.display()))?;

    println!("Output written to {}", args.output.display());

    let total: u64 = results.iter().map(|r| r.monthly_premium).sum();
    if let Some(max) = results.iter().max_by_key(|r| r.monthly_premium) {
        println!("\nBatch Summary:");
        println!("  Requests:          {}", results.len());
        println!("  Total premium:     {}", format_thousands(total));
        println!("  Average premium:   {}", format_thousands(total / results.len() as u64));
        println!(
            "  Highest premium:   {} ({}, age {})",
            format_thousands(max.monthly_premium),
            max.request.category.code(),
            max.request.age
        );
    }

    println!("\nTotal time: {:?}", start.elapsed());
    Ok(())
}

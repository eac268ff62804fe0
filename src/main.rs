//! Premium Estimator CLI
//!
//! Command-line front end to the premium calculator

use anyhow::Context;
use clap::Parser;
use premium_estimator::{
    rates::DEFAULT_RATES_PATH, PremiumEstimator, QuoteForm, RateTable, ResultPanel,
};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[command(
    name = "premium_estimator",
    version,
    about = "Illustrative monthly premium estimate for one applicant."
)]
struct Args {
    /// Insurance type (e.g. MedicalExpense, Cancer, 암보험)
    #[arg(long, default_value = "")]
    category: String,

    /// male or female
    #[arg(long, default_value = "")]
    gender: String,

    /// Age in whole years (0-100)
    #[arg(long, default_value = "")]
    age: String,

    /// Coverage in units of 10,000 (5000 = 50,000,000)
    #[arg(long, default_value = "")]
    coverage: String,

    /// Coverage period: 10, 20, 30 or 100 (to age 100)
    #[arg(long, default_value = "")]
    term: String,

    /// Applicant smokes
    #[arg(long)]
    smoker: bool,

    /// Directory with rate table CSVs
    #[arg(long, default_value = DEFAULT_RATES_PATH)]
    rates_dir: PathBuf,

    /// Print the result as JSON
    #[arg(long)]
    json: bool,

    /// Print every factor of the calculation
    #[arg(long)]
    breakdown: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let form = QuoteForm {
        category: args.category,
        gender: args.gender,
        age: args.age,
        coverage: args.coverage,
        term: args.term,
        smoker: args.smoker,
    };

    let request = match form.validate() {
        Ok(request) => request,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(2);
        }
    };

    let rates = RateTable::from_csv_path(&args.rates_dir)
        .with_context(|| format!("loading rate tables from {}", args.rates_dir.display()))?;
    let estimator = PremiumEstimator::new(rates);
    let result = estimator.estimate(&request);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let mut panel = ResultPanel::default();
    panel.show(&result);
    println!("{}", panel);

    if args.breakdown {
        println!();
        println!("{}", estimator.breakdown(&request));
    }

    Ok(())
}

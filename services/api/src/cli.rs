use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

use crate::demo::{run_demo, run_import, run_score, DemoArgs};
use crate::server;
use sahayscore::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "SahayScore",
    about = "Score and track microloan applications from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Score a single applicant and print the component breakdown
    Score(ScoreArgs),
    /// Score a roster CSV export and print the resulting dashboard
    Import(ImportArgs),
    /// Run an end-to-end CLI demo covering intake, review, and statistics
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Applicant name
    #[arg(long)]
    pub(crate) name: Option<String>,
    /// Completed previous loans
    #[arg(long, default_value_t = 0)]
    pub(crate) previous_loans: u32,
    /// Declared monthly business income
    #[arg(long, default_value_t = 0.0)]
    pub(crate) business_income: f64,
    /// Monthly electricity bill
    #[arg(long, default_value_t = 0.0)]
    pub(crate) electricity_bill: f64,
    /// Monthly mobile recharge spend
    #[arg(long, default_value_t = 0.0)]
    pub(crate) mobile_recharge: f64,
    /// Other monthly utility payments
    #[arg(long, default_value_t = 0.0)]
    pub(crate) utility_payments: f64,
    /// Requested loan amount
    #[arg(long, default_value_t = 0.0)]
    pub(crate) loan_amount: f64,
    /// Borrower category ("New Borrower" or "Repeat Borrower")
    #[arg(long)]
    pub(crate) category: Option<String>,
}

#[derive(Args, Debug)]
pub(crate) struct ImportArgs {
    /// Roster CSV export to score
    pub(crate) file: PathBuf,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Score(args) => run_score(args),
        Command::Import(args) => run_import(args),
        Command::Demo(args) => run_demo(args),
    }
}

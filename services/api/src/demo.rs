use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;

use crate::cli::{ImportArgs, ScoreArgs};
use crate::infra::{
    default_scoring_config, sample_submissions, InMemoryApplicationRepository,
    InMemoryDecisionNotifier,
};
use sahayscore::error::AppError;
use sahayscore::workflows::intake::CsvApplicationImporter;
use sahayscore::workflows::lending::applications::{
    ApplicationFilter, ApplicationRecord, ApplicationStatus, ApplicationSubmission,
    BorrowerCategory, DashboardStats, LoanApplicationService, ScoreResult, ScoringEngine,
};

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Optional roster CSV export to seed the demo store instead of the
    /// built-in sample applicants.
    #[arg(long)]
    pub(crate) roster: Option<PathBuf>,
}

type DemoService = LoanApplicationService<InMemoryApplicationRepository, InMemoryDecisionNotifier>;

fn build_demo_service() -> (DemoService, Arc<InMemoryDecisionNotifier>) {
    let repository = Arc::new(InMemoryApplicationRepository::default());
    let notifier = Arc::new(InMemoryDecisionNotifier::default());
    let service = LoanApplicationService::new(repository, notifier.clone(), default_scoring_config());
    (service, notifier)
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let submission = ApplicationSubmission {
        name: args.name.unwrap_or_default(),
        previous_loans: args.previous_loans,
        business_income: args.business_income,
        electricity_bill: args.electricity_bill,
        mobile_recharge: args.mobile_recharge,
        utility_payments: args.utility_payments,
        loan_amount: args.loan_amount,
        category: args
            .category
            .map(BorrowerCategory::from)
            .unwrap_or_default(),
    };

    let engine = ScoringEngine::new(default_scoring_config());
    let result = engine.score(&submission);
    render_score(&submission.display_name(), &result);
    Ok(())
}

pub(crate) fn run_import(args: ImportArgs) -> Result<(), AppError> {
    let submissions = CsvApplicationImporter::from_path(&args.file)?;
    let (service, _) = build_demo_service();

    println!("Scoring {} applicant(s) from {}", submissions.len(), args.file.display());
    println!();
    for submission in submissions {
        let record = service.create(submission)?;
        render_record_line(&record);
    }

    println!();
    render_stats(&service.stats()?);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let (service, notifier) = build_demo_service();

    let submissions = match &args.roster {
        Some(path) => CsvApplicationImporter::from_path(path)?,
        None => sample_submissions(),
    };

    println!("== Intake ==");
    for submission in submissions {
        let record = service.create(submission)?;
        render_record_line(&record);
    }

    println!();
    println!("== Walk-in applicant ==");
    let walk_in = ApplicationSubmission {
        name: "Lakshmi Nair".to_string(),
        previous_loans: 4,
        business_income: 55_000.0,
        electricity_bill: 600.0,
        mobile_recharge: 100.0,
        utility_payments: 150.0,
        loan_amount: 35_000.0,
        category: BorrowerCategory::RepeatBorrower,
    };
    let result = service.engine().score(&walk_in);
    render_score(&walk_in.display_name(), &result);
    let record = service.create(walk_in)?;
    println!("stored as {}", record.id.0);

    println!();
    println!("== Review queue ==");
    let pending = service.list(&ApplicationFilter {
        status: Some(ApplicationStatus::Pending),
        search: None,
    })?;
    for record in &pending {
        render_record_line(record);
    }

    if let Some(first_pending) = pending.first() {
        println!();
        println!("== Admin override ==");
        match service.update_status(&first_pending.id, "fast-tracked") {
            Ok(_) => {}
            Err(error) => println!("rejected update: {error}"),
        }
        let approved = service.update_status(&first_pending.id, "approved")?;
        println!("{} manually approved", approved.id.0);
    }

    let rejected = service.list(&ApplicationFilter {
        status: Some(ApplicationStatus::Rejected),
        search: None,
    })?;
    if let Some(first_rejected) = rejected.first() {
        println!();
        println!("== Purge ==");
        let removed = service.delete(&first_rejected.id)?;
        println!("{} ({}) deleted after adverse action notice", removed.id.0, removed.name);
    }

    println!();
    println!("== Dashboard ==");
    render_stats(&service.stats()?);

    let distribution = service.score_distribution()?;
    println!(
        "repayment bands: excellent {} / good {} / average {} / poor {}",
        distribution.repayment.excellent,
        distribution.repayment.good,
        distribution.repayment.average,
        distribution.repayment.poor,
    );
    println!(
        "need bands: high {} / moderate {} / low {} / very low {}",
        distribution.need.high,
        distribution.need.moderate,
        distribution.need.low,
        distribution.need.very_low,
    );

    println!();
    println!("decision alerts published: {}", notifier.events().len());
    Ok(())
}

fn render_score(name: &str, result: &ScoreResult) {
    println!("applicant: {name}");
    for component in &result.components {
        println!("  {:>3} pts  {}", component.points, component.notes);
    }
    println!(
        "repayment {} / need {} / composite {}",
        result.repayment_score, result.need_score, result.composite_score
    );
    println!(
        "classification: {} -> {}",
        result.classification.label(),
        result.status.label()
    );
}

fn render_record_line(record: &ApplicationRecord) {
    println!(
        "{}  {:<16} {:>4}/{:>4}/{:>5}  {:<9} {}",
        record.id.0,
        record.name,
        record.repayment_score,
        record.need_score,
        record.composite_score,
        record.status.label(),
        record.classification.label(),
    );
}

fn render_stats(stats: &DashboardStats) {
    println!(
        "{} application(s): {} approved, {} pending, {} rejected",
        stats.total, stats.approved, stats.pending, stats.rejected
    );
    println!(
        "average composite {} / approved disbursement {:.0}",
        stats.avg_composite, stats.total_approved
    );
}

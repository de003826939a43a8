use crate::infra::{CatalogState, InMemoryAssessmentRepository};
use clap::Args;
use rmf_assess::assessment::{AnswerSheetImporter, AssessmentService, AssessmentSubmission};
use rmf_assess::error::AppError;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug)]
pub(crate) struct AssessArgs {
    /// Answer sheet CSV with `Question ID,Score` columns
    #[arg(long)]
    pub(crate) answers: PathBuf,
    /// Industry identifier used for guidance lookups
    #[arg(long, default_value = "technology")]
    pub(crate) industry: String,
    /// Organization name recorded with the assessment
    #[arg(long)]
    pub(crate) organization: Option<String>,
}

/// Scores an answer sheet against the standard catalogs and prints the
/// maturity report, without starting the HTTP service.
pub(crate) fn run_offline_assessment(args: AssessArgs) -> Result<(), AppError> {
    let catalogs = CatalogState::load();
    let answers = AnswerSheetImporter::from_path(&args.answers)?;

    let service = AssessmentService::new(
        Arc::new(InMemoryAssessmentRepository::default()),
        catalogs.questions.clone(),
        catalogs.actions.clone(),
    );

    let record = service.submit(AssessmentSubmission {
        industry: args.industry,
        organization_name: args.organization,
        answers,
    })?;

    println!("Assessment {}", record.id.0);
    println!("Organization: {}", record.organization_name);
    println!(
        "Overall: {:.1}% ({})",
        record.outcome.overall_score,
        record.outcome.overall_maturity.label()
    );

    println!();
    println!("Function scores:");
    for score in record.outcome.function_scores.values() {
        println!(
            "  {:<4} {:<10} {:>5.1}%  avg {:.1}  {}",
            score.code,
            score.name,
            score.score_pct,
            score.avg_score,
            score.maturity.label()
        );
    }

    println!();
    if record.outcome.priority_actions.is_empty() {
        println!("No remediation actions triggered.");
    } else {
        println!("Priority actions:");
        for action in &record.outcome.priority_actions {
            println!(
                "  [{:<8}] {} ({}) - score {:.1}, target {:.1}, {}",
                action.severity.label(),
                action.title,
                action.category,
                action.current_score,
                action.target_score,
                action.timeline
            );
        }
    }

    if let Some(profile) = catalogs
        .industries
        .iter()
        .find(|profile| profile.id == record.industry)
    {
        println!();
        println!("Industry guidance - {}:", profile.name);
        for recommendation in &profile.recommendations {
            println!(
                "  [{}] {}: {}",
                recommendation.function, recommendation.title, recommendation.detail
            );
        }
    }

    Ok(())
}

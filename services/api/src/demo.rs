use crate::infra::{InMemoryLeadNotifier, InMemorySubmissionRepository};
use clap::Args;
use screening::assessment::{
    AssessmentEngine, AssessmentIntake, AssessmentResult, ContactDetails, Domain, QuestionCatalog,
    ScreeningService,
};
use screening::error::AppError;
use std::collections::BTreeMap;
use std::path::PathBuf;
use std::sync::Arc;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Include the per-domain breakdown table for each sample submission
    #[arg(long)]
    pub(crate) show_breakdown: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// Path to a JSON file mapping question keys to ordinal answers ("1"-"4")
    #[arg(long)]
    pub(crate) answers: PathBuf,
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let raw = std::fs::read_to_string(&args.answers)?;
    let answers: BTreeMap<String, String> = serde_json::from_str(&raw).map_err(|err| {
        AppError::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, err))
    })?;

    let engine = AssessmentEngine::default();
    let result = engine.evaluate(&answers);
    render_result(&result, true);
    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let catalog = Arc::new(QuestionCatalog::standard());
    let repository = Arc::new(InMemorySubmissionRepository::default());
    let notifier = Arc::new(InMemoryLeadNotifier::default());
    let service = Arc::new(ScreeningService::new(
        catalog.clone(),
        repository,
        notifier.clone(),
    ));

    println!("Developmental screening demo (sample data, not clinical advice)");

    for (label, intake) in sample_intakes(&catalog) {
        println!("\n{label}");
        let record = match service.submit(intake) {
            Ok(record) => record,
            Err(err) => {
                println!("  Submission rejected: {}", err);
                continue;
            }
        };
        println!(
            "- Received submission {} -> overall risk {}",
            record.submission_id.0,
            record.result.overall_risk.label()
        );
        render_result(&record.result, args.show_breakdown);
    }

    let recent = service.recent(3)?;
    println!("\nMost recent submissions:");
    for record in &recent {
        println!(
            "  - {} risk={} received={}",
            record.submission_id.0,
            record.result.overall_risk.label(),
            record.received_at.format("%Y-%m-%d %H:%M:%S UTC")
        );
    }

    let leads = notifier.leads();
    if leads.is_empty() {
        println!("\nLead notifications: none dispatched");
    } else {
        println!("\nLead notifications handed to the CRM adapter:");
        for lead in leads {
            println!(
                "  - {} ({}) risk={} flagged=[{}]",
                lead.submission_id.0,
                lead.contact_email,
                lead.risk_label,
                lead.flagged_domains.join(", ")
            );
        }
    }

    Ok(())
}

fn render_result(result: &AssessmentResult, show_breakdown: bool) {
    println!("  Summary: {}", result.message);
    if result.flagged_domains.is_empty() {
        println!("  Flagged domains: none");
    } else {
        let labels: Vec<&str> = result
            .flagged_domains
            .iter()
            .map(|domain| domain.label())
            .collect();
        println!("  Flagged domains: {}", labels.join(", "));
    }
    println!("  Recommendations:");
    for item in &result.recommendations {
        println!("    - {}", item);
    }

    if show_breakdown {
        println!("  Domain breakdown:");
        for entry in result.domain_breakdown() {
            println!(
                "    - {:<20} {:>2}/{} ({:>3}%) {}",
                entry.domain_label, entry.score, entry.max_score, entry.percentage, entry.status_label
            );
        }
    }
}

fn sample_intakes(catalog: &QuestionCatalog) -> Vec<(&'static str, AssessmentIntake)> {
    vec![
        (
            "Sample 1: typical development",
            intake_with(catalog, "Riley Chen", "riley.chen@example.com", &[], "1"),
        ),
        (
            "Sample 2: attention concerns",
            intake_with(
                catalog,
                "Sam Okafor",
                "sam.okafor@example.com",
                &[Domain::CognitiveAttention],
                "2",
            ),
        ),
        (
            "Sample 3: concerns in several areas",
            intake_with(
                catalog,
                "Alex Moreau",
                "alex.moreau@example.com",
                &[Domain::Behavioral, Domain::MotorSkills],
                "1",
            ),
        ),
    ]
}

fn intake_with(
    catalog: &QuestionCatalog,
    name: &str,
    email: &str,
    elevated: &[Domain],
    baseline: &str,
) -> AssessmentIntake {
    let answers: BTreeMap<String, String> = catalog
        .questions()
        .map(|question| {
            let value = if elevated.contains(&question.domain) {
                "4"
            } else {
                baseline
            };
            (question.key.to_string(), value.to_string())
        })
        .collect();

    AssessmentIntake {
        contact: ContactDetails {
            name: name.to_string(),
            email: email.to_string(),
            age: 6,
            relationship: "Parent".to_string(),
        },
        answers,
    }
}

use crate::cli::InputArgs;
use crate::infra::assess_validated;
use chrono::Utc;
use clap::Args;
use ivf_navigator::error::AppError;
use ivf_navigator::navigator::{write_csv, ClinicalInputs, EvaluationRecord, NavigatorAssessment};
use std::fs::File;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct EvaluateArgs {
    #[command(flatten)]
    pub(crate) inputs: InputArgs,
    /// Print the full assessment as JSON instead of text
    #[arg(long)]
    pub(crate) json: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ExportArgs {
    #[command(flatten)]
    pub(crate) inputs: InputArgs,
    /// Destination CSV file (overwritten if present)
    #[arg(long)]
    pub(crate) output: PathBuf,
}

pub(crate) fn run_evaluate(args: EvaluateArgs) -> Result<(), AppError> {
    let inputs = ClinicalInputs::from(args.inputs);
    let assessment = assess_validated(&inputs)?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&assessment)?);
    } else {
        print!("{}", render_assessment(&assessment));
    }

    Ok(())
}

pub(crate) fn run_export(args: ExportArgs) -> Result<(), AppError> {
    let inputs = ClinicalInputs::from(args.inputs);
    let assessment = assess_validated(&inputs)?;
    let record = EvaluationRecord::from_assessment(&assessment, Utc::now());

    let file = File::create(&args.output)?;
    write_csv(file, &[record])?;

    println!("Wrote evaluation record to {}", args.output.display());
    Ok(())
}

pub(crate) fn render_assessment(assessment: &NavigatorAssessment) -> String {
    let inputs = &assessment.inputs;
    let mut out = String::from("NAVIGATOR assessment\n");

    out.push_str(&format!(
        "Inputs: age {:.0}, BMI {:.1}, EMT {:.1} mm, P4 {:.1} ng/mL, euploid {}, good grade {}\n",
        inputs.age,
        inputs.bmi,
        inputs.emt_mm,
        inputs.prog_ng_ml,
        yes_no(inputs.euploid),
        yes_no(inputs.good_grade)
    ));

    out.push_str("\nScores (0 best -> 100 worst)\n");
    for entry in assessment.scores.entries() {
        out.push_str(&format!(
            "- {} ({}): {:.1} [{}]\n",
            entry.label, entry.code, entry.score, entry.bucket
        ));
    }
    out.push_str(&format!(
        "Overall: {} | primary limiting domain: {}\n",
        assessment.overall_bucket, assessment.primary_domain
    ));

    out.push_str("\nSuggested patient IVF path\n");
    for section in &assessment.sections {
        out.push_str(&format!("\n{}\n", section.title));
        for bullet in &section.bullets {
            out.push_str(&format!("- {bullet}\n"));
        }
    }

    out
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}

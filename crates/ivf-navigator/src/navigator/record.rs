use super::NavigatorAssessment;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::io::Write;
use thiserror::Error;

/// Flattened audit row for one assessment.
///
/// Field order is the export column order. Flags are written as 0/1 and
/// scores are rounded to two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationRecord {
    pub recorded_at: DateTime<Utc>,
    pub age: f64,
    pub bmi: f64,
    pub emt_mm: f64,
    pub prog_ng_ml: f64,
    pub euploid: u8,
    pub good_grade: u8,
    #[serde(rename = "SBS")]
    pub sbs: f64,
    #[serde(rename = "EPS")]
    pub eps: f64,
    #[serde(rename = "EGS")]
    pub egs: f64,
    #[serde(rename = "GNI")]
    pub gni: f64,
    pub overall_bucket: &'static str,
    pub primary_limiting_domain: &'static str,
}

impl EvaluationRecord {
    pub fn from_assessment(assessment: &NavigatorAssessment, recorded_at: DateTime<Utc>) -> Self {
        let inputs = &assessment.inputs;
        let scores = &assessment.scores;

        Self {
            recorded_at,
            age: inputs.age,
            bmi: inputs.bmi,
            emt_mm: inputs.emt_mm,
            prog_ng_ml: inputs.prog_ng_ml,
            euploid: u8::from(inputs.euploid),
            good_grade: u8::from(inputs.good_grade),
            sbs: round2(scores.sbs),
            eps: round2(scores.eps),
            egs: round2(scores.egs),
            gni: round2(scores.gni),
            overall_bucket: assessment.overall_bucket.label(),
            primary_limiting_domain: assessment.primary_domain.label(),
        }
    }
}

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to encode evaluation record: {0}")]
    Csv(#[from] csv::Error),
    #[error("failed to flush evaluation export: {0}")]
    Io(#[from] std::io::Error),
}

/// Writes a header row followed by one row per record.
pub fn write_csv<W: Write>(writer: W, records: &[EvaluationRecord]) -> Result<(), ExportError> {
    let mut csv_writer = csv::WriterBuilder::new()
        .has_headers(true)
        .from_writer(writer);

    for record in records {
        csv_writer.serialize(record)?;
    }

    csv_writer.flush()?;
    Ok(())
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

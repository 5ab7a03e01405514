//! Scoring and decision engine.
//!
//! [`scoring`] maps raw measurements to the three domain scores and the
//! Global NAVIGATOR Index, [`pathway`] turns inputs and scores into ordered
//! recommendation sections, and [`record`] flattens an assessment into an
//! export row. None of it holds state between calls.

pub mod domain;
pub mod pathway;
pub mod record;
pub mod scoring;

pub use domain::{ClinicalInputs, Domain, InputError, InputField, RiskBucket};
pub use pathway::{suggest_path, RecommendationSection};
pub use record::{write_csv, EvaluationRecord, ExportError};
pub use scoring::{bucket, clamp01, compute_scores, primary_limiting_domain};

use serde::Serialize;
use tracing::debug;

/// Domain scores and global index for one evaluation, each in `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NavigatorScores {
    pub sbs: f64,
    pub eps: f64,
    pub egs: f64,
    pub gni: f64,
}

impl NavigatorScores {
    pub fn domain_score(&self, domain: Domain) -> f64 {
        match domain {
            Domain::Systemic => self.sbs,
            Domain::Endometrium => self.eps,
            Domain::Embryo => self.egs,
        }
    }

    pub fn primary_domain(&self) -> Domain {
        primary_limiting_domain(self.sbs, self.eps, self.egs)
    }

    /// Rows for score tables: the three domains, then the global index.
    pub fn entries(&self) -> Vec<ScoreEntry> {
        let mut entries: Vec<ScoreEntry> = Domain::ordered()
            .into_iter()
            .map(|domain| {
                let score = self.domain_score(domain);
                ScoreEntry {
                    code: domain.score_code(),
                    label: domain.label(),
                    score,
                    bucket: bucket(score),
                }
            })
            .collect();

        entries.push(ScoreEntry {
            code: "GNI",
            label: "Global",
            score: self.gni,
            bucket: bucket(self.gni),
        });

        entries
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoreEntry {
    pub code: &'static str,
    pub label: &'static str,
    pub score: f64,
    pub bucket: RiskBucket,
}

/// Everything derived from one set of inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NavigatorAssessment {
    pub inputs: ClinicalInputs,
    pub scores: NavigatorScores,
    pub overall_bucket: RiskBucket,
    pub primary_domain: Domain,
    pub sections: Vec<RecommendationSection>,
}

/// Stateless front door running scoring and the decision tree in sequence.
#[derive(Debug, Default, Clone, Copy)]
pub struct NavigatorEngine;

impl NavigatorEngine {
    pub fn new() -> Self {
        Self
    }

    pub fn assess(&self, inputs: &ClinicalInputs) -> NavigatorAssessment {
        let scores = compute_scores(inputs);
        let overall_bucket = bucket(scores.gni);
        let primary_domain = scores.primary_domain();
        let sections = suggest_path(inputs, &scores);

        debug!(
            sbs = scores.sbs,
            eps = scores.eps,
            egs = scores.egs,
            gni = scores.gni,
            bucket = overall_bucket.label(),
            primary = primary_domain.label(),
            "navigator assessment computed"
        );

        NavigatorAssessment {
            inputs: *inputs,
            scores,
            overall_bucket,
            primary_domain,
            sections,
        }
    }
}

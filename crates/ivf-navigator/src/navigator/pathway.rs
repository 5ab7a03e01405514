use super::domain::ClinicalInputs;
use super::scoring::{bucket, primary_limiting_domain};
use super::NavigatorScores;
use serde::Serialize;

pub const EMBRYO_FOCUS_TITLE: &str = "Primary focus: Embryo competence";
pub const EMBRYO_GATE_PASSED_TITLE: &str = "Embryo gate passed (euploid = Yes)";
pub const ENDOMETRIAL_TITLE: &str = "Endometrial phenotype actions";
pub const SYSTEMIC_TITLE: &str = "Systemic biology actions";
pub const SUMMARY_TITLE: &str = "NAVIGATOR summary path";

const THIN_EMT_BELOW_MM: f64 = 7.0;
const LOW_PROGESTERONE_BELOW_NG_ML: f64 = 9.5;
const HIGH_BMI_FROM: f64 = 30.0;
const MODERATE_BMI_FROM: f64 = 27.0;
const ADVANCED_AGE_FROM: f64 = 38.0;

/// One titled block of guidance in a suggested path.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecommendationSection {
    pub title: String,
    pub bullets: Vec<String>,
}

impl RecommendationSection {
    fn new(title: &str, bullets: Vec<String>) -> Self {
        Self {
            title: title.to_string(),
            bullets,
        }
    }
}

/// Builds the suggested IVF path.
///
/// Sections always come out in the same order: the embryo gate, endometrial
/// actions, systemic actions, then the summary. Measurements quoted in bullets
/// use one decimal place, age none.
pub fn suggest_path(
    inputs: &ClinicalInputs,
    scores: &NavigatorScores,
) -> Vec<RecommendationSection> {
    vec![
        embryo_gate(inputs),
        endometrial_actions(inputs),
        systemic_actions(inputs),
        summary(scores),
    ]
}

fn embryo_gate(inputs: &ClinicalInputs) -> RecommendationSection {
    if inputs.euploid {
        return RecommendationSection::new(
            EMBRYO_GATE_PASSED_TITLE,
            vec!["Proceed to endometrial and systemic optimization checks before transfer.".to_string()],
        );
    }

    RecommendationSection::new(
        EMBRYO_FOCUS_TITLE,
        vec![
            "If PGT-A is available/appropriate, prioritize transferring a euploid embryo to reduce embryo-related uncertainty.".to_string(),
            "If no euploid embryos are available, focus on optimizing stimulation strategy and embryo selection (lab + morphology).".to_string(),
            "Consider deferring endometrial optimization steps until embryo competence is addressed.".to_string(),
        ],
    )
}

fn endometrial_actions(inputs: &ClinicalInputs) -> RecommendationSection {
    let mut bullets = Vec::new();

    if inputs.emt_mm < THIN_EMT_BELOW_MM {
        bullets.push(format!(
            "Endometrium thickness is low (EMT {:.1} mm). Optimize endometrial preparation (standard protocol adjustments) before transfer.",
            inputs.emt_mm
        ));
        bullets.push(
            "If thin endometrium persists, consider uterine cavity evaluation (e.g., sonohysterography/hysteroscopy) per clinic practice.".to_string(),
        );
    }

    if inputs.prog_ng_ml < LOW_PROGESTERONE_BELOW_NG_ML {
        bullets.push(format!(
            "Progesterone appears low (P4 {:.1} ng/mL). Consider confirming progesterone on the day of transfer (or mid-luteal depending on protocol) and adjusting luteal support per clinic standards.",
            inputs.prog_ng_ml
        ));
    }

    if bullets.is_empty() {
        bullets.push(
            "Endometrial readiness markers (EMT and progesterone) look acceptable for proceeding within standard workflows.".to_string(),
        );
    }

    RecommendationSection::new(ENDOMETRIAL_TITLE, bullets)
}

fn systemic_actions(inputs: &ClinicalInputs) -> RecommendationSection {
    let mut bullets = Vec::new();

    // Only one BMI bullet is ever emitted.
    if inputs.bmi >= HIGH_BMI_FROM {
        bullets.push(format!(
            "BMI is elevated (BMI {:.1}). Consider a pre-transfer optimization window focusing on weight, sleep, and activity—especially if repeated failures.",
            inputs.bmi
        ));
    } else if inputs.bmi >= MODERATE_BMI_FROM {
        bullets.push(format!(
            "BMI is moderately elevated (BMI {:.1}). Lifestyle optimization may improve systemic environment before transfer.",
            inputs.bmi
        ));
    }

    if inputs.age >= ADVANCED_AGE_FROM {
        bullets.push(format!(
            "Age is {:.0}. Consider prioritizing embryo genetics/selection and minimizing delays to transfer once readiness is confirmed.",
            inputs.age
        ));
    }

    if bullets.is_empty() {
        bullets.push(
            "Systemic risk signals (age/BMI) are not strongly elevated; proceed with standard preparation.".to_string(),
        );
    }

    RecommendationSection::new(SYSTEMIC_TITLE, bullets)
}

fn summary(scores: &NavigatorScores) -> RecommendationSection {
    let primary = primary_limiting_domain(scores.sbs, scores.eps, scores.egs);

    RecommendationSection::new(
        SUMMARY_TITLE,
        vec![
            format!(
                "Global NAVIGATOR Index (0–100): {:.1} → {} overall risk",
                scores.gni,
                bucket(scores.gni)
            ),
            format!("Primary limiting domain: {primary}"),
            "Suggested sequence: Address the primary limiting domain first, then re-check readiness and proceed to transfer.".to_string(),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigator::scoring::compute_scores;

    fn path_for(inputs: ClinicalInputs) -> Vec<RecommendationSection> {
        suggest_path(&inputs, &compute_scores(&inputs))
    }

    #[test]
    fn sections_follow_fixed_order() {
        let titles: Vec<_> = path_for(ClinicalInputs::default())
            .into_iter()
            .map(|section| section.title)
            .collect();

        assert_eq!(
            titles,
            [
                EMBRYO_GATE_PASSED_TITLE,
                ENDOMETRIAL_TITLE,
                SYSTEMIC_TITLE,
                SUMMARY_TITLE
            ]
        );
    }

    #[test]
    fn aneuploid_embryo_triggers_focus_section() {
        let path = path_for(ClinicalInputs {
            euploid: false,
            ..ClinicalInputs::default()
        });

        assert_eq!(path[0].title, EMBRYO_FOCUS_TITLE);
        assert_eq!(path[0].bullets.len(), 3);
        assert!(path[0].bullets[0].contains("PGT-A"));
    }

    #[test]
    fn euploid_embryo_passes_gate_with_single_bullet() {
        let path = path_for(ClinicalInputs::default());

        assert_eq!(path[0].bullets.len(), 1);
    }

    #[test]
    fn thin_lining_and_low_progesterone_collect_three_bullets() {
        let path = path_for(ClinicalInputs {
            emt_mm: 6.4,
            prog_ng_ml: 8.0,
            ..ClinicalInputs::default()
        });
        let endometrial = &path[1];

        assert_eq!(endometrial.bullets.len(), 3);
        assert!(endometrial.bullets[0].contains("EMT 6.4 mm"));
        assert!(endometrial.bullets[1].contains("uterine cavity evaluation"));
        assert!(endometrial.bullets[2].contains("P4 8.0 ng/mL"));
    }

    #[test]
    fn acceptable_endometrium_gets_fallback_bullet() {
        let path = path_for(ClinicalInputs {
            emt_mm: 7.0,
            prog_ng_ml: 9.5,
            ..ClinicalInputs::default()
        });

        assert_eq!(path[1].bullets.len(), 1);
        assert!(path[1].bullets[0].starts_with("Endometrial readiness markers"));
    }

    #[test]
    fn bmi_bullets_are_mutually_exclusive() {
        let high = path_for(ClinicalInputs {
            bmi: 31.4,
            ..ClinicalInputs::default()
        });
        assert_eq!(high[2].bullets.len(), 1);
        assert!(high[2].bullets[0].starts_with("BMI is elevated (BMI 31.4)"));

        let moderate = path_for(ClinicalInputs {
            bmi: 27.0,
            ..ClinicalInputs::default()
        });
        assert_eq!(moderate[2].bullets.len(), 1);
        assert!(moderate[2].bullets[0].starts_with("BMI is moderately elevated (BMI 27.0)"));
    }

    #[test]
    fn bmi_of_thirty_counts_as_elevated() {
        let path = path_for(ClinicalInputs {
            bmi: 30.0,
            ..ClinicalInputs::default()
        });

        assert_eq!(path[2].bullets.len(), 1);
        assert!(path[2].bullets[0].starts_with("BMI is elevated (BMI 30.0)."));
    }

    #[test]
    fn age_of_thirty_eight_triggers_age_bullet() {
        let path = path_for(ClinicalInputs {
            age: 38.0,
            ..ClinicalInputs::default()
        });

        assert_eq!(path[2].bullets.len(), 1);
        assert!(path[2].bullets[0].starts_with("Age is 38."));
    }

    #[test]
    fn age_bullet_is_independent_of_bmi() {
        let path = path_for(ClinicalInputs {
            age: 41.0,
            bmi: 33.0,
            ..ClinicalInputs::default()
        });
        let systemic = &path[2];

        assert_eq!(systemic.bullets.len(), 2);
        assert!(systemic.bullets[1].starts_with("Age is 41."));
    }

    #[test]
    fn unremarkable_systemic_inputs_get_fallback_bullet() {
        let path = path_for(ClinicalInputs {
            age: 37.9,
            bmi: 26.9,
            ..ClinicalInputs::default()
        });

        assert_eq!(
            path[2].bullets,
            ["Systemic risk signals (age/BMI) are not strongly elevated; proceed with standard preparation."]
        );
    }

    #[test]
    fn summary_reports_index_bucket_and_domain() {
        let path = path_for(ClinicalInputs::default());
        let summary = &path[3];

        assert_eq!(summary.bullets.len(), 3);
        assert_eq!(
            summary.bullets[0],
            "Global NAVIGATOR Index (0–100): 4.4 → Low overall risk"
        );
        assert_eq!(summary.bullets[1], "Primary limiting domain: Systemic");
        assert!(summary.bullets[2].starts_with("Suggested sequence:"));
    }

    #[test]
    fn identical_inputs_produce_identical_paths() {
        let inputs = ClinicalInputs {
            age: 39.0,
            bmi: 28.2,
            emt_mm: 5.1,
            prog_ng_ml: 7.7,
            euploid: false,
            good_grade: true,
        };

        assert_eq!(path_for(inputs), path_for(inputs));
    }
}

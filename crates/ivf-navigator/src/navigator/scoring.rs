//! Closed-form risk ramps for the three clinical domains and their weighted
//! aggregate. Every score runs from 0 (no risk) to 100 (maximal risk).

use super::domain::{ClinicalInputs, Domain, RiskBucket};
use super::NavigatorScores;

const AGE_SAFE_YEARS: f64 = 30.0;
const AGE_RAMP_YEARS: f64 = 15.0;
const BMI_SAFE: f64 = 22.0;
const BMI_RAMP: f64 = 18.0;
const SYSTEMIC_AGE_WEIGHT: f64 = 0.55;
const SYSTEMIC_BMI_WEIGHT: f64 = 0.45;

const EMT_SAFE_MM: f64 = 7.0;
const EMT_RAMP_MM: f64 = 3.0;
const PROGESTERONE_SAFE_NG_ML: f64 = 9.5;
const PROGESTERONE_RAMP_NG_ML: f64 = 6.0;
const ENDOMETRIAL_EMT_WEIGHT: f64 = 0.60;
const ENDOMETRIAL_PROGESTERONE_WEIGHT: f64 = 0.40;

const EUPLOID_WEIGHT: f64 = 0.70;
const GOOD_GRADE_WEIGHT: f64 = 0.30;

const GLOBAL_EMBRYO_WEIGHT: f64 = 0.45;
const GLOBAL_ENDOMETRIAL_WEIGHT: f64 = 0.35;
const GLOBAL_SYSTEMIC_WEIGHT: f64 = 0.20;

const MODERATE_FROM: f64 = 30.0;
const HIGH_FROM: f64 = 60.0;

/// Restricts `x` to `[0, 1]`.
///
/// `f64::min`/`f64::max` return the non-NaN operand, so a NaN ratio lands on
/// 1.0 and reads as maximal risk instead of leaking out of the range.
pub fn clamp01(x: f64) -> f64 {
    x.min(1.0).max(0.0)
}

fn clamp_score(x: f64) -> f64 {
    x.min(100.0).max(0.0)
}

fn indicator(flag: bool) -> f64 {
    if flag {
        1.0
    } else {
        0.0
    }
}

/// Systemic Biology Score from age (years) and BMI.
pub fn score_systemic(age: f64, bmi: f64) -> f64 {
    let age_risk = clamp01((age - AGE_SAFE_YEARS) / AGE_RAMP_YEARS);
    let bmi_risk = clamp01((bmi - BMI_SAFE) / BMI_RAMP);
    clamp_score(100.0 * (SYSTEMIC_AGE_WEIGHT * age_risk + SYSTEMIC_BMI_WEIGHT * bmi_risk))
}

/// Endometrial Phenotype Score. Both ramps are inverted: thinner lining and
/// lower progesterone mean more risk.
pub fn score_endometrial(emt_mm: f64, prog_ng_ml: f64) -> f64 {
    let emt_risk = clamp01((EMT_SAFE_MM - emt_mm) / EMT_RAMP_MM);
    let prog_risk = clamp01((PROGESTERONE_SAFE_NG_ML - prog_ng_ml) / PROGESTERONE_RAMP_NG_ML);
    clamp_score(
        100.0 * (ENDOMETRIAL_EMT_WEIGHT * emt_risk + ENDOMETRIAL_PROGESTERONE_WEIGHT * prog_risk),
    )
}

/// Embryo Competence Score: one of 0, 30, 70 or 100.
pub fn score_embryo(euploid: bool, good_grade: bool) -> f64 {
    let competence =
        EUPLOID_WEIGHT * indicator(euploid) + GOOD_GRADE_WEIGHT * indicator(good_grade);
    clamp_score(100.0 * (1.0 - clamp01(competence)))
}

/// Global NAVIGATOR Index. Embryo competence carries the largest weight.
pub fn global_index(sbs: f64, eps: f64, egs: f64) -> f64 {
    clamp_score(
        GLOBAL_EMBRYO_WEIGHT * egs + GLOBAL_ENDOMETRIAL_WEIGHT * eps + GLOBAL_SYSTEMIC_WEIGHT * sbs,
    )
}

pub fn compute_scores(inputs: &ClinicalInputs) -> NavigatorScores {
    let sbs = score_systemic(inputs.age, inputs.bmi);
    let eps = score_endometrial(inputs.emt_mm, inputs.prog_ng_ml);
    let egs = score_embryo(inputs.euploid, inputs.good_grade);

    NavigatorScores {
        sbs,
        eps,
        egs,
        gni: global_index(sbs, eps, egs),
    }
}

/// Bands are closed below and open above; anything not under 60, NaN
/// included, is High.
pub fn bucket(score: f64) -> RiskBucket {
    if score < MODERATE_FROM {
        RiskBucket::Low
    } else if score < HIGH_FROM {
        RiskBucket::Moderate
    } else {
        RiskBucket::High
    }
}

/// Domain with the highest score. Candidates are scanned Embryo, Endometrium,
/// Systemic and only a strictly greater score displaces the current pick, so
/// ties resolve in that order.
pub fn primary_limiting_domain(sbs: f64, eps: f64, egs: f64) -> Domain {
    let candidates = [(Domain::Endometrium, eps), (Domain::Systemic, sbs)];

    let mut primary = (Domain::Embryo, egs);
    for (domain, score) in candidates {
        if score > primary.1 {
            primary = (domain, score);
        }
    }

    primary.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn clamp01_bounds_ratios() {
        assert_eq!(clamp01(-0.4), 0.0);
        assert_eq!(clamp01(0.25), 0.25);
        assert_eq!(clamp01(3.0), 1.0);
        assert_eq!(clamp01(f64::NAN), 1.0);
        assert_eq!(clamp01(f64::NEG_INFINITY), 0.0);
    }

    #[test]
    fn systemic_ramp_starts_and_saturates_at_thresholds() {
        assert_close(score_systemic(30.0, 22.0), 0.0);
        assert_close(score_systemic(25.0, 18.0), 0.0);
        assert_close(score_systemic(45.0, 40.0), 100.0);
        assert_close(score_systemic(52.0, 48.0), 100.0);
        assert_close(score_systemic(45.0, 22.0), 55.0);
        assert_close(score_systemic(30.0, 40.0), 45.0);
    }

    #[test]
    fn endometrial_ramp_is_inverted() {
        assert_close(score_endometrial(7.0, 9.5), 0.0);
        assert_close(score_endometrial(12.0, 20.0), 0.0);
        assert_close(score_endometrial(4.0, 3.5), 100.0);
        assert_close(score_endometrial(5.5, 9.5), 30.0);
        assert_close(score_endometrial(9.0, 0.0), 40.0);
    }

    #[test]
    fn embryo_score_has_four_outcomes() {
        assert_close(score_embryo(true, true), 0.0);
        assert_close(score_embryo(true, false), 30.0);
        assert_close(score_embryo(false, true), 70.0);
        assert_close(score_embryo(false, false), 100.0);
    }

    #[test]
    fn global_index_weights_embryo_highest() {
        assert_close(global_index(0.0, 0.0, 100.0), 45.0);
        assert_close(global_index(0.0, 100.0, 0.0), 35.0);
        assert_close(global_index(100.0, 0.0, 0.0), 20.0);
        assert_close(global_index(100.0, 100.0, 100.0), 100.0);
    }

    #[test]
    fn bucket_boundaries_are_closed_below() {
        assert_eq!(bucket(0.0), RiskBucket::Low);
        assert_eq!(bucket(29.999), RiskBucket::Low);
        assert_eq!(bucket(30.0), RiskBucket::Moderate);
        assert_eq!(bucket(59.999), RiskBucket::Moderate);
        assert_eq!(bucket(60.0), RiskBucket::High);
        assert_eq!(bucket(100.0), RiskBucket::High);
        assert_eq!(bucket(f64::NAN), RiskBucket::High);
    }

    #[test]
    fn primary_domain_picks_the_highest_score() {
        assert_eq!(primary_limiting_domain(80.0, 10.0, 30.0), Domain::Systemic);
        assert_eq!(primary_limiting_domain(10.0, 80.0, 30.0), Domain::Endometrium);
        assert_eq!(primary_limiting_domain(10.0, 20.0, 30.0), Domain::Embryo);
    }

    #[test]
    fn primary_domain_ties_follow_scan_order() {
        assert_eq!(primary_limiting_domain(0.0, 0.0, 0.0), Domain::Embryo);
        assert_eq!(primary_limiting_domain(30.0, 30.0, 30.0), Domain::Embryo);
        assert_eq!(primary_limiting_domain(40.0, 40.0, 0.0), Domain::Endometrium);
        assert_eq!(primary_limiting_domain(40.0, 10.0, 40.0), Domain::Embryo);
    }

    #[test]
    fn compute_scores_matches_reference_case() {
        let scores = compute_scores(&ClinicalInputs::default());

        let expected_sbs = 100.0 * (0.55 * (4.0 / 15.0) + 0.45 * (3.0 / 18.0));
        assert_close(scores.sbs, expected_sbs);
        assert_close(scores.eps, 0.0);
        assert_close(scores.egs, 0.0);
        assert_close(scores.gni, 0.20 * expected_sbs);
        assert!((scores.sbs - 22.17).abs() < 0.01);
        assert!((scores.gni - 4.43).abs() < 0.01);
    }

    #[test]
    fn non_finite_measurements_stay_in_range() {
        let inputs = ClinicalInputs {
            age: f64::NAN,
            bmi: f64::INFINITY,
            emt_mm: f64::NEG_INFINITY,
            prog_ng_ml: f64::NAN,
            euploid: false,
            good_grade: false,
        };
        let scores = compute_scores(&inputs);

        assert_close(scores.sbs, 100.0);
        assert_close(scores.eps, 100.0);
        assert_close(scores.gni, 100.0);
    }
}

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use thiserror::Error;

/// Raw clinical measurements for a single evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ClinicalInputs {
    /// Patient age in years.
    pub age: f64,
    pub bmi: f64,
    /// Endometrial thickness in millimetres.
    pub emt_mm: f64,
    /// Serum progesterone around transfer, ng/mL.
    pub prog_ng_ml: f64,
    /// Whether a euploid embryo is available.
    pub euploid: bool,
    pub good_grade: bool,
}

impl Default for ClinicalInputs {
    /// The intake form's starting case.
    fn default() -> Self {
        Self {
            age: 34.0,
            bmi: 25.0,
            emt_mm: 9.0,
            prog_ng_ml: 10.5,
            euploid: true,
            good_grade: true,
        }
    }
}

impl ClinicalInputs {
    pub fn measurement(&self, field: InputField) -> f64 {
        match field {
            InputField::Age => self.age,
            InputField::Bmi => self.bmi,
            InputField::EmtMm => self.emt_mm,
            InputField::ProgNgMl => self.prog_ng_ml,
        }
    }

    /// Checks the measurements against the intake form ranges.
    ///
    /// The scorers accept any `f64` and never call this; it is the gate the
    /// CLI and HTTP surfaces apply before scoring user-supplied values.
    pub fn validate(&self) -> Result<(), InputError> {
        for field in InputField::ordered() {
            let value = self.measurement(field);
            if !value.is_finite() {
                return Err(InputError::NonFinite { field });
            }

            let range = field.accepted_range();
            if !range.contains(&value) {
                return Err(InputError::OutOfRange {
                    field,
                    value,
                    min: *range.start(),
                    max: *range.end(),
                });
            }
        }

        Ok(())
    }
}

/// Numeric fields of [`ClinicalInputs`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputField {
    Age,
    Bmi,
    EmtMm,
    ProgNgMl,
}

impl InputField {
    pub const fn ordered() -> [Self; 4] {
        [Self::Age, Self::Bmi, Self::EmtMm, Self::ProgNgMl]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Age => "age",
            Self::Bmi => "bmi",
            Self::EmtMm => "emt_mm",
            Self::ProgNgMl => "prog_ng_ml",
        }
    }

    pub fn accepted_range(self) -> RangeInclusive<f64> {
        match self {
            Self::Age => 18.0..=55.0,
            Self::Bmi => 15.0..=50.0,
            Self::EmtMm => 3.0..=20.0,
            Self::ProgNgMl => 0.0..=40.0,
        }
    }
}

impl fmt::Display for InputField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum InputError {
    #[error("{field} must be a finite number")]
    NonFinite { field: InputField },
    #[error("{field} {value} is outside the accepted range {min}..={max}")]
    OutOfRange {
        field: InputField,
        value: f64,
        min: f64,
        max: f64,
    },
}

/// Clinical domains scored by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Domain {
    Systemic,
    Endometrium,
    Embryo,
}

impl Domain {
    /// Display order used by score tables.
    pub const fn ordered() -> [Self; 3] {
        [Self::Systemic, Self::Endometrium, Self::Embryo]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Systemic => "Systemic",
            Self::Endometrium => "Endometrium",
            Self::Embryo => "Embryo",
        }
    }

    pub const fn score_code(self) -> &'static str {
        match self {
            Self::Systemic => "SBS",
            Self::Endometrium => "EPS",
            Self::Embryo => "EGS",
        }
    }
}

impl fmt::Display for Domain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Qualitative band for any 0-100 score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RiskBucket {
    Low,
    Moderate,
    High,
}

impl RiskBucket {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Moderate => "Moderate",
            Self::High => "High",
        }
    }
}

impl fmt::Display for RiskBucket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

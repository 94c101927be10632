//! Case description supplied by the caller for a single evaluation.
//!
//! [`CaseInput::new`] is the input boundary: it rejects out-of-domain values with
//! [`FlapError::InvalidInput`] so the engine itself never has to re-validate.

use crate::constants::{MAX_AGE_YEARS, MAX_DIAMETER_CM, MIN_DIAMETER_CM};
use crate::subunit::AnatomicalSubunit;
use crate::{FlapError, FlapResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// How deep the defect violates tissue, ordered by severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DepthCategory {
    /// Skin only.
    Superficial,
    /// Subcutaneous tissue or perichondrium.
    Partial,
    /// Cartilage or bone exposed.
    Full,
}

impl DepthCategory {
    pub const ALL: [DepthCategory; 3] = [Self::Superficial, Self::Partial, Self::Full];

    pub fn label(self) -> &'static str {
        match self {
            Self::Superficial => "Superficial (skin only)",
            Self::Partial => "Partial thickness (subcut / perichondrium)",
            Self::Full => "Full thickness (cartilage / bone exposed)",
        }
    }

    pub fn is_full_thickness(self) -> bool {
        self == Self::Full
    }
}

impl fmt::Display for DepthCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for DepthCategory {
    type Err = FlapError;

    /// Matches on the first word, so both `full` and the full form label parse.
    fn from_str(input: &str) -> FlapResult<Self> {
        let first = input.split_whitespace().next().unwrap_or_default();
        match first.to_ascii_lowercase().as_str() {
            "superficial" => Ok(Self::Superficial),
            "partial" => Ok(Self::Partial),
            "full" => Ok(Self::Full),
            _ => Err(FlapError::InvalidInput(format!(
                "unrecognised depth: {input:?}"
            ))),
        }
    }
}

/// Origin of the defect. Drives note generation only, never the flap choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefectType {
    Oncologic,
    Traumatic,
    Congenital,
}

impl DefectType {
    pub const ALL: [DefectType; 3] = [Self::Oncologic, Self::Traumatic, Self::Congenital];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Oncologic => "Oncologic",
            Self::Traumatic => "Traumatic",
            Self::Congenital => "Congenital",
        }
    }
}

impl fmt::Display for DefectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for DefectType {
    type Err = FlapError;

    fn from_str(input: &str) -> FlapResult<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.as_str().eq_ignore_ascii_case(input.trim()))
            .ok_or_else(|| FlapError::InvalidInput(format!("unrecognised defect type: {input:?}")))
    }
}

/// Patient attributes that shape the notes (and, for hair-bearing skin, the rationale).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct RiskFactors {
    pub hair_bearing: bool,
    pub age: u32,
    pub diabetic: bool,
    pub active_smoker: bool,
    pub previously_irradiated: bool,
}

/// A single defect to reconstruct. Immutable once handed to the engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CaseInput {
    pub subunit: AnatomicalSubunit,
    pub defect_type: DefectType,
    pub diameter_cm: f64,
    pub depth: DepthCategory,
    pub risk: RiskFactors,
}

impl CaseInput {
    /// Builds a validated case.
    ///
    /// # Errors
    ///
    /// Returns [`FlapError::InvalidInput`] if the diameter or age is outside the accepted range
    /// (see [`validate_case`]).
    pub fn new(
        subunit: AnatomicalSubunit,
        defect_type: DefectType,
        diameter_cm: f64,
        depth: DepthCategory,
        risk: RiskFactors,
    ) -> FlapResult<Self> {
        let case = Self {
            subunit,
            defect_type,
            diameter_cm,
            depth,
            risk,
        };
        validate_case(&case)?;
        Ok(case)
    }
}

/// Checks that a case lies inside the declared input domain.
///
/// Deserialised cases bypass [`CaseInput::new`], so outer surfaces call this before handing a
/// case to the engine.
///
/// # Errors
///
/// Returns [`FlapError::InvalidInput`] if:
/// - the diameter is not a finite number in `0.1 ..= 25.0` cm,
/// - the age exceeds 120 years.
pub fn validate_case(case: &CaseInput) -> FlapResult<()> {
    validate_diameter(case.diameter_cm)?;

    if case.risk.age > MAX_AGE_YEARS {
        return Err(FlapError::InvalidInput(format!(
            "age must be at most {MAX_AGE_YEARS} years"
        )));
    }

    Ok(())
}

/// Checks a raw diameter against the accepted range.
///
/// # Errors
///
/// Returns [`FlapError::InvalidInput`] for non-finite values or values outside
/// `0.1 ..= 25.0` cm.
pub fn validate_diameter(diameter_cm: f64) -> FlapResult<()> {
    if !diameter_cm.is_finite() {
        return Err(FlapError::InvalidInput(
            "diameter must be a finite number".into(),
        ));
    }

    if !(MIN_DIAMETER_CM..=MAX_DIAMETER_CM).contains(&diameter_cm) {
        return Err(FlapError::InvalidInput(format!(
            "diameter must be between {MIN_DIAMETER_CM} and {MAX_DIAMETER_CM} cm"
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn risk(age: u32) -> RiskFactors {
        RiskFactors {
            age,
            ..RiskFactors::default()
        }
    }

    #[test]
    fn accepts_case_within_bounds() {
        let case = CaseInput::new(
            AnatomicalSubunit::Scalp,
            DefectType::Oncologic,
            0.1,
            DepthCategory::Superficial,
            risk(60),
        );
        assert!(case.is_ok());
        assert!(validate_diameter(MAX_DIAMETER_CM).is_ok());
    }

    #[test]
    fn rejects_non_positive_diameter() {
        for bad in [0.0, -1.0, 0.05] {
            let err = validate_diameter(bad).expect_err("should reject");
            assert!(matches!(err, FlapError::InvalidInput(msg) if msg.contains("between")));
        }
    }

    #[test]
    fn rejects_non_finite_diameter() {
        let err = validate_diameter(f64::NAN).expect_err("should reject NaN");
        assert!(matches!(err, FlapError::InvalidInput(msg) if msg.contains("finite")));
        assert!(validate_diameter(f64::INFINITY).is_err());
    }

    #[test]
    fn rejects_oversized_diameter() {
        assert!(validate_diameter(25.1).is_err());
    }

    #[test]
    fn rejects_implausible_age() {
        let err = CaseInput::new(
            AnatomicalSubunit::Temple,
            DefectType::Traumatic,
            1.0,
            DepthCategory::Partial,
            risk(121),
        )
        .expect_err("should reject age");
        assert!(matches!(err, FlapError::InvalidInput(msg) if msg.contains("age")));
    }

    #[test]
    fn depth_parses_short_names_and_form_labels() {
        assert_eq!(
            "full".parse::<DepthCategory>().unwrap(),
            DepthCategory::Full
        );
        for depth in DepthCategory::ALL {
            assert_eq!(depth.label().parse::<DepthCategory>().unwrap(), depth);
        }
        assert!("deep".parse::<DepthCategory>().is_err());
        assert!("".parse::<DepthCategory>().is_err());
    }

    #[test]
    fn depth_is_ordered_by_severity() {
        assert!(DepthCategory::Superficial < DepthCategory::Partial);
        assert!(DepthCategory::Partial < DepthCategory::Full);
    }

    #[test]
    fn defect_type_parses_case_insensitively() {
        assert_eq!(
            "congenital".parse::<DefectType>().unwrap(),
            DefectType::Congenital
        );
        let err = "Infective".parse::<DefectType>().expect_err("should reject");
        assert!(matches!(err, FlapError::InvalidInput(_)));
    }
}

//! Size classification.
//!
//! Converts a measured diameter into an ordinal [`SizeCategory`] using per-subunit
//! centimetre cutoffs. Each band is closed on its upper edge: a diameter exactly equal to
//! `low` is small and one exactly equal to `mid` is medium.

use crate::subunit::AnatomicalSubunit;
use crate::{FlapError, FlapResult};
use serde::{Deserialize, Serialize};
use std::fmt;

use AnatomicalSubunit as A;

/// Ordinal size band of a defect relative to its subunit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SizeCategory {
    Small,
    Medium,
    Large,
}

impl SizeCategory {
    pub const ALL: [SizeCategory; 3] = [Self::Small, Self::Medium, Self::Large];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        }
    }
}

impl fmt::Display for SizeCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Centimetre cutoffs `(low, mid)` for one subunit. Invariant: `0 < low < mid`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SizeThreshold {
    pub low: f64,
    pub mid: f64,
}

impl SizeThreshold {
    const fn new(low: f64, mid: f64) -> Self {
        Self { low, mid }
    }

    pub fn categorise(&self, diameter_cm: f64) -> SizeCategory {
        if diameter_cm <= self.low {
            SizeCategory::Small
        } else if diameter_cm <= self.mid {
            SizeCategory::Medium
        } else {
            SizeCategory::Large
        }
    }
}

/// Per-subunit size cutoffs. Must cover the whole subunit catalog.
pub static THRESHOLDS: [(AnatomicalSubunit, SizeThreshold); 24] = [
    (A::Scalp, SizeThreshold::new(2.0, 6.0)),
    (A::ForeheadCentral, SizeThreshold::new(1.5, 5.0)),
    (A::ForeheadLateral, SizeThreshold::new(1.5, 4.0)),
    (A::Temple, SizeThreshold::new(1.5, 4.0)),
    (A::ZygomaticArch, SizeThreshold::new(2.0, 4.0)),
    (A::NasalTip, SizeThreshold::new(0.5, 1.5)),
    (A::NasalDorsum, SizeThreshold::new(1.0, 1.5)),
    (A::NasalAlaSideWall, SizeThreshold::new(1.0, 1.5)),
    (A::UpperEyelid, SizeThreshold::new(1.0, 1.5)),
    (A::LowerEyelid, SizeThreshold::new(1.0, 1.5)),
    (A::MedialCanthus, SizeThreshold::new(1.0, 1.5)),
    (A::LateralCanthus, SizeThreshold::new(1.0, 1.5)),
    (A::UpperLipCentral, SizeThreshold::new(0.8, 1.6)),
    (A::UpperLipLateral, SizeThreshold::new(0.8, 1.6)),
    (A::LowerLipCentral, SizeThreshold::new(1.0, 2.0)),
    (A::LowerLipLateral, SizeThreshold::new(1.0, 2.0)),
    (A::OralCommissure, SizeThreshold::new(1.0, 1.5)),
    (A::CheekInfraOrbital, SizeThreshold::new(1.5, 3.0)),
    (A::CheekBuccal, SizeThreshold::new(2.0, 4.0)),
    (A::ChinMentum, SizeThreshold::new(1.5, 3.0)),
    (A::EarHelicalRim, SizeThreshold::new(1.0, 1.5)),
    (A::EarConchalBowl, SizeThreshold::new(1.5, 2.5)),
    (A::EarLobule, SizeThreshold::new(1.0, 1.5)),
    (A::PeriAuricularSkin, SizeThreshold::new(2.0, 4.0)),
];

/// Looks up the cutoffs for `subunit`.
///
/// # Errors
///
/// Returns [`FlapError::UnknownSubunit`] if the threshold table has no entry for the subunit.
pub fn threshold_for(subunit: AnatomicalSubunit) -> FlapResult<SizeThreshold> {
    THRESHOLDS
        .iter()
        .find(|(s, _)| *s == subunit)
        .map(|(_, t)| *t)
        .ok_or(FlapError::UnknownSubunit(subunit))
}

/// Classifies a defect diameter for the given subunit.
///
/// The diameter is expected to be positive; range checks happen at the input boundary.
///
/// # Errors
///
/// Returns [`FlapError::UnknownSubunit`] if the threshold table has no entry for the subunit.
pub fn classify(subunit: AnatomicalSubunit, diameter_cm: f64) -> FlapResult<SizeCategory> {
    Ok(threshold_for(subunit)?.categorise(diameter_cm))
}

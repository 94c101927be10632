//! The fixed catalog of head-and-neck anatomical subunits.
//!
//! Every subunit has a static [`SubunitDescriptor`] holding its display label, a stable
//! snake_case identifier used on the wire, and (for the four lip subunits) an explicit
//! [`LipZone`]. The zone is carried as data so that rule selection never needs to inspect the
//! label text.
//!
//! The catalog is closed: subunits are never created or destroyed at runtime, and the
//! threshold and rule tables are keyed by [`AnatomicalSubunit`].

use crate::{FlapError, FlapResult};
use std::fmt;
use std::str::FromStr;

use AnatomicalSubunit as A;

/// One of the 24 named head-and-neck regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AnatomicalSubunit {
    Scalp,
    ForeheadCentral,
    ForeheadLateral,
    Temple,
    ZygomaticArch,
    NasalTip,
    NasalDorsum,
    NasalAlaSideWall,
    UpperEyelid,
    LowerEyelid,
    MedialCanthus,
    LateralCanthus,
    UpperLipCentral,
    UpperLipLateral,
    LowerLipCentral,
    LowerLipLateral,
    OralCommissure,
    CheekInfraOrbital,
    CheekBuccal,
    ChinMentum,
    EarHelicalRim,
    EarConchalBowl,
    EarLobule,
    PeriAuricularSkin,
}

/// Horizontal zone of a lip subunit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LipZone {
    Central,
    Lateral,
}

/// Static description of a subunit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubunitDescriptor {
    pub subunit: AnatomicalSubunit,
    /// Human-readable label, exactly as presented to clinicians.
    pub label: &'static str,
    /// Stable identifier used in JSON and on the command line.
    pub id: &'static str,
    /// Lip zone; `None` for every non-lip subunit.
    pub zone: Option<LipZone>,
}

const fn descriptor(
    subunit: AnatomicalSubunit,
    label: &'static str,
    id: &'static str,
    zone: Option<LipZone>,
) -> SubunitDescriptor {
    SubunitDescriptor {
        subunit,
        label,
        id,
        zone,
    }
}

/// The catalog in presentation order.
pub static CATALOG: [SubunitDescriptor; 24] = [
    descriptor(A::Scalp, "Scalp", "scalp", None),
    descriptor(A::ForeheadCentral, "Forehead – central", "forehead_central", None),
    descriptor(A::ForeheadLateral, "Forehead – lateral", "forehead_lateral", None),
    descriptor(A::Temple, "Temple", "temple", None),
    descriptor(
        A::ZygomaticArch,
        "Zygomatic-arch (temporal-malar)",
        "zygomatic_arch",
        None,
    ),
    descriptor(A::NasalTip, "Nasal tip", "nasal_tip", None),
    descriptor(A::NasalDorsum, "Nasal dorsum", "nasal_dorsum", None),
    descriptor(
        A::NasalAlaSideWall,
        "Nasal ala / side-wall",
        "nasal_ala_side_wall",
        None,
    ),
    descriptor(A::UpperEyelid, "Upper eyelid", "upper_eyelid", None),
    descriptor(A::LowerEyelid, "Lower eyelid", "lower_eyelid", None),
    descriptor(A::MedialCanthus, "Medial canthus", "medial_canthus", None),
    descriptor(A::LateralCanthus, "Lateral canthus", "lateral_canthus", None),
    descriptor(
        A::UpperLipCentral,
        "Upper lip – central",
        "upper_lip_central",
        Some(LipZone::Central),
    ),
    descriptor(
        A::UpperLipLateral,
        "Upper lip – lateral",
        "upper_lip_lateral",
        Some(LipZone::Lateral),
    ),
    descriptor(
        A::LowerLipCentral,
        "Lower lip – central",
        "lower_lip_central",
        Some(LipZone::Central),
    ),
    descriptor(
        A::LowerLipLateral,
        "Lower lip – lateral",
        "lower_lip_lateral",
        Some(LipZone::Lateral),
    ),
    descriptor(A::OralCommissure, "Oral commissure", "oral_commissure", None),
    descriptor(
        A::CheekInfraOrbital,
        "Cheek – infra-orbital",
        "cheek_infra_orbital",
        None,
    ),
    descriptor(A::CheekBuccal, "Cheek – buccal", "cheek_buccal", None),
    descriptor(A::ChinMentum, "Chin – mentum", "chin_mentum", None),
    descriptor(A::EarHelicalRim, "Ear – helical rim", "ear_helical_rim", None),
    descriptor(A::EarConchalBowl, "Ear – conchal bowl", "ear_conchal_bowl", None),
    descriptor(A::EarLobule, "Ear – lobule", "ear_lobule", None),
    descriptor(
        A::PeriAuricularSkin,
        "Peri-auricular skin",
        "peri_auricular_skin",
        None,
    ),
];

impl AnatomicalSubunit {
    /// Every subunit, in catalog order.
    pub fn all() -> impl Iterator<Item = AnatomicalSubunit> {
        CATALOG.iter().map(|d| d.subunit)
    }

    /// Returns the static descriptor for this subunit.
    ///
    /// The catalog is indexed by declaration order, which `catalog_order_matches_declaration`
    /// in the tests pins down.
    pub fn descriptor(self) -> &'static SubunitDescriptor {
        &CATALOG[self as usize]
    }

    pub fn label(self) -> &'static str {
        self.descriptor().label
    }

    pub fn id(self) -> &'static str {
        self.descriptor().id
    }

    pub fn zone(self) -> Option<LipZone> {
        self.descriptor().zone
    }
}

impl fmt::Display for AnatomicalSubunit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AnatomicalSubunit {
    type Err = FlapError;

    /// Accepts either the snake_case identifier or the exact display label.
    fn from_str(input: &str) -> FlapResult<Self> {
        let input = input.trim();
        CATALOG
            .iter()
            .find(|d| d.id == input || d.label == input)
            .map(|d| d.subunit)
            .ok_or_else(|| FlapError::InvalidInput(format!("unrecognised subunit: {input:?}")))
    }
}

impl serde::Serialize for AnatomicalSubunit {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.id())
    }
}

impl<'de> serde::Deserialize<'de> for AnatomicalSubunit {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

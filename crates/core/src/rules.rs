//! Per-subunit reconstruction rule table.
//!
//! Each subunit maps to a [`SubunitRule`]: a small decision tree over depth and size (and, for
//! the lips, zone) whose leaves are `(flap, rationale)` pairs. Trees come in three shapes:
//!
//! - [`RuleShape::SizeOnly`]: three-way size choice, depth does not change the procedure.
//! - [`RuleShape::DepthGated`]: full-thickness defects take their own size choice, everything
//!   shallower takes another.
//! - [`RuleShape::ZoneRefined`]: the lip zone picks the size choice, with an optional special
//!   case for small superficial defects.
//!
//! A rule may also carry [`RationaleClause`]s that are appended to the leaf rationale after
//! selection; they never change the flap.

use crate::case::{CaseInput, DepthCategory};
use crate::constants::GRAFT_MARKER;
use crate::size::SizeCategory;
use crate::subunit::{AnatomicalSubunit, LipZone};
use crate::{FlapError, FlapResult};

use AnatomicalSubunit as A;

/// One leaf of a decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Leaf {
    pub flap: &'static str,
    pub rationale: &'static str,
}

const fn leaf(flap: &'static str, rationale: &'static str) -> Leaf {
    Leaf { flap, rationale }
}

/// Three-way choice by size category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SizeChoice {
    pub small: Leaf,
    pub medium: Leaf,
    pub large: Leaf,
}

const fn by_size(small: Leaf, medium: Leaf, large: Leaf) -> SizeChoice {
    SizeChoice {
        small,
        medium,
        large,
    }
}

/// Same leaf whatever the size.
const fn fixed(only: Leaf) -> SizeChoice {
    by_size(only, only, only)
}

impl SizeChoice {
    pub fn pick(&self, size: SizeCategory) -> Leaf {
        match size {
            SizeCategory::Small => self.small,
            SizeCategory::Medium => self.medium,
            SizeCategory::Large => self.large,
        }
    }

    pub fn leaves(&self) -> [Leaf; 3] {
        [self.small, self.medium, self.large]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleShape {
    SizeOnly(SizeChoice),
    DepthGated {
        full: SizeChoice,
        other: SizeChoice,
    },
    ZoneRefined {
        /// Overrides both zones when the defect is small and superficial.
        superficial_small: Option<Leaf>,
        central: SizeChoice,
        lateral: SizeChoice,
    },
}

/// Condition under which a [`RationaleClause`] is appended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClauseTrigger {
    /// Hair-bearing skin and a flap whose name mentions a graft.
    HairBearingGraft,
    /// Any full-thickness defect.
    FullThickness,
    /// Full-thickness defect that is not small.
    FullThicknessBeyondSmall,
}

impl ClauseTrigger {
    pub fn fires(self, case: &CaseInput, size: SizeCategory, flap: &str) -> bool {
        match self {
            Self::HairBearingGraft => case.risk.hair_bearing && mentions_graft(flap),
            Self::FullThickness => case.depth.is_full_thickness(),
            Self::FullThicknessBeyondSmall => {
                case.depth.is_full_thickness() && size != SizeCategory::Small
            }
        }
    }
}

/// Fixed text appended verbatim (including its leading whitespace) to a rationale.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RationaleClause {
    pub trigger: ClauseTrigger,
    pub text: &'static str,
}

const HAIR_GRAFT_CLAUSE: RationaleClause = RationaleClause {
    trigger: ClauseTrigger::HairBearingGraft,
    text: " Flap preserves hair-bearing skin; graft would alopecise.",
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubunitRule {
    pub subunit: AnatomicalSubunit,
    pub shape: RuleShape,
    pub clauses: &'static [RationaleClause],
}

impl SubunitRule {
    /// Selects the leaf for a depth/size combination.
    ///
    /// # Errors
    ///
    /// Returns [`FlapError::UnknownSubunit`] if a zone-refined rule is attached to a subunit
    /// whose descriptor carries no lip zone.
    pub fn select(&self, depth: DepthCategory, size: SizeCategory) -> FlapResult<Leaf> {
        match &self.shape {
            RuleShape::SizeOnly(choice) => Ok(choice.pick(size)),
            RuleShape::DepthGated { full, other } => {
                if depth.is_full_thickness() {
                    Ok(full.pick(size))
                } else {
                    Ok(other.pick(size))
                }
            }
            RuleShape::ZoneRefined {
                superficial_small,
                central,
                lateral,
            } => {
                if let Some(special) = superficial_small {
                    if depth == DepthCategory::Superficial && size == SizeCategory::Small {
                        return Ok(*special);
                    }
                }
                match self.subunit.zone() {
                    Some(LipZone::Central) => Ok(central.pick(size)),
                    Some(LipZone::Lateral) => Ok(lateral.pick(size)),
                    None => Err(FlapError::UnknownSubunit(self.subunit)),
                }
            }
        }
    }

    /// Every leaf reachable from this rule.
    pub fn leaves(&self) -> Vec<Leaf> {
        match &self.shape {
            RuleShape::SizeOnly(choice) => choice.leaves().to_vec(),
            RuleShape::DepthGated { full, other } => {
                full.leaves().into_iter().chain(other.leaves()).collect()
            }
            RuleShape::ZoneRefined {
                superficial_small,
                central,
                lateral,
            } => superficial_small
                .iter()
                .copied()
                .chain(central.leaves())
                .chain(lateral.leaves())
                .collect(),
        }
    }
}

/// Case-insensitive test for the graft marker in a flap name.
pub fn mentions_graft(flap: &str) -> bool {
    flap.to_lowercase().contains(GRAFT_MARKER)
}

const fn size_only(subunit: AnatomicalSubunit, choice: SizeChoice) -> SubunitRule {
    SubunitRule {
        subunit,
        shape: RuleShape::SizeOnly(choice),
        clauses: &[],
    }
}

const fn depth_gated(
    subunit: AnatomicalSubunit,
    full: SizeChoice,
    other: SizeChoice,
) -> SubunitRule {
    SubunitRule {
        subunit,
        shape: RuleShape::DepthGated { full, other },
        clauses: &[],
    }
}

const fn zone_refined(
    subunit: AnatomicalSubunit,
    superficial_small: Option<Leaf>,
    central: SizeChoice,
    lateral: SizeChoice,
) -> SubunitRule {
    SubunitRule {
        subunit,
        shape: RuleShape::ZoneRefined {
            superficial_small,
            central,
            lateral,
        },
        clauses: &[],
    }
}

const fn with_clauses(rule: SubunitRule, clauses: &'static [RationaleClause]) -> SubunitRule {
    SubunitRule {
        subunit: rule.subunit,
        shape: rule.shape,
        clauses,
    }
}

// ----------------------------------------------------------------------------
// Shared branches
// ----------------------------------------------------------------------------

const ORTICOCHEA: Leaf = leaf(
    "Ortícochea four-flap rotation",
    "≤6 cm full-depth closed with opposing galeal rotations.",
);

const UPPER_LIP_SUPERFICIAL_SMALL: Leaf = leaf(
    "V-Y vermilion advancement",
    "Tiny vermilion excision advanced mucosa.",
);

const UPPER_LIP_CENTRAL: SizeChoice = by_size(
    leaf("Full-thickness wedge closure", "≤0.8 cm (<30 %) wedge."),
    leaf(
        "Abbé cross-lip flap",
        "30-60 % central: staged Abbé cross-lip.",
    ),
    leaf("Karapandzic bilateral rotation", ">60 %: bilateral Karapandzic."),
);

const UPPER_LIP_LATERAL: SizeChoice = by_size(
    leaf("Full-thickness wedge closure", "<30 % lateral wedge."),
    leaf("Estlander flap", "30-50 % lateral/commissure Estlander."),
    leaf("Bernard-Burow advancement", ">50 % cheek advancement."),
);

const LOWER_LIP_CENTRAL: SizeChoice = by_size(
    leaf("Full-thickness wedge closure", "<30 % wedge."),
    leaf("Karapandzic rotation flap", "30-60 % central Karapandzic."),
    leaf("Bernard-Webster bilateral advancement", ">60 % Bernard-Webster."),
);

const LOWER_LIP_LATERAL: SizeChoice = by_size(
    leaf("Full-thickness wedge closure", "<30 % lateral wedge."),
    leaf("Estlander flap", "30-50 % Estlander."),
    leaf(
        "Extended Karapandzic / Burow",
        ">50 % extended circumoral rotation.",
    ),
);

// ----------------------------------------------------------------------------
// The table
// ----------------------------------------------------------------------------

/// One rule per subunit, in catalog order.
pub static RULE_TABLE: [SubunitRule; 24] = [
    // Scalp
    with_clauses(
        depth_gated(
            A::Scalp,
            by_size(
                ORTICOCHEA,
                ORTICOCHEA,
                leaf(
                    "Latissimus-dorsi free flap + STSG",
                    "Massive bare skull requires vascular muscle then graft.",
                ),
            ),
            by_size(
                leaf(
                    "Linear primary closure ± galeal scoring",
                    "≤2 cm superficial scalp closed after undermining.",
                ),
                leaf(
                    "O-Z rotation flap",
                    "2-6 cm superficial scalp defects via semicircular rotation.",
                ),
                leaf(
                    "Ortícochea four-flap rotation",
                    ">6 cm superficial needs four opposing rotations.",
                ),
            ),
        ),
        &[HAIR_GRAFT_CLAUSE],
    ),
    // Forehead, temple and zygoma
    depth_gated(
        A::ForeheadCentral,
        fixed(leaf(
            "Temporalis fascia turnover + frontal skin rotation",
            "Fascia vascularises bone, rotated skin closes.",
        )),
        by_size(
            leaf(
                "Direct closure in horizontal rhytid",
                "Short scar hidden in forehead line.",
            ),
            leaf(
                "H-plasty bilateral advancement",
                "Advances both sides (1.5-5 cm).",
            ),
            leaf(
                "Parietal-forehead rotation flap",
                "Large defect recruits parietal scalp.",
            ),
        ),
    ),
    depth_gated(
        A::ForeheadLateral,
        fixed(leaf(
            "Temporoparietal fascia flap + STSG",
            "TP fascia on bone then skin graft.",
        )),
        by_size(
            leaf(
                "Mini A-T advancement flap",
                "Triangle-to-T hides scar at hairline.",
            ),
            leaf(
                "Temporal-scalp rotation flap",
                "Rotated hair-bearing scalp covers 1.5-4 cm.",
            ),
            leaf(
                "Extended cervicofacial rotation",
                ">4 cm needs cheek/neck recruitment.",
            ),
        ),
    ),
    depth_gated(
        A::Temple,
        fixed(leaf(
            "Temporalis-fascia flap + STSG",
            "Vascular fascia over bone/joint.",
        )),
        by_size(
            leaf(
                "Limberg rhomboid flap",
                "Rhomboid in crow’s-feet lines ≤1.5 cm.",
            ),
            leaf(
                "Mustardé cheek rotation flap",
                "2-4 cm uses Mustardé upward rotation.",
            ),
            leaf("Cervicofacial rotation flap", ">4 cm full cervicofacial."),
        ),
    ),
    depth_gated(
        A::ZygomaticArch,
        fixed(leaf(
            "Mustardé cheek rotation flap",
            "Robust cheek rotation covers arch.",
        )),
        by_size(
            leaf("Rhomboid transposition flap", "≤2 cm rhomboid along RSTL."),
            leaf("Mustardé cheek rotation flap", "2-4 cm rotated cheek skin."),
            leaf(
                "Cervicofacial rotation flap",
                ">4 cm needs full cervicofacial flap.",
            ),
        ),
    ),
    // Nose
    depth_gated(
        A::NasalTip,
        fixed(leaf(
            "Paramedian forehead flap + septal cartilage graft",
            "2-stage skin + support for full-depth tip.",
        )),
        by_size(
            leaf(
                "Secondary intention / tiny FTSG",
                "<5 mm granulates or small graft.",
            ),
            leaf("Bilobed flap", "Bilobed uses upper-dorsum skin."),
            leaf("Paramedian forehead flap", ">1.5 cm exceeds nasal reserve."),
        ),
    ),
    depth_gated(
        A::NasalDorsum,
        fixed(leaf(
            "Paramedian forehead flap",
            "Full-depth dorsal defect needs forehead skin & lining.",
        )),
        by_size(
            leaf("Rieger dorsal-nasal flap", "≤1 cm short transposition."),
            leaf("Glabellar rotation flap", "1-1.5 cm glabellar rotation."),
            leaf("Paramedian forehead flap", ">1.5 cm forehead flap."),
        ),
    ),
    depth_gated(
        A::NasalAlaSideWall,
        fixed(leaf(
            "Nasolabial interpolation flap + conchal cartilage",
            "Staged cheek skin + cartilage maintain airway.",
        )),
        by_size(
            leaf("Inferior bilobed flap", "<1 cm ala gap bilobed."),
            leaf(
                "Nasolabial interpolation flap",
                "1-1.5 cm staged nasolabial.",
            ),
            leaf(
                "Paramedian forehead flap",
                ">1.5 cm requires forehead flap.",
            ),
        ),
    ),
    // Eyelids and canthi
    depth_gated(
        A::UpperEyelid,
        by_size(
            leaf(
                "Tenzel semicircular flap",
                "25-50 % full-thickness closed by Tenzel lateral rotation.",
            ),
            leaf(
                "Tenzel semicircular flap",
                "25-50 % full-thickness closed by Tenzel lateral rotation.",
            ),
            leaf(
                "Cutler-Beard bridge flap",
                "Full-thickness >50 % upper-lid via 2-stage Cutler-Beard.",
            ),
        ),
        by_size(
            leaf(
                "Direct closure in lid crease",
                "<1 cm skin closed in natural crease.",
            ),
            leaf(
                "Blepharoplasty skin-advancement",
                "1-1.5 cm advanced redundant lid skin.",
            ),
            leaf(
                "Tenzel semicircular flap",
                ">1.5 cm superficial uses Tenzel flap.",
            ),
        ),
    ),
    depth_gated(
        A::LowerEyelid,
        by_size(
            leaf(
                "Tenzel semicircular flap",
                "25-50 % full-thickness uses Tenzel semicircular.",
            ),
            leaf(
                "Tenzel semicircular flap",
                "25-50 % full-thickness uses Tenzel semicircular.",
            ),
            leaf(
                "Hughes tarsoconjunctival flap + STSG",
                ">50 % full-thickness lower-lid with Hughes posterior lamella + skin graft.",
            ),
        ),
        by_size(
            leaf("Direct closure", "≤1 cm linear closure."),
            leaf(
                "Full-thickness skin graft",
                "1-1.5 cm graft from post-auricular.",
            ),
            leaf(
                "Tenzel semicircular flap",
                ">1.5 cm superficial uses Tenzel.",
            ),
        ),
    ),
    depth_gated(
        A::MedialCanthus,
        fixed(leaf(
            "Paramedian (glabellar) forehead interpolation flap",
            "Deep/large medial canthus needs staged glabellar skin.",
        )),
        by_size(
            leaf("Full-thickness skin graft", "<1 cm grafted with thin skin."),
            leaf(
                "Glabellar V-Y (Rintala) flap",
                "1-1.5 cm V-Y glabellar transposition.",
            ),
            leaf(
                "Paramedian (glabellar) forehead interpolation flap",
                "Deep/large medial canthus needs staged glabellar skin.",
            ),
        ),
    ),
    size_only(
        A::LateralCanthus,
        by_size(
            leaf("Direct primary closure", "≤1 cm closed after cantholysis."),
            leaf(
                "Tenzel semicircular flap",
                "25-50 % lateral defect uses Tenzel.",
            ),
            leaf(
                "Mustardé cheek rotation flap",
                ">1.5 cm needs Mustardé cheek rotation.",
            ),
        ),
    ),
    // Lips and commissure
    zone_refined(
        A::UpperLipCentral,
        Some(UPPER_LIP_SUPERFICIAL_SMALL),
        UPPER_LIP_CENTRAL,
        UPPER_LIP_LATERAL,
    ),
    zone_refined(
        A::UpperLipLateral,
        Some(UPPER_LIP_SUPERFICIAL_SMALL),
        UPPER_LIP_CENTRAL,
        UPPER_LIP_LATERAL,
    ),
    zone_refined(
        A::LowerLipCentral,
        None,
        LOWER_LIP_CENTRAL,
        LOWER_LIP_LATERAL,
    ),
    zone_refined(
        A::LowerLipLateral,
        None,
        LOWER_LIP_CENTRAL,
        LOWER_LIP_LATERAL,
    ),
    depth_gated(
        A::OralCommissure,
        fixed(leaf(
            "Free radial-forearm commissuroplasty flap",
            "Near-total commissure reconstructed microsurgically.",
        )),
        by_size(
            leaf(
                "Commissuroplasty triangular flap",
                "<1 cm triangular mucocutaneous realignment.",
            ),
            leaf(
                "Estlander cross-lip flap",
                "1-1.5 cm lateral loss Estlander flap.",
            ),
            leaf(
                "Free radial-forearm commissuroplasty flap",
                "Near-total commissure reconstructed microsurgically.",
            ),
        ),
    ),
    // Cheek and chin
    size_only(
        A::CheekInfraOrbital,
        by_size(
            leaf("Malar V-Y advancement", "≤1.5 cm V-Y under eyelid."),
            leaf(
                "Mustardé cheek rotation",
                "1.5-3 cm Mustardé malar rotation.",
            ),
            leaf("Cervicofacial rotation", ">3 cm cervicofacial flap."),
        ),
    ),
    depth_gated(
        A::CheekBuccal,
        fixed(leaf(
            "Cervicofacial rotation flap",
            "Deep buccal loss best with large rotation.",
        )),
        by_size(
            leaf("Limberg rhomboid flap", "≤2 cm rhomboid along smile lines."),
            leaf("V-Y cheek advancement", "2-4 cm V-Y advancement."),
            leaf("Cervicofacial rotation", ">4 cm cervicofacial flap."),
        ),
    ),
    depth_gated(
        A::ChinMentum,
        fixed(leaf(
            "Submental island flap",
            "Full-thickness chin needs pedicled submental.",
        )),
        by_size(
            leaf(
                "H-plasty bilateral advancement",
                "≤1.5 cm bilateral advancement under chin.",
            ),
            leaf(
                "Submental advancement flap",
                "1.5-3 cm submental laxity advanced.",
            ),
            leaf(
                "Extended cervicofacial rotation",
                ">3 cm cheek-neck rotation.",
            ),
        ),
    ),
    // Ear and peri-auricular
    with_clauses(
        size_only(
            A::EarHelicalRim,
            by_size(
                leaf(
                    "V-wedge chondro-cutaneous closure",
                    "Short segment closed wedge.",
                ),
                leaf("Antia-Buch advancement flap", "1-1.5 cm rim advanced."),
                leaf(
                    "Posterior-auricular tubed flap",
                    ">1.5 cm staged tubed flap.",
                ),
            ),
        ),
        &[
            RationaleClause {
                trigger: ClauseTrigger::FullThicknessBeyondSmall,
                text: "  Conchal cartilage graft supports rim.",
            },
            HAIR_GRAFT_CLAUSE,
        ],
    ),
    size_only(
        A::EarConchalBowl,
        by_size(
            leaf(
                "Post-auricular full-thickness skin graft",
                "Thin FTSG matches concavity.",
            ),
            leaf("Revolving-door island flap", "Island flap swings into bowl."),
            leaf(
                "Two-stage posterior-auricular flap",
                ">2.5 cm requires staged flap.",
            ),
        ),
    ),
    size_only(
        A::EarLobule,
        by_size(
            leaf("Direct wedge closure", "Tiny gap approximated."),
            leaf("Gavello V-Y advancement", "V-Y slides inferior lobule."),
            leaf(
                "Bilobed lobule rotation + composite graft",
                ">1.5 cm rotation + graft restore bulk.",
            ),
        ),
    ),
    with_clauses(
        size_only(
            A::PeriAuricularSkin,
            by_size(
                leaf("Direct sulcus closure", "≤2 cm scar hides behind ear."),
                leaf("Retro-auricular rotation flap", "2-4 cm mastoid rotation."),
                leaf("Cervicofacial rotation flap", ">4 cm extended cervicofacial."),
            ),
        ),
        &[RationaleClause {
            trigger: ClauseTrigger::FullThickness,
            text: "  Parotid fascia exposed – SMAS turned in.",
        }],
    ),
];

/// Looks up the rule for `subunit`.
///
/// # Errors
///
/// Returns [`FlapError::UnknownSubunit`] if the rule table has no entry for the subunit.
pub fn rule_for(subunit: AnatomicalSubunit) -> FlapResult<&'static SubunitRule> {
    RULE_TABLE
        .iter()
        .find(|rule| rule.subunit == subunit)
        .ok_or(FlapError::UnknownSubunit(subunit))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_subunit_has_exactly_one_rule() {
        for subunit in AnatomicalSubunit::all() {
            let count = RULE_TABLE.iter().filter(|r| r.subunit == subunit).count();
            assert_eq!(count, 1, "{subunit}");
        }
    }

    #[test]
    fn rule_table_follows_catalog_order() {
        let table: Vec<_> = RULE_TABLE.iter().map(|r| r.subunit).collect();
        let catalog: Vec<_> = AnatomicalSubunit::all().collect();
        assert_eq!(table, catalog);
    }

    #[test]
    fn no_leaf_is_empty() {
        for rule in RULE_TABLE.iter() {
            for leaf in rule.leaves() {
                assert!(!leaf.flap.trim().is_empty(), "{}", rule.subunit);
                assert!(!leaf.rationale.trim().is_empty(), "{}", rule.subunit);
            }
        }
    }

    #[test]
    fn zone_refined_rules_only_on_zoned_subunits() {
        for rule in RULE_TABLE.iter() {
            if matches!(rule.shape, RuleShape::ZoneRefined { .. }) {
                assert!(rule.subunit.zone().is_some(), "{}", rule.subunit);
            }
        }
    }

    #[test]
    fn every_combination_selects_a_leaf() {
        for rule in RULE_TABLE.iter() {
            for depth in DepthCategory::ALL {
                for size in SizeCategory::ALL {
                    assert!(rule.select(depth, size).is_ok(), "{}", rule.subunit);
                }
            }
        }
    }

    #[test]
    fn lip_zone_selects_the_branch() {
        let central = rule_for(A::UpperLipCentral).unwrap();
        let lateral = rule_for(A::UpperLipLateral).unwrap();
        let medium = SizeCategory::Medium;

        assert_eq!(
            central.select(DepthCategory::Partial, medium).unwrap().flap,
            "Abbé cross-lip flap"
        );
        assert_eq!(
            lateral.select(DepthCategory::Partial, medium).unwrap().flap,
            "Estlander flap"
        );
    }

    #[test]
    fn upper_lip_small_superficial_overrides_zone() {
        for subunit in [A::UpperLipCentral, A::UpperLipLateral] {
            let leaf = rule_for(subunit)
                .unwrap()
                .select(DepthCategory::Superficial, SizeCategory::Small)
                .unwrap();
            assert_eq!(leaf.flap, "V-Y vermilion advancement");
        }
        let leaf = rule_for(A::UpperLipCentral)
            .unwrap()
            .select(DepthCategory::Partial, SizeCategory::Small)
            .unwrap();
        assert_eq!(leaf.flap, "Full-thickness wedge closure");
    }

    #[test]
    fn lower_lip_ignores_depth() {
        let rule = rule_for(A::LowerLipLateral).unwrap();
        for size in SizeCategory::ALL {
            let shallow = rule.select(DepthCategory::Superficial, size).unwrap();
            let deep = rule.select(DepthCategory::Full, size).unwrap();
            assert_eq!(shallow, deep);
        }
    }

    #[test]
    fn medial_canthus_full_thickness_or_large_goes_to_forehead() {
        let rule = rule_for(A::MedialCanthus).unwrap();
        let expected = "Paramedian (glabellar) forehead interpolation flap";
        assert_eq!(
            rule.select(DepthCategory::Full, SizeCategory::Small)
                .unwrap()
                .flap,
            expected
        );
        assert_eq!(
            rule.select(DepthCategory::Superficial, SizeCategory::Large)
                .unwrap()
                .flap,
            expected
        );
        assert_eq!(
            rule.select(DepthCategory::Partial, SizeCategory::Small)
                .unwrap()
                .flap,
            "Full-thickness skin graft"
        );
    }

    #[test]
    fn zone_refined_rule_without_zone_is_an_integrity_fault() {
        let broken = zone_refined(A::Scalp, None, LOWER_LIP_CENTRAL, LOWER_LIP_LATERAL);
        let err = broken
            .select(DepthCategory::Partial, SizeCategory::Medium)
            .expect_err("scalp has no lip zone");
        assert!(matches!(err, FlapError::UnknownSubunit(A::Scalp)));
    }

    #[test]
    fn graft_marker_is_case_insensitive() {
        assert!(mentions_graft("Full-thickness skin graft"));
        assert!(mentions_graft("Bilobed lobule rotation + composite GRAFT"));
        assert!(!mentions_graft("Latissimus-dorsi free flap + STSG"));
    }
}

//! Risk and context notes attached to every recommendation.
//!
//! Notes come from an ordered list of independent rules. Each rule sees the full case and the
//! chosen flap name and contributes at most one note; the output preserves rule order.

use crate::case::{CaseInput, DefectType};
use crate::constants::{ELDERLY_AGE_LIMIT, PAEDIATRIC_AGE_LIMIT};
use crate::rules::mentions_graft;

/// A named predicate that may produce one note.
#[derive(Clone, Copy)]
pub struct NoteRule {
    pub name: &'static str,
    pub evaluate: fn(&CaseInput, &str) -> Option<&'static str>,
}

impl std::fmt::Debug for NoteRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("NoteRule").field("name", &self.name).finish()
    }
}

pub const SMOKING_NOTE: &str = "Smoking jeopardises flap – cessation essential.";
pub const DIABETES_NOTE: &str = "Optimise glycaemia pre-op.";
pub const IRRADIATION_NOTE: &str = "Radiated skin – consider delay/wider pedicle.";
pub const HAIR_GRAFT_NOTE: &str = "A graft on hair-bearing skin causes alopecia; flap chosen.";
pub const PAEDIATRIC_NOTE: &str = "Paediatric skin tight – staged expansion may help.";
pub const ELDERLY_NOTE: &str = "Elderly laxity aids rotation; rhytids hide scars.";
pub const ONCOLOGIC_NOTE: &str = "Confirm clear margins before reconstruction.";
pub const TRAUMATIC_NOTE: &str = "Debride & align with laceration lines.";
pub const CONGENITAL_NOTE: &str = "Consider staged expansion for symmetry.";

/// Rules in evaluation order.
pub static NOTE_RULES: [NoteRule; 6] = [
    NoteRule {
        name: "smoking",
        evaluate: |case, _| case.risk.active_smoker.then_some(SMOKING_NOTE),
    },
    NoteRule {
        name: "diabetes",
        evaluate: |case, _| case.risk.diabetic.then_some(DIABETES_NOTE),
    },
    NoteRule {
        name: "irradiation",
        evaluate: |case, _| case.risk.previously_irradiated.then_some(IRRADIATION_NOTE),
    },
    NoteRule {
        name: "hair_bearing_graft",
        evaluate: |case, flap| {
            (case.risk.hair_bearing && mentions_graft(flap)).then_some(HAIR_GRAFT_NOTE)
        },
    },
    NoteRule {
        name: "age_band",
        evaluate: |case, _| {
            if case.risk.age < PAEDIATRIC_AGE_LIMIT {
                Some(PAEDIATRIC_NOTE)
            } else if case.risk.age > ELDERLY_AGE_LIMIT {
                Some(ELDERLY_NOTE)
            } else {
                None
            }
        },
    },
    NoteRule {
        name: "defect_type",
        evaluate: |case, _| {
            Some(match case.defect_type {
                DefectType::Oncologic => ONCOLOGIC_NOTE,
                DefectType::Traumatic => TRAUMATIC_NOTE,
                DefectType::Congenital => CONGENITAL_NOTE,
            })
        },
    },
];

/// Evaluates every note rule against the case and the chosen flap.
pub fn compose_notes(case: &CaseInput, flap: &str) -> Vec<String> {
    NOTE_RULES
        .iter()
        .filter_map(|rule| (rule.evaluate)(case, flap))
        .map(str::to_owned)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::{DepthCategory, RiskFactors};
    use crate::subunit::AnatomicalSubunit;

    fn case(defect_type: DefectType, risk: RiskFactors) -> CaseInput {
        CaseInput {
            subunit: AnatomicalSubunit::Scalp,
            defect_type,
            diameter_cm: 1.0,
            depth: DepthCategory::Superficial,
            risk,
        }
    }

    fn adult() -> RiskFactors {
        RiskFactors {
            age: 40,
            ..RiskFactors::default()
        }
    }

    #[test]
    fn defect_type_always_contributes_one_note() {
        for defect_type in DefectType::ALL {
            let notes = compose_notes(&case(defect_type, adult()), "O-Z rotation flap");
            assert_eq!(notes.len(), 1);
        }
        assert_eq!(
            compose_notes(&case(DefectType::Traumatic, adult()), "x"),
            vec![TRAUMATIC_NOTE]
        );
    }

    #[test]
    fn notes_follow_rule_order() {
        let risk = RiskFactors {
            hair_bearing: true,
            age: 10,
            diabetic: true,
            active_smoker: true,
            previously_irradiated: true,
        };
        let notes = compose_notes(
            &case(DefectType::Congenital, risk),
            "Full-thickness skin graft",
        );
        assert_eq!(
            notes,
            vec![
                SMOKING_NOTE,
                DIABETES_NOTE,
                IRRADIATION_NOTE,
                HAIR_GRAFT_NOTE,
                PAEDIATRIC_NOTE,
                CONGENITAL_NOTE,
            ]
        );
    }

    #[test]
    fn age_band_edges() {
        let at = |age| {
            compose_notes(
                &case(
                    DefectType::Oncologic,
                    RiskFactors {
                        age,
                        ..RiskFactors::default()
                    },
                ),
                "x",
            )
        };
        assert_eq!(at(17)[0], PAEDIATRIC_NOTE);
        assert_eq!(at(18).len(), 1);
        assert_eq!(at(70).len(), 1);
        assert_eq!(at(71)[0], ELDERLY_NOTE);
    }

    #[test]
    fn hair_graft_note_needs_both_conditions() {
        let hairy = RiskFactors {
            hair_bearing: true,
            ..adult()
        };
        assert_eq!(
            compose_notes(&case(DefectType::Oncologic, hairy), "O-Z rotation flap").len(),
            1
        );
        assert_eq!(
            compose_notes(&case(DefectType::Oncologic, adult()), "Full-thickness skin graft")
                .len(),
            1
        );
        assert_eq!(
            compose_notes(&case(DefectType::Oncologic, hairy), "Full-thickness skin graft")[0],
            HAIR_GRAFT_NOTE
        );
    }

    #[test]
    fn rule_names_are_unique() {
        let mut names: Vec<_> = NOTE_RULES.iter().map(|r| r.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), NOTE_RULES.len());
    }
}

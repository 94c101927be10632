//! The recommendation engine.
//!
//! `recommend` is a pure function of its [`CaseInput`]: classify the size, select a leaf from
//! the subunit's rule, append any rationale clauses, then compose notes. It holds no state and
//! reads only the static threshold and rule tables, so it is safe to call concurrently.

use crate::case::CaseInput;
use crate::notes::compose_notes;
use crate::rules::rule_for;
use crate::size::{classify, SizeCategory};
use crate::FlapResult;
use serde::{Deserialize, Serialize};

/// Output of a single evaluation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Recommendation {
    /// Size band the diameter fell into.
    pub size: SizeCategory,
    pub flap: String,
    pub rationale: String,
    /// Risk and context caveats in evaluation order. Never empty.
    pub notes: Vec<String>,
}

impl Recommendation {
    /// Renders the recommendation as Markdown for display.
    pub fn to_markdown(&self) -> String {
        let notes = if self.notes.is_empty() {
            "None.".to_owned()
        } else {
            self.notes.join(" ")
        };
        format!(
            "**Recommended flap:** {}\n\n**Rationale:** {}\n\n**Notes:** {}",
            self.flap, self.rationale, notes
        )
    }
}

/// Recommends a reconstructive flap for the case.
///
/// The case is assumed to be validated already (see [`crate::validate_case`]).
///
/// # Errors
///
/// Returns [`crate::FlapError::UnknownSubunit`] if the threshold or rule table has no entry
/// for the case's subunit.
pub fn recommend(case: &CaseInput) -> FlapResult<Recommendation> {
    let size = classify(case.subunit, case.diameter_cm).inspect_err(|e| {
        tracing::error!("size classification failed: {e}");
    })?;
    let rule = rule_for(case.subunit).inspect_err(|e| {
        tracing::error!("rule lookup failed: {e}");
    })?;
    let leaf = rule.select(case.depth, size)?;

    let mut rationale = leaf.rationale.to_owned();
    for clause in rule.clauses {
        if clause.trigger.fires(case, size, leaf.flap) {
            rationale.push_str(clause.text);
        }
    }

    let notes = compose_notes(case, leaf.flap);

    tracing::debug!(
        subunit = case.subunit.id(),
        depth = ?case.depth,
        size = size.as_str(),
        flap = leaf.flap,
        notes = notes.len(),
        "recommendation selected"
    );

    Ok(Recommendation {
        size,
        flap: leaf.flap.to_owned(),
        rationale,
        notes,
    })
}

//! # Flap Core
//!
//! Decision engine for reconstructing head-and-neck skin and soft-tissue defects.
//!
//! Given a defect's anatomical subunit, type, diameter, depth and the patient's risk factors,
//! the engine deterministically selects a named reconstructive flap, a clinical rationale and a
//! list of risk/context notes.
//!
//! This crate contains:
//! - the subunit catalog and per-subunit size thresholds
//! - the size classifier ([`classify`])
//! - the per-subunit rule table and note rules
//! - the engine itself ([`recommend`])
//! - input-boundary validation ([`validate_case`])
//! - the append-only usage log collaborator ([`UsageLog`])
//!
//! **No API concerns**: HTTP servers and command-line parsing belong in `api-rest` and
//! `flap-cli`.

pub mod case;
pub mod config;
pub mod constants;
pub mod engine;
pub mod error;
pub mod notes;
pub mod rules;
pub mod size;
pub mod subunit;
pub mod usage_log;

pub use case::{validate_case, validate_diameter, CaseInput, DefectType, DepthCategory, RiskFactors};
pub use config::CoreConfig;
pub use engine::{recommend, Recommendation};
pub use error::{FlapError, FlapResult};
pub use size::{classify, SizeCategory, SizeThreshold};
pub use subunit::{AnatomicalSubunit, LipZone, SubunitDescriptor};
pub use usage_log::{Feedback, UsageLog, UsageRecord};

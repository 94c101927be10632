//! Constants used throughout the flap-core crate.
//!
//! Boundary limits and default paths live here so the engine, the usage log and
//! the outer surfaces agree on them.

/// Smallest diameter (cm) accepted at the input boundary.
pub const MIN_DIAMETER_CM: f64 = 0.1;

/// Largest diameter (cm) accepted at the input boundary.
pub const MAX_DIAMETER_CM: f64 = 25.0;

/// Oldest patient age (years) accepted at the input boundary.
pub const MAX_AGE_YEARS: u32 = 120;

/// Patients younger than this receive the paediatric note.
pub const PAEDIATRIC_AGE_LIMIT: u32 = 18;

/// Patients older than this receive the elderly-laxity note.
pub const ELDERLY_AGE_LIMIT: u32 = 70;

/// Default location of the append-only usage log when none is configured.
pub const DEFAULT_USAGE_LOG_PATH: &str = ".data/usage_log.jsonl";

/// Substring (matched case-insensitively) that marks a flap as graft-based.
pub const GRAFT_MARKER: &str = "graft";

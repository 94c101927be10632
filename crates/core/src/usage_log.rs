//! Append-only log of anonymised cases and clinician feedback.
//!
//! Each record is one JSON object per line (JSON Lines) at the configured path. No personal
//! identifiers are stored: only the case parameters, the recommended flap and whether the
//! clinician used it.
//!
//! Writers within a process are serialised by a shared mutex, so clones of a [`UsageLog`]
//! handed to concurrent request handlers never interleave partial lines.

use crate::case::{CaseInput, DefectType, DepthCategory};
use crate::config::CoreConfig;
use crate::engine::Recommendation;
use crate::subunit::AnatomicalSubunit;
use crate::{FlapError, FlapResult};
use chrono::{DateTime, SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::sync::{Arc, Mutex};

/// Whether the clinician followed the recommendation, and if not, what they used instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Feedback {
    used_recommended: bool,
    alternative_flap: String,
}

impl Feedback {
    /// Builds validated feedback. The alternative is trimmed; it is required only when the
    /// recommendation was not used.
    ///
    /// # Errors
    ///
    /// Returns [`FlapError::InvalidInput`] if `used_recommended` is false and no alternative
    /// flap was named.
    pub fn new(used_recommended: bool, alternative_flap: Option<&str>) -> FlapResult<Self> {
        let alternative_flap = alternative_flap.unwrap_or_default().trim().to_owned();
        if !used_recommended && alternative_flap.is_empty() {
            return Err(FlapError::InvalidInput(
                "please tell us which flap you used".into(),
            ));
        }
        Ok(Self {
            used_recommended,
            alternative_flap,
        })
    }

    pub fn used_recommended(&self) -> bool {
        self.used_recommended
    }

    pub fn alternative_flap(&self) -> &str {
        &self.alternative_flap
    }
}

/// One line of the usage log.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UsageRecord {
    pub timestamp_utc: String,
    pub subunit: AnatomicalSubunit,
    pub defect_type: DefectType,
    pub depth: DepthCategory,
    pub diameter_cm: f64,
    pub hair_bearing: bool,
    pub age: u32,
    pub diabetic: bool,
    pub active_smoker: bool,
    pub previously_irradiated: bool,
    pub recommended_flap: String,
    pub used_recommended: bool,
    pub alt_flap_if_no: String,
}

impl UsageRecord {
    pub fn new(
        case: &CaseInput,
        recommendation: &Recommendation,
        feedback: &Feedback,
        at: DateTime<Utc>,
    ) -> Self {
        Self {
            timestamp_utc: at.to_rfc3339_opts(SecondsFormat::Secs, true),
            subunit: case.subunit,
            defect_type: case.defect_type,
            depth: case.depth,
            diameter_cm: case.diameter_cm,
            hair_bearing: case.risk.hair_bearing,
            age: case.risk.age,
            diabetic: case.risk.diabetic,
            active_smoker: case.risk.active_smoker,
            previously_irradiated: case.risk.previously_irradiated,
            recommended_flap: recommendation.flap.clone(),
            used_recommended: feedback.used_recommended(),
            alt_flap_if_no: feedback.alternative_flap().to_owned(),
        }
    }
}

/// Handle on the usage log file.
#[derive(Clone, Debug)]
pub struct UsageLog {
    cfg: Arc<CoreConfig>,
    write_lock: Arc<Mutex<()>>,
}

impl UsageLog {
    pub fn new(cfg: Arc<CoreConfig>) -> Self {
        Self {
            cfg,
            write_lock: Arc::new(Mutex::new(())),
        }
    }

    /// Appends one record, creating the parent directory and the file on first write.
    ///
    /// # Errors
    ///
    /// Returns [`FlapError`] if:
    /// - the parent directory cannot be created,
    /// - the record cannot be serialised,
    /// - the file cannot be opened or written.
    pub fn append(&self, record: &UsageRecord) -> FlapResult<()> {
        let path = self.cfg.usage_log_path();
        let mut line = serde_json::to_string(record).map_err(FlapError::Serialization)?;
        line.push('\n');

        let _guard = self
            .write_lock
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());

        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(FlapError::LogDirCreation)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(FlapError::LogWrite)?;
        file.write_all(line.as_bytes())
            .map_err(FlapError::LogWrite)?;

        tracing::info!(
            subunit = record.subunit.id(),
            used_recommended = record.used_recommended,
            "usage record logged"
        );
        Ok(())
    }

    /// Raw log contents, for export. A log that has never been written is empty.
    ///
    /// # Errors
    ///
    /// Returns [`FlapError::LogRead`] if the file exists but cannot be read.
    pub fn export(&self) -> FlapResult<Vec<u8>> {
        match fs::read(self.cfg.usage_log_path()) {
            Ok(bytes) => Ok(bytes),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(FlapError::LogRead(e)),
        }
    }

    /// Parses every record in the log.
    ///
    /// # Errors
    ///
    /// Returns [`FlapError`] if the file cannot be read or a line is not a valid record.
    pub fn records(&self) -> FlapResult<Vec<UsageRecord>> {
        let bytes = self.export()?;
        let text = String::from_utf8_lossy(&bytes);
        text.lines()
            .enumerate()
            .filter(|(_, line)| !line.trim().is_empty())
            .map(|(index, line)| {
                serde_json::from_str(line).map_err(|source| FlapError::Deserialization {
                    line: index + 1,
                    source,
                })
            })
            .collect()
    }

    /// Number of logged cases.
    ///
    /// # Errors
    ///
    /// Returns [`FlapError::LogRead`] if the file exists but cannot be read.
    pub fn count(&self) -> FlapResult<usize> {
        let bytes = self.export()?;
        Ok(String::from_utf8_lossy(&bytes)
            .lines()
            .filter(|line| !line.trim().is_empty())
            .count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::case::RiskFactors;
    use crate::engine::recommend;
    use chrono::TimeZone;

    fn log_in(dir: &std::path::Path) -> UsageLog {
        let cfg = CoreConfig::new(dir.join("nested").join("usage_log.jsonl"), None).unwrap();
        UsageLog::new(Arc::new(cfg))
    }

    fn sample_case() -> CaseInput {
        CaseInput {
            subunit: AnatomicalSubunit::NasalTip,
            defect_type: DefectType::Oncologic,
            diameter_cm: 1.0,
            depth: DepthCategory::Superficial,
            risk: RiskFactors {
                hair_bearing: true,
                age: 60,
                ..RiskFactors::default()
            },
        }
    }

    fn sample_record(feedback: &Feedback) -> UsageRecord {
        let case = sample_case();
        let rec = recommend(&case).unwrap();
        let at = Utc.with_ymd_and_hms(2026, 3, 1, 9, 30, 0).unwrap();
        UsageRecord::new(&case, &rec, feedback, at)
    }

    #[test]
    fn feedback_requires_alternative_when_recommendation_not_used() {
        let err = Feedback::new(false, Some("   ")).expect_err("should reject blank");
        assert!(matches!(err, FlapError::InvalidInput(msg) if msg.contains("which flap")));
        assert!(Feedback::new(false, None).is_err());

        let fb = Feedback::new(false, Some("  Rhomboid flap ")).unwrap();
        assert_eq!(fb.alternative_flap(), "Rhomboid flap");
    }

    #[test]
    fn feedback_accepts_missing_alternative_when_used() {
        let fb = Feedback::new(true, None).unwrap();
        assert!(fb.used_recommended());
        assert_eq!(fb.alternative_flap(), "");
    }

    #[test]
    fn record_captures_case_and_recommendation() {
        let record = sample_record(&Feedback::new(true, None).unwrap());
        assert_eq!(record.timestamp_utc, "2026-03-01T09:30:00Z");
        assert_eq!(record.recommended_flap, "Bilobed flap");
        assert_eq!(record.subunit, AnatomicalSubunit::NasalTip);
        assert!(record.hair_bearing);
    }

    #[test]
    fn missing_log_counts_as_empty() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(dir.path());
        assert_eq!(log.count().unwrap(), 0);
        assert!(log.export().unwrap().is_empty());
        assert!(log.records().unwrap().is_empty());
    }

    #[test]
    fn append_creates_directory_and_preserves_order() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(dir.path());

        let first = sample_record(&Feedback::new(true, None).unwrap());
        let second = sample_record(&Feedback::new(false, Some("Rieger flap")).unwrap());
        log.append(&first).unwrap();
        log.append(&second).unwrap();

        assert_eq!(log.count().unwrap(), 2);
        assert_eq!(log.records().unwrap(), vec![first, second]);

        let exported = String::from_utf8(log.export().unwrap()).unwrap();
        assert_eq!(exported.lines().count(), 2);
        assert!(exported.contains("\"subunit\":\"nasal_tip\""));
    }

    #[test]
    fn concurrent_appends_do_not_interleave() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(dir.path());
        let record = sample_record(&Feedback::new(true, None).unwrap());

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let log = log.clone();
                let record = record.clone();
                std::thread::spawn(move || {
                    for _ in 0..10 {
                        log.append(&record).unwrap();
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().unwrap();
        }

        assert_eq!(log.records().unwrap().len(), 80);
    }

    #[test]
    fn corrupt_line_reports_its_position() {
        let dir = tempfile::tempdir().unwrap();
        let log = log_in(dir.path());
        log.append(&sample_record(&Feedback::new(true, None).unwrap()))
            .unwrap();
        let mut file = OpenOptions::new()
            .append(true)
            .open(dir.path().join("nested").join("usage_log.jsonl"))
            .unwrap();
        writeln!(file, "not json").unwrap();

        let err = log.records().expect_err("should fail on line 2");
        assert!(matches!(err, FlapError::Deserialization { line: 2, .. }));
    }
}

//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup and then passed into services as
//! `Arc<CoreConfig>`. Request handlers never read process-wide environment variables, which
//! keeps behaviour consistent across threads and test harnesses.

use crate::constants::DEFAULT_USAGE_LOG_PATH;
use crate::{FlapError, FlapResult};
use std::path::{Path, PathBuf};

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    usage_log_path: PathBuf,
    admin_key: Option<String>,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// A blank admin key is treated as unset, which disables usage-log export.
    ///
    /// # Errors
    ///
    /// Returns [`FlapError::InvalidInput`] if `usage_log_path` is empty or names a directory.
    pub fn new(usage_log_path: PathBuf, admin_key: Option<String>) -> FlapResult<Self> {
        if usage_log_path.as_os_str().is_empty() {
            return Err(FlapError::InvalidInput(
                "usage log path cannot be empty".into(),
            ));
        }
        if usage_log_path.is_dir() {
            return Err(FlapError::InvalidInput(format!(
                "usage log path is a directory: {}",
                usage_log_path.display()
            )));
        }

        let admin_key = admin_key
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        Ok(Self {
            usage_log_path,
            admin_key,
        })
    }

    pub fn usage_log_path(&self) -> &Path {
        &self.usage_log_path
    }

    pub fn admin_key(&self) -> Option<&str> {
        self.admin_key.as_deref()
    }
}

/// Resolve the usage log path from an optional override value.
///
/// If `value` is `None` or empty/whitespace, returns the default path.
pub fn usage_log_path_from_env_value(value: Option<String>) -> PathBuf {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_USAGE_LOG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_admin_key_disables_export() {
        let cfg = CoreConfig::new(PathBuf::from("log.jsonl"), Some("   ".into())).unwrap();
        assert_eq!(cfg.admin_key(), None);

        let cfg = CoreConfig::new(PathBuf::from("log.jsonl"), Some(" s3cret ".into())).unwrap();
        assert_eq!(cfg.admin_key(), Some("s3cret"));
    }

    #[test]
    fn rejects_empty_log_path() {
        let err = CoreConfig::new(PathBuf::new(), None).expect_err("should reject");
        assert!(matches!(err, FlapError::InvalidInput(msg) if msg.contains("cannot be empty")));
    }

    #[test]
    fn rejects_directory_as_log_path() {
        let dir = tempfile::tempdir().unwrap();
        let err = CoreConfig::new(dir.path().to_path_buf(), None).expect_err("should reject");
        assert!(matches!(err, FlapError::InvalidInput(msg) if msg.contains("directory")));
    }

    #[test]
    fn log_path_falls_back_to_default() {
        assert_eq!(
            usage_log_path_from_env_value(None),
            PathBuf::from(DEFAULT_USAGE_LOG_PATH)
        );
        assert_eq!(
            usage_log_path_from_env_value(Some("  ".into())),
            PathBuf::from(DEFAULT_USAGE_LOG_PATH)
        );
        assert_eq!(
            usage_log_path_from_env_value(Some("/tmp/x.jsonl".into())),
            PathBuf::from("/tmp/x.jsonl")
        );
    }
}

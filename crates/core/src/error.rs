use crate::subunit::AnatomicalSubunit;

#[derive(Debug, thiserror::Error)]
pub enum FlapError {
    /// The subunit catalog and the threshold/rule tables are out of sync.
    #[error("no table entry for subunit {0:?}: catalog and tables are out of sync")]
    UnknownSubunit(AnatomicalSubunit),
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("failed to create usage log directory: {0}")]
    LogDirCreation(std::io::Error),
    #[error("failed to write usage log: {0}")]
    LogWrite(std::io::Error),
    #[error("failed to read usage log: {0}")]
    LogRead(std::io::Error),
    #[error("failed to serialize usage record: {0}")]
    Serialization(serde_json::Error),
    #[error("failed to deserialize usage record on line {line}: {source}")]
    Deserialization {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
}

pub type FlapResult<T> = std::result::Result<T, FlapError>;

use thiserror::Error;

pub type StoreResult<T> = Result<T, StoreError>;

/// Failures a store operation can surface. Not-found and duplicate
/// conditions are ordinary `Option`/`bool` returns, never errors.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error(transparent)]
    Storage(#[from] platform_storage::StorageError),

    /// The persisted employee collection could not be decoded. Settings
    /// records degrade to defaults instead; the collection is authoritative
    /// data and is never silently discarded.
    #[error("persisted record {key:?} is corrupt")]
    Corrupt {
        key: &'static str,
        #[source]
        source: serde_json::Error,
    },

    #[error("persisted record {key:?} has unsupported schema version {version}")]
    UnsupportedVersion { key: &'static str, version: u32 },

    /// A draft reached `add`/`update` with required fields still blank.
    /// Drafts are validated first; this is the last-resort signal.
    #[error("draft is missing required fields")]
    IncompleteDraft,
}

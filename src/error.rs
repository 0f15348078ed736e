use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("unknown bone format '{0}'")]
    UnknownFormat(String),
}

/// Failure of a single online translation call.
///
/// Every variant is recoverable: the transliteration engine falls back to the
/// token dictionary and never hands these to its caller.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TranslationError {
    #[error("online translation is not configured")]
    Unavailable,
    #[error("online translation timed out after {:.1}s", .0.as_secs_f32())]
    Timeout(Duration),
    #[error("online translation failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum HostError {
    #[error("bone '{0}' not found")]
    IdentifierNotFound(String),
    #[error("bone '{0}' already exists")]
    AlreadyExists(String),
}

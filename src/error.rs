use thiserror::Error;

use crate::backend::ColumnFamily;
use crate::term::TermId;

#[derive(Debug, Error)]
pub enum BackendError {
    /// Connectivity or timeout failure; the call may be retried.
    #[error("backend unavailable: {0}")]
    Unavailable(String),
    #[error("storage failure")]
    Storage(#[from] fjall::Error),
    /// A stored row could not be decoded.
    #[error("corrupt row in {cf}: {reason}")]
    Corrupt { cf: ColumnFamily, reason: String },
    #[error("counter of partition {partition} overflowed")]
    CounterOverflow { partition: u16 },
}

impl BackendError {
    /// Whether the same call may succeed later. Fjall only fails this way on
    /// I/O; a poisoned keyspace or a failed recovery stays broken.
    pub fn is_transient(&self) -> bool {
        match self {
            BackendError::Unavailable(_) => true,
            BackendError::Storage(fjall::Error::Io(_))
            | BackendError::Storage(fjall::Error::Storage(fjall::LsmError::Io(_))) => true,
            _ => false,
        }
    }
}

#[derive(Debug, Error)]
pub enum CoderError {
    /// Invalid vocabulary or coder configuration. Only raised at startup.
    #[error("configuration error: {0}")]
    Configuration(String),
    #[error("backend unavailable")]
    BackendUnavailable(#[source] BackendError),
    #[error("storage failure")]
    Storage(#[source] BackendError),
    /// No dictionary entry exists for an id that should have one.
    #[error("inconsistent dictionary for id {id}: {reason}")]
    InconsistentDictionary { id: TermId, reason: String },
    /// Id inside a vocabulary range that the vocabulary does not populate.
    #[error("reserved id {0} is not assigned to any term")]
    UnassignedReservedId(TermId),
    /// A stored row failed to decode.
    #[error("corrupt row in {cf}: {reason}")]
    CorruptRow { cf: ColumnFamily, reason: String },
    #[error("malformed term: {0}")]
    MalformedTerm(String),
    #[error("allocator partition {partition} is exhausted")]
    AllocatorExhausted { partition: u16 },
}

impl CoderError {
    pub fn is_retryable(&self) -> bool {
        matches!(self, CoderError::BackendUnavailable(_))
    }

    pub(crate) fn malformed(reason: impl Into<String>) -> CoderError {
        CoderError::MalformedTerm(reason.into())
    }

    pub(crate) fn configuration(reason: impl Into<String>) -> CoderError {
        CoderError::Configuration(reason.into())
    }
}

impl From<BackendError> for CoderError {
    fn from(value: BackendError) -> Self {
        match value {
            BackendError::CounterOverflow { partition } => {
                CoderError::AllocatorExhausted { partition }
            }
            BackendError::Corrupt { cf, reason } => CoderError::CorruptRow { cf, reason },
            other if other.is_transient() => CoderError::BackendUnavailable(other),
            other => CoderError::Storage(other),
        }
    }
}

pub type Result<T, E = CoderError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::{BackendError, CoderError};
    use crate::backend::ColumnFamily;

    #[test]
    fn only_transient_failures_are_retryable() {
        let io = BackendError::Storage(fjall::Error::Io(std::io::Error::other("disk busy")));
        assert!(CoderError::from(io).is_retryable());
        let unavailable = BackendError::Unavailable("timeout".into());
        assert!(CoderError::from(unavailable).is_retryable());

        let poisoned = CoderError::from(BackendError::Storage(fjall::Error::Poisoned));
        assert!(matches!(poisoned, CoderError::Storage(_)));
        assert!(!poisoned.is_retryable());
    }

    #[test]
    fn backend_errors_map_to_their_coder_errors() {
        assert!(matches!(
            CoderError::from(BackendError::CounterOverflow { partition: 3 }),
            CoderError::AllocatorExhausted { partition: 3 }
        ));
        let corrupt = CoderError::from(BackendError::Corrupt {
            cf: ColumnFamily::IdToTerm,
            reason: "truncated".into(),
        });
        assert!(matches!(corrupt, CoderError::CorruptRow { .. }));
        assert!(!corrupt.is_retryable());
    }
}

//! Action failure types

use crate::catalogue::CatalogueError;
use crate::store::StoreError;
use crate::system::ShellError;

/// Broad failure categories, used for logging
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    /// Shell command failed or could not be started
    ExternalProcess,
    /// External output did not have the expected shape
    Parse,
    /// Catalogue request failed or found nothing
    Remote,
    /// Persisted state could not be read or written
    Storage,
    /// Bad action type or arguments
    Configuration,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::ExternalProcess => write!(f, "external process"),
            FailureKind::Parse => write!(f, "parse"),
            FailureKind::Remote => write!(f, "remote"),
            FailureKind::Storage => write!(f, "storage"),
            FailureKind::Configuration => write!(f, "configuration"),
        }
    }
}

/// Error type for action construction and execution
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error(transparent)]
    Process(#[from] ShellError),

    #[error("Unexpected {what}: {value:?}")]
    Parse { what: &'static str, value: String },

    #[error("Catalogue request failed: {source}")]
    Remote {
        apology: String,
        #[source]
        source: CatalogueError,
    },

    #[error("No regular episodes of {show}")]
    NoEpisodes { show: String, apology: String },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error("Failed to encode episode cache: {0}")]
    Encode(#[from] serde_json::Error),

    #[error("Unknown action type: {0}")]
    UnknownAction(String),

    #[error("Invalid argument for {action}: {message}")]
    InvalidArgument {
        action: &'static str,
        message: String,
    },
}

impl ActionError {
    pub fn kind(&self) -> FailureKind {
        match self {
            ActionError::Process(_) => FailureKind::ExternalProcess,
            ActionError::Parse { .. } => FailureKind::Parse,
            ActionError::Remote { .. } | ActionError::NoEpisodes { .. } => FailureKind::Remote,
            ActionError::Store(_) | ActionError::Encode(_) => FailureKind::Storage,
            ActionError::UnknownAction(_) | ActionError::InvalidArgument { .. } => {
                FailureKind::Configuration
            }
        }
    }

    /// What to tell the user, if this failure deserves a spoken apology
    pub fn apology(&self) -> Option<&str> {
        match self {
            ActionError::Remote { apology, .. } | ActionError::NoEpisodes { apology, .. } => {
                Some(apology)
            }
            _ => None,
        }
    }

    pub(crate) fn invalid(action: &'static str, message: impl Into<String>) -> Self {
        ActionError::InvalidArgument {
            action,
            message: message.into(),
        }
    }
}

// src/domain/error.rs
use thiserror::Error;

use crate::domain::validation::ValidationErrors;

/// Why a remote call failed, decided once at the service boundary
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TransportFailure {
    #[error("server responded with status {status}: {body}")]
    Rejected { status: u16, body: String },
    #[error("network failure: {0}")]
    Network(String),
    #[error("malformed response: {0}")]
    Malformed(String),
}

impl TransportFailure {
    pub fn status(&self) -> Option<u16> {
        match self {
            TransportFailure::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status() == Some(404)
    }
}

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Failed to fetch notes: {0}")]
    Fetch(#[source] TransportFailure),
    #[error("Failed to create note: {0}")]
    Create(#[source] TransportFailure),
    #[error("Failed to delete note {id}: {failure}")]
    Delete {
        id: String,
        #[source]
        failure: TransportFailure,
    },
    #[error("Note id must not be empty")]
    EmptyNoteId,
    #[error("Invalid draft: {0}")]
    InvalidDraft(ValidationErrors),
    #[error("Configuration error: {0}")]
    Config(String),
}

impl DomainError {
    pub fn failure(&self) -> Option<&TransportFailure> {
        match self {
            DomainError::Fetch(failure)
            | DomainError::Create(failure)
            | DomainError::Delete { failure, .. } => Some(failure),
            _ => None,
        }
    }
}

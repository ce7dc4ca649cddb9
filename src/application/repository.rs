// src/application/repository.rs
use async_trait::async_trait;

use crate::domain::{DomainError, Draft, ListQuery, Note, NotesPage};

/// Remote note store. Each call is exactly one round trip.
#[async_trait]
pub trait NoteRepository: Send + Sync {
    /// Fetch one page of notes. Fails with [`DomainError::Fetch`].
    async fn list_notes(&self, query: &ListQuery) -> Result<NotesPage, DomainError>;

    /// Persist a draft and return the stored note with its assigned id.
    /// Fails with [`DomainError::Create`].
    async fn create_note(&self, draft: &Draft) -> Result<Note, DomainError>;

    /// Delete a note and return it as confirmation.
    /// Fails with [`DomainError::Delete`].
    async fn delete_note(&self, id: &str) -> Result<Note, DomainError>;
}

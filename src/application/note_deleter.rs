// src/application/note_deleter.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, Note};

pub struct NoteDeleter<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteDeleter<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// Delete a note and return it as confirmation
    pub async fn delete_note(&self, note_id: &str) -> Result<Note, DomainError> {
        let note_id = note_id.trim();
        if note_id.is_empty() {
            return Err(DomainError::EmptyNoteId);
        }
        self.repository.delete_note(note_id).await
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::NoteRepository;
    use crate::domain::{ListQuery, Tag, TransportFailure};
    use crate::util::testing::{note, MockNoteRepository};

    #[tokio::test]
    async fn given_existing_note_when_deleting_then_returns_deleted_note() {
        // Arrange
        let mock = MockNoteRepository::builder()
            .with_note(note("abc", "Standup", "Daily at nine", Tag::Meeting))
            .build();
        let deleter = NoteDeleter::new(mock);

        // Act
        let result = deleter.delete_note("abc").await;

        // Assert
        let deleted = result.expect("Delete should succeed");
        assert_eq!(deleted.id, "abc");
        assert_eq!(deleted.title, "Standup");
    }

    #[tokio::test]
    async fn given_deleted_note_when_listing_then_note_is_gone() {
        // Arrange
        let mock = MockNoteRepository::builder()
            .with_note(note("keep", "Keep me", "Still here", Tag::Todo))
            .with_note(note("drop", "Drop me", "Going away", Tag::Todo))
            .build();
        let deleter = NoteDeleter::new(mock);

        // Act
        deleter.delete_note("drop").await.expect("Delete should succeed");
        let page = deleter
            .repository()
            .list_notes(&ListQuery::new())
            .await
            .expect("List should succeed");

        // Assert
        assert!(page.notes.iter().all(|n| n.id != "drop"));
        assert_eq!(page.notes.len(), 1);
    }

    #[tokio::test]
    async fn given_nonexistent_note_when_deleting_then_returns_error() {
        // Arrange
        let deleter = NoteDeleter::new(MockNoteRepository::builder().build());

        // Act
        let result = deleter.delete_note("999").await;

        // Assert
        match result.expect_err("Should return error") {
            DomainError::Delete { id, failure } => {
                assert_eq!(id, "999");
                assert!(failure.is_not_found());
            }
            _ => panic!("Expected Delete error"),
        }
    }

    #[tokio::test]
    async fn given_server_failure_when_deleting_then_note_is_kept() {
        // Arrange
        let deleter = NoteDeleter::new(
            MockNoteRepository::builder()
                .with_note(note("abc", "Standup", "Daily at nine", Tag::Meeting))
                .with_delete_failure("abc", TransportFailure::Network("connection reset".to_string()))
                .build(),
        );

        // Act
        let result = deleter.delete_note(" abc ").await;

        // Assert
        match result {
            Err(DomainError::Delete { id, failure }) => {
                assert_eq!(id, "abc");
                assert_eq!(failure, TransportFailure::Network("connection reset".to_string()));
            }
            other => panic!("Expected Delete error, got {other:?}"),
        }
        assert_eq!(deleter.repository().stored_notes().len(), 1);
    }

    #[tokio::test]
    async fn given_blank_id_when_deleting_then_fails_without_calling_service() {
        // Arrange
        let deleter = NoteDeleter::new(
            MockNoteRepository::builder()
                .with_note(note("abc", "Standup", "Daily at nine", Tag::Meeting))
                .build(),
        );

        // Act
        let result = deleter.delete_note("  ").await;

        // Assert
        assert!(matches!(result, Err(DomainError::EmptyNoteId)));
        assert_eq!(deleter.repository().stored_notes().len(), 1);
    }
}

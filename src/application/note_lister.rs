// src/application/note_lister.rs
use crate::application::NoteRepository;
use crate::domain::{DomainError, ListQuery, NotesPage};
use tracing::{debug, instrument};

pub struct NoteLister<R: NoteRepository> {
    repository: R,
}

impl<R: NoteRepository> NoteLister<R> {
    pub fn new(repository: R) -> Self {
        Self { repository }
    }

    /// List one page of notes, optionally filtered by search term and tag
    ///
    /// # Returns
    /// The page of notes plus the total page count. On failure the caller
    /// receives no partial data.
    #[instrument(level = "debug", skip(self))]
    pub async fn list_notes(&self, query: &ListQuery) -> Result<NotesPage, DomainError> {
        let page = self.repository.list_notes(query).await?;
        debug!(
            count = page.notes.len(),
            total_pages = page.total_pages,
            "Listed notes"
        );
        Ok(page)
    }
}

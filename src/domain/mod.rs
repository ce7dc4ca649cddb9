// src/domain/mod.rs
pub mod error;
pub mod note;
pub mod query;
pub mod validation;

pub use error::{DomainError, TransportFailure};
pub use note::{Draft, Note, NoteTag, NotesPage, Tag};
pub use query::ListQuery;
pub use validation::{DraftSchema, Field, TagPolicy, ValidationErrors};

// src/application/mod.rs
pub mod note_deleter;
pub mod note_form;
pub mod note_lister;
pub mod repository;

pub use note_deleter::NoteDeleter;
pub use note_form::{FormState, NoteForm, SubmitOutcome};
pub use note_lister::NoteLister;
pub use repository::NoteRepository;

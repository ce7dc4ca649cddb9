// src/application/note_form.rs
use crate::application::NoteRepository;
use crate::domain::{Draft, DraftSchema, Note, ValidationErrors};
use tracing::{debug, error, info, instrument};

type Callback<T> = Box<dyn FnMut(&T) + Send>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Editing,
    Submitting,
}

/// Result of a single submit attempt
#[derive(Debug)]
pub enum SubmitOutcome {
    /// Draft did not pass the schema, the service was not called
    Invalid(ValidationErrors),
    /// Note persisted, draft reset
    Created(Note),
    /// Service call failed, draft kept for another attempt
    Failed,
}

/// Form controller: owns the draft, validates it and submits it to the
/// repository.
///
/// `submit` holds `&mut self` across the round trip, so a second submit
/// cannot start while one is in flight.
pub struct NoteForm<R: NoteRepository> {
    repository: R,
    schema: DraftSchema,
    draft: Draft,
    state: FormState,
    on_success: Option<Callback<Note>>,
    on_cancel: Option<Box<dyn FnMut() + Send>>,
}

impl<R: NoteRepository> NoteForm<R> {
    pub fn new(repository: R, schema: DraftSchema) -> Self {
        Self {
            repository,
            schema,
            draft: Draft::default(),
            state: FormState::Editing,
            on_success: None,
            on_cancel: None,
        }
    }

    /// Called with the created note after a successful submit
    pub fn on_success(mut self, callback: impl FnMut(&Note) + Send + 'static) -> Self {
        self.on_success = Some(Box::new(callback));
        self
    }

    /// Called when the user abandons the form
    pub fn on_cancel(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_cancel = Some(Box::new(callback));
        self
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_content(&mut self, content: impl Into<String>) {
        self.draft.content = content.into();
    }

    pub fn set_tag(&mut self, tag: impl Into<String>) {
        self.draft.tag = tag.into();
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn repository(&self) -> &R {
        &self.repository
    }

    pub fn errors(&self) -> ValidationErrors {
        self.schema.validate(&self.draft)
    }

    #[instrument(level = "debug", skip(self), fields(title = %self.draft.title))]
    pub async fn submit(&mut self) -> SubmitOutcome {
        let errors = self.errors();
        if !errors.is_empty() {
            debug!(%errors, "Draft rejected by schema");
            return SubmitOutcome::Invalid(errors);
        }

        self.state = FormState::Submitting;
        let result = self.repository.create_note(&self.draft).await;
        self.state = FormState::Editing;

        match result {
            Ok(note) => {
                info!(note_id = %note.id, "Created note");
                self.draft = Draft::default();
                if let Some(callback) = self.on_success.as_mut() {
                    callback(&note);
                }
                SubmitOutcome::Created(note)
            }
            Err(e) => {
                error!(error = %e, "Error creating note");
                SubmitOutcome::Failed
            }
        }
    }

    pub fn cancel(&mut self) {
        debug!("Form cancelled");
        self.draft = Draft::default();
        if let Some(callback) = self.on_cancel.as_mut() {
            callback();
        }
    }
}

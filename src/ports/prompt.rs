// src/ports/prompt.rs
use anyhow::{Context, Result};
use std::io::{BufRead, Write};
use tracing::debug;

use crate::application::{NoteForm, NoteRepository, SubmitOutcome};
use crate::constants::CANCEL_INPUT;
use crate::domain::{Field, Note, ValidationErrors};
use crate::ports::{Modal, TextPresenter};

/// How an interactive form session ended
#[derive(Debug)]
pub enum PromptOutcome {
    Created(Note),
    Cancelled,
}

enum Answer {
    Value(String),
    Keep,
    Cancel,
}

/// Line based driver for a [`NoteForm`] shown inside a [`Modal`]
///
/// Fields not preset by the caller are asked for; an empty answer keeps the current value and
/// `:q` (or end of input) cancels. After a rejected submit only the fields
/// with errors are asked for again; after a failed submit the user can retry
/// with the same draft.
pub struct FormPrompt<I, O> {
    input: I,
    output: O,
    presenter: TextPresenter,
}

impl<I: BufRead, O: Write> FormPrompt<I, O> {
    pub fn new(input: I, output: O) -> Self {
        Self {
            input,
            output,
            presenter: TextPresenter::new(),
        }
    }

    pub async fn run<R: NoteRepository>(
        &mut self,
        form: &mut NoteForm<R>,
        modal: &mut Modal,
        preset: &[Field],
    ) -> Result<PromptOutcome> {
        modal.open();

        let mut pending: Vec<Field> = [Field::Title, Field::Content, Field::Tag]
            .into_iter()
            .filter(|field| !preset.contains(field))
            .collect();
        let mut shown_errors = ValidationErrors::default();

        loop {
            self.show(form, modal, &shown_errors)?;

            for field in std::mem::take(&mut pending) {
                match self.ask(form, field)? {
                    Answer::Value(value) => match field {
                        Field::Title => form.set_title(value),
                        Field::Content => form.set_content(value),
                        Field::Tag => form.set_tag(value),
                    },
                    Answer::Keep => {}
                    Answer::Cancel => return Ok(self.cancel(form, modal)),
                }
            }

            match form.submit().await {
                SubmitOutcome::Created(note) => {
                    modal.close();
                    return Ok(PromptOutcome::Created(note));
                }
                SubmitOutcome::Invalid(errors) => {
                    debug!(%errors, "Asking again for invalid fields");
                    pending = errors.iter().map(|(field, _)| field).collect();
                    shown_errors = errors;
                }
                SubmitOutcome::Failed => {
                    writeln!(self.output, "Failed to create note.")?;
                    write!(self.output, "Press enter to retry or {CANCEL_INPUT} to cancel: ")?;
                    self.output.flush()?;
                    match self.read_line()? {
                        Some(line) if line != CANCEL_INPUT => {}
                        _ => return Ok(self.cancel(form, modal)),
                    }
                    shown_errors = ValidationErrors::default();
                }
            }
        }
    }

    fn show<R: NoteRepository>(
        &mut self,
        form: &NoteForm<R>,
        modal: &Modal,
        errors: &ValidationErrors,
    ) -> Result<()> {
        let body = self.presenter.render_form(form.draft(), errors);
        if let Some(frame) = modal.render(&body) {
            write!(self.output, "{frame}")?;
        }
        Ok(())
    }

    fn ask<R: NoteRepository>(&mut self, form: &NoteForm<R>, field: Field) -> Result<Answer> {
        let current = match field {
            Field::Title => &form.draft().title,
            Field::Content => &form.draft().content,
            Field::Tag => &form.draft().tag,
        };
        if current.is_empty() {
            write!(self.output, "{field}: ")?;
        } else {
            write!(self.output, "{field} [{current}]: ")?;
        }
        self.output.flush()?;

        Ok(match self.read_line()? {
            None => Answer::Cancel,
            Some(line) if line == CANCEL_INPUT => Answer::Cancel,
            Some(line) if line.is_empty() => Answer::Keep,
            Some(line) => Answer::Value(line),
        })
    }

    /// Next input line without its line ending; `None` at end of input
    fn read_line(&mut self) -> Result<Option<String>> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read form input")?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn cancel<R: NoteRepository>(&mut self, form: &mut NoteForm<R>, modal: &mut Modal) -> PromptOutcome {
        form.cancel();
        modal.close();
        PromptOutcome::Cancelled
    }

    pub fn into_output(self) -> O {
        self.output
    }
}

// src/ports/text.rs
use crate::domain::{Draft, Field, Note, NotesPage, Tag, ValidationErrors};
use crate::util::text::preview;

const PREVIEW_CHARS: usize = 48;

/// Plain text rendering of notes and drafts for the terminal
#[derive(Debug, Default)]
pub struct TextPresenter;

impl TextPresenter {
    pub fn new() -> Self {
        Self
    }

    /// One line per note plus a page footer
    pub fn render_page(&self, page: &NotesPage, page_number: u32) -> String {
        if page.notes.is_empty() {
            return "No notes found.\n".to_string();
        }

        let id_width = page.notes.iter().map(|n| n.id.len()).max().unwrap_or(0);
        let mut out = String::new();
        for note in &page.notes {
            out.push_str(&format!(
                "{:<id_width$}  {:<8}  {}  {}\n",
                note.id,
                note.tag,
                note.title,
                preview(&note.content, PREVIEW_CHARS),
            ));
        }
        out.push_str(&format!("-- page {} of {} --\n", page_number, page.total_pages));
        out
    }

    pub fn render_note(&self, note: &Note) -> String {
        let mut out = format!(
            "Note ID: {}\nTitle: {}\nTag: {}\n",
            note.id, note.title, note.tag
        );
        if let Some(created) = &note.created_at {
            out.push_str(&format!("Created: {created}\n"));
        }
        out.push('\n');
        out.push_str(&note.content);
        out.push('\n');
        out
    }

    /// Form body shown inside the modal: current values and any field errors
    pub fn render_form(&self, draft: &Draft, errors: &ValidationErrors) -> String {
        let mut out = String::new();
        for (field, label, value) in [
            (Field::Title, "Title", draft.title.as_str()),
            (Field::Content, "Content", draft.content.as_str()),
            (Field::Tag, "Tag", draft.tag.as_str()),
        ] {
            out.push_str(&format!("{label}: {value}\n"));
            if let Some(message) = errors.get(field) {
                out.push_str(&format!("  ! {message}\n"));
            }
        }
        out.push_str(&format!("Tags: {}\n", self.render_tags()));
        out
    }

    pub fn render_tags(&self) -> String {
        Tag::ALL.map(|t| t.as_str()).join(", ")
    }
}

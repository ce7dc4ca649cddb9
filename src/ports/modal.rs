// src/ports/modal.rs
use crate::constants::CANCEL_INPUT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalState {
    Open,
    Closed,
}

/// Terminal modal: frames its content while open, renders nothing when closed.
pub struct Modal {
    title: Option<String>,
    state: ModalState,
    on_close: Option<Box<dyn FnMut() + Send>>,
}

impl Modal {
    pub fn new() -> Self {
        Self {
            title: None,
            state: ModalState::Closed,
            on_close: None,
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn on_close(mut self, callback: impl FnMut() + Send + 'static) -> Self {
        self.on_close = Some(Box::new(callback));
        self
    }

    pub fn is_open(&self) -> bool {
        self.state == ModalState::Open
    }

    pub fn open(&mut self) {
        self.state = ModalState::Open;
    }

    /// Close the modal, invoking the close callback if it was open
    pub fn close(&mut self) {
        if self.state == ModalState::Closed {
            return;
        }
        self.state = ModalState::Closed;
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    pub fn render(&self, body: &str) -> Option<String> {
        if !self.is_open() {
            return None;
        }

        let affordance = format!("[{CANCEL_INPUT}] Close");
        let mut lines: Vec<&str> = Vec::new();
        if let Some(title) = &self.title {
            lines.push(title);
            lines.push("");
        }
        lines.extend(body.lines());

        let width = lines
            .iter()
            .map(|l| l.chars().count())
            .chain(std::iter::once(affordance.chars().count()))
            .max()
            .unwrap_or(0);

        let border = format!("+{}+", "-".repeat(width + 2));
        let mut out = String::new();
        out.push_str(&border);
        out.push('\n');
        for line in lines {
            out.push_str(&format!("| {} |\n", pad(line, width)));
        }
        out.push_str(&border);
        out.push('\n');
        out.push_str(&format!("  {affordance}\n"));
        Some(out)
    }
}

impl Default for Modal {
    fn default() -> Self {
        Self::new()
    }
}

fn pad(line: &str, width: usize) -> String {
    let len = line.chars().count();
    format!("{line}{}", " ".repeat(width.saturating_sub(len)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[test]
    fn given_closed_modal_when_rendering_then_renders_nothing() {
        let modal = Modal::new().with_title("Create note");

        assert_eq!(modal.render("anything at all"), None);
        assert_eq!(modal.render(""), None);
    }

    #[test]
    fn given_open_modal_when_rendering_then_contains_body_and_close_affordance() {
        let mut modal = Modal::new().with_title("Create note");
        modal.open();

        let out = modal.render("Title: Buy milk\nTag: Shopping").unwrap();

        assert!(out.contains("| Create note"));
        assert!(out.contains("| Title: Buy milk"));
        assert!(out.contains("| Tag: Shopping"));
        assert!(out.trim_end().ends_with("[:q] Close"));
    }

    #[test]
    fn given_open_modal_when_rendering_then_lines_share_one_width() {
        let mut modal = Modal::new();
        modal.open();

        let out = modal.render("short\na much longer line").unwrap();
        let framed: Vec<&str> = out.lines().filter(|l| l.starts_with(['|', '+'])).collect();

        assert!(framed.windows(2).all(|w| w[0].chars().count() == w[1].chars().count()));
    }

    #[test]
    fn given_open_modal_when_closing_then_callback_runs_once() {
        // Arrange
        let closed = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&closed);
        let mut modal = Modal::new().on_close(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        });
        modal.open();

        // Act
        modal.close();
        modal.close();

        // Assert
        assert!(!modal.is_open());
        assert_eq!(closed.load(Ordering::SeqCst), 1);
    }
}

// src/ports/mod.rs
pub mod modal;
pub mod prompt;
pub mod text;

pub use modal::Modal;
pub use prompt::FormPrompt;
pub use text::TextPresenter;

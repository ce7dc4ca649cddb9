// src/domain/note.rs
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::constants::DEFAULT_TAG;

/// Fixed category attached to every note
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Tag {
    Todo,
    Work,
    Personal,
    Meeting,
    Shopping,
}

impl Tag {
    pub const ALL: [Tag; 5] = [
        Tag::Todo,
        Tag::Work,
        Tag::Personal,
        Tag::Meeting,
        Tag::Shopping,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Tag::Todo => "Todo",
            Tag::Work => "Work",
            Tag::Personal => "Personal",
            Tag::Meeting => "Meeting",
            Tag::Shopping => "Shopping",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownTag(pub String);

impl fmt::Display for UnknownTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unknown tag '{}' (expected one of: {})",
            self.0,
            Tag::ALL.map(|t| t.as_str()).join(", ")
        )
    }
}

impl std::error::Error for UnknownTag {}

impl FromStr for Tag {
    type Err = UnknownTag;

    /// Exact, case-sensitive match against the tag names
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::ALL
            .into_iter()
            .find(|tag| tag.as_str() == s)
            .ok_or_else(|| UnknownTag(s.to_string()))
    }
}

/// Tag as stored by the server.
///
/// Notes created under the loose tag policy may carry a tag outside the
/// fixed set; those are kept verbatim instead of failing the whole response.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NoteTag {
    Known(Tag),
    Other(String),
}

impl NoteTag {
    pub fn as_str(&self) -> &str {
        match self {
            NoteTag::Known(tag) => tag.as_str(),
            NoteTag::Other(name) => name,
        }
    }

    pub fn known(&self) -> Option<Tag> {
        match self {
            NoteTag::Known(tag) => Some(*tag),
            NoteTag::Other(_) => None,
        }
    }
}

impl From<Tag> for NoteTag {
    fn from(tag: Tag) -> Self {
        NoteTag::Known(tag)
    }
}

impl PartialEq<Tag> for NoteTag {
    fn eq(&self, other: &Tag) -> bool {
        self.known() == Some(*other)
    }
}

impl fmt::Display for NoteTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A note as persisted by the remote service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub content: String,
    pub tag: NoteTag,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Unsaved candidate note held by the form.
///
/// The tag is kept as entered so that validation, not parsing, decides
/// whether it is acceptable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Draft {
    pub title: String,
    pub content: String,
    pub tag: String,
}

impl Draft {
    pub fn new(
        title: impl Into<String>,
        content: impl Into<String>,
        tag: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            tag: tag.into(),
        }
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self {
            title: String::new(),
            content: String::new(),
            tag: DEFAULT_TAG.to_string(),
        }
    }
}

/// One page of the remote note collection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotesPage {
    #[serde(alias = "data")]
    pub notes: Vec<Note>,
    pub total_pages: u32,
}

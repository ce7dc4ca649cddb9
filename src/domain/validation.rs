// src/domain/validation.rs
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::constants::{CONTENT_MIN_LEN, TITLE_MIN_LEN};
use crate::domain::{Draft, Tag};

/// Draft field a validation message belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Content,
    Tag,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Title => "title",
            Field::Content => "content",
            Field::Tag => "tag",
        })
    }
}

/// How strictly the tag field is checked
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TagPolicy {
    /// Tag must be one of [`Tag::ALL`]
    #[default]
    Strict,
    /// Any non-empty tag is accepted
    Loose,
}

/// Field name to human readable message. Empty means submittable.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ValidationErrors(BTreeMap<Field, String>);

impl ValidationErrors {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(field, msg)| (*field, msg.as_str()))
    }

    fn insert(&mut self, field: Field, message: impl Into<String>) {
        self.0.entry(field).or_insert_with(|| message.into());
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self
            .iter()
            .map(|(field, msg)| format!("{field}: {msg}"))
            .collect();
        f.write_str(&parts.join("; "))
    }
}

/// Rule set a draft must satisfy before it is sent to the service
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DraftSchema {
    pub tag_policy: TagPolicy,
}

impl DraftSchema {
    pub fn new(tag_policy: TagPolicy) -> Self {
        Self { tag_policy }
    }

    pub fn validate(&self, draft: &Draft) -> ValidationErrors {
        let mut errors = ValidationErrors::default();

        check_text(
            &mut errors,
            Field::Title,
            &draft.title,
            TITLE_MIN_LEN,
            "Title",
        );
        check_text(
            &mut errors,
            Field::Content,
            &draft.content,
            CONTENT_MIN_LEN,
            "Content",
        );

        if draft.tag.is_empty() {
            errors.insert(Field::Tag, "Tag is required");
        } else if self.tag_policy == TagPolicy::Strict && draft.tag.parse::<Tag>().is_err() {
            errors.insert(Field::Tag, "Invalid tag");
        }

        errors
    }
}

fn check_text(errors: &mut ValidationErrors, field: Field, value: &str, min: usize, label: &str) {
    if value.is_empty() {
        errors.insert(field, format!("{label} is required"));
    } else if value.chars().count() < min {
        errors.insert(field, format!("{label} must be at least {min} characters"));
    }
}

// src/util/testing.rs

use anyhow::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::env;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use tracing::{debug, info};
use tracing_subscriber::{
    filter::filter_fn,
    fmt::{self, format::FmtSpan},
    prelude::*,
    EnvFilter,
};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Draft, ListQuery, Note, NotesPage, Tag, TransportFailure};

/// Build a note with a fixed id, used across unit and integration tests
pub fn note(id: &str, title: &str, content: &str, tag: Tag) -> Note {
    Note {
        id: id.to_string(),
        title: title.to_string(),
        content: content.to_string(),
        tag: tag.into(),
        created_at: None,
        updated_at: None,
    }
}

/// In-memory repository for testing use cases that depend on NoteRepository
///
/// Behaves like a tiny NoteHub server: created notes get sequential ids,
/// list filters by search term and tag and paginates, delete removes.
/// Individual operations can be configured to fail.
///
/// # Examples
///
/// ```
/// use notehub::util::testing::{note, MockNoteRepository};
/// use notehub::domain::{Tag, TransportFailure};
///
/// let mock = MockNoteRepository::builder()
///     .with_note(note("n1", "Groceries", "Milk and eggs", Tag::Shopping))
///     .with_create_failure(TransportFailure::Network("offline".to_string()))
///     .build();
/// ```
pub struct MockNoteRepository {
    notes: Mutex<Vec<Note>>,
    next_id: AtomicUsize,
    create_calls: AtomicUsize,
    list_failure: Option<TransportFailure>,
    create_failure: Option<TransportFailure>,
    delete_failures: HashMap<String, TransportFailure>,
}

impl MockNoteRepository {
    pub fn builder() -> MockNoteRepositoryBuilder {
        MockNoteRepositoryBuilder::new()
    }

    /// Number of times create_note reached the repository
    pub fn create_calls(&self) -> usize {
        self.create_calls.load(Ordering::SeqCst)
    }

    pub fn stored_notes(&self) -> Vec<Note> {
        self.notes.lock().expect("mock lock poisoned").clone()
    }
}

#[async_trait]
impl NoteRepository for MockNoteRepository {
    async fn list_notes(&self, query: &ListQuery) -> Result<NotesPage, DomainError> {
        if let Some(failure) = &self.list_failure {
            return Err(DomainError::Fetch(failure.clone()));
        }

        let notes = self.notes.lock().expect("mock lock poisoned");
        let matching: Vec<Note> = notes
            .iter()
            .filter(|n| {
                query
                    .search_term()
                    .map_or(true, |s| n.title.contains(s) || n.content.contains(s))
            })
            .filter(|n| query.tag_filter().map_or(true, |t| n.tag == t))
            .cloned()
            .collect();

        let per_page = query.page_size() as usize;
        let total_pages = matching.len().div_ceil(per_page) as u32;
        let start = (query.page_number() as usize - 1) * per_page;

        Ok(NotesPage {
            notes: matching.into_iter().skip(start).take(per_page).collect(),
            total_pages,
        })
    }

    async fn create_note(&self, draft: &Draft) -> Result<Note, DomainError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(failure) = &self.create_failure {
            return Err(DomainError::Create(failure.clone()));
        }

        let tag = draft.tag.parse::<Tag>().map_err(|e| {
            DomainError::Create(TransportFailure::Rejected {
                status: 400,
                body: e.to_string(),
            })
        })?;
        let id = format!("mock-{}", self.next_id.fetch_add(1, Ordering::SeqCst) + 1);
        let created = note(&id, &draft.title, &draft.content, tag);

        self.notes
            .lock()
            .expect("mock lock poisoned")
            .push(created.clone());
        Ok(created)
    }

    async fn delete_note(&self, id: &str) -> Result<Note, DomainError> {
        if let Some(failure) = self.delete_failures.get(id) {
            return Err(DomainError::Delete {
                id: id.to_string(),
                failure: failure.clone(),
            });
        }

        let mut notes = self.notes.lock().expect("mock lock poisoned");
        match notes.iter().position(|n| n.id == id) {
            Some(index) => Ok(notes.remove(index)),
            None => Err(DomainError::Delete {
                id: id.to_string(),
                failure: TransportFailure::Rejected {
                    status: 404,
                    body: "Note not found".to_string(),
                },
            }),
        }
    }
}

/// Builder for MockNoteRepository
///
/// Provides a fluent interface for configuring mock behavior.
pub struct MockNoteRepositoryBuilder {
    notes: Vec<Note>,
    list_failure: Option<TransportFailure>,
    create_failure: Option<TransportFailure>,
    delete_failures: HashMap<String, TransportFailure>,
}

impl MockNoteRepositoryBuilder {
    pub fn new() -> Self {
        Self {
            notes: vec![],
            list_failure: None,
            create_failure: None,
            delete_failures: HashMap::new(),
        }
    }

    /// Seed a stored note
    pub fn with_note(mut self, note: Note) -> Self {
        self.notes.push(note);
        self
    }

    /// Make every list_notes call fail
    pub fn with_list_failure(mut self, failure: TransportFailure) -> Self {
        self.list_failure = Some(failure);
        self
    }

    /// Make every create_note call fail
    pub fn with_create_failure(mut self, failure: TransportFailure) -> Self {
        self.create_failure = Some(failure);
        self
    }

    /// Make delete_note fail for a specific ID
    pub fn with_delete_failure(mut self, id: &str, failure: TransportFailure) -> Self {
        self.delete_failures.insert(id.to_string(), failure);
        self
    }

    pub fn build(self) -> MockNoteRepository {
        MockNoteRepository {
            next_id: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            notes: Mutex::new(self.notes),
            list_failure: self.list_failure,
            create_failure: self.create_failure,
            delete_failures: self.delete_failures,
        }
    }
}

impl Default for MockNoteRepositoryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

pub fn init_test_setup() -> Result<()> {
    // Set up logging first
    setup_test_logging();

    info!("Test Setup complete");
    Ok(())
}

fn setup_test_logging() {
    debug!("INIT: Attempting logger init from testing.rs");
    if env::var("RUST_LOG").is_err() {
        env::set_var("RUST_LOG", "trace");
    }

    // Create a filter for noisy modules
    let noisy_modules = ["hyper", "hyper_util", "reqwest", "mio", "mockito"];
    let module_filter = filter_fn(move |metadata| {
        !noisy_modules
            .iter()
            .any(|name| metadata.target().starts_with(name))
    });

    // Set up the subscriber with environment filter
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("debug"));

    // Build and set the subscriber
    let subscriber = tracing_subscriber::registry().with(
        fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_thread_names(false)
            .with_span_events(FmtSpan::CLOSE)
            .with_filter(module_filter)
            .with_filter(env_filter),
    );

    // Only set if we haven't already set a global subscriber
    if tracing::dispatcher::has_been_set() {
        debug!("Tracing subscriber already set");
    } else {
        subscriber.try_init().unwrap_or_else(|e| {
            eprintln!("Error: Failed to set up logging: {}", e);
        });
    }
}

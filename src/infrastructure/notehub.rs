// src/infrastructure/notehub.rs
use async_trait::async_trait;
use reqwest::{Client, RequestBuilder, Url};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use tracing::{debug, error, info, instrument, warn};

use crate::application::NoteRepository;
use crate::domain::{DomainError, Draft, ListQuery, Note, NotesPage, TransportFailure};
use crate::infrastructure::config::ApiConfig;

/// HTTP client for the NoteHub REST API
#[derive(Clone)]
pub struct NotehubRepository {
    base_url: Url,
    token: Option<String>,
    client: Client,
}

#[derive(Debug, Serialize)]
struct CreateNoteBody<'a> {
    title: &'a str,
    content: &'a str,
    tag: &'a str,
}

impl NotehubRepository {
    pub fn new(config: &ApiConfig) -> Result<Self, DomainError> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            DomainError::Config(format!("Invalid base URL '{}': {}", config.base_url, e))
        })?;
        if base_url.cannot_be_a_base() {
            return Err(DomainError::Config(format!(
                "Base URL cannot carry a path: {}",
                config.base_url
            )));
        }

        let token = config.token.clone().filter(|t| !t.is_empty());
        if token.is_none() {
            warn!("No API token configured, requests will be sent unauthenticated");
        }

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .user_agent(concat!("notehub/", env!("CARGO_PKG_VERSION")))
            .build()
            .map_err(|e| DomainError::Config(format!("Failed to build HTTP client: {}", e)))?;

        debug!(%base_url, "Created NotehubRepository");
        Ok(Self {
            base_url,
            token,
            client,
        })
    }

    /// Base URL with the given path segments appended, each percent-encoded
    fn endpoint(&self, segments: &[&str]) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut path) = url.path_segments_mut() {
            path.pop_if_empty().extend(segments);
        }
        url
    }

    /// Send one request and decode the JSON reply, classifying any failure
    async fn send<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
        action: &'static str,
    ) -> Result<T, TransportFailure> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };

        let response = request.send().await.map_err(|e| {
            error!(action, error = %e, "No response from server");
            TransportFailure::Network(e.to_string())
        })?;

        let status = response.status();
        if !status.is_success() {
            let body = match response.text().await {
                Ok(body) => body,
                Err(e) => {
                    warn!(action, error = %e, "Failed to read rejection body");
                    String::new()
                }
            };
            error!(action, status = status.as_u16(), %body, "Server rejected request");
            return Err(TransportFailure::Rejected {
                status: status.as_u16(),
                body,
            });
        }

        let bytes = response.bytes().await.map_err(|e| {
            error!(action, error = %e, "Failed to read response body");
            TransportFailure::Network(e.to_string())
        })?;

        serde_json::from_slice(&bytes).map_err(|e| {
            error!(action, error = %e, "Unexpected response body");
            TransportFailure::Malformed(e.to_string())
        })
    }
}

#[async_trait]
impl NoteRepository for NotehubRepository {
    #[instrument(level = "debug", skip(self))]
    async fn list_notes(&self, query: &ListQuery) -> Result<NotesPage, DomainError> {
        let request = self
            .client
            .get(self.endpoint(&["notes"]))
            .query(&query.to_params());

        let page: NotesPage = self
            .send(request, "fetching notes")
            .await
            .map_err(DomainError::Fetch)?;

        debug!(
            count = page.notes.len(),
            total_pages = page.total_pages,
            "Fetched notes"
        );
        Ok(page)
    }

    #[instrument(level = "debug", skip(self, draft), fields(title = %draft.title))]
    async fn create_note(&self, draft: &Draft) -> Result<Note, DomainError> {
        let body = CreateNoteBody {
            title: &draft.title,
            content: &draft.content,
            tag: &draft.tag,
        };
        let request = self.client.post(self.endpoint(&["notes"])).json(&body);

        let note: Note = self
            .send(request, "creating note")
            .await
            .map_err(DomainError::Create)?;

        info!(note_id = %note.id, "Successfully created note");
        Ok(note)
    }

    #[instrument(level = "debug", skip(self))]
    async fn delete_note(&self, id: &str) -> Result<Note, DomainError> {
        if id.trim().is_empty() {
            return Err(DomainError::EmptyNoteId);
        }
        debug!(note_id = id, "Attempting to delete note");

        let request = self.client.delete(self.endpoint(&["notes", id]));
        let note: Note = self
            .send(request, "deleting note")
            .await
            .map_err(|failure| DomainError::Delete {
                id: id.to_string(),
                failure,
            })?;

        info!(note_id = %note.id, "Successfully deleted note");
        Ok(note)
    }
}

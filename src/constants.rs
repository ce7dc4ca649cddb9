// src/constants.rs
//
// Application-wide constants for the NoteHub client.

/// Base URL of the public NoteHub API.
///
/// Used in: `infrastructure/config.rs`
pub const DEFAULT_BASE_URL: &str = "https://notehub-public.goit.study/api";

/// Environment variable holding the bearer token.
pub const TOKEN_ENV_VAR: &str = "NOTEHUB_TOKEN";

/// Environment variable overriding the API base URL.
pub const BASE_URL_ENV_VAR: &str = "NOTEHUB_BASE_URL";

/// Page size used when the caller does not ask for one.
pub const DEFAULT_PER_PAGE: u32 = 12;

/// Per-request timeout applied by the HTTP client.
///
/// A request that exceeds it fails as a network failure. There is no retry.
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum number of characters in a note title.
pub const TITLE_MIN_LEN: usize = 3;

/// Minimum number of characters in note content.
pub const CONTENT_MIN_LEN: usize = 5;

/// Tag preselected in a fresh draft.
pub const DEFAULT_TAG: &str = "Todo";

/// Input that cancels the interactive form at any prompt.
pub const CANCEL_INPUT: &str = ":q";

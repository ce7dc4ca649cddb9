// src/domain/query.rs
use crate::constants::DEFAULT_PER_PAGE;
use crate::domain::Tag;

/// Parameters of a list request. Page numbers are 1-based.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListQuery {
    page: u32,
    per_page: u32,
    search: Option<String>,
    tag: Option<Tag>,
}

impl ListQuery {
    pub fn new() -> Self {
        Self {
            page: 1,
            per_page: DEFAULT_PER_PAGE,
            search: None,
            tag: None,
        }
    }

    pub fn page(mut self, page: u32) -> Self {
        self.page = page.max(1);
        self
    }

    pub fn per_page(mut self, per_page: u32) -> Self {
        self.per_page = per_page.max(1);
        self
    }

    /// Trimmed search term; blank input clears the search
    pub fn search(mut self, search: Option<&str>) -> Self {
        self.search = search
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string);
        self
    }

    pub fn tag(mut self, tag: Option<Tag>) -> Self {
        self.tag = tag;
        self
    }

    pub fn page_number(&self) -> u32 {
        self.page
    }

    pub fn page_size(&self) -> u32 {
        self.per_page
    }

    pub fn search_term(&self) -> Option<&str> {
        self.search.as_deref()
    }

    pub fn tag_filter(&self) -> Option<Tag> {
        self.tag
    }

    /// Query string pairs in the form the notes endpoint expects
    pub fn to_params(&self) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("page", self.page.to_string()),
            ("perPage", self.per_page.to_string()),
        ];
        if let Some(search) = &self.search {
            params.push(("search", search.clone()));
        }
        if let Some(tag) = self.tag {
            params.push(("tag", tag.to_string()));
        }
        params
    }
}

impl Default for ListQuery {
    fn default() -> Self {
        Self::new()
    }
}

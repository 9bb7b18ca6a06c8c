//! Gallery state machine
//!
//! ```text
//! Idle ──begin_loading──▶ Loading ──complete──▶ Ready { selected: None }
//!                            │                     │  ▲
//!                            │           open_detail  close_detail
//!                            │                     ▼  │
//!                            │                  Ready { selected: Some(_) }
//!                            └──fail──▶ Error
//! ```
//!
//! `Error` is terminal. Recovering means building a new [`GalleryState`].

use crate::error::{CoreError, CoreResult};
use crate::types::LocalizedCharacter;

use super::filter::filter_indices;
use super::pagination::{PAGE_SIZE, is_valid_page, paginate, total_pages};

/// Lifecycle of one gallery load.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum GalleryState {
    /// Nothing requested yet
    #[default]
    Idle,
    /// Catalog fetch in flight
    Loading,
    /// Catalog loaded
    Ready(LoadedGallery),
    /// Catalog could not be loaded
    Error { message: String },
}

impl GalleryState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lowercase state name, used in transition errors and logs.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Loading => "loading",
            Self::Ready(_) => "ready",
            Self::Error { .. } => "error",
        }
    }

    fn invalid(&self, action: &'static str) -> CoreError {
        CoreError::InvalidTransition {
            state: self.name(),
            action,
        }
    }

    /// `Idle → Loading`
    pub fn begin_loading(&mut self) -> CoreResult<()> {
        match self {
            Self::Idle => {
                *self = Self::Loading;
                Ok(())
            }
            _ => Err(self.invalid("begin loading")),
        }
    }

    /// `Loading → Ready` with the translated catalog.
    pub fn complete(&mut self, characters: Vec<LocalizedCharacter>) -> CoreResult<()> {
        match self {
            Self::Loading => {
                *self = Self::Ready(LoadedGallery::new(characters));
                Ok(())
            }
            _ => Err(self.invalid("complete loading")),
        }
    }

    /// `Loading → Error`
    pub fn fail(&mut self, message: impl Into<String>) -> CoreResult<()> {
        match self {
            Self::Loading => {
                *self = Self::Error {
                    message: message.into(),
                };
                Ok(())
            }
            _ => Err(self.invalid("fail loading")),
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn gallery(&self) -> Option<&LoadedGallery> {
        match self {
            Self::Ready(gallery) => Some(gallery),
            _ => None,
        }
    }

    /// The loaded catalog; empty in every state but `Ready`.
    pub fn characters(&self) -> &[LocalizedCharacter] {
        self.gallery()
            .map(LoadedGallery::characters)
            .unwrap_or_default()
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            Self::Error { message } => Some(message),
            _ => None,
        }
    }

    /// `Ready → Ready { selected: Some(index) }`
    pub fn open_detail(&mut self, index: usize) -> CoreResult<()> {
        match self {
            Self::Ready(gallery) => gallery.open_detail(index),
            _ => Err(self.invalid("open detail")),
        }
    }

    /// `Ready { selected: Some(_) } → Ready { selected: None }`
    pub fn close_detail(&mut self) -> CoreResult<()> {
        match self {
            Self::Ready(gallery) => {
                gallery.close_detail();
                Ok(())
            }
            _ => Err(self.invalid("close detail")),
        }
    }
}

/// A loaded catalog with the current search, page and selection.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadedGallery {
    characters: Vec<LocalizedCharacter>,
    search_query: String,
    current_page: usize,
    selected: Option<usize>,
    /// Catalog positions matching `search_query`
    filtered: Vec<usize>,
}

impl LoadedGallery {
    pub fn new(characters: Vec<LocalizedCharacter>) -> Self {
        let filtered = (0..characters.len()).collect();
        Self {
            characters,
            search_query: String::new(),
            current_page: 1,
            selected: None,
            filtered,
        }
    }

    pub fn characters(&self) -> &[LocalizedCharacter] {
        &self.characters
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    /// Current 1-based page.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.filtered.len(), PAGE_SIZE)
    }

    /// Number of characters matching the search.
    pub fn filtered_count(&self) -> usize {
        self.filtered.len()
    }

    /// Characters matching the search, in catalog order.
    pub fn filtered(&self) -> impl Iterator<Item = &LocalizedCharacter> + '_ {
        self.filtered.iter().filter_map(|&i| self.characters.get(i))
    }

    /// Replace the search query and go back to the first page.
    ///
    /// The open detail, if any, is kept.
    pub fn set_search_query(&mut self, query: impl Into<String>) {
        let query = query.into();
        if query == self.search_query {
            return;
        }
        self.filtered = filter_indices(&self.characters, &query);
        self.search_query = query;
        self.current_page = 1;
    }

    /// Jump to `page`. Returns `false` and stays put when out of range.
    pub fn go_to_page(&mut self, page: usize) -> bool {
        if !is_valid_page(page, self.filtered.len(), PAGE_SIZE) {
            return false;
        }
        self.current_page = page;
        true
    }

    pub fn next_page(&mut self) -> bool {
        self.go_to_page(self.current_page + 1)
    }

    pub fn previous_page(&mut self) -> bool {
        self.go_to_page(self.current_page.saturating_sub(1))
    }

    pub fn has_previous_page(&self) -> bool {
        self.current_page > 1
    }

    pub fn has_next_page(&self) -> bool {
        self.current_page < self.total_pages()
    }

    /// Characters on the current page with their catalog positions.
    pub fn page_entries(&self) -> Vec<(usize, &LocalizedCharacter)> {
        paginate(&self.filtered, self.current_page, PAGE_SIZE)
            .iter()
            .filter_map(|&i| self.characters.get(i).map(|c| (i, c)))
            .collect()
    }

    /// Open the detail view for the character at catalog position `index`.
    ///
    /// Replaces any previous selection.
    pub fn open_detail(&mut self, index: usize) -> CoreResult<()> {
        if index >= self.characters.len() {
            return Err(CoreError::CharacterNotFound(index));
        }
        self.selected = Some(index);
        Ok(())
    }

    /// Close the detail view. Returns whether one was open.
    pub fn close_detail(&mut self) -> bool {
        self.selected.take().is_some()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected
    }

    pub fn selected(&self) -> Option<&LocalizedCharacter> {
        self.selected.and_then(|i| self.characters.get(i))
    }
}

//! Catalogue list state and book-card labels.
//!
//! DESIGN
//! ======
//! Search results arrive asynchronously and may land out of order. Each
//! fetch is stamped with a generation; only the latest one may replace the
//! list.

#[cfg(test)]
#[path = "books_test.rs"]
mod books_test;

use crate::net::types::Book;

/// Delay between the last keystroke and the search request.
pub const SEARCH_DEBOUNCE_MS: u32 = 400;

/// Catalogue page state.
#[derive(Clone, Debug, Default)]
pub struct BooksState {
    pub items: Vec<Book>,
    pub loading: bool,
    pub error: Option<String>,
    generation: u64,
}

impl BooksState {
    /// Start a fetch and return its generation stamp.
    pub fn begin_fetch(&mut self) -> u64 {
        self.generation += 1;
        self.loading = true;
        self.generation
    }

    pub fn is_current(&self, generation: u64) -> bool {
        self.generation == generation
    }

    /// Apply a finished fetch. Returns `false` if a newer fetch superseded it.
    pub fn finish_fetch(&mut self, generation: u64, result: Result<Vec<Book>, String>) -> bool {
        if !self.is_current(generation) {
            return false;
        }
        self.loading = false;
        match result {
            Ok(items) => {
                self.items = items;
                self.error = None;
            }
            Err(message) => self.error = Some(message),
        }
        true
    }

    pub fn remove(&mut self, book_id: &str) {
        self.items.retain(|b| b.id != book_id);
    }
}

/// `"✓ Available (3)"` or `"Out of Stock"`.
pub fn availability_label(book: &Book) -> String {
    if book.is_available() { format!("✓ Available ({})", book.quantity) } else { "Out of Stock".to_owned() }
}

//! Address search with derived suggestions.

/// Minimum query length before suggestions appear.
pub const MIN_QUERY_LEN: usize = 3;

/// Maximum number of suggestions shown at once.
pub const SUGGESTION_LIMIT: usize = 5;

/// Query state for the asset search box.
///
/// Suggestions are derived on read (case-insensitive substring over the
/// fixture address book, capped), never stored, so there is no cached
/// result to drift out of sync with the query.
#[derive(Debug, Clone, Default)]
pub struct AddressSearch {
    query: String,
}

impl AddressSearch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
    }

    pub fn clear(&mut self) {
        self.query.clear();
    }

    /// Whether the query is long enough to produce suggestions.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.query.chars().count() > MIN_QUERY_LEN - 1
    }

    /// Matching addresses, at most [`SUGGESTION_LIMIT`], empty below the
    /// minimum query length.
    #[must_use]
    pub fn suggestions<'a>(&self, address_book: &[&'a str]) -> Vec<&'a str> {
        if !self.is_active() {
            return Vec::new();
        }
        let needle = self.query.to_lowercase();
        address_book
            .iter()
            .filter(|addr| addr.to_lowercase().contains(&needle))
            .take(SUGGESTION_LIMIT)
            .copied()
            .collect()
    }
}

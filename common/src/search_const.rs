//! Fixed tuning constants for the dataset search page.

/// Results requested per page. The remote API caps a page at this size.
pub const PAGE_SIZE: u64 = 9;

/// Trailing-edge debounce applied to the search text input.
pub const SEARCH_DEBOUNCE_MS: u32 = 500;

/// Upper bound on how long a search request may stay in flight before it
/// is reported as a network failure.
pub const SEARCH_TIMEOUT_MS: u32 = 30_000;

/// At most this many options are listed per facet section in the sidebar.
pub const MAX_FACET_OPTIONS: usize = 10;

/// Descriptions longer than this are collapsed behind "See More".
pub const DESCRIPTION_PREVIEW_CHARS: usize = 150;

/// The remote dataset search endpoint.
pub const SEARCH_ENDPOINT: &str = "https://api.datakeep.civicdays.in/api/search/dataset/";

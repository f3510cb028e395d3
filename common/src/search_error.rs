//! Errors surfaced by the search fetch client.

use thiserror::Error;

/// A failed search request. Cloneable so the listing page can keep the
/// error in its state and re-render it until the user retries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SearchApiError {
    /// The service answered with a non-2xx HTTP status.
    #[error("the search service returned HTTP status {0}")]
    RequestFailed(u16),

    /// Transport failure, timeout, or an undecodable response body.
    #[error("could not reach the search service: {0}")]
    Network(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_are_human_readable() {
        assert_eq!(
            SearchApiError::RequestFailed(503).to_string(),
            "the search service returned HTTP status 503"
        );
        assert_eq!(
            SearchApiError::Network("connection reset".into()).to_string(),
            "could not reach the search service: connection reset"
        );
    }
}

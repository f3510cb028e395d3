//! Fetch client for the dataset search endpoint.

use dioxus::logger::tracing;
use futures_util::future::{Either, select};
use futures_util::pin_mut;
use gloo_timers::future::TimeoutFuture;

use common::search_const::{SEARCH_ENDPOINT, SEARCH_TIMEOUT_MS};
use common::search_error::SearchApiError;
use common::search_query::SearchQuery;
use common::search_result::SearchResponse;

/// Run one search request for the given state.
///
/// Non-2xx statuses map to [`SearchApiError::RequestFailed`]; transport
/// failures, timeouts, and undecodable bodies map to
/// [`SearchApiError::Network`]. A missing field in an otherwise valid
/// body decodes to its default, so a partial response still succeeds.
pub async fn search_datasets(query: &SearchQuery) -> Result<SearchResponse, SearchApiError> {
    let pairs = query.to_query_pairs();
    tracing::debug!(?pairs, "issuing dataset search request");

    let request = reqwest::Client::new()
        .get(SEARCH_ENDPOINT)
        .query(&pairs)
        .send();
    pin_mut!(request);

    // reqwest has no request timeout on wasm, so race the request
    // against a timer instead.
    let timeout = TimeoutFuture::new(SEARCH_TIMEOUT_MS);
    pin_mut!(timeout);
    let response = match select(request, timeout).await {
        Either::Left((response, _)) => {
            response.map_err(|error| SearchApiError::Network(error.to_string()))?
        }
        Either::Right(((), _)) => {
            return Err(SearchApiError::Network(format!(
                "no response within {} seconds",
                SEARCH_TIMEOUT_MS / 1000
            )));
        }
    };

    let status = response.status();
    if !status.is_success() {
        return Err(SearchApiError::RequestFailed(status.as_u16()));
    }

    let body = response
        .text()
        .await
        .map_err(|error| SearchApiError::Network(error.to_string()))?;
    serde_json::from_str(&body)
        .map_err(|error| SearchApiError::Network(format!("invalid response body: {error}")))
}

//! The fetch-cycle state machine that reconciles responses into
//! renderable state.
//!
//! Requests may resolve out of order: a change to the query can fire a
//! new fetch while an earlier one is still in flight. Each request is
//! issued a sequence ticket by [`SearchCycle::begin`], and
//! [`SearchCycle::resolve`] discards any response that does not present
//! the latest ticket, so the display can never regress to an older
//! query's data.

use crate::search_error::SearchApiError;
use crate::search_result::{Aggregations, Dataset, SearchResponse};

/// Renderable state of the current fetch cycle.
///
/// `Loading` is distinct from an empty success and from an error; the
/// view maps the three to skeletons, the empty-state message, and the
/// error panel respectively.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum FetchPhase {
    #[default]
    Loading,
    Failed(SearchApiError),
    Loaded { results: Vec<Dataset>, total: u64 },
}

/// Owns the fetch lifecycle: phase, request sequence, and the facet
/// aggregation snapshot of the last successful fetch.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchCycle {
    seq: u64,
    phase: FetchPhase,
    aggregations: Aggregations,
}

impl SearchCycle {
    /// Start a new request: enter `Loading` (dropping any previous error
    /// or results) and return the ticket the response must present to
    /// [`resolve`](Self::resolve).
    pub fn begin(&mut self) -> u64 {
        self.seq += 1;
        self.phase = FetchPhase::Loading;
        self.seq
    }

    /// Apply a response. Returns `false` without touching any state when
    /// `seq` is not the most recently issued ticket.
    ///
    /// On success, results, total, and the aggregation snapshot are
    /// replaced wholesale. On failure the error is stored and no results
    /// are shown, but the aggregation snapshot keeps the last successful
    /// values so the sidebar options stay usable.
    pub fn resolve(
        &mut self,
        seq: u64,
        outcome: Result<SearchResponse, SearchApiError>,
    ) -> bool {
        if seq != self.seq {
            return false;
        }
        match outcome {
            Ok(response) => {
                self.aggregations = response.aggregations;
                self.phase = FetchPhase::Loaded {
                    results: response.results,
                    total: response.total,
                };
            }
            Err(error) => {
                self.phase = FetchPhase::Failed(error);
            }
        }
        true
    }

    pub fn phase(&self) -> &FetchPhase {
        &self.phase
    }

    /// Facet options derived from the last successful fetch, recomputed
    /// wholesale each cycle.
    pub fn aggregations(&self) -> &Aggregations {
        &self.aggregations
    }

    /// Total matching count, zero unless the current phase is a success.
    pub fn total(&self) -> u64 {
        match &self.phase {
            FetchPhase::Loaded { total, .. } => *total,
            _ => 0,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, FetchPhase::Loading)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(titles: &[&str], total: u64) -> SearchResponse {
        SearchResponse {
            results: titles
                .iter()
                .map(|title| Dataset {
                    title: title.to_string(),
                    ..Dataset::default()
                })
                .collect(),
            total,
            aggregations: Aggregations {
                sectors: [("Climate".to_string(), total)].into(),
                ..Aggregations::default()
            },
        }
    }

    #[test]
    fn success_replaces_results_total_and_aggregations() {
        let mut cycle = SearchCycle::default();
        let seq = cycle.begin();
        assert!(cycle.is_loading());

        assert!(cycle.resolve(seq, Ok(response(&["a", "b"], 20))));
        match cycle.phase() {
            FetchPhase::Loaded { results, total } => {
                assert_eq!(results.len(), 2);
                assert_eq!(*total, 20);
            }
            other => panic!("unexpected phase {other:?}"),
        }
        assert_eq!(cycle.total(), 20);
        assert_eq!(cycle.aggregations().sectors.get("Climate"), Some(&20));
    }

    #[test]
    fn stale_response_is_discarded_regardless_of_resolution_order() {
        let mut cycle = SearchCycle::default();
        let first = cycle.begin();
        let second = cycle.begin();

        // The later request resolves first; the earlier one must not
        // overwrite it afterwards.
        assert!(cycle.resolve(second, Ok(response(&["new"], 1))));
        assert!(!cycle.resolve(first, Ok(response(&["old"], 99))));

        match cycle.phase() {
            FetchPhase::Loaded { results, total } => {
                assert_eq!(results[0].title, "new");
                assert_eq!(*total, 1);
            }
            other => panic!("unexpected phase {other:?}"),
        }
    }

    #[test]
    fn stale_failure_cannot_clobber_a_fresh_success() {
        let mut cycle = SearchCycle::default();
        let first = cycle.begin();
        let second = cycle.begin();

        assert!(cycle.resolve(second, Ok(response(&["fresh"], 3))));
        assert!(!cycle.resolve(first, Err(SearchApiError::RequestFailed(500))));
        assert_eq!(cycle.total(), 3);
    }

    #[test]
    fn failure_clears_results_but_keeps_the_aggregation_snapshot() {
        let mut cycle = SearchCycle::default();
        let seq = cycle.begin();
        cycle.resolve(seq, Ok(response(&["a"], 10)));

        let seq = cycle.begin();
        assert!(cycle.resolve(seq, Err(SearchApiError::Network("offline".into()))));

        assert_eq!(
            cycle.phase(),
            &FetchPhase::Failed(SearchApiError::Network("offline".into()))
        );
        assert_eq!(cycle.total(), 0);
        // Options derived from the last success remain available.
        assert_eq!(cycle.aggregations().sectors.get("Climate"), Some(&10));
    }

    #[test]
    fn a_new_request_clears_the_previous_error() {
        let mut cycle = SearchCycle::default();
        let seq = cycle.begin();
        cycle.resolve(seq, Err(SearchApiError::RequestFailed(502)));

        cycle.begin();
        assert!(cycle.is_loading());
    }

    #[test]
    fn retry_after_failure_recovers_without_changing_the_query() {
        let mut query = crate::search_query::SearchQuery::default();
        query.set_query_string("health".to_string());
        let pairs_before = query.to_query_pairs();

        let mut cycle = SearchCycle::default();
        let seq = cycle.begin();
        assert!(cycle.resolve(seq, Err(SearchApiError::Network("offline".into()))));

        // A retry re-issues the fetch for the same state: new ticket,
        // identical request parameters.
        let retry_seq = cycle.begin();
        assert!(retry_seq > seq);
        assert_eq!(query.to_query_pairs(), pairs_before);
        assert!(cycle.is_loading());

        assert!(cycle.resolve(retry_seq, Ok(response(&["a"], 5))));
        assert_eq!(cycle.total(), 5);
    }

    #[test]
    fn empty_success_is_not_an_error() {
        let mut cycle = SearchCycle::default();
        let seq = cycle.begin();
        assert!(cycle.resolve(seq, Ok(SearchResponse::default())));
        assert_eq!(
            cycle.phase(),
            &FetchPhase::Loaded {
                results: Vec::new(),
                total: 0
            }
        );
    }
}

use catalog_models::{Hit, MediaKind};
use tracing::debug;

/// Queries shorter than this (after trimming) are never submitted.
pub const MIN_QUERY_LEN: usize = 2;

/// Token tying an in-flight search to the session state it started
/// from. A response that comes back after a newer search began carries
/// a stale ticket and is discarded instead of overwriting newer state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchTicket(u64);

#[derive(Debug)]
pub enum SearchOutcome {
    Results(Vec<Hit>),
    Failed(String),
}

/// Transient per-screen search state: active media kind, query text,
/// result list, loading flag, error message. Never persisted.
pub struct SearchSession {
    kind: MediaKind,
    query: String,
    hits: Vec<Hit>,
    searching: bool,
    error: Option<String>,
    seq: u64,
}

impl SearchSession {
    pub fn new(kind: MediaKind) -> Self {
        Self {
            kind,
            query: String::new(),
            hits: Vec::new(),
            searching: false,
            error: None,
            seq: 0,
        }
    }

    pub fn kind(&self) -> MediaKind {
        self.kind
    }

    /// Switch the active media kind. Does not re-run the last query.
    pub fn set_kind(&mut self, kind: MediaKind) {
        self.kind = kind;
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn set_query(&mut self, query: &str) {
        self.query = query.to_string();
    }

    pub fn hits(&self) -> &[Hit] {
        &self.hits
    }

    pub fn is_searching(&self) -> bool {
        self.searching
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub fn can_search(&self) -> bool {
        self.query.trim().chars().count() >= MIN_QUERY_LEN
    }

    /// Start a search if the query qualifies. Too-short queries are
    /// inert: no request, no error, `None` back.
    pub fn begin_search(&mut self) -> Option<SearchTicket> {
        if !self.can_search() {
            return None;
        }
        self.seq += 1;
        self.searching = true;
        self.error = None;
        Some(SearchTicket(self.seq))
    }

    /// Apply a finished search. Returns false (and changes nothing) when
    /// the ticket was superseded by a newer `begin_search`.
    pub fn finish_search(&mut self, ticket: SearchTicket, outcome: SearchOutcome) -> bool {
        if ticket.0 != self.seq {
            debug!(
                "Discarding stale search response (ticket {} != current {})",
                ticket.0, self.seq
            );
            return false;
        }
        self.searching = false;
        match outcome {
            SearchOutcome::Results(hits) => {
                self.hits = hits;
                self.error = None;
            }
            SearchOutcome::Failed(message) => {
                self.error = Some(message);
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hit(id: &str) -> Hit {
        Hit::Movie {
            id: id.to_string(),
            title: id.to_string(),
            year: None,
            poster: None,
        }
    }

    #[test]
    fn test_short_query_is_inert() {
        let mut session = SearchSession::new(MediaKind::Movie);
        for q in ["", "a", " a ", "  "] {
            session.set_query(q);
            assert!(!session.can_search());
            assert!(session.begin_search().is_none());
            assert!(!session.is_searching());
            assert!(session.error().is_none());
        }
    }

    #[test]
    fn test_two_trimmed_chars_qualify() {
        let mut session = SearchSession::new(MediaKind::Movie);
        session.set_query("  it  ");
        assert!(session.can_search());
    }

    #[test]
    fn test_search_lifecycle() {
        let mut session = SearchSession::new(MediaKind::Movie);
        session.set_query("interstellar");

        let ticket = session.begin_search().unwrap();
        assert!(session.is_searching());

        assert!(session.finish_search(ticket, SearchOutcome::Results(vec![hit("tt0816692")])));
        assert!(!session.is_searching());
        assert_eq!(session.hits().len(), 1);
        assert!(session.error().is_none());
    }

    #[test]
    fn test_zero_results_is_not_an_error() {
        let mut session = SearchSession::new(MediaKind::Book);
        session.set_query("zzzz");
        let ticket = session.begin_search().unwrap();
        session.finish_search(ticket, SearchOutcome::Results(Vec::new()));
        assert!(session.hits().is_empty());
        assert!(session.error().is_none());
    }

    #[test]
    fn test_failure_stores_message_and_clears_searching() {
        let mut session = SearchSession::new(MediaKind::Movie);
        session.set_query("interstellar");
        let ticket = session.begin_search().unwrap();
        session.finish_search(ticket, SearchOutcome::Failed("network error".to_string()));
        assert!(!session.is_searching());
        assert_eq!(session.error(), Some("network error"));
    }

    #[test]
    fn test_new_search_clears_prior_error() {
        let mut session = SearchSession::new(MediaKind::Movie);
        session.set_query("interstellar");
        let ticket = session.begin_search().unwrap();
        session.finish_search(ticket, SearchOutcome::Failed("boom".to_string()));

        session.begin_search().unwrap();
        assert!(session.error().is_none());
    }

    #[test]
    fn test_stale_response_is_discarded() {
        let mut session = SearchSession::new(MediaKind::Movie);
        session.set_query("first");
        let slow = session.begin_search().unwrap();

        session.set_query("second");
        let fast = session.begin_search().unwrap();
        assert!(session.finish_search(fast, SearchOutcome::Results(vec![hit("tt2")])));

        // The slow first response arrives late and must not overwrite
        assert!(!session.finish_search(slow, SearchOutcome::Results(vec![hit("tt1")])));
        assert_eq!(session.hits().len(), 1);
        assert_eq!(session.hits()[0].id(), "tt2");
        assert!(!session.is_searching());
    }

    #[test]
    fn test_kind_switch_keeps_results_until_next_search() {
        let mut session = SearchSession::new(MediaKind::Movie);
        session.set_query("interstellar");
        let ticket = session.begin_search().unwrap();
        session.finish_search(ticket, SearchOutcome::Results(vec![hit("tt0816692")]));

        session.set_kind(MediaKind::Book);
        assert_eq!(session.kind(), MediaKind::Book);
        assert_eq!(session.hits().len(), 1);
        assert!(!session.is_searching());
    }
}

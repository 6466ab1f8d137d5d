use catalog_models::{Details, MediaKind};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DetailsTicket(u64);

/// Loading state for the details view, independent of the search flow.
/// Every open re-fetches; closing drops the selection but any cached
/// details simply get replaced on the next open.
pub struct DetailsPane {
    selected: Option<(MediaKind, String)>,
    details: Option<Details>,
    loading: bool,
    seq: u64,
}

impl DetailsPane {
    pub fn new() -> Self {
        Self {
            selected: None,
            details: None,
            loading: false,
            seq: 0,
        }
    }

    pub fn selected(&self) -> Option<(MediaKind, &str)> {
        self.selected.as_ref().map(|(kind, id)| (*kind, id.as_str()))
    }

    pub fn details(&self) -> Option<&Details> {
        self.details.as_ref()
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Select a hit and begin a fresh fetch: prior details are cleared
    /// so a closed-and-reopened view never shows stale content.
    pub fn open(&mut self, kind: MediaKind, id: &str) -> DetailsTicket {
        self.selected = Some((kind, id.to_string()));
        self.details = None;
        self.loading = true;
        self.seq += 1;
        DetailsTicket(self.seq)
    }

    /// Store a fetch result. `None` is valid content rendered as "no
    /// details available". Stale tickets are discarded.
    pub fn resolve(&mut self, ticket: DetailsTicket, details: Option<Details>) -> bool {
        if ticket.0 != self.seq {
            debug!(
                "Discarding stale details response (ticket {} != current {})",
                ticket.0, self.seq
            );
            return false;
        }
        self.loading = false;
        self.details = details;
        true
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}

impl Default for DetailsPane {
    fn default() -> Self {
        Self::new()
    }
}

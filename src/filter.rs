//! Filtering logic for the list view.
//!
//! Pure derivation of the visible subset from the cache's working set plus
//! user-selected predicates. No rendering surface involved.

use std::collections::HashSet;

use crate::types::{Ticket, TicketStatus};

/// User-selected list filters: a status set and a search string.
#[derive(Debug, Clone, Default)]
pub struct FilterState {
    pub selected_statuses: HashSet<TicketStatus>,
    pub search: String,
}

impl FilterState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_status(&mut self, status: TicketStatus) {
        if !self.selected_statuses.remove(&status) {
            self.selected_statuses.insert(status);
        }
    }

    pub fn clear(&mut self) {
        self.selected_statuses.clear();
        self.search.clear();
    }

    pub fn has_filters(&self) -> bool {
        !self.selected_statuses.is_empty() || !self.search.trim().is_empty()
    }
}

/// Derives the visible subset of `tickets`.
///
/// An empty status set passes every status; a non-empty set is a membership
/// test. The search string is a case-insensitive substring match against the
/// title only (blank matches everything). The two predicates AND together,
/// and input order is preserved.
pub fn visible<'a>(
    tickets: &'a [Ticket],
    selected_statuses: &HashSet<TicketStatus>,
    search: &str,
) -> Vec<&'a Ticket> {
    let query = search.trim().to_lowercase();

    tickets
        .iter()
        .filter(|t| selected_statuses.is_empty() || selected_statuses.contains(&t.status))
        .filter(|t| query.is_empty() || t.title.to_lowercase().contains(&query))
        .collect()
}

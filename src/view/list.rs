//! List view model: the filtered working set in cache order.

use std::collections::HashSet;

use crate::cache::TicketCache;
use crate::filter::{FilterState, visible};
use crate::types::{Ticket, TicketStatus};

#[derive(Debug, Clone)]
pub struct ListViewModel {
    pub rows: Vec<Ticket>,
    /// Number of visible tickets after filtering.
    pub visible_count: usize,
    /// Size of the whole working set.
    pub total_count: usize,
    pub active_statuses: HashSet<TicketStatus>,
    pub search: String,
}

/// Derives the list view from the cache plus filter state. Row order is the
/// cache's order (descending `updated_at`); filtering never reorders.
pub fn compute_list_view_model(cache: &TicketCache, filters: &FilterState) -> ListViewModel {
    let rows: Vec<Ticket> = visible(cache.tickets(), &filters.selected_statuses, &filters.search)
        .into_iter()
        .cloned()
        .collect();

    ListViewModel {
        visible_count: rows.len(),
        total_count: cache.len(),
        rows,
        active_statuses: filters.selected_statuses.clone(),
        search: filters.search.clone(),
    }
}

//! Board view model: one column per status, cards grouped by the cache's
//! working set.
//!
//! `compute_column` exists so that after a transition only the two affected
//! columns (source and destination status) need recomputing; a full reload
//! goes through `compute_board_view_model`.

use crate::cache::TicketCache;
use crate::types::{ALL_STATUSES, Ticket, TicketStatus};

/// The 4 board columns in order.
pub const COLUMNS: [TicketStatus; 4] = ALL_STATUSES;

/// Column display names.
pub const COLUMN_NAMES: [&str; 4] = ["PENDING", "ACCEPTED", "RESOLVED", "REJECTED"];

#[derive(Debug, Clone)]
pub struct BoardViewModel {
    pub columns: Vec<ColumnViewModel>,
    pub total_tickets: usize,
}

#[derive(Debug, Clone)]
pub struct ColumnViewModel {
    pub status: TicketStatus,
    pub name: &'static str,
    pub ticket_count: usize,
    pub cards: Vec<CardViewModel>,
}

#[derive(Debug, Clone)]
pub struct CardViewModel {
    pub ticket: Ticket,
}

/// Computes the full board from the cache.
pub fn compute_board_view_model(cache: &TicketCache) -> BoardViewModel {
    let columns = COLUMNS
        .iter()
        .map(|&status| compute_column(cache, status))
        .collect();

    BoardViewModel {
        columns,
        total_tickets: cache.len(),
    }
}

/// Computes a single column, preserving cache order within it.
pub fn compute_column(cache: &TicketCache, status: TicketStatus) -> ColumnViewModel {
    let cards: Vec<CardViewModel> = cache
        .tickets()
        .iter()
        .filter(|t| t.status == status)
        .map(|t| CardViewModel { ticket: t.clone() })
        .collect();

    ColumnViewModel {
        status,
        name: column_name(status),
        ticket_count: cards.len(),
        cards,
    }
}

pub fn column_name(status: TicketStatus) -> &'static str {
    match status {
        TicketStatus::Pending => COLUMN_NAMES[0],
        TicketStatus::Accepted => COLUMN_NAMES[1],
        TicketStatus::Resolved => COLUMN_NAMES[2],
        TicketStatus::Rejected => COLUMN_NAMES[3],
    }
}

impl BoardViewModel {
    pub fn column(&self, status: TicketStatus) -> Option<&ColumnViewModel> {
        self.columns.iter().find(|c| c.status == status)
    }

    /// Swaps in freshly computed columns for the statuses a transition
    /// touched, leaving the rest untouched.
    pub fn refresh_columns(&mut self, cache: &TicketCache, statuses: &[TicketStatus]) {
        for &status in statuses {
            if let Some(column) = self.columns.iter_mut().find(|c| c.status == status) {
                *column = compute_column(cache, status);
            }
        }
        self.total_tickets = cache.len();
    }
}

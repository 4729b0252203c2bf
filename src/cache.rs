//! Client-side ticket cache.
//!
//! Holds the working set retrieved by the most recent list load and acts as
//! the single source of truth for both the list and board views. The cache
//! is ephemeral and single-process; it is a projection of the store that
//! reconciles to the store's response on every update.

use jiff::Timestamp;

use crate::types::{Ticket, TicketStatus};

#[derive(Debug, Default)]
pub struct TicketCache {
    /// Working set, ordered descending by `updated_at`. The order is
    /// established by `replace` and deliberately NOT maintained by
    /// `apply_status_update`; a list reload re-applies the sort.
    tickets: Vec<Ticket>,
}

impl TicketCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Atomically swaps the whole working set.
    ///
    /// Duplicate ids collapse to the last occurrence (last-write-wins), then
    /// the set is sorted most-recently-touched first.
    pub fn replace(&mut self, tickets: Vec<Ticket>) {
        let mut deduped: Vec<Ticket> = Vec::with_capacity(tickets.len());
        for ticket in tickets {
            if let Some(existing) = deduped.iter_mut().find(|t| t.id == ticket.id) {
                *existing = ticket;
            } else {
                deduped.push(ticket);
            }
        }
        deduped.sort_by(|a, b| b.updated_at.cmp(&a.updated_at));
        self.tickets = deduped;
    }

    pub fn get(&self, id: u64) -> Option<&Ticket> {
        self.tickets.iter().find(|t| t.id == id)
    }

    /// Mutates a single entry in place with the store's authoritative status
    /// and timestamp. Returns `false` when the id is absent (no-op).
    pub fn apply_status_update(
        &mut self,
        id: u64,
        new_status: TicketStatus,
        new_updated_at: Timestamp,
    ) -> bool {
        match self.tickets.iter_mut().find(|t| t.id == id) {
            Some(ticket) => {
                ticket.status = new_status;
                ticket.updated_at = new_updated_at;
                true
            }
            None => false,
        }
    }

    /// The working set in cache order (descending `updated_at`).
    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn len(&self) -> usize {
        self.tickets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tickets.is_empty()
    }
}

//! In-process ticket store with the reference server's semantics.
//!
//! Backs tests and offline use. Mirrors the HTTP store's observable
//! behavior: trimmed fields, `pending` on create, 404-equivalent for
//! unknown ids, rejection of empty patches, and silently-ignored invalid
//! sort parameters.

use std::time::Duration;

use async_trait::async_trait;
use jiff::{Timestamp, ToSpan};
use tokio::sync::Mutex;

use crate::error::{HelpdeskError, Result};
use crate::types::{SortField, SortOrder, Ticket, TicketStatus};

use super::{ListQuery, NewTicket, StatusCount, TicketPatch, TicketStore};

#[derive(Debug, Default)]
struct Inner {
    tickets: Vec<Ticket>,
    next_id: u64,
    update_calls: u64,
    fail_next: Option<String>,
}

/// Test knobs (`latency`, `fail_next_update`, `update_calls`) let the
/// coordinator tests hold a request in flight and observe exactly how many
/// updates were dispatched.
#[derive(Debug, Default)]
pub struct MemoryStore {
    inner: Mutex<Inner>,
    latency: Option<Duration>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every store call sleeps this long before touching state, simulating
    /// network round-trip time under `tokio::time::pause`.
    pub fn with_latency(latency: Duration) -> Self {
        Self {
            inner: Mutex::new(Inner::default()),
            latency: Some(latency),
        }
    }

    /// The next `update` call fails with a transport error carrying
    /// `message`, then the switch resets.
    pub async fn fail_next_update(&self, message: impl Into<String>) {
        self.inner.lock().await.fail_next = Some(message.into());
    }

    /// Number of `update` calls that reached the store.
    pub async fn update_calls(&self) -> u64 {
        self.inner.lock().await.update_calls
    }

    async fn simulate_latency(&self) {
        if let Some(latency) = self.latency {
            tokio::time::sleep(latency).await;
        }
    }

    /// Timestamps must strictly increase across mutations of one ticket so
    /// `updated_at` never ties with the previous value under a coarse (or
    /// paused) clock.
    fn next_timestamp(after: Timestamp) -> Timestamp {
        let now = Timestamp::now();
        if now > after {
            now
        } else {
            after + 1.millisecond()
        }
    }
}

#[async_trait]
impl TicketStore for MemoryStore {
    async fn create(&self, new: NewTicket) -> Result<Ticket> {
        self.simulate_latency().await;

        let title = new.title.trim().to_string();
        let description = new.description.trim().to_string();
        let contact_information = new.contact_information.trim().to_string();
        if title.is_empty() || description.is_empty() || contact_information.is_empty() {
            return Err(HelpdeskError::Api(
                "Missing required fields: title, description, contact_information".to_string(),
            ));
        }

        let mut inner = self.inner.lock().await;
        inner.next_id += 1;
        let now = Timestamp::now();
        let ticket = Ticket {
            id: inner.next_id,
            title,
            description,
            contact_information,
            status: TicketStatus::Pending,
            created_at: now,
            updated_at: now,
        };
        inner.tickets.push(ticket.clone());
        Ok(ticket)
    }

    async fn get(&self, id: u64) -> Result<Ticket> {
        self.simulate_latency().await;

        let inner = self.inner.lock().await;
        inner
            .tickets
            .iter()
            .find(|t| t.id == id)
            .cloned()
            .ok_or(HelpdeskError::TicketNotFound(id))
    }

    async fn list(&self, query: ListQuery) -> Result<Vec<Ticket>> {
        self.simulate_latency().await;

        let inner = self.inner.lock().await;
        let mut tickets: Vec<Ticket> = match query.status {
            Some(status) => inner
                .tickets
                .iter()
                .filter(|t| t.status == status)
                .cloned()
                .collect(),
            None => inner.tickets.clone(),
        };

        if let Some(field) = query.sort_by {
            let order = query.order.unwrap_or(SortOrder::Asc);
            tickets.sort_by(|a, b| {
                let cmp = match field {
                    SortField::CreatedAt => a.created_at.cmp(&b.created_at),
                    SortField::UpdatedAt => a.updated_at.cmp(&b.updated_at),
                    SortField::Status => a.status.to_string().cmp(&b.status.to_string()),
                    SortField::Title => a.title.cmp(&b.title),
                };
                match order {
                    SortOrder::Asc => cmp,
                    SortOrder::Desc => cmp.reverse(),
                }
            });
        }

        Ok(tickets)
    }

    async fn update(&self, id: u64, patch: TicketPatch) -> Result<Ticket> {
        self.simulate_latency().await;

        let mut inner = self.inner.lock().await;
        inner.update_calls += 1;

        if let Some(message) = inner.fail_next.take() {
            return Err(HelpdeskError::Transport(message));
        }

        if patch.is_empty() {
            return Err(HelpdeskError::Api("No data provided for update".to_string()));
        }

        let ticket = inner
            .tickets
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(HelpdeskError::TicketNotFound(id))?;

        if let Some(title) = patch.title {
            ticket.title = title.trim().to_string();
        }
        if let Some(description) = patch.description {
            ticket.description = description.trim().to_string();
        }
        if let Some(contact) = patch.contact_information {
            ticket.contact_information = contact.trim().to_string();
        }
        if let Some(status) = patch.status {
            ticket.status = status;
        }
        ticket.updated_at = Self::next_timestamp(ticket.updated_at);

        Ok(ticket.clone())
    }

    async fn stats(&self) -> Result<Vec<StatusCount>> {
        self.simulate_latency().await;

        let inner = self.inner.lock().await;
        let mut counts: Vec<StatusCount> = Vec::new();
        for ticket in &inner.tickets {
            match counts.iter_mut().find(|c| c.status == ticket.status) {
                Some(entry) => entry.count += 1,
                None => counts.push(StatusCount {
                    status: ticket.status,
                    count: 1,
                }),
            }
        }
        counts.sort_by(|a, b| a.status.to_string().cmp(&b.status.to_string()));
        Ok(counts)
    }
}

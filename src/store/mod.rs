//! Ticket store abstraction.
//!
//! The durable store is an external collaborator reached over HTTP; the
//! client only depends on this request/response contract. `MemoryStore`
//! implements the same contract in-process with the server's semantics.

pub mod http;
pub mod memory;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::types::{SortField, SortOrder, Ticket, TicketStatus};

pub use http::HttpStore;
pub use memory::MemoryStore;

/// A new ticket submission. The store assigns id, status and timestamps.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTicket {
    pub title: String,
    pub description: String,
    pub contact_information: String,
}

/// A partial update. Absent fields are left untouched; an entirely empty
/// patch is rejected by the store.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub contact_information: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TicketStatus>,
}

impl TicketPatch {
    pub fn status(status: TicketStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.contact_information.is_none()
            && self.status.is_none()
    }
}

/// List query parameters. The store ignores invalid values rather than
/// rejecting them, so every field is optional here.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListQuery {
    pub status: Option<TicketStatus>,
    pub sort_by: Option<SortField>,
    pub order: Option<SortOrder>,
}

/// Per-status ticket counts.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusCount {
    pub status: TicketStatus,
    pub count: u64,
}

/// Common interface for ticket stores.
#[async_trait]
pub trait TicketStore: Send + Sync {
    async fn create(&self, new: NewTicket) -> Result<Ticket>;

    async fn get(&self, id: u64) -> Result<Ticket>;

    async fn list(&self, query: ListQuery) -> Result<Vec<Ticket>>;

    async fn update(&self, id: u64, patch: TicketPatch) -> Result<Ticket>;

    async fn stats(&self) -> Result<Vec<StatusCount>>;
}

//! Status transition coordinator.
//!
//! Every status change, whatever input produced it (drag, dropdown,
//! keyboard), funnels through `transition`. One global gate allows at most
//! one status-update request in flight across all tickets; a request that
//! arrives while the gate is held, or during the post-completion cooldown,
//! is dropped rather than queued. On success the cache is reconciled from
//! the store's response; on failure the cache is left untouched and the
//! caller receives the prior status to revert any optimistic visual change.

use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex as SyncMutex;
use tokio::sync::Mutex;
use tokio::time::Instant;

use crate::cache::TicketCache;
use crate::error::HelpdeskError;
use crate::notify::{Toast, ToastQueue};
use crate::store::{TicketPatch, TicketStore};
use crate::types::{Ticket, TicketStatus};

/// Absorbs trailing UI events after a transition settles; a drag-end firing
/// right after its drop must not read as a second gesture.
pub const TRANSITION_COOLDOWN: Duration = Duration::from_millis(100);

/// A requested status change for one ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionCommand {
    pub ticket_id: u64,
    pub target: TicketStatus,
}

#[derive(Debug)]
pub enum TransitionOutcome {
    /// The store accepted the change and the cache was reconciled.
    Applied {
        ticket: Ticket,
        from: TicketStatus,
        to: TicketStatus,
    },
    /// The store or transport failed; the cache is untouched and the input
    /// adapter should restore `revert_to` on its widget.
    Rejected {
        error: HelpdeskError,
        revert_to: Option<TicketStatus>,
    },
    /// Another transition was in flight or cooling down.
    Dropped,
}

#[derive(Debug, Default)]
struct Gate {
    cooldown_until: Option<Instant>,
}

impl Gate {
    fn cooling(&self) -> bool {
        self.cooldown_until
            .is_some_and(|until| Instant::now() < until)
    }
}

pub struct TransitionCoordinator {
    store: Arc<dyn TicketStore>,
    toasts: Arc<SyncMutex<ToastQueue>>,
    gate: Mutex<Gate>,
    cooldown: Duration,
}

impl TransitionCoordinator {
    pub fn new(store: Arc<dyn TicketStore>, toasts: Arc<SyncMutex<ToastQueue>>) -> Self {
        Self {
            store,
            toasts,
            gate: Mutex::new(Gate::default()),
            cooldown: TRANSITION_COOLDOWN,
        }
    }

    /// Whether a transition is in flight or still cooling down. Display-only;
    /// `transition` re-checks under the gate.
    pub fn is_busy(&self) -> bool {
        match self.gate.try_lock() {
            Ok(gate) => gate.cooling(),
            Err(_) => true,
        }
    }

    pub async fn transition(
        &self,
        cache: &Mutex<TicketCache>,
        cmd: TransitionCommand,
    ) -> TransitionOutcome {
        let Ok(mut gate) = self.gate.try_lock() else {
            tracing::debug!(
                ticket_id = cmd.ticket_id,
                "transition dropped: update already in flight"
            );
            return TransitionOutcome::Dropped;
        };
        if gate.cooling() {
            tracing::debug!(ticket_id = cmd.ticket_id, "transition dropped: cooling down");
            return TransitionOutcome::Dropped;
        }

        let prior = cache.lock().await.get(cmd.ticket_id).cloned();

        // The store is authoritative; an idempotent target still goes out.
        let result = self
            .store
            .update(cmd.ticket_id, TicketPatch::status(cmd.target))
            .await;

        let outcome = match result {
            Ok(ticket) => {
                cache
                    .lock()
                    .await
                    .apply_status_update(ticket.id, ticket.status, ticket.updated_at);
                let message = match &prior {
                    Some(previous) => format!("{} moved to {}", previous.title, ticket.status),
                    None => format!("Ticket status updated to {}", ticket.status),
                };
                self.toasts.lock().push(Toast::success(message));
                let from = prior.map(|t| t.status).unwrap_or(ticket.status);
                TransitionOutcome::Applied {
                    from,
                    to: ticket.status,
                    ticket,
                }
            }
            Err(error) => {
                self.toasts
                    .lock()
                    .push(Toast::error(format!("Failed to update status: {error}")));
                TransitionOutcome::Rejected {
                    error,
                    revert_to: prior.map(|t| t.status),
                }
            }
        };

        gate.cooldown_until = Some(Instant::now() + self.cooldown);
        outcome
    }
}

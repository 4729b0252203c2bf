//! Application controller.
//!
//! Owns the store handle, the ticket cache, the transition coordinator and
//! the per-view state. Input adapters (CLI arguments, drag gestures, the
//! keyboard move dialog) all speak to it through explicit command objects;
//! none of them touch business state directly.

use std::sync::Arc;

use parking_lot::Mutex as SyncMutex;
use tokio::sync::Mutex;

use crate::cache::TicketCache;
use crate::coordinator::{TransitionCommand, TransitionCoordinator, TransitionOutcome};
use crate::drag::{DragController, DragEvent};
use crate::error::Result;
use crate::filter::FilterState;
use crate::notify::{Toast, ToastQueue};
use crate::store::{ListQuery, NewTicket, StatusCount, TicketStore};
use crate::types::{Ticket, TicketStatus};
use crate::validate::validate_submission;
use crate::view::board::{BoardViewModel, compute_board_view_model};
use crate::view::list::{ListViewModel, compute_list_view_model};

/// A validated-at-the-boundary ticket submission.
#[derive(Debug, Clone)]
pub struct CreateTicketCommand {
    pub title: String,
    pub description: String,
    pub contact_information: String,
}

/// Everything an input adapter can ask of the app.
#[derive(Debug, Clone)]
pub enum Command {
    CreateTicket(CreateTicketCommand),
    Transition(TransitionCommand),
    Reload(ListQuery),
    SetSearch(String),
    ToggleStatusFilter(TicketStatus),
    ClearFilters,
    Drag(DragEvent),
}

/// What a dispatched command did.
#[derive(Debug)]
pub enum Effect {
    Created(Ticket),
    Transition(TransitionOutcome),
    Reloaded { count: usize },
    FiltersChanged,
    Nothing,
}

pub struct App {
    store: Arc<dyn TicketStore>,
    cache: Mutex<TicketCache>,
    coordinator: TransitionCoordinator,
    toasts: Arc<SyncMutex<ToastQueue>>,
    toast_duration: std::time::Duration,
    filters: FilterState,
    drag: DragController,
}

impl App {
    pub fn new(store: Arc<dyn TicketStore>) -> Self {
        Self::with_toast_duration(store, crate::notify::DEFAULT_TOAST_DURATION)
    }

    pub fn with_toast_duration(
        store: Arc<dyn TicketStore>,
        toast_duration: std::time::Duration,
    ) -> Self {
        let toasts = Arc::new(SyncMutex::new(ToastQueue::new()));
        let coordinator = TransitionCoordinator::new(store.clone(), toasts.clone());
        Self {
            store,
            cache: Mutex::new(TicketCache::new()),
            coordinator,
            toasts,
            toast_duration,
            filters: FilterState::new(),
            drag: DragController::new(),
        }
    }

    pub async fn dispatch(&mut self, command: Command) -> Result<Effect> {
        match command {
            Command::CreateTicket(cmd) => self.create_ticket(cmd).await,
            Command::Transition(cmd) => {
                let outcome = self.coordinator.transition(&self.cache, cmd).await;
                Ok(Effect::Transition(outcome))
            }
            Command::Reload(query) => self.reload(query).await,
            Command::SetSearch(search) => {
                self.filters.search = search;
                Ok(Effect::FiltersChanged)
            }
            Command::ToggleStatusFilter(status) => {
                self.filters.toggle_status(status);
                Ok(Effect::FiltersChanged)
            }
            Command::ClearFilters => {
                self.filters.clear();
                Ok(Effect::FiltersChanged)
            }
            Command::Drag(event) => {
                let request = {
                    let cache = self.cache.lock().await;
                    self.drag.on_event(&cache, event)
                };
                match request {
                    Some(cmd) => {
                        let outcome = self.coordinator.transition(&self.cache, cmd).await;
                        Ok(Effect::Transition(outcome))
                    }
                    None => Ok(Effect::Nothing),
                }
            }
        }
    }

    async fn create_ticket(&mut self, cmd: CreateTicketCommand) -> Result<Effect> {
        if let Err(e) = validate_submission(&cmd.title, &cmd.description, &cmd.contact_information)
        {
            // Field errors surface inline at the form; the toast only nudges.
            self.toasts
                .lock()
                .push(Toast::warning("Please correct the errors and try again."));
            return Err(e);
        }

        let new = NewTicket {
            title: cmd.title.trim().to_string(),
            description: cmd.description.trim().to_string(),
            contact_information: cmd.contact_information.trim().to_string(),
        };
        match self.store.create(new).await {
            Ok(ticket) => {
                self.toasts
                    .lock()
                    .push(Toast::success("Ticket created successfully!"));
                Ok(Effect::Created(ticket))
            }
            Err(e) => {
                self.toasts
                    .lock()
                    .push(Toast::error(format!("Failed to create ticket: {e}")));
                Err(e)
            }
        }
    }

    /// Reloads the working set. Not covered by the coordinator's gate: the
    /// last response to resolve replaces the cache wholesale.
    async fn reload(&mut self, query: ListQuery) -> Result<Effect> {
        match self.store.list(query).await {
            Ok(tickets) => {
                let count = tickets.len();
                self.cache.lock().await.replace(tickets);
                tracing::info!(count, "reloaded ticket list");
                if count > 0 && !self.coordinator.is_busy() {
                    self.toasts
                        .lock()
                        .push(Toast::success(format!("Loaded {count} tickets")));
                }
                Ok(Effect::Reloaded { count })
            }
            Err(e) => {
                self.toasts
                    .lock()
                    .push(Toast::error(format!("Failed to load tickets: {e}")));
                Err(e)
            }
        }
    }

    pub async fn get_ticket(&self, id: u64) -> Result<Ticket> {
        self.store.get(id).await
    }

    pub async fn stats(&self) -> Result<Vec<StatusCount>> {
        self.store.stats().await
    }

    pub async fn list_view(&self) -> ListViewModel {
        let cache = self.cache.lock().await;
        compute_list_view_model(&cache, &self.filters)
    }

    pub async fn board_view(&self) -> BoardViewModel {
        let cache = self.cache.lock().await;
        compute_board_view_model(&cache)
    }

    pub async fn cached_ticket(&self, id: u64) -> Option<Ticket> {
        self.cache.lock().await.get(id).cloned()
    }

    pub async fn with_cache<R>(&self, f: impl FnOnce(&TicketCache) -> R) -> R {
        let cache = self.cache.lock().await;
        f(&cache)
    }

    pub fn filters(&self) -> &FilterState {
        &self.filters
    }

    /// Removes and returns every pending notification.
    pub fn drain_toasts(&self) -> Vec<Toast> {
        self.toasts.lock().drain()
    }

    /// Auto-dismisses notifications older than the configured duration.
    pub fn expire_toasts(&self) {
        self.toasts
            .lock()
            .expire(tokio::time::Instant::now(), self.toast_duration);
    }
}

pub mod app;
pub mod cache;
pub mod commands;
pub mod config;
pub mod coordinator;
pub mod display;
pub mod drag;
pub mod error;
pub mod filter;
pub mod notify;
pub mod store;
pub mod types;
pub mod validate;
pub mod view;

pub use app::{App, Command, CreateTicketCommand, Effect};
pub use cache::TicketCache;
pub use coordinator::{TransitionCommand, TransitionCoordinator, TransitionOutcome};
pub use drag::{DragController, DragEvent};
pub use error::{HelpdeskError, Result};
pub use filter::{FilterState, visible};
pub use store::{HttpStore, ListQuery, MemoryStore, NewTicket, TicketPatch, TicketStore};
pub use types::{SortField, SortOrder, Ticket, TicketStatus, VALID_STATUSES};

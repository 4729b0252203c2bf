//! Terminal rendering for view models and notifications.

mod formatters;

pub use formatters::{
    format_board, format_status, format_ticket_detail, format_ticket_table, format_toast,
    print_toasts,
};

use crate::app::{Command, CreateTicketCommand, Effect};
use crate::display::format_ticket_detail;
use crate::error::Result;

use super::{build_app, flush_toasts};

/// Submit a new ticket.
pub async fn cmd_create(title: &str, description: &str, contact: &str) -> Result<()> {
    let mut app = build_app()?;

    let result = app
        .dispatch(Command::CreateTicket(CreateTicketCommand {
            title: title.to_string(),
            description: description.to_string(),
            contact_information: contact.to_string(),
        }))
        .await;

    flush_toasts(&app);

    match result? {
        Effect::Created(ticket) => {
            println!("{}", format_ticket_detail(&ticket));
            Ok(())
        }
        _ => Ok(()),
    }
}

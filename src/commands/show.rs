use crate::display::format_ticket_detail;
use crate::error::Result;

use super::build_app;

/// Display a single ticket.
pub async fn cmd_show(id: u64) -> Result<()> {
    let app = build_app()?;
    let ticket = app.get_ticket(id).await?;
    println!("{}", format_ticket_detail(&ticket));
    Ok(())
}

use crate::app::Command;
use crate::display::format_ticket_table;
use crate::error::Result;
use crate::store::ListQuery;
use crate::types::TicketStatus;

use super::{build_app, flush_toasts};

/// List tickets, most recently touched first, with optional status and
/// title-search filters applied client-side.
pub async fn cmd_ls(statuses: &[TicketStatus], search: Option<&str>) -> Result<()> {
    let mut app = build_app()?;

    let reload = app.dispatch(Command::Reload(ListQuery::default())).await;
    flush_toasts(&app);
    reload?;

    for &status in statuses {
        app.dispatch(Command::ToggleStatusFilter(status)).await?;
    }
    if let Some(search) = search {
        app.dispatch(Command::SetSearch(search.to_string())).await?;
    }

    let vm = app.list_view().await;
    println!("{}", format_ticket_table(&vm));
    Ok(())
}

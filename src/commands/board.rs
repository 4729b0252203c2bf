use crate::app::Command;
use crate::display::format_board;
use crate::error::Result;
use crate::store::ListQuery;

use super::{build_app, flush_toasts};

/// Render the status board.
pub async fn cmd_board() -> Result<()> {
    let mut app = build_app()?;

    let reload = app.dispatch(Command::Reload(ListQuery::default())).await;
    flush_toasts(&app);
    reload?;

    let vm = app.board_view().await;
    println!("{}", format_board(&vm));
    Ok(())
}

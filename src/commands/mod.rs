mod board;
mod create;
mod ls;
mod show;
mod stats;
mod status;

pub use board::cmd_board;
pub use create::cmd_create;
pub use ls::cmd_ls;
pub use show::cmd_show;
pub use stats::cmd_stats;
pub use status::{cmd_move, cmd_status};

use std::sync::Arc;

use crate::app::App;
use crate::config::Config;
use crate::display::print_toasts;
use crate::error::Result;
use crate::store::HttpStore;

/// Builds an app wired to the configured HTTP store.
fn build_app() -> Result<App> {
    let config = Config::load()?;
    let store = HttpStore::new(&config.api_url, config.timeout())?;
    Ok(App::with_toast_duration(
        Arc::new(store),
        config.toast_duration(),
    ))
}

/// Surfaces whatever notifications a command produced.
fn flush_toasts(app: &App) {
    print_toasts(&app.drain_toasts());
}

use owo_colors::OwoColorize;

use crate::display::format_status;
use crate::error::Result;

use super::build_app;

/// Per-status ticket counts.
pub async fn cmd_stats() -> Result<()> {
    let app = build_app()?;
    let stats = app.stats().await?;

    if stats.is_empty() {
        println!("No tickets yet");
        return Ok(());
    }

    let total: u64 = stats.iter().map(|c| c.count).sum();
    for entry in &stats {
        println!("{:<12} {}", format_status(entry.status), entry.count);
    }
    println!("{:<12} {}", "total".bold(), total);
    Ok(())
}

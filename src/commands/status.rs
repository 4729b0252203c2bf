use owo_colors::OwoColorize;

use crate::app::{Command, Effect};
use crate::coordinator::{TransitionCommand, TransitionOutcome};
use crate::drag::move_targets;
use crate::error::Result;
use crate::store::ListQuery;
use crate::types::TicketStatus;

use super::{build_app, flush_toasts};

/// Set a ticket's status directly. Every change goes through the
/// coordinator, same as a board drop.
pub async fn cmd_status(id: u64, status: TicketStatus) -> Result<()> {
    let mut app = build_app()?;

    // Load the working set first so the success toast can name the ticket
    // and a failure can report what the status reverts to.
    app.dispatch(Command::Reload(ListQuery::default())).await?;
    app.drain_toasts();

    let effect = app
        .dispatch(Command::Transition(TransitionCommand {
            ticket_id: id,
            target: status,
        }))
        .await?;
    report_transition(&app, effect);
    Ok(())
}

/// Keyboard-accessible move: without a choice, list the valid targets;
/// with one, perform that transition.
pub async fn cmd_move(id: u64, choice: Option<usize>) -> Result<()> {
    let mut app = build_app()?;

    app.dispatch(Command::Reload(ListQuery::default())).await?;
    app.drain_toasts();

    let ticket = app.cached_ticket(id).await;
    let targets = app.with_cache(|cache| move_targets(cache, id)).await;
    let Some(ticket) = ticket else {
        eprintln!("ticket {id} not found");
        return Ok(());
    };

    let Some(choice) = choice else {
        println!("Move ticket \"{}\" to:", ticket.title);
        for (i, target) in targets.iter().enumerate() {
            println!("  {}. {target}", i + 1);
        }
        println!("Run: helpdesk move {id} <number>");
        return Ok(());
    };

    let command = app
        .with_cache(|cache| crate::drag::choose_target(cache, id, choice))
        .await;
    let Some(command) = command else {
        eprintln!("invalid choice {choice}; expected 1-{}", targets.len());
        return Ok(());
    };

    let effect = app.dispatch(Command::Transition(command)).await?;
    report_transition(&app, effect);
    Ok(())
}

fn report_transition(app: &crate::app::App, effect: Effect) {
    flush_toasts(app);
    if let Effect::Transition(outcome) = effect {
        match outcome {
            TransitionOutcome::Applied { ticket, from, to } => {
                println!(
                    "#{} {} {} -> {}",
                    ticket.id,
                    ticket.title,
                    from.to_string().dimmed(),
                    to.to_string().green()
                );
            }
            TransitionOutcome::Rejected { revert_to, .. } => {
                if let Some(status) = revert_to {
                    eprintln!("status remains {status}");
                }
            }
            TransitionOutcome::Dropped => {
                eprintln!("another update is in flight; try again");
            }
        }
    }
}

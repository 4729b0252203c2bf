//! End-to-end engine tests over the public API.
//!
//! These complement the unit tests inside each module by running whole
//! user flows (submit, reload, filter, drag, fail, retry) against the
//! in-process store.

use std::sync::Arc;
use std::time::Duration;

use helpdesk::app::{App, Command, CreateTicketCommand, Effect};
use helpdesk::coordinator::{TRANSITION_COOLDOWN, TransitionCommand, TransitionOutcome};
use helpdesk::drag::DragEvent;
use helpdesk::notify::ToastLevel;
use helpdesk::store::{ListQuery, MemoryStore};
use helpdesk::types::TicketStatus;

fn submission(title: &str) -> CreateTicketCommand {
    CreateTicketCommand {
        title: title.to_string(),
        description: "Printer on 3rd floor jams every print".to_string(),
        contact_information: "a@b.com".to_string(),
    }
}

async fn loaded_app(store: Arc<MemoryStore>, titles: &[&str]) -> App {
    let mut app = App::new(store);
    for title in titles {
        app.dispatch(Command::CreateTicket(submission(title)))
            .await
            .unwrap();
    }
    app.dispatch(Command::Reload(ListQuery::default()))
        .await
        .unwrap();
    app.drain_toasts();
    app
}

#[tokio::test(start_paused = true)]
async fn test_submit_triage_resolve_flow() {
    let store = Arc::new(MemoryStore::new());
    let mut app = loaded_app(store.clone(), &["Printer jam"]).await;

    // Triage: accept the ticket.
    let effect = app
        .dispatch(Command::Transition(TransitionCommand {
            ticket_id: 1,
            target: TicketStatus::Accepted,
        }))
        .await
        .unwrap();
    assert!(matches!(
        effect,
        Effect::Transition(TransitionOutcome::Applied { .. })
    ));

    // Resolve after the cooldown.
    tokio::time::advance(TRANSITION_COOLDOWN).await;
    let effect = app
        .dispatch(Command::Transition(TransitionCommand {
            ticket_id: 1,
            target: TicketStatus::Resolved,
        }))
        .await
        .unwrap();
    assert!(matches!(
        effect,
        Effect::Transition(TransitionOutcome::Applied { .. })
    ));

    let board = app.board_view().await;
    assert_eq!(board.column(TicketStatus::Resolved).unwrap().ticket_count, 1);
    assert_eq!(board.column(TicketStatus::Pending).unwrap().ticket_count, 0);
    assert_eq!(store.update_calls().await, 2);
}

#[tokio::test(start_paused = true)]
async fn test_rapid_gesture_sends_one_request() {
    let store = Arc::new(MemoryStore::new());
    let mut app = loaded_app(store.clone(), &["Printer jam"]).await;

    // A drop followed by a trailing same-gesture retrigger inside the
    // cooldown window.
    app.dispatch(Command::Drag(DragEvent::Start { ticket_id: 1 }))
        .await
        .unwrap();
    app.dispatch(Command::Drag(DragEvent::Drop {
        zone: "accepted".to_string(),
    }))
    .await
    .unwrap();

    app.dispatch(Command::Drag(DragEvent::Start { ticket_id: 1 }))
        .await
        .unwrap();
    let effect = app
        .dispatch(Command::Drag(DragEvent::Drop {
            zone: "rejected".to_string(),
        }))
        .await
        .unwrap();
    assert!(matches!(
        effect,
        Effect::Transition(TransitionOutcome::Dropped)
    ));

    assert_eq!(store.update_calls().await, 1);
    assert_eq!(
        app.cached_ticket(1).await.unwrap().status,
        TicketStatus::Accepted
    );
}

#[tokio::test(start_paused = true)]
async fn test_failed_update_reverts_and_manual_retry_works() {
    let store = Arc::new(MemoryStore::new());
    let mut app = loaded_app(store.clone(), &["Printer jam"]).await;
    let before = app.cached_ticket(1).await.unwrap();

    store.fail_next_update("connection refused").await;
    let effect = app
        .dispatch(Command::Transition(TransitionCommand {
            ticket_id: 1,
            target: TicketStatus::Accepted,
        }))
        .await
        .unwrap();

    match effect {
        Effect::Transition(TransitionOutcome::Rejected { revert_to, .. }) => {
            assert_eq!(revert_to, Some(TicketStatus::Pending));
        }
        other => panic!("expected Rejected, got {other:?}"),
    }
    assert_eq!(app.cached_ticket(1).await.unwrap(), before);

    let toasts = app.drain_toasts();
    assert_eq!(toasts.len(), 1);
    assert_eq!(toasts[0].level, ToastLevel::Error);
    assert!(toasts[0].message.contains("connection refused"));

    // No automatic retry happens; the user triggers it again after the
    // cooldown and it goes through.
    tokio::time::advance(TRANSITION_COOLDOWN).await;
    let effect = app
        .dispatch(Command::Transition(TransitionCommand {
            ticket_id: 1,
            target: TicketStatus::Accepted,
        }))
        .await
        .unwrap();
    assert!(matches!(
        effect,
        Effect::Transition(TransitionOutcome::Applied { .. })
    ));
    assert_eq!(store.update_calls().await, 2);
}

#[tokio::test(start_paused = true)]
async fn test_list_and_board_stay_consistent() {
    let store = Arc::new(MemoryStore::new());
    let mut app = loaded_app(store.clone(), &["Printer jam", "Mouse broken"]).await;

    app.dispatch(Command::Transition(TransitionCommand {
        ticket_id: 2,
        target: TicketStatus::Rejected,
    }))
    .await
    .unwrap();

    // Both views are projections of the same cache.
    let list = app.list_view().await;
    let board = app.board_view().await;
    let rejected_in_list = list
        .rows
        .iter()
        .filter(|t| t.status == TicketStatus::Rejected)
        .count();
    assert_eq!(
        rejected_in_list,
        board.column(TicketStatus::Rejected).unwrap().ticket_count
    );
    assert_eq!(list.total_count, board.total_tickets);
}

#[tokio::test(start_paused = true)]
async fn test_search_and_status_filter_compose() {
    let store = Arc::new(MemoryStore::new());
    let mut app = loaded_app(
        store.clone(),
        &["Printer jam", "Printer noise", "Mouse broken"],
    )
    .await;

    app.dispatch(Command::Transition(TransitionCommand {
        ticket_id: 2,
        target: TicketStatus::Resolved,
    }))
    .await
    .unwrap();
    tokio::time::advance(Duration::from_millis(200)).await;
    app.dispatch(Command::Reload(ListQuery::default()))
        .await
        .unwrap();

    app.dispatch(Command::SetSearch("printer".to_string()))
        .await
        .unwrap();
    app.dispatch(Command::ToggleStatusFilter(TicketStatus::Pending))
        .await
        .unwrap();

    let vm = app.list_view().await;
    assert_eq!(vm.visible_count, 1);
    assert_eq!(vm.rows[0].title, "Printer jam");

    app.dispatch(Command::ClearFilters).await.unwrap();
    assert_eq!(app.list_view().await.visible_count, 3);
}

//! Drag-interaction adapter.
//!
//! Translates drag gestures and the keyboard move dialog into transition
//! commands. The adapter owns all "drag in progress" / "drop target
//! highlighted" state and clears it on drop, cancel and drag-end no matter
//! what the coordinator later decides; visual cleanup is independent of the
//! transition's outcome.

use std::str::FromStr;

use crate::cache::TicketCache;
use crate::coordinator::TransitionCommand;
use crate::types::TicketStatus;

/// Gestures produced by an input surface. Drop carries the raw zone key of
/// the destination container; an unrecognized key means the gesture ends
/// without a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DragEvent {
    Start { ticket_id: u64 },
    Enter { zone: String },
    Leave,
    Drop { zone: String },
    End,
    Cancel,
}

#[derive(Debug, Default)]
pub struct DragController {
    dragged: Option<u64>,
    highlighted: Option<TicketStatus>,
}

impl DragController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ticket currently being dragged, if any.
    pub fn dragged(&self) -> Option<u64> {
        self.dragged
    }

    /// Column currently highlighted as a drop target, if any.
    pub fn highlighted(&self) -> Option<TicketStatus> {
        self.highlighted
    }

    /// Feeds one gesture through the adapter. At most a `Drop` yields a
    /// command, and only when the destination parses to a status different
    /// from the dragged ticket's current one.
    pub fn on_event(&mut self, cache: &TicketCache, event: DragEvent) -> Option<TransitionCommand> {
        match event {
            DragEvent::Start { ticket_id } => {
                self.dragged = Some(ticket_id);
                None
            }
            DragEvent::Enter { zone } => {
                self.highlighted = TicketStatus::from_str(&zone).ok();
                None
            }
            DragEvent::Leave => {
                self.highlighted = None;
                None
            }
            DragEvent::Drop { zone } => {
                let dragged = self.dragged;
                self.clear();

                let ticket_id = dragged?;
                let target = TicketStatus::from_str(&zone).ok()?;
                let current = cache.get(ticket_id)?.status;
                if current == target {
                    return None;
                }
                Some(TransitionCommand { ticket_id, target })
            }
            DragEvent::End | DragEvent::Cancel => {
                self.clear();
                None
            }
        }
    }

    fn clear(&mut self) {
        self.dragged = None;
        self.highlighted = None;
    }
}

/// Valid destinations for the keyboard move dialog: every status except the
/// ticket's current one, in board-column order.
pub fn move_targets(cache: &TicketCache, ticket_id: u64) -> Vec<TicketStatus> {
    let Some(ticket) = cache.get(ticket_id) else {
        return Vec::new();
    };
    crate::types::ALL_STATUSES
        .into_iter()
        .filter(|&s| s != ticket.status)
        .collect()
}

/// Resolves a 1-based dialog choice into a transition command.
pub fn choose_target(
    cache: &TicketCache,
    ticket_id: u64,
    choice: usize,
) -> Option<TransitionCommand> {
    let targets = move_targets(cache, ticket_id);
    if choice == 0 || choice > targets.len() {
        return None;
    }
    Some(TransitionCommand {
        ticket_id,
        target: targets[choice - 1],
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Ticket;
    use jiff::Timestamp;

    fn cache_with(id: u64, status: TicketStatus) -> TicketCache {
        let at: Timestamp = "2024-05-01T10:00:00Z".parse().unwrap();
        let mut cache = TicketCache::new();
        cache.replace(vec![Ticket {
            id,
            title: "Printer jam".to_string(),
            description: "a description long enough".to_string(),
            contact_information: "a@b.com".to_string(),
            status,
            created_at: at,
            updated_at: at,
        }]);
        cache
    }

    fn drop_on(zone: &str) -> DragEvent {
        DragEvent::Drop {
            zone: zone.to_string(),
        }
    }

    #[test]
    fn test_drop_on_different_status_emits_command() {
        let cache = cache_with(1, TicketStatus::Pending);
        let mut drag = DragController::new();
        drag.on_event(&cache, DragEvent::Start { ticket_id: 1 });

        let command = drag.on_event(&cache, drop_on("accepted"));
        assert_eq!(
            command,
            Some(TransitionCommand {
                ticket_id: 1,
                target: TicketStatus::Accepted,
            })
        );
    }

    #[test]
    fn test_drop_on_same_status_is_noop() {
        let cache = cache_with(1, TicketStatus::Pending);
        let mut drag = DragController::new();
        drag.on_event(&cache, DragEvent::Start { ticket_id: 1 });

        assert!(drag.on_event(&cache, drop_on("pending")).is_none());
        // Markers still cleared.
        assert!(drag.dragged().is_none());
    }

    #[test]
    fn test_drop_on_unrecognized_zone_is_noop() {
        let cache = cache_with(1, TicketStatus::Pending);
        let mut drag = DragController::new();
        drag.on_event(&cache, DragEvent::Start { ticket_id: 1 });

        assert!(drag.on_event(&cache, drop_on("archive")).is_none());
        assert!(drag.dragged().is_none());
    }

    #[test]
    fn test_drop_without_start_is_noop() {
        let cache = cache_with(1, TicketStatus::Pending);
        let mut drag = DragController::new();
        assert!(drag.on_event(&cache, drop_on("accepted")).is_none());
    }

    #[test]
    fn test_drop_of_unknown_ticket_is_noop() {
        let cache = cache_with(1, TicketStatus::Pending);
        let mut drag = DragController::new();
        drag.on_event(&cache, DragEvent::Start { ticket_id: 42 });
        assert!(drag.on_event(&cache, drop_on("accepted")).is_none());
    }

    #[test]
    fn test_enter_highlights_and_leave_clears() {
        let cache = cache_with(1, TicketStatus::Pending);
        let mut drag = DragController::new();

        drag.on_event(
            &cache,
            DragEvent::Enter {
                zone: "resolved".to_string(),
            },
        );
        assert_eq!(drag.highlighted(), Some(TicketStatus::Resolved));

        drag.on_event(&cache, DragEvent::Leave);
        assert!(drag.highlighted().is_none());
    }

    #[test]
    fn test_end_and_cancel_clear_markers() {
        let cache = cache_with(1, TicketStatus::Pending);
        for terminal in [DragEvent::End, DragEvent::Cancel] {
            let mut drag = DragController::new();
            drag.on_event(&cache, DragEvent::Start { ticket_id: 1 });
            drag.on_event(
                &cache,
                DragEvent::Enter {
                    zone: "accepted".to_string(),
                },
            );
            assert!(drag.on_event(&cache, terminal).is_none());
            assert!(drag.dragged().is_none());
            assert!(drag.highlighted().is_none());
        }
    }

    #[test]
    fn test_move_targets_exclude_current() {
        let cache = cache_with(1, TicketStatus::Accepted);
        let targets = move_targets(&cache, 1);
        assert_eq!(
            targets,
            vec![
                TicketStatus::Pending,
                TicketStatus::Resolved,
                TicketStatus::Rejected,
            ]
        );
    }

    #[test]
    fn test_choose_target_one_based() {
        let cache = cache_with(1, TicketStatus::Pending);
        let command = choose_target(&cache, 1, 1).unwrap();
        assert_eq!(command.target, TicketStatus::Accepted);

        assert!(choose_target(&cache, 1, 0).is_none());
        assert!(choose_target(&cache, 1, 4).is_none());
    }

    #[test]
    fn test_move_targets_unknown_ticket() {
        let cache = cache_with(1, TicketStatus::Pending);
        assert!(move_targets(&cache, 99).is_empty());
    }
}

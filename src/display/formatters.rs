use jiff::Timestamp;
use owo_colors::OwoColorize;
use tabled::settings::Style;
use tabled::{Table, Tabled};

use crate::notify::{Toast, ToastLevel};
use crate::types::{Ticket, TicketStatus};
use crate::view::board::BoardViewModel;
use crate::view::list::ListViewModel;

/// Format a status tag with its column color.
pub fn format_status(status: TicketStatus) -> String {
    let tag = format!("[{status}]");
    match status {
        TicketStatus::Pending => tag.yellow().to_string(),
        TicketStatus::Accepted => tag.cyan().to_string(),
        TicketStatus::Resolved => tag.green().to_string(),
        TicketStatus::Rejected => tag.dimmed().to_string(),
    }
}

/// Date part of a timestamp for compact table cells.
fn format_date(at: Timestamp) -> String {
    let s = at.to_string();
    if s.len() >= 10 {
        s[..10].to_string()
    } else {
        s
    }
}

/// A row in the ticket list table
#[derive(Tabled)]
struct TicketRow {
    #[tabled(rename = "ID")]
    id: u64,
    #[tabled(rename = "Title")]
    title: String,
    #[tabled(rename = "Status")]
    status: String,
    #[tabled(rename = "Contact")]
    contact: String,
    #[tabled(rename = "Updated")]
    updated: String,
}

/// Render the list view as a table plus a count line.
pub fn format_ticket_table(vm: &ListViewModel) -> String {
    if vm.rows.is_empty() {
        return "No tickets found\nTry adjusting your filters or create a new ticket".to_string();
    }

    let rows: Vec<TicketRow> = vm
        .rows
        .iter()
        .map(|t| TicketRow {
            id: t.id,
            title: t.title.clone(),
            status: t.status.to_string(),
            contact: t.contact_information.clone(),
            updated: format_date(t.updated_at),
        })
        .collect();

    let mut table = Table::new(rows);
    table.with(Style::rounded());

    format!("{table}\n{} tickets", vm.visible_count)
}

/// Render the board: one section per column with its count, cards beneath.
pub fn format_board(vm: &BoardViewModel) -> String {
    let mut out = String::new();
    for column in &vm.columns {
        out.push_str(&format!(
            "{} ({})\n",
            column.name.bold(),
            column.ticket_count
        ));
        if column.cards.is_empty() {
            out.push_str("  (empty)\n");
        }
        for card in &column.cards {
            out.push_str(&format!(
                "  #{} {} - updated {}\n",
                card.ticket.id.to_string().cyan(),
                card.ticket.title,
                format_date(card.ticket.updated_at)
            ));
        }
        out.push('\n');
    }
    out.push_str(&format!("{} tickets", vm.total_tickets));
    out
}

/// Full single-ticket display for `show`.
pub fn format_ticket_detail(ticket: &Ticket) -> String {
    format!(
        "#{} {} {}\n\n{}\n\nContact: {}\nCreated: {}\nUpdated: {}",
        ticket.id.to_string().cyan(),
        format_status(ticket.status),
        ticket.title.bold(),
        ticket.description,
        ticket.contact_information,
        ticket.created_at,
        ticket.updated_at,
    )
}

pub fn format_toast(toast: &Toast) -> String {
    match toast.level {
        ToastLevel::Success => format!("{} {}", "✓".green(), toast.message),
        ToastLevel::Info => format!("{} {}", "i".cyan(), toast.message),
        ToastLevel::Warning => format!("{} {}", "!".yellow(), toast.message),
        ToastLevel::Error => format!("{} {}", "✗".red(), toast.message),
    }
}

/// Print pending notifications to stderr so command output stays pipeable.
pub fn print_toasts(toasts: &[Toast]) {
    for toast in toasts {
        eprintln!("{}", format_toast(toast));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cache::TicketCache;
    use crate::filter::FilterState;
    use crate::view::board::compute_board_view_model;
    use crate::view::list::compute_list_view_model;

    fn make_ticket(id: u64, title: &str, status: TicketStatus) -> Ticket {
        let at: Timestamp = "2024-05-01T10:00:00Z".parse().unwrap();
        Ticket {
            id,
            title: title.to_string(),
            description: "a description long enough".to_string(),
            contact_information: "a@b.com".to_string(),
            status,
            created_at: at,
            updated_at: at,
        }
    }

    #[test]
    fn test_empty_list_message() {
        let cache = TicketCache::new();
        let vm = compute_list_view_model(&cache, &FilterState::new());
        let out = format_ticket_table(&vm);
        assert!(out.contains("No tickets found"));
    }

    #[test]
    fn test_table_contains_rows_and_count() {
        let mut cache = TicketCache::new();
        cache.replace(vec![
            make_ticket(1, "Printer jam", TicketStatus::Pending),
            make_ticket(2, "Mouse broken", TicketStatus::Resolved),
        ]);
        let vm = compute_list_view_model(&cache, &FilterState::new());
        let out = format_ticket_table(&vm);
        assert!(out.contains("Printer jam"));
        assert!(out.contains("Mouse broken"));
        assert!(out.contains("2 tickets"));
    }

    #[test]
    fn test_board_shows_counts() {
        let mut cache = TicketCache::new();
        cache.replace(vec![make_ticket(1, "Printer jam", TicketStatus::Pending)]);
        let vm = compute_board_view_model(&cache);
        let out = format_board(&vm);
        assert!(out.contains("PENDING"));
        assert!(out.contains("(1)"));
        assert!(out.contains("REJECTED"));
        assert!(out.contains("(empty)"));
    }

    #[test]
    fn test_date_truncation() {
        let at: Timestamp = "2024-05-01T10:30:00Z".parse().unwrap();
        assert_eq!(format_date(at), "2024-05-01");
    }
}

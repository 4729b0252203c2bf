//! HTTP transport for the ticket store API.
//!
//! Every response body is an envelope `{success, data?, message?, count?,
//! error?}`. Network-level failures and application-level `success: false`
//! bodies are both normalized into `HelpdeskError` so callers see a single
//! failure shape with a human-readable message.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{HelpdeskError, Result};
use crate::types::Ticket;

use super::{ListQuery, NewTicket, StatusCount, TicketPatch, TicketStore};

const CONNECT_FAILURE_MESSAGE: &str =
    "Unable to connect to server. Please check your connection.";

#[derive(Debug, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
struct Envelope<T> {
    success: bool,
    #[serde(default)]
    data: Option<T>,
    #[serde(default)]
    message: Option<String>,
    #[serde(default)]
    error: Option<String>,
    #[allow(dead_code)]
    #[serde(default)]
    count: Option<u64>,
}

pub struct HttpStore {
    client: Client,
    base_url: Url,
}

impl HttpStore {
    /// `base_url` is the tickets collection endpoint, e.g.
    /// `http://localhost:8000/tickets`.
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self> {
        let base_url = Url::parse(base_url)
            .map_err(|e| HelpdeskError::Config(format!("invalid API URL '{base_url}': {e}")))?;
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(HelpdeskError::Http)?;
        Ok(Self { client, base_url })
    }

    fn ticket_url(&self, id: u64) -> String {
        format!("{}/{id}", self.base_url)
    }

    async fn send<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        not_found_id: Option<u64>,
    ) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            if e.is_connect() || e.is_timeout() {
                HelpdeskError::Transport(CONNECT_FAILURE_MESSAGE.to_string())
            } else {
                HelpdeskError::Transport(e.to_string())
            }
        })?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| HelpdeskError::Transport(e.to_string()))?;

        decode_envelope(status, &body, not_found_id)
    }
}

/// Maps an HTTP status plus envelope body to the crate error taxonomy:
/// 404 with a known id becomes `TicketNotFound`, any `success: false` body
/// becomes `Api` with the server's message, and an unreadable error body
/// falls back to the bare HTTP status line.
fn decode_envelope<T: DeserializeOwned>(
    status: StatusCode,
    body: &str,
    not_found_id: Option<u64>,
) -> Result<T> {
    let envelope: Envelope<T> = match serde_json::from_str(body) {
        Ok(envelope) => envelope,
        Err(e) => {
            if !status.is_success() {
                return Err(HelpdeskError::Transport(format!(
                    "HTTP {}: {}",
                    status.as_u16(),
                    status.canonical_reason().unwrap_or("Unknown")
                )));
            }
            return Err(HelpdeskError::Json(e));
        }
    };

    if status == StatusCode::NOT_FOUND
        && let Some(id) = not_found_id
    {
        return Err(HelpdeskError::TicketNotFound(id));
    }

    if !envelope.success || !status.is_success() {
        let message = envelope
            .message
            .or(envelope.error)
            .unwrap_or_else(|| format!("HTTP {}", status.as_u16()));
        return Err(HelpdeskError::Api(message));
    }

    envelope
        .data
        .ok_or_else(|| HelpdeskError::Api("response contained no data".to_string()))
}

#[async_trait]
impl TicketStore for HttpStore {
    async fn create(&self, new: NewTicket) -> Result<Ticket> {
        let request = self.client.post(self.base_url.clone()).json(&new);
        self.send(request, None).await
    }

    async fn get(&self, id: u64) -> Result<Ticket> {
        let request = self.client.get(self.ticket_url(id));
        self.send(request, Some(id)).await
    }

    async fn list(&self, query: ListQuery) -> Result<Vec<Ticket>> {
        let mut params: Vec<(&str, String)> = Vec::new();
        if let Some(status) = query.status {
            params.push(("status", status.to_string()));
        }
        if let Some(field) = query.sort_by {
            params.push(("sortBy", field.to_string()));
        }
        if let Some(order) = query.order {
            params.push(("order", order.to_string()));
        }
        let request = self.client.get(self.base_url.clone()).query(&params);
        self.send(request, None).await
    }

    async fn update(&self, id: u64, patch: TicketPatch) -> Result<Ticket> {
        let request = self.client.put(self.ticket_url(id)).json(&patch);
        self.send(request, Some(id)).await
    }

    async fn stats(&self) -> Result<Vec<StatusCount>> {
        let request = self.client.get(format!("{}/stats", self.base_url));
        self.send(request, None).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::TicketStatus;

    #[test]
    fn test_decode_success_envelope() {
        let body = r#"{
            "success": true,
            "data": [{
                "id": 1,
                "title": "Printer jam",
                "description": "Printer on 3rd floor jams every print",
                "contact_information": "a@b.com",
                "status": "pending",
                "created_at": "2024-05-01T10:00:00Z",
                "updated_at": "2024-05-01T10:00:00Z"
            }],
            "count": 1
        }"#;
        let tickets: Vec<Ticket> = decode_envelope(StatusCode::OK, body, None).unwrap();
        assert_eq!(tickets.len(), 1);
        assert_eq!(tickets[0].status, TicketStatus::Pending);
    }

    #[test]
    fn test_decode_application_failure() {
        let body = r#"{"success": false, "message": "Error fetching tickets"}"#;
        let result: Result<Vec<Ticket>> =
            decode_envelope(StatusCode::INTERNAL_SERVER_ERROR, body, None);
        match result {
            Err(HelpdeskError::Api(message)) => assert_eq!(message, "Error fetching tickets"),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_not_found_with_id() {
        let body = r#"{"success": false, "message": "Ticket not found"}"#;
        let result: Result<Ticket> = decode_envelope(StatusCode::NOT_FOUND, body, Some(9));
        assert!(matches!(result, Err(HelpdeskError::TicketNotFound(9))));
    }

    #[test]
    fn test_decode_validation_failure_message() {
        let body = r#"{"success": false, "message": "Invalid status. Must be: pending, accepted, resolved, or rejected"}"#;
        let result: Result<Ticket> = decode_envelope(StatusCode::BAD_REQUEST, body, Some(1));
        match result {
            Err(HelpdeskError::Api(message)) => assert!(message.starts_with("Invalid status")),
            other => panic!("expected Api error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_non_json_error_body() {
        let result: Result<Ticket> =
            decode_envelope(StatusCode::BAD_GATEWAY, "<html>nginx</html>", None);
        match result {
            Err(HelpdeskError::Transport(message)) => {
                assert_eq!(message, "HTTP 502: Bad Gateway");
            }
            other => panic!("expected Transport error, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_success_without_data() {
        let body = r#"{"success": true}"#;
        let result: Result<Ticket> = decode_envelope(StatusCode::OK, body, None);
        assert!(matches!(result, Err(HelpdeskError::Api(_))));
    }

    #[test]
    fn test_new_rejects_bad_url() {
        let result = HttpStore::new("not a url", Duration::from_secs(30));
        assert!(matches!(result, Err(HelpdeskError::Config(_))));
    }
}

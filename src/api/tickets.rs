//! Support ticket endpoints

use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::client::ApiClient;
use crate::error::Result;

/// Lifecycle state of a ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TicketStatus {
    /// Awaiting troubleshooting
    Open,
    /// Fixed
    Resolved,
    /// Handed to an admin
    Escalated,
    /// Closed by the creator
    Closed,
}

/// A support ticket.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    /// Ticket id (e.g. `TCK-1a2b3c4d`)
    pub id: String,
    /// Reported issue
    pub issue: String,
    /// Lifecycle state
    pub status: TicketStatus,
    /// User id of the creator
    pub created_by: String,
    /// Automated troubleshooting attempts consumed
    #[serde(default)]
    pub attempts: u32,
    /// Admin handling an escalation
    #[serde(default)]
    pub assigned_admin: Option<String>,
    /// Troubleshooting history entries
    #[serde(default)]
    pub history: Vec<serde_json::Value>,
}

impl ApiClient {
    /// List tickets visible to the current role.
    pub async fn tickets(&self) -> Result<Vec<Ticket>> {
        self.get("/tickets").await
    }

    /// Open a ticket.
    pub async fn create_ticket(&self, issue: &str) -> Result<Ticket> {
        self.post("/tickets", &json!({ "issue": issue })).await
    }

    /// Close a ticket.
    pub async fn close_ticket(&self, ticket_id: &str) -> Result<Ticket> {
        self.post("/tickets/close", &json!({ "ticket_id": ticket_id }))
            .await
    }

    /// Escalate a ticket to an admin.
    pub async fn escalate_ticket(&self, ticket_id: &str) -> Result<Ticket> {
        self.post("/tickets/escalate", &json!({ "ticket_id": ticket_id }))
            .await
    }
}

//! Equipment endpoints

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::api::client::ApiClient;
use crate::error::Result;

/// Lifecycle state of an equipment item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EquipmentStatus {
    /// Free to request
    Available,
    /// Requested, waiting on an admin
    PendingApproval,
    /// Assigned to a user
    Assigned,
}

/// An equipment item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EquipmentItem {
    /// Equipment id
    pub equipment_id: String,
    /// Display name
    pub name: String,
    /// Lifecycle state
    pub status: EquipmentStatus,
    /// User id currently holding the item
    #[serde(default)]
    pub assigned_to: Option<String>,
    /// User id of the pending requester
    #[serde(default)]
    pub requested_by: Option<String>,
    /// When the pending request was made
    #[serde(default)]
    pub requested_at: Option<DateTime<Utc>>,
    /// Admin who approved the assignment
    #[serde(default)]
    pub approved_by: Option<String>,
    /// When the assignment was approved
    #[serde(default)]
    pub approved_at: Option<DateTime<Utc>>,
}

/// Result of an approval decision.
#[derive(Debug, Clone, Deserialize)]
pub struct ApprovalOutcome {
    /// Resulting status
    pub status: String,
    /// Equipment id the decision applied to
    pub equipment_id: String,
    /// Assignee after an approval
    #[serde(default)]
    pub assigned_to: Option<String>,
}

impl ApiClient {
    /// List equipment visible to the current role (admins see all, users
    /// see their assignments).
    pub async fn equipment(&self) -> Result<Vec<EquipmentItem>> {
        self.get("/equipment").await
    }

    /// Request an item.
    pub async fn request_equipment(&self, equipment_id: &str) -> Result<EquipmentItem> {
        self.post("/equipment/request", &json!({ "equipment_id": equipment_id }))
            .await
    }

    /// Return an assigned item.
    pub async fn return_equipment(&self, equipment_id: &str) -> Result<EquipmentItem> {
        self.post("/equipment/return", &json!({ "equipment_id": equipment_id }))
            .await
    }

    /// Pending approval queue (admin, superuser).
    pub async fn pending_equipment(&self) -> Result<Vec<EquipmentItem>> {
        self.get("/equipment/pending").await
    }

    /// Approve or reject a pending request (admin, superuser). The secret
    /// code identifies the request being decided.
    pub async fn approve_equipment(
        &self,
        equipment_id: &str,
        approve: bool,
        secret_code: &str,
    ) -> Result<ApprovalOutcome> {
        self.post(
            "/equipment/approve",
            &json!({
                "equipment_id": equipment_id,
                "approve": approve,
                "secret_code": secret_code,
            }),
        )
        .await
    }
}

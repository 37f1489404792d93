//! Meetings endpoints

use serde::{Deserialize, Serialize};

use crate::api::client::ApiClient;
use crate::error::Result;

/// Meeting format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MeetingKind {
    /// Physical room booking
    Room,
    /// Online meeting with a conferencing link
    Online,
}

/// A booked meeting.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Meeting {
    /// Meeting id (e.g. `MTG-1a2b3c4d`)
    pub id: String,
    /// Title
    pub title: String,
    /// Date, `YYYY-MM-DD`
    pub date: String,
    /// Start time, `HH:MM`
    pub start_time: String,
    /// Duration in minutes
    pub duration: u32,
    /// Participant emails
    pub participants: Vec<String>,
    /// Format
    #[serde(rename = "type")]
    pub kind: MeetingKind,
    /// Assigned room name
    pub room: Option<String>,
    /// Conferencing link for online meetings
    pub webex: Option<String>,
    /// User id of the creator
    pub created_by: String,
}

/// Booking request.
#[derive(Debug, Serialize)]
pub struct NewMeeting {
    /// Title
    pub title: String,
    /// Date, `YYYY-MM-DD`
    pub date: String,
    /// Start time, `HH:MM`
    pub start_time: String,
    /// Duration in minutes
    pub duration: u32,
    /// Participant emails
    pub participants: Vec<String>,
    /// Format
    #[serde(rename = "type")]
    pub kind: MeetingKind,
}

impl ApiClient {
    /// List meetings visible to the current role (admins see all, users
    /// see their own).
    pub async fn meetings(&self) -> Result<Vec<Meeting>> {
        self.get("/meetings").await
    }

    /// Book a meeting.
    pub async fn create_meeting(&self, request: &NewMeeting) -> Result<Meeting> {
        self.post("/meetings", request).await
    }
}

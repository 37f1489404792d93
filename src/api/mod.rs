//! Portal API surface
//!
//! The gateway client plus typed wrappers for each endpoint group. All
//! traffic flows through [`client::ApiClient`]; the wrappers never attach
//! credentials themselves.

pub mod admin;
pub mod auth;
pub mod chat;
pub mod client;
pub mod equipment;
pub mod meetings;
pub mod tickets;

// Re-exports for convenience
pub use admin::{AdminOverview, AllSystemData, AuditEntry, ManagedUser};
pub use auth::{LoginRequest, LoginResponse};
pub use chat::{ChatReply, ChatRequest};
pub use client::ApiClient;
pub use equipment::{ApprovalOutcome, EquipmentItem, EquipmentStatus};
pub use meetings::{Meeting, MeetingKind, NewMeeting};
pub use tickets::{Ticket, TicketStatus};

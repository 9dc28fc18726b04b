//! Fixed marker-id sets and field-extraction key orders.
//!
//! These tables are behavioral configuration: changing any entry changes
//! reconstruction output and requires re-validation against known logs.

/// Authoritative session start marker (LSM session connect).
pub const SESSION_START_ID: &str = "21";

/// Explicit disconnect/logoff markers.
pub const SESSION_END_IDS: [&str; 2] = ["24", "4634"];

/// Administratively significant events eligible for grace correlation.
pub const ADMIN_EVENT_IDS: [&str; 8] = [
  "4720", "4722", "4724", "4728", "4732", "4698", "7045", "1102",
];

/// Candidate keys for the acting user, in priority order.
pub const USER_KEYS: [&str; 5] = [
  "TargetUserName",
  "SubjectUserName",
  "User",
  "AccountName",
  "Param1",
];

/// Candidate keys for the client address, in priority order.
pub const SOURCE_IP_KEYS: [&str; 5] = [
  "IpAddress",
  "ClientAddress",
  "SourceNetworkAddress",
  "Address",
  "Param3",
];

pub fn is_session_end(event_id: &str) -> bool {
  SESSION_END_IDS.contains(&event_id)
}

pub fn is_admin_event(event_id: &str) -> bool {
  ADMIN_EVENT_IDS.contains(&event_id)
}

/// Human-readable label for a known event id, used to backfill a missing
/// `event_name`. Ids outside this table keep an empty name.
pub fn event_label(event_id: &str) -> Option<&'static str> {
  match event_id {
    "4624" => Some("Successful Logon"),
    "4625" => Some("Failed Logon"),
    "4634" => Some("Logoff"),
    "1149" => Some("RDP Authentication Successful"),
    "21" => Some("RDP Session Connect"),
    "22" => Some("Shell Start"),
    "24" => Some("Session Disconnect"),
    "4720" => Some("User Account Created"),
    "4722" => Some("User Account Enabled"),
    "4723" => Some("Password Change Attempt"),
    "4724" => Some("Password Reset Attempt"),
    "4725" => Some("User Account Disabled"),
    "4732" => Some("User Added To Privileged Group"),
    "4728" => Some("User Added To Security Group"),
    "7045" => Some("New Service Installed"),
    "4698" => Some("Scheduled Task Created"),
    "1102" => Some("Security Logs Cleared"),
    "129" => Some("Scheduled Task Registered (TaskScheduler)"),
    _ => None,
  }
}

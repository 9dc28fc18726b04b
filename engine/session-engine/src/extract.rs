//! Best-effort field extraction from source-dependent `details` maps.
//!
//! Every lookup of user/address/task/service fields goes through
//! [`first_present`] with an explicit candidate-key order, so the priority
//! lists stay auditable in one place (`markers.rs`).

use std::collections::HashMap;

use crate::markers;

/// Return the first non-empty value among `keys`, in order.
pub fn first_present<'a>(details: &'a HashMap<String, String>, keys: &[&str]) -> Option<&'a str> {
  keys
    .iter()
    .filter_map(|key| details.get(*key))
    .map(String::as_str)
    .find(|value| !value.is_empty())
}

/// Best-effort acting user from an event's details.
pub fn extract_user(details: &HashMap<String, String>) -> Option<String> {
  first_present(details, &markers::USER_KEYS).map(String::from)
}

/// Best-effort client address from an event's details.
pub fn extract_source_ip(details: &HashMap<String, String>) -> Option<String> {
  first_present(details, &markers::SOURCE_IP_KEYS).map(String::from)
}

//! AWS-oriented adapters and handlers for the account provisioning portal.
//!
//! This crate owns runtime integration details (Lambda handlers, the API
//! Gateway response envelope, and collaborator traits for persistence and
//! status probes). The validation and record-building primitives live in
//! `crates/portal_intake_core`.

pub mod adapters;
pub mod handlers;

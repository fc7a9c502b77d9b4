//! Shared account-provisioning domain primitives.
//!
//! This crate owns the field validation registry, the validation engine,
//! the storage-item builder, and the request/response contracts. It
//! intentionally excludes AWS SDK and Lambda runtime concerns; those live
//! in `crates/portal_intake_lambda`.

pub mod contract;
pub mod record;
pub mod validation;

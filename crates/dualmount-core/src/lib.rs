//! Core types, errors, config, events, and tracing for the dual-mount
//! role & layout governance engine.
//!
//! Nothing in this crate makes decisions; it is the shared vocabulary that
//! `dualmount-analysis` and host harnesses agree on.

pub mod config;
pub mod constants;
pub mod errors;
pub mod events;
pub mod tracing;
pub mod types;

pub use types::{Environment, Layer, Priority, ProtectionLevel, RoleCategory};

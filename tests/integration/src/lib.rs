//! Integration test utilities for the webhook bridge
//!
//! This crate provides helpers for running end-to-end tests against
//! the intake server with a scripted stand-in homeserver.

pub mod fixtures;
pub mod helpers;

pub use fixtures::*;
pub use helpers::*;

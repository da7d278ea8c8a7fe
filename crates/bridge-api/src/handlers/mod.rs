//! Route handlers
//!
//! All HTTP request handlers for the intake server.

pub mod health;
pub mod webhook;

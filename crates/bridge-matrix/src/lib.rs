//! # bridge-matrix
//!
//! Delivery layer implementing the `MessageDelivery` trait against the
//! Matrix client-server API.
//!
//! ## Overview
//!
//! This crate sends canonical messages into a Matrix room as
//! `m.room.message` events with HTML-formatted bodies. It handles:
//!
//! - Homeserver endpoint construction with path encoding
//! - Bearer-token authentication
//! - Request timeouts
//! - Mapping transport and API failures into `DeliveryError`
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bridge_core::{ChatMessage, MessageDelivery, RoomId};
//! use bridge_matrix::{MatrixClient, MatrixConfig};
//!
//! async fn example() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = MatrixClient::new(MatrixConfig::default())?;
//!     let room = RoomId::new("!ops:example.org")?;
//!     let message = ChatMessage::new("hello", "<b>hello</b>");
//!     client.deliver(&room, &message).await?;
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod wire;

// Re-export commonly used types
pub use client::{MatrixClient, MatrixConfig};
pub use wire::RoomMessage;

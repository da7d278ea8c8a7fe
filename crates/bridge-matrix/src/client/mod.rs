//! Matrix homeserver client

mod matrix;

pub use matrix::{MatrixClient, MatrixConfig};

//! Wire types for the Matrix client-server API

mod room_message;

pub use room_message::RoomMessage;

//! Value objects - immutable types that represent domain concepts

mod room_id;
mod source_type;

pub use room_id::{RoomId, RoomIdError};
pub use source_type::{SourceType, SourceTypeParseError};

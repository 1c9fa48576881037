//! Record identifiers.
//!
//! An id is the creation time in milliseconds zero-padded to 15 digits,
//! followed by a hyphenless UUIDv4 and `000`: 50 characters that sort by
//! creation time and never contain `-`.

use uuid::Uuid;

pub const ID_LENGTH: usize = 50;

pub fn next_id() -> String {
    next_id_at(chrono::Utc::now().timestamp_millis())
}

pub fn next_id_at(epoch_millis: i64) -> String {
    format!("{:015}{}000", epoch_millis, Uuid::new_v4().simple())
}

pub mod job;
pub mod letter;
pub mod resume;

use uuid::Uuid;

/// Fresh id for any stored record. Random rather than clock-derived, so two
/// records created in the same millisecond never collide.
pub fn new_record_id() -> String {
    Uuid::new_v4().to_string()
}

// Dojo state on disk
//
// Components:
// - Layout: where every file and directory of a dojo lives
// - Progress: learner profile and curriculum status
// - Integration: live session/lesson state for the external assistant
// - Persistence: load/save of both documents behind the StateStore trait

pub mod layout;
pub mod progress;
pub mod integration;
pub mod persistence;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

// Re-export key types
pub use layout::DojoLayout;
pub use progress::{Foundation, FoundationStatus, Progress, DEFAULT_LEVEL};
pub use integration::ClaudeIntegration;
pub use persistence::{FileStore, MemoryStore, StateStore};

/// Accept `null` wherever a list is expected
pub(crate) fn null_as_empty<'de, D, T>(deserializer: D) -> std::result::Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

/// Write an empty list as `null`, the way the assistant side expects it
pub(crate) fn empty_as_null<S, T>(
    items: &[T],
    serializer: S,
) -> std::result::Result<S::Ok, S::Error>
where
    S: Serializer,
    T: Serialize,
{
    if items.is_empty() {
        serializer.serialize_none()
    } else {
        items.serialize(serializer)
    }
}

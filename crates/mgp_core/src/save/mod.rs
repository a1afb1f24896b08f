// Save/Load for career seasons: a reduced, versionless JSON snapshot
// handed to an injected storage backend.

pub mod error;
pub mod format;
pub mod storage;

pub use error::SaveError;
pub use format::{snapshot_file_name, SeasonSnapshot, SAVE_SUFFIX};
pub use storage::{FileStorage, MemoryStorage, SaveStorage};

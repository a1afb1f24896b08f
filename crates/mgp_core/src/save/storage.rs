use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};

/// Storage capability injected into the career manager.
///
/// Failures surface as `false`/`None`; the career layer turns them into
/// [`super::SaveError`] values with context.
pub trait SaveStorage {
    /// Writes `content` under `name`. Returns whether the write succeeded.
    fn save(&self, content: &str, name: &str) -> bool;

    /// Reads the content stored under `name`, or `None` when absent.
    fn load(&self, name: &str) -> Option<String>;

    /// Names of all entries this storage holds.
    fn list(&self) -> Vec<String>;
}

/// File-system storage rooted at a directory.
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        FileStorage { dir: dir.into() }
    }

    pub fn current_dir() -> Self {
        FileStorage {
            dir: PathBuf::from("."),
        }
    }

    fn path_for(&self, name: &str) -> PathBuf {
        self.dir.join(name)
    }
}

impl SaveStorage for FileStorage {
    fn save(&self, content: &str, name: &str) -> bool {
        if let Err(e) = fs::create_dir_all(&self.dir) {
            log::warn!("could not create save directory {:?}: {e}", self.dir);
            return false;
        }
        match fs::write(self.path_for(name), content) {
            Ok(()) => true,
            Err(e) => {
                log::warn!("could not write save file {name}: {e}");
                false
            }
        }
    }

    fn load(&self, name: &str) -> Option<String> {
        match fs::read_to_string(self.path_for(name)) {
            Ok(content) => Some(content),
            Err(e) => {
                log::warn!("could not read save file {name}: {e}");
                None
            }
        }
    }

    fn list(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.dir) else {
            return Vec::new();
        };
        entries
            .filter_map(|entry| entry.ok())
            .filter(|entry| entry.path().is_file())
            .filter_map(|entry| entry.file_name().into_string().ok())
            .collect()
    }
}

/// In-memory storage shared between clones. Used by tests and embedding
/// hosts that manage persistence themselves.
#[derive(Clone, Default)]
pub struct MemoryStorage {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStorage for MemoryStorage {
    fn save(&self, content: &str, name: &str) -> bool {
        match self.entries.lock() {
            Ok(mut entries) => {
                entries.insert(name.to_string(), content.to_string());
                true
            }
            Err(_) => false,
        }
    }

    fn load(&self, name: &str) -> Option<String> {
        self.entries.lock().ok()?.get(name).cloned()
    }

    fn list(&self) -> Vec<String> {
        match self.entries.lock() {
            Ok(entries) => entries.keys().cloned().collect(),
            Err(_) => Vec::new(),
        }
    }
}

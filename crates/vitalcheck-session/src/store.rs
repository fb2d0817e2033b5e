use std::io;
use std::path::{Path, PathBuf};

use vitalcheck_core::storage_keys;

use crate::error::SessionError;

/// Where the serialized session record lives between runs.
///
/// Implementations deal in raw text only; decoding and the fallback for
/// corrupt content happen in [`crate::persist`].
pub trait SessionStore {
    /// Stored contents, or `None` if nothing has been saved.
    fn load(&self) -> Result<Option<String>, SessionError>;

    fn save(&mut self, contents: &str) -> Result<(), SessionError>;

    /// Remove any stored record. Clearing an empty store is not an error.
    fn clear(&mut self) -> Result<(), SessionError>;
}

/// In-memory store, for tests and embedding.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    contents: Option<String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
        }
    }

    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        Ok(self.contents.clone())
    }

    fn save(&mut self, contents: &str) -> Result<(), SessionError> {
        self.contents = Some(contents.to_string());
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        self.contents = None;
        Ok(())
    }
}

/// A single JSON file inside a session directory.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn path(&self) -> PathBuf {
        self.dir.join(storage_keys::SESSION_FILE)
    }
}

impl SessionStore for FileStore {
    fn load(&self) -> Result<Option<String>, SessionError> {
        match std::fs::read_to_string(self.path()) {
            Ok(contents) => Ok(Some(contents)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn save(&mut self, contents: &str) -> Result<(), SessionError> {
        let path = self.path();
        write_private_file(&path, contents)?;
        tracing::debug!(path = %path.display(), "session saved");
        Ok(())
    }

    fn clear(&mut self) -> Result<(), SessionError> {
        let path = self.path();
        if path.exists() {
            std::fs::remove_file(&path)?;
            tracing::info!(path = %path.display(), "session cleared");
        }
        Ok(())
    }
}

/// Replace `path` with `contents` through a sibling `.tmp` file and a rename.
/// The file is owner-only on Unix. Missing parent directories are created.
pub fn write_private_file(path: &Path, contents: &str) -> io::Result<()> {
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        std::fs::create_dir_all(dir)?;
    }

    let mut tmp_path = path.as_os_str().to_owned();
    tmp_path.push(".tmp");
    let tmp_path = PathBuf::from(tmp_path);
    std::fs::write(&tmp_path, contents.as_bytes())?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(&tmp_path, std::fs::Permissions::from_mode(0o600))?;
    }

    std::fs::rename(&tmp_path, path)
}

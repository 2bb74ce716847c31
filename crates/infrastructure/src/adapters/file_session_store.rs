//! File-backed session persistence
//!
//! The session is stored as one JSON document. Writes go to a sibling
//! temporary file that is then renamed over the old one, so a crash never
//! leaves a half-written session behind.

use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use application::error::ApplicationError;
use application::ports::SessionPersistencePort;
use domain::Session;
use tracing::{debug, warn};

/// Session store keeping the session in a JSON file
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Store the session at `path`; parent directories are created on first save
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Location of the session file
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn write_private(path: &Path, contents: &[u8]) -> io::Result<()> {
        let mut options = fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o600);
        }
        let mut file = options.open(path)?;
        file.write_all(contents)?;
        file.sync_all()
    }
}

fn io_error(action: &str, path: &Path, err: &io::Error) -> ApplicationError {
    ApplicationError::Internal(format!("Failed to {action} {}: {err}", path.display()))
}

impl SessionPersistencePort for FileSessionStore {
    fn load(&self) -> Result<Option<Session>, ApplicationError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "No persisted session");
                return Ok(None);
            },
            Err(e) => return Err(io_error("read", &self.path, &e)),
        };

        serde_json::from_str::<Session>(&contents)
            .map(Some)
            .map_err(|e| {
                warn!(path = %self.path.display(), error = %e, "Unreadable session file");
                ApplicationError::Internal(format!(
                    "Corrupt session file {}: {e}",
                    self.path.display()
                ))
            })
    }

    fn save(&self, session: &Session) -> Result<(), ApplicationError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(|e| io_error("create", parent, &e))?;
        }

        let json = serde_json::to_vec_pretty(session)
            .map_err(|e| ApplicationError::Internal(format!("Failed to encode session: {e}")))?;

        let temp = self.temp_path();
        Self::write_private(&temp, &json).map_err(|e| io_error("write", &temp, &e))?;
        fs::rename(&temp, &self.path).map_err(|e| io_error("replace", &self.path, &e))?;

        debug!(path = %self.path.display(), "Session saved");
        Ok(())
    }

    fn clear(&self) -> Result<(), ApplicationError> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(io_error("remove", &self.path, &e)),
        }
    }
}

//! File-backed session storage.
//!
//! The session is kept as a JSON document. On Unix the file is only readable by its owner,
//! since it holds a bearer token.

#![warn(missing_docs)]
#![warn(clippy::all)]

use std::{
    io::ErrorKind,
    path::{Path, PathBuf},
};

use async_trait::async_trait;
use ctrlhora_config::Config;
use ctrlhora_models::Session;
use ctrlhora_session_interface::{Result, SessionError, SessionStore};
use tokio::io::AsyncWriteExt;

const APP_DIRECTORY: &str = "ctrlhora";
const SESSION_FILE_NAME: &str = "session.json";

/// Session store writing to a single JSON file.
#[derive(Debug, Clone)]
pub struct FileSessionStore {
    path: PathBuf,
}

impl FileSessionStore {
    /// Create a store at an explicit path.
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// Create a store from configuration.
    ///
    /// An empty `session.file_path` falls back to the user data directory.
    pub fn from_config(config: &Config) -> Self {
        if config.session.file_path.is_empty() {
            Self::new(default_session_path())
        } else {
            Self::new(&config.session.file_path)
        }
    }

    /// Path of the session file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> SessionError {
        SessionError::IoError {
            path: self.path.display().to_string(),
            source,
        }
    }

    async fn write_contents(&self, contents: &[u8]) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                tokio::fs::create_dir_all(parent)
                    .await
                    .map_err(|e| self.io_error(e))?;
            }
        }

        let mut options = tokio::fs::OpenOptions::new();
        options.write(true).create(true).truncate(true);
        #[cfg(unix)]
        options.mode(0o600);

        let mut file = options
            .open(&self.path)
            .await
            .map_err(|e| self.io_error(e))?;

        // `mode` only applies on creation.
        #[cfg(unix)]
        {
            use std::os::unix::fs::PermissionsExt;

            file.set_permissions(std::fs::Permissions::from_mode(0o600))
                .await
                .map_err(|e| self.io_error(e))?;
        }

        file.write_all(contents)
            .await
            .map_err(|e| self.io_error(e))?;
        file.flush().await.map_err(|e| self.io_error(e))
    }
}

/// Default session file location, inside the user data directory.
pub fn default_session_path() -> PathBuf {
    dirs::data_local_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIRECTORY)
        .join(SESSION_FILE_NAME)
}

#[async_trait]
impl SessionStore for FileSessionStore {
    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn session_load(&self) -> Result<Option<Session>> {
        let contents = match tokio::fs::read(&self.path).await {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(self.io_error(e)),
        };

        serde_json::from_slice(&contents)
            .map(Some)
            .map_err(|e| SessionError::JsonError { source: e })
    }

    #[tracing::instrument(skip_all, fields(path = %self.path.display(), username = %session.username))]
    async fn session_save(&self, session: &Session) -> Result<()> {
        let contents = serde_json::to_vec_pretty(session)
            .map_err(|e| SessionError::JsonError { source: e })?;
        self.write_contents(&contents).await
    }

    #[tracing::instrument(skip(self), fields(path = %self.path.display()))]
    async fn session_clear(&self) -> Result<()> {
        match tokio::fs::remove_file(&self.path).await {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(self.io_error(e)),
        }
    }
}

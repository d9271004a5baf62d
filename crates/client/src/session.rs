//! Session store: the bearer token and language preference.
//!
//! The analog of the web client's browser storage - two values under fixed
//! keys, nothing else. The token has no client-side expiry or refresh
//! logic; its validity is judged solely by the backend's response to the
//! next request.
//!
//! File-backed stores write atomically (temp file + rename) so a crash
//! never leaves a half-written session behind.

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, PoisonError, RwLock};

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use velasona_core::Language;

/// Errors that can occur reading or writing the session file.
#[derive(Debug, Error)]
pub enum SessionStoreError {
    /// Reading or writing the session file failed.
    #[error("session file I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The session file holds invalid JSON.
    #[error("corrupt session file: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// On-disk session shape.
#[derive(Debug, Serialize, Deserialize, Default)]
struct SessionFile {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    token: Option<String>,
    #[serde(default)]
    language: Language,
}

struct State {
    path: Option<PathBuf>,
    token: Option<SecretString>,
    language: Language,
}

/// Persistent holder of the bearer token and language preference.
///
/// Cheap to clone; clones share state.
#[derive(Clone)]
pub struct SessionStore {
    inner: Arc<RwLock<State>>,
}

impl std::fmt::Debug for SessionStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.read();
        f.debug_struct("SessionStore")
            .field("path", &state.path)
            .field("token", &state.token.as_ref().map(|_| "[REDACTED]"))
            .field("language", &state.language)
            .finish()
    }
}

impl SessionStore {
    /// Open a file-backed session store.
    ///
    /// A missing file yields an empty session with the default language.
    ///
    /// # Errors
    ///
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, SessionStoreError> {
        let path = path.into();
        let file = match fs::read_to_string(&path) {
            Ok(contents) => serde_json::from_str::<SessionFile>(&contents)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => SessionFile::default(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            inner: Arc::new(RwLock::new(State {
                path: Some(path),
                token: file.token.map(SecretString::from),
                language: file.language,
            })),
        })
    }

    /// Create a session store that lives in memory only.
    #[must_use]
    pub fn in_memory() -> Self {
        Self {
            inner: Arc::new(RwLock::new(State {
                path: None,
                token: None,
                language: Language::default(),
            })),
        }
    }

    /// The stored bearer token, if any.
    #[must_use]
    pub fn token(&self) -> Option<SecretString> {
        self.read().token.clone()
    }

    /// Whether a bearer token is stored.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.read().token.is_some()
    }

    /// Store a bearer token and persist the session.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the session file fails.
    pub fn set_token(&self, token: &str) -> Result<(), SessionStoreError> {
        let mut state = self.write();
        state.token = Some(SecretString::from(token.to_owned()));
        persist(&state)
    }

    /// Remove the bearer token and persist the session.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the session file fails.
    pub fn clear_token(&self) -> Result<(), SessionStoreError> {
        let mut state = self.write();
        state.token = None;
        persist(&state)
    }

    /// The stored language preference (default `es`).
    #[must_use]
    pub fn language(&self) -> Language {
        self.read().language
    }

    /// Store the language preference and persist the session.
    ///
    /// # Errors
    ///
    /// Returns an error if persisting the session file fails.
    pub fn set_language(&self, language: Language) -> Result<(), SessionStoreError> {
        let mut state = self.write();
        state.language = language;
        persist(&state)
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, State> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, State> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }
}

/// Write the session file atomically. In-memory stores skip persistence.
fn persist(state: &State) -> Result<(), SessionStoreError> {
    let Some(path) = &state.path else {
        return Ok(());
    };

    let file = SessionFile {
        token: state
            .token
            .as_ref()
            .map(|t| t.expose_secret().to_owned()),
        language: state.language,
    };

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent)?;
    }

    let tmp = tmp_path(path);
    fs::write(&tmp, serde_json::to_vec_pretty(&file)?)?;
    fs::rename(&tmp, path)?;
    Ok(())
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    PathBuf::from(tmp)
}

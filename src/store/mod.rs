//! Preference store for the visitor's name and session flags.
//!
//! SYSTEM CONTEXT
//! ==============
//! Every page reads and writes a handful of string entries in origin-scoped
//! browser storage. Pages never touch storage directly: they go through
//! [`Prefs`], which is built once at start-up and handed to each behavior.
//!
//! ERROR HANDLING
//! ==============
//! Backends report faults through [`StorageError`]. [`Prefs`] logs them and
//! collapses reads to absence and writes to no-ops, so a browser that blocks
//! storage (private mode, disabled cookies) still gets working pages.


pub mod browser;
pub mod memory;

use std::fmt;
use std::sync::Arc;

/// Value stored under flag keys when the flag is set.
pub const FLAG_SET: &str = "1";

/// Keys removed together by [`Prefs::clear_session`].
pub const SESSION_KEYS: [PrefKey; 2] = [PrefKey::LoggedIn, PrefKey::UserEmail];

/// Recognized preference entries.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PrefKey {
    /// Display name entered on the landing page.
    UserName,
    /// Set to [`FLAG_SET`] once the landing flow completes. Nothing reads it yet.
    SeenIntro,
    /// Session flag owned by an external login flow; only cleared here.
    LoggedIn,
    /// Visitor email written elsewhere; cleared on logout.
    UserEmail,
}

impl PrefKey {
    /// Storage key as written to `localStorage`.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::UserName => "cc_user_name",
            Self::SeenIntro => "cc_seen_intro",
            Self::LoggedIn => "cc_logged_in",
            Self::UserEmail => "cc_user_email",
        }
    }
}

impl fmt::Display for PrefKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fault raised by a storage backend.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StorageError {
    /// No storage object could be obtained, or the backend refuses all access.
    #[error("storage is unavailable")]
    Unavailable,
    #[error("failed to read `{key}`: {reason}")]
    Read { key: String, reason: String },
    #[error("failed to write `{key}`: {reason}")]
    Write { key: String, reason: String },
    #[error("failed to remove `{key}`: {reason}")]
    Remove { key: String, reason: String },
}

/// Raw string key-value backend.
///
/// `get` distinguishes a stored value (`Ok(Some)`), an unset key (`Ok(None)`)
/// and a fault (`Err`). Callers normally go through [`Prefs`] instead.
pub trait PreferenceStore: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Best-effort access to the preference entries.
#[derive(Clone)]
pub struct Prefs {
    store: Arc<dyn PreferenceStore>,
}

impl Prefs {
    pub fn new(store: Arc<dyn PreferenceStore>) -> Self {
        Self { store }
    }

    /// Read `key`, treating storage faults as absence.
    pub fn read(&self, key: PrefKey) -> Option<String> {
        match self.store.get(key.as_str()) {
            Ok(value) => value,
            Err(e) => {
                log::warn!("preference read failed: key={key} error={e}");
                None
            }
        }
    }

    /// Write `value` under `key`, dropping the write on storage faults.
    pub fn write(&self, key: PrefKey, value: &str) {
        if let Err(e) = self.store.set(key.as_str(), value) {
            log::warn!("preference write failed: key={key} error={e}");
        }
    }

    /// Remove the session flag and email while keeping the stored name.
    ///
    /// Both removals are attempted even if the first fails. Returns the first
    /// fault so callers can tell, though logout proceeds either way.
    pub fn clear_session(&self) -> Result<(), StorageError> {
        let mut first_error = None;
        for key in SESSION_KEYS {
            if let Err(e) = self.store.remove(key.as_str()) {
                log::warn!("preference remove failed: key={key} error={e}");
                first_error.get_or_insert(e);
            }
        }
        first_error.map_or(Ok(()), Err)
    }

    /// Whether the externally managed session flag is set.
    pub fn is_logged_in(&self) -> bool {
        self.read(PrefKey::LoggedIn).as_deref() == Some(FLAG_SET)
    }
}

impl fmt::Debug for Prefs {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Prefs").finish_non_exhaustive()
    }
}

//! Host environment lookups behind an injectable trait.
//!
//! The reader needs exactly two facts from the host: the user's home
//! directory and the current working directory. Keeping them behind
//! [`HostEnv`] lets tests substitute fixed paths instead of touching the
//! real environment.

use std::path::PathBuf;

/// Read-only view of the host environment.
pub trait HostEnv {
    /// The user's home directory, if the host can resolve one.
    fn home_dir(&self) -> Option<PathBuf>;

    /// The directory relative paths are resolved against.
    fn current_dir(&self) -> PathBuf;
}

/// The real host: `dirs` for the home directory, `std::env` for the cwd.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnv;

impl HostEnv for SystemEnv {
    fn home_dir(&self) -> Option<PathBuf> {
        dirs::home_dir()
    }

    fn current_dir(&self) -> PathBuf {
        // Falls back to "." only when the cwd has been deleted out from
        // under the process.
        std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
    }
}

//! Settings access for the move-analyzer extension.
//!
//! Wraps the slice of the host settings store under the `move-analyzer`
//! namespace and exposes the one derived value consumers need: the resolved
//! path of the language-server executable.
//!
//! # Module layout
//!
//! - **snapshot** — [`SettingsSnapshot`], the read-only namespace-scoped
//!   key-value view, plus document loading/parsing.
//! - **host** — [`HostEnv`] trait isolating home-dir and cwd lookups, with
//!   [`SystemEnv`] as the real implementation.
//! - **reader** — [`Configuration`], the accessor that applies the
//!   default-substitution and path-resolution rules.

mod host;
mod reader;
mod snapshot;

pub use host::{HostEnv, SystemEnv};
pub use reader::Configuration;
pub use snapshot::SettingsSnapshot;

/// Settings-group identifier under which all recognized keys are scoped.
pub const NAMESPACE: &str = "move-analyzer";

/// Key of the language-server executable path setting, relative to
/// [`NAMESPACE`].
pub const SERVER_PATH_KEY: &str = "server.path";

/// Declared default for [`SERVER_PATH_KEY`] — where `cargo install` puts the
/// binary.
pub const DEFAULT_SERVER_PATH: &str = "~/.cargo/bin/move-analyzer";

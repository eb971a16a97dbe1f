//! The configuration reader and its path-resolution rules.

use std::path::{Component, Path, PathBuf};

use tracing::debug;

use super::host::HostEnv;
use super::snapshot::SettingsSnapshot;
use super::{DEFAULT_SERVER_PATH, SERVER_PATH_KEY};

/// Strongly-typed accessor over a [`SettingsSnapshot`].
///
/// Binds the snapshot to a [`HostEnv`] at construction; construction cannot
/// fail and performs no validation. Every accessor reads the snapshot fresh
/// on each call — nothing is cached.
#[derive(Debug, Clone)]
pub struct Configuration<E: HostEnv> {
    snapshot: SettingsSnapshot,
    env: E,
}

impl<E: HostEnv> Configuration<E> {
    pub fn new(snapshot: SettingsSnapshot, env: E) -> Self {
        Self { snapshot, env }
    }

    /// The snapshot this reader was bound to.
    pub fn snapshot(&self) -> &SettingsSnapshot {
        &self.snapshot
    }

    /// Where to find the companion language-server binary.
    ///
    /// Resolution, in order:
    /// 1. the `server.path` setting, falling back to
    ///    `~/.cargo/bin/move-analyzer` when unset;
    /// 2. an explicitly cleared (empty) setting behaves the same as unset;
    /// 3. a leading `~/` is replaced with the host home directory, the
    ///    remainder kept verbatim;
    /// 4. anything else is resolved against the host working directory and
    ///    lexically normalized.
    ///
    /// The result is never checked for existence — a missing binary is the
    /// launcher's problem, not ours.
    pub fn server_path(&self) -> PathBuf {
        let configured = self.snapshot.get_str(SERVER_PATH_KEY);
        let raw = match configured {
            Some("") | None => {
                if configured.is_some() {
                    debug!(key = SERVER_PATH_KEY, "setting cleared to empty string, using default");
                }
                DEFAULT_SERVER_PATH
            }
            Some(value) => value,
        };

        if let Some(rest) = raw.strip_prefix("~/") {
            if let Some(home) = self.env.home_dir() {
                return home.join(rest);
            }
            // No resolvable home: hand the literal value back unchanged.
            debug!(value = raw, "no home directory available, skipping expansion");
            return PathBuf::from(raw);
        }

        normalize(&self.env.current_dir().join(raw))
    }
}

/// Lexically normalize a path: drop `.` components and fold `..` into the
/// preceding component where one exists. Purely textual — symlinks are not
/// consulted.
fn normalize(path: &Path) -> PathBuf {
    let mut out = PathBuf::new();
    for component in path.components() {
        match component {
            Component::Prefix(prefix) => out.push(prefix.as_os_str()),
            Component::RootDir => out.push(Component::RootDir.as_os_str()),
            Component::CurDir => {}
            Component::ParentDir => match out.components().next_back() {
                Some(Component::Normal(_)) => {
                    out.pop();
                }
                // ".." at the root stays at the root.
                Some(Component::RootDir | Component::Prefix(_)) => {}
                // Relative path escaping its starting point.
                _ => out.push(".."),
            },
            Component::Normal(name) => out.push(name),
        }
    }
    if out.as_os_str().is_empty() {
        out.push(".");
    }
    out
}

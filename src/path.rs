/*!
 * Lexical path resolution and well-known directory discovery
 */

use std::env;
use std::path::{Component, Path, PathBuf};

fn current_dir() -> PathBuf {
    env::current_dir().unwrap_or_else(|_| PathBuf::from("/"))
}

/// Resolve a path into an absolute, lexically normalized form.
///
/// Relative paths are made absolute against the current working directory,
/// then segments are rewritten left to right: `.` is dropped, `..` removes
/// the previously retained segment (a no-op at the root), empty components
/// from repeated separators are skipped. The filesystem is never consulted,
/// so a `..` that crosses a symlinked directory resolves by lexical
/// structure alone; the result depends only on the input path and the
/// working directory.
pub fn resolve(path: &Path) -> PathBuf {
    let absolute = if path.is_absolute() {
        path.to_path_buf()
    } else {
        current_dir().join(path)
    };

    let mut resolved = PathBuf::new();
    for component in absolute.components() {
        match component {
            Component::CurDir => {}
            Component::ParentDir => {
                // pop() refuses to remove the root, so "/.." stays "/"
                resolved.pop();
            }
            _ => resolved.push(component),
        }
    }

    resolved
}

/// The filesystem root of the current working directory.
pub fn root_path() -> PathBuf {
    let cwd = current_dir();
    let mut root = cwd.as_path();
    while let Some(parent) = root.parent() {
        root = parent;
    }
    root.to_path_buf()
}

/// The current user's home directory, always absolute.
///
/// Resolution order: a non-empty `$HOME`, then the OS user database entry,
/// then the current working directory as a last resort.
pub fn home_dir() -> PathBuf {
    if let Ok(home) = env::var("HOME") {
        if !home.is_empty() {
            return resolve(Path::new(&home));
        }
    }

    if let Some(home) = dirs::home_dir() {
        return resolve(&home);
    }

    current_dir()
}

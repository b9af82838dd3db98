/*!
 * Core types for classified filesystem entries
 */

use std::path::PathBuf;
use std::time::SystemTime;

/// Recognized non-regular, non-directory, non-symlink entry types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpecialKind {
    /// Block device node
    BlockDevice,
    /// Character device node
    CharDevice,
    /// Named pipe (FIFO)
    Fifo,
    /// Named socket
    Socket,
    /// Anything the platform reports that is none of the above
    Unknown,
}

/// The kind of a classified entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// Symbolic link, always reported by its own type, never resolved
    Symlink,
    /// Directory
    Directory,
    /// Regular file
    Regular,
    /// Special file (device, pipe, socket) or an unrecognized state
    Special(SpecialKind),
}

/// Kind-specific payload of a classification.
///
/// Exactly one variant is populated per entry and it matches
/// `FileInfo::kind`; construction happens only in the inspector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ExtraInfo {
    /// Target path as stored by the link, possibly dangling
    Symlink { target: PathBuf },
    /// Immediate-children summary; counts stay zero when `has_access` is false
    Directory {
        has_access: bool,
        subdir_count: usize,
        file_count: usize,
    },
    /// Size in bytes
    Regular { size: u64 },
    /// Special files carry no payload
    Special,
}

/// A classified filesystem entry, ready for display
#[derive(Debug, Clone)]
pub struct FileInfo {
    /// Base name of the entry
    pub name: String,
    /// Human-readable classification, possibly annotated
    /// (e.g. "Shell Script (Executable)")
    pub type_desc: String,
    /// Entry kind tag
    pub kind: EntryKind,
    /// Raw Unix mode bits as reported by the platform
    pub permissions: u32,
    /// Modification time of the entry itself (not a link's target)
    pub last_modified: SystemTime,
    /// Kind-specific payload matching `kind`
    pub extra: ExtraInfo,
}

/*!
 * Entry classification
 *
 * Turns a raw filesystem path into a typed, display-ready `FileInfo`.
 */

use std::fs;
use std::os::unix::fs::{FileTypeExt, PermissionsExt};
use std::path::Path;

use crate::error::{Error, Result};
use crate::type_config::TypeConfig;
use crate::types::{EntryKind, ExtraInfo, FileInfo, SpecialKind};

/// Classify a single filesystem entry.
///
/// The entry's own status is queried without following a final symlink, so
/// symlinks are reported by their own type with their literal stored target,
/// dangling or not. Unreadable metadata for the entry itself is fatal for
/// this call; unreadable *contents* of a directory degrade to
/// `has_access = false` instead.
pub fn inspect(path: &Path, types: &TypeConfig) -> Result<FileInfo> {
    let metadata = fs::symlink_metadata(path).map_err(|source| Error::Metadata {
        path: path.to_path_buf(),
        source,
    })?;

    let name = path
        .file_name()
        .unwrap_or(path.as_os_str())
        .to_string_lossy()
        .to_string();
    let file_type = metadata.file_type();
    let permissions = metadata.permissions().mode();
    let last_modified = metadata.modified().map_err(|source| Error::Metadata {
        path: path.to_path_buf(),
        source,
    })?;

    if file_type.is_symlink() {
        let target = fs::read_link(path).map_err(|source| Error::SymlinkTarget {
            path: path.to_path_buf(),
            source,
        })?;

        return Ok(FileInfo {
            name,
            type_desc: "Symlink".to_string(),
            kind: EntryKind::Symlink,
            permissions,
            last_modified,
            extra: ExtraInfo::Symlink { target },
        });
    }

    if file_type.is_dir() {
        let (has_access, subdir_count, file_count) = count_children(path);

        return Ok(FileInfo {
            name,
            type_desc: "Directory".to_string(),
            kind: EntryKind::Directory,
            permissions,
            last_modified,
            extra: ExtraInfo::Directory {
                has_access,
                subdir_count,
                file_count,
            },
        });
    }

    if !file_type.is_file() {
        let special = special_kind(&file_type);

        return Ok(FileInfo {
            name,
            type_desc: special_desc(special).to_string(),
            kind: EntryKind::Special(special),
            permissions,
            last_modified,
            extra: ExtraInfo::Special,
        });
    }

    let size = metadata.len();
    let executable = permissions & 0o111 != 0;
    let extension = path
        .extension()
        .map(|ext| format!(".{}", ext.to_string_lossy()));

    let type_desc = match types.lookup(&name, extension.as_deref()) {
        Some(desc) if executable => format!("{} (Executable)", desc),
        Some(desc) => desc.to_string(),
        None if executable => "Executable".to_string(),
        None => "Unknown Regular File".to_string(),
    };

    Ok(FileInfo {
        name,
        type_desc,
        kind: EntryKind::Regular,
        permissions,
        last_modified,
        extra: ExtraInfo::Regular { size },
    })
}

/// Count a directory's immediate children without recursing.
///
/// Children are tallied by apparent type, so a symlink to a directory counts
/// as a file. Enumeration failure means no access: counts stay at zero.
fn count_children(path: &Path) -> (bool, usize, usize) {
    let entries = match fs::read_dir(path) {
        Ok(entries) => entries,
        Err(_) => return (false, 0, 0),
    };

    let mut subdir_count = 0;
    let mut file_count = 0;
    for entry in entries.filter_map(|entry| entry.ok()) {
        let is_dir = entry.file_type().map(|ft| ft.is_dir()).unwrap_or(false);
        if is_dir {
            subdir_count += 1;
        } else {
            file_count += 1;
        }
    }

    (true, subdir_count, file_count)
}

fn special_kind(file_type: &fs::FileType) -> SpecialKind {
    if file_type.is_block_device() {
        SpecialKind::BlockDevice
    } else if file_type.is_char_device() {
        SpecialKind::CharDevice
    } else if file_type.is_fifo() {
        SpecialKind::Fifo
    } else if file_type.is_socket() {
        SpecialKind::Socket
    } else {
        SpecialKind::Unknown
    }
}

/// Fixed description per special type.
///
/// Unrecognized states are flagged so they stay distinguishable from
/// legitimate special files.
pub fn special_desc(kind: SpecialKind) -> &'static str {
    match kind {
        SpecialKind::BlockDevice => "Block Device",
        SpecialKind::CharDevice => "Character Device",
        SpecialKind::Fifo => "Named IPC Pipe",
        SpecialKind::Socket => "Named IPC Socket",
        SpecialKind::Unknown => "Unknown [ERROR STATE]",
    }
}

/// Render the nine rwx bits as a fixed 9-character string in owner, group,
/// other order: the conventional long-listing permission string without the
/// leading type character.
pub fn permissions_to_string(mode: u32) -> String {
    let mut out = String::with_capacity(9);
    for shift in [6, 3, 0] {
        let bits = (mode >> shift) & 0o7;
        out.push(if bits & 0o4 != 0 { 'r' } else { '-' });
        out.push(if bits & 0o2 != 0 { 'w' } else { '-' });
        out.push(if bits & 0o1 != 0 { 'x' } else { '-' });
    }
    out
}

/// Short suffix glyph used to annotate entry names in listings.
pub fn type_indicator(kind: EntryKind, mode: u32) -> &'static str {
    match kind {
        EntryKind::Regular => {
            if mode & 0o111 != 0 {
                "*"
            } else {
                ""
            }
        }
        EntryKind::Directory => "/",
        EntryKind::Symlink => "@",
        EntryKind::Special(SpecialKind::Socket) => "=",
        EntryKind::Special(SpecialKind::Fifo) => "|",
        EntryKind::Special(_) => "?",
    }
}

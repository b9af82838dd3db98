/*!
 * Display helpers for classified entries
 */

use std::time::SystemTime;

use chrono::{DateTime, Local};

use crate::types::ExtraInfo;

/// Format a human-readable file size
pub fn format_file_size(size: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;
    const TB: u64 = GB * 1024;

    if size >= TB {
        format!("{:.2} TB", size as f64 / TB as f64)
    } else if size >= GB {
        format!("{:.2} GB", size as f64 / GB as f64)
    } else if size >= MB {
        format!("{:.2} MB", size as f64 / MB as f64)
    } else if size >= KB {
        format!("{:.2} KB", size as f64 / KB as f64)
    } else {
        format!("{} bytes", size)
    }
}

/// Format a timestamp as local `YYYY-MM-DD HH:MM:SS`
pub fn format_timestamp(time: SystemTime) -> String {
    DateTime::<Local>::from(time)
        .format("%Y-%m-%d %H:%M:%S")
        .to_string()
}

/// Summarize an entry's payload for the size/contents column: byte size
/// for regular files, child counts for directories, "N/A" otherwise.
pub fn format_contents(extra: &ExtraInfo) -> String {
    match extra {
        ExtraInfo::Regular { size } => format_file_size(*size),
        ExtraInfo::Directory {
            has_access: false, ..
        } => "Unknown".to_string(),
        ExtraInfo::Directory {
            subdir_count,
            file_count,
            ..
        } => {
            let subdir_word = if *subdir_count == 1 {
                "subdirectory"
            } else {
                "subdirectories"
            };
            let file_word = if *file_count == 1 { "file" } else { "files" };
            format!(
                "{} {}, {} {}",
                subdir_count, subdir_word, file_count, file_word
            )
        }
        ExtraInfo::Symlink { .. } | ExtraInfo::Special => "N/A".to_string(),
    }
}

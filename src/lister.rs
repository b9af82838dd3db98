/*!
 * Directory listing for navigation
 */

use std::path::Path;

use walkdir::WalkDir;

use crate::path::root_path;

/// List a directory's immediate children as display names.
///
/// Hidden entries (names starting with `.`) are excluded unless
/// `show_hidden`. Names are sorted by ordinal comparison; the `..` and `.`
/// navigation sentinels are prepended after sorting so they always come
/// first, `..` only when `dir` is not the filesystem root. A non-directory
/// yields an empty listing, not an error; so do children that cannot be
/// enumerated.
pub fn list_dir(dir: &Path, show_hidden: bool, include_current_dir: bool) -> Vec<String> {
    if !dir.is_dir() {
        return Vec::new();
    }

    let mut contents: Vec<String> = WalkDir::new(dir)
        .min_depth(1)
        .max_depth(1)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.file_name().to_string_lossy().to_string())
        .filter(|name| show_hidden || !name.starts_with('.'))
        .collect();

    contents.sort();

    if dir != root_path() {
        contents.insert(0, "..".to_string());
    }
    if include_current_dir {
        contents.insert(0, ".".to_string());
    }

    contents
}

/*!
 * Integration test walking the full listing-and-classification flow
 */

use std::fs::{self, File};
use std::io::{self, Write};
use std::os::unix::fs::PermissionsExt;
use std::path::Path;

use tempfile::tempdir;

use viewfs::inspector::{inspect, type_indicator};
use viewfs::lister::list_dir;
use viewfs::path::resolve;
use viewfs::type_config::TypeConfig;
use viewfs::types::{EntryKind, ExtraInfo};
use viewfs::utils::format_contents;

// Build the kind of directory a browser session would land in
fn setup_browse_directory() -> io::Result<tempfile::TempDir> {
    let temp_dir = tempdir()?;
    let root = temp_dir.path();

    fs::create_dir(root.join("docs"))?;
    fs::create_dir(root.join("src"))?;

    let mut readme = File::create(root.join("README"))?;
    writeln!(readme, "browse me")?;
    File::create(root.join("notes.txt"))?;

    let script = root.join("run.sh");
    let mut file = File::create(&script)?;
    writeln!(file, "#!/bin/sh\nexit 0")?;
    fs::set_permissions(&script, fs::Permissions::from_mode(0o755))?;

    File::create(root.join(".hidden"))?;

    std::os::unix::fs::symlink(root.join("src"), root.join("src_link"))?;
    std::os::unix::fs::symlink("gone", root.join("dangling"))?;

    Ok(temp_dir)
}

fn browse_types() -> TypeConfig {
    TypeConfig::parse(
        "README = Readme File\n\
         .txt = Plain Text\n\
         .sh = Shell Script\n",
    )
}

#[test]
fn test_listing_then_classifying_every_entry() -> io::Result<()> {
    let temp_dir = setup_browse_directory()?;
    let dir = temp_dir.path();
    let types = browse_types();

    let names = list_dir(dir, false, true);
    assert_eq!(
        names,
        vec![
            ".",
            "..",
            "README",
            "dangling",
            "docs",
            "notes.txt",
            "run.sh",
            "src",
            "src_link",
        ]
    );

    // every listed name classifies without error, sentinels included
    for name in &names {
        let path = resolve(&dir.join(name));
        let info = inspect(&path, &types).expect("listed entry classifies");

        match name.as_str() {
            "." => {
                assert_eq!(info.kind, EntryKind::Directory);
                // docs + src are subdirectories; both symlinks count as files
                assert_eq!(
                    info.extra,
                    ExtraInfo::Directory {
                        has_access: true,
                        subdir_count: 2,
                        file_count: 6,
                    }
                );
                assert_eq!(format_contents(&info.extra), "2 subdirectories, 6 files");
            }
            ".." => assert_eq!(info.kind, EntryKind::Directory),
            "README" => assert_eq!(info.type_desc, "Readme File"),
            "notes.txt" => assert_eq!(info.type_desc, "Plain Text"),
            "run.sh" => {
                assert_eq!(info.type_desc, "Shell Script (Executable)");
                assert_eq!(type_indicator(info.kind, info.permissions), "*");
            }
            "docs" | "src" => {
                assert_eq!(info.type_desc, "Directory");
                assert_eq!(type_indicator(info.kind, info.permissions), "/");
            }
            "src_link" => {
                assert_eq!(info.kind, EntryKind::Symlink);
                assert_eq!(
                    info.extra,
                    ExtraInfo::Symlink {
                        target: dir.join("src")
                    }
                );
            }
            "dangling" => {
                assert_eq!(info.kind, EntryKind::Symlink);
                assert_eq!(
                    info.extra,
                    ExtraInfo::Symlink {
                        target: Path::new("gone").to_path_buf()
                    }
                );
                assert_eq!(type_indicator(info.kind, info.permissions), "@");
            }
            other => panic!("unexpected listing entry: {}", other),
        }
    }

    Ok(())
}

#[test]
fn test_hidden_entries_appear_only_when_requested() -> io::Result<()> {
    let temp_dir = setup_browse_directory()?;
    let dir = temp_dir.path();

    let without_hidden = list_dir(dir, false, false);
    assert!(!without_hidden.iter().any(|name| name == ".hidden"));

    let with_hidden = list_dir(dir, true, false);
    assert!(with_hidden.iter().any(|name| name == ".hidden"));
    // sentinel stays first even though ".." sorts after ".hidden" ordinally
    assert_eq!(with_hidden.first().map(String::as_str), Some(".."));

    Ok(())
}

#[test]
fn test_navigation_through_parent_sentinel() -> io::Result<()> {
    let temp_dir = setup_browse_directory()?;
    let dir = temp_dir.path();
    let types = browse_types();

    // descend into a subdirectory, then classify ".." the way a browser
    // would when moving back up
    let subdir = resolve(&dir.join("src"));
    let back_up = resolve(&subdir.join(".."));
    assert_eq!(back_up, resolve(dir));

    let info = inspect(&back_up, &types).expect("parent classifies");
    assert_eq!(info.kind, EntryKind::Directory);

    Ok(())
}

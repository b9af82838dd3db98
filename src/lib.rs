/*!
 * ViewFS - Filesystem inspection and classification for terminal browsing
 *
 * This library turns raw filesystem paths into typed, display-ready
 * descriptions and directory listings, the engine behind an interactive
 * file browser frontend.
 */

pub mod config;
pub mod error;
pub mod inspector;
pub mod lister;
pub mod path;
pub mod type_config;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use config::{Args, Config};
pub use error::{Error, Result};
pub use inspector::{inspect, permissions_to_string, type_indicator};
pub use lister::list_dir;
pub use type_config::TypeConfig;
pub use types::{EntryKind, ExtraInfo, FileInfo, SpecialKind};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

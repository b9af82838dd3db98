/*!
 * Configuration handling for viewfs
 */

use std::fs;
use std::path::{Path, PathBuf};

use clap::Parser;
use clap_complete::Shell;

use crate::error::{Error, Result};
use crate::path::{home_dir, resolve, root_path};
use crate::type_config::TypeConfig;

/// Header written whenever the user type config is rewritten after a merge
const USER_CONFIG_HEADER: &str = "# Configuration file for viewfs.\n\
# It is used by the file explorer to detect file types correctly.\n\n";

/// Command-line arguments for viewfs
#[derive(Parser, Debug, Clone)]
#[clap(
    name = "viewfs",
    version = env!("CARGO_PKG_VERSION"),
    about = "Inspect and classify filesystem entries for terminal browsing",
    long_about = "Lists a directory and classifies every entry (type, permissions, size, modification time) using user-configurable type descriptions."
)]
pub struct Args {
    /// Directory to browse (defaults to the home directory)
    pub directory: Option<PathBuf>,

    /// Show hidden entries (names starting with a dot)
    #[clap(short = 'a', long)]
    pub show_hidden: bool,

    /// Leave the `.` navigation sentinel out of the listing
    #[clap(long)]
    pub no_current_dir: bool,

    /// Generate shell completions
    #[clap(long = "generate", value_enum)]
    pub generate: Option<Shell>,
}

/// Application configuration
#[derive(Clone, Debug)]
pub struct Config {
    /// Resolved directory to browse
    pub directory: PathBuf,

    /// Whether hidden entries are listed
    pub show_hidden: bool,

    /// Whether listings include the `.` sentinel
    pub include_current_dir: bool,
}

impl Config {
    /// Create configuration from command-line arguments
    pub fn from_args(args: &Args) -> Self {
        let directory = match &args.directory {
            Some(dir) => resolve(dir),
            None => home_dir(),
        };

        Self {
            directory,
            show_hidden: args.show_hidden,
            include_current_dir: !args.no_current_dir,
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if !self.directory.is_dir() {
            return Err(Error::Config(format!(
                "not a browsable directory: {}",
                self.directory.display()
            )));
        }
        Ok(())
    }
}

/// Well-known path of the system-wide default type config
pub fn default_type_config_path() -> PathBuf {
    root_path().join("etc").join("viewfs").join("default.cfg")
}

/// Well-known path of the per-user type config
pub fn user_type_config_path() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| home_dir().join(".config"))
        .join("viewfs")
        .join("user.cfg")
}

/// Load and reconcile the default and user type configs from their
/// well-known locations.
pub fn setup_type_config() -> TypeConfig {
    bootstrap_type_config(&default_type_config_path(), &user_type_config_path())
}

/// Bootstrap a merged type config from explicit file locations.
///
/// Missing or unreadable files load as empty configs. When the two differ
/// structurally, the default is merged into the user config (user rules
/// win) and, only if a user file already existed, it is rewritten with a
/// header comment plus the merged rule set. A user config that never
/// existed is never created here.
pub fn bootstrap_type_config(default_path: &Path, user_path: &Path) -> TypeConfig {
    let user_exists = user_path.is_file();

    let default_config = TypeConfig::read_from(default_path);
    let mut user_config = TypeConfig::read_from(user_path);

    if user_config != default_config {
        user_config.merge_with(&default_config);

        if user_exists {
            let contents = format!("{}{}", USER_CONFIG_HEADER, user_config.serialize());
            if let Err(e) = fs::write(user_path, contents) {
                eprintln!("Warning: failed to rewrite {}: {}", user_path.display(), e);
            }
        }
    }

    user_config
}

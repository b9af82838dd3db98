/*!
 * Command-line interface for viewfs
 */

use std::io;

use clap::{CommandFactory, Parser};
use tabled::{
    settings::{object::Columns, Alignment, Modify, Padding, Style},
    Table, Tabled,
};

use viewfs::config::{setup_type_config, Args, Config};
use viewfs::error::Result;
use viewfs::inspector::{inspect, permissions_to_string, type_indicator};
use viewfs::lister::list_dir;
use viewfs::path::resolve;
use viewfs::types::ExtraInfo;
use viewfs::utils::{format_contents, format_timestamp};

/// One rendered listing row
#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "Name")]
    name: String,

    #[tabled(rename = "Type")]
    type_desc: String,

    #[tabled(rename = "Contents")]
    contents: String,

    #[tabled(rename = "Permissions")]
    permissions: String,

    #[tabled(rename = "Last Modified")]
    modified: String,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    // Emit shell completions and exit when requested
    if let Some(shell) = args.generate {
        let mut cmd = Args::command();
        let name = cmd.get_name().to_string();
        clap_complete::generate(shell, &mut cmd, name, &mut io::stdout());
        return Ok(());
    }

    // Create and validate configuration
    let config = Config::from_args(&args);
    config.validate()?;

    // Reconcile the default and user type configs
    let types = setup_type_config();

    // List the directory, then classify every listed name
    let names = list_dir(
        &config.directory,
        config.show_hidden,
        config.include_current_dir,
    );

    let mut rows = Vec::with_capacity(names.len());
    for name in &names {
        // Sentinels resolve lexically: "." back to the directory itself,
        // ".." to its parent
        let path = resolve(&config.directory.join(name));
        let info = match inspect(&path, &types) {
            Ok(info) => info,
            Err(e) => {
                eprintln!("Warning: skipping {}: {}", name, e);
                continue;
            }
        };

        let indicator = type_indicator(info.kind, info.permissions);
        let display_name = match &info.extra {
            ExtraInfo::Symlink { target } => {
                format!("{}{} -> {}", name, indicator, target.display())
            }
            _ => format!("{}{}", name, indicator),
        };

        rows.push(EntryRow {
            name: display_name,
            type_desc: info.type_desc,
            contents: format_contents(&info.extra),
            permissions: permissions_to_string(info.permissions),
            modified: format_timestamp(info.last_modified),
        });
    }

    println!("{}", config.directory.display());

    let mut table = Table::new(rows);
    table
        .with(Style::rounded())
        .with(Padding::new(1, 1, 0, 0))
        .with(Modify::new(Columns::new(..)).with(Alignment::left()));
    println!("{}", table);

    Ok(())
}

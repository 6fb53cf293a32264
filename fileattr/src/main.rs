//! [![github]](https://github.com/ponchofiesta/fileattr-rs)&ensp;[![crates-io]](https://crates.io/crates/fileattr)&ensp;[![docs-rs]](https://docs.rs/fileattr)
//!
//! [github]: https://img.shields.io/badge/github-8da0cb?style=for-the-badge&labelColor=555555&logo=github
//! [crates-io]: https://img.shields.io/badge/crates.io-fc8d62?style=for-the-badge&labelColor=555555&logo=rust
//! [docs-rs]: https://img.shields.io/badge/docs.rs-66c2a5?style=for-the-badge&labelColor=555555&logo=docs.rs
//!
//! <br>
//!
//! fileattr CLI tool to show, query or clear the attribute flags of a file.

use attrlib::{FileAttributes, FileRef, Result, TrackedFile};
use chrono::{DateTime, Local};
use clap::Parser;
use comfy_table::{presets, CellAlignment, Row, Table};
use core::result::Result as StdResult;
use filetime::FileTime;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing::{debug, Level};

/// Parse command line argument for attributes
fn parse_attributes(value: &str) -> StdResult<FileAttributes, String> {
    value.parse().map_err(|err: attrlib::Error| err.to_string())
}

/// Definition of command line arguments
#[derive(Parser, Debug)]
#[command(about, version, author)]
struct Args {
    #[arg(help = "Path to the file.")]
    filename: PathBuf,

    #[arg(
        short = 'a',
        long,
        value_parser = parse_attributes,
        conflicts_with_all = ["all", "clear"],
        help = concat!("Succeed if any of the attributes is set.\n",
               "Possible values: r = read-only\n",
               "                 h = hidden\n",
               "                 s = system\n",
               "                 a = archive\n")
    )]
    any: Option<FileAttributes>,

    #[arg(
        short = 'A',
        long,
        value_parser = parse_attributes,
        conflicts_with = "clear",
        help = "Succeed if all of the attributes are set. Same values as --any."
    )]
    all: Option<FileAttributes>,

    #[arg(
        short = 'c',
        long,
        value_parser = parse_attributes,
        num_args = 0..=1,
        require_equals = true,
        default_missing_value = "ra",
        help = "Clear attributes, e.g. --clear=h. Clears read-only and archive if no value is given."
    )]
    clear: Option<FileAttributes>,

    #[arg(
        short = 'v',
        long,
        default_value_t = false,
        help = "Displays details while working."
    )]
    verbose: bool,
}

/// Print attributes and metadata of the file for CLI output
fn print_attributes(file: &TrackedFile) -> Result<()> {
    let date_format = "%Y-%m-%d %H:%M:%S";
    let attributes = attrlib::attributes(file)?;
    let metadata = file.metadata();
    let modified = FileTime::from_last_modification_time(metadata);
    let modified = DateTime::from_timestamp(modified.unix_seconds(), modified.nanoseconds())
        .map(|dt| dt.with_timezone(&Local).format(date_format).to_string())
        .unwrap_or_default();

    let mut table = Table::new();
    #[cfg(unix)]
    table.set_header(Row::from(vec![
        "Attributes", "Mode", "Size", "Modified", "Filename",
    ]));
    #[cfg(not(unix))]
    table.set_header(Row::from(vec!["Attributes", "Size", "Modified", "Filename"]));
    // Disable all table borders
    table.load_preset(presets::NOTHING);

    let mut row = vec![attributes.to_string()];
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        row.push(format!(
            "{}",
            file_mode::Mode::from(metadata.permissions().mode())
        ));
    }
    let size_column = row.len();
    row.push(format!("{}", metadata.len()));
    row.push(modified);
    row.push(file.path().display().to_string());
    table.add_row(row);

    // Set size column right aligned
    if let Some(column) = table.column_mut(size_column) {
        column.set_cell_alignment(CellAlignment::Right);
    }

    println!("{table}");
    Ok(())
}

/// Clear attributes of the file and report the change when verbose
fn clear_attributes(file: &mut TrackedFile, flags: FileAttributes, verbose: bool) -> Result<()> {
    if !verbose {
        return attrlib::clear_flags(file, flags);
    }
    let before = attrlib::attributes(file)?;
    attrlib::clear_flags(file, flags)?;
    let after = attrlib::attributes(file)?;
    println!("{before} -> {after}");
    Ok(())
}

/// Turn a query result into the process exit code
fn query_exit_code(matched: bool) -> ExitCode {
    println!("{matched}");
    if matched {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

/// Run the action selected by the command line arguments
fn run(args: &Args) -> Result<ExitCode> {
    let mut file = TrackedFile::open(&args.filename)
        .map_err(|err| attrlib::Error::from_io(&args.filename, err))?;
    debug!("Opened {}", args.filename.display());

    if let Some(flags) = args.any {
        return Ok(query_exit_code(attrlib::has_any_of(&file, flags)?));
    }
    if let Some(flags) = args.all {
        return Ok(query_exit_code(attrlib::has_all_of(&file, flags)?));
    }
    if let Some(flags) = args.clear {
        clear_attributes(&mut file, flags, args.verbose)?;
        return Ok(ExitCode::SUCCESS);
    }

    print_attributes(&file)?;
    Ok(ExitCode::SUCCESS)
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::WARN })
        .with_writer(std::io::stderr)
        .init();

    match run(&args) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}

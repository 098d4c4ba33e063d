//! Command implementations for the CLI tool.

use std::path::{Path, PathBuf};

use zipper::{ArchiveHandle, WriteOptions};

use crate::OutputFormat;
use crate::exit_codes::{ExitCode, error_to_exit_code};
use crate::output::create_formatter;

/// Configuration for the add command.
pub struct AddConfig<'a> {
    pub archive_path: &'a Path,
    pub files: &'a [PathBuf],
    pub level: u32,
    pub create: bool,
    pub quiet: bool,
}

/// Create command implementation
pub fn create(archive_path: &Path, force: bool, quiet: bool) -> ExitCode {
    let archive = ArchiveHandle::new(archive_path);
    if let Err(e) = archive.create(force) {
        eprintln!("Error: {}", e);
        return error_to_exit_code(&e);
    }

    if !quiet {
        println!("Archive ready: {}", archive_path.display());
    }
    ExitCode::Success
}

/// Add command implementation
///
/// Stops at the first file that cannot be added; entries added before it
/// are kept and the archive is still finalized.
pub fn add(config: &AddConfig<'_>) -> ExitCode {
    let options = match WriteOptions::new().level(config.level) {
        Ok(opts) => opts,
        Err(e) => {
            eprintln!("Error: {}", e);
            return ExitCode::BadArgs;
        }
    };

    let mut archive = ArchiveHandle::with_options(config.archive_path, options);

    if config.create {
        if let Err(e) = archive.create(false) {
            eprintln!("Error creating archive: {}", e);
            return error_to_exit_code(&e);
        }
    }

    if let Err(e) = archive.open() {
        eprintln!("Error: {}", e);
        return error_to_exit_code(&e);
    }

    let mut added = 0usize;
    let mut failure = None;
    for file in config.files {
        match archive.add_file(file) {
            Ok(()) => added += 1,
            Err(e) => {
                eprintln!("Error: {}", e);
                failure = Some(error_to_exit_code(&e));
                break;
            }
        }
    }

    if let Err(e) = archive.close() {
        eprintln!("Error finalizing archive: {}", e);
        return error_to_exit_code(&e);
    }

    if let Some(code) = failure {
        return code;
    }

    if !config.quiet {
        println!(
            "Added {} file(s) to {}",
            added,
            config.archive_path.display()
        );
    }
    ExitCode::Success
}

/// List command implementation
pub fn list(archive_path: &Path, format: OutputFormat) -> ExitCode {
    let formatter = create_formatter(format);
    let archive = ArchiveHandle::new(archive_path);

    match archive.file_list() {
        Ok(names) => {
            print!("{}", formatter.format_list(archive_path, &names));
            ExitCode::Success
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            error_to_exit_code(&e)
        }
    }
}

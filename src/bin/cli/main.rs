//! CLI tool for zipper archive operations.

mod commands;
mod exit_codes;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Create, append to, and list zip archives
#[derive(Parser)]
#[command(name = "zipper")]
#[command(author, version, about = "Create, append to, and list zip archives", long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, short = 'f', value_enum, default_value = "human", global = true)]
    format: OutputFormat,

    /// Suppress informational output
    #[arg(long, short = 'q', global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Create an empty archive (alias: c)
    #[command(alias = "c")]
    Create {
        /// Archive file to create
        archive: PathBuf,

        /// Truncate the archive if it already exists
        #[arg(long)]
        force: bool,
    },

    /// Append files to an archive (alias: a)
    #[command(alias = "a")]
    Add {
        /// Archive file to append to
        archive: PathBuf,

        /// Files to add
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Compression level (1-9)
        #[arg(short = 'l', long, default_value = "9")]
        level: u32,

        /// Create the archive first if it does not exist
        #[arg(long)]
        create: bool,
    },

    /// List file entries (alias: l)
    #[command(alias = "l")]
    List {
        /// Archive file to list
        archive: PathBuf,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Human,
    Json,
}

fn main() {
    let cli = Cli::parse();

    let exit_code = match cli.command {
        Commands::Create { archive, force } => commands::create(&archive, force, cli.quiet),

        Commands::Add {
            archive,
            files,
            level,
            create,
        } => commands::add(&commands::AddConfig {
            archive_path: &archive,
            files: &files,
            level,
            create,
            quiet: cli.quiet,
        }),

        Commands::List { archive } => commands::list(&archive, cli.format),
    };

    std::process::exit(exit_code.code());
}

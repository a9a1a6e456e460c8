//! Shellsound CLI - generator for the Better Shell notification sounds
//!
//! Running `shellsound` with no arguments writes all 27 sounds under
//! `<workspace>/sounds/<pack>/<category>/<intensity>.wav`.

use clap::{Args, Parser, Subcommand};
use shellsound_synth::{CatalogFilter, Category, Intensity, Pack, SoundKey};
use std::process::ExitCode;

use shellsound_cli::commands;
use shellsound_cli::paths::resolve_out_root;

/// Shellsound - notification sound generator
#[derive(Parser)]
#[command(name = "shellsound")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the sound catalog as WAV files (default)
    Generate {
        /// Output root directory (default: the build-time workspace's sounds/,
        /// or ./sounds when that checkout is gone)
        #[arg(short, long)]
        out_root: Option<String>,

        #[command(flatten)]
        filter: FilterArgs,

        /// Output a machine-readable JSON summary (no colored output)
        #[arg(long)]
        json: bool,

        /// Show per-file statistics
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the built-in catalog
    List {
        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Render one sound in memory and print its statistics
    Inspect {
        /// Sound pack (meme, chill, retro)
        pack: Pack,

        /// Notification category (error, warning, success)
        category: Category,

        /// Intensity (light, medium, heavy)
        intensity: Intensity,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },

    /// Verify generated files against a fresh render
    Check {
        /// Output root directory (default: the build-time workspace's sounds/,
        /// or ./sounds when that checkout is gone)
        #[arg(short, long)]
        out_root: Option<String>,

        /// Output machine-readable JSON
        #[arg(long)]
        json: bool,
    },
}

/// Catalog filter flags
#[derive(Args, Debug, Default, Clone, Copy)]
struct FilterArgs {
    /// Only generate this pack
    #[arg(long)]
    pack: Option<Pack>,

    /// Only generate this category
    #[arg(long)]
    category: Option<Category>,

    /// Only generate this intensity
    #[arg(long)]
    intensity: Option<Intensity>,
}

impl From<FilterArgs> for CatalogFilter {
    fn from(args: FilterArgs) -> Self {
        CatalogFilter {
            pack: args.pack,
            category: args.category,
            intensity: args.intensity,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let command = cli.command.unwrap_or(Commands::Generate {
        out_root: None,
        filter: FilterArgs::default(),
        json: false,
        verbose: false,
    });

    let result = match command {
        Commands::Generate {
            out_root,
            filter,
            json,
            verbose,
        } => commands::generate::run(
            &resolve_out_root(out_root.as_deref()),
            &filter.into(),
            json,
            verbose,
        ),
        Commands::List { json } => commands::list::run(json),
        Commands::Inspect {
            pack,
            category,
            intensity,
            json,
        } => commands::inspect::run(&SoundKey::new(pack, category, intensity), json),
        Commands::Check { out_root, json } => {
            commands::check::run(&resolve_out_root(out_root.as_deref()), json)
        }
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

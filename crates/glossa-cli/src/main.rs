use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use glossa_build::Config;

mod commands;
mod logging;

#[derive(Debug, Parser)]
#[command(name = "glossa", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Documentation root to process
    #[arg(long, global = true, default_value = ".")]
    root: PathBuf,

    /// More log output (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,
}

#[derive(Debug, clap::Subcommand)]
enum Commands {
    /// Generate READMEs and the keyword index (the default)
    ///
    /// Walks the documentation root and, for every directory that is not
    /// hidden:
    ///
    /// - Copies the directory's README-template.txt into README.md, or writes
    ///   a short stub when there is no template
    /// - Appends a link to every markdown note beneath the directory
    ///
    /// The root README.md is seeded from the root README-template.txt and
    /// lists every directory. Finally index.md is seeded from
    /// index-template.txt and filled with an A-Z navigation line and one
    /// section per keyword found under a "# Keywords" heading in the notes.
    ///
    /// Existing README.md and index.md files are overwritten. Running twice
    /// on an unchanged tree produces identical output.
    Build {
        /// Render everything but write nothing
        #[arg(long)]
        dry_run: bool,
    },
    /// List the keywords found in the notes without writing anything
    Keywords {
        /// Print as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show or initialise configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Debug, clap::Subcommand)]
enum ConfigAction {
    /// Print the effective configuration
    Show,
    /// Print the config file location
    Path,
    /// Create the config file with example content if it does not exist
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = Config::load()?;
    logging::init(&config.logging, cli.verbose, cli.quiet)?;

    match cli.command.unwrap_or(Commands::Build { dry_run: false }) {
        Commands::Build { dry_run } => {
            commands::run_build(cli.root, config, dry_run)?;
        }
        Commands::Keywords { json } => {
            commands::show_keywords(cli.root, config, json)?;
        }
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::show_config(&config),
            ConfigAction::Path => commands::config::show_path(),
            ConfigAction::Init => commands::config::init_config()?,
        },
    }

    Ok(())
}

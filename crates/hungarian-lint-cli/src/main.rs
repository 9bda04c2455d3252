//! hungarian-lint CLI tool.
//!
//! Usage:
//! ```bash
//! hungarian-lint check [OPTIONS] [PATH]
//! hungarian-lint list-rules
//! hungarian-lint init
//! ```

use anyhow::Result;
use clap::{Parser, Subcommand};
use hungarian_lint_rules::Mode;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

mod commands;
mod config_resolver;

/// Hungarian-notation naming checker for ESTree syntax trees
#[derive(Parser)]
#[command(name = "hungarian-lint")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Path to configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check names in ESTree JSON files
    Check {
        /// File or directory to analyze (default: current directory)
        #[arg(default_value = ".")]
        path: PathBuf,

        /// Output format
        #[arg(short, long, default_value = "text")]
        format: OutputFormat,

        /// Exclude patterns (can be specified multiple times)
        #[arg(short, long)]
        exclude: Vec<String>,

        /// Names that always pass, added to the configured `ignore` list
        #[arg(long, value_name = "NAME")]
        ignore: Vec<String>,

        /// Only check names in declaration positions
        #[arg(long)]
        only_declarations: bool,

        /// How names are found (overrides the configured mode)
        #[arg(long)]
        mode: Option<ModeArg>,
    },

    /// List available rules
    ListRules,

    /// Initialize configuration file
    Init {
        /// Overwrite existing config
        #[arg(long)]
        force: bool,
    },
}

/// Output format for lint results.
#[derive(Clone, Copy, Debug, Default, clap::ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text output.
    #[default]
    Text,
    /// JSON output.
    Json,
    /// One-line-per-violation compact format.
    Compact,
}

/// Traversal mode selection.
#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum ModeArg {
    /// Dispatch on declarations and functions.
    Construct,
    /// Judge every identifier by its position.
    Identifier,
}

impl From<ModeArg> for Mode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Construct => Self::Construct,
            ModeArg::Identifier => Self::Identifier,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Check {
            path,
            format,
            exclude,
            ignore,
            only_declarations,
            mode,
        } => {
            let source = config_resolver::resolve(project_dir(&path), cli.config.as_deref());
            let overrides = commands::check::RuleOverrides {
                ignore,
                only_declarations,
                mode: mode.map(Mode::from),
            };
            commands::check::run(&path, format, exclude, &overrides, &source)
        }
        Commands::ListRules => {
            commands::list_rules::run();
            Ok(())
        }
        Commands::Init { force } => commands::init::run(force),
    }
}

/// Directory searched for a project config: the path itself, or the
/// directory holding it when a single file is checked.
fn project_dir(path: &Path) -> &Path {
    if path.is_file() {
        path.parent().unwrap_or(path)
    } else {
        path
    }
}

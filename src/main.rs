use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use file_helper::config::Settings;
use file_helper::{logging, PathStyle, TempDirOverride};

/// Normalize paths and resolve the analyser's temp directory.
#[derive(Parser, Debug)]
#[command(name = "file-helper", version, about)]
struct Cli {
    /// TOML configuration file.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Working directory relative paths are resolved against.
    #[arg(long, global = true)]
    working_dir: Option<String>,

    /// Separator style: posix, windows or native.
    #[arg(long, global = true)]
    style: Option<PathStyle>,

    /// Log resolution decisions to stderr.
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print each path normalized.
    Normalize {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print each path made absolute against the working directory.
    Absolutize {
        #[arg(required = true)]
        paths: Vec<String>,
    },
    /// Print the resolved temp directory for ROOT.
    TempDir { root: Option<String> },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let mut settings = match &cli.config {
        Some(path) => Settings::load(path)?,
        None => Settings::default(),
    };
    if let Some(wd) = cli.working_dir {
        settings.working_directory = Some(wd);
    }
    if let Some(style) = cli.style {
        settings.path_style = Some(style);
    }

    let cwd = std::env::current_dir().context("cannot determine current directory")?;
    let helper = settings.file_helper(&cwd.to_string_lossy());
    tracing::debug!(
        "working directory: {} ({} style)",
        helper.working_directory(),
        helper.style()
    );

    match cli.command {
        Command::Normalize { paths } => {
            for p in paths {
                println!("{}", helper.normalize_path(&p));
            }
        }
        Command::Absolutize { paths } => {
            for p in paths {
                println!("{}", helper.absolutize_path(&p));
            }
        }
        Command::TempDir { root } => {
            let root = root
                .or_else(|| settings.root_dir.clone())
                .unwrap_or_else(|| helper.working_directory().to_string());
            let override_dir = settings.temp_override(TempDirOverride::from_env());
            let dir = helper
                .resolve_temp_dir(&root, override_dir.as_ref())
                .with_context(|| format!("failed to resolve temp directory for `{}`", root))?;
            println!("{}", dir.display());
        }
    }
    Ok(())
}

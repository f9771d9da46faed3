use anyhow::{Context as AnyhowContext, Result};
use clap::{Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};

use crate::discovery::utils::to_slash_path;
use crate::pane::Pane;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Parser, Debug)]
#[command(name = "counterpart")]
#[command(about = "Open the test file for a JavaScript source file, or the source file for a test", long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Workspace root to search for corresponding files
    #[arg(long, value_name = "DIR", default_value = ".", global = true)]
    pub root: PathBuf,

    /// Editor command used to open the result (e.g. "code -r"); prints the path if not set
    #[arg(long, value_name = "COMMAND", global = true)]
    pub editor: Option<String>,

    /// Output format when printing (text, json)
    #[arg(short = 'f', long, default_value = "text", global = true)]
    pub format: OutputFormat,

    /// Increase verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Open the corresponding file
    Open {
        /// File currently open in the editor
        #[arg(value_name = "FILE")]
        file: PathBuf,
    },

    /// Open the corresponding file in the other pane
    OpenSide {
        /// File currently open in the editor
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Pane the active file is shown in
        #[arg(long, value_name = "PANE")]
        active_pane: Option<Pane>,
    },
}

impl Command {
    pub fn file(&self) -> &Path {
        match self {
            Command::Open { file } | Command::OpenSide { file, .. } => file,
        }
    }

    pub fn open_to_the_side(&self) -> bool {
        matches!(self, Command::OpenSide { .. })
    }

    pub fn active_pane(&self) -> Option<Pane> {
        match self {
            Command::Open { .. } => None,
            Command::OpenSide { active_pane, .. } => *active_pane,
        }
    }
}

impl Args {
    pub fn validate(&self) -> Result<()> {
        validate_root(&self.root)?;
        validate_file(self.command.file())?;
        if let Some(ref editor) = self.editor {
            if editor.trim().is_empty() {
                anyhow::bail!("Editor command is empty");
            }
        }
        Ok(())
    }
}

pub fn validate_root(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("Workspace root does not exist: {}", path.display());
    }
    if !path.is_dir() {
        anyhow::bail!("Workspace root is not a directory: {}", path.display());
    }
    std::fs::metadata(path)
        .with_context(|| format!("Cannot read directory: {}", path.display()))?;
    Ok(())
}

pub fn validate_file(path: &Path) -> Result<()> {
    if !path.exists() {
        anyhow::bail!("File does not exist: {}", path.display());
    }
    if !path.is_file() {
        anyhow::bail!("Path is not a file: {}", path.display());
    }
    std::fs::metadata(path).with_context(|| format!("Cannot read file: {}", path.display()))?;
    Ok(())
}

/// Absolute, slash-separated form of the active file, comparable with the
/// paths the workspace index returns.
pub fn resolve_active_file(path: &Path) -> Result<String> {
    let absolute = path
        .canonicalize()
        .with_context(|| format!("Cannot resolve file: {}", path.display()))?;
    Ok(to_slash_path(&absolute))
}

impl OutputFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            OutputFormat::Text => "text",
            OutputFormat::Json => "json",
        }
    }
}

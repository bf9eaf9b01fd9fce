//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `t`: Resolve translation keys
//! - `keys`: List every translation key of the active dictionary
//! - `check`: Verify that every key used by the UI tables resolves
//! - `routes`: Show the route table or resolve a path
//! - `tabs`: Show navigation tabs with their labels
//! - `documents` / `appointments`: Show mock records
//! - `init`: Initialize the configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

use crate::app::mock_data::DEFAULT_COUNT;

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }

    /// Get the verbose flag of the selected command.
    pub fn verbose(&self) -> bool {
        match &self.command {
            Some(Command::Routes(cmd)) => cmd.verbose,
            Some(Command::Documents(cmd)) | Some(Command::Appointments(cmd)) => cmd.verbose,
            _ => self.common().is_some_and(|common| common.verbose),
        }
    }

    /// Dictionary arguments, for commands that load translations.
    pub fn common(&self) -> Option<&CommonArgs> {
        match &self.command {
            Some(Command::T(cmd)) => Some(&cmd.common),
            Some(Command::Keys(cmd)) => Some(&cmd.common),
            Some(Command::Check(cmd)) => Some(&cmd.common),
            Some(Command::Tabs(cmd)) => Some(&cmd.common),
            Some(Command::Routes(_))
            | Some(Command::Documents(_))
            | Some(Command::Appointments(_))
            | Some(Command::Init)
            | None => None,
        }
    }
}

/// Arguments shared by the commands that load a dictionary.
#[derive(Debug, Clone, Default, Args)]
pub struct CommonArgs {
    /// Locale to load (overrides config file)
    #[arg(long)]
    pub locale: Option<String>,

    /// Directory of <locale>.json files (overrides config file)
    #[arg(long)]
    pub locales_root: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct TranslateCommand {
    /// Dotted keys to resolve, e.g. tabs.home
    #[arg(required = true)]
    pub keys: Vec<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct KeysCommand {
    /// Only list keys under this prefix, e.g. tabs
    #[arg(long)]
    pub prefix: Option<String>,

    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct CheckCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct TabsCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct RoutesCommand {
    /// Path to resolve, following redirects
    pub path: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct RecordsCommand {
    /// Number of records to show
    #[arg(short = 'n', long, default_value_t = DEFAULT_COUNT)]
    pub count: usize,

    /// Print records as JSON
    #[arg(long)]
    pub json: bool,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Resolve translation keys, printing the key itself when it has no translation
    T(TranslateCommand),
    /// List every translation key of the active dictionary
    Keys(KeysCommand),
    /// Check that every tab, tag and menu key has a translation
    Check(CheckCommand),
    /// Show navigation tabs with translated labels
    Tabs(TabsCommand),
    /// Show the route table, or resolve a single path
    Routes(RoutesCommand),
    /// Show the most recent documents
    Documents(RecordsCommand),
    /// Show the upcoming appointments
    Appointments(RecordsCommand),
    /// Initialize a new .kernelrc.json configuration file
    Init,
}

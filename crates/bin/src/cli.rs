//! CLI argument definitions for the dataops binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use dataops::json::WriterOptions;

use crate::output::OutputFormat;

/// Inspect and edit JSON documents through flat dot-separated keys
#[derive(Parser, Debug)]
#[command(name = "dataops")]
#[command(about = "dataops: read, write and inspect nested JSON data with dotted keys")]
#[command(version)]
pub struct Cli {
    #[command(flatten)]
    pub writer: WriterArgs,

    /// Output format
    #[arg(long, value_enum, default_value = "human", env = "DATAOPS_FORMAT", global = true)]
    pub format: OutputFormat,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print the value stored at a key
    Get(KeyArgs),
    /// Store a value at a key, creating intermediate objects
    Set(SetArgs),
    /// Remove a key
    Remove(KeyArgs),
    /// List the keys of the document or of the object at a key
    Keys(KeysArgs),
    /// Print every leaf path with its value kind
    Inspect(FileArgs),
}

/// Layout of rewritten documents
#[derive(clap::Args, Debug)]
pub struct WriterArgs {
    /// Spaces per indentation level
    #[arg(long, default_value_t = 2, env = "DATAOPS_INDENT", global = true)]
    pub indent: usize,

    /// Indent with tabs
    #[arg(long, global = true, conflicts_with = "minimize")]
    pub tabs: bool,

    /// Write everything on one line
    #[arg(long, global = true)]
    pub minimize: bool,
}

impl WriterArgs {
    pub fn options(&self) -> WriterOptions {
        if self.minimize {
            WriterOptions::minimized()
        } else if self.tabs {
            WriterOptions::tabs()
        } else {
            WriterOptions::with_indent(self.indent)
        }
    }
}

#[derive(clap::Args, Debug)]
pub struct FileArgs {
    /// JSON document
    pub file: PathBuf,
}

#[derive(clap::Args, Debug)]
pub struct KeyArgs {
    /// JSON document
    pub file: PathBuf,

    /// Dot-separated key, e.g. `server.port`
    pub key: String,
}

#[derive(clap::Args, Debug)]
pub struct SetArgs {
    /// JSON document, created if missing
    pub file: PathBuf,

    /// Dot-separated key, e.g. `server.port`
    pub key: String,

    /// JSON value; text that is not valid JSON is stored as a string
    pub value: String,
}

#[derive(clap::Args, Debug)]
pub struct KeysArgs {
    /// JSON document
    pub file: PathBuf,

    /// Object to list instead of the document root
    pub key: Option<String>,
}

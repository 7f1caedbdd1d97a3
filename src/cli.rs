use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about)]
pub struct Cli {
    /// Path to the state file (default: $LECTIO_STATE or ./lectio-state.json).
    #[arg(long, global = true)]
    pub state: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    pub fn state_path(&self) -> PathBuf {
        if let Some(path) = &self.state {
            return PathBuf::from(path);
        }
        std::env::var("LECTIO_STATE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("lectio-state.json"))
    }
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show the overall progress bar and one card per book.
    Status(StatusArgs),
    /// Flip the read flag for one chapter of a book.
    Toggle(ToggleArgs),
    /// Mark every chapter of a book as read (or clear them all).
    Mark(MarkArgs),
    /// Expand or collapse a book's card in `status` output.
    Expand(ExpandArgs),
    /// Fetch and print the AI insight panel for a book.
    Insight(InsightArgs),
}

#[derive(Debug, Args)]
pub struct StatusArgs {
    /// Restrict the listing to one testament (`old` or `new`).
    #[arg(long)]
    pub testament: Option<String>,
}

#[derive(Debug, Args)]
pub struct ToggleArgs {
    /// Canonical or localized book name.
    #[arg(long)]
    pub book: String,

    /// Chapter number (1-based).
    #[arg(long)]
    pub chapter: u32,
}

#[derive(Debug, Args)]
pub struct MarkArgs {
    /// Canonical or localized book name.
    #[arg(long)]
    pub book: String,

    /// Clear every chapter instead of marking them read.
    #[arg(long)]
    pub clear: bool,
}

#[derive(Debug, Args)]
pub struct ExpandArgs {
    /// Canonical or localized book name.
    #[arg(long)]
    pub book: String,
}

#[derive(Debug, Args)]
pub struct InsightArgs {
    /// Canonical or localized book name.
    #[arg(long)]
    pub book: String,

    /// Generation API base URL (default: the hosted Gemini endpoint).
    #[arg(long)]
    pub base_url: Option<String>,

    /// Generation model identifier.
    #[arg(long)]
    pub model: Option<String>,
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "cooee", about = "Terminal chat client for the community rooms")]
pub struct Cli {
    /// Path to config file (default: ./config.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Open a room feed
    Run {
        /// Room to open (default: the configured room)
        #[arg(short, long)]
        room: Option<String>,
    },
    /// List the available rooms
    Rooms,
}

impl Cli {
    pub fn command_or_default(&self) -> Command {
        self.command.clone().unwrap_or(Command::Run { room: None })
    }
}

// crates/pastelink-cli/src/main.rs

use clap::{Parser, Subcommand};

mod cmd;

#[derive(Parser)]
#[command(name = "pastelink-cli")]
#[command(about = "Paste-sharing codec CLI", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub cmd: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Encode a text file into a URL-safe share token
    Encode(cmd::encode::EncodeArgs),

    /// Decode a share token (or a full share link) back into text
    Decode(cmd::decode::DecodeArgs),

    /// Rewrite pasted literal escape pairs into real control characters
    Normalize(cmd::normalize::NormalizeArgs),

    /// Inspect a token (sizes, compression ratio, content id)
    Inspect(cmd::inspect::InspectArgs),

    /// Build a share link for a text file via the full session flow
    Share(cmd::share::ShareArgs),
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.cmd {
        Commands::Encode(args) => cmd::encode::run(args),
        Commands::Decode(args) => cmd::decode::run(args),
        Commands::Normalize(args) => cmd::normalize::run(args),
        Commands::Inspect(args) => cmd::inspect::run(args),
        Commands::Share(args) => cmd::share::run(args),
    }
}

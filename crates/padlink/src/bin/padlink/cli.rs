//! CLI definitions for padlink.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "padlink",
    version,
    about = "Shareable links and archives for embeddable code playgrounds",
    infer_subcommands = true,
    arg_required_else_help = true,
    after_help = "Examples:\n  padlink share --project ./demo          # print a share URL\n  padlink open '<url>' --out ./demo       # materialize a shared project\n  padlink export --project ./demo         # write a downloadable archive"
)]
pub struct Cli {
    /// Show debug logging on stderr.
    #[arg(long, short, global = true)]
    pub verbose: bool,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Pack a project directory into a shareable URL.
    Share {
        /// Project directory (defaults to the current directory).
        #[arg(long)]
        project: Option<PathBuf>,
        /// Playground page the fragment is appended to (overrides config).
        #[arg(long)]
        base_url: Option<String>,
        /// Also write the URL as an SVG QR code to this path.
        #[arg(long)]
        qr: Option<PathBuf>,
    },
    /// Resolve a share link (or bare fragment) back into project state.
    Open {
        /// Share URL or URL fragment.
        link: String,
        /// Write the shared files beneath this directory.
        #[arg(long)]
        out: Option<PathBuf>,
    },
    /// Export a project directory as a downloadable archive.
    Export {
        /// Project directory (defaults to the current directory).
        #[arg(long)]
        project: Option<PathBuf>,
        /// Archive path (defaults to <project-name>.zip).
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Encode stdin text as a share token.
    Encode,
    /// Decode a share token from stdin back to text.
    Decode,
    /// Generate shell completions.
    Completions {
        /// Target shell.
        shell: Shell,
    },
}

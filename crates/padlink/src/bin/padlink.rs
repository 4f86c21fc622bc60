//! CLI entrypoint for playground share links.

#[path = "padlink/cli.rs"]
mod cli;
#[path = "padlink/completions.rs"]
mod completions;
#[path = "padlink/export.rs"]
mod export;
#[path = "padlink/open.rs"]
mod open;
#[path = "padlink/pipe.rs"]
mod pipe;
#[path = "padlink/share.rs"]
mod share;
#[path = "padlink/style.rs"]
mod style;

use clap::Parser;

use cli::{Cli, Command};

fn main() {
    if let Err(err) = run() {
        let message = format_error_with_tip(&err);
        eprintln!("{}", style::err(format!("Error: {message}")));
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    if cli.verbose {
        init_logging();
    }
    match cli.command {
        Command::Share {
            project,
            base_url,
            qr,
        } => share::run_share(project, base_url, qr),
        Command::Open { link, out } => open::run_open(&link, out),
        Command::Export { project, output } => export::run_export(project, output),
        Command::Encode => pipe::run_encode(),
        Command::Decode => pipe::run_decode(),
        Command::Completions { shell } => completions::run_completions(shell),
    }
}

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::DEBUG.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn format_error_with_tip(err: &anyhow::Error) -> String {
    let message = format!("{err:#}");
    let tip = if message.contains("invalid config") {
        Some("Tip: check padlink.toml, or delete it to fall back to defaults.")
    } else if message.contains("invalid share token") {
        Some("Tip: tokens are unpadded base64url; make sure the link was copied completely.")
    } else if message.contains("exceeds") {
        Some("Tip: raise [limits] in padlink.toml if the project is intentionally this large.")
    } else {
        None
    };
    match tip {
        Some(tip) => format!("{message}\n{tip}"),
        None => message,
    }
}

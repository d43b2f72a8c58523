//! st3p protocol bot over stdin/stdout

use std::io;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use st3p::board::DEFAULT_WIN_LENGTH;
use st3p::protocol::{Identity, ProtocolHandler};

/// N-in-a-row engine speaking the st3p protocol on stdin/stdout.
#[derive(Parser, Debug)]
#[command(name = "st3p", version)]
#[command(about = "N-in-a-row engine speaking the st3p protocol")]
struct Cli {
    /// Engine name reported by `identify`
    #[arg(long)]
    name: Option<String>,

    /// Author reported by `identify`
    #[arg(long)]
    author: Option<String>,

    /// Win-length used when a move command does not carry one
    #[arg(long, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,
}

fn main() -> io::Result<()> {
    // Diagnostics go to stderr so they never mix with protocol output
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let mut identity = Identity::default();
    if let Some(name) = cli.name {
        identity.name = name;
    }
    if let Some(author) = cli.author {
        identity.author = author;
    }

    let handler = ProtocolHandler::new(identity, cli.win_length);
    let stdin = io::stdin();
    let stdout = io::stdout();
    handler.run(stdin.lock(), stdout.lock())
}

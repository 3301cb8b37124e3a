use std::net::SocketAddr;

use clap::Parser;

/// Demonstration GraphQL API over an in-memory catalogue of authors and books.
#[derive(Parser, Debug)]
#[command(name = "bookshelf", version, about)]
pub struct Opt {
    /// Address the HTTP server listens on.
    #[arg(long, env = "BOOKSHELF_LISTEN", default_value = "0.0.0.0:5000")]
    pub listen: SocketAddr,

    /// Log level (off|error|warn|info|debug|trace) or a full filter directive.
    #[arg(long = "log", alias = "log-level", env = "BOOKSHELF_LOG", default_value = "info")]
    pub log_level: String,

    /// Start without the built-in authors and books.
    #[arg(long, env = "BOOKSHELF_EMPTY")]
    pub empty: bool,

    /// Prints the schema SDL and exits.
    #[arg(long)]
    pub schema: bool,
}

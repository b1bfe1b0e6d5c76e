//! Runtime Configuration
//!
//! Every setting can come from a command-line flag or an environment variable; flags win.

use crate::search::HighlightMode;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "folio-search",
    version,
    about = "Phrase search over a concatenated corpus of literary works"
)]
pub struct Config {
    /// Port the HTTP server listens on
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Interface to bind
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: IpAddr,

    /// Corpus text file to index at startup
    #[arg(long = "corpus", env = "CORPUS_PATH", default_value = "completeworks.txt")]
    pub corpus_path: PathBuf,

    /// Directory served for every path other than /search
    #[arg(long, env = "STATIC_DIR", default_value = "static")]
    pub static_dir: PathBuf,

    /// How the query is turned into a highlighting pattern
    #[arg(
        long = "highlight",
        env = "HIGHLIGHT_MODE",
        value_enum,
        default_value_t = HighlightMode::Literal
    )]
    pub highlight_mode: HighlightMode,
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

#[cfg(test)]
mod tests;

use std::net::SocketAddr;
use std::path::PathBuf;
use clap::{Parser, Subcommand, ValueEnum};

pub const DEFAULT_RESERVAS_ENDPOINT: &str = "http://127.0.0.1:8000/api/reservas/";

#[derive(Parser, Clone, Debug)]
pub struct Config {
    #[clap(env, long, default_value = "development")]
    pub environment: String,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Clone, Debug)]
pub enum Command {
    /// Fetch the general reservations once and print them
    List(ListConfig),
    /// Serve the read-only reservations API
    Serve(ServeConfig),
}

#[derive(Parser, Clone, Debug)]
pub struct ListConfig {
    #[clap(env = "RESERVAS_ENDPOINT", long, default_value = DEFAULT_RESERVAS_ENDPOINT)]
    pub endpoint: String,

    #[clap(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Html,
}

#[derive(Parser, Clone, Debug)]
pub struct ServeConfig {
    #[clap(env, long, default_value = "127.0.0.1:8000")]
    pub listen_addr: SocketAddr,

    #[clap(env, long, conflicts_with = "fixture_path", required_unless_present = "fixture_path")]
    pub database_url: Option<String>,

    #[clap(env, long)]
    pub fixture_path: Option<PathBuf>,

    #[clap(env, long, default_value = "http://localhost:3000")]
    pub origin_urls: String,
}

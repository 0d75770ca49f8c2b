use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "movie-sync")]
#[command(about = "Imports now-playing movies from TheMovieDB into Strapi and serves them")]
pub struct CliConfig {
    /// Path to a TOML configuration file (environment variables are used when omitted)
    #[arg(short, long)]
    pub config: Option<String>,

    /// Override server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Override server.port
    #[arg(long)]
    pub port: Option<u16>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub json_logs: bool,
}

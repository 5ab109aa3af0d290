use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Render Leaflet markers into client commands and route client events.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None, arg_required_else_help = true)]
pub struct Cli {
    /// Configuration file (default: leafbridge.toml)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Session id (overrides the configured one)
    #[arg(short, long, global = true)]
    pub session: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render all markers of a file and send them to the client
    Render {
        /// Marker set (TOML or JSON)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        markers: PathBuf,
    },
    /// Render all markers and dispatch client events read from stdin
    ///
    /// Every input line is either a client call,
    /// e.g. {"method":"onMarkerClick","args":["m1"]},
    /// or an event envelope,
    /// e.g. {"tag":"m1","kind":"dragend","payload":{"lat":1.0,"lng":2.0}}.
    Dispatch {
        /// Marker set (TOML or JSON)
        #[arg(value_hint = clap::ValueHint::FilePath)]
        markers: PathBuf,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_dispatch_with_global_args() {
        let cli = Cli::parse_from(["leafbridge", "dispatch", "markers.toml", "-s", "s1"]);
        assert_eq!(cli.session.as_deref(), Some("s1"));
        assert!(cli.config.is_none());
        assert!(matches!(
            cli.command,
            Commands::Dispatch { ref markers } if markers == &PathBuf::from("markers.toml")
        ));
    }
}

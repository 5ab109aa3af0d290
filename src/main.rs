use anyhow::Result;
use clap::Parser;
use leafbridge_core::{command::CommandBuilder, router::EventRouter, usecases};
use leafbridge_gateways::{
    logging::LogTransport, print::StdoutTransport, send_to_json_file::SendToJsonFile,
};
use std::{io, sync::Arc};

mod cli;
mod config;
mod dispatch;
mod markers;

use cli::{Cli, Commands};
use config::{Config, TransportGateway as TransportConfig};
use dispatch::Transport;

fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();
    let mut cfg = Config::try_load_from_file_or_default(cli.config.as_ref())?;
    if let Some(session) = cli.session {
        cfg.set_session(session)?;
    }
    let transport = transport_gateway(&cfg.transport.gateway)?;
    let builder = CommandBuilder::new(cfg.client.server_proxy);

    match cli.command {
        Commands::Render { markers } => {
            let markers = markers::load_from_file(&markers)?;
            for marker in &markers {
                usecases::show_marker(&*transport, &builder, &cfg.session, marker)?;
            }
        }
        Commands::Dispatch { markers } => {
            let markers = markers::load_from_file(&markers)?;
            let router = EventRouter::new();
            let session = cfg.session;
            let markers = dispatch::open(&router, &transport, &builder, &session, markers)?;
            let handled = dispatch::dispatch_lines(&router, &session, io::stdin().lock());
            log::info!("Handled {handled} client events");
            dispatch::close(&router, &session, &markers);
        }
    }
    Ok(())
}

fn transport_gateway(cfg: &TransportConfig) -> Result<Transport> {
    let transport: Transport = match cfg {
        TransportConfig::Log => Arc::new(LogTransport),
        TransportConfig::Stdout => Arc::new(StdoutTransport),
        TransportConfig::JsonFile { dir } => Arc::new(SendToJsonFile::try_new(dir)?),
    };
    Ok(transport)
}

#[cfg(test)]
mod tests {
    #[test]
    fn production_profile_unwinds_on_panic() {
        // Handler panics are caught by the event router.
        let manifest: toml::Table = toml::from_str(include_str!("../Cargo.toml")).unwrap();
        let profile = &manifest["profile"]["production"];
        assert_eq!(profile["inherits"].as_str(), Some("release"));
        assert!(profile.get("panic").is_none());
        assert!(manifest["profile"]["release"].get("panic").is_none());
    }
}

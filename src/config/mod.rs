use anyhow::{anyhow, Result};
use leafbridge_entities::session::SessionId;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "leafbridge.toml";

const ENV_NAME_COMMAND_DIR: &str = "LEAFBRIDGE_COMMAND_DIR";

pub struct Config {
    pub session: SessionId,
    pub client: Client,
    pub transport: Transport,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(dir) = env::var(ENV_NAME_COMMAND_DIR) {
            if let TransportGateway::JsonFile { dir: ref mut cfg_dir } = cfg.transport.gateway {
                *cfg_dir = PathBuf::from(dir);
            }
        }
        Ok(cfg)
    }

    /// Replaces the configured session id, e.g. by a command line value.
    pub fn set_session(&mut self, id: String) -> Result<()> {
        self.session = parse_session(id)?;
        Ok(())
    }
}

fn parse_session(id: String) -> Result<SessionId> {
    let id = SessionId::from(id);
    if !id.is_valid() {
        return Err(anyhow!("Empty session id"));
    }
    Ok(id)
}

pub struct Client {
    /// JS expression that yields the server proxy of the map component.
    pub server_proxy: String,
}

pub struct Transport {
    pub gateway: TransportGateway,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransportGateway {
    Log,
    Stdout,
    /// For local testing purposes
    JsonFile {
        /// File system directory for writing commands into JSON files.
        dir: PathBuf,
    },
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config {
            session,
            client,
            transport,
            gateway,
        } = from;

        let session = match session {
            Some(id) => parse_session(id)?,
            None => SessionId::new(),
        };

        let raw::Client { server_proxy } = client.unwrap_or_default();
        if server_proxy.trim().is_empty() {
            return Err(anyhow!("Empty server proxy expression"));
        }
        let client = Client { server_proxy };

        let raw::Transport { gateway: gw_name } = transport.unwrap_or_default();
        let gateway = match gw_name {
            raw::TransportGateway::Log => TransportGateway::Log,
            raw::TransportGateway::Stdout => TransportGateway::Stdout,
            raw::TransportGateway::JsonFile => {
                let raw::JsonFile { dir } = gateway
                    .unwrap_or_default()
                    .json_file
                    .ok_or_else(|| anyhow!("Missing json-file gateway configuration"))?;
                log::info!("Use JSON file transport ({})", dir.display());
                TransportGateway::JsonFile { dir }
            }
        };
        let transport = Transport { gateway };

        Ok(Self {
            session,
            client,
            transport,
        })
    }
}

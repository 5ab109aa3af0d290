use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("leafbridge.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub session: Option<String>,
    pub client: Option<Client>,
    pub transport: Option<Transport>,
    pub gateway: Option<Gateway>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Client {
    pub server_proxy: String,
}

impl Default for Client {
    fn default() -> Self {
        Config::default().client.expect("Client configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Transport {
    pub gateway: TransportGateway,
}

impl Default for Transport {
    fn default() -> Self {
        Config::default().transport.expect("Transport configuration")
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TransportGateway {
    Log,
    Stdout,
    JsonFile,
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Gateway {
    pub json_file: Option<JsonFile>,
}

impl Default for Gateway {
    fn default() -> Self {
        Config::default().gateway.expect("Gateway configuration")
    }
}

#[derive(Clone, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct JsonFile {
    pub dir: PathBuf,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn parse_default_config_from_file() {
        let cfg: Config = toml::from_str(DEFAULT_CONFIG_FILE).unwrap();
        assert_eq!(cfg.session.as_deref(), Some("default"));
        assert!(cfg.client.is_some());
        assert!(cfg.transport.is_some());
        assert!(cfg.gateway.is_some());
    }

    #[test]
    fn default_gateway_config() {
        let cfg = Gateway::default();
        assert_eq!(cfg.json_file.unwrap().dir, PathBuf::from("commands"));
        assert!(matches!(Transport::default().gateway, TransportGateway::Log));
        assert_eq!(Client::default().server_proxy, "this.$server");
    }

    #[test]
    fn parse_full_config_example_from_file() {
        let cfg_string = fs::read_to_string("src/config/leafbridge.full-example.toml").unwrap();
        let cfg: Config = toml::from_str(&cfg_string).unwrap();
        assert!(matches!(
            cfg.transport.unwrap().gateway,
            TransportGateway::JsonFile
        ));
    }
}

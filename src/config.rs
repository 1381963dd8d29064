use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use serde::Deserialize;

/// Env var naming an optional YAML config file.
pub const CONFIG_ENV: &str = "DOCSERVER_CONFIG";
/// Env var overriding the listen host.
pub const HOST_ENV: &str = "DOCSERVER_HOST";

pub const USAGE: &str = "docserver <serverPort>";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    pub host: String,
    /// Set from the command line, never from the file
    #[serde(skip)]
    pub port: u16,
    /// Directory the resource paths are relative to
    pub base_dir: PathBuf,
    /// Prefix every resource path must start with
    pub root: String,
    /// Served for the empty path
    pub default_document: String,
    pub read_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 0,
            base_dir: PathBuf::from("."),
            root: "doc/".to_string(),
            default_document: "doc/index.html".to_string(),
            read_timeout_secs: 30,
        }
    }
}

impl Config {
    /// Loads the config for `port`: defaults, then the YAML file named by
    /// `DOCSERVER_CONFIG`, then `DOCSERVER_HOST`.
    pub fn load(port: u16) -> anyhow::Result<Self> {
        let mut cfg = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                let text = std::fs::read_to_string(&path)
                    .with_context(|| format!("reading config file {}", path))?;
                Self::from_yaml(&text).with_context(|| format!("parsing config file {}", path))?
            }
            Err(_) => Self::default(),
        };

        if let Ok(host) = std::env::var(HOST_ENV) {
            cfg.host = host;
        }
        cfg.port = port;
        Ok(cfg)
    }

    pub fn from_yaml(text: &str) -> anyhow::Result<Self> {
        Ok(serde_yaml::from_str(text)?)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn read_timeout(&self) -> Duration {
        Duration::from_secs(self.read_timeout_secs)
    }
}

/// Extracts the port from the arguments following the program name.
///
/// Exactly one numeric argument is accepted.
pub fn parse_port<I>(args: I) -> Option<u16>
where
    I: IntoIterator<Item = String>,
{
    let mut args = args.into_iter();
    let port = args.next()?.parse().ok()?;
    match args.next() {
        Some(_) => None,
        None => Some(port),
    }
}

use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Deserialize)]
pub struct BridgeConfig {
    pub bedrock: BedrockSection,
    pub java: JavaSection,
    pub logging: LoggingSection,
    #[serde(default)]
    pub ping: PingSection,
}

/// Listener the Bedrock clients connect to.
#[derive(Debug, Deserialize)]
pub struct BedrockSection {
    pub address: String,
    #[serde(default = "default_bedrock_port")]
    pub port: u16,
    pub motd: String,
    #[serde(default = "default_max_players")]
    pub max_players: u32,
}

fn default_bedrock_port() -> u16 {
    19132
}

fn default_max_players() -> u32 {
    100
}

/// Java server the bridge logs players into.
#[derive(Debug, Deserialize)]
pub struct JavaSection {
    pub address: String,
    #[serde(default = "default_java_port")]
    pub port: u16,
    #[serde(default)]
    pub auth_type: AuthType,
}

fn default_java_port() -> u16 {
    25565
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AuthType {
    #[default]
    Online,
    Offline,
    Floodgate,
}

#[derive(Debug, Deserialize)]
pub struct LoggingSection {
    pub level: String,
    #[serde(default)]
    pub debug: bool,
    /// Off replaces player addresses in log lines with a placeholder.
    #[serde(default = "default_log_player_ip_addresses")]
    pub log_player_ip_addresses: bool,
}

fn default_log_player_ip_addresses() -> bool {
    true
}

#[derive(Debug, Deserialize)]
pub struct PingSection {
    /// Ask status listeners for the MOTD and player counts instead of
    /// answering from this config.
    #[serde(default)]
    pub passthrough: bool,
    #[serde(default = "default_ping_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_ping_timeout_ms() -> u64 {
    100
}

impl Default for PingSection {
    fn default() -> Self {
        Self {
            passthrough: false,
            timeout_ms: default_ping_timeout_ms(),
        }
    }
}

impl PingSection {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl BridgeConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn std::error::Error>> {
        let contents = std::fs::read_to_string(path)?;
        let config: Self = toml::from_str(&contents)?;
        Ok(config)
    }

    /// Filter directive for the log subscriber; `debug = true` wins over the
    /// configured level.
    pub fn log_filter(&self) -> &str {
        if self.logging.debug {
            "debug"
        } else {
            &self.logging.level
        }
    }
}

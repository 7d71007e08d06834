//! Configuration loading.
//!
//! Everything is supplied once, at session construction:
//!
//! ```toml
//! host = "irc.libera.chat"
//! port = 6667
//! nick = "WrexBot"
//! channels = ["#normandy"]
//! plugins = ["Shepard", "Admin"]
//! admins = ["Shepard"]
//! ignores = ["ChanServ"]
//! prefix = "!"
//! encoding = "utf-8"
//! ```

use serde::Deserialize;
use std::path::Path;
use thiserror::Error;

use crate::line::MAX_IRC_LINE_LEN;

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The file could not be read.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// The file is not valid TOML for [`BotConfig`].
    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// A field holds a value the bot cannot use.
    #[error("invalid config: {0}")]
    Invalid(String),
}

/// Bot configuration.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct BotConfig {
    /// Server hostname.
    #[serde(default = "defaults::host")]
    pub host: String,
    /// Server port.
    #[serde(default = "defaults::port")]
    pub port: u16,
    /// Bot nickname.
    #[serde(default = "defaults::nick")]
    pub nick: String,
    /// Channels joined on welcome.
    #[serde(default)]
    pub channels: Vec<String>,
    /// Plugins loaded at startup, in dispatch order.
    #[serde(default = "defaults::plugins")]
    pub plugins: Vec<String>,
    /// Users whose lines are dropped. The bot's nick is always added.
    #[serde(default)]
    pub ignores: Vec<String>,
    /// Users allowed to run admin commands.
    #[serde(default)]
    pub admins: Vec<String>,
    /// Marker that starts a custom command.
    #[serde(default = "defaults::prefix")]
    pub prefix: String,
    /// Wire text encoding label.
    #[serde(default = "defaults::encoding")]
    pub encoding: String,
    /// Longest accepted inbound line, terminator included.
    #[serde(default = "defaults::max_line_len")]
    pub max_line_len: usize,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            host: defaults::host(),
            port: defaults::port(),
            nick: defaults::nick(),
            channels: Vec::new(),
            plugins: defaults::plugins(),
            ignores: Vec::new(),
            admins: Vec::new(),
            prefix: defaults::prefix(),
            encoding: defaults::encoding(),
            max_line_len: defaults::max_line_len(),
        }
    }
}

impl BotConfig {
    /// Load configuration from a TOML file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let config: BotConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Check field values that serde cannot.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.nick.is_empty() || self.nick.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!("bad nick: {:?}", self.nick)));
        }
        if self.prefix.is_empty() || self.prefix.contains(char::is_whitespace) {
            return Err(ConfigError::Invalid(format!("bad prefix: {:?}", self.prefix)));
        }
        if encoding::Encoding::for_label(self.encoding.as_bytes()).is_none() {
            return Err(ConfigError::Invalid(format!(
                "unknown encoding: {}",
                self.encoding
            )));
        }
        if self.max_line_len == 0 {
            return Err(ConfigError::Invalid("max_line_len must be positive".to_string()));
        }
        Ok(())
    }

    /// `host:port` for connecting.
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

mod defaults {
    use super::MAX_IRC_LINE_LEN;

    pub fn host() -> String {
        "localhost".to_string()
    }

    pub fn port() -> u16 {
        6667
    }

    pub fn nick() -> String {
        "WrexBot".to_string()
    }

    pub fn plugins() -> Vec<String> {
        vec!["Shepard".to_string(), "Admin".to_string()]
    }

    pub fn prefix() -> String {
        "!".to_string()
    }

    pub fn encoding() -> String {
        "utf-8".to_string()
    }

    pub fn max_line_len() -> usize {
        MAX_IRC_LINE_LEN
    }
}

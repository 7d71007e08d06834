//! # wrexbot
//!
//! A small plugin-driven IRC bot core.
//!
//! ## Features
//!
//! - Chunk-independent line framing with a configurable text encoding and
//!   raw-byte fallback
//! - Lenient IRC line parsing into sender, command, params and trailing text
//! - Ignore and admin lists, with the bot's own nick always ignored
//! - Per-line routing with PING/PONG, auto-join on welcome and a prefixed
//!   custom command syntax
//! - A name-keyed plugin registry with fault isolation between plugins

#![deny(clippy::all)]

//! ## Quick Start
//!
//! ```rust
//! use wrexbot::{BotConfig, Router};
//!
//! let config = BotConfig {
//!     nick: "WrexBot".to_string(),
//!     channels: vec!["#normandy".to_string()],
//!     ..BotConfig::default()
//! };
//! let mut router = Router::new(&config);
//!
//! router.handle_line(":irc.example.net 001 WrexBot :Welcome");
//! assert_eq!(router.session_mut().take_outbox(), vec!["JOIN #normandy"]);
//!
//! router.handle_line("PING :irc.example.net");
//! assert_eq!(router.session_mut().take_outbox(), vec!["PONG :irc.example.net"]);
//! ```

pub mod access;
pub mod client;
pub mod config;
pub mod error;
pub mod invocation;
pub mod line;
pub mod message;
pub mod plugin;
pub mod plugins;
pub mod response;
pub mod router;
pub mod session;
pub mod transcript;

pub use self::access::AccessList;
pub use self::config::{BotConfig, ConfigError};
pub use self::error::{BotError, MessageParseError, PluginError, ProtocolError};
pub use self::invocation::Invocation;
pub use self::line::{LineCodec, MAX_IRC_LINE_LEN};
pub use self::message::{Message, ParsedLine};
pub use self::plugin::{Dispatch, Plugin, PluginResult};
pub use self::plugins::PluginRegistry;
pub use self::response::Response;
pub use self::router::Router;
pub use self::session::Session;
pub use self::transcript::TranscriptEntry;

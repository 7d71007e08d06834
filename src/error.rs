//! Error types for the bot.
//!
//! This module defines errors for the wire layer (framing and codec),
//! message parsing, plugin loading and dispatch, and the top-level
//! session error that ends the connection.

use thiserror::Error;

use crate::config::ConfigError;

/// Convenience type alias for Results using [`ProtocolError`].
pub type Result<T, E = ProtocolError> = std::result::Result<T, E>;

/// Wire-level errors raised by the line codec.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum ProtocolError {
    /// I/O error during reading or writing.
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    /// A single unterminated line grew past the configured limit.
    #[error("message too long: {actual} bytes (limit {limit})")]
    MessageTooLong {
        /// Bytes buffered for the offending line.
        actual: usize,
        /// Configured maximum line length.
        limit: usize,
    },

    /// The configured text encoding label is not known.
    #[error("unknown encoding: {0}")]
    UnknownEncoding(String),

    /// Failed to parse an IRC message.
    #[error("invalid message: {string}")]
    InvalidMessage {
        /// The raw message string.
        string: String,
        /// The underlying parse error.
        #[source]
        cause: MessageParseError,
    },
}

/// Errors encountered when parsing IRC messages.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum MessageParseError {
    /// Message was empty.
    #[error("empty message")]
    EmptyMessage,

    /// No command token could be found.
    #[error("missing command")]
    MissingCommand,

    /// A `:prefix` was present with nothing after it.
    #[error("prefix without command: {0}")]
    MissingSpace(String),
}

/// Errors raised by the plugin registry and by plugin handlers.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum PluginError {
    /// No plugin of that name exists in the static table.
    #[error("plugin not found: {0}")]
    NotFound(String),

    /// A plugin could not be constructed.
    #[error("plugin {plugin} failed to initialize: {message}")]
    Init {
        /// Name of the plugin.
        plugin: &'static str,
        /// Human-readable failure description.
        message: String,
    },

    /// A plugin handler reported a failure.
    #[error("plugin {plugin} failed: {message}")]
    Handler {
        /// Name of the failing plugin.
        plugin: &'static str,
        /// Human-readable failure description.
        message: String,
    },
}

/// Fatal errors that terminate a bot session.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum BotError {
    /// Framing or socket failure.
    #[error(transparent)]
    Protocol(#[from] ProtocolError),

    /// Configuration could not be loaded or is invalid.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The server closed the connection.
    #[error("connection closed by server")]
    ConnectionClosed,
}

impl From<std::io::Error> for BotError {
    fn from(err: std::io::Error) -> Self {
        Self::Protocol(ProtocolError::Io(err))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ProtocolError::MessageTooLong {
            actual: 9000,
            limit: 8191,
        };
        assert_eq!(
            format!("{}", err),
            "message too long: 9000 bytes (limit 8191)"
        );

        let err = PluginError::NotFound("Garrus".to_string());
        assert_eq!(format!("{}", err), "plugin not found: Garrus");
    }

    #[test]
    fn test_protocol_error_chaining() {
        let parse_err = MessageParseError::MissingCommand;
        let protocol_err = ProtocolError::InvalidMessage {
            string: ":server".to_string(),
            cause: parse_err.clone(),
        };

        let source = std::error::Error::source(&protocol_err);
        assert!(source.is_some());
        assert_eq!(source.unwrap().to_string(), parse_err.to_string());
    }

    #[test]
    fn test_error_conversion() {
        let io_err =
            std::io::Error::new(std::io::ErrorKind::ConnectionReset, "connection reset");
        let bot_err: BotError = io_err.into();

        match bot_err {
            BotError::Protocol(ProtocolError::Io(_)) => {}
            _ => panic!("Expected Protocol(Io) variant"),
        }
    }
}

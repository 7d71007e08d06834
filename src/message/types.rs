//! Owned IRC message type.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use crate::error::{MessageParseError, ProtocolError};

use super::nom_parser::ParsedLine;

/// One parsed inbound line.
///
/// `command` is never empty; `sender` is empty for lines that carried no
/// `:prefix` (some PING forms), and `trailing` is empty when the line had
/// no ` :` marker.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Message {
    /// Sender nickname or server name, user/host mask stripped.
    pub sender: String,
    /// Command name or three-digit numeric.
    pub command: String,
    /// Middle parameters, in wire order.
    pub params: Vec<String>,
    /// Final free-text parameter.
    pub trailing: String,
}

impl Message {
    /// Parse a terminator-stripped line.
    pub fn parse(line: &str) -> Result<Self, MessageParseError> {
        ParsedLine::parse(line).map(Into::into)
    }

    /// First middle parameter, usually the target of the command.
    pub fn target(&self) -> Option<&str> {
        self.params.first().map(String::as_str)
    }
}

impl<'a> From<ParsedLine<'a>> for Message {
    fn from(line: ParsedLine<'a>) -> Self {
        Message {
            sender: line.sender.to_owned(),
            command: line.command.to_owned(),
            params: line.params.into_iter().map(str::to_owned).collect(),
            trailing: line.trailing.to_owned(),
        }
    }
}

impl FromStr for Message {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Message::parse(s).map_err(|cause| ProtocolError::InvalidMessage {
            string: s.to_string(),
            cause,
        })
    }
}

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if !self.sender.is_empty() {
            write!(f, ":{} ", self.sender)?;
        }
        f.write_str(&self.command)?;
        for param in &self.params {
            write!(f, " {}", param)?;
        }
        if !self.trailing.is_empty() {
            write!(f, " :{}", self.trailing)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str_wraps_parse_error() {
        let err = "".parse::<Message>().unwrap_err();
        assert!(matches!(
            err,
            ProtocolError::InvalidMessage {
                cause: MessageParseError::EmptyMessage,
                ..
            }
        ));
    }

    #[test]
    fn test_display_drops_host_mask() {
        let msg: Message = ":nick!user@host PRIVMSG #chan :hello world".parse().unwrap();
        assert_eq!(msg.to_string(), ":nick PRIVMSG #chan :hello world");
    }
}

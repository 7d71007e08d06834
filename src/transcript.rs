//! Local chat transcript.
//!
//! Every received PRIVMSG, every sent PRIVMSG and the numeric notices the
//! bot handles produce one [`TranscriptEntry`], rendered as
//!
//! ```text
//! [2024-01-01 12:00:00] #channel | nick: message text
//! ```

use std::fmt::{self, Display, Formatter};

use chrono::{DateTime, Local};

/// Timestamp format used for transcript lines.
pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One displayed chat line.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TranscriptEntry {
    /// When the entry was recorded.
    pub timestamp: DateTime<Local>,
    /// Channel or nick the text was addressed to.
    pub target: String,
    /// Who sent the text.
    pub sender: String,
    /// The text itself.
    pub text: String,
}

impl TranscriptEntry {
    /// Create an entry stamped with the current local time.
    pub fn now(sender: &str, target: &str, text: &str) -> Self {
        Self {
            timestamp: Local::now(),
            target: target.to_string(),
            sender: sender.to_string(),
            text: text.to_string(),
        }
    }
}

impl Display for TranscriptEntry {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {} | {}: {}",
            self.timestamp.format(DATE_FORMAT),
            self.target,
            self.sender,
            self.text
        )
    }
}

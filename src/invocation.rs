//! Custom command detection.
//!
//! A PRIVMSG whose text starts with the session prefix carries a custom
//! command: `!say #normandy hello` names the token `say` with arguments
//! `["#normandy", "hello"]`.

use crate::access::AccessList;
use crate::message::Message;

/// A custom command found in chat text.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Invocation {
    /// Who typed the command.
    pub invoker: String,
    /// Where replies go: the channel, or the invoker for a direct message.
    pub recipient: String,
    /// Command word without the prefix.
    pub token: String,
    /// Space-separated arguments after the token.
    pub args: Vec<String>,
    /// Whether the invoker is a bot admin.
    pub is_admin: bool,
}

impl Invocation {
    /// Extract a custom command from `msg`, if its text starts with `prefix`.
    ///
    /// `own_nick` decides the recipient remap: a PRIVMSG addressed to the
    /// bot itself is answered back to the sender.
    pub fn detect(
        msg: &Message,
        own_nick: &str,
        prefix: &str,
        access: &AccessList,
    ) -> Option<Self> {
        let body = msg.trailing.strip_prefix(prefix)?;
        let mut words = body.split(' ').filter(|w| !w.is_empty());
        let token = if body.starts_with(' ') {
            String::new()
        } else {
            words.next().unwrap_or_default().to_string()
        };

        let recipient = match msg.target() {
            Some(target) if target != own_nick => target.to_string(),
            _ => msg.sender.clone(),
        };

        Some(Self {
            invoker: msg.sender.clone(),
            recipient,
            token,
            args: words.map(str::to_string).collect(),
            is_admin: access.is_admin(&msg.sender),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn access() -> AccessList {
        AccessList::new("WrexBot", Vec::new(), vec!["Shepard".to_string()])
    }

    #[test]
    fn test_detect_channel_command() {
        let msg = Message::parse(":Shepard!s@normandy PRIVMSG #normandy :!kick Garrus now").unwrap();
        let inv = Invocation::detect(&msg, "WrexBot", "!", &access()).unwrap();
        assert_eq!(inv.invoker, "Shepard");
        assert_eq!(inv.recipient, "#normandy");
        assert_eq!(inv.token, "kick");
        assert_eq!(inv.args, vec!["Garrus", "now"]);
        assert!(inv.is_admin);
    }

    #[test]
    fn test_detect_direct_message_remaps_recipient() {
        let msg = Message::parse(":Garrus!g@normandy PRIVMSG WrexBot :!herp").unwrap();
        let inv = Invocation::detect(&msg, "WrexBot", "!", &access()).unwrap();
        assert_eq!(inv.recipient, "Garrus");
        assert!(!inv.is_admin);
        assert!(inv.args.is_empty());
    }

    #[test]
    fn test_detect_requires_prefix() {
        let msg = Message::parse(":Garrus PRIVMSG #normandy :herp !derp").unwrap();
        assert!(Invocation::detect(&msg, "WrexBot", "!", &access()).is_none());
    }

    #[test]
    fn test_detect_multichar_prefix() {
        let msg = Message::parse(":Garrus PRIVMSG #normandy :>>say hi").unwrap();
        let inv = Invocation::detect(&msg, "WrexBot", ">>", &access()).unwrap();
        assert_eq!(inv.token, "say");
        assert_eq!(inv.args, vec!["hi"]);
    }

    #[test]
    fn test_detect_collapses_repeated_spaces() {
        let msg = Message::parse(":Shepard PRIVMSG #n :!join  #a   #b").unwrap();
        let inv = Invocation::detect(&msg, "WrexBot", "!", &access()).unwrap();
        assert_eq!(inv.args, vec!["#a", "#b"]);
    }
}

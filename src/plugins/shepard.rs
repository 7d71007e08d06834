//! Answers "Wrex" with "Shepard" and the other way round.

use regex::Regex;

use crate::error::PluginError;
use crate::message::Message;
use crate::plugin::{Plugin, PluginResult};
use crate::session::Session;

const TRIGGER: &str = r"(?i)\b(wrex|shepard)\b.*?([\W1_]+)?$";

fn is_all_caps(word: &str) -> bool {
    word.chars().any(char::is_alphabetic) && !word.chars().any(char::is_lowercase)
}

/// Reacts to every PRIVMSG naming Wrex or Shepard.
#[derive(Debug)]
pub struct Shepard {
    trigger: Regex,
}

impl Shepard {
    /// Compile the trigger pattern.
    pub fn new() -> Result<Self, PluginError> {
        let trigger = Regex::new(TRIGGER).map_err(|e| PluginError::Init {
            plugin: "Shepard",
            message: e.to_string(),
        })?;
        Ok(Self { trigger })
    }

    /// The reply for `text`, if it names either of them.
    pub fn answer(&self, text: &str) -> Option<String> {
        let caps = self.trigger.captures(text)?;
        let name = caps.get(1)?.as_str();
        let reply = if name.eq_ignore_ascii_case("wrex") {
            "Shepard"
        } else {
            "Wrex"
        };
        let mut answer = if is_all_caps(name) {
            reply.to_uppercase()
        } else {
            reply.to_string()
        };
        answer.push_str(caps.get(2).map_or(".", |m| m.as_str()));
        Some(answer)
    }
}

impl Plugin for Shepard {
    fn name(&self) -> &'static str {
        "Shepard"
    }

    fn commands(&self) -> &[&'static str] {
        &["PRIVMSG"]
    }

    fn on_message(&mut self, bot: &mut Session, msg: &Message) -> PluginResult {
        let recipient = match msg.target() {
            Some(target) if target != bot.nick() => target.to_string(),
            _ => msg.sender.clone(),
        };
        if let Some(answer) = self.answer(&msg.trailing) {
            bot.privmsg(&recipient, &answer);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BotConfig;
    use crate::plugin::Dispatch;

    #[test]
    fn test_answer() {
        let shepard = Shepard::new().unwrap();
        assert_eq!(shepard.answer("Wrex").as_deref(), Some("Shepard."));
        assert_eq!(shepard.answer("hey shepard!!").as_deref(), Some("Wrex!!"));
        assert_eq!(shepard.answer("WREX?").as_deref(), Some("SHEPARD?"));
        assert_eq!(
            shepard.answer("Wrex, are you there?").as_deref(),
            Some("Shepard?")
        );
        assert_eq!(shepard.answer("Wrexford"), None);
        assert_eq!(shepard.answer("hello"), None);
    }

    #[test]
    fn test_channel_and_direct_replies() {
        let mut bot = Session::new(&BotConfig {
            nick: "WrexBot".to_string(),
            ..BotConfig::default()
        });
        let mut shepard = Shepard::new().unwrap();

        let msg = Message::parse(":Garrus!g@n PRIVMSG #normandy :Shepard").unwrap();
        shepard.dispatch(&mut bot, Dispatch::Rfc(&msg)).unwrap();
        let msg = Message::parse(":Garrus!g@n PRIVMSG WrexBot :Wrex").unwrap();
        shepard.dispatch(&mut bot, Dispatch::Rfc(&msg)).unwrap();

        assert_eq!(
            bot.take_outbox(),
            vec!["PRIVMSG #normandy :Wrex.", "PRIVMSG Garrus :Shepard."]
        );
    }

    #[test]
    fn test_ignores_other_commands() {
        let mut bot = Session::new(&BotConfig::default());
        let mut shepard = Shepard::new().unwrap();
        let msg = Message::parse(":Garrus NOTICE #normandy :Wrex").unwrap();
        shepard.dispatch(&mut bot, Dispatch::Rfc(&msg)).unwrap();
        assert!(bot.outbox().is_empty());
    }
}

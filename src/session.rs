//! Session state and the outbound writer.
//!
//! The [`Session`] is sans-IO: outbound protocol lines are queued in an
//! outbox and transcript entries in a display queue. The connection driver
//! drains both after every inbound line, so everything a line triggers is
//! on the wire before the next line is parsed.

use std::borrow::Cow;

use tracing::info;

use crate::access::AccessList;
use crate::config::BotConfig;
use crate::transcript::TranscriptEntry;

/// Prefix `#` to a bare channel name.
pub fn normalize_channel(channel: &str) -> Cow<'_, str> {
    if channel.starts_with('#') {
        Cow::Borrowed(channel)
    } else {
        Cow::Owned(format!("#{}", channel))
    }
}

/// Live state of the single bot connection.
#[derive(Debug)]
pub struct Session {
    nick: String,
    channels: Vec<String>,
    prefix: String,
    encoding: String,
    access: AccessList,
    outbox: Vec<String>,
    transcript: Vec<TranscriptEntry>,
}

impl Session {
    /// Build a session from configuration.
    ///
    /// The configured nick is always added to the ignore list.
    pub fn new(config: &BotConfig) -> Self {
        Self {
            nick: config.nick.clone(),
            channels: config.channels.clone(),
            prefix: config.prefix.clone(),
            encoding: config.encoding.clone(),
            access: AccessList::new(
                &config.nick,
                config.ignores.iter().cloned(),
                config.admins.iter().cloned(),
            ),
            outbox: Vec::new(),
            transcript: Vec::new(),
        }
    }

    /// The bot's nickname.
    pub fn nick(&self) -> &str {
        &self.nick
    }

    /// Channels joined on welcome.
    pub fn channels(&self) -> &[String] {
        &self.channels
    }

    /// Marker that starts a custom command.
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Wire encoding label.
    pub fn encoding(&self) -> &str {
        &self.encoding
    }

    /// Ignore and admin lists.
    pub fn access(&self) -> &AccessList {
        &self.access
    }

    /// Ignored users.
    pub fn ignores(&self) -> &[String] {
        self.access.ignores()
    }

    /// Bot admins.
    pub fn admins(&self) -> &[String] {
        self.access.admins()
    }

    /// Whether `user` is a bot admin.
    pub fn is_admin(&self, user: &str) -> bool {
        self.access.is_admin(user)
    }

    /// Whether `user` is ignored.
    pub fn is_ignored(&self, user: &str) -> bool {
        self.access.is_ignored(user)
    }

    /// Add a bot admin.
    pub fn add_admin(&mut self, user: &str) -> bool {
        self.access.add_admin(user)
    }

    /// Remove a bot admin.
    pub fn remove_admin(&mut self, user: &str) -> bool {
        self.access.remove_admin(user)
    }

    /// Ignore a user.
    pub fn add_ignore(&mut self, user: &str) -> bool {
        self.access.add_ignore(user)
    }

    /// Stop ignoring a user. The bot's own nick stays ignored.
    pub fn remove_ignore(&mut self, user: &str) -> bool {
        self.access.remove_ignore(user)
    }

    /// Queue a raw protocol line: the command and arguments joined by
    /// single spaces.
    pub fn write<I, S>(&mut self, command: &str, args: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut line = command.to_string();
        for arg in args {
            line.push(' ');
            line.push_str(arg.as_ref());
        }
        info!("SENT: {}", line);
        self.outbox.push(line);
    }

    /// Send the registration handshake.
    pub fn handshake(&mut self) {
        let nick = self.nick.clone();
        self.write("NICK", [nick.as_str()]);
        let realname = format!(":{}", nick);
        self.write("USER", [nick.as_str(), nick.as_str(), nick.as_str(), realname.as_str()]);
    }

    /// Answer a server PING with the same payload.
    pub fn pong(&mut self, payload: &str) {
        self.write("PONG", [format!(":{}", payload)]);
    }

    /// Join a channel, adding `#` if missing.
    pub fn join(&mut self, channel: &str) {
        let channel = normalize_channel(channel).into_owned();
        self.write("JOIN", [channel]);
    }

    /// Part a channel, adding `#` if missing.
    pub fn part(&mut self, channel: &str) {
        let channel = normalize_channel(channel).into_owned();
        self.write("PART", [channel]);
    }

    /// Send a PRIVMSG and mirror it to the transcript.
    pub fn privmsg(&mut self, recipient: &str, text: &str) {
        self.write("PRIVMSG", [recipient.to_string(), format!(":{}", text)]);
        let nick = self.nick.clone();
        self.display(&nick, recipient, text);
    }

    /// Record a transcript entry.
    pub fn display(&mut self, sender: &str, target: &str, text: &str) {
        self.transcript.push(TranscriptEntry::now(sender, target, text));
    }

    /// Lines queued for the wire, oldest first.
    pub fn outbox(&self) -> &[String] {
        &self.outbox
    }

    /// Take every queued outbound line.
    pub fn take_outbox(&mut self) -> Vec<String> {
        std::mem::take(&mut self.outbox)
    }

    /// Take every pending transcript entry.
    pub fn take_transcript(&mut self) -> Vec<TranscriptEntry> {
        std::mem::take(&mut self.transcript)
    }
}

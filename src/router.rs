//! Per-line routing.
//!
//! The [`Router`] owns the [`Session`] and the [`PluginRegistry`] and runs
//! one turn per inbound line:
//!
//! 1. parse the line, skipping it on failure;
//! 2. drop it if the sender is ignored;
//! 3. run the built-in reflexes (PING, PRIVMSG, welcome, nick and channel
//!    errors), where a prefixed PRIVMSG is also dispatched to every plugin
//!    as a custom command;
//! 4. broadcast the message to every plugin.
//!
//! Plugins run in load order. A plugin that fails or panics is logged and
//! skipped for that event; the remaining plugins still run.

use std::panic::{self, AssertUnwindSafe};

use tracing::{debug, error, warn};

use crate::config::BotConfig;
use crate::invocation::Invocation;
use crate::message::Message;
use crate::plugin::Dispatch;
use crate::plugins::{self, PluginRegistry};
use crate::response::Response;
use crate::session::Session;

/// Routes inbound lines to reflexes and plugins.
#[derive(Debug)]
pub struct Router {
    session: Session,
    registry: PluginRegistry,
}

impl Router {
    /// Build a router and load every configured plugin.
    ///
    /// Unknown plugin names are logged and skipped.
    pub fn new(config: &BotConfig) -> Self {
        let mut registry = PluginRegistry::new();
        for name in &config.plugins {
            if let Err(e) = registry.load(name) {
                let available: Vec<_> = plugins::available().collect();
                error!(plugin = %name, error = %e, ?available, "Failed to load plugin");
            }
        }
        Self::with_registry(Session::new(config), registry)
    }

    /// Build a router from parts.
    pub fn with_registry(session: Session, registry: PluginRegistry) -> Self {
        Self { session, registry }
    }

    /// The session state.
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Mutable session state, for draining the outbox.
    pub fn session_mut(&mut self) -> &mut Session {
        &mut self.session
    }

    /// Loaded plugins.
    pub fn registry(&self) -> &PluginRegistry {
        &self.registry
    }

    /// Loaded plugins, for loading or unloading at runtime.
    pub fn registry_mut(&mut self) -> &mut PluginRegistry {
        &mut self.registry
    }

    /// Run one turn for a terminator-stripped inbound line.
    pub fn handle_line(&mut self, line: &str) {
        let msg = match Message::parse(line) {
            Ok(msg) => msg,
            Err(e) => {
                warn!(line = %line, error = %e, "Skipping malformed line");
                return;
            }
        };
        debug!("RECEIVED: {}", line);
        self.handle_message(&msg);
    }

    /// Run one turn for an already-parsed message.
    pub fn handle_message(&mut self, msg: &Message) {
        if !self.session.access().should_process(&msg.sender) {
            debug!(sender = %msg.sender, "Dropping line from ignored sender");
            return;
        }

        self.reflexes(msg);
        self.broadcast(Dispatch::Rfc(msg), &msg.command);
    }

    fn reflexes(&mut self, msg: &Message) {
        if msg.command.contains("PING") {
            self.session.pong(&msg.trailing);
        } else if msg.command.contains("PRIVMSG") {
            let target = msg.target().unwrap_or_default();
            self.session.display(&msg.sender, target, &msg.trailing);

            let invocation = Invocation::detect(
                msg,
                self.session.nick(),
                self.session.prefix(),
                self.session.access(),
            );
            if let Some(inv) = invocation {
                self.broadcast(Dispatch::Custom(&inv), &msg.command);
            }
        } else if let Ok(response) = msg.command.parse::<Response>() {
            self.numeric(response, msg);
        }
    }

    fn numeric(&mut self, response: Response, msg: &Message) {
        let nick = self.session.nick().to_string();
        let notice = match response {
            Response::RPL_WELCOME => {
                self.session.display(&msg.sender, &nick, &msg.trailing);
                let channels = self.session.channels().to_vec();
                for channel in &channels {
                    self.session.join(channel);
                }
                return;
            }
            Response::ERR_CANNOTSENDTOCHAN => {
                let channel = msg
                    .params
                    .get(1)
                    .or_else(|| msg.params.first())
                    .map(String::as_str)
                    .unwrap_or_default();
                format!("Cannot send to chan: {}", channel)
            }
            Response::ERR_ERRONEUSNICKNAME => format!("Invalid nickname: {}", nick),
            Response::ERR_NICKNAMEINUSE | Response::ERR_NICKCOLLISION => {
                format!("Nickname {} already in use.", nick)
            }
        };
        warn!(code = %response, "{}", notice);
        self.session.display(&msg.sender, &nick, &notice);
    }

    fn broadcast(&mut self, event: Dispatch<'_>, command: &str) {
        let session = &mut self.session;
        for plugin in self.registry.iter_mut() {
            let name = plugin.name();
            let outcome =
                panic::catch_unwind(AssertUnwindSafe(|| plugin.dispatch(session, event)));
            match outcome {
                Ok(Ok(())) => {}
                Ok(Err(e)) => {
                    error!(plugin = name, command = %command, error = %e, "Plugin dispatch failed");
                }
                Err(payload) => {
                    let reason = payload
                        .downcast_ref::<&str>()
                        .map(|s| s.to_string())
                        .or_else(|| payload.downcast_ref::<String>().cloned())
                        .unwrap_or_else(|| "unknown panic".to_string());
                    error!(plugin = name, command = %command, panic = %reason, "Plugin panicked");
                }
            }
        }
    }
}

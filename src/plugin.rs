//! The plugin contract.
//!
//! A plugin declares three capability sets: RFC commands it reacts to on
//! every matching line, user-level custom commands, and admin-level custom
//! commands. The provided [`Plugin::dispatch`] routes an event to the
//! matching hook; plugins with unusual needs can override it.
//!
//! Admin-level commands are only run when the invocation's `is_admin` flag
//! is set. The router computes that flag but does not gate on it, so every
//! plugin that overrides `dispatch` must repeat the check.

use crate::error::PluginError;
use crate::invocation::Invocation;
use crate::message::Message;
use crate::session::Session;

/// Result of one plugin hook.
pub type PluginResult = Result<(), PluginError>;

/// What a plugin is being asked to handle.
#[derive(Clone, Copy, Debug)]
pub enum Dispatch<'a> {
    /// An inbound line, delivered to every plugin.
    Rfc(&'a Message),
    /// A custom command found in a PRIVMSG.
    Custom(&'a Invocation),
}

/// A loadable bot extension.
pub trait Plugin: Send {
    /// Name used for loading, unloading and logging.
    fn name(&self) -> &'static str;

    /// RFC commands handled by [`Plugin::on_message`].
    fn commands(&self) -> &[&'static str] {
        &[]
    }

    /// Custom commands anyone may run.
    fn user_commands(&self) -> &[&'static str] {
        &[]
    }

    /// Custom commands only admins may run.
    fn admin_commands(&self) -> &[&'static str] {
        &[]
    }

    /// Handle an inbound line whose command is in [`Plugin::commands`].
    fn on_message(&mut self, _bot: &mut Session, _msg: &Message) -> PluginResult {
        Ok(())
    }

    /// Handle a user-level custom command.
    fn on_user_command(&mut self, _bot: &mut Session, _inv: &Invocation) -> PluginResult {
        Ok(())
    }

    /// Handle an admin-level custom command from an admin.
    fn on_admin_command(&mut self, _bot: &mut Session, _inv: &Invocation) -> PluginResult {
        Ok(())
    }

    /// Route one event to the matching hook.
    fn dispatch(&mut self, bot: &mut Session, event: Dispatch<'_>) -> PluginResult {
        match event {
            Dispatch::Rfc(msg) => {
                if self.commands().contains(&msg.command.as_str()) {
                    self.on_message(bot, msg)
                } else {
                    Ok(())
                }
            }
            Dispatch::Custom(inv) => {
                let token = inv.token.as_str();
                if inv.is_admin && self.admin_commands().contains(&token) {
                    self.on_admin_command(bot, inv)
                } else if self.user_commands().contains(&token) {
                    self.on_user_command(bot, inv)
                } else {
                    Ok(())
                }
            }
        }
    }
}

//! A minimal plugin showing both command levels.

use crate::invocation::Invocation;
use crate::plugin::{Plugin, PluginResult};
use crate::session::Session;

/// Replies "Derp." to `herp`; admins may also ask `what`.
#[derive(Debug, Default)]
pub struct Example;

impl Plugin for Example {
    fn name(&self) -> &'static str {
        "Example"
    }

    fn user_commands(&self) -> &[&'static str] {
        &["herp"]
    }

    fn admin_commands(&self) -> &[&'static str] {
        &["what"]
    }

    fn on_user_command(&mut self, bot: &mut Session, inv: &Invocation) -> PluginResult {
        bot.privmsg(&inv.recipient, "Derp.");
        Ok(())
    }

    fn on_admin_command(&mut self, bot: &mut Session, inv: &Invocation) -> PluginResult {
        bot.privmsg(&inv.recipient, "Say \"what\" again!");
        Ok(())
    }
}

//! Bot administration commands.
//!
//! Every command carries an argument-count rule and a usage line. A call
//! with the wrong number of arguments is answered with the usage line
//! instead of being run.

use crate::invocation::Invocation;
use crate::plugin::{Plugin, PluginResult};
use crate::session::Session;

type Handler = fn(&mut Session, &Invocation);

struct AdminCommand {
    name: &'static str,
    min_args: usize,
    max_args: Option<usize>,
    usage: &'static str,
    help: &'static str,
    handler: Handler,
}

impl AdminCommand {
    fn accepts(&self, count: usize) -> bool {
        count >= self.min_args && !matches!(self.max_args, Some(max) if count > max)
    }
}

const COMMANDS: &[AdminCommand] = &[
    AdminCommand {
        name: "help",
        min_args: 0,
        max_args: Some(1),
        usage: "help [command]",
        help: "Show list of usable commands or command usage.",
        handler: help,
    },
    AdminCommand {
        name: "say",
        min_args: 2,
        max_args: None,
        usage: "say [channel_or_user] [msg]",
        help: "Send a message to a channel or a user.",
        handler: say,
    },
    AdminCommand {
        name: "join",
        min_args: 1,
        max_args: None,
        usage: "join [#channel] [#channel]...",
        help: "Join one or several channels.",
        handler: join,
    },
    AdminCommand {
        name: "part",
        min_args: 1,
        max_args: None,
        usage: "part [#channel] [#channel]...",
        help: "Part one or several channels.",
        handler: part,
    },
    AdminCommand {
        name: "admins",
        min_args: 0,
        max_args: None,
        usage: "admins",
        help: "Show the list of bot admins.",
        handler: admins,
    },
    AdminCommand {
        name: "admin",
        min_args: 1,
        max_args: None,
        usage: "admin [username] [username]...",
        help: "Add one or several bot admins.",
        handler: admin,
    },
    AdminCommand {
        name: "unadmin",
        min_args: 1,
        max_args: None,
        usage: "unadmin [username] [username]...",
        help: "Remove one or several bot admins.",
        handler: unadmin,
    },
    AdminCommand {
        name: "ignores",
        min_args: 0,
        max_args: None,
        usage: "ignores",
        help: "Show the list of ignored users.",
        handler: ignores,
    },
    AdminCommand {
        name: "ignore",
        min_args: 1,
        max_args: None,
        usage: "ignore [username] [username]...",
        help: "Add one or several ignored users.",
        handler: ignore,
    },
    AdminCommand {
        name: "unignore",
        min_args: 1,
        max_args: None,
        usage: "unignore [username] [username]...",
        help: "Remove one or several ignored users.",
        handler: unignore,
    },
];

fn find(name: &str) -> Option<&'static AdminCommand> {
    COMMANDS.iter().find(|c| c.name == name)
}

fn usage_line(bot: &Session, usage: &str) -> String {
    format!("Usage: {}{}", bot.prefix(), usage)
}

fn help(bot: &mut Session, inv: &Invocation) {
    match inv.args.first() {
        None => {
            bot.privmsg(&inv.recipient, "List of available admin commands:");
            for command in COMMANDS {
                bot.privmsg(
                    &inv.recipient,
                    &format!("{} -> {}", command.name, command.help),
                );
            }
            let hint = format!("Use \"{}help [command]\" for command usage.", bot.prefix());
            bot.privmsg(&inv.recipient, &hint);
        }
        Some(name) => match find(name) {
            Some(command) => {
                let usage = usage_line(bot, command.usage);
                bot.privmsg(&inv.recipient, &usage);
                bot.privmsg(&inv.recipient, command.help);
            }
            None => {
                bot.privmsg(
                    &inv.recipient,
                    &format!("Admin command: '{}' doesn't exist.", name),
                );
            }
        },
    }
}

fn say(bot: &mut Session, inv: &Invocation) {
    let (target, words) = match inv.args.split_first() {
        Some(split) => split,
        None => return,
    };
    bot.privmsg(target, &words.join(" "));
}

fn join(bot: &mut Session, inv: &Invocation) {
    for channel in &inv.args {
        bot.join(channel);
    }
}

fn part(bot: &mut Session, inv: &Invocation) {
    for channel in &inv.args {
        bot.part(channel);
    }
}

fn admins(bot: &mut Session, inv: &Invocation) {
    let text = format!("Admins list: {}", bot.admins().join(" "));
    bot.privmsg(&inv.recipient, &text);
}

fn admin(bot: &mut Session, inv: &Invocation) {
    for user in &inv.args {
        bot.add_admin(user);
    }
}

fn unadmin(bot: &mut Session, inv: &Invocation) {
    for user in &inv.args {
        bot.remove_admin(user);
    }
}

fn ignores(bot: &mut Session, inv: &Invocation) {
    let text = format!("Ignore list: {}", bot.ignores().join(" "));
    bot.privmsg(&inv.recipient, &text);
}

fn ignore(bot: &mut Session, inv: &Invocation) {
    for user in &inv.args {
        bot.add_ignore(user);
    }
}

fn unignore(bot: &mut Session, inv: &Invocation) {
    for user in &inv.args {
        bot.remove_ignore(user);
    }
}

/// Administration commands for bot admins.
#[derive(Debug)]
pub struct Admin {
    names: Vec<&'static str>,
}

impl Admin {
    /// Create the plugin with the full command table.
    pub fn new() -> Self {
        Self {
            names: COMMANDS.iter().map(|c| c.name).collect(),
        }
    }
}

impl Default for Admin {
    fn default() -> Self {
        Self::new()
    }
}

impl Plugin for Admin {
    fn name(&self) -> &'static str {
        "Admin"
    }

    fn admin_commands(&self) -> &[&'static str] {
        &self.names
    }

    fn on_admin_command(&mut self, bot: &mut Session, inv: &Invocation) -> PluginResult {
        let command = match find(&inv.token) {
            Some(command) => command,
            None => return Ok(()),
        };
        if command.accepts(inv.args.len()) {
            (command.handler)(bot, inv);
        } else {
            let usage = usage_line(bot, command.usage);
            bot.privmsg(&inv.recipient, &usage);
        }
        Ok(())
    }
}

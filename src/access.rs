//! Ignore list and admin list.
//!
//! [`AccessList`] is consulted once per inbound line, before any routing:
//! a sender on the ignore list is dropped outright. The bot's own nick is
//! always ignored so its own echoed messages cannot trigger it again, and
//! that entry cannot be removed.
//!
//! Admin membership is checked separately, and only for custom commands.

use tracing::debug;

/// Ignore and admin membership for one session.
///
/// Both lists keep insertion order for display and never hold duplicates.
#[derive(Clone, Debug)]
pub struct AccessList {
    own_nick: String,
    ignores: Vec<String>,
    admins: Vec<String>,
}

impl AccessList {
    /// Build the lists, inserting `own_nick` into the ignore list.
    pub fn new<I, A>(own_nick: &str, ignores: I, admins: A) -> Self
    where
        I: IntoIterator<Item = String>,
        A: IntoIterator<Item = String>,
    {
        let mut list = Self {
            own_nick: own_nick.to_string(),
            ignores: Vec::new(),
            admins: Vec::new(),
        };
        for user in ignores {
            list.add_ignore(&user);
        }
        list.add_ignore(own_nick);
        for user in admins {
            list.add_admin(&user);
        }
        list
    }

    /// Whether a line from `sender` should be processed at all.
    #[inline]
    pub fn should_process(&self, sender: &str) -> bool {
        !self.is_ignored(sender)
    }

    /// Whether `user` is on the ignore list.
    pub fn is_ignored(&self, user: &str) -> bool {
        self.ignores.iter().any(|u| u == user)
    }

    /// Whether `user` is a bot admin.
    pub fn is_admin(&self, user: &str) -> bool {
        self.admins.iter().any(|u| u == user)
    }

    /// Ignored users, in insertion order.
    pub fn ignores(&self) -> &[String] {
        &self.ignores
    }

    /// Admins, in insertion order.
    pub fn admins(&self) -> &[String] {
        &self.admins
    }

    /// Add `user` to the ignore list. Returns `false` if already present.
    pub fn add_ignore(&mut self, user: &str) -> bool {
        if user.is_empty() || self.is_ignored(user) {
            return false;
        }
        self.ignores.push(user.to_string());
        true
    }

    /// Remove `user` from the ignore list.
    ///
    /// The bot's own nick is never removed; that call returns `false`.
    pub fn remove_ignore(&mut self, user: &str) -> bool {
        if user == self.own_nick {
            debug!(user, "refusing to unignore own nick");
            return false;
        }
        let before = self.ignores.len();
        self.ignores.retain(|u| u != user);
        self.ignores.len() != before
    }

    /// Add `user` to the admin list. Returns `false` if already present.
    pub fn add_admin(&mut self, user: &str) -> bool {
        if user.is_empty() || self.is_admin(user) {
            return false;
        }
        self.admins.push(user.to_string());
        true
    }

    /// Remove `user` from the admin list. Returns `false` if absent.
    pub fn remove_admin(&mut self, user: &str) -> bool {
        let before = self.admins.len();
        self.admins.retain(|u| u != user);
        self.admins.len() != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list() -> AccessList {
        AccessList::new(
            "WrexBot",
            vec!["ChanServ".to_string()],
            vec!["Shepard".to_string()],
        )
    }

    #[test]
    fn test_self_ignore_inserted() {
        let access = AccessList::new("WrexBot", Vec::new(), Vec::new());
        assert!(access.is_ignored("WrexBot"));
        assert!(!access.should_process("WrexBot"));
    }

    #[test]
    fn test_self_ignore_not_duplicated() {
        let access = AccessList::new("WrexBot", vec!["WrexBot".to_string()], Vec::new());
        assert_eq!(access.ignores(), ["WrexBot".to_string()]);
    }

    #[test]
    fn test_self_ignore_cannot_be_removed() {
        let mut access = list();
        assert!(!access.remove_ignore("WrexBot"));
        assert!(access.is_ignored("WrexBot"));
        assert!(access.remove_ignore("ChanServ"));
        assert!(access.should_process("ChanServ"));
    }

    #[test]
    fn test_admin_membership() {
        let mut access = list();
        assert!(access.is_admin("Shepard"));
        assert!(!access.is_admin("Garrus"));
        assert!(access.add_admin("Garrus"));
        assert!(!access.add_admin("Garrus"));
        assert_eq!(access.admins(), ["Shepard".to_string(), "Garrus".to_string()]);
        assert!(access.remove_admin("Shepard"));
        assert!(!access.remove_admin("Shepard"));
    }

    #[test]
    fn test_ignore_order_preserved() {
        let access = list();
        assert_eq!(
            access.ignores(),
            ["ChanServ".to_string(), "WrexBot".to_string()]
        );
    }
}

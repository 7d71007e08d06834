//! Built-in plugins and the plugin registry.
//!
//! Plugins are looked up by name in a static table and instantiated on
//! load. Loaded plugins are kept in load order, which is also dispatch
//! order.

mod admin;
mod example;
mod shepard;

pub use self::admin::Admin;
pub use self::example::Example;
pub use self::shepard::Shepard;

use tracing::{debug, info};

use crate::error::PluginError;
use crate::plugin::Plugin;

type Constructor = fn() -> Result<Box<dyn Plugin>, PluginError>;

fn admin() -> Result<Box<dyn Plugin>, PluginError> {
    Ok(Box::new(Admin::new()))
}

fn shepard() -> Result<Box<dyn Plugin>, PluginError> {
    Ok(Box::new(Shepard::new()?))
}

fn example() -> Result<Box<dyn Plugin>, PluginError> {
    Ok(Box::new(Example))
}

/// Every plugin that can be loaded by name.
const AVAILABLE: &[(&str, Constructor)] = &[
    ("Admin", admin),
    ("Shepard", shepard),
    ("Example", example),
];

/// Names of all plugins that [`PluginRegistry::load`] knows about.
pub fn available() -> impl Iterator<Item = &'static str> {
    AVAILABLE.iter().map(|(name, _)| *name)
}

/// Ordered set of loaded plugins.
#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Instantiate and append the plugin called `name`.
    ///
    /// Loading a plugin that is already loaded does nothing.
    pub fn load(&mut self, name: &str) -> Result<(), PluginError> {
        if self.is_loaded(name) {
            info!(plugin = name, "Plugin already loaded");
            return Ok(());
        }
        let (_, construct) = AVAILABLE
            .iter()
            .find(|(known, _)| *known == name)
            .ok_or_else(|| PluginError::NotFound(name.to_string()))?;
        self.plugins.push(construct()?);
        info!(plugin = name, "Loaded plugin");
        Ok(())
    }

    /// Append an already-built plugin.
    ///
    /// Returns `false` if a plugin with the same name is already loaded.
    pub fn register(&mut self, plugin: Box<dyn Plugin>) -> bool {
        let name = plugin.name();
        if self.is_loaded(name) {
            info!(plugin = name, "Plugin already loaded");
            return false;
        }
        self.plugins.push(plugin);
        info!(plugin = name, "Registered plugin");
        true
    }

    /// Remove the plugin called `name`. Unknown names are ignored.
    pub fn unload(&mut self, name: &str) -> bool {
        match self.plugins.iter().position(|p| p.name() == name) {
            Some(index) => {
                self.plugins.remove(index);
                info!(plugin = name, "Unloaded plugin");
                true
            }
            None => {
                debug!(plugin = name, "Unload of plugin that is not loaded");
                false
            }
        }
    }

    /// Whether a plugin called `name` is loaded.
    pub fn is_loaded(&self, name: &str) -> bool {
        self.plugins.iter().any(|p| p.name() == name)
    }

    /// Names of the loaded plugins, in dispatch order.
    pub fn list(&self) -> Vec<&'static str> {
        self.plugins.iter().map(|p| p.name()).collect()
    }

    /// Number of loaded plugins.
    pub fn len(&self) -> usize {
        self.plugins.len()
    }

    /// Whether no plugin is loaded.
    pub fn is_empty(&self) -> bool {
        self.plugins.is_empty()
    }

    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Box<dyn Plugin>> {
        self.plugins.iter_mut()
    }
}

impl std::fmt::Debug for PluginRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.list()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_in_order() {
        let mut registry = PluginRegistry::new();
        registry.load("Shepard").unwrap();
        registry.load("Admin").unwrap();
        assert_eq!(registry.list(), vec!["Shepard", "Admin"]);
    }

    #[test]
    fn test_load_is_idempotent() {
        let mut registry = PluginRegistry::new();
        registry.load("Admin").unwrap();
        registry.load("Admin").unwrap();
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_load_unknown() {
        let mut registry = PluginRegistry::new();
        assert_eq!(
            registry.load("Thane"),
            Err(PluginError::NotFound("Thane".to_string()))
        );
        assert!(registry.is_empty());
    }

    #[test]
    fn test_unload() {
        let mut registry = PluginRegistry::new();
        registry.load("Admin").unwrap();
        registry.load("Example").unwrap();

        assert!(registry.unload("Admin"));
        assert!(!registry.unload("Admin"));
        assert!(!registry.unload("Thane"));
        assert_eq!(registry.list(), vec!["Example"]);
    }

    #[test]
    fn test_available_table() {
        let names: Vec<_> = available().collect();
        assert_eq!(names, vec!["Admin", "Shepard", "Example"]);
    }

    #[test]
    fn test_register_rejects_duplicate_name() {
        let mut registry = PluginRegistry::new();
        assert!(registry.register(Box::new(Example)));
        assert!(!registry.register(Box::new(Example)));
        assert_eq!(registry.list(), vec!["Example"]);
    }
}

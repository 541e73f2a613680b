//! Command registry.
//!
//! Commands are looked up in an explicit name-to-function map that is
//! validated when commands are registered, not when they are run. A lookup
//! miss at run time therefore means the user typed a name nobody registered,
//! never that a registration was silently malformed.

use std::collections::BTreeMap;

use crate::common::{CommandFault, RegistryError};
use crate::module::Firmware;

/// A registered command: runs against the firmware module with the
/// module-owned buffer holding the command name.
pub type Command<M> = fn(&mut M, &<M as Firmware>::Buf) -> Result<(), CommandFault>;

/// Name-to-function command table.
#[derive(Debug)]
pub struct CommandRegistry<M: Firmware> {
    commands: BTreeMap<String, Command<M>>,
}

impl<M: Firmware> Default for CommandRegistry<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Firmware> CommandRegistry<M> {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            commands: BTreeMap::new(),
        }
    }

    /// Registers `command` under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::EmptyName`] for a name that is empty after
    /// trimming, and [`RegistryError::Duplicate`] if the name is taken.
    pub fn register(&mut self, name: &str, command: Command<M>) -> Result<(), RegistryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.commands.contains_key(name) {
            return Err(RegistryError::Duplicate(name.to_owned()));
        }
        let _ = self.commands.insert(name.to_owned(), command);
        Ok(())
    }

    /// Looks up a command by exact name.
    pub fn get(&self, name: &str) -> Option<Command<M>> {
        self.commands.get(name).copied()
    }

    /// Registered command names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// Whether no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

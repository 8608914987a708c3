//! Global signal storage resource.
//!
//! A world-wide flag set for cross-system communication where a typed
//! resource would be overkill. The main loop watches the `quit_game` flag set
//! by the quitting-state hook.

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashSet;

/// Presence-only boolean flags; a key being present means "true".
#[derive(Debug, Clone, Default, Resource)]
pub struct WorldSignals {
    flags: FxHashSet<String>,
}

impl WorldSignals {
    /// Mark a flag as present/true.
    pub fn set_flag(&mut self, key: impl Into<String>) {
        self.flags.insert(key.into());
    }

    /// Remove a flag (make it false/absent).
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn clear_flag(&mut self, key: &str) {
        self.flags.remove(key);
    }

    /// Check whether a flag is present/true.
    pub fn has_flag(&self, key: &str) -> bool {
        self.flags.contains(key)
    }
}

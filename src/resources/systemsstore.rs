//! Registry of hook systems looked up by name.
//!
//! In bevy_ecs 0.18, registered systems are stored as entities; the state
//! machine's enter/exit hooks are registered once at startup (and marked
//! [`Persistent`](crate::components::persistent::Persistent) so scene cleanup
//! leaves them alone), then run by name from observers via
//! `Commands::run_system`.

use bevy_ecs::prelude::Resource;
use bevy_ecs::system::SystemId;
use rustc_hash::FxHashMap;

/// Map from hook name to registered system ID.
#[derive(Resource, Default)]
pub struct SystemsStore {
    systems: FxHashMap<&'static str, SystemId>,
}

impl SystemsStore {
    pub fn new() -> Self {
        Self {
            systems: FxHashMap::default(),
        }
    }

    pub fn insert(&mut self, name: &'static str, id: SystemId) {
        self.systems.insert(name, id);
    }

    pub fn get(&self, name: &str) -> Option<&SystemId> {
        self.systems.get(name)
    }
}

//! Debug overlay toggle event and observer.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use log::info;

use crate::resources::debugmode::DebugMode;

/// Fired when the debug-overlay key (F11) is pressed.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Toggles the [`DebugMode`] resource on and off.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug: Option<Res<DebugMode>>,
) {
    if debug.is_some() {
        commands.remove_resource::<DebugMode>();
        info!("Debug overlay off");
    } else {
        commands.insert_resource(DebugMode);
        info!("Debug overlay on");
    }
}

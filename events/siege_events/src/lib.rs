use bevy::prelude::*;

pub struct SiegeEventsPlugin;

impl Plugin for SiegeEventsPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<SiegeWeaponFired>()
            .register_type::<AmmoRestocked>();
    }
}

/// A siege weapon discharged its primary action.
#[derive(Event, Debug, Reflect)]
#[reflect(Default)]
pub struct SiegeWeaponFired {
    pub weapon: Entity,
    pub gunner: Entity,
}

impl Default for SiegeWeaponFired {
    fn default() -> Self {
        Self {
            weapon: Entity::PLACEHOLDER,
            gunner: Entity::PLACEHOLDER,
        }
    }
}

/// Emitted after the feeder moved a stack into the ammo storage (for
/// VFX/audio hooks).
#[derive(Event, Debug, Reflect)]
#[reflect(Default)]
pub struct AmmoRestocked {
    pub weapon: Entity,
    pub stash: Entity,
    pub item_id: String,
    pub amount: u32,
}

impl Default for AmmoRestocked {
    fn default() -> Self {
        Self {
            weapon: Entity::PLACEHOLDER,
            stash: Entity::PLACEHOLDER,
            item_id: String::new(),
            amount: 0,
        }
    }
}

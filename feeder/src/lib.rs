pub mod catalog;
pub mod policy;
pub mod systems;


use {
    bevy::prelude::*,
    siege_components::{
        DestroyOnGroundMissing, GroundWatch, Gunner, Inventory, ItemStack, PrefabId, SiegeWeapon,
    },
    siege_events::SiegeEventsPlugin,
    states::GameState,
};

pub use crate::{
    catalog::PrefabCatalog,
    policy::{OpenRuling, direct_open_ruling},
};

pub struct FeederPlugin;

impl Plugin for FeederPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SiegeEventsPlugin)
            .register_type::<SiegeWeapon>()
            .register_type::<Gunner>()
            .register_type::<PrefabId>()
            .register_type::<Inventory>()
            .register_type::<ItemStack>()
            .register_type::<GroundWatch>()
            .register_type::<DestroyOnGroundMissing>()
            .init_resource::<PrefabCatalog>()
            .add_systems(OnEnter(GameState::Running), systems::attach_existing_weapons)
            .add_systems(OnExit(GameState::Running), systems::remove_all_stashes)
            .add_observer(systems::attach_on_weapon_spawn)
            .add_observer(systems::feed_on_fire);
    }
}

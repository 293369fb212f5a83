use {
    bevy::prelude::*,
    feeder::PrefabCatalog,
    siege_components::{
        AMMO_STORAGE_PREFAB, Gunner, Inventory, ItemStack, PrefabId, SiegeWeapon,
    },
    siege_events::SiegeWeaponFired,
    states::GameState,
};

/// One-frame bootstrap; a real host would gate this on world loading.
pub fn advance_to_running(mut next_state: ResMut<NextState<GameState>>) {
    next_state.set(GameState::Running);
}

/// Spawns the demo battlefield: one crewed catapult with its host-supplied
/// ammo storage.
pub fn spawn_starting_scene(mut commands: Commands, catalog: Res<PrefabCatalog>) {
    let weapon = commands
        .spawn((SiegeWeapon, Name::new("Catapult"), Transform::default()))
        .id();
    // On a real host the ammo storage ships inside the weapon prefab
    catalog.instantiate(&mut commands, AMMO_STORAGE_PREFAB, weapon, Transform::default());

    commands.spawn((Gunner, Name::new("Gunner"), Transform::default()));
    info!("starting scene ready");
}

/// Fires the demo catapult on a timer, keeping a boulder stack in the stash
/// so the feeder always has something to move.
pub fn demo_fire(
    time: Res<Time>,
    mut timer: Local<Option<Timer>>,
    mut commands: Commands,
    weapons: Query<(Entity, &Children), With<SiegeWeapon>>,
    gunners: Query<Entity, With<Gunner>>,
    prefabs: Query<&PrefabId>,
    mut inventories: Query<&mut Inventory>,
) {
    let timer = timer.get_or_insert_with(|| Timer::from_seconds(3.0, TimerMode::Repeating));
    if !timer.tick(time.delta()).just_finished() {
        return;
    }

    let Ok((weapon, children)) = weapons.single() else {
        return;
    };
    let Ok(gunner) = gunners.single() else {
        return;
    };

    if let Some(stash) = feeder::systems::stash_of(children, &prefabs)
        && let Ok(mut inventory) = inventories.get_mut(stash)
        && inventory.0.is_empty()
    {
        inventory.0.push(ItemStack::new("catapult.ammo.boulder", 10));
        trace!("demo stash restocked");
    }

    commands.trigger(SiegeWeaponFired { weapon, gunner });
}

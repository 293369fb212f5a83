use {
    crate::catalog::PrefabCatalog,
    bevy::{ecs::entity::Entities, prelude::*},
    siege_components::{
        AMMO_STORAGE_PREFAB, DestroyOnGroundMissing, GroundWatch, Inventory, PrefabId, STASH_PREFAB,
        SiegeWeapon, STASH_MOUNT_OFFSET, SUPPORTED_AMMO, stash_mount_rotation,
    },
    siege_events::{AmmoRestocked, SiegeWeaponFired},
};

// ============================================================================
// Systems - Lifecycle
// ============================================================================

/// Gives every live siege weapon that lacks a feeder stash one.
///
/// Runs once when the session becomes active; weapons spawned later are
/// covered by [`attach_on_weapon_spawn`]. Both paths funnel into the same
/// idempotent [`ensure_stash`], so their relative order does not matter.
pub fn attach_existing_weapons(
    mut commands: Commands,
    catalog: Res<PrefabCatalog>,
    weapons: Query<(Entity, Option<&Children>), With<SiegeWeapon>>,
    prefabs: Query<&PrefabId>,
) {
    for (weapon, children) in weapons.iter() {
        ensure_stash(&mut commands, &catalog, weapon, children, &prefabs);
    }
}

/// Observer: a siege weapon appeared mid-session, give it a stash.
pub fn attach_on_weapon_spawn(
    trigger: On<Add, SiegeWeapon>,
    mut commands: Commands,
    catalog: Res<PrefabCatalog>,
    weapons: Query<Option<&Children>, With<SiegeWeapon>>,
    prefabs: Query<&PrefabId>,
) {
    let weapon = trigger.event().entity;
    let Ok(children) = weapons.get(weapon) else {
        // Gone again before the observer ran, nothing to attach to
        return;
    };
    ensure_stash(&mut commands, &catalog, weapon, children, &prefabs);
}

/// Despawns the feeder stash of every live weapon when the session ends.
///
/// Without the feeder running, a stash would linger as an inert storage box
/// bolted to the weapon, so teardown removes them all. The weapons themselves
/// are untouched.
pub fn remove_all_stashes(
    mut commands: Commands,
    weapons: Query<&Children, With<SiegeWeapon>>,
    prefabs: Query<&PrefabId>,
) {
    let mut removed = 0;
    for children in weapons.iter() {
        if let Some(stash) = stash_of(children, &prefabs) {
            commands.entity(stash).despawn();
            removed += 1;
        }
    }
    debug!(removed, "feeder stashes torn down");
}

// ============================================================================
// Systems - Transfer
// ============================================================================

/// Observer: on every shot, move the first supported ammo stack from the
/// feeder stash into the weapon's ammo storage.
///
/// Exactly one stack per shot, in storage order — a manual reload cadence,
/// never a bulk refill. Every failure path (dead gunner, no stash, nothing
/// supported, no ammo storage) is a silent no-op.
pub fn feed_on_fire(
    trigger: On<SiegeWeaponFired>,
    mut commands: Commands,
    entities: &Entities,
    weapons: Query<&Children, With<SiegeWeapon>>,
    prefabs: Query<&PrefabId>,
    mut inventories: Query<&mut Inventory>,
) {
    let event = trigger.event();

    // Both participants must still be alive; the weapon check is implicit in
    // the query lookup below.
    if !entities.contains(event.gunner) {
        return;
    }
    let Ok(children) = weapons.get(event.weapon) else {
        return;
    };

    let Some(stash) = stash_of(children, &prefabs) else {
        return;
    };

    // First supported stack, in storage order
    let Ok(stash_inventory) = inventories.get(stash) else {
        return;
    };
    let Some(index) = stash_inventory
        .0
        .iter()
        .position(|stack| SUPPORTED_AMMO.contains(&stack.item_id.as_str()))
    else {
        trace!(weapon = ?event.weapon, "no supported ammo in feeder stash");
        return;
    };

    // Host guarantees at most one ammo storage; take the first found
    let Some(storage) = find_child_by_prefab(children, &prefabs, AMMO_STORAGE_PREFAB) else {
        return;
    };

    let Ok([mut stash_inventory, mut storage_inventory]) =
        inventories.get_many_mut([stash, storage])
    else {
        return;
    };
    let stack = stash_inventory.0.remove(index);
    let (item_id, amount) = (stack.item_id.clone(), stack.amount);
    storage_inventory.0.push(stack);

    debug!(weapon = ?event.weapon, item = %item_id, amount, "restocked ammo storage");
    commands.trigger(AmmoRestocked {
        weapon: event.weapon,
        stash,
        item_id,
        amount,
    });
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Idempotent: returns the weapon's existing stash, or instantiates and
/// mounts a new one.
///
/// A fresh stash is parented at the fixed mount transform and stripped of its
/// free-standing ground behaviors — mounted equipment must not snap to
/// terrain or despawn for lack of support. A host instantiation failure
/// leaves no partial state behind; a later lifecycle trigger retries
/// naturally.
pub fn ensure_stash(
    commands: &mut Commands,
    catalog: &PrefabCatalog,
    weapon: Entity,
    children: Option<&Children>,
    prefabs: &Query<&PrefabId>,
) -> Option<Entity> {
    if let Some(existing) = children.and_then(|c| stash_of(c, prefabs)) {
        return Some(existing);
    }

    let transform =
        Transform::from_translation(STASH_MOUNT_OFFSET).with_rotation(stash_mount_rotation());
    let stash = catalog.instantiate(commands, STASH_PREFAB, weapon, transform)?;
    commands
        .entity(stash)
        .remove::<(GroundWatch, DestroyOnGroundMissing)>();

    info!(?weapon, ?stash, "attached feeder stash");
    Some(stash)
}

/// First child carrying the feeder stash prefab tag, if any.
pub fn stash_of(children: &Children, prefabs: &Query<&PrefabId>) -> Option<Entity> {
    find_child_by_prefab(children, prefabs, STASH_PREFAB)
}

/// Linear scan of direct children, matching by prefab identity tag.
fn find_child_by_prefab(
    children: &Children,
    prefabs: &Query<&PrefabId>,
    prefab: &str,
) -> Option<Entity> {
    children
        .iter()
        .find(|&child| prefabs.get(child).is_ok_and(|id| id.0 == prefab))
}

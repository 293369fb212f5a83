use bevy::prelude::*;

// ============================================================================
// Constants
// ============================================================================

/// Prefab tag of the feeder stash mounted on every siege weapon.
pub const STASH_PREFAB: &str = "small_stash_deployed";

/// Prefab tag of the internal ammo storage that ships with the weapon itself.
pub const AMMO_STORAGE_PREFAB: &str = "catapult.ammo_storage";

/// Item short-names the feeder is allowed to move into the ammo storage.
/// Fixed for the lifetime of the process.
pub const SUPPORTED_AMMO: [&str; 3] = [
    "catapult.ammo.boulder",
    "catapult.ammo.incendiary",
    "catapult.ammo.explosive",
];

/// Where the stash sits relative to its weapon.
pub const STASH_MOUNT_OFFSET: Vec3 = Vec3::new(-1.25, 0.8, 0.1);

/// Fixed mounting rotation of the stash (lying flat against the frame).
pub fn stash_mount_rotation() -> Quat {
    Quat::from_euler(
        EulerRot::XYZ,
        90f32.to_radians(),
        0.0,
        90f32.to_radians(),
    )
}

// ============================================================================
// Components
// ============================================================================

/// Marker: a crewed siege weapon (catapult). The only entity kind the feeder
/// attaches to.
#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct SiegeWeapon;

/// Marker: an actor able to operate a siege weapon.
#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct Gunner;

/// Identity tag of the prefab an entity was instantiated from.
///
/// Child lookups match on this tag, never on structural type alone: a weapon
/// carries both a stash and an ammo storage, and both hold an [`Inventory`].
#[derive(Component, Reflect, Default, Debug, Clone, PartialEq, Eq)]
#[reflect(Component)]
pub struct PrefabId(pub String);

/// Ordered item stacks held by a storage entity.
#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct Inventory(pub Vec<ItemStack>);

/// A quantity of one item type.
#[derive(Reflect, Default, Debug, Clone, PartialEq)]
pub struct ItemStack {
    pub item_id: String,
    pub amount: u32,
}

impl ItemStack {
    pub fn new(item_id: impl Into<String>, amount: u32) -> Self {
        Self {
            item_id: item_id.into(),
            amount,
        }
    }
}

/// Host passive behavior: keeps a deployable glued to the terrain under it.
#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct GroundWatch;

/// Host passive behavior: despawns a deployable once its ground support is
/// gone.
#[derive(Component, Reflect, Default, Debug)]
#[reflect(Component)]
pub struct DestroyOnGroundMissing;

use {bevy::prelude::*, siege_components::*, std::collections::HashSet};

/// Construct-by-identity-tag seam to the host's spawning machinery.
///
/// A tag that is not registered cannot be instantiated; callers get `None`
/// and no entity is left behind. Tests shrink the registry to simulate a
/// host that fails to resolve a prefab.
#[derive(Resource)]
pub struct PrefabCatalog {
    /// Prefab tags the host can resolve.
    pub available: HashSet<String>,
}

impl Default for PrefabCatalog {
    fn default() -> Self {
        let mut available = HashSet::new();
        available.insert(STASH_PREFAB.to_string());
        available.insert(AMMO_STORAGE_PREFAB.to_string());
        Self { available }
    }
}

impl PrefabCatalog {
    /// Instantiates `prefab` as a child of `parent` at the given relative
    /// transform. Returns `None` when the host cannot resolve the tag.
    pub fn instantiate(
        &self,
        commands: &mut Commands,
        prefab: &str,
        parent: Entity,
        transform: Transform,
    ) -> Option<Entity> {
        if !self.available.contains(prefab) {
            warn!(prefab, "prefab not resolvable, skipping instantiation");
            return None;
        }

        let entity = match prefab {
            STASH_PREFAB => commands
                .spawn((
                    Name::new("FeederStash"),
                    PrefabId(STASH_PREFAB.to_string()),
                    Inventory::default(),
                    transform,
                    // Deployable prefabs come with free-standing ground rules
                    GroundWatch,
                    DestroyOnGroundMissing,
                ))
                .id(),
            AMMO_STORAGE_PREFAB => commands
                .spawn((
                    Name::new("AmmoStorage"),
                    PrefabId(AMMO_STORAGE_PREFAB.to_string()),
                    Inventory::default(),
                    transform,
                ))
                .id(),
            _ => return None,
        };

        commands.entity(parent).add_child(entity);
        Some(entity)
    }
}

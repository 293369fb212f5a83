use {bevy::prelude::*, siege_components::SiegeWeapon};

/// Capability answer for a "player opens this container straight from the
/// world" check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OpenRuling {
    /// Direct opening is suppressed; the container is installed equipment and
    /// only reachable through its weapon.
    Suppress,
}

/// Whether opening `container` directly should be overridden.
///
/// Returns [`OpenRuling::Suppress`] when the container is mounted on a siege
/// weapon and `None` (no opinion) otherwise, leaving free-standing containers
/// to whatever policy the interaction arbiter applies next. This function
/// only answers the capability question; the arbiter external to this crate
/// acts on it.
pub fn direct_open_ruling(
    container: Entity,
    parents: &Query<&ChildOf>,
    weapons: &Query<(), With<SiegeWeapon>>,
) -> Option<OpenRuling> {
    let parent = parents.get(container).ok()?.parent();
    weapons.get(parent).ok()?;
    Some(OpenRuling::Suppress)
}

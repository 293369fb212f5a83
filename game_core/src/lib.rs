use {bevy::prelude::*, feeder::FeederPlugin, states::GameState};

mod systems;

pub struct CorePlugin;

impl Plugin for CorePlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameState>()
            .add_plugins(FeederPlugin)
            .add_systems(
                Update,
                systems::advance_to_running.run_if(in_state(GameState::Loading)),
            )
            .add_systems(OnEnter(GameState::Running), systems::spawn_starting_scene)
            .add_systems(
                Update,
                systems::demo_fire.run_if(in_state(GameState::Running)),
            );
    }
}

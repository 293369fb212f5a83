use {
    bevy::{app::ScheduleRunnerPlugin, log::LogPlugin, prelude::*, state::app::StatesPlugin},
    game_core::CorePlugin,
    std::time::Duration,
};

fn main() {
    App::new()
        .add_plugins((
            MinimalPlugins
                .set(ScheduleRunnerPlugin::run_loop(Duration::from_secs_f64(1.0 / 60.0))),
            LogPlugin {
                filter: "info,\
                    feeder=debug,\
                    game_core=debug"
                    .into(),
                level: bevy::log::Level::TRACE,
                ..Default::default()
            },
            StatesPlugin,
        ))
        .add_plugins(CorePlugin)
        .run();
}

pub mod components;
pub mod logging;
pub mod setup;
pub mod status;

use bevy::prelude::*;

use crate::track::TrackSet;

pub struct GameUIPlugin;

impl Plugin for GameUIPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(logging::TerminalLog::new(100))
            .add_message::<logging::TerminalLogEvent>()
            .add_systems(Startup, (setup::setup_ui, logging::setup_terminal_log))
            .add_systems(
                Update,
                (
                    // Consume log events before updating UI text so new lines appear
                    logging::consume_log_events,
                    logging::update_terminal_output.after(logging::consume_log_events),
                    status::update_status_display,
                )
                    .after(TrackSet::Render),
            );
    }
}

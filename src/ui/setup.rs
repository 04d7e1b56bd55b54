use bevy::prelude::*;
use bevy::ui::RelativeCursorPosition;

use crate::ui::components::{StatusDisplay, TerminalOutput, TerminalWindow};

/// Spawn the status line and the terminal panel in the top-left corner
pub fn setup_ui(mut commands: Commands) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                top: Val::Px(8.0),
                left: Val::Px(8.0),
                width: Val::Px(360.0),
                max_height: Val::Percent(60.0),
                flex_direction: FlexDirection::Column,
                padding: UiRect::all(Val::Px(6.0)),
                overflow: Overflow::clip(),
                ..default()
            },
            BackgroundColor(Color::srgba(0.1, 0.1, 0.1, 0.75)),
            TerminalWindow,
            RelativeCursorPosition::default(),
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Track: 0 cells"),
                TextFont {
                    font_size: 14.0,
                    ..default()
                },
                TextColor(Color::srgb(0.9, 0.9, 0.6)),
                StatusDisplay,
            ));
            parent.spawn((
                Text::new("=== Terminal Output ==="),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(Color::WHITE),
                TerminalOutput,
            ));
        });
}

//! Rust Trains - lay track on a grid and run a train along it
//!
//! This library exposes the board, track and train logic for testing and reuse.

use crate::helpers::camera::CameraPlugin;
use crate::input::InputPlugin;
use crate::rendering::{BoardRenderingPlugin, TrackRenderingPlugin, TrainRenderingPlugin};
use crate::track::TrackPlugin;
use crate::train::TrainPlugin;
use crate::ui::GameUIPlugin;
use bevy::app::PluginGroup;
use bevy::prelude::*;

#[cfg(feature = "debug")]
use bevy_inspector_egui::bevy_egui::EguiPlugin;
#[cfg(feature = "debug")]
use bevy_inspector_egui::quick::WorldInspectorPlugin;

pub mod board;
pub mod constants;
pub mod helpers;
pub mod input;
pub mod rendering;
pub mod track;
pub mod train;
pub mod ui;

/// Plugin group for track and train logic (headless-compatible)
/// Use this for tests that don't need rendering or player input
pub struct LogicPlugins;

impl PluginGroup for LogicPlugins {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(TrackPlugin)
            .add(TrainPlugin)
    }
}

/// Plugin group for painting the board (requires graphics/window)
pub struct RenderingPlugins;

impl PluginGroup for RenderingPlugins {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(BoardRenderingPlugin)
            .add(TrackRenderingPlugin)
            .add(TrainRenderingPlugin)
            .add(CameraPlugin)
    }
}

/// Plugin group for player input and UI (requires user interaction)
pub struct InputPlugins;

impl PluginGroup for InputPlugins {
    fn build(self) -> bevy::app::PluginGroupBuilder {
        bevy::app::PluginGroupBuilder::start::<Self>()
            .add(GameUIPlugin)
            .add(InputPlugin)
    }
}

pub fn app() -> App {
    let mut app = App::new();

    app.add_plugins(DefaultPlugins.set(WindowPlugin {
        primary_window: Some(Window {
            title: "Rust Trains".to_string(),
            ..default()
        }),
        ..default()
    }));

    app.add_plugins(LogicPlugins)
        .add_plugins(RenderingPlugins)
        .add_plugins(InputPlugins);

    #[cfg(feature = "debug")]
    app.add_plugins((EguiPlugin::default(), WorldInspectorPlugin::new()));

    app
}

#[cfg(test)]
pub mod test_utils;

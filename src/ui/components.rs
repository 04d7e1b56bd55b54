use bevy::prelude::*;

// UI marker components
#[derive(Component)]
pub struct TerminalWindow;

#[derive(Component)]
pub struct TerminalOutput;

#[derive(Component)]
pub struct StatusDisplay;

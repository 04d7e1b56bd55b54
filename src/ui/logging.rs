use bevy::prelude::*;

use crate::ui::components::TerminalOutput;

/// Bounded history of lines shown in the terminal panel
#[derive(Resource, Default)]
pub struct TerminalLog {
    pub messages: Vec<String>,
    pub max_messages: usize,
}

impl TerminalLog {
    pub fn new(max_messages: usize) -> Self {
        Self {
            messages: Vec::new(),
            max_messages,
        }
    }

    pub fn add_message(&mut self, message: String) {
        self.messages.push(message);
        if self.messages.len() > self.max_messages {
            self.messages.remove(0);
        }
    }
}

/// A line for the terminal panel; also echoed to the log
#[derive(Message, Clone, Debug)]
pub struct TerminalLogEvent {
    pub message: String,
}

pub fn setup_terminal_log(mut writer: MessageWriter<TerminalLogEvent>) {
    for line in [
        "=== Controls ===",
        "Left click: Lay track",
        "Right click: Remove track (click again to keep it)",
        "Enter: Start train on the first cell",
        "Escape: Stop train",
        "WASD: Move camera",
        "Z / X / Mouse wheel: Zoom",
        "================",
    ] {
        writer.write(TerminalLogEvent {
            message: line.to_string(),
        });
    }
}

pub fn consume_log_events(
    mut reader: MessageReader<TerminalLogEvent>,
    mut terminal_log: ResMut<TerminalLog>,
) {
    for ev in reader.read() {
        info!("{}", ev.message);
        terminal_log.add_message(ev.message.clone());
    }
}

pub fn update_terminal_output(
    terminal_log: Res<TerminalLog>,
    mut query: Query<&mut Text, With<TerminalOutput>>,
) {
    if terminal_log.is_changed() {
        for mut text in query.iter_mut() {
            let mut output = "=== Terminal Output ===\n".to_string();
            // Newest lines first
            for message in terminal_log.messages.iter().rev() {
                output.push_str(message);
                output.push('\n');
            }
            text.0 = output;
        }
    }
}

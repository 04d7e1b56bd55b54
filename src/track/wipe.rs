use bevy::prelude::*;
use rand::Rng;

use super::messages::{CellWiped, ReconcileCell};
use crate::board::{BoardConfig, TrackBoard, TrackCell};
use crate::ui::logging::TerminalLogEvent;

/// Component tracking a cell that is being scribbled out before removal
///
/// Each timer period erases one small patch of the cell's footprint. After the
/// configured number of patches the wipe completes and the component is removed.
#[derive(Component, Debug, Clone, Reflect)]
#[reflect(Component)]
pub struct CellWipe {
    timer: Timer,
    total_steps: u32,
    /// Top-left corners of erased patches, relative to the cell origin
    patches: Vec<Vec2>,
}

impl CellWipe {
    pub fn new(config: &BoardConfig) -> Self {
        Self {
            timer: Timer::new(config.wipe_interval, TimerMode::Repeating),
            total_steps: config.wipe_iterations,
            patches: Vec::with_capacity(config.wipe_iterations as usize),
        }
    }

    pub fn steps(&self) -> u32 {
        self.patches.len() as u32
    }

    pub fn patches(&self) -> &[Vec2] {
        &self.patches
    }

    pub fn is_finished(&self) -> bool {
        self.steps() >= self.total_steps
    }

    /// Erase one more patch somewhere inside a cell of the given size
    fn scribble(&mut self, rng: &mut impl Rng, grid_size: f32) {
        let span = grid_size.max(1.0) as u32;
        let offset = Vec2::new(
            rng.random_range(0..span) as f32,
            rng.random_range(0..span) as f32,
        );
        self.patches.push(offset);
    }
}

/// Advance every running wipe by the elapsed time (Logic Layer)
/// Writes `CellWiped` once when the last patch is erased
pub fn advance_cell_wipes(
    mut commands: Commands,
    time: Res<Time>,
    board: Res<TrackBoard>,
    mut wipes: Query<(Entity, &TrackCell, &mut CellWipe)>,
    mut completed: MessageWriter<CellWiped>,
) {
    let grid_size = board.config().grid_size;
    let mut rng = rand::rng();

    for (entity, cell, mut wipe) in wipes.iter_mut() {
        wipe.timer.tick(time.delta());

        for _ in 0..wipe.timer.times_finished_this_tick() {
            if wipe.is_finished() {
                break;
            }
            wipe.scribble(&mut rng, grid_size);
        }

        if wipe.is_finished() {
            completed.write(CellWiped {
                cell: entity,
                position: cell.position(),
            });
            commands.entity(entity).remove::<CellWipe>();
        }
    }
}

/// Take wiped cells off the board and reconcile their former neighbours
pub fn finish_wiped_cells(
    mut commands: Commands,
    mut wiped: MessageReader<CellWiped>,
    mut board: ResMut<TrackBoard>,
    mut reconcile_requests: MessageWriter<ReconcileCell>,
    mut log_events: MessageWriter<TerminalLogEvent>,
) {
    for event in wiped.read() {
        if board.cell_at(event.position) != Some(event.cell) {
            continue;
        }

        let neighbors = board.neighbors_of(event.position);
        board.remove(event.position);
        commands.entity(event.cell).despawn();

        for neighbor in neighbors.all() {
            reconcile_requests.write(ReconcileCell { cell: neighbor });
        }

        log_events.write(TerminalLogEvent {
            message: format!(
                "Removed track at ({}, {})",
                event.position.x, event.position.y
            ),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::CellWipe;
    use crate::board::BoardConfig;

    #[test]
    fn wipe_finishes_after_configured_scribbles() {
        let config = BoardConfig::default();
        let mut wipe = CellWipe::new(&config);
        let mut rng = rand::rng();

        for _ in 0..config.wipe_iterations - 1 {
            wipe.scribble(&mut rng, config.grid_size);
            assert!(!wipe.is_finished());
        }
        wipe.scribble(&mut rng, config.grid_size);
        assert!(wipe.is_finished());
        assert_eq!(wipe.steps(), config.wipe_iterations);
    }

    #[test]
    fn patches_stay_inside_the_cell() {
        let config = BoardConfig::default();
        let mut wipe = CellWipe::new(&config);
        let mut rng = rand::rng();

        for _ in 0..200 {
            wipe.scribble(&mut rng, config.grid_size);
        }
        assert!(wipe.patches().iter().all(|patch| {
            patch.x >= 0.0
                && patch.y >= 0.0
                && patch.x < config.grid_size
                && patch.y < config.grid_size
        }));
    }
}

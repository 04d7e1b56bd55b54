use std::collections::HashSet;
use std::f32::consts::FRAC_PI_2;

use bevy::prelude::*;

use super::board_rendering::TrackPalette;
use crate::board::{NeighborSet, TrackBoard, TrackCell};
use crate::constants::{
    CURVE_SEGMENTS, RAIL_GAUGE, RAIL_WIDTH, SLEEPER_LENGTH, SLEEPER_WIDTH, SLEEPERS_PER_CELL,
    Z_RAIL, Z_SLEEPER, Z_WIPE,
};
use crate::track::{CellWipe, Direction, TrackSet};
use crate::train::reference_corner;

/// Kind of quad making up a painted segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PieceKind {
    Rail,
    Sleeper,
    BufferStop,
}

/// One painted quad in board pixels
/// `size.x` runs along `angle`, measured in board space (y down)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrackPiece {
    pub kind: PieceKind,
    pub centre: Vec2,
    pub size: Vec2,
    pub angle: f32,
}

/// Links a painted quad to the cell it belongs to
#[derive(Component, Debug)]
pub struct TrackVisualFor(pub Entity);

/// An erased patch painted over a cell that is being wiped
#[derive(Component, Debug)]
pub struct WipePatchVisual {
    pub cell: Entity,
}

pub struct TrackRenderingPlugin;

impl Plugin for TrackRenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (
                clear_removed_visuals,
                paint_track_cells,
                paint_wipe_patches,
            )
                .chain()
                .in_set(TrackSet::Render)
                .run_if(resource_exists::<TrackPalette>),
        );
    }
}

/// Quads for a cell's current shape
///
/// Straight segments get a buffer stop on every end that has no neighbour.
pub fn track_pieces(cell: &TrackCell, neighbors: &NeighborSet, grid_size: f32) -> Vec<TrackPiece> {
    let centre = cell.centre(grid_size);
    match cell.direction() {
        Direction::None => Vec::new(),
        Direction::Horizontal => straight_pieces(
            centre,
            0.0,
            !neighbors.has_left(),
            !neighbors.has_right(),
            grid_size,
        ),
        Direction::Vertical => straight_pieces(
            centre,
            FRAC_PI_2,
            !neighbors.has_up(),
            !neighbors.has_down(),
            grid_size,
        ),
        curve => curved_pieces(cell, curve, grid_size),
    }
}

fn straight_pieces(
    centre: Vec2,
    angle: f32,
    cap_start: bool,
    cap_end: bool,
    grid_size: f32,
) -> Vec<TrackPiece> {
    let axis = Vec2::from_angle(angle);
    let normal = axis.perp();
    let mut pieces = Vec::new();

    for side in [-0.5, 0.5] {
        pieces.push(TrackPiece {
            kind: PieceKind::Rail,
            centre: centre + normal * RAIL_GAUGE * side,
            size: Vec2::new(grid_size, RAIL_WIDTH),
            angle,
        });
    }

    let spacing = grid_size / SLEEPERS_PER_CELL as f32;
    for i in 0..SLEEPERS_PER_CELL {
        let along = -grid_size / 2.0 + (i as f32 + 0.5) * spacing;
        pieces.push(TrackPiece {
            kind: PieceKind::Sleeper,
            centre: centre + axis * along,
            size: Vec2::new(SLEEPER_WIDTH, SLEEPER_LENGTH),
            angle,
        });
    }

    let stop_offset = grid_size / 2.0 - SLEEPER_WIDTH;
    for (capped, sign) in [(cap_start, -1.0), (cap_end, 1.0)] {
        if capped {
            pieces.push(TrackPiece {
                kind: PieceKind::BufferStop,
                centre: centre + axis * stop_offset * sign,
                size: Vec2::new(SLEEPER_WIDTH * 1.5, SLEEPER_LENGTH + 4.0),
                angle,
            });
        }
    }

    pieces
}

fn curved_pieces(cell: &TrackCell, curve: Direction, grid_size: f32) -> Vec<TrackPiece> {
    let corner = reference_corner(cell, curve, grid_size);
    // points from the corner into the cell
    let inward = match curve {
        Direction::LeftUp => Vec2::new(1.0, 1.0),
        Direction::LeftDown => Vec2::new(1.0, -1.0),
        Direction::RightUp => Vec2::new(-1.0, 1.0),
        _ => Vec2::new(-1.0, -1.0),
    };
    let half = grid_size / 2.0;
    let point = |radius: f32, theta: f32| corner + Vec2::new(theta.cos(), theta.sin()) * radius * inward;
    let mut pieces = Vec::new();

    for radius in [half - RAIL_GAUGE / 2.0, half + RAIL_GAUGE / 2.0] {
        for k in 0..CURVE_SEGMENTS {
            let start = point(radius, k as f32 * FRAC_PI_2 / CURVE_SEGMENTS as f32);
            let end = point(radius, (k + 1) as f32 * FRAC_PI_2 / CURVE_SEGMENTS as f32);
            let chord = end - start;
            pieces.push(TrackPiece {
                kind: PieceKind::Rail,
                centre: (start + end) / 2.0,
                // overlap neighbouring chords so the rail has no gaps
                size: Vec2::new(chord.length() + RAIL_WIDTH / 2.0, RAIL_WIDTH),
                angle: chord.y.atan2(chord.x),
            });
        }
    }

    for i in 0..SLEEPERS_PER_CELL {
        let theta = (i as f32 + 0.5) * FRAC_PI_2 / SLEEPERS_PER_CELL as f32;
        let radial = Vec2::new(theta.cos(), theta.sin()) * inward;
        pieces.push(TrackPiece {
            kind: PieceKind::Sleeper,
            centre: corner + radial * half,
            size: Vec2::new(SLEEPER_LENGTH, SLEEPER_WIDTH),
            angle: radial.y.atan2(radial.x),
        });
    }

    pieces
}

/// Despawn the visuals of cells and wipes that went away
fn clear_removed_visuals(
    mut commands: Commands,
    mut removed_cells: RemovedComponents<TrackCell>,
    mut removed_wipes: RemovedComponents<CellWipe>,
    visuals: Query<(Entity, &TrackVisualFor)>,
    patches: Query<(Entity, &WipePatchVisual)>,
) {
    let gone: HashSet<Entity> = removed_cells.read().collect();
    let unwiped: HashSet<Entity> = removed_wipes.read().collect();
    if gone.is_empty() && unwiped.is_empty() {
        return;
    }

    for (visual, owner) in visuals.iter() {
        if gone.contains(&owner.0) {
            commands.entity(visual).despawn();
        }
    }
    for (patch, owner) in patches.iter() {
        if gone.contains(&owner.cell) || unwiped.contains(&owner.cell) {
            commands.entity(patch).despawn();
        }
    }
}

/// Repaint every cell touched by a reconcile cascade
fn paint_track_cells(
    mut commands: Commands,
    palette: Res<TrackPalette>,
    board: Res<TrackBoard>,
    changed: Query<(Entity, &TrackCell), Changed<TrackCell>>,
    visuals: Query<(Entity, &TrackVisualFor)>,
) {
    if changed.is_empty() {
        return;
    }

    let repainted: HashSet<Entity> = changed.iter().map(|(entity, _)| entity).collect();
    for (visual, owner) in visuals.iter() {
        if repainted.contains(&owner.0) {
            commands.entity(visual).despawn();
        }
    }

    let grid_size = board.config().grid_size;
    for (entity, cell) in changed.iter() {
        let neighbors = board.neighbors_of(cell.position());
        for piece in track_pieces(cell, &neighbors, grid_size) {
            let (material, z) = match piece.kind {
                PieceKind::Rail => (palette.rail.clone(), Z_RAIL),
                PieceKind::Sleeper => (palette.sleeper.clone(), Z_SLEEPER),
                PieceKind::BufferStop => (palette.buffer_stop.clone(), Z_RAIL + 0.1),
            };

            commands.spawn((
                Mesh2d(palette.quad.clone()),
                MeshMaterial2d(material),
                // board space is y-down, so angles flip sign in world space
                Transform::from_translation(board.board_to_world(piece.centre).extend(z))
                    .with_rotation(Quat::from_rotation_z(-piece.angle))
                    .with_scale(piece.size.extend(1.0)),
                TrackVisualFor(entity),
            ));
        }
    }
}

/// Paint the patches a wipe erased since the last frame
fn paint_wipe_patches(
    mut commands: Commands,
    palette: Res<TrackPalette>,
    board: Res<TrackBoard>,
    wipes: Query<(Entity, &TrackCell, &CellWipe), Changed<CellWipe>>,
    patches: Query<&WipePatchVisual>,
) {
    let patch_size = board.config().wipe_patch_size;

    for (entity, cell, wipe) in wipes.iter() {
        let painted = patches.iter().filter(|patch| patch.cell == entity).count();
        let erased = wipe.patches();

        for offset in erased.iter().skip(painted) {
            let centre = cell.origin() + *offset + Vec2::splat(patch_size / 2.0);
            commands.spawn((
                Mesh2d(palette.quad.clone()),
                MeshMaterial2d(palette.background.clone()),
                Transform::from_translation(board.board_to_world(centre).extend(Z_WIPE))
                    .with_scale(Vec3::new(patch_size, patch_size, 1.0)),
                WipePatchVisual { cell: entity },
            ));
        }
    }
}

use bevy::prelude::*;

use crate::board::TrackBoard;
use crate::constants::{
    BOARD_BACKGROUND, BUFFER_STOP_COLOR, GRID_LINE_COLOR, RAIL_COLOR, SLEEPER_COLOR, Z_GRID,
};

/// Shared mesh and materials for every painted quad
/// All track and wipe visuals are a unit square scaled and rotated into place
#[derive(Resource, Debug, Clone)]
pub struct TrackPalette {
    pub quad: Handle<Mesh>,
    pub background: Handle<ColorMaterial>,
    pub grid_line: Handle<ColorMaterial>,
    pub rail: Handle<ColorMaterial>,
    pub sleeper: Handle<ColorMaterial>,
    pub buffer_stop: Handle<ColorMaterial>,
}

/// Marker for the static board background and grid lines
#[derive(Component)]
pub struct BoardVisual;

const GRID_LINE_WIDTH: f32 = 1.0;

pub struct BoardRenderingPlugin;

impl Plugin for BoardRenderingPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(BOARD_BACKGROUND))
            .add_systems(Startup, (setup_palette, paint_board).chain());
    }
}

fn setup_palette(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
) {
    let mut material = |color: Color| materials.add(ColorMaterial::from_color(color));

    commands.insert_resource(TrackPalette {
        quad: meshes.add(Rectangle::new(1.0, 1.0)),
        background: material(BOARD_BACKGROUND),
        grid_line: material(GRID_LINE_COLOR),
        rail: material(RAIL_COLOR),
        sleeper: material(SLEEPER_COLOR),
        buffer_stop: material(BUFFER_STOP_COLOR),
    });
}

/// Paint the board background and one line per grid boundary
fn paint_board(mut commands: Commands, board: Res<TrackBoard>, palette: Res<TrackPalette>) {
    let config = board.config();
    let size = config.pixel_size();

    commands.spawn((
        Mesh2d(palette.quad.clone()),
        MeshMaterial2d(palette.background.clone()),
        Transform::from_translation(Vec3::new(0.0, 0.0, Z_GRID - 0.1)).with_scale(size.extend(1.0)),
        BoardVisual,
    ));

    for column in 0..=config.columns {
        let x = column as f32 * config.grid_size;
        let centre = board.board_to_world(Vec2::new(x, size.y / 2.0));
        commands.spawn((
            Mesh2d(palette.quad.clone()),
            MeshMaterial2d(palette.grid_line.clone()),
            Transform::from_translation(centre.extend(Z_GRID))
                .with_scale(Vec3::new(GRID_LINE_WIDTH, size.y, 1.0)),
            BoardVisual,
        ));
    }

    for row in 0..=config.rows {
        let y = row as f32 * config.grid_size;
        let centre = board.board_to_world(Vec2::new(size.x / 2.0, y));
        commands.spawn((
            Mesh2d(palette.quad.clone()),
            MeshMaterial2d(palette.grid_line.clone()),
            Transform::from_translation(centre.extend(Z_GRID))
                .with_scale(Vec3::new(size.x, GRID_LINE_WIDTH, 1.0)),
            BoardVisual,
        ));
    }

    info!(
        "Board ready: {}x{} cells of {} px",
        config.columns, config.rows, config.grid_size
    );
}

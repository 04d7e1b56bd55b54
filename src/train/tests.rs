use std::f32::consts::PI;
use std::time::Duration;

use bevy::prelude::*;
use bevy_ecs_tilemap::prelude::TilePos;

use super::{
    HaltReason, MotionError, StartTrain, StopTrain, Train, TrainCoords, TrainHalted, advance,
    reference_corner, travel_sign,
};
use crate::board::{BoardConfig, TrackBoard, TrackCell};
use crate::test_utils::{advance_time, collect_messages, collected, create_test_app, place};
use crate::track::Direction;

const TICK: Duration = Duration::from_millis(50);
const TOLERANCE: f32 = 1e-3;

fn cell_at(x: u32, y: u32, direction: Direction) -> TrackCell {
    TrackCell::new(TilePos { x, y }, 40.0).with_direction(direction)
}

/// Point on the quarter circle of `curve` at `degrees`, in board pixels
fn on_curve(cell: &TrackCell, curve: Direction, flip: Vec2, degrees: f32) -> Vec2 {
    let angle = degrees.to_radians();
    reference_corner(cell, curve, 40.0) + Vec2::new(angle.cos(), angle.sin()) * 20.0 * flip
}

fn assert_close(actual: Vec2, expected: Vec2) {
    assert!(
        actual.distance(expected) < TOLERANCE,
        "expected {expected:?}, got {actual:?}"
    );
}

fn trains(app: &mut App) -> Vec<Train> {
    let mut query = app.world_mut().query::<&Train>();
    query.iter(app.world()).cloned().collect()
}

fn only_train(app: &mut App) -> Train {
    let mut running = trains(app);
    assert_eq!(running.len(), 1, "expected exactly one train");
    running.remove(0)
}

fn start(app: &mut App, at: Option<TilePos>) {
    app.world_mut().write_message(StartTrain { at });
    app.update();
}

#[test]
fn travel_sign_follows_the_direction_of_change() {
    assert_eq!(travel_sign(1.0, 1.0), 0.0);
    assert_eq!(travel_sign(2.0, 1.0), -1.0);
    assert_eq!(travel_sign(1.0, 2.0), 1.0);
}

#[test]
fn vertical_cell_moves_ten_pixels_and_pins_x_to_the_centre() {
    let config = BoardConfig::default();
    let cell = cell_at(1, 1, Direction::Vertical);

    let coords = TrainCoords::new(Vec2::new(55.0, 60.0), Vec2::new(55.0, 50.0));
    let next = advance(&cell, coords, &config).expect("vertical cell");
    assert_eq!(next.current(), Vec2::new(60.0, 70.0));
    assert_eq!(next.previous(), coords.current());

    let after = advance(&cell, next, &config).expect("vertical cell");
    assert_eq!(after.current(), Vec2::new(60.0, 80.0));
}

#[test]
fn vertical_cell_keeps_moving_upwards() {
    let config = BoardConfig::default();
    let cell = cell_at(1, 1, Direction::Vertical);

    let coords = TrainCoords::new(Vec2::new(60.0, 60.0), Vec2::new(60.0, 70.0));
    let next = advance(&cell, coords, &config).expect("vertical cell");
    assert_eq!(next.current(), Vec2::new(60.0, 50.0));
}

#[test]
fn horizontal_cell_moves_along_x_and_pins_y_to_the_centre() {
    let config = BoardConfig::default();
    let cell = cell_at(2, 0, Direction::Horizontal);

    let coords = TrainCoords::new(Vec2::new(100.0, 17.0), Vec2::new(110.0, 17.0));
    let next = advance(&cell, coords, &config).expect("horizontal cell");
    assert_eq!(next.current(), Vec2::new(90.0, 20.0));
    assert_eq!(next.previous(), Vec2::new(100.0, 17.0));
}

#[test]
fn a_train_without_history_stands_still() {
    let config = BoardConfig::default();
    let cell = cell_at(0, 0, Direction::Horizontal);

    let coords = TrainCoords::new(Vec2::new(20.0, 20.0), Vec2::new(20.0, 20.0));
    let next = advance(&cell, coords, &config).expect("horizontal cell");
    assert_eq!(next.current(), Vec2::new(20.0, 20.0));
}

#[test]
fn unresolved_cell_is_a_motion_error() {
    let config = BoardConfig::default();
    let cell = TrackCell::new(TilePos { x: 3, y: 2 }, 40.0);

    let coords = TrainCoords::new(Vec2::new(130.0, 90.0), Vec2::new(130.0, 80.0));
    assert_eq!(
        advance(&cell, coords, &config),
        Err(MotionError::UnresolvedDirection { column: 3, row: 2 })
    );
}

#[test]
fn curve_output_stays_on_the_quarter_circle() {
    let config = BoardConfig::default();
    let samples = [
        (Vec2::new(41.0, 65.0), Vec2::new(40.0, 61.0)),
        (Vec2::new(60.0, 41.0), Vec2::new(60.0, 30.0)),
        (Vec2::new(70.0, 70.0), Vec2::new(65.0, 72.0)),
        (Vec2::new(45.0, 78.0), Vec2::new(45.0, 78.0)),
    ];

    for curve in Direction::CURVES {
        let cell = cell_at(1, 1, curve);
        let corner = reference_corner(&cell, curve, config.grid_size);

        for (current, previous) in samples {
            let mut coords = TrainCoords::new(current, previous);
            for _ in 0..5 {
                coords = advance(&cell, coords, &config).expect("curve cell");
                let radius = coords.current().distance(corner);
                assert!(
                    (radius - config.half_grid()).abs() < TOLERANCE,
                    "{curve:?}: radius {radius}"
                );
            }
        }
    }
}

#[test]
fn reference_corner_matches_the_curve_name() {
    let cell = cell_at(1, 1, Direction::LeftUp);
    assert_eq!(reference_corner(&cell, Direction::LeftUp, 40.0), Vec2::new(40.0, 40.0));
    assert_eq!(reference_corner(&cell, Direction::LeftDown, 40.0), Vec2::new(40.0, 80.0));
    assert_eq!(reference_corner(&cell, Direction::RightUp, 40.0), Vec2::new(80.0, 40.0));
    assert_eq!(reference_corner(&cell, Direction::RightDown, 40.0), Vec2::new(80.0, 80.0));
}

#[test]
fn left_down_curve_keeps_turning_the_same_way() {
    let config = BoardConfig::default();
    let cell = cell_at(1, 1, Direction::LeftDown);
    let flip = Vec2::new(-1.0, -1.0);

    let coords = TrainCoords::new(
        on_curve(&cell, Direction::LeftDown, flip, 100.0),
        on_curve(&cell, Direction::LeftDown, flip, 98.0),
    );
    let next = advance(&cell, coords, &config).expect("curve cell");
    assert_close(next.current(), on_curve(&cell, Direction::LeftDown, flip, 102.0));

    let after = advance(&cell, next, &config).expect("curve cell");
    assert_close(after.current(), on_curve(&cell, Direction::LeftDown, flip, 104.0));

    // and the other way round
    let coords = TrainCoords::new(
        on_curve(&cell, Direction::LeftDown, flip, 100.0),
        on_curve(&cell, Direction::LeftDown, flip, 102.0),
    );
    let next = advance(&cell, coords, &config).expect("curve cell");
    assert_close(next.current(), on_curve(&cell, Direction::LeftDown, flip, 98.0));
}

#[test]
fn left_up_curve_measures_history_in_the_mirrored_frame() {
    let config = BoardConfig::default();
    let cell = cell_at(1, 1, Direction::LeftUp);
    let flip = Vec2::ONE;
    let current = on_curve(&cell, Direction::LeftUp, flip, 30.0);

    // the previous sample is mirrored on x before comparing angles, so both
    // histories step towards the top edge
    for previous_degrees in [28.0, 32.0] {
        let coords = TrainCoords::new(
            current,
            on_curve(&cell, Direction::LeftUp, flip, previous_degrees),
        );
        let next = advance(&cell, coords, &config).expect("curve cell");
        assert_close(next.current(), on_curve(&cell, Direction::LeftUp, flip, 28.0));
    }
}

#[test]
fn curve_step_is_two_degrees() {
    assert!((BoardConfig::default().curve_step - PI / 90.0).abs() < f32::EPSILON);
}

#[test]
fn advance_is_deterministic() {
    let config = BoardConfig::default();
    let coords = TrainCoords::new(Vec2::new(61.0, 44.0), Vec2::new(59.0, 41.0));

    for direction in Direction::ALL.into_iter().skip(1) {
        let cell = cell_at(1, 1, direction);
        assert_eq!(
            advance(&cell, coords, &config),
            advance(&cell, coords, &config)
        );
    }
}

#[test]
fn train_starts_centred_on_the_first_cell() {
    let mut app = create_test_app(4, 5);
    for y in 0..4 {
        place(&mut app, 1, y);
    }
    start(&mut app, None);

    let train = only_train(&mut app);
    assert_eq!(train.coords().current(), Vec2::new(60.0, 20.0));
    assert_eq!(train.coords().previous(), Vec2::new(40.0, -1.0));
    assert_eq!(train.ticks(), 0);
}

#[test]
fn vertical_line_moves_the_train_down_each_tick() {
    let mut app = create_test_app(4, 5);
    for y in 0..4 {
        place(&mut app, 1, y);
    }
    start(&mut app, None);

    advance_time(&mut app, TICK);
    let train = only_train(&mut app);
    assert_eq!(train.coords().current(), Vec2::new(60.0, 30.0));
    assert_eq!(train.coords().previous(), Vec2::new(60.0, 20.0));

    advance_time(&mut app, TICK);
    assert_eq!(only_train(&mut app).coords().current(), Vec2::new(60.0, 40.0));
}

#[test]
fn horizontal_line_moves_the_train_right() {
    let mut app = create_test_app(5, 3);
    for x in 0..3 {
        place(&mut app, x, 1);
    }
    start(&mut app, None);

    advance_time(&mut app, TICK);
    assert_eq!(only_train(&mut app).coords().current(), Vec2::new(30.0, 60.0));
}

#[test]
fn long_frames_replay_every_tick() {
    let mut app = create_test_app(4, 8);
    for y in 0..8 {
        place(&mut app, 1, y);
    }
    start(&mut app, None);

    advance_time(&mut app, TICK * 4);
    let train = only_train(&mut app);
    assert_eq!(train.ticks(), 4);
    assert_eq!(train.coords().current(), Vec2::new(60.0, 60.0));
}

#[test]
fn short_frames_wait_for_a_full_period() {
    let mut app = create_test_app(4, 4);
    place(&mut app, 1, 0);
    place(&mut app, 1, 1);
    start(&mut app, None);

    advance_time(&mut app, Duration::from_millis(30));
    assert_eq!(only_train(&mut app).ticks(), 0);
    advance_time(&mut app, Duration::from_millis(30));
    assert_eq!(only_train(&mut app).ticks(), 1);
}

#[test]
fn stop_train_cancels_the_tick() {
    let mut app = create_test_app(4, 4);
    place(&mut app, 1, 0);
    place(&mut app, 1, 1);
    start(&mut app, None);
    advance_time(&mut app, TICK);

    app.world_mut().write_message(StopTrain);
    app.update();
    assert!(trains(&mut app).is_empty());

    advance_time(&mut app, TICK * 10);
    assert!(trains(&mut app).is_empty());
}

#[test]
fn starting_again_replaces_the_running_train() {
    let mut app = create_test_app(4, 4);
    place(&mut app, 1, 0);
    place(&mut app, 1, 1);
    start(&mut app, None);
    advance_time(&mut app, TICK);

    start(&mut app, Some(TilePos { x: 1, y: 1 }));
    let train = only_train(&mut app);
    assert_eq!(train.coords().current(), Vec2::new(60.0, 60.0));
    assert_eq!(train.ticks(), 0);
}

#[test]
fn starting_on_an_empty_board_does_nothing() {
    let mut app = create_test_app(4, 4);
    start(&mut app, None);
    start(&mut app, Some(TilePos { x: 2, y: 2 }));
    assert!(trains(&mut app).is_empty());
}

#[test]
fn train_halts_when_it_runs_out_of_track() {
    let mut app = create_test_app(4, 4);
    collect_messages::<TrainHalted>(&mut app);
    place(&mut app, 1, 0);
    place(&mut app, 1, 1);
    start(&mut app, None);

    // 20 -> 80 takes six ticks, the seventh finds no cell at row 2
    advance_time(&mut app, TICK * 6);
    assert_eq!(only_train(&mut app).coords().current(), Vec2::new(60.0, 80.0));
    assert!(collected::<TrainHalted>(&app).is_empty());

    advance_time(&mut app, TICK);
    let halts = collected::<TrainHalted>(&app);
    assert_eq!(halts.len(), 1);
    assert_eq!(halts[0].reason, HaltReason::OffTrack { x: 60.0, y: 80.0 });
    assert!(trains(&mut app).is_empty());
}

#[test]
fn unresolved_cell_halts_the_train_immediately() {
    let mut app = create_test_app(4, 4);
    collect_messages::<TrainHalted>(&mut app);

    // a cell that never went through the resolver
    let position = TilePos { x: 1, y: 1 };
    let entity = app.world_mut().spawn(TrackCell::new(position, 40.0)).id();
    app.world_mut()
        .resource_mut::<TrackBoard>()
        .insert(position, entity);

    start(&mut app, Some(position));
    advance_time(&mut app, TICK);

    let halts = collected::<TrainHalted>(&app);
    assert_eq!(halts.len(), 1);
    assert_eq!(
        halts[0].reason,
        HaltReason::Motion(MotionError::UnresolvedDirection { column: 1, row: 1 })
    );
    assert!(trains(&mut app).is_empty());
}

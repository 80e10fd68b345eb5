use grid_snake::config::GridSize;
use grid_snake::game::{DeathReason, GameState};
use grid_snake::input::Direction;
use grid_snake::random::SequenceSource;
use grid_snake::snake::Position;

#[test]
fn stepwise_food_collection_and_wall_collision() {
    let grid = GridSize::new(6).expect("valid grid size");
    let mut state = GameState::new(grid, SequenceSource::new(vec![0.0]));
    state.food = Some(Position::new(4, 3));

    let state = state.step();
    assert!(state.alive);
    assert_eq!(state.score, 1);
    assert_eq!(state.snake.len(), 3);
    assert_eq!(state.snake.head(), Position::new(4, 3));
    // First free cell in row-major order.
    assert_eq!(state.food, Some(Position::new(0, 0)));

    let state = state.request_direction(Direction::Up).step();
    assert!(state.alive);
    assert_eq!(state.snake.head(), Position::new(4, 2));

    let state = state.step().step();
    assert!(state.alive);
    assert_eq!(state.snake.head(), Position::new(4, 0));

    let dead = state.step();
    assert!(!dead.alive);
    assert_eq!(dead.death_reason, Some(DeathReason::WallCollision));
    assert_eq!(dead.direction, Direction::Up);
    assert_eq!(dead.snake, state.snake);
    assert_eq!(dead.score, 1);
}

#[test]
fn replaying_inputs_reproduces_the_game() {
    let grid = GridSize::new(12).expect("valid grid size");
    let script = [
        Some(Direction::Down),
        None,
        Some(Direction::Left),
        None,
        None,
        Some(Direction::Up),
        Some(Direction::Right),
        None,
        None,
        Some(Direction::Down),
    ];

    let play = |seed: u64| {
        let mut state = GameState::new_with_seed(grid, seed);
        let mut trail = Vec::new();
        for _ in 0..6 {
            for request in script {
                if let Some(direction) = request {
                    state = state.request_direction(direction);
                }
                state = state.step();
                trail.push((state.snake.head(), state.food, state.score, state.alive));
            }
        }
        trail
    };

    assert_eq!(play(2024), play(2024));
}

//! Snake state updater: input latching, movement, collision detection.

use super::types::{spawn_food, Direction, Position, SnakeGame, GRID_SIZE};
use rand::Rng;

/// UI-agnostic input actions for Snake.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeInput {
    Up,
    Down,
    Left,
    Right,
    /// Any key with no Snake meaning.
    Other,
}

/// Process player input. Direction changes latch immediately, but a key on
/// the axis already in motion is ignored, which makes a 180-degree reversal
/// impossible within a single tick.
pub fn process_input(game: &mut SnakeGame, input: SnakeInput) {
    if game.game_over {
        return;
    }

    let requested = match input {
        SnakeInput::Up => Direction::Up,
        SnakeInput::Down => Direction::Down,
        SnakeInput::Left => Direction::Left,
        SnakeInput::Right => Direction::Right,
        SnakeInput::Other => return,
    };

    let (dx, dy) = game.direction.map(|d| d.delta()).unwrap_or((0, 0));
    let allowed = if requested.is_vertical() {
        dy == 0
    } else {
        dx == 0
    };
    if allowed {
        game.direction = Some(requested);
    }
}

/// Advance the game by one movement step. Returns true if state changed.
///
/// The snake idles until the first direction key of the run, and a finished
/// run never advances.
pub fn step_snake<R: Rng>(game: &mut SnakeGame, rng: &mut R) -> bool {
    if game.game_over {
        return false;
    }
    let Some(direction) = game.direction else {
        return false;
    };

    game.tick_count += 1;

    let (dx, dy) = direction.delta();
    let head = game.snake[0];
    let new_head = Position {
        x: head.x + dx,
        y: head.y + dy,
    };

    // Wall collision
    if new_head.x < 0 || new_head.x >= GRID_SIZE || new_head.y < 0 || new_head.y >= GRID_SIZE {
        game.game_over = true;
        return true;
    }

    // Self collision. Every segment counts, tail included: the check runs
    // before the tail vacates, so moving into the tail cell ends the run.
    if game.snake.iter().any(|&seg| seg == new_head) {
        game.game_over = true;
        return true;
    }

    game.snake.push_front(new_head);

    if new_head == game.food {
        game.score += 1;
        game.food = spawn_food(&game.snake, rng);
    } else {
        game.snake.pop_back();
    }

    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    fn test_rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_idle_until_first_input() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);
        let before = game.snake.clone();

        let changed = step_snake(&mut game, &mut rng);

        assert!(!changed);
        assert_eq!(game.snake, before);
        assert_eq!(game.score, 0);
    }

    #[test]
    fn test_first_input_starts_movement() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);

        process_input(&mut game, SnakeInput::Right);
        step_snake(&mut game, &mut rng);

        assert_eq!(game.snake[0], Position { x: 11, y: 10 });
        assert_eq!(game.snake.len(), 1);
    }

    #[test]
    fn test_direction_latches_immediately() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);

        process_input(&mut game, SnakeInput::Up);
        assert_eq!(game.direction, Some(Direction::Up));
        // A second key before the tick replaces the first
        process_input(&mut game, SnakeInput::Left);
        assert_eq!(game.direction, Some(Direction::Left));
    }

    #[test]
    fn test_same_axis_key_ignored() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);
        game.direction = Some(Direction::Right);

        // Opposite direction on the same axis is rejected
        process_input(&mut game, SnakeInput::Left);
        assert_eq!(game.direction, Some(Direction::Right));

        // So is the same direction (also horizontal)
        process_input(&mut game, SnakeInput::Right);
        assert_eq!(game.direction, Some(Direction::Right));

        // Cross-axis is accepted
        process_input(&mut game, SnakeInput::Down);
        assert_eq!(game.direction, Some(Direction::Down));

        process_input(&mut game, SnakeInput::Up);
        assert_eq!(game.direction, Some(Direction::Down));
    }

    #[test]
    fn test_wall_collision() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);
        game.snake[0] = Position {
            x: GRID_SIZE - 1,
            y: 10,
        };
        game.direction = Some(Direction::Right);

        step_snake(&mut game, &mut rng);

        assert!(game.game_over);
    }

    #[test]
    fn test_wall_collision_top() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);
        game.snake[0] = Position { x: 5, y: 0 };
        game.direction = Some(Direction::Up);

        step_snake(&mut game, &mut rng);

        assert!(game.game_over);
    }

    #[test]
    fn test_self_collision() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);
        // U-turn body: head at (5,5) moving right into (6,5)
        game.snake.clear();
        game.snake.push_back(Position { x: 5, y: 5 });
        game.snake.push_back(Position { x: 5, y: 4 });
        game.snake.push_back(Position { x: 6, y: 4 });
        game.snake.push_back(Position { x: 6, y: 5 });
        game.direction = Some(Direction::Right);
        game.food = Position { x: 0, y: 0 };

        step_snake(&mut game, &mut rng);

        assert!(game.game_over);
    }

    #[test]
    fn test_moving_into_tail_cell_ends_run() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);
        // Tight loop: head (5,5), body (6,5), (6,6), tail (5,6). Moving down
        // targets the tail cell, which still counts as a collision.
        game.snake.clear();
        game.snake.push_back(Position { x: 5, y: 5 });
        game.snake.push_back(Position { x: 6, y: 5 });
        game.snake.push_back(Position { x: 6, y: 6 });
        game.snake.push_back(Position { x: 5, y: 6 });
        game.direction = Some(Direction::Down);
        game.food = Position { x: 0, y: 0 };

        step_snake(&mut game, &mut rng);

        assert!(game.game_over);
    }

    #[test]
    fn test_eating_grows_and_scores() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);
        game.direction = Some(Direction::Right);
        game.food = Position { x: 11, y: 10 };

        step_snake(&mut game, &mut rng);

        assert_eq!(game.score, 1);
        assert_eq!(game.snake.len(), 2);
        assert_eq!(game.snake[0], Position { x: 11, y: 10 });
        // Replacement food landed on a free cell
        assert!(!game.snake.contains(&game.food));
    }

    #[test]
    fn test_length_constant_without_food() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);
        game.direction = Some(Direction::Right);
        game.food = Position { x: 0, y: 0 };
        let len = game.snake.len();

        step_snake(&mut game, &mut rng);

        assert_eq!(game.snake.len(), len);
    }

    #[test]
    fn test_input_ignored_when_game_over() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);
        game.direction = Some(Direction::Right);
        game.game_over = true;

        process_input(&mut game, SnakeInput::Down);
        assert_eq!(game.direction, Some(Direction::Right));

        let changed = step_snake(&mut game, &mut rng);
        assert!(!changed);
    }

    #[test]
    fn test_no_overlap_and_food_free_over_many_ticks() {
        let mut rng = test_rng();
        let mut game = SnakeGame::new(&mut rng);
        game.direction = Some(Direction::Right);

        // Drive the snake around the edge of the grid for a while and check
        // the invariants after every step.
        for step in 0..500 {
            if game.game_over {
                break;
            }
            // Simple wall-following controller
            let head = game.snake[0];
            match game.direction {
                Some(Direction::Right) if head.x == GRID_SIZE - 1 => {
                    process_input(&mut game, SnakeInput::Down)
                }
                Some(Direction::Down) if head.y == GRID_SIZE - 1 => {
                    process_input(&mut game, SnakeInput::Left)
                }
                Some(Direction::Left) if head.x == 0 => process_input(&mut game, SnakeInput::Up),
                Some(Direction::Up) if head.y == 0 => process_input(&mut game, SnakeInput::Right),
                _ => {}
            }
            step_snake(&mut game, &mut rng);

            if !game.game_over {
                for (i, a) in game.snake.iter().enumerate() {
                    for b in game.snake.iter().skip(i + 1) {
                        assert_ne!(a, b, "segments overlap at step {}", step);
                    }
                }
                assert!(!game.snake.contains(&game.food));
            }
        }
    }
}

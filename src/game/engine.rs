use super::{
    config::GameConfig,
    direction::Direction,
    state::{BonusFood, CollisionType, Flash, FoodKind, GameState, Position, Snake},
};
use rand::Rng;
use std::time::Instant;

/// Information about a tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepInfo {
    /// Which food the snake ate this tick, if any
    pub ate: Option<FoodKind>,
    /// Type of collision if one occurred
    pub collision: Option<CollisionType>,
}

/// Result of a logic tick
#[derive(Debug, Clone, PartialEq)]
pub struct StepResult {
    /// Points earned this tick
    pub points: u32,
    /// Whether the game has ended
    pub terminated: bool,
    /// Additional information about the tick
    pub info: StepInfo,
}

impl StepResult {
    fn terminal(collision: Option<CollisionType>) -> Self {
        Self {
            points: 0,
            terminated: true,
            info: StepInfo {
                ate: None,
                collision,
            },
        }
    }
}

/// The game engine that handles all game logic
pub struct GameEngine {
    config: GameConfig,
    rng: rand::rngs::ThreadRng,
}

impl GameEngine {
    /// Create a new game engine with the given configuration
    pub fn new(config: GameConfig) -> Self {
        Self {
            config,
            rng: rand::thread_rng(),
        }
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Reset the game to its initial state: snake at the grid center heading
    /// right, fresh food, no bonus food, score zero
    pub fn reset(&mut self) -> GameState {
        let center = Position::new(
            (self.config.grid_width / 2) as i32,
            (self.config.grid_height / 2) as i32,
        );
        let snake = Snake::new(center, Direction::Right, self.config.initial_snake_length);
        let food = self.random_cell_avoiding(|pos| snake.occupies(pos));

        GameState::new(snake, food, self.config.grid_width, self.config.grid_height)
    }

    /// Execute one logic tick
    ///
    /// `steer` is the latest unprocessed directional input, applied before
    /// movement unless it reverses the current heading. `now` drives bonus
    /// food expiry and the consumption flash.
    pub fn step(
        &mut self,
        state: &mut GameState,
        steer: Option<Direction>,
        now: Instant,
    ) -> StepResult {
        if !state.is_alive {
            return StepResult::terminal(None);
        }

        // 180-degree reversals are rejected against the live direction
        if let Some(dir) = steer {
            if !state.snake.direction.is_opposite(dir) {
                state.snake.direction = dir;
            }
        }

        let new_head = state.snake.head().moved_in(state.snake.direction);

        if let Some(collision) = self.check_collision(state, new_head) {
            state.is_alive = false;
            return StepResult::terminal(Some(collision));
        }

        // Bonus food takes priority when both occupy the head cell
        let ate = match state.bonus_food {
            Some(bonus) if bonus.pos == new_head => Some(FoodKind::Bonus),
            _ if new_head == state.food => Some(FoodKind::Normal),
            _ => None,
        };

        state.snake.advance(new_head, ate.is_some());

        let points = match ate {
            Some(FoodKind::Bonus) => {
                state.bonus_food = None;
                self.regenerate_food(state, now);
                self.config.bonus_points
            }
            Some(FoodKind::Normal) => {
                self.regenerate_food(state, now);
                self.config.food_points
            }
            None => 0,
        };

        if ate.is_some() {
            state.score += points;
            state.flash = Some(Flash {
                pos: new_head,
                until: now + self.config.flash_duration(),
            });
        }

        // Expiry runs every tick, whether or not anything was eaten
        if let Some(bonus) = state.bonus_food {
            if now.duration_since(bonus.spawned_at) > self.config.bonus_duration() {
                state.bonus_food = None;
            }
        }

        if let Some(flash) = state.flash {
            if !flash.is_visible(now) {
                state.flash = None;
            }
        }

        StepResult {
            points,
            terminated: false,
            info: StepInfo {
                ate,
                collision: None,
            },
        }
    }

    /// Check if the new head position causes a collision
    fn check_collision(&self, state: &GameState, pos: Position) -> Option<CollisionType> {
        if !state.is_in_bounds(pos) {
            return Some(CollisionType::Wall);
        }

        // The head has not moved yet, so the whole body counts; the cell the
        // tail is about to vacate is still lethal this tick
        if state.snake.occupies(pos) {
            return Some(CollisionType::SelfCollision);
        }

        None
    }

    /// Place a fresh normal food, then roll the bonus spawn chance
    fn regenerate_food(&mut self, state: &mut GameState, now: Instant) {
        let bonus_pos = state.bonus_food.map(|b| b.pos);
        let snake = &state.snake;
        let food =
            self.random_cell_avoiding(|pos| snake.occupies(pos) || bonus_pos == Some(pos));
        state.food = food;

        self.maybe_spawn_bonus(state, now);
    }

    /// Roll the fixed spawn chance for a bonus food; only one may exist at a
    /// time, so an active bonus suppresses the roll entirely
    fn maybe_spawn_bonus(&mut self, state: &mut GameState, now: Instant) {
        if state.bonus_food.is_some() || !self.rng.gen_bool(self.config.bonus_chance) {
            return;
        }

        let food = state.food;
        let snake = &state.snake;
        let pos = self.random_cell_avoiding(|pos| snake.occupies(pos) || pos == food);
        state.bonus_food = Some(BonusFood {
            pos,
            spawned_at: now,
        });
    }

    /// Uniformly random grid cell, rejecting and retrying occupied ones
    fn random_cell_avoiding<F: Fn(Position) -> bool>(&mut self, occupied: F) -> Position {
        loop {
            let pos = Position::new(
                self.rng.gen_range(0..self.config.grid_width) as i32,
                self.rng.gen_range(0..self.config.grid_height) as i32,
            );

            if !occupied(pos) {
                return pos;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn engine_with(config: GameConfig) -> GameEngine {
        GameEngine::new(config)
    }

    /// Config with the bonus roll forced off so food tests are deterministic
    fn no_bonus_config() -> GameConfig {
        GameConfig {
            bonus_chance: 0.0,
            ..GameConfig::small()
        }
    }

    #[test]
    fn test_reset() {
        let mut engine = engine_with(GameConfig::default());
        let state = engine.reset();

        assert!(state.is_alive);
        assert_eq!(state.score, 0);
        assert_eq!(state.snake.len(), 1);
        assert_eq!(state.snake.head(), Position::new(10, 10));
        assert!(state.bonus_food.is_none());
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn test_plain_move_keeps_length() {
        // Single-segment snake at (10,10) heading right on a 20x20 grid:
        // one tick with no food in the way leaves exactly [(11,10)]
        let mut engine = engine_with(GameConfig {
            bonus_chance: 0.0,
            ..GameConfig::default()
        });
        let mut state = engine.reset();
        state.food = Position::new(0, 0);

        let result = engine.step(&mut state, None, Instant::now());

        assert!(!result.terminated);
        assert_eq!(result.points, 0);
        assert_eq!(state.snake.body, vec![Position::new(11, 10)]);
    }

    #[test]
    fn test_eat_normal_food() {
        let mut engine = engine_with(no_bonus_config());
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(6, 5),
            10,
            10,
        );

        let result = engine.step(&mut state, None, Instant::now());

        assert_eq!(result.info.ate, Some(FoodKind::Normal));
        assert_eq!(result.points, 1);
        assert_eq!(state.score, 1);
        assert_eq!(state.snake.len(), 4);
        assert_eq!(state.snake.head(), Position::new(6, 5));
        assert!(state.snake.occupies(Position::new(3, 5)));
        // Regenerated food never lands on the snake
        assert!(!state.snake.occupies(state.food));
        assert!(state.flash.is_some());
    }

    #[test]
    fn test_eat_bonus_food() {
        let now = Instant::now();
        let mut engine = engine_with(no_bonus_config());
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(0, 0),
            10,
            10,
        );
        state.bonus_food = Some(BonusFood {
            pos: Position::new(6, 5),
            spawned_at: now,
        });

        let result = engine.step(&mut state, None, now);

        assert_eq!(result.info.ate, Some(FoodKind::Bonus));
        assert_eq!(result.points, 2);
        assert_eq!(state.score, 2);
        assert_eq!(state.snake.len(), 4);
        assert!(state.bonus_food.is_none());
        // Normal food is regenerated on a bonus eat too, off the snake
        assert!(!state.snake.occupies(state.food));
    }

    #[test]
    fn test_bonus_takes_priority_over_normal_food() {
        let now = Instant::now();
        let mut engine = engine_with(no_bonus_config());
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(6, 5),
            10,
            10,
        );
        state.bonus_food = Some(BonusFood {
            pos: Position::new(6, 5),
            spawned_at: now,
        });

        let result = engine.step(&mut state, None, now);

        assert_eq!(result.info.ate, Some(FoodKind::Bonus));
        assert_eq!(result.points, 2);
    }

    #[test]
    fn test_bonus_expiry() {
        let now = Instant::now();
        let mut engine = engine_with(no_bonus_config());
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(0, 0),
            10,
            10,
        );
        state.bonus_food = Some(BonusFood {
            pos: Position::new(8, 8),
            spawned_at: now,
        });

        // Still alive just before the cutoff
        engine.step(&mut state, None, now + Duration::from_millis(4000));
        assert!(state.bonus_food.is_some());

        // Gone once its age exceeds the duration
        engine.step(&mut state, None, now + Duration::from_millis(4001));
        assert!(state.bonus_food.is_none());
    }

    #[test]
    fn test_bonus_spawns_after_food_regeneration() {
        // Force the roll to always succeed
        let mut engine = engine_with(GameConfig {
            bonus_chance: 1.0,
            ..GameConfig::small()
        });
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(6, 5),
            10,
            10,
        );

        engine.step(&mut state, None, Instant::now());

        let bonus = state.bonus_food.expect("bonus should have spawned");
        assert!(!state.snake.occupies(bonus.pos));
        assert_ne!(bonus.pos, state.food);
    }

    #[test]
    fn test_wall_collision() {
        let mut engine = engine_with(no_bonus_config());
        let mut state = GameState::new(
            Snake::new(Position::new(0, 5), Direction::Left, 3),
            Position::new(5, 5),
            10,
            10,
        );

        let result = engine.step(&mut state, None, Instant::now());

        assert!(result.terminated);
        assert!(!state.is_alive);
        assert_eq!(result.info.collision, Some(CollisionType::Wall));
    }

    #[test]
    fn test_self_collision() {
        let mut engine = engine_with(no_bonus_config());

        // Snake at (5,5) going right with length 4, food out of the way.
        // Right, down, left, then up steers the head back into its own body.
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 4);
        let mut state = GameState::new(snake, Position::new(8, 8), 10, 10);
        let now = Instant::now();

        engine.step(&mut state, None, now);
        engine.step(&mut state, Some(Direction::Down), now);
        engine.step(&mut state, Some(Direction::Left), now);
        let result = engine.step(&mut state, Some(Direction::Up), now);

        assert!(result.terminated);
        assert_eq!(result.info.collision, Some(CollisionType::SelfCollision));
    }

    #[test]
    fn test_reversal_rejected() {
        let mut engine = engine_with(no_bonus_config());
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(0, 0),
            10,
            10,
        );

        engine.step(&mut state, Some(Direction::Left), Instant::now());

        assert_eq!(state.snake.direction, Direction::Right);
        assert_eq!(state.snake.head(), Position::new(6, 5));
    }

    #[test]
    fn test_dead_state_is_frozen() {
        let mut engine = engine_with(no_bonus_config());
        let mut state = engine.reset();
        state.is_alive = false;
        let before = state.clone();

        let result = engine.step(&mut state, Some(Direction::Up), Instant::now());

        assert!(result.terminated);
        assert_eq!(state, before);
    }

    #[test]
    fn test_flash_expires() {
        let now = Instant::now();
        let mut engine = engine_with(no_bonus_config());
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(6, 5),
            10,
            10,
        );

        engine.step(&mut state, None, now);
        assert!(state.flash.is_some());

        // Steer away from the regenerated food; flash is gone two ticks later
        state.food = Position::new(0, 0);
        engine.step(&mut state, Some(Direction::Down), now + Duration::from_millis(150));
        assert!(state.flash.is_none());
    }
}

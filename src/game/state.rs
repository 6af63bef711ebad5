use super::direction::Direction;
use std::time::Instant;

/// A position on the game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Move position by delta
    pub fn moved_by(&self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// Move position one cell in a direction
    pub fn moved_in(&self, direction: Direction) -> Self {
        let (dx, dy) = direction.delta();
        self.moved_by(dx, dy)
    }
}

/// The snake, head at index 0, insertion order = body order
#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    pub body: Vec<Position>,
    pub direction: Direction,
}

impl Snake {
    /// Create a new snake with its head at the given position and the rest
    /// of the body trailing behind it
    pub fn new(head: Position, direction: Direction, length: usize) -> Self {
        let (dx, dy) = direction.delta();
        let body = (0..length.max(1) as i32)
            .map(|i| head.moved_by(-dx * i, -dy * i))
            .collect();

        Self { body, direction }
    }

    pub fn head(&self) -> Position {
        self.body[0]
    }

    /// Check if a position overlaps any segment, head included
    pub fn occupies(&self, pos: Position) -> bool {
        self.body.contains(&pos)
    }

    /// Advance to the new head cell; the tail is popped unless the snake is
    /// growing, so a plain move leaves the length unchanged
    pub fn advance(&mut self, new_head: Position, grow: bool) {
        self.body.insert(0, new_head);
        if !grow {
            self.body.pop();
        }
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }
}

/// Type of collision that ended the game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CollisionType {
    /// Snake hit a wall
    Wall,
    /// Snake hit itself
    SelfCollision,
}

/// Which kind of food was eaten on a tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FoodKind {
    Normal,
    Bonus,
}

/// Time-limited food worth extra points; at most one exists at a time
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BonusFood {
    pub pos: Position,
    pub spawned_at: Instant,
}

/// Short-lived highlight the renderer shows where food was just eaten
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Flash {
    pub pos: Position,
    pub until: Instant,
}

impl Flash {
    pub fn is_visible(&self, now: Instant) -> bool {
        now < self.until
    }
}

/// Complete game state, owned by the app and threaded through the engine
/// and renderer
#[derive(Debug, Clone, PartialEq)]
pub struct GameState {
    pub snake: Snake,
    pub food: Position,
    pub bonus_food: Option<BonusFood>,
    pub flash: Option<Flash>,
    pub grid_width: usize,
    pub grid_height: usize,
    pub score: u32,
    pub is_alive: bool,
}

impl GameState {
    pub fn new(snake: Snake, food: Position, grid_width: usize, grid_height: usize) -> Self {
        Self {
            snake,
            food,
            bonus_food: None,
            flash: None,
            grid_width,
            grid_height,
            score: 0,
            is_alive: true,
        }
    }

    /// Check if a position is within the grid bounds
    pub fn is_in_bounds(&self, pos: Position) -> bool {
        pos.x >= 0
            && pos.x < self.grid_width as i32
            && pos.y >= 0
            && pos.y < self.grid_height as i32
    }

    /// Check if a position holds any food, bonus included
    pub fn has_food_at(&self, pos: Position) -> bool {
        pos == self.food || self.bonus_food.map_or(false, |b| b.pos == pos)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn test_position_movement() {
        let pos = Position::new(5, 5);
        assert_eq!(pos.moved_in(Direction::Right), Position::new(6, 5));
        assert_eq!(pos.moved_in(Direction::Left), Position::new(4, 5));
        assert_eq!(pos.moved_in(Direction::Down), Position::new(5, 6));
        assert_eq!(pos.moved_in(Direction::Up), Position::new(5, 4));
    }

    #[test]
    fn test_snake_creation() {
        let snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(5, 5));
        assert_eq!(snake.body[1], Position::new(4, 5));
        assert_eq!(snake.body[2], Position::new(3, 5));
    }

    #[test]
    fn test_single_segment_snake() {
        let snake = Snake::new(Position::new(10, 10), Direction::Right, 1);
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), Position::new(10, 10));
    }

    #[test]
    fn test_advance_without_growth() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.advance(Position::new(6, 5), false);
        assert_eq!(snake.len(), 3);
        assert_eq!(snake.head(), Position::new(6, 5));
        assert!(!snake.occupies(Position::new(3, 5)));
    }

    #[test]
    fn test_advance_with_growth() {
        let mut snake = Snake::new(Position::new(5, 5), Direction::Right, 3);
        snake.advance(Position::new(6, 5), true);
        assert_eq!(snake.len(), 4);
        assert!(snake.occupies(Position::new(3, 5)));
    }

    #[test]
    fn test_bounds_checking() {
        let state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 3),
            Position::new(10, 10),
            20,
            20,
        );

        assert!(state.is_in_bounds(Position::new(0, 0)));
        assert!(state.is_in_bounds(Position::new(19, 19)));
        assert!(!state.is_in_bounds(Position::new(-1, 0)));
        assert!(!state.is_in_bounds(Position::new(20, 0)));
        assert!(!state.is_in_bounds(Position::new(0, 20)));
    }

    #[test]
    fn test_flash_visibility() {
        let now = Instant::now();
        let flash = Flash {
            pos: Position::new(1, 1),
            until: now + Duration::from_millis(100),
        };

        assert!(flash.is_visible(now));
        assert!(flash.is_visible(now + Duration::from_millis(99)));
        assert!(!flash.is_visible(now + Duration::from_millis(100)));
    }

    #[test]
    fn test_has_food_at() {
        let mut state = GameState::new(
            Snake::new(Position::new(5, 5), Direction::Right, 1),
            Position::new(2, 2),
            10,
            10,
        );

        assert!(state.has_food_at(Position::new(2, 2)));
        assert!(!state.has_food_at(Position::new(3, 3)));

        state.bonus_food = Some(BonusFood {
            pos: Position::new(3, 3),
            spawned_at: Instant::now(),
        });
        assert!(state.has_food_at(Position::new(3, 3)));
    }
}

use super::direction::Direction;
use super::food::Food;
use crate::config::SnakeConfig;
use crate::consts;
use crate::location::Location;
use crate::surface::{Rgb, Surface};
use std::time::Duration;

/// One cell-sized unit of the snake's body.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Segment {
    pub(super) loc: Location,
    pub(super) color: Rgb,
}

/// The ordered segment chain.  Index 0 is the head; every other segment
/// trails the one ahead of it by exactly one movement step.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(super) struct Snake {
    pub(super) segments: Vec<Segment>,
    pub(super) direction: Direction,
    /// The direction applied on the last committed step; a requested turn
    /// straight back into it is ignored.
    pub(super) previous_direction: Direction,
    max_segments: usize,
    start_interval: Duration,
    min_interval: Duration,
    interval_step: Duration,
}

impl Snake {
    pub(super) fn new(config: &SnakeConfig) -> Snake {
        let mut snake = Snake {
            segments: Vec::with_capacity(config.max_segments),
            direction: Direction::East,
            previous_direction: Direction::East,
            max_segments: config.max_segments,
            start_interval: Duration::from_millis(config.start_interval_ms),
            min_interval: Duration::from_millis(config.min_interval_ms),
            interval_step: Duration::from_millis(config.interval_step_ms),
        };
        snake.reset();
        snake
    }

    /// Shrink back to a single head segment at the fixed starting cell,
    /// facing east.
    pub(super) fn reset(&mut self) {
        self.segments.clear();
        self.segments.push(Segment {
            loc: consts::SNAKE_START,
            color: consts::HEAD_COLOR,
        });
        self.direction = Direction::East;
        self.previous_direction = Direction::East;
    }

    pub(super) fn head(&self) -> Location {
        self.head_segment().loc
    }

    fn head_segment(&self) -> &Segment {
        self.segments.first().expect("snake always has a head segment")
    }

    pub(super) fn len(&self) -> usize {
        self.segments.len()
    }

    /// Accept `requested` as the direction of the next step unless it would
    /// reverse the snake straight into its own neck.
    pub(super) fn set_direction(&mut self, requested: Direction) {
        if requested != self.previous_direction.reverse() {
            self.direction = requested;
        }
    }

    /// Where the head would land if a step were committed now.
    pub(super) fn peek_next_head(&self) -> Location {
        self.head() + self.direction.delta()
    }

    /// Commit one movement step: each segment takes over the position of
    /// the segment ahead of it, tail first so no segment reads a position
    /// that has already moved, and the head advances by the current
    /// direction.
    pub(super) fn advance(&mut self) {
        for i in (1..self.segments.len()).rev() {
            self.segments[i].loc = self.segments[i - 1].loc;
        }
        let delta = self.direction.delta();
        self.segments[0].loc = self.segments[0].loc + delta;
        self.previous_direction = self.direction;
    }

    /// Whether the head sits on `food`; eating it grows the chain by one
    /// segment.
    pub(super) fn check_food(&mut self, food: &Food) -> bool {
        if self.head() == food.location() {
            self.grow();
            true
        } else {
            false
        }
    }

    /// Append one segment on top of the current tail.  Does nothing once
    /// the chain is at capacity.
    pub(super) fn grow(&mut self) {
        if self.segments.len() >= self.max_segments {
            return;
        }
        let tail = *self.segments.last().expect("snake always has a head segment");
        let color = consts::BODY_COLORS[self.segments.len() % consts::BODY_COLORS.len()];
        self.segments.push(Segment {
            loc: tail.loc,
            color,
        });
    }

    /// Whether moving the head onto `candidate` would bite the body.  The
    /// tail segment is exempt because it vacates its cell on the same step.
    pub(super) fn self_collision_at(&self, candidate: Location) -> bool {
        self.segments
            .iter()
            .take(self.segments.len().saturating_sub(1))
            .skip(1)
            .any(|segment| segment.loc == candidate)
    }

    /// The time between movement steps: shrinks as the snake grows, floored
    /// at the configured minimum.
    pub(super) fn speed_interval(&self) -> Duration {
        let grown = u32::try_from(self.segments.len() - 1).unwrap_or(u32::MAX);
        self.start_interval
            .saturating_sub(self.interval_step.saturating_mul(grown))
            .max(self.min_interval)
    }

    pub(super) fn draw<S: Surface>(&self, board: &super::board::Board, surface: &mut S) {
        for segment in self.segments.iter().skip(1).rev() {
            board.draw_cell(surface, segment.loc, segment.color);
        }
        // head last, so it stays visible when the chain overlaps
        let head = self.head_segment();
        board.draw_cell(surface, head.loc, head.color);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snake() -> Snake {
        Snake::new(&SnakeConfig::default())
    }

    /// Grow by one and step once, so the new tail segment starts trailing.
    fn grow_and_advance(snake: &mut Snake) {
        snake.grow();
        snake.advance();
    }

    #[test]
    fn starts_as_a_single_head_facing_east() {
        let snake = snake();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), consts::SNAKE_START);
        assert_eq!(snake.direction, Direction::East);
        assert_eq!(snake.previous_direction, Direction::East);
    }

    #[test]
    fn peek_is_head_plus_direction() {
        let snake = snake();
        assert_eq!(snake.peek_next_head(), Location::new(11, 10));
    }

    #[test]
    fn peek_does_not_mutate() {
        let snake = snake();
        let before = snake.clone();
        let _ = snake.peek_next_head();
        assert_eq!(snake, before);
    }

    #[test]
    fn reversal_is_ignored() {
        let mut snake = snake();
        snake.set_direction(Direction::West);
        assert_eq!(snake.direction, Direction::East);
    }

    #[test]
    fn perpendicular_turns_are_accepted() {
        let mut snake = snake();
        snake.set_direction(Direction::North);
        assert_eq!(snake.direction, Direction::North);
        snake.set_direction(Direction::South);
        assert_eq!(snake.direction, Direction::South);
    }

    #[test]
    fn reversal_check_uses_the_last_committed_direction() {
        let mut snake = snake();
        snake.set_direction(Direction::North);
        snake.advance();
        // now the committed direction is North, so South is the reversal
        snake.set_direction(Direction::South);
        assert_eq!(snake.direction, Direction::North);
        snake.set_direction(Direction::West);
        assert_eq!(snake.direction, Direction::West);
    }

    #[test]
    fn advance_moves_the_head_by_one_cell() {
        let mut snake = snake();
        snake.advance();
        assert_eq!(snake.head(), Location::new(11, 10));
        snake.set_direction(Direction::South);
        snake.advance();
        assert_eq!(snake.head(), Location::new(11, 11));
    }

    #[test]
    fn segments_trail_the_one_ahead_of_them() {
        let mut snake = snake();
        for _ in 0..3 {
            grow_and_advance(&mut snake);
        }
        let positions: Vec<Location> = snake.segments.iter().map(|s| s.loc).collect();
        let head = snake.head();
        assert_eq!(
            positions,
            vec![
                head,
                Location::new(head.x - 1, head.y),
                Location::new(head.x - 2, head.y),
                Location::new(head.x - 3, head.y),
            ]
        );
        // after another step every segment holds its predecessor's old cell
        let before = positions;
        snake.advance();
        for (i, segment) in snake.segments.iter().enumerate().skip(1) {
            assert_eq!(segment.loc, before[i - 1]);
        }
    }

    #[test]
    fn new_segments_inherit_the_tail_position() {
        let mut snake = snake();
        snake.advance();
        let tail = snake.segments.last().copied().unwrap();
        snake.grow();
        assert_eq!(snake.segments.last().unwrap().loc, tail.loc);
    }

    #[test]
    fn body_colors_rotate_by_index() {
        let mut snake = snake();
        for _ in 0..4 {
            snake.grow();
        }
        let colors: Vec<Rgb> = snake.segments.iter().skip(1).map(|s| s.color).collect();
        assert_eq!(
            colors,
            vec![
                consts::BODY_COLORS[1],
                consts::BODY_COLORS[2],
                consts::BODY_COLORS[0],
                consts::BODY_COLORS[1],
            ]
        );
    }

    #[test]
    fn grow_is_a_no_op_at_capacity() {
        let config = SnakeConfig {
            max_segments: 3,
            ..SnakeConfig::default()
        };
        let mut snake = Snake::new(&config);
        for _ in 0..5 {
            snake.grow();
        }
        assert_eq!(snake.len(), 3);
        snake.grow();
        assert_eq!(snake.len(), 3);
    }

    #[test]
    fn eating_food_grows_the_chain() {
        let mut snake = snake();
        snake.advance();
        let food = Food::at(snake.head());
        assert!(snake.check_food(&food));
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn missing_food_does_not_grow_the_chain() {
        let mut snake = snake();
        let food = Food::at(Location::new(0, 0));
        assert!(!snake.check_food(&food));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn detects_a_bite_into_the_body() {
        // a 5-segment hook: the head is adjacent to the 3rd segment
        let mut snake = snake();
        snake.segments = vec![
            Segment { loc: Location::new(10, 10), color: consts::HEAD_COLOR },
            Segment { loc: Location::new(10, 11), color: consts::BODY_COLORS[1] },
            Segment { loc: Location::new(11, 11), color: consts::BODY_COLORS[2] },
            Segment { loc: Location::new(11, 10), color: consts::BODY_COLORS[0] },
            Segment { loc: Location::new(11, 9), color: consts::BODY_COLORS[1] },
        ];
        let before = snake.clone();
        assert!(snake.self_collision_at(Location::new(11, 10)));
        // the check must not mutate anything
        assert_eq!(snake, before);
    }

    #[test]
    fn the_vacating_tail_is_not_a_collision() {
        let mut snake = snake();
        snake.segments = vec![
            Segment { loc: Location::new(10, 10), color: consts::HEAD_COLOR },
            Segment { loc: Location::new(10, 11), color: consts::BODY_COLORS[1] },
            Segment { loc: Location::new(11, 11), color: consts::BODY_COLORS[2] },
        ];
        assert!(!snake.self_collision_at(Location::new(11, 11)));
        assert!(snake.self_collision_at(Location::new(10, 11)));
    }

    #[test]
    fn a_two_segment_snake_cannot_bite_itself() {
        let mut snake = snake();
        snake.grow();
        assert!(!snake.self_collision_at(snake.segments[1].loc));
    }

    #[test]
    fn speed_interval_shrinks_down_to_the_floor() {
        let mut snake = snake();
        assert_eq!(snake.speed_interval(), Duration::from_millis(200));
        let mut last = snake.speed_interval();
        for _ in 0..20 {
            snake.grow();
            let interval = snake.speed_interval();
            assert!(interval <= last);
            assert!(interval >= Duration::from_millis(60));
            last = interval;
        }
        assert_eq!(last, Duration::from_millis(60));
    }

    #[test]
    fn reset_restores_the_starting_state() {
        let mut snake = snake();
        snake.set_direction(Direction::South);
        for _ in 0..4 {
            grow_and_advance(&mut snake);
        }
        snake.reset();
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.head(), consts::SNAKE_START);
        assert_eq!(snake.direction, Direction::East);
        assert_eq!(snake.previous_direction, Direction::East);
    }
}

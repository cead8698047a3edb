mod board;
mod direction;
mod food;
mod snake;
mod timer;
use self::board::Board;
use self::direction::Direction;
use self::food::Food;
use self::snake::Snake;
use self::timer::MoveTimer;
use crate::banner::GameOverBanner;
use crate::command::Command;
use crate::config::Config;
use crate::consts;
use crate::location::Location;
use crate::surface::Surface;
use crossterm::event::{poll, read, Event};
use rand::Rng;
use std::io;
use std::time::Instant;

/// What the host loop should do after a frame's worth of input.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Flow {
    Continue,
    Quit,
}

/// One playable round: the board, the snake, the food, and the movement
/// clock, advanced once per frame by the host loop.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct Game<R = rand::rngs::ThreadRng> {
    rng: R,
    board: Board,
    snake: Snake,
    food: Food,
    timer: MoveTimer,
    state: GameState,
}

impl Game<rand::rngs::ThreadRng> {
    pub(crate) fn new(config: &Config) -> Game {
        Game::new_with_rng(config, rand::rng())
    }
}

impl<R: Rng> Game<R> {
    pub(crate) fn new_with_rng(config: &Config, mut rng: R) -> Game<R> {
        let board = Board::new(&config.board, consts::SURFACE_WIDTH, consts::SURFACE_HEIGHT);
        let food = Food::at(interior_cell(&mut rng, &board));
        Game {
            rng,
            board,
            snake: Snake::new(&config.snake),
            food,
            timer: MoveTimer::new(),
            state: GameState::Alive,
        }
    }

    /// Collect the events of one frame, then let the clock decide whether a
    /// movement step happens.  Waits at most one frame period.
    pub(crate) fn process_input(&mut self) -> io::Result<Flow> {
        let mut wait = consts::FRAME_PERIOD;
        loop {
            let polled_at = Instant::now();
            if !poll(wait)? {
                break;
            }
            if self.handle_event(read()?) == Some(Flow::Quit) {
                return Ok(Flow::Quit);
            }
            wait = wait.saturating_sub(polled_at.elapsed());
            if wait.is_zero() {
                break;
            }
        }
        self.update();
        Ok(Flow::Continue)
    }

    fn handle_event(&mut self, event: Event) -> Option<Flow> {
        match Command::from_key_event(event.as_key_press_event()?)? {
            Command::Quit | Command::Q => return Some(Flow::Quit),
            Command::Up => self.snake.set_direction(Direction::North),
            Command::Down => self.snake.set_direction(Direction::South),
            Command::Left => self.snake.set_direction(Direction::West),
            Command::Right => self.snake.set_direction(Direction::East),
            Command::R => {
                if self.state == GameState::GameOver {
                    self.reset();
                }
            }
        }
        None
    }

    fn update(&mut self) {
        if self.state != GameState::Alive {
            return;
        }
        if self.timer.should_step(self.snake.speed_interval()) {
            self.advance();
        }
    }

    /// Commit one movement step: validate the next head cell against the
    /// wall and the body before anything moves, then move and feed.
    fn advance(&mut self) {
        if self.state != GameState::Alive {
            return;
        }
        let next = self.snake.peek_next_head();
        if self.board.out_of_bounds(next) || self.snake.self_collision_at(next) {
            self.state = GameState::GameOver;
            return;
        }
        self.snake.advance();
        if self.snake.check_food(&self.food) {
            let cell = interior_cell(&mut self.rng, &self.board);
            self.food.relocate(cell);
        }
    }

    /// Start the round over: one-segment snake, fresh food, fresh clock.
    fn reset(&mut self) {
        self.snake.reset();
        let cell = interior_cell(&mut self.rng, &self.board);
        self.food.relocate(cell);
        self.timer = MoveTimer::new();
        self.state = GameState::Alive;
    }
}

impl<R> Game<R> {
    /// Pure read of the current state, performed every frame whether or not
    /// a movement step fired.
    pub(crate) fn draw<S: Surface>(&self, surface: &mut S) {
        self.board.draw_border(surface, consts::BORDER_COLOR);
        self.snake.draw(&self.board, surface);
        self.food.draw(&self.board, surface);
        if self.state == GameState::GameOver {
            let x = (i32::from(consts::SURFACE_WIDTH) - GameOverBanner::WIDTH) / 2;
            let y = (i32::from(consts::SURFACE_HEIGHT) - GameOverBanner::HEIGHT) / 2;
            GameOverBanner.render(surface, x, y);
        }
    }
}

/// A pseudo-random cell strictly inside the border ring.
fn interior_cell<R: Rng>(rng: &mut R, board: &Board) -> Location {
    Location::new(
        rng.random_range(1..board.width()),
        rng.random_range(1..board.height()),
    )
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum GameState {
    Alive,
    GameOver,
}

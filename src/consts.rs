//! Assorted constants & hard-coded defaults
use crate::location::Location;
use crate::surface::Rgb;
use std::time::Duration;

/// How long `process_input` waits for events before a frame is considered
/// over and the simulation is updated.
pub(crate) const FRAME_PERIOD: Duration = Duration::from_millis(16);

/// Pixel width of the framebuffer the game draws into
pub(crate) const SURFACE_WIDTH: u16 = 128;

/// Pixel height of the framebuffer the game draws into
pub(crate) const SURFACE_HEIGHT: u16 = 112;

/// Default board width in cells
pub(crate) const BOARD_WIDTH: u16 = 30;

/// Default board height in cells
pub(crate) const BOARD_HEIGHT: u16 = 25;

/// Default edge length of one board cell, in pixels
pub(crate) const CELL_SIZE: u16 = 4;

/// Default padding stripped from each side of a drawn cell so that adjacent
/// cells read as separate blocks
pub(crate) const CELL_PADDING: u16 = 1;

/// Default maximum number of segments the snake can grow to
pub(crate) const MAX_SEGMENTS: usize = 100;

/// Default time between movement steps for a one-segment snake
pub(crate) const START_INTERVAL_MS: u64 = 200;

/// Default lower bound on the time between movement steps
pub(crate) const MIN_INTERVAL_MS: u64 = 60;

/// How much faster each added segment makes the snake, by default
pub(crate) const INTERVAL_STEP_MS: u64 = 20;

/// The cell the snake's head starts a round on
pub(crate) const SNAKE_START: Location = Location::new(10, 10);

/// Color of the head segment
pub(crate) const HEAD_COLOR: Rgb = Rgb::new(255, 120, 0);

/// Body colors, banded by segment index modulo 3
pub(crate) const BODY_COLORS: [Rgb; 3] = [
    Rgb::new(0, 153, 0),
    Rgb::new(0, 204, 0),
    Rgb::new(0, 255, 0),
];

/// Color of the food cell
pub(crate) const FOOD_COLOR: Rgb = Rgb::new(255, 0, 0);

/// Color of the board border
pub(crate) const BORDER_COLOR: Rgb = Rgb::new(0, 0, 255);

/// Color of the "game over" banner
pub(crate) const BANNER_COLOR: Rgb = Rgb::new(0, 146, 14);

use crate::consts;
use crate::surface::Surface;

/// The fixed "GAME OVER" glyph, drawn over the board once a round ends.
///
/// Each bitmap cell becomes a `SCALE` × `SCALE` pixel block.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct GameOverBanner;

impl GameOverBanner {
    const SCALE: i32 = 2;
    const COLS: i32 = 34;
    const ROWS: i32 = 5;
    pub(crate) const WIDTH: i32 = Self::COLS * Self::SCALE;
    pub(crate) const HEIGHT: i32 = Self::ROWS * Self::SCALE;

    pub(crate) fn render<S: Surface>(self, surface: &mut S, x: i32, y: i32) {
        for (row, line) in BITMAP.iter().enumerate() {
            for (col, ch) in line.chars().enumerate() {
                if ch == '#' {
                    surface.fill_rect(
                        x + to_i32(col) * Self::SCALE,
                        y + to_i32(row) * Self::SCALE,
                        Self::SCALE,
                        Self::SCALE,
                        consts::BANNER_COLOR,
                    );
                }
            }
        }
    }
}

fn to_i32(index: usize) -> i32 {
    i32::try_from(index).unwrap_or(i32::MAX)
}

#[rustfmt::skip]
static BITMAP: &[&str] = &[
    "###.###.#...#.###..###.#.#.###.##.",
    "#...#.#.##.##.#....#.#.#.#.#...#.#",
    "#.#.###.#.#.#.##...#.#.#.#.##..##.",
    "#.#.#.#.#...#.#....#.#.#.#.#...#.#",
    "###.#.#.#...#.###..###..#..###.#.#",
];

use crate::config::BoardConfig;
use crate::location::Location;
use crate::surface::{Rgb, Surface};

/// The playable coordinate space and its mapping onto the pixel surface.
///
/// Immutable for the lifetime of a session.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Board {
    width: i32,
    height: i32,
    cell_size: i32,
    padding: i32,
    x_offset: i32,
    y_offset: i32,
}

/// A drawable pixel rectangle produced by [`Board::cell_rect`].
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct PixelRect {
    pub(super) x: i32,
    pub(super) y: i32,
    pub(super) width: i32,
    pub(super) height: i32,
}

impl Board {
    /// Lay out a board of `config`'s dimensions centered on a
    /// `surface_width` × `surface_height` pixel surface.
    pub(super) fn new(config: &BoardConfig, surface_width: u16, surface_height: u16) -> Board {
        let width = i32::from(config.width);
        let height = i32::from(config.height);
        let cell_size = i32::from(config.cell_size);
        Board {
            width,
            height,
            cell_size,
            padding: i32::from(config.padding),
            x_offset: (i32::from(surface_width) - cell_size * width) / 2,
            y_offset: (i32::from(surface_height) - cell_size * height) / 2,
        }
    }

    pub(super) fn width(&self) -> i32 {
        self.width
    }

    pub(super) fn height(&self) -> i32 {
        self.height
    }

    /// Whether `loc` is outside the playable space.  Cells at `x == width`
    /// or `y == height` lie past the drawn border but still count as in
    /// bounds.
    pub(super) fn out_of_bounds(&self, loc: Location) -> bool {
        loc.x < 0 || loc.y < 0 || loc.x > self.width || loc.y > self.height
    }

    /// The pixel rectangle cell `loc` is drawn as, with `padding` stripped
    /// from every side.
    pub(super) fn cell_rect(&self, loc: Location) -> PixelRect {
        PixelRect {
            x: self.x_offset + loc.x * self.cell_size + self.padding,
            y: self.y_offset + loc.y * self.cell_size + self.padding,
            width: self.cell_size - 2 * self.padding,
            height: self.cell_size - 2 * self.padding,
        }
    }

    pub(super) fn draw_cell<S: Surface>(&self, surface: &mut S, loc: Location, color: Rgb) {
        let rect = self.cell_rect(loc);
        surface.fill_rect(rect.x, rect.y, rect.width, rect.height, color);
    }

    /// Draw the one-pixel wall just outside the cell grid.
    pub(super) fn draw_border<S: Surface>(&self, surface: &mut S, color: Rgb) {
        surface.hollow_rect(
            self.x_offset - 1,
            self.y_offset - 1,
            self.cell_size * self.width + 2,
            self.cell_size * self.height + 2,
            color,
        );
    }
}

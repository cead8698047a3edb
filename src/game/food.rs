use super::board::Board;
use crate::consts;
use crate::location::Location;
use crate::surface::Surface;

/// The single collectible on the board.  Eating it does not destroy it; the
/// session moves it somewhere else.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) struct Food {
    loc: Location,
}

impl Food {
    pub(super) fn at(loc: Location) -> Food {
        Food { loc }
    }

    pub(super) fn location(&self) -> Location {
        self.loc
    }

    /// Overwrite the location unconditionally.  The caller is responsible
    /// for picking a sensible cell; no occupancy check happens here.
    pub(super) fn relocate(&mut self, loc: Location) {
        self.loc = loc;
    }

    pub(super) fn draw<S: Surface>(&self, board: &Board, surface: &mut S) {
        board.draw_cell(surface, self.loc, consts::FOOD_COLOR);
    }
}

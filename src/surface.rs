use crate::util::center_rect;
use ratatui::{
    buffer::Buffer,
    layout::{Rect, Size},
    style::{Color, Style},
    widgets::Widget,
};

/// A packed RGB color carried by everything that draws.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) struct Rgb {
    pub(crate) r: u8,
    pub(crate) g: u8,
    pub(crate) b: u8,
}

impl Rgb {
    pub(crate) const fn new(r: u8, g: u8, b: u8) -> Rgb {
        Rgb { r, g, b }
    }
}

impl From<Rgb> for Color {
    fn from(c: Rgb) -> Color {
        Color::Rgb(c.r, c.g, c.b)
    }
}

/// The drawing contract consumed by the simulation.  Pixels outside the
/// surface are silently dropped, so callers never need to clip.
pub(crate) trait Surface {
    /// Clear the backing buffer at the start of a frame.
    fn begin_frame(&mut self);

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb);

    /// Fill the `width` × `height` rectangle whose top-left pixel is
    /// `(x, y)`.
    fn fill_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        for yy in y..y + height {
            for xx in x..x + width {
                self.put_pixel(xx, yy, color);
            }
        }
    }

    /// Draw only the one-pixel perimeter of the `width` × `height`
    /// rectangle whose top-left pixel is `(x, y)`.
    fn hollow_rect(&mut self, x: i32, y: i32, width: i32, height: i32, color: Rgb) {
        for xx in x..x + width {
            self.put_pixel(xx, y, color);
            self.put_pixel(xx, y + height - 1, color);
        }
        for yy in y + 1..y + height - 1 {
            self.put_pixel(x, yy, color);
            self.put_pixel(x + width - 1, yy, color);
        }
    }
}

/// An in-memory pixel surface, presented by rendering it as a ratatui
/// widget.  Two vertically adjacent pixels share one terminal cell via the
/// half-block glyphs, so a surface of height `h` occupies `h / 2` rows.
#[derive(Clone, Debug, Eq, PartialEq)]
pub(crate) struct FrameBuffer {
    width: u16,
    height: u16,
    pixels: Vec<Option<Rgb>>,
}

impl FrameBuffer {
    pub(crate) fn new(width: u16, height: u16) -> FrameBuffer {
        FrameBuffer {
            width,
            height,
            pixels: vec![None; usize::from(width) * usize::from(height)],
        }
    }

    pub(crate) fn pixel(&self, x: u16, y: u16) -> Option<Rgb> {
        if x < self.width && y < self.height {
            self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)]
        } else {
            None
        }
    }
}

impl Surface for FrameBuffer {
    fn begin_frame(&mut self) {
        self.pixels.fill(None);
    }

    fn put_pixel(&mut self, x: i32, y: i32, color: Rgb) {
        let (Ok(x), Ok(y)) = (u16::try_from(x), u16::try_from(y)) else {
            return;
        };
        if x < self.width && y < self.height {
            self.pixels[usize::from(y) * usize::from(self.width) + usize::from(x)] = Some(color);
        }
    }
}

impl Widget for &FrameBuffer {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let rows = self.height.div_ceil(2);
        let target = center_rect(
            area,
            Size {
                width: self.width,
                height: rows,
            },
        );
        for row in 0..rows {
            let Some(cell_y) = target.y.checked_add(row) else {
                continue;
            };
            for x in 0..self.width {
                let Some(cell_x) = target.x.checked_add(x) else {
                    continue;
                };
                let top = self.pixel(x, row * 2);
                let bottom = self.pixel(x, row * 2 + 1);
                let Some(cell) = buf.cell_mut((cell_x, cell_y)) else {
                    continue;
                };
                match (top, bottom) {
                    (None, None) => (),
                    (Some(t), None) => {
                        cell.set_char('▀');
                        cell.set_style(Style::new().fg(t.into()));
                    }
                    (None, Some(b)) => {
                        cell.set_char('▄');
                        cell.set_style(Style::new().fg(b.into()));
                    }
                    (Some(t), Some(b)) => {
                        cell.set_char('▀');
                        cell.set_style(Style::new().fg(t.into()).bg(b.into()));
                    }
                }
            }
        }
    }
}

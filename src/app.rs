use crate::config::Config;
use crate::consts;
use crate::game::{Flow, Game};
use crate::surface::{FrameBuffer, Surface};
use ratatui::{backend::Backend, Terminal};
use std::io;

/// The host loop: every frame the game paints the framebuffer, the
/// terminal presents it, and one frame's worth of input is consumed.
#[derive(Clone, Debug)]
pub(crate) struct App {
    game: Game,
    frame: FrameBuffer,
}

impl App {
    pub(crate) fn new(config: &Config) -> App {
        App {
            game: Game::new(config),
            frame: FrameBuffer::new(consts::SURFACE_WIDTH, consts::SURFACE_HEIGHT),
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        loop {
            self.draw(&mut terminal)?;
            if self.game.process_input()? == Flow::Quit {
                return Ok(());
            }
        }
    }

    fn draw<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        self.frame.begin_frame();
        self.game.draw(&mut self.frame);
        terminal.draw(|frame| frame.render_widget(&self.frame, frame.area()))?;
        Ok(())
    }
}

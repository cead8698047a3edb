mod app;
mod banner;
mod command;
mod config;
mod consts;
mod game;
mod location;
mod surface;
mod util;
use crate::app::App;
use crate::config::Config;
use anyhow::Context;
use lexopt::prelude::*;
use std::io::ErrorKind;
use std::path::PathBuf;
use std::process::ExitCode;

static USAGE: &str = "Usage: pixsnake [-c|--config PATH]

Steer with the arrow keys, wasd, or hjkl.  Press r to restart a finished
round and q or ctrl-c to quit.

Options:
  -c, --config PATH   Read configuration from PATH
  -h, --help          Print this message and exit
  -V, --version       Print the program version and exit";

struct Cli {
    config: Option<PathBuf>,
}

impl Cli {
    /// Parse the command line.  `Ok(None)` means an informational flag
    /// already did all the work.
    fn from_env() -> Result<Option<Cli>, lexopt::Error> {
        let mut config = None;
        let mut parser = lexopt::Parser::from_env();
        while let Some(arg) = parser.next()? {
            match arg {
                Short('c') | Long("config") => {
                    config = Some(PathBuf::from(parser.value()?));
                }
                Short('h') | Long("help") => {
                    println!("{USAGE}");
                    return Ok(None);
                }
                Short('V') | Long("version") => {
                    println!("pixsnake {}", env!("CARGO_PKG_VERSION"));
                    return Ok(None);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Some(Cli { config }))
    }
}

fn main() -> ExitCode {
    let cli = match Cli::from_env() {
        Ok(Some(cli)) => cli,
        Ok(None) => return ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pixsnake: {e}");
            eprintln!("{USAGE}");
            return ExitCode::from(2);
        }
    };
    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("pixsnake: {e:#}");
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = match cli.config {
        Some(path) => Config::load(&path, false),
        None => Config::load(&Config::default_path()?, true),
    }
    .context("failed to load configuration")?;
    config.validate()?;
    let terminal = ratatui::init();
    let r = App::new(&config).run(terminal);
    ratatui::restore();
    match r {
        Err(e) if e.kind() == ErrorKind::BrokenPipe => Ok(()),
        r => r.map_err(Into::into),
    }
}

use crate::consts;
use serde::Deserialize;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Program configuration read from a TOML file.  Every field falls back to
/// the defaults in [`crate::consts`], so a missing or partial file is fine.
#[derive(Clone, Copy, Debug, Default, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct Config {
    pub(crate) board: BoardConfig,
    pub(crate) snake: SnakeConfig,
}

impl Config {
    /// Return the default configuration file path
    pub(crate) fn default_path() -> Result<PathBuf, ConfigError> {
        dirs::config_local_dir()
            .map(|p| p.join("pixsnake").join("config.toml"))
            .ok_or(ConfigError::NoPath)
    }

    /// Read configuration from a file on disk.  If the file does not exist
    /// and `allow_missing` is true, a default `Config` value is returned.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the file could not be read or if the file's
    /// contents could not be deserialized.
    pub(crate) fn load(path: &Path, allow_missing: bool) -> Result<Config, ConfigError> {
        let content = match fs_err::read_to_string(path) {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && allow_missing => {
                return Ok(Config::default())
            }
            Err(e) => return Err(ConfigError::Read(e)),
        };
        toml::from_str(&content).map_err(Into::into)
    }

    /// Reject configurations the game cannot sensibly run with.
    pub(crate) fn validate(&self) -> Result<(), ConfigError> {
        let board = &self.board;
        if board.width == 0 || board.height == 0 {
            return Err(ConfigError::Invalid("board dimensions must be nonzero"));
        }
        if board.cell_size == 0 {
            return Err(ConfigError::Invalid("cell size must be nonzero"));
        }
        if board.padding * 2 >= board.cell_size {
            return Err(ConfigError::Invalid(
                "cell padding must leave part of the cell visible",
            ));
        }
        let grid_width = u32::from(board.cell_size) * u32::from(board.width) + 2;
        let grid_height = u32::from(board.cell_size) * u32::from(board.height) + 2;
        if grid_width > u32::from(consts::SURFACE_WIDTH)
            || grid_height > u32::from(consts::SURFACE_HEIGHT)
        {
            return Err(ConfigError::Invalid(
                "board and walls must fit the pixel surface",
            ));
        }
        if consts::SNAKE_START.x >= i32::from(board.width)
            || consts::SNAKE_START.y >= i32::from(board.height)
        {
            return Err(ConfigError::Invalid(
                "board must contain the snake's starting cell",
            ));
        }
        let snake = &self.snake;
        if snake.max_segments == 0 {
            return Err(ConfigError::Invalid("segment capacity must be nonzero"));
        }
        if snake.min_interval_ms > snake.start_interval_ms {
            return Err(ConfigError::Invalid(
                "the speed floor cannot be above the starting interval",
            ));
        }
        Ok(())
    }
}

/// Board geometry, in cells and pixels.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct BoardConfig {
    pub(crate) width: u16,
    pub(crate) height: u16,
    pub(crate) cell_size: u16,
    pub(crate) padding: u16,
}

impl Default for BoardConfig {
    fn default() -> BoardConfig {
        BoardConfig {
            width: consts::BOARD_WIDTH,
            height: consts::BOARD_HEIGHT,
            cell_size: consts::CELL_SIZE,
            padding: consts::CELL_PADDING,
        }
    }
}

/// Segment capacity and the speed curve.
#[derive(Clone, Copy, Debug, Deserialize, Eq, PartialEq)]
#[serde(default, rename_all = "kebab-case")]
pub(crate) struct SnakeConfig {
    pub(crate) max_segments: usize,
    pub(crate) start_interval_ms: u64,
    pub(crate) min_interval_ms: u64,
    pub(crate) interval_step_ms: u64,
}

impl Default for SnakeConfig {
    fn default() -> SnakeConfig {
        SnakeConfig {
            max_segments: consts::MAX_SEGMENTS,
            start_interval_ms: consts::START_INTERVAL_MS,
            min_interval_ms: consts::MIN_INTERVAL_MS,
            interval_step_ms: consts::INTERVAL_STEP_MS,
        }
    }
}

#[derive(Debug, Error)]
pub(crate) enum ConfigError {
    #[error("failed to determine path to local configuration directory")]
    NoPath,
    #[error("failed to read configuration file")]
    Read(#[from] std::io::Error),
    #[error("failed to parse configuration file")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(&'static str),
}

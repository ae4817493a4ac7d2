use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("canvas {width}x{height} cannot hold a cell of diameter {min_extent}")]
    CanvasTooSmall {
        width: f64,
        height: f64,
        min_extent: f64,
    },

    #[error("growth_per_tick must be finite, got {0}")]
    InvalidGrowth(f64),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

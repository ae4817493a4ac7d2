use thiserror::Error;

use cell_core::error::ConfigError;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("window error: {0}")]
    Ui(#[from] eframe::Error),
}

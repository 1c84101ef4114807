//! Error types for the TragerX dashboard

use thiserror::Error;
use tragerx_map::{ConfigError, RenderError};

/// Dashboard error type
#[derive(Error, Debug)]
pub enum DashError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Map error: {0}")]
    Map(#[from] ConfigError),

    #[error("Render error: {0}")]
    Render(#[from] RenderError),

    #[error("Image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Please enter a valid User ID")]
    InvalidUserId,

    #[error("Not connected. Scan the QR code or enter a User ID first")]
    NotConnected,

    #[error(
        "You don't have an active trolley. Please request one from the 'Request Trolley' tab."
    )]
    NoActiveTrolley,

    #[error("Number of bags must be between 1 and 5, got {0}")]
    InvalidBagCount(u32),

    #[error("Trolley {trolley_id} is still on its way ({progress}%)")]
    DispatchInProgress { trolley_id: String, progress: u8 },

    #[error("Unknown trolley: {0}")]
    UnknownTrolley(String),
}

impl From<toml::de::Error> for DashError {
    fn from(e: toml::de::Error) -> Self {
        DashError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DashError>;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Invalid gallery configuration: {0}")]
    InvalidConfiguration(String),

    #[error("Geometry unavailable: viewport width {width} is not laid out")]
    GeometryUnavailable { width: f64 },

    #[error("Pointer down received while a drag session is already open")]
    SessionConflict,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

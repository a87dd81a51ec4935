//! Crate-wide error type
//!
//! Every variant states where things went wrong. Pixel writes outside the
//! canvas are not errors and never show up here.

use std::fmt::{self, Display};

#[derive(Debug)]
pub enum Error {
    /// Configuration rejected before any drawing happened
    InvalidConfig(String),
    /// Reading or writing a config file failed
    Io(std::io::Error),
    /// Config file is not valid JSON for `Config`
    Json(serde_json::Error),
    /// Encoding or writing the PNG failed
    Export(image::ImageError),
    /// Creating or updating the window failed
    Window(String),
}

impl Error {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Error::InvalidConfig(msg.into())
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::InvalidConfig(s) => write!(f, "Invalid configuration: {s}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
            Error::Json(e) => write!(f, "Config parse error: {e}"),
            Error::Export(e) => write!(f, "Export error: {e}"),
            Error::Window(s) => write!(f, "Window error: {s}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            Error::Json(e) => Some(e),
            Error::Export(e) => Some(e),
            Error::InvalidConfig(_) | Error::Window(_) => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Json(e)
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        Error::Export(e)
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Crate-wide error type.
//!
//! Toast operations themselves cannot fail; errors only come from the
//! surrounding surface (configuration files, parsing user-supplied names).

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("I/O Error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Config Error: {0}")]
    Config(String),
    #[error("unknown toast position `{0}`")]
    InvalidPosition(String),
    #[error("unknown theme mode `{0}`")]
    InvalidThemeMode(String),
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::Config(err.to_string())
    }
}

impl From<toml::ser::Error> for Error {
    fn from(err: toml::ser::Error) -> Self {
        Error::Config(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;

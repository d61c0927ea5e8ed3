//! Crate-level error types.

use std::fmt;

use crate::catalog::ShapeKey;

/// Errors produced by the vsepr crate.
#[derive(Debug)]
pub enum VseprError {
    /// No catalog entry exists for the requested domain / lone-pair split.
    UnknownShape(ShapeKey),
    /// A shape key string was not of the form `"{domains}_{lone_pairs}"`.
    InvalidKey(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// Scene serialization failure.
    Serialize(String),
}

impl fmt::Display for VseprError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownShape(key) => {
                write!(f, "no VSEPR shape registered for key {key}")
            }
            Self::InvalidKey(raw) => write!(f, "invalid shape key '{raw}'"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::Serialize(msg) => write!(f, "serialization error: {msg}"),
        }
    }
}

impl std::error::Error for VseprError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for VseprError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for VseprError {
    fn from(e: serde_json::Error) -> Self {
        Self::Serialize(e.to_string())
    }
}

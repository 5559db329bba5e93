use std::io;
use std::path::PathBuf;

use smol_str::SmolStr;
use thiserror::Error;

/// Reasons the source text of an assertion could not be recovered.
///
/// None of these are fatal: callers fall back to a generic message.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("source recovery is disabled")]
    Disabled,
    #[error("failed to read source file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to parse source file {}: {message}", .path.display())]
    Parse { path: PathBuf, message: String },
    #[error("no call expression found at {file}:{line}")]
    CallNotFound { file: SmolStr, line: u32 },
    #[error("call at {file}:{line} has {len} argument(s), position {position} is out of range")]
    ArgumentOutOfRange {
        file: SmolStr,
        line: u32,
        position: usize,
        len: usize,
    },
}

impl SourceError {
    /// Recovery was switched off by configuration rather than failing.
    #[must_use]
    pub const fn is_disabled(&self) -> bool {
        matches!(self, Self::Disabled)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("invalid {name} value '{value}', expected 'on' or 'off'")]
    InvalidSwitch { name: &'static str, value: SmolStr },
}

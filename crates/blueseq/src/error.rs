//! Error type shared by the I/O-facing modules.
//!
//! The distance and reordering code cannot fail; everything that touches a
//! file, a template or the PNG encoder reports through [`Error`].

use std::fmt;
use std::path::PathBuf;

/// Library result alias.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug)]
pub enum Error {
    /// Opening, reading or writing `path` failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// The PNG encoder rejected the image written to `path`.
    Encode {
        path: PathBuf,
        source: png::EncodingError,
    },
    /// A filename template could not be expanded.
    Template { template: String, reason: String },
    /// Raster parameters that cannot produce an image (e.g. size 0).
    InvalidRaster { reason: String },
}

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    pub(crate) fn template(template: &str, reason: impl Into<String>) -> Self {
        Self::Template {
            template: template.to_string(),
            reason: reason.into(),
        }
    }

    /// `io::ErrorKind` of an I/O failure, if this is one.
    pub fn io_kind(&self) -> Option<std::io::ErrorKind> {
        match self {
            Self::Io { source, .. } => Some(source.kind()),
            _ => None,
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => write!(f, "{}: {source}", path.display()),
            Self::Encode { path, source } => {
                write!(f, "encoding png {}: {source}", path.display())
            }
            Self::Template { template, reason } => {
                write!(f, "bad filename template {template:?}: {reason}")
            }
            Self::InvalidRaster { reason } => write!(f, "invalid raster params: {reason}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Encode { source, .. } => Some(source),
            _ => None,
        }
    }
}

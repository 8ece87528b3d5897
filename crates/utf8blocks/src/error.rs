use alloc::collections::TryReserveError;
use core::fmt;
#[cfg(feature = "std")]
use std::path::PathBuf;

use thiserror::Error;

/// Result alias used throughout the crate.
pub type Result<T, E = Error> = core::result::Result<T, E>;

/// Errors produced while building or serializing a
/// [`ByteSequence`](crate::ByteSequence).
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    /// The input file could not be opened.
    #[cfg(feature = "std")]
    #[error("unable to open {}", .path.display())]
    Open {
        /// Path passed to the open call.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// The input file was opened but its contents could not be read.
    #[cfg(feature = "std")]
    #[error("unable to read {}", .path.display())]
    Read {
        /// Path passed to the open call.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },
    /// Reserving storage for units or output bytes failed.
    #[error("allocation failed")]
    Allocation(#[from] TryReserveError),
    /// A unit was asked to hold a number of bytes outside `1..=4`, or fewer
    /// bytes were supplied than requested.
    #[error("invalid unit width {width} ({available} bytes available)")]
    InvalidWidth {
        /// Requested width.
        width: usize,
        /// Number of bytes actually supplied.
        available: usize,
    },
    /// The scan did not end exactly at the end of the input.
    #[error("scan consumed {consumed} of {expected} bytes")]
    ScanMismatch {
        /// Bytes covered by the units that were written.
        consumed: usize,
        /// Length of the input buffer.
        expected: usize,
    },
}

impl Error {
    /// Integer-coded classification of this error.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            #[cfg(feature = "std")]
            Error::Open { .. } | Error::Read { .. } => ErrorKind::OpenFailure,
            Error::Allocation(_) => ErrorKind::AllocationFailure,
            Error::InvalidWidth { .. } => ErrorKind::InvalidWidth,
            Error::ScanMismatch { .. } => ErrorKind::InternalScanMismatch,
        }
    }

    /// Shorthand for `self.kind().code()`.
    #[must_use]
    pub fn code(&self) -> u8 {
        self.kind().code()
    }
}

/// Stable, integer-coded error taxonomy.
///
/// The discriminants are part of the public interface and match the codes
/// returned by [`ErrorKind::code`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum ErrorKind {
    /// No error.
    None = 0,
    /// A file could not be opened or read.
    OpenFailure = 1,
    /// Storage could not be reserved.
    AllocationFailure = 2,
    /// A unit width outside `1..=4` was requested.
    InvalidWidth = 3,
    /// A scan stopped short of (or ran past) the end of its input.
    InternalScanMismatch = 4,
}

impl ErrorKind {
    /// The integer code of this kind.
    #[must_use]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Looks up the kind for an integer code.
    #[must_use]
    pub const fn from_code(code: u8) -> Option<Self> {
        Some(match code {
            0 => ErrorKind::None,
            1 => ErrorKind::OpenFailure,
            2 => ErrorKind::AllocationFailure,
            3 => ErrorKind::InvalidWidth,
            4 => ErrorKind::InternalScanMismatch,
            _ => return None,
        })
    }

    /// Code for a result: `None` on success, the error's kind otherwise.
    #[must_use]
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => ErrorKind::None,
            Err(err) => err.kind(),
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ErrorKind::None => "no error",
            ErrorKind::OpenFailure => "open failure",
            ErrorKind::AllocationFailure => "allocation failure",
            ErrorKind::InvalidWidth => "invalid width",
            ErrorKind::InternalScanMismatch => "internal scan mismatch",
        })
    }
}

impl From<&Error> for ErrorKind {
    fn from(err: &Error) -> Self {
        err.kind()
    }
}

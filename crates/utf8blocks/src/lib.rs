//! Segmentation of UTF-8 byte buffers into fixed-capacity character blocks.
//!
//! A [`ByteSequence`] is built by walking a byte buffer once and cutting it
//! into [`CharUnit`]s. Each unit stores the 1–4 raw bytes of one character
//! inline, tagged with its width. The width is decided from the leading byte
//! alone (see [`leading_width`]); continuation bytes are copied as they are
//! and never validated.
//!
//! ```rust
//! use utf8blocks::ByteSequence;
//!
//! let seq = ByteSequence::from_bytes("A∮B".as_bytes()).unwrap();
//! assert_eq!(seq.len(), 3);
//! let widths: Vec<u8> = seq.iter().map(|unit| unit.width()).collect();
//! assert_eq!(widths, [1, 3, 1]);
//! assert_eq!(seq.to_bytes(), "A∮B".as_bytes());
//! ```

#![cfg_attr(not(feature = "std"), no_std)]
extern crate alloc;

mod classify;
mod error;
#[cfg(feature = "std")]
mod file;
mod options;
mod sequence;
mod unit;


pub use classify::{MAX_WIDTH, is_ascii_lead, leading_width};
pub use error::{Error, ErrorKind, Result};
#[cfg(feature = "std")]
pub use file::Utf8File;
pub use options::DecodeOptions;
pub use sequence::{ByteSequence, Units};
pub use unit::CharUnit;

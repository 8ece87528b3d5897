//! Building a [`ByteSequence`] from a byte buffer and writing it back out.
//!
//! Population is a single forward pass over the input:
//! - storage for `input.len()` units is reserved up front, the worst case of
//!   one unit per byte, so the scan never reallocates;
//! - the leading byte under the cursor is classified, that many bytes are
//!   copied into a [`CharUnit`], and the cursor moves past them;
//! - the pass ends at the end of the buffer, at a zero byte when
//!   [`DecodeOptions::stop_at_nul`] is set, or in front of a final character
//!   that the buffer cuts short.
//!
//! A pass that ends anywhere but the end of the buffer reports
//! [`Error::ScanMismatch`]. The units written up to that point are kept.

use alloc::vec::Vec;
use core::{fmt, ops::Index, slice};

use bstr::ByteSlice;

use crate::{
    classify::leading_width,
    error::{Error, Result},
    options::DecodeOptions,
    unit::CharUnit,
};

/// An ordered run of [`CharUnit`]s decoded from one byte buffer.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ByteSequence {
    units: Vec<CharUnit>,
    /// Length of the buffer the units were decoded from.
    byte_size: usize,
}

/// Iterator over the units of a [`ByteSequence`].
pub type Units<'a> = slice::Iter<'a, CharUnit>;

impl ByteSequence {
    /// An empty sequence with no storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            units: Vec::new(),
            byte_size: 0,
        }
    }

    /// Decodes `data` with the default [`DecodeOptions`].
    ///
    /// # Errors
    ///
    /// See [`ByteSequence::populate`]. Use `populate` directly to keep the
    /// partially decoded units of a mismatched scan.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Self::from_bytes_with(data, DecodeOptions::default())
    }

    /// Decodes `data` with the given options.
    ///
    /// # Errors
    ///
    /// See [`ByteSequence::populate`].
    pub fn from_bytes_with(data: &[u8], options: DecodeOptions) -> Result<Self> {
        let mut seq = Self::new();
        seq.populate(data, options)?;
        Ok(seq)
    }

    /// Replaces the contents of the sequence with the units decoded from
    /// `data`.
    ///
    /// # Errors
    ///
    /// - [`Error::Allocation`] when storage for `data.len()` units cannot be
    ///   reserved. The sequence is left empty.
    /// - [`Error::ScanMismatch`] when the scan stops before the end of `data`,
    ///   at a zero byte or at a truncated final character. The units decoded
    ///   before that point stay in the sequence.
    pub fn populate(&mut self, data: &[u8], options: DecodeOptions) -> Result<()> {
        self.clear();
        self.units.try_reserve_exact(data.len())?;
        self.byte_size = data.len();

        let mut cursor = 0;
        while let Some(&lead) = data.get(cursor) {
            if lead == 0 && options.stop_at_nul {
                break;
            }
            let width = usize::from(leading_width(lead));
            let Ok(unit) = CharUnit::with_width(&data[cursor..], width) else {
                break;
            };
            self.units.push(unit);
            cursor += width;
        }
        debug_assert_eq!(cursor, self.consumed_bytes());
        debug_assert!(self.units.len() <= self.byte_size);

        if options.shrink_to_fit {
            self.units.shrink_to_fit();
        }

        if cursor != data.len() {
            return Err(Error::ScanMismatch {
                consumed: cursor,
                expected: data.len(),
            });
        }
        Ok(())
    }

    /// Number of units (characters, not bytes).
    #[must_use]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Whether the sequence holds no units.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Length of the buffer the sequence was last populated from.
    #[must_use]
    pub fn byte_size(&self) -> usize {
        self.byte_size
    }

    /// Number of units the backing storage can hold without reallocating.
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.units.capacity()
    }

    /// Sum of the widths of all units.
    #[must_use]
    pub fn consumed_bytes(&self) -> usize {
        self.units.iter().map(CharUnit::len).sum()
    }

    /// The units in document order.
    #[must_use]
    pub fn units(&self) -> &[CharUnit] {
        &self.units
    }

    /// The unit at `index`, if any.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&CharUnit> {
        self.units.get(index)
    }

    /// Iterates over the units in document order.
    pub fn iter(&self) -> Units<'_> {
        self.units.iter()
    }

    /// Writes the bytes of every unit to `out`, in order and without
    /// separators.
    ///
    /// # Errors
    ///
    /// Any error returned by `out`.
    #[cfg(feature = "std")]
    pub fn write_to<W: std::io::Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        for unit in &self.units {
            out.write_all(unit.as_bytes())?;
        }
        Ok(())
    }

    /// The concatenated bytes of every unit.
    #[must_use]
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.consumed_bytes());
        self.extend_bytes(&mut out);
        out
    }

    /// The concatenated bytes of every unit followed by a single zero byte,
    /// for consumers that expect C strings.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] when the buffer cannot be reserved.
    pub fn to_c_string(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.try_reserve_exact(self.consumed_bytes() + 1)?;
        self.extend_bytes(&mut out);
        out.push(0);
        Ok(out)
    }

    fn extend_bytes(&self, out: &mut Vec<u8>) {
        for unit in &self.units {
            out.extend_from_slice(unit.as_bytes());
        }
    }

    /// Releases every unit and the backing storage. Calling it on an empty
    /// sequence does nothing.
    pub fn clear(&mut self) {
        for unit in &mut self.units {
            unit.clear();
        }
        self.units = Vec::new();
        self.byte_size = 0;
    }
}

impl Index<usize> for ByteSequence {
    type Output = CharUnit;

    fn index(&self, index: usize) -> &CharUnit {
        &self.units[index]
    }
}

impl<'a> IntoIterator for &'a ByteSequence {
    type Item = &'a CharUnit;
    type IntoIter = Units<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for unit in &self.units {
            fmt::Display::fmt(unit.as_bytes().as_bstr(), f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for ByteSequence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ByteSequence")
            .field("len", &self.len())
            .field("byte_size", &self.byte_size)
            .field("units", &self.units)
            .finish()
    }
}

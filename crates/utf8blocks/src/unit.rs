use alloc::vec::Vec;
use core::fmt;

use bstr::ByteSlice;

use crate::{
    classify::{MAX_WIDTH, leading_width},
    error::{Error, Result},
};

/// One character stored as its raw UTF-8 bytes.
///
/// The bytes live inline in a four byte array; `width` says how many of them
/// are meaningful. A unit with width 0 is empty.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CharUnit {
    bytes: [u8; MAX_WIDTH],
    width: u8,
}

impl CharUnit {
    /// An empty unit.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            bytes: [0; MAX_WIDTH],
            width: 0,
        }
    }

    /// Builds a unit from the first `width` bytes of `data`.
    ///
    /// # Errors
    ///
    /// See [`CharUnit::encode`].
    pub fn with_width(data: &[u8], width: usize) -> Result<Self> {
        let mut unit = Self::new();
        unit.encode(data, width)?;
        Ok(unit)
    }

    /// Builds a unit from the character at the start of `data`, taking as
    /// many bytes as its leading byte calls for.
    ///
    /// Returns `None` when `data` is empty or ends before the character does.
    #[must_use]
    pub fn from_leading(data: &[u8]) -> Option<Self> {
        let lead = *data.first()?;
        Self::with_width(data, usize::from(leading_width(lead))).ok()
    }

    /// Copies the first `width` bytes of `data` into the unit.
    ///
    /// # Errors
    ///
    /// [`Error::InvalidWidth`] when `width` is not in `1..=4` or `data` holds
    /// fewer than `width` bytes. The unit is left untouched in that case.
    #[allow(clippy::cast_possible_truncation)]
    pub fn encode(&mut self, data: &[u8], width: usize) -> Result<()> {
        if !(1..=MAX_WIDTH).contains(&width) || data.len() < width {
            return Err(Error::InvalidWidth {
                width,
                available: data.len(),
            });
        }
        self.bytes[..width].copy_from_slice(&data[..width]);
        self.bytes[width..].fill(0);
        self.width = width as u8;
        Ok(())
    }

    /// Returns a freshly allocated copy of the unit's bytes. Its length is the
    /// unit's width.
    ///
    /// # Errors
    ///
    /// [`Error::Allocation`] when the buffer cannot be reserved.
    pub fn decode(&self) -> Result<Vec<u8>> {
        let mut out = Vec::new();
        out.try_reserve_exact(self.len())?;
        out.extend_from_slice(self.as_bytes());
        Ok(out)
    }

    /// The meaningful bytes of the unit.
    #[must_use]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len()]
    }

    /// Number of meaningful bytes, `0..=4`.
    #[must_use]
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Width as a `usize`.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.width as usize
    }

    /// Whether the unit holds no bytes.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.width == 0
    }

    /// The first byte, if any.
    #[must_use]
    pub fn leading_byte(&self) -> Option<u8> {
        self.as_bytes().first().copied()
    }

    /// Resets the unit to the empty state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}

impl AsRef<[u8]> for CharUnit {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl fmt::Debug for CharUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("CharUnit")
            .field(&self.as_bytes().as_bstr())
            .finish()
    }
}

impl fmt::Display for CharUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self.as_bytes().as_bstr(), f)
    }
}

#[cfg(test)]
mod tests {
    use alloc::format;

    use rstest::rstest;

    use super::*;
    use crate::ErrorKind;

    #[test]
    fn new_unit_is_empty() {
        let unit = CharUnit::new();
        assert!(unit.is_empty());
        assert_eq!(unit.width(), 0);
        assert_eq!(unit.as_bytes(), b"");
        assert_eq!(unit.leading_byte(), None);
        assert_eq!(unit, CharUnit::default());
    }

    #[test]
    fn encode_then_decode_two_bytes() {
        let mut unit = CharUnit::new();
        unit.encode(&[0xC3, 0xA9], 2).unwrap();
        assert_eq!(unit.width(), 2);
        assert_eq!(unit.decode().unwrap(), [0xC3, 0xA9]);
        assert_eq!(format!("{unit}"), "é");
    }

    #[test]
    fn encode_copies_only_width_bytes() {
        let unit = CharUnit::with_width(b"abcdef", 3).unwrap();
        assert_eq!(unit.as_bytes(), b"abc");
        assert_eq!(unit.decode().unwrap().len(), 3);
    }

    #[rstest]
    #[case(0)]
    #[case(5)]
    #[case(usize::MAX)]
    fn out_of_range_width_is_rejected(#[case] width: usize) {
        let mut unit = CharUnit::with_width(b"z", 1).unwrap();
        let err = unit.encode(b"abcdefgh", width).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidWidth);
        assert_eq!(unit.as_bytes(), b"z");
    }

    #[test]
    fn short_input_is_rejected() {
        let mut unit = CharUnit::new();
        let err = unit.encode(&[0xE2, 0x88], 3).unwrap_err();
        assert!(matches!(
            err,
            Error::InvalidWidth {
                width: 3,
                available: 2
            }
        ));
        assert!(unit.is_empty());
    }

    #[test]
    fn reencoding_narrower_forgets_old_bytes() {
        let mut unit = CharUnit::with_width("😀".as_bytes(), 4).unwrap();
        unit.encode(b"x", 1).unwrap();
        assert_eq!(unit, CharUnit::with_width(b"x", 1).unwrap());
    }

    #[test]
    fn from_leading_uses_classification() {
        let unit = CharUnit::from_leading("∮ E".as_bytes()).unwrap();
        assert_eq!(unit.width(), 3);
        assert_eq!(unit.leading_byte(), Some(0xE2));
        assert_eq!(CharUnit::from_leading(b""), None);
        assert_eq!(CharUnit::from_leading(&[0xF0, 0x9F]), None);
    }

    #[test]
    fn clear_is_repeatable() {
        let mut unit = CharUnit::with_width(b"q", 1).unwrap();
        unit.clear();
        unit.clear();
        assert!(unit.is_empty());
        assert_eq!(unit.decode().unwrap(), b"");
    }

    #[test]
    fn debug_shows_bytes() {
        let unit = CharUnit::with_width(&[0xFF, 0x41], 2).unwrap();
        assert_eq!(format!("{unit:?}"), r#"CharUnit("\xffA")"#);
    }
}

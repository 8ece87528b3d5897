/// Configuration for the scan that builds a [`ByteSequence`].
///
/// # Examples
///
/// ```rust
/// use utf8blocks::{ByteSequence, DecodeOptions};
///
/// let options = DecodeOptions {
///     stop_at_nul: false,
///     ..Default::default()
/// };
/// let seq = ByteSequence::from_bytes_with(b"a\0b", options).unwrap();
/// assert_eq!(seq.len(), 3);
/// ```
///
/// [`ByteSequence`]: crate::ByteSequence
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct DecodeOptions {
    /// Whether a zero byte ends the scan.
    ///
    /// With C-string semantics the first `0x00` terminates decoding. Any
    /// bytes after it are not turned into units, and the scan reports a
    /// mismatch between the consumed and the supplied length.
    ///
    /// When `false`, `0x00` is an ordinary single-byte character and the
    /// scan always runs to the end of the buffer.
    ///
    /// # Default
    ///
    /// `true`
    pub stop_at_nul: bool,

    /// Whether to give back the unused part of the unit storage after a scan.
    ///
    /// Storage is reserved for the worst case of one unit per input byte, so
    /// multi-byte text leaves spare capacity behind. Shrinking trades one
    /// reallocation for a tighter footprint.
    ///
    /// # Default
    ///
    /// `false`
    pub shrink_to_fit: bool,
}

impl Default for DecodeOptions {
    fn default() -> Self {
        Self {
            stop_at_nul: true,
            shrink_to_fit: false,
        }
    }
}

impl DecodeOptions {
    /// Options that treat the input as an opaque byte buffer: zero bytes are
    /// content and never end the scan.
    #[must_use]
    pub fn binary() -> Self {
        Self {
            stop_at_nul: false,
            ..Self::default()
        }
    }
}

//! Leading-byte width classification.
//!
//! | Leading byte | Width |
//! | ------------ | ----- |
//! | `0x00..=0x7F` | 1 |
//! | `0x80..=0xDF` | 2 |
//! | `0xE0..=0xEF` | 3 |
//! | `0xF0..=0xFF` | 4 |
//!
//! The table is total over `u8`. Stray continuation bytes (`0x80..=0xBF`)
//! and the bytes that can never start a well-formed sequence (`0xF8..`)
//! still get a width; the scanner is permissive on purpose and leaves
//! validation to the caller.

/// Largest number of bytes a single unit can hold.
pub const MAX_WIDTH: usize = 4;

const ONE_BYTE_MAX: u8 = 0x7F;
const TWO_BYTE_MAX: u8 = 0xDF;
const THREE_BYTE_MAX: u8 = 0xEF;

/// Number of bytes that belong to the character starting with `lead`.
///
/// ```rust
/// use utf8blocks::leading_width;
///
/// assert_eq!(leading_width(b'A'), 1);
/// assert_eq!(leading_width(0xC3), 2);
/// assert_eq!(leading_width(0xE2), 3);
/// assert_eq!(leading_width(0xF0), 4);
/// ```
#[must_use]
pub const fn leading_width(lead: u8) -> u8 {
    match lead {
        0..=ONE_BYTE_MAX => 1,
        0x80..=TWO_BYTE_MAX => 2,
        0xE0..=THREE_BYTE_MAX => 3,
        _ => 4,
    }
}

/// Whether `lead` is a complete single-byte character.
#[must_use]
pub const fn is_ascii_lead(lead: u8) -> bool {
    lead <= ONE_BYTE_MAX
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    #[rstest]
    #[case(0, 1)]
    #[case(b'A', 1)]
    #[case(127, 1)]
    #[case(128, 2)]
    #[case(0xC3, 2)]
    #[case(223, 2)]
    #[case(224, 3)]
    #[case(239, 3)]
    #[case(240, 4)]
    #[case(255, 4)]
    fn table_boundaries_are_inclusive(#[case] lead: u8, #[case] width: u8) {
        assert_eq!(leading_width(lead), width);
    }

    #[test]
    fn every_byte_has_a_width() {
        for lead in u8::MIN..=u8::MAX {
            let width = leading_width(lead);
            assert!((1..=MAX_WIDTH as u8).contains(&width), "{lead:#04x} -> {width}");
            assert_eq!(is_ascii_lead(lead), width == 1);
        }
    }

    #[test]
    fn agrees_with_core_for_valid_leads() {
        for c in ['a', 'é', '∮', '→', '😀', '\u{10FFFF}'] {
            let mut buf = [0u8; 4];
            let encoded = c.encode_utf8(&mut buf);
            assert_eq!(usize::from(leading_width(encoded.as_bytes()[0])), c.len_utf8());
        }
    }
}

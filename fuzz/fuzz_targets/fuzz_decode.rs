#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use utf8blocks::{ByteSequence, CharUnit, DecodeOptions, Error};

#[derive(Debug, Arbitrary)]
struct Input {
    stop_at_nul: bool,
    shrink_to_fit: bool,
    data: Vec<u8>,
}

fuzz_target!(|input: Input| {
    let options = DecodeOptions {
        stop_at_nul: input.stop_at_nul,
        shrink_to_fit: input.shrink_to_fit,
    };
    let data = &input.data;

    let mut seq = ByteSequence::new();
    let result = seq.populate(data, options);

    // Units always cover a prefix of the input, byte for byte.
    let bytes = seq.to_bytes();
    assert_eq!(bytes.len(), seq.consumed_bytes());
    assert!(data.starts_with(&bytes));
    assert!(seq.len() <= data.len());
    assert!(seq.iter().all(|unit| (1..=4).contains(&unit.width())));

    match result {
        Ok(()) => assert_eq!(bytes.len(), data.len()),
        Err(Error::ScanMismatch { consumed, expected }) => {
            assert_eq!(consumed, bytes.len());
            assert_eq!(expected, data.len());
            let rest = &data[consumed..];
            let stopped_at_nul = options.stop_at_nul && rest.first() == Some(&0);
            assert!(stopped_at_nul || CharUnit::from_leading(rest).is_none());
        }
        Err(err) => panic!("unexpected error: {err}"),
    }

    // Valid UTF-8 without zero bytes has one unit per char.
    if let Ok(text) = core::str::from_utf8(data) {
        if !text.contains('\0') {
            assert_eq!(seq.len(), text.chars().count());
        }
    }

    let c = seq.to_c_string().unwrap();
    assert_eq!(c.split_last(), Some((&0, bytes.as_slice())));

    seq.clear();
    seq.clear();
    assert!(seq.is_empty());
});

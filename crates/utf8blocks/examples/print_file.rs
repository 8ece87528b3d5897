//! Loads a file and prints it to `stdout` unit by unit. When decoding stops
//! early, the part decoded so far is still printed.
//!
//! The process exit code is the integer code of the error that occurred, or
//! zero on success, so scripts can branch on the cause.
//!
//! Run with
//!
//! ```bash
//! cargo run -p utf8blocks --example print_file -- path/to/file.txt
//! ```

use std::{io::Write, process::ExitCode};

use utf8blocks::{DecodeOptions, ErrorKind, Utf8File};

fn main() -> ExitCode {
    let Some(path) = std::env::args_os().nth(1) else {
        eprintln!("usage: print_file <path>");
        return ExitCode::from(ErrorKind::OpenFailure.code());
    };

    // A scan that stops early still leaves the decoded prefix to print.
    let mut file = Utf8File::new();
    let result = file.read(&path, DecodeOptions::default());
    if let Err(err) = &result {
        eprintln!("unable to read file {}: {err}", path.to_string_lossy());
    }

    let mut stdout = std::io::stdout().lock();
    if let Err(err) = file.write_to(&mut stdout).and_then(|()| stdout.flush()) {
        eprintln!("unable to write to stdout: {err}");
        return ExitCode::FAILURE;
    }
    ExitCode::from(ErrorKind::of(&result).code())
}

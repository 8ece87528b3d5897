//! Decodes a string mixing one and three byte characters, prints it back, and
//! lists the width of every unit.
//!
//! Run with
//!
//! ```bash
//! cargo run -p utf8blocks --example print_string
//! ```

use std::io::Write;

use utf8blocks::ByteSequence;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let data = "SIMPLE utf8 encoded string with extra chars ∮ E⋅da = Q,  n → ∞, ∑ f(i) = ∏ g(i)";
    let seq = ByteSequence::from_bytes(data.as_bytes())?;

    let mut stdout = std::io::stdout().lock();
    seq.write_to(&mut stdout)?;
    writeln!(stdout)?;

    writeln!(stdout, "{} characters in {} bytes", seq.len(), seq.byte_size())?;
    for unit in seq.iter().filter(|unit| unit.width() > 1) {
        writeln!(stdout, "  {unit} -> {} bytes {:02X?}", unit.width(), unit.as_bytes())?;
    }
    Ok(())
}

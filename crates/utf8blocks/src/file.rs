use std::{fs::File, io::Read, path::Path};

use crate::{
    error::{Error, Result},
    options::DecodeOptions,
    sequence::ByteSequence,
};

/// The decoded contents of a file.
///
/// The whole file is read into memory, decoded into a [`ByteSequence`], and
/// the raw buffer is dropped again before [`Utf8File::open`] returns.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Utf8File {
    seq: ByteSequence,
}

impl Utf8File {
    /// Reads and decodes the file at `path` with the default
    /// [`DecodeOptions`].
    ///
    /// # Errors
    ///
    /// See [`Utf8File::open_with`].
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with(path, DecodeOptions::default())
    }

    /// Reads and decodes the file at `path`.
    ///
    /// # Errors
    ///
    /// - [`Error::Open`] when the file cannot be opened.
    /// - [`Error::Read`] when reading its contents fails.
    /// - [`Error::Allocation`] when the read buffer or the unit storage cannot
    ///   be reserved.
    /// - [`Error::ScanMismatch`] when the contents do not decode to the end,
    ///   see [`ByteSequence::populate`].
    pub fn open_with(path: impl AsRef<Path>, options: DecodeOptions) -> Result<Self> {
        let mut file = Self::new();
        file.read(path, options)?;
        Ok(file)
    }

    /// An empty file with no decoded contents.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            seq: ByteSequence::new(),
        }
    }

    /// Reads and decodes the file at `path` into `self`, replacing what was
    /// there before.
    ///
    /// # Errors
    ///
    /// As [`Utf8File::open_with`]. Open and read failures leave `self`
    /// untouched. On [`Error::ScanMismatch`] the units decoded before the
    /// scan stopped stay available through [`Utf8File::sequence`].
    pub fn read(&mut self, path: impl AsRef<Path>, options: DecodeOptions) -> Result<()> {
        let data = read_all(path.as_ref())?;
        self.seq.populate(&data, options)
    }

    /// The decoded contents.
    #[must_use]
    pub fn sequence(&self) -> &ByteSequence {
        &self.seq
    }

    /// Takes the decoded contents.
    #[must_use]
    pub fn into_sequence(self) -> ByteSequence {
        self.seq
    }

    /// Number of characters in the file.
    #[must_use]
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Whether the file decoded to no characters.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.seq.is_empty()
    }

    /// Writes the decoded contents to `out`.
    ///
    /// # Errors
    ///
    /// Any error returned by `out`.
    pub fn write_to<W: std::io::Write + ?Sized>(&self, out: &mut W) -> std::io::Result<()> {
        self.seq.write_to(out)
    }

    /// Releases the decoded contents.
    pub fn clear(&mut self) {
        self.seq.clear();
    }
}

impl From<Utf8File> for ByteSequence {
    fn from(file: Utf8File) -> Self {
        file.into_sequence()
    }
}

/// The handle is dropped on every return path, before the buffer is handed on.
fn read_all(path: &Path) -> Result<Vec<u8>> {
    let mut file = File::open(path).map_err(|source| Error::Open {
        path: path.to_path_buf(),
        source,
    })?;
    // The reported length is only a hint; `read_to_end` grows past it if the
    // file changed in between.
    let hint = file
        .metadata()
        .ok()
        .and_then(|meta| usize::try_from(meta.len()).ok())
        .unwrap_or(0);

    let mut data = Vec::new();
    data.try_reserve_exact(hint)?;
    file.read_to_end(&mut data).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(data)
}

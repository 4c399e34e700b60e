use std::io;
use std::path::Path;

use tempfile::NamedTempFile;

/// A temporary file that lives exactly as long as the value.
///
/// Thin wrapper over [`NamedTempFile`] with whole-file read and write,
/// for tests that hand a path to code under test and inspect what it
/// did with it. The file is removed on drop.
#[derive(Debug)]
pub struct ScopedFile {
    file: NamedTempFile,
}

impl ScopedFile {
    pub fn new() -> io::Result<Self> {
        Ok(Self {
            file: tempfile::Builder::new().prefix("tmp").tempfile()?,
        })
    }

    /// Like [`ScopedFile::new`] with a file-name suffix, for code that
    /// sniffs extensions.
    pub fn with_suffix(suffix: &str) -> io::Result<Self> {
        Ok(Self {
            file: tempfile::Builder::new().prefix("tmp").suffix(suffix).tempfile()?,
        })
    }

    pub fn path(&self) -> &Path { self.file.path() }

    /// Replace the file's contents.
    pub fn write(&self, data: &[u8]) -> io::Result<()> {
        std::fs::write(self.path(), data)
    }

    /// Read the file's contents.
    pub fn read(&self) -> io::Result<Vec<u8>> {
        std::fs::read(self.path())
    }

    pub fn read_to_string(&self) -> io::Result<String> {
        std::fs::read_to_string(self.path())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let tmp = ScopedFile::new().unwrap();
        tmp.write(b"test data").unwrap();
        assert_eq!(tmp.read().unwrap(), b"test data");
        assert_eq!(tmp.read_to_string().unwrap(), "test data");
    }

    #[test]
    fn file_disappears_on_drop() {
        let path = {
            let tmp = ScopedFile::new().unwrap();
            tmp.write(b"x").unwrap();
            tmp.path().to_path_buf()
        };
        assert!(!path.exists());
    }

    #[test]
    fn suffix_lands_in_the_file_name() {
        let tmp = ScopedFile::with_suffix(".png").unwrap();
        assert!(tmp.path().to_string_lossy().ends_with(".png"));
    }
}

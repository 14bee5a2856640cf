// SPDX-License-Identifier: MPL-2.0
//! Temporary staging of uploaded files.
//!
//! Each upload is written to its own uniquely named file. The file is
//! removed when the [`StagedUpload`] is dropped, on success and failure
//! paths alike.

use crate::error::Result;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

const STAGING_PREFIX: &str = "truthcheck-upload-";

/// An upload written to a temporary file.
#[derive(Debug)]
pub struct StagedUpload {
    file: NamedTempFile,
}

impl StagedUpload {
    /// Writes `bytes` to a new temporary file.
    ///
    /// The file is created in `dir` when given, otherwise in the system
    /// temporary directory.
    ///
    /// # Errors
    ///
    /// Returns an I/O error if the file cannot be created or written.
    pub fn write(dir: Option<&Path>, bytes: &[u8]) -> Result<Self> {
        let mut builder = tempfile::Builder::new();
        builder.prefix(STAGING_PREFIX);
        let mut file = match dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(bytes)?;
        file.flush()?;
        Ok(Self { file })
    }

    /// Path of the staged file.
    #[must_use]
    pub fn path(&self) -> &Path {
        self.file.path()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn staged_file_holds_bytes_until_dropped() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let staged = StagedUpload::write(Some(temp_dir.path()), b"payload").expect("stage");
        let path = staged.path().to_path_buf();

        assert!(path.starts_with(temp_dir.path()));
        assert_eq!(fs::read(&path).expect("read"), b"payload");

        drop(staged);
        assert!(!path.exists());
    }

    #[test]
    fn each_upload_gets_a_distinct_file() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let a = StagedUpload::write(Some(temp_dir.path()), b"a").expect("stage a");
        let b = StagedUpload::write(Some(temp_dir.path()), b"b").expect("stage b");
        assert_ne!(a.path(), b.path());
    }

    #[test]
    fn staging_into_missing_directory_fails() {
        let temp_dir = tempfile::tempdir().expect("temp dir");
        let missing = temp_dir.path().join("does-not-exist");
        assert!(StagedUpload::write(Some(&missing), b"x").is_err());
    }
}

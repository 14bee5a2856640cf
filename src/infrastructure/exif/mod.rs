// SPDX-License-Identifier: MPL-2.0
//! EXIF tag extraction via `kamadak-exif`, implementing the [`TagExtractor`] port.
//!
//! Tags are named `"<IFD group> <TagName>"`:
//!
//! | IFD                    | Group              | Example                  |
//! |------------------------|--------------------|--------------------------|
//! | 0th (primary image)    | `Image`            | `Image Software`         |
//! | 1st (thumbnail)        | `Thumbnail`        | `Thumbnail Compression`  |
//! | Exif                   | `EXIF`             | `EXIF DateTimeOriginal`  |
//! | GPS                    | `GPS`              | `GPS GPSLatitude`        |
//! | Interoperability       | `Interoperability` | `Interoperability InteroperabilityIndex` |
//!
//! [`TagExtractor`]: crate::application::port::TagExtractor

use crate::application::port::{ExtractionError, TagExtractor};
use crate::domain::verification::MetadataTagSet;
use std::fs::File;
use std::io::{BufRead, BufReader, Seek};
use std::path::Path;

/// Reads EXIF tags from JPEG, TIFF, HEIF, PNG and WebP containers.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExifTagExtractor;

impl ExifTagExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Reads tags from an already opened container.
    ///
    /// A container without an EXIF block yields an empty tag set.
    ///
    /// # Errors
    ///
    /// Returns an [`ExtractionError`] if the container is unreadable,
    /// unrecognized, or its EXIF block is corrupt.
    pub fn extract_from_reader<R: BufRead + Seek>(
        &self,
        reader: &mut R,
    ) -> Result<MetadataTagSet, ExtractionError> {
        let exif = match exif::Reader::new().read_from_container(reader) {
            Ok(exif) => exif,
            Err(exif::Error::NotFound(_)) => return Ok(MetadataTagSet::new()),
            Err(err) => return Err(map_exif_error(err)),
        };

        let mut tags = MetadataTagSet::new();
        for field in exif.fields() {
            let name = format!("{} {}", ifd_group(field), field.tag);
            tags.insert(name, field_value(field));
        }
        Ok(tags)
    }
}

impl TagExtractor for ExifTagExtractor {
    fn extract_tags(&self, path: &Path) -> Result<MetadataTagSet, ExtractionError> {
        let file = File::open(path).map_err(|e| ExtractionError::Io(e.to_string()))?;
        let mut reader = BufReader::new(file);
        self.extract_from_reader(&mut reader)
    }
}

/// Returns the group name used as the tag prefix for a field.
fn ifd_group(field: &exif::Field) -> &'static str {
    match field.tag.context() {
        exif::Context::Tiff if field.ifd_num == exif::In::THUMBNAIL => "Thumbnail",
        exif::Context::Tiff => "Image",
        exif::Context::Exif => "EXIF",
        exif::Context::Gps => "GPS",
        exif::Context::Interop => "Interoperability",
        #[allow(unreachable_patterns)]
        _ => "Unknown",
    }
}

/// Returns the display form of a field value.
///
/// ASCII fields may hold several NUL-separated strings; they are joined with
/// `", "` without the quotes `display_value` puts around each one.
fn field_value(field: &exif::Field) -> String {
    match &field.value {
        exif::Value::Ascii(strings) => strings
            .iter()
            .map(|s| String::from_utf8_lossy(s).trim_end_matches('\0').to_string())
            .collect::<Vec<_>>()
            .join(", "),
        _ => field.display_value().to_string(),
    }
}

fn map_exif_error(err: exif::Error) -> ExtractionError {
    match err {
        exif::Error::Io(e) => ExtractionError::Io(e.to_string()),
        other => ExtractionError::Malformed(other.to_string()),
    }
}

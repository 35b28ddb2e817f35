use crate::sorter_core::error::{MediaSorterError, Result};
use exiftool::ExifTool;
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};

/// Tag naming the file a record describes.
pub const SOURCE_FILE_TAG: &str = "SourceFile";

/// Group-prefixed tag names, e.g. `EXIF:DateTimeOriginal`.
const EXIFTOOL_ARGS: &[&str] = &["-G"];

/// Metadata tags of a single file as reported by exiftool.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MetadataRecord {
    tags: Map<String, Value>,
}

impl MetadataRecord {
    /// Build a record from string tag/value pairs.
    pub fn from_pairs<K: Into<String>, V: Into<String>>(
        pairs: impl IntoIterator<Item = (K, V)>,
    ) -> Self {
        let tags = pairs
            .into_iter()
            .map(|(k, v)| (k.into(), Value::String(v.into())))
            .collect();
        MetadataRecord { tags }
    }

    /// The file this record belongs to, if exiftool reported one.
    pub fn source_file(&self) -> Option<PathBuf> {
        self.tag_str(SOURCE_FILE_TAG).map(PathBuf::from)
    }

    /// A tag value, only when it is a string.
    pub fn tag_str(&self, tag: &str) -> Option<&str> {
        self.tags.get(tag).and_then(Value::as_str)
    }
}

impl TryFrom<Value> for MetadataRecord {
    type Error = MediaSorterError;

    fn try_from(value: Value) -> Result<Self> {
        match value {
            Value::Object(tags) => Ok(MetadataRecord { tags }),
            other => Err(MediaSorterError::Exiftool(format!(
                "expected a JSON object per file, got {}",
                other
            ))),
        }
    }
}

/// Source of file metadata, queried once per batch of files.
///
/// Files it cannot describe are simply absent from the result.
pub trait MetadataProvider {
    fn metadata_batch(&mut self, files: &[PathBuf]) -> Result<Vec<MetadataRecord>>;
}

/// Reads metadata by driving an `exiftool` process.
///
/// The process only lives for the duration of one batch call and is shut
/// down when the call returns, successfully or not.
#[derive(Debug, Default)]
pub struct ExifToolProvider;

impl ExifToolProvider {
    pub fn new() -> Self {
        ExifToolProvider
    }
}

impl MetadataProvider for ExifToolProvider {
    fn metadata_batch(&mut self, files: &[PathBuf]) -> Result<Vec<MetadataRecord>> {
        if files.is_empty() {
            return Ok(Vec::new());
        }

        let mut exiftool =
            ExifTool::new().map_err(|e| MediaSorterError::Exiftool(e.to_string()))?;
        log::debug!("Reading metadata of {} files", files.len());

        Ok(read_records(&mut exiftool, files))
    }
}

/// The two exiftool calls the provider relies on.
trait ExifSession {
    fn read_batch(&mut self, files: &[PathBuf]) -> Result<Vec<Value>>;
    fn read_one(&mut self, file: &Path) -> Result<Value>;
}

impl ExifSession for ExifTool {
    fn read_batch(&mut self, files: &[PathBuf]) -> Result<Vec<Value>> {
        self.json_batch(files.iter(), EXIFTOOL_ARGS)
            .map_err(|e| MediaSorterError::Exiftool(e.to_string()))
    }

    fn read_one(&mut self, file: &Path) -> Result<Value> {
        self.json(file, EXIFTOOL_ARGS)
            .map_err(|e| MediaSorterError::Exiftool(e.to_string()))
    }
}

/// Read all `files` in one call. exiftool fails the whole batch when any file
/// errors, so on failure every file is read on its own and the ones that
/// still fail are left out.
fn read_records<S: ExifSession>(session: &mut S, files: &[PathBuf]) -> Vec<MetadataRecord> {
    // exiftool only receives paths as UTF-8 text.
    let readable: Vec<PathBuf> = files
        .iter()
        .filter(|f| {
            let ok = f.to_str().is_some();
            if !ok {
                log::warn!("[{}] Error: path is not valid UTF-8", f.display());
            }
            ok
        })
        .cloned()
        .collect();

    if readable.is_empty() {
        return Vec::new();
    }

    match session.read_batch(&readable) {
        Ok(values) => values.into_iter().flat_map(records_from_value).collect(),
        Err(e) => {
            log::warn!("Batch metadata read failed ({}), reading files one by one", e);
            let mut records = Vec::new();
            for file in &readable {
                match session.read_one(file) {
                    Ok(value) => records.extend(records_from_value(value)),
                    Err(e) => log::warn!("[{}] Error: {}", file.display(), e),
                }
            }
            records
        }
    }
}

/// exiftool answers with one object per file, possibly wrapped in an array.
fn records_from_value(value: Value) -> Vec<MetadataRecord> {
    let values = match value {
        Value::Array(values) => values,
        other => vec![other],
    };

    values
        .into_iter()
        .filter_map(|v| match MetadataRecord::try_from(v) {
            Ok(record) => Some(record),
            Err(e) => {
                log::warn!("Ignoring metadata entry: {}", e);
                None
            }
        })
        .collect()
}

use std::path::Path;

/// Image file extensions (lowercase).
pub const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg"];

/// Video file extensions (lowercase).
pub const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov"];

/// Metadata tag holding the capture date of a picture.
pub const IMAGE_DATE_TAG: &str = "EXIF:DateTimeOriginal";

/// Metadata tag holding the creation date of a video.
pub const VIDEO_DATE_TAG: &str = "QuickTime:CreateDate";

/// Parameters of one sorting pass: where the files go, which tag dates them
/// and which extensions select them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaKind {
    pub label: String,
    pub date_tag: String,
    pub extensions: Vec<String>,
}

impl MediaKind {
    pub fn new(label: &str, date_tag: &str, extensions: &[&str]) -> Self {
        MediaKind {
            label: label.to_string(),
            date_tag: date_tag.to_string(),
            extensions: extensions.iter().map(|e| normalize_extension(e)).collect(),
        }
    }

    pub fn pictures() -> Self {
        Self::new("pictures", IMAGE_DATE_TAG, IMAGE_EXTENSIONS)
    }

    pub fn videos() -> Self {
        Self::new("videos", VIDEO_DATE_TAG, VIDEO_EXTENSIONS)
    }

    /// Replace the extension set, e.g. from command line overrides.
    pub fn with_extensions<S: AsRef<str>>(mut self, extensions: &[S]) -> Self {
        self.extensions = extensions
            .iter()
            .map(|e| normalize_extension(e.as_ref()))
            .filter(|e| !e.is_empty())
            .collect();
        self
    }

    /// Case-insensitive extension check.
    pub fn matches(&self, path: &Path) -> bool {
        path.extension()
            .and_then(|e| e.to_str())
            .map(|ext| {
                let ext_lower = ext.to_lowercase();
                self.extensions.iter().any(|e| *e == ext_lower)
            })
            .unwrap_or(false)
    }
}

impl std::fmt::Display for MediaKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label)
    }
}

fn normalize_extension(ext: &str) -> String {
    ext.trim().trim_start_matches('.').to_lowercase()
}

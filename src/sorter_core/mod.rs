pub mod cli;
pub mod date;
pub mod error;
pub mod exif;
pub mod locale;
pub mod media;
pub mod scan;
pub mod sorter;

pub use cli::Cli;
pub use date::{DateSource, ResolvedDate, resolve_date};
pub use error::{CopyFailures, DateError, MediaSorterError, Result};
pub use exif::{ExifToolProvider, MetadataProvider, MetadataRecord};
pub use locale::MonthLocale;
pub use media::MediaKind;
pub use scan::scan_media;
pub use sorter::{MediaSorter, SortStats};

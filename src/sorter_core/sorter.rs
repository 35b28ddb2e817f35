use crate::sorter_core::date::{ResolvedDate, resolve_date};
use crate::sorter_core::error::{CopyFailures, DateError, Result};
use crate::sorter_core::exif::{MetadataProvider, MetadataRecord, SOURCE_FILE_TAG};
use crate::sorter_core::locale::MonthLocale;
use crate::sorter_core::media::MediaKind;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::HashSet;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

const UNSORTED_DIR_NAME: &str = "unsorted";

/// Outcome of one sorting pass.
#[derive(Debug, Default)]
pub struct SortStats {
    pub sorted: usize,
    pub unsorted: usize,
    pub failures: CopyFailures,
}

impl SortStats {
    pub fn total(&self) -> usize {
        self.sorted + self.unsorted + self.failures.len()
    }
}

impl std::fmt::Display for SortStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} sorted, {} unsorted", self.sorted, self.unsorted)?;
        if !self.failures.is_empty() {
            write!(f, ", {} failed", self.failures.len())?;
        }
        Ok(())
    }
}

/// Copies media files into `<dest>/<label>/<year>/<MM>-<month name>`, or into
/// `<dest>/<label>/unsorted` when no date can be determined.
pub struct MediaSorter<P> {
    dest_root: PathBuf,
    locale: MonthLocale,
    provider: P,
    dry_run: bool,
}

impl<P: MetadataProvider> MediaSorter<P> {
    pub fn new(dest_root: &Path, locale: MonthLocale, provider: P) -> Self {
        MediaSorter {
            dest_root: dest_root.to_path_buf(),
            locale,
            provider,
            dry_run: false,
        }
    }

    /// Only report where files would go.
    pub fn dry_run(mut self, dry_run: bool) -> Self {
        self.dry_run = dry_run;
        self
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn unsorted_dir(&self, kind: &MediaKind) -> PathBuf {
        self.dest_root.join(&kind.label).join(UNSORTED_DIR_NAME)
    }

    pub fn sorted_dir(&self, kind: &MediaKind, resolved: &ResolvedDate) -> PathBuf {
        let month = resolved.month();
        self.dest_root
            .join(&kind.label)
            .join(resolved.year().to_string())
            .join(format!("{:02}-{}", month as u8, self.locale.month_name(month)))
    }

    /// Sort `files` of one media kind.
    ///
    /// Per-file problems never abort the pass: the file goes to the unsorted
    /// folder, and if even that copy fails it is recorded in
    /// [`SortStats::failures`]. Only an error from the metadata provider is fatal.
    pub fn sort_media(&mut self, kind: &MediaKind, files: &[PathBuf]) -> Result<SortStats> {
        let unsorted_dir = self.unsorted_dir(kind);
        if !self.dry_run {
            fs::create_dir_all(&unsorted_dir)?;
        }

        let mut stats = SortStats::default();
        if files.is_empty() {
            log::info!("No {} to sort", kind);
            return Ok(stats);
        }

        let records = self.provider.metadata_batch(files)?;
        log::info!("Read metadata for {} of {} {} files", records.len(), files.len(), kind);

        let bar_style = ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({eta}) {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar());
        let bar = ProgressBar::new(files.len() as u64).with_style(bar_style);
        bar.set_message(format!("Sorting {}", kind));

        let mut pending: HashSet<&Path> = files.iter().map(PathBuf::as_path).collect();

        for record in &records {
            let Some(source) = record.source_file() else {
                log::error!("Metadata record without {}, skipping: {:?}", SOURCE_FILE_TAG, record);
                continue;
            };
            pending.remove(source.as_path());
            self.sort_file(kind, &source, record, &unsorted_dir, &bar, &mut stats);
            bar.inc(1);
        }

        // Files exiftool said nothing about still need a home.
        for source in files.iter().filter(|f| pending.contains(f.as_path())) {
            log::warn!("[{}] Error: no metadata returned", source.display());
            self.copy_unsorted(source, &unsorted_dir, &bar, &mut stats);
            bar.inc(1);
        }

        bar.finish_with_message(format!("{} done", kind));
        log::info!("Sorted {}: {}", kind, stats);

        Ok(stats)
    }

    fn sort_file(
        &self,
        kind: &MediaKind,
        source: &Path,
        record: &MetadataRecord,
        unsorted_dir: &Path,
        bar: &ProgressBar,
        stats: &mut SortStats,
    ) {
        let file_name = source
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        match resolve_date(&file_name, record, &kind.date_tag) {
            Ok(resolved) => {
                let dest_dir = self.sorted_dir(kind, &resolved);
                log::debug!(
                    "[{}] dated {} from {:?}",
                    source.display(),
                    resolved.date,
                    resolved.source
                );
                match self.copy_into(source, &dest_dir, bar) {
                    Ok(_) => {
                        stats.sorted += 1;
                        return;
                    }
                    Err(e) => log::warn!("[{}] Error: {}", source.display(), e),
                }
            }
            Err(e @ DateError::MissingTag(_)) => {
                log::info!("[{}] {}", source.display(), e);
            }
            Err(e) => log::warn!("[{}] Error: {}", source.display(), e),
        }

        self.copy_unsorted(source, unsorted_dir, bar, stats);
    }

    fn copy_unsorted(
        &self,
        source: &Path,
        unsorted_dir: &Path,
        bar: &ProgressBar,
        stats: &mut SortStats,
    ) {
        match self.copy_into(source, unsorted_dir, bar) {
            Ok(_) => stats.unsorted += 1,
            Err(e) => {
                log::error!(
                    "[{}] Error: copy to {} failed: {}",
                    source.display(),
                    unsorted_dir.display(),
                    e
                );
                stats
                    .failures
                    .add(source.to_path_buf(), unsorted_dir.to_path_buf(), e);
            }
        }
    }

    /// Copy `source` into `dir` under its own file name, replacing any file
    /// already there.
    fn copy_into(&self, source: &Path, dir: &Path, bar: &ProgressBar) -> io::Result<PathBuf> {
        let file_name = source.file_name().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("{} has no file name", source.display()),
            )
        })?;
        let destination = dir.join(file_name);

        if self.dry_run {
            bar.suspend(|| {
                println!("[DRY RUN] {} -> {}", source.display(), destination.display())
            });
            return Ok(destination);
        }

        fs::create_dir_all(dir)?;
        fs::copy(source, &destination)?;
        log::debug!("Copied {} -> {}", source.display(), destination.display());

        Ok(destination)
    }
}

use anyhow::Result;
use clap::Parser;
use media_sorter::sorter_core::{
    Cli, CopyFailures, ExifToolProvider, MediaKind, MediaSorter, MediaSorterError, MonthLocale,
    scan_media,
};
use simplelog::{CombinedLogger, Config, LevelFilter, SharedLogger, TermLogger, WriteLogger};
use std::fs::File;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize loggers
    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        LevelFilter::Warn,
        Config::default(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    )];

    if cli.log {
        loggers.push(WriteLogger::new(
            cli.log_level,
            Config::default(),
            File::create("media_sorter.log")?,
        ));
    }

    CombinedLogger::init(loggers)?;

    let locale = match &cli.locale {
        Some(locale) => MonthLocale::parse(locale)?,
        None => MonthLocale::system(),
    };
    log::info!("Using locale {} for month names", locale);

    let mut pictures = MediaKind::pictures();
    if !cli.image_ext.is_empty() {
        pictures = pictures.with_extensions(&cli.image_ext);
    }
    let mut videos = MediaKind::videos();
    if !cli.video_ext.is_empty() {
        videos = videos.with_extensions(&cli.video_ext);
    }

    let image_files = scan_media(&cli.source_path, &pictures)?;
    let video_files = scan_media(&cli.source_path, &videos)?;

    let mut sorter = MediaSorter::new(&cli.destination_path, locale, ExifToolProvider::new())
        .dry_run(cli.dry_run);

    let mut failures = CopyFailures::new();
    for (kind, files) in [(&pictures, &image_files), (&videos, &video_files)] {
        let stats = sorter.sort_media(kind, files)?;
        println!("{:<9} {}", format!("{}:", kind), stats);
        failures.extend(stats.failures);
    }

    if cli.dry_run {
        println!("\n[DRY RUN] No files were copied.");
    }

    if !failures.is_empty() {
        return Err(MediaSorterError::CopyFailed(failures).into());
    }

    Ok(())
}

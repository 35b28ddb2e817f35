use clap::Parser;
use simplelog::LevelFilter;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Copy pictures and videos into a year/month folder tree by creation date"
)]
pub struct Cli {
    /// Directory to scan for media files
    #[arg(required = true)]
    pub source_path: PathBuf,

    /// Directory receiving the pictures/ and videos/ trees
    #[arg(required = true)]
    pub destination_path: PathBuf,

    /// Locale for month folder names, e.g. "it-IT" or "en_US.UTF-8" [default: system locale]
    #[arg(long)]
    pub locale: Option<String>,

    /// Picture extensions, comma-separated (e.g., "jpg,jpeg")
    #[arg(long, value_delimiter = ',')]
    pub image_ext: Vec<String>,

    /// Video extensions, comma-separated (e.g., "mp4,mov")
    #[arg(long, value_delimiter = ',')]
    pub video_ext: Vec<String>,

    /// Show where files would be copied without making changes
    #[arg(long)]
    pub dry_run: bool,

    /// Enable file logging to media_sorter.log
    #[arg(long = "log")]
    pub log: bool,

    /// Log level for file logging (debug, info, warn, error)
    #[arg(long, default_value_t = LevelFilter::Debug)]
    pub log_level: LevelFilter,
}

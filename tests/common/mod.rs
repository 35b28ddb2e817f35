use assert_cmd::Command;
use assert_fs::TempDir;
use assert_fs::fixture::ChildPath;
use assert_fs::prelude::*;

pub fn media_sorter() -> Command {
    Command::cargo_bin("media_sorter").unwrap()
}

/// A source tree holding only files that are not pictures or videos.
pub fn setup_source_dir(temp_dir: &TempDir) -> ChildPath {
    let source_dir = temp_dir.child("source");
    source_dir.child("notes.txt").write_str("not media").unwrap();
    source_dir.child("scans/receipt-20210615-x.pdf").write_str("pdf").unwrap();
    source_dir.child("scans/logo.png").write_str("png").unwrap();
    source_dir
}

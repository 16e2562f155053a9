//! Recursive document discovery.

use crate::config::DiataxisConfig;
use crate::error::Result;
use crate::kind::Kind;
use std::path::PathBuf;

/// All files of `kind` under its configured directory, at any depth,
/// in lexicographic path order.
///
/// Ordering keeps index output deterministic; for decision records the
/// zero-padded filenames make it numeric ordering as well.
pub fn find_files(kind: Kind, config: &DiataxisConfig) -> Result<Vec<PathBuf>> {
    let pattern = config
        .dir_for(kind)
        .join("**")
        .join(kind.file_pattern())
        .to_string_lossy()
        .into_owned();

    let mut files: Vec<PathBuf> = glob::glob(&pattern)?
        .filter_map(|entry| entry.ok())
        .filter(|path| path.is_file())
        .collect();
    files.sort();
    Ok(files)
}

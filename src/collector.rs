/*!
 * Directory traversal and file collection
 */

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use indicatif::ProgressBar;
use log::{debug, warn};
use walkdir::{DirEntry, WalkDir};

use crate::config::Config;
use crate::error::UnreadableFile;
use crate::types::{Block, Collection};
use crate::utils::{absolute_path, to_slash_path, truncate_front};

/// Collect every readable file under `root` into one Markdown document
///
/// A missing root, or one that is not a directory, yields an empty string.
/// Files that cannot be read as UTF-8 are logged and left out.
pub fn collect(root: impl AsRef<Path>) -> String {
    let config = Config::new(root.as_ref());
    Collector::new(config, Arc::new(ProgressBar::hidden()))
        .collect()
        .to_markdown()
}

/// Walks a directory tree and reads each file into a [`Block`]
pub struct Collector {
    /// Collector configuration
    config: Config,
    /// Progress bar
    pub progress: Arc<ProgressBar>,
}

impl Collector {
    /// Create a new collector
    pub fn new(config: Config, progress: Arc<ProgressBar>) -> Self {
        Self { config, progress }
    }

    /// Walk the target directory and read every file in traversal order
    pub fn collect(&self) -> Collection {
        // Lexical resolution keeps the name of a symlinked root
        let abs_root = match absolute_path(&self.config.target_dir) {
            Ok(path) => path,
            Err(e) => {
                debug!(
                    "Cannot resolve {}: {}",
                    self.config.target_dir.display(),
                    e
                );
                return Collection::new(&self.config.target_dir);
            }
        };

        if !abs_root.is_dir() {
            debug!("Nothing to collect at {}", abs_root.display());
            return Collection::new(abs_root);
        }

        // Paths are reported relative to the root's parent so the root's own
        // name leads every path
        let base = abs_root.parent().unwrap_or(&abs_root).to_path_buf();
        let mut collection = Collection::new(&abs_root);

        let mut walker = WalkDir::new(&abs_root).min_depth(1);
        if self.config.sort {
            walker = walker.sort_by_file_name();
        }

        for entry in walker {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) => {
                    debug!("Skipping unreadable directory entry: {}", e);
                    continue;
                }
            };

            if !is_collectable(&entry) {
                continue;
            }

            let outcome = self.read_block(entry.path(), &base);
            if let Err(skipped) = &outcome {
                self.progress.suspend(|| warn!("Skipping {}", skipped));
            }
            collection.push(outcome);
        }

        collection
    }

    /// Read one file into a block
    fn read_block(&self, abs_path: &Path, base: &Path) -> Result<Block, UnreadableFile> {
        self.progress.inc(1);

        let file_name = abs_path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.progress
            .set_message(format!("Current file: {}", truncate_front(&file_name, 40)));

        let content =
            fs::read_to_string(abs_path).map_err(|e| UnreadableFile::new(abs_path, e))?;

        let rel_path = abs_path
            .strip_prefix(base)
            .map(Path::to_path_buf)
            .unwrap_or_else(|_| PathBuf::from(&file_name));

        Ok(Block::new(to_slash_path(&rel_path), &content))
    }
}

/// Whether a walk entry is a file to read
///
/// Directories, and symlinks resolving to directories, are never read.
/// Symlinks to files and broken symlinks are, the latter failing like any
/// other unreadable file.
fn is_collectable(entry: &DirEntry) -> bool {
    let file_type = entry.file_type();
    if file_type.is_dir() {
        return false;
    }

    !(file_type.is_symlink() && entry.path().is_dir())
}

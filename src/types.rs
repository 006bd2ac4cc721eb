/*!
 * Core types and data structures for clipmd
 */

use std::path::{Path, PathBuf};

use crate::error::UnreadableFile;
use crate::markdown;

/// One collected file, ready to be rendered as a fenced block
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Block {
    /// Path relative to the parent of the root, `/`-separated
    pub path: String,
    /// File content with leading and trailing whitespace removed
    pub content: String,
}

impl Block {
    /// Create a block, trimming the raw file content
    pub fn new(path: impl Into<String>, raw_content: &str) -> Self {
        Self {
            path: path.into(),
            content: raw_content.trim().to_string(),
        }
    }

    /// Number of lines in the trimmed content
    pub fn lines(&self) -> usize {
        self.content.lines().count()
    }

    /// Number of characters in the trimmed content
    pub fn chars(&self) -> usize {
        self.content.chars().count()
    }
}

/// A file left out of the output
pub type SkippedFile = UnreadableFile;

/// Result of one collector run
#[derive(Debug, Default)]
pub struct Collection {
    /// Absolute root the traversal started from
    pub root: PathBuf,
    /// Blocks in traversal order
    pub blocks: Vec<Block>,
    /// Files that could not be read, in traversal order
    pub skipped: Vec<SkippedFile>,
}

impl Collection {
    /// Create an empty collection for the given root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            blocks: Vec::new(),
            skipped: Vec::new(),
        }
    }

    /// Record the outcome of reading one file
    pub fn push(&mut self, outcome: Result<Block, SkippedFile>) {
        match outcome {
            Ok(block) => self.blocks.push(block),
            Err(skipped) => self.skipped.push(skipped),
        }
    }

    /// Number of blocks collected
    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Render the whole collection as one Markdown document
    pub fn to_markdown(&self) -> String {
        markdown::render(&self.blocks)
    }
}

#[cfg(test)]
mod tests {
    use std::io;

    use super::*;

    #[test]
    fn test_block_trims_only_outer_whitespace() {
        let block = Block::new("root/a.txt", "\n\n  line one\r\n\tline two  \r\n\n");
        assert_eq!(block.content, "line one\r\n\tline two");
        assert_eq!(block.lines(), 2);
    }

    #[test]
    fn test_push_splits_outcomes() {
        let mut collection = Collection::new("/tmp/root");
        collection.push(Ok(Block::new("root/a.txt", "a")));
        collection.push(Err(UnreadableFile::new(
            "/tmp/root/b.bin",
            io::Error::new(io::ErrorKind::InvalidData, "stream did not contain valid UTF-8"),
        )));
        collection.push(Ok(Block::new("root/c.txt", "c")));

        assert_eq!(collection.len(), 2);
        assert_eq!(collection.skipped.len(), 1);
        assert!(collection.skipped[0].is_decoding_error());
        assert_eq!(collection.blocks[1].path, "root/c.txt");
    }
}

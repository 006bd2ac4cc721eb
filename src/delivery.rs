/*!
 * Delivery of a collection to the clipboard
 */

use crate::clipboard::Clipboard;
use crate::error::Result;
use crate::types::Collection;

/// What was handed to the clipboard
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Delivery {
    /// Number of blocks in the copied document
    pub blocks: usize,
    /// Number of files left out
    pub skipped: usize,
    /// Size of the copied document in bytes
    pub bytes: usize,
}

impl Delivery {
    /// Confirmation line printed after a successful copy
    pub fn confirmation(&self) -> String {
        format!("Markdown copied to clipboard. Total files: {}", self.blocks)
    }
}

/// Render the collection and copy it to `clipboard`
///
/// The block count comes from the collection itself, never from the
/// rendered text.
pub fn deliver<C>(collection: &Collection, clipboard: &C) -> Result<Delivery>
where
    C: Clipboard + ?Sized,
{
    let markdown = collection.to_markdown();
    clipboard.copy_to_clipboard(&markdown)?;

    Ok(Delivery {
        blocks: collection.len(),
        skipped: collection.skipped.len(),
        bytes: markdown.len(),
    })
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fs;
    use std::sync::Arc;

    use indicatif::ProgressBar;
    use tempfile::tempdir;

    use super::*;
    use crate::clipboard::{self, ClipboardError};
    use crate::collector::Collector;
    use crate::config::Config;
    use crate::error::ClipMdError;
    use crate::types::Block;

    #[derive(Default)]
    struct RecordingClipboard {
        copied: RefCell<Vec<String>>,
    }

    impl Clipboard for RecordingClipboard {
        fn copy_to_clipboard(&self, text: &str) -> clipboard::Result<()> {
            self.copied.borrow_mut().push(text.to_string());
            Ok(())
        }
    }

    struct BrokenClipboard;

    impl Clipboard for BrokenClipboard {
        fn copy_to_clipboard(&self, _text: &str) -> clipboard::Result<()> {
            Err(ClipboardError::NoClipboardFound)
        }
    }

    #[test]
    fn test_empty_collection_copies_empty_string() {
        let clipboard = RecordingClipboard::default();
        let delivery = deliver(&Collection::new("/tmp/empty"), &clipboard).unwrap();

        assert_eq!(*clipboard.copied.borrow(), vec![String::new()]);
        assert_eq!(delivery.blocks, 0);
        assert_eq!(
            delivery.confirmation(),
            "Markdown copied to clipboard. Total files: 0"
        );
    }

    #[test]
    fn test_undecodable_tree_delivers_nothing() {
        let temp_dir = tempdir().unwrap();
        fs::write(temp_dir.path().join("photo.jpg"), [0xff, 0xd8, 0xff, 0xe0]).unwrap();

        let collection =
            Collector::new(Config::new(temp_dir.path()), Arc::new(ProgressBar::hidden())).collect();
        let clipboard = RecordingClipboard::default();
        let delivery = deliver(&collection, &clipboard).unwrap();

        assert_eq!(*clipboard.copied.borrow(), vec![String::new()]);
        assert_eq!(delivery.blocks, 0);
        assert_eq!(delivery.skipped, 1);
        assert_eq!(
            delivery.confirmation(),
            "Markdown copied to clipboard. Total files: 0"
        );
    }

    #[test]
    fn test_count_ignores_fences_inside_content() {
        let mut collection = Collection::new("/tmp/docs");
        collection.push(Ok(Block::new(
            "docs/README.md",
            "Example:\n```rust\nfn main() {}\n```",
        )));

        let clipboard = RecordingClipboard::default();
        let delivery = deliver(&collection, &clipboard).unwrap();

        assert_eq!(delivery.blocks, 1);
        assert_eq!(clipboard.copied.borrow()[0].matches("```").count(), 4);
        assert_eq!(delivery.bytes, clipboard.copied.borrow()[0].len());
    }

    #[test]
    fn test_clipboard_failure_propagates() {
        let result = deliver(&Collection::new("/tmp/x"), &BrokenClipboard);
        assert!(matches!(
            result,
            Err(ClipMdError::Clipboard(ClipboardError::NoClipboardFound))
        ));
    }
}

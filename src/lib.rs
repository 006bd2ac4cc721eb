/*!
 * clipmd - Copy a directory's file contents to the clipboard as Markdown
 *
 * Walks a directory tree, reads every text file and renders each one as a
 * fenced code block labeled with its path, ready to paste as LLM context.
 */

pub mod clipboard;
pub mod collector;
pub mod config;
pub mod delivery;
pub mod error;
pub mod markdown;
pub mod report;
pub mod types;
pub mod utils;


// Re-export main components for easier access
pub use clipboard::{Clipboard, SystemClipboard};
pub use collector::{collect, Collector};
pub use config::Config;
pub use delivery::{deliver, Delivery};
pub use error::{ClipMdError, Result, UnreadableFile};
pub use report::{CollectionReport, Reporter};
pub use types::{Block, Collection, SkippedFile};

/// Version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/*!
 * Markdown rendering for collected files
 */

use crate::types::Block;

/// Code fence opening and closing every block
pub const FENCE: &str = "```";

/// Separator placed between consecutive blocks
pub const BLOCK_SEPARATOR: &str = "\n\n";

/// Render one block: fence, path comment, blank line, content, fence
pub fn render_block(block: &Block) -> String {
    let mut out = String::with_capacity(block.path.len() + block.content.len() + 16);
    write_block(&mut out, block);
    out
}

/// Render all blocks joined by a blank line
///
/// An empty slice renders as an empty string.
pub fn render(blocks: &[Block]) -> String {
    let capacity = blocks
        .iter()
        .map(|b| b.path.len() + b.content.len() + 16)
        .sum();
    let mut out = String::with_capacity(capacity);

    for (i, block) in blocks.iter().enumerate() {
        if i > 0 {
            out.push_str(BLOCK_SEPARATOR);
        }
        write_block(&mut out, block);
    }

    out
}

fn write_block(out: &mut String, block: &Block) {
    out.push_str(FENCE);
    out.push_str("\n// ");
    out.push_str(&block.path);
    out.push_str("\n\n");
    out.push_str(&block.content);
    out.push('\n');
    out.push_str(FENCE);
}

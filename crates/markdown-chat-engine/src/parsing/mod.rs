//! # Message Parsing
//!
//! Two-pass parsing of assistant message text:
//!
//! 1. **Block segmentation** (`blocks`): a single forward scan over the lines,
//!    classifying each into a heading, list run, code fence, blank line or
//!    paragraph.
//! 2. **Inline tokenization** (`inline`): the text of headings, paragraphs and
//!    list items is split into styled spans.
//!
//! Both passes are total: any input produces a result, and unrecognised
//! syntax degrades to `Paragraph` / `PlainText`.

pub mod blocks;
pub mod inline;
pub mod lines;
pub mod snapshot;

#[cfg(test)]
mod tests;

use blocks::{Block, BlockBuilder, BlockNode, MarkdownLineClassifier};
use inline::InlineSpan;
use lines::lines_with_spans;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedDoc {
    pub blocks: Vec<BlockNode>,
}

impl ParsedDoc {
    /// Number of source lines the document was built from.
    pub fn line_count(&self) -> usize {
        self.blocks.last().map_or(0, |b| b.lines.end)
    }
}

pub fn parse_document(text: &str) -> ParsedDoc {
    let classifier = MarkdownLineClassifier;
    let mut builder = BlockBuilder::new();

    for lr in lines_with_spans(text) {
        let lc = classifier.classify(&lr);
        builder.push(lc);
    }

    ParsedDoc {
        blocks: builder.finish(),
    }
}

/// Splits `text` into block-level units in source order.
pub fn segment(text: &str) -> Vec<Block> {
    parse_document(text)
        .blocks
        .into_iter()
        .map(|node| node.block)
        .collect()
}

/// Splits one block's text into inline spans.
pub fn tokenize(text: &str) -> Vec<InlineSpan> {
    inline::parse_inline(text)
}

/// Inline runs for a block: one per heading/paragraph, one per list item.
///
/// Code fences are raw zones and blank lines carry no text, so both yield
/// no runs.
pub fn parse_inline_for_block(b: &Block) -> Vec<Vec<InlineSpan>> {
    match b {
        Block::Heading { text, .. } | Block::Paragraph(text) => vec![tokenize(text)],
        Block::OrderedList(items) | Block::UnorderedList(items) => {
            items.iter().map(|item| tokenize(item)).collect()
        }
        Block::CodeFence { .. } | Block::BlankLine => vec![],
    }
}

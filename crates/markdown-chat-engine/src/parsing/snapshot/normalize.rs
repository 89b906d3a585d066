use std::fmt;

use crate::parsing::{
    ParsedDoc,
    blocks::{Block, BlockNode},
    inline::InlineSpan,
    parse_inline_for_block,
};

/// Outline of a parsed document, one entry per block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snap {
    pub blocks: Vec<BlockSnap>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockSnap {
    pub kind: String,
    pub lines: (usize, usize),
    /// Verbatim code lines (fences only).
    pub code: Vec<String>,
    /// Inline runs, one per heading/paragraph or list item.
    pub inline: Vec<Vec<String>>,
    /// True for list blocks, whose runs print as items.
    pub list: bool,
}

pub fn normalize(doc: &ParsedDoc) -> Snap {
    Snap {
        blocks: doc.blocks.iter().map(block_snap).collect(),
    }
}

fn block_snap(node: &BlockNode) -> BlockSnap {
    let kind = match &node.block {
        Block::Heading { level, .. } => format!("Heading({})", level.depth()),
        Block::CodeFence { language, .. } if node.is_unterminated_fence() => {
            format!("CodeFence({language}, open)")
        }
        Block::CodeFence { language, .. } => format!("CodeFence({language})"),
        other => other.kind_name().to_string(),
    };

    let code = match &node.block {
        Block::CodeFence { lines, .. } => lines.clone(),
        _ => vec![],
    };

    let inline = parse_inline_for_block(&node.block)
        .iter()
        .map(|run| run.iter().map(span_snap).collect())
        .collect();

    BlockSnap {
        kind,
        lines: (node.lines.start, node.lines.end),
        code,
        inline,
        list: matches!(node.block, Block::OrderedList(_) | Block::UnorderedList(_)),
    }
}

fn span_snap(span: &InlineSpan) -> String {
    match span {
        InlineSpan::Link { text, url } => format!("Link({text:?} -> {url:?})"),
        other => format!("{}({:?})", other.kind_name(), other.text()),
    }
}

impl fmt::Display for Snap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.blocks {
            writeln!(f, "{} {}..{}", b.kind, b.lines.0, b.lines.1)?;
            for line in &b.code {
                if line.is_empty() {
                    writeln!(f, "  |")?;
                } else {
                    writeln!(f, "  | {line}")?;
                }
            }
            let bullet = if b.list { "-" } else { ">" };
            for run in &b.inline {
                writeln!(f, "  {bullet} {}", run.join(" "))?;
            }
        }
        Ok(())
    }
}

use crate::parsing::lines::LineSpan;

use super::{
    classify::{LineClass, LineKind},
    kinds::CodeFence,
    types::{Block, BlockNode},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ListKind {
    Ordered,
    Unordered,
}

#[derive(Debug)]
enum LeafState {
    None,
    List {
        kind: ListKind,
        start: usize,
        items: Vec<String>,
    },
    Fence {
        language: String,
        start: usize,
        lines: Vec<String>,
    },
}

/// Builds blocks from classified lines, one line at a time.
///
/// At most one multi-line block (a list run or a code fence) is open at once.
/// Every other line is emitted as its own block immediately.
pub struct BlockBuilder {
    leaf: LeafState,
    next_line: usize,
    out: Vec<BlockNode>,
}

impl BlockBuilder {
    pub fn new() -> Self {
        Self {
            leaf: LeafState::None,
            next_line: 0,
            out: vec![],
        }
    }

    pub fn push(&mut self, c: LineClass<'_>) {
        self.next_line = c.line + 1;

        if self.in_fence() {
            self.consume_fence_line(&c);
            return;
        }

        if self.extend_list(&c) {
            return;
        }
        self.flush_list();

        match c.kind {
            LineKind::FenceMarker(sig) => {
                self.leaf = LeafState::Fence {
                    language: sig.language,
                    start: c.line,
                    lines: vec![],
                };
            }
            LineKind::Heading { level, text } => self.emit_line(
                c.line,
                Block::Heading {
                    level,
                    text: text.to_string(),
                },
            ),
            LineKind::OrderedItem(item) => self.open_list(ListKind::Ordered, c.line, item),
            LineKind::UnorderedItem(item) => self.open_list(ListKind::Unordered, c.line, item),
            LineKind::Blank => self.emit_line(c.line, Block::BlankLine),
            LineKind::Text => self.emit_line(c.line, Block::Paragraph(c.text.to_string())),
        }
    }

    pub fn finish(mut self) -> Vec<BlockNode> {
        // EOF flush
        self.flush_list();
        self.flush_fence();
        self.out
    }

    fn in_fence(&self) -> bool {
        matches!(self.leaf, LeafState::Fence { .. })
    }

    fn emit_line(&mut self, line: usize, block: Block) {
        self.out.push(BlockNode {
            block,
            lines: LineSpan {
                start: line,
                end: line + 1,
            },
        });
    }

    fn open_list(&mut self, kind: ListKind, line: usize, item: &str) {
        self.leaf = LeafState::List {
            kind,
            start: line,
            items: vec![item.to_string()],
        };
    }

    /// Appends the line to the open list run if it is an item of the same type.
    fn extend_list(&mut self, c: &LineClass<'_>) -> bool {
        let LeafState::List { kind, items, .. } = &mut self.leaf else {
            return false;
        };
        match (*kind, &c.kind) {
            (ListKind::Ordered, LineKind::OrderedItem(item))
            | (ListKind::Unordered, LineKind::UnorderedItem(item)) => {
                items.push(item.to_string());
                true
            }
            _ => false,
        }
    }

    fn consume_fence_line(&mut self, c: &LineClass<'_>) {
        let closing = match &c.kind {
            LineKind::FenceMarker(sig) => CodeFence::closes(Some(sig)),
            _ => false,
        };
        if closing {
            // The closing marker is consumed but not part of the code.
            self.flush_fence();
        } else if let LeafState::Fence { lines, .. } = &mut self.leaf {
            lines.push(c.text.to_string());
        }
    }

    /// Emits the open list run, ending just before the current line.
    fn flush_list(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::List { kind, start, items } = prev {
            let end = start + items.len();
            let block = match kind {
                ListKind::Ordered => Block::OrderedList(items),
                ListKind::Unordered => Block::UnorderedList(items),
            };
            self.out.push(BlockNode {
                block,
                lines: LineSpan { start, end },
            });
        } else {
            self.leaf = prev; // put back non-list leaf (e.g. fence)
        }
    }

    /// Emits the open fence, closed or not, up to the last line pushed.
    fn flush_fence(&mut self) {
        let prev = std::mem::replace(&mut self.leaf, LeafState::None);
        if let LeafState::Fence {
            language,
            start,
            lines,
        } = prev
        {
            self.out.push(BlockNode {
                block: Block::CodeFence { language, lines },
                lines: LineSpan {
                    start,
                    end: self.next_line,
                },
            });
        } else {
            self.leaf = prev;
        }
    }
}

impl Default for BlockBuilder {
    fn default() -> Self {
        Self::new()
    }
}

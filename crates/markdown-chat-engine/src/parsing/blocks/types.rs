use crate::parsing::lines::LineSpan;

/// Heading depth. Only the three shallowest ATX levels are recognised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HeadingLevel {
    H1 = 1,
    H2 = 2,
    H3 = 3,
}

impl HeadingLevel {
    /// Number of `#` characters in the marker.
    pub fn depth(self) -> usize {
        self as usize
    }
}

/// A block-level unit of a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    /// `# `, `## ` or `### ` heading; `text` excludes the marker.
    Heading { level: HeadingLevel, text: String },
    /// A run of `N. ` items with the numeric markers stripped.
    OrderedList(Vec<String>),
    /// A run of `- ` / `* ` items with the markers stripped.
    UnorderedList(Vec<String>),
    /// A fenced code block. `lines` excludes the fence marker lines.
    CodeFence { language: String, lines: Vec<String> },
    /// A line containing only whitespace.
    BlankLine,
    /// A single line of text that matched nothing else.
    Paragraph(String),
}

impl Block {
    /// Short name of the variant, used in snapshots and logs.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Block::Heading { .. } => "Heading",
            Block::OrderedList(_) => "OrderedList",
            Block::UnorderedList(_) => "UnorderedList",
            Block::CodeFence { .. } => "CodeFence",
            Block::BlankLine => "BlankLine",
            Block::Paragraph(_) => "Paragraph",
        }
    }

    /// The code of a fence joined with `\n`, as handed to a copy action.
    pub fn code(&self) -> Option<String> {
        match self {
            Block::CodeFence { lines, .. } => Some(lines.join("\n")),
            _ => None,
        }
    }
}

/// A parsed block together with the source lines it consumed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockNode {
    pub block: Block,
    /// Lines consumed, including fence marker lines.
    pub lines: LineSpan,
}

impl BlockNode {
    /// True for a code fence that was closed implicitly at end of input.
    ///
    /// While a reply is still streaming this is the normal state of the last
    /// fence in the text.
    pub fn is_unterminated_fence(&self) -> bool {
        match &self.block {
            Block::CodeFence { lines, .. } => self.lines.len() == lines.len() + 1,
            _ => false,
        }
    }
}

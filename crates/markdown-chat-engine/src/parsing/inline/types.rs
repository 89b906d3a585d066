/// A styled or linked run of text within a block.
///
/// Delimiters are stripped; each variant carries only the visible text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InlineSpan {
    /// Text that isn't part of any special construct.
    PlainText(String),
    /// `**text**`
    Bold(String),
    /// `*text*`
    Italic(String),
    /// `` `code` ``. Content is not parsed further.
    InlineCode(String),
    /// `[text](url)`
    Link { text: String, url: String },
}

impl InlineSpan {
    /// Short name of the variant, used in snapshots.
    pub fn kind_name(&self) -> &'static str {
        match self {
            InlineSpan::PlainText(_) => "Text",
            InlineSpan::Bold(_) => "Bold",
            InlineSpan::Italic(_) => "Italic",
            InlineSpan::InlineCode(_) => "Code",
            InlineSpan::Link { .. } => "Link",
        }
    }

    /// The text a reader sees for this span.
    pub fn text(&self) -> &str {
        match self {
            InlineSpan::PlainText(t)
            | InlineSpan::Bold(t)
            | InlineSpan::Italic(t)
            | InlineSpan::InlineCode(t) => t,
            InlineSpan::Link { text, .. } => text,
        }
    }
}

use crate::parsing::{
    ParsedDoc,
    blocks::{
        Block, BlockNode,
        kinds::{CodeFence, OrderedList, UnorderedList},
    },
    lines::lines_with_spans,
};

/// Panics if `doc` is not a faithful segmentation of `source`.
///
/// Checks that block line spans are contiguous and cover every line exactly
/// once, and that each block reconstructs its source lines, allowing only the
/// list markers and fence marker lines to be stripped.
pub fn check(source: &str, doc: &ParsedDoc) {
    let lines: Vec<&str> = lines_with_spans(source).map(|l| l.text).collect();

    let mut expected_start = 0;
    for b in &doc.blocks {
        assert!(
            b.lines.start == expected_start && !b.lines.is_empty(),
            "block lines not contiguous: {:?} (expected start {})",
            b.lines,
            expected_start
        );
        assert!(
            b.lines.end <= lines.len(),
            "block lines out of bounds: {:?} (line count: {})",
            b.lines,
            lines.len()
        );
        check_block(b, &lines[b.lines.start..b.lines.end]);
        expected_start = b.lines.end;
    }
    assert_eq!(
        doc.line_count(),
        lines.len(),
        "blocks do not cover all {} lines",
        lines.len()
    );
}

fn check_block(b: &BlockNode, src: &[&str]) {
    match &b.block {
        Block::Heading { level, text } => {
            assert_eq!(src.len(), 1, "heading spans one line");
            let rebuilt = format!("{} {text}", "#".repeat(level.depth()));
            assert_eq!(src[0], rebuilt, "heading text lost characters");
        }
        Block::Paragraph(text) => {
            assert_eq!(src, [text.as_str()], "paragraph is not its source line");
        }
        Block::BlankLine => {
            assert!(
                src.len() == 1 && src[0].trim().is_empty(),
                "blank block over non-blank line {src:?}"
            );
        }
        Block::OrderedList(items) => {
            let stripped: Vec<_> = src.iter().map(|l| OrderedList::item(l)).collect();
            let expected: Vec<_> = items.iter().map(|i| Some(i.as_str())).collect();
            assert_eq!(stripped, expected, "ordered list items differ from source");
        }
        Block::UnorderedList(items) => {
            let stripped: Vec<_> = src.iter().map(|l| UnorderedList::item(l)).collect();
            let expected: Vec<_> = items.iter().map(|i| Some(i.as_str())).collect();
            assert_eq!(stripped, expected, "unordered list items differ from source");
        }
        Block::CodeFence { language, lines } => {
            let opener = CodeFence::sig(src[0]).expect("fence block must open on a marker");
            assert_eq!(&opener.language, language, "fence language mismatch");
            let closed = !b.is_unterminated_fence();
            let markers = if closed { 2 } else { 1 };
            assert_eq!(src.len(), lines.len() + markers, "fence line count mismatch");
            assert_eq!(
                &src[1..1 + lines.len()],
                lines.as_slice(),
                "fence content is not verbatim"
            );
            if closed {
                assert!(
                    CodeFence::sig(src[src.len() - 1]).is_some(),
                    "closed fence must end on a marker"
                );
            }
        }
    }
}

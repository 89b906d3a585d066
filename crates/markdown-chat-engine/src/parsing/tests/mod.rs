//! Integration tests for the parsing module.
//!
//! Fixtures (.md) and snapshots (.snap) are co-located in `fixtures/`.

use pretty_assertions::assert_eq;

use crate::parsing::{
    blocks::{Block, HeadingLevel},
    inline::InlineSpan,
    parse_document, parse_inline_for_block, segment,
    snapshot::{invariants, normalize},
    tokenize,
};

// Fixture-based snapshot tests

#[test]
fn fixture_numbered_steps() {
    assert_fixture("numbered_steps");
}

#[test]
fn fixture_code_sample() {
    assert_fixture("code_sample");
}

#[test]
fn fixture_advantages() {
    assert_fixture("advantages");
}

#[test]
fn fixture_priority_inline() {
    assert_fixture("priority_inline");
}

fn assert_fixture(name: &str) {
    let fixtures_dir = format!("{}/src/parsing/tests/fixtures", env!("CARGO_MANIFEST_DIR"));
    let md = std::fs::read_to_string(format!("{fixtures_dir}/{name}.md")).unwrap();

    let doc = parse_document(&md);
    invariants(&md, &doc);

    let snap = normalize(&doc);
    insta::with_settings!({
        snapshot_path => fixtures_dir.as_str(),
        prepend_module_to_snapshot => false,
    }, {
        insta::assert_snapshot!(name, snap.to_string());
    });
}

// Invariant tests

#[test]
fn plain_lines_become_one_paragraph_each() {
    let md = "first line\nsecond line\n\nthird line";
    assert_eq!(
        segment(md),
        vec![
            Block::Paragraph("first line".into()),
            Block::Paragraph("second line".into()),
            Block::BlankLine,
            Block::Paragraph("third line".into()),
        ]
    );
}

#[test]
fn single_code_fence() {
    assert_eq!(
        segment("```js\nlet x=1;\n```"),
        vec![Block::CodeFence {
            language: "js".into(),
            lines: vec!["let x=1;".into()],
        }]
    );
}

#[test]
fn ordered_list_with_trailing_newline() {
    assert_eq!(
        segment("1. a\n2. b\n"),
        vec![Block::OrderedList(vec!["a".into(), "b".into()])]
    );
}

#[test]
fn numbers_are_not_resequenced() {
    assert_eq!(
        segment("3. c\n1. a\n10. j"),
        vec![Block::OrderedList(vec!["c".into(), "a".into(), "j".into()])]
    );
}

#[test]
fn headings_of_each_level() {
    assert_eq!(
        segment("# One\n## Two\n### Three"),
        vec![
            Block::Heading {
                level: HeadingLevel::H1,
                text: "One".into()
            },
            Block::Heading {
                level: HeadingLevel::H2,
                text: "Two".into()
            },
            Block::Heading {
                level: HeadingLevel::H3,
                text: "Three".into()
            },
        ]
    );
}

#[test]
fn unterminated_fence_swallows_the_rest() {
    let md = "```\n# not a heading\n- not a list";
    let doc = parse_document(md);
    invariants(md, &doc);
    assert_eq!(doc.blocks.len(), 1);
    assert_eq!(
        doc.blocks[0].block,
        Block::CodeFence {
            language: "plaintext".into(),
            lines: vec!["# not a heading".into(), "- not a list".into()],
        }
    );
    assert!(doc.blocks[0].is_unterminated_fence());
}

#[test]
fn fence_content_is_not_inline_parsed() {
    let blocks = segment("```\n**not bold**\n```");
    assert!(parse_inline_for_block(&blocks[0]).is_empty());
    assert_eq!(blocks[0].code(), Some("**not bold**".to_string()));
}

#[test]
fn list_items_are_inline_parsed() {
    let blocks = segment("- **a** b\n- `c`");
    assert_eq!(
        parse_inline_for_block(&blocks[0]),
        vec![
            vec![
                InlineSpan::Bold("a".into()),
                InlineSpan::PlainText(" b".into()),
            ],
            vec![InlineSpan::InlineCode("c".into())],
        ]
    );
}

/// Test empty document produces no blocks.
#[test]
fn empty_document() {
    assert!(parse_document("").blocks.is_empty());
}

/// Test whitespace-only lines are blank blocks, one per line.
#[test]
fn blank_lines_only() {
    let md = "\n  \n\t";
    let doc = parse_document(md);
    invariants(md, &doc);
    assert_eq!(
        segment(md),
        vec![Block::BlankLine, Block::BlankLine, Block::BlankLine]
    );
}

#[test]
fn parsing_is_pure() {
    let md = "# T\n1. a *b*\n```\nx\n";
    assert_eq!(parse_document(md), parse_document(md));
    assert_eq!(tokenize("a *b* c **d** e"), tokenize("a *b* c **d** e"));
}

/// Every prefix of a reply (as seen while it streams) segments cleanly.
#[test]
fn every_streaming_prefix_holds_invariants() {
    let md = "Intro **bold**\n\n```rust\nfn main() {}\n```\n- a\n- b\n1. c";
    let mut end = 0;
    while end <= md.len() {
        let prefix = &md[..end];
        invariants(prefix, &parse_document(prefix));
        end += 1;
    }
}

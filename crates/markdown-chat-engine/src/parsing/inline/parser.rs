use super::{kinds::InlineKind, types::InlineSpan};

/// Parses inline content into a sequence of [`InlineSpan`]s.
///
/// # Priority Over Position
/// On every scan the kinds in [`InlineKind::PRIORITY`] are tried in order
/// against the whole remainder, and the first kind that matches anywhere is
/// applied. A later bold therefore beats an earlier italic in the same scan.
///
/// # Returns
/// Spans covering the entire input, delimiters excluded. Text between or
/// after constructs is emitted as `InlineSpan::PlainText`; no empty plain text
/// spans are produced.
pub fn parse_inline(s: &str) -> Vec<InlineSpan> {
    let mut out = vec![];
    let mut rest = s;

    'scan: while !rest.is_empty() {
        for kind in InlineKind::PRIORITY {
            let Some(caps) = kind.regex().captures(rest) else {
                continue;
            };
            let Some(full) = caps.get(0) else {
                continue;
            };
            if full.start() > 0 {
                out.push(InlineSpan::PlainText(rest[..full.start()].to_string()));
            }
            out.push(kind.span(&caps));
            rest = &rest[full.end()..];
            continue 'scan;
        }

        // No construct left anywhere in the remainder.
        out.push(InlineSpan::PlainText(rest.to_string()));
        break;
    }

    out
}

//! Line tokenizer for the restricted markup subset.
//!
//! # Responsibility
//! - Turn one line of raw text into a block token wrapping inline tokens,
//!   applying the passes in their required order: heading prefixes on the
//!   raw line, then bold, italic, bracket spans, then list/quote
//!   resolution on whatever literal text is still leading the line.
//!
//! # Invariants
//! - Pass order is observable: a leading `*` consumed by italic pairing can
//!   no longer act as a list marker, and heading prefixes beat everything.
//! - No supported span crosses a line boundary.

use once_cell::sync::Lazy;
use regex::Regex;

static LIST_ITEM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\s*[-+*]\s+(.*)$").expect("valid list item regex"));

/// Inline span. `Text` is literal and passes through verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Inline {
    Text(String),
    Bold(Vec<Inline>),
    Italic(Vec<Inline>),
    Link { label: String, url: String },
    Image { alt: String, url: String },
}

/// Block wrapper for one source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Block {
    Heading { level: u8, content: Vec<Inline> },
    /// Each qualifying line becomes its own standalone single-item list;
    /// adjacent items never merge.
    ListItem(Vec<Inline>),
    Quote(Vec<Inline>),
    Plain(Vec<Inline>),
}

pub(crate) fn tokenize_line(line: &str) -> Block {
    if let Some(rest) = line.strip_prefix("### ") {
        return Block::Heading {
            level: 3,
            content: tokenize_inline(rest),
        };
    }
    if let Some(rest) = line.strip_prefix("## ") {
        return Block::Heading {
            level: 2,
            content: tokenize_inline(rest),
        };
    }
    if let Some(rest) = line.strip_prefix("# ") {
        return Block::Heading {
            level: 1,
            content: tokenize_inline(rest),
        };
    }
    resolve_block(tokenize_inline(line))
}

/// Runs the inline passes over one stretch of text in their required order.
pub(crate) fn tokenize_inline(text: &str) -> Vec<Inline> {
    let nodes = vec![Inline::Text(text.to_string())];
    let nodes = apply_to_text_nodes(nodes, split_bold);
    let nodes = apply_to_text_nodes(nodes, split_italic);
    apply_to_text_nodes(nodes, split_bracket_spans)
}

/// Maps one pass over every literal text node, recursing into spans produced
/// by earlier passes so e.g. italic still applies inside bold content.
fn apply_to_text_nodes(nodes: Vec<Inline>, pass: fn(&str) -> Vec<Inline>) -> Vec<Inline> {
    let mut out = Vec::with_capacity(nodes.len());
    for node in nodes {
        match node {
            Inline::Text(text) => out.extend(pass(&text)),
            Inline::Bold(children) => out.push(Inline::Bold(apply_to_text_nodes(children, pass))),
            Inline::Italic(children) => {
                out.push(Inline::Italic(apply_to_text_nodes(children, pass)))
            }
            done => out.push(done),
        }
    }
    out
}

fn split_bold(text: &str) -> Vec<Inline> {
    split_delimited(text, "**", |inner| {
        Inline::Bold(vec![Inline::Text(inner.to_string())])
    })
}

/// Pairs single `*` left to right. Runs after bold, so any stray single `*`
/// still pairs up; that is the observed behavior, not a bug to fix.
fn split_italic(text: &str) -> Vec<Inline> {
    split_delimited(text, "*", |inner| {
        Inline::Italic(vec![Inline::Text(inner.to_string())])
    })
}

/// Non-greedy left-to-right delimiter pairing. An unpaired opener stays
/// literal for later passes to see.
fn split_delimited(text: &str, delimiter: &str, span: impl Fn(&str) -> Inline) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut rest = text;
    loop {
        let Some(open) = rest.find(delimiter) else {
            break;
        };
        let after_open = &rest[open + delimiter.len()..];
        let Some(close) = after_open.find(delimiter) else {
            break;
        };
        if open > 0 {
            out.push(Inline::Text(rest[..open].to_string()));
        }
        out.push(span(&after_open[..close]));
        rest = &after_open[close + delimiter.len()..];
    }
    if !rest.is_empty() {
        out.push(Inline::Text(rest.to_string()));
    }
    out
}

/// Single scan for `[label](url)` and `![alt](url)` spans. The bracket
/// pattern alone cannot tell the two shapes apart, so a `!` immediately
/// before the opening bracket explicitly selects the image form.
fn split_bracket_spans(text: &str) -> Vec<Inline> {
    let mut out = Vec::new();
    let mut rest = text;
    'scan: loop {
        let mut search_from = 0;
        while let Some(offset) = rest[search_from..].find('[') {
            let open = search_from + offset;
            if let Some((node, end)) = bracket_span_at(rest, open) {
                let lead_end = match node {
                    Inline::Image { .. } => open - 1,
                    _ => open,
                };
                if lead_end > 0 {
                    out.push(Inline::Text(rest[..lead_end].to_string()));
                }
                out.push(node);
                rest = &rest[end..];
                continue 'scan;
            }
            search_from = open + 1;
        }
        break;
    }
    if !rest.is_empty() {
        out.push(Inline::Text(rest.to_string()));
    }
    out
}

/// Parses the bracket span whose `[` sits at byte `open`, if one completes:
/// label runs to the first `](`, the url to the first `)` after that.
fn bracket_span_at(text: &str, open: usize) -> Option<(Inline, usize)> {
    let label_start = open + 1;
    let label_len = text[label_start..].find("](")?;
    let label = &text[label_start..label_start + label_len];
    let url_start = label_start + label_len + 2;
    let url_len = text[url_start..].find(')')?;
    let url = &text[url_start..url_start + url_len];
    let end = url_start + url_len + 1;

    let node = if open > 0 && text.as_bytes()[open - 1] == b'!' {
        Inline::Image {
            alt: label.to_string(),
            url: url.to_string(),
        }
    } else {
        Inline::Link {
            label: label.to_string(),
            url: url.to_string(),
        }
    };
    Some((node, end))
}

/// Post-inline block resolution. List and quote markers only count when
/// they survived the inline passes as leading literal text.
fn resolve_block(mut nodes: Vec<Inline>) -> Block {
    enum Marker {
        List(String),
        Quote(String),
    }

    let marker = match nodes.first() {
        Some(Inline::Text(first)) => {
            if let Some(caps) = LIST_ITEM_RE.captures(first) {
                Some(Marker::List(
                    caps.get(1).map_or(String::new(), |m| m.as_str().to_string()),
                ))
            } else {
                first
                    .strip_prefix("> ")
                    .map(|stripped| Marker::Quote(stripped.to_string()))
            }
        }
        _ => None,
    };

    match marker {
        Some(Marker::List(item)) => {
            nodes[0] = Inline::Text(item);
            Block::ListItem(nodes)
        }
        Some(Marker::Quote(rest)) => {
            nodes[0] = Inline::Text(rest);
            Block::Quote(nodes)
        }
        None => Block::Plain(nodes),
    }
}

#[cfg(test)]
mod tests {
    use super::{tokenize_inline, tokenize_line, Block, Inline};

    fn text(value: &str) -> Inline {
        Inline::Text(value.to_string())
    }

    #[test]
    fn heading_prefix_must_match_exactly() {
        assert!(matches!(
            tokenize_line("### deep"),
            Block::Heading { level: 3, .. }
        ));
        assert!(matches!(
            tokenize_line("## mid"),
            Block::Heading { level: 2, .. }
        ));
        assert!(matches!(tokenize_line("# top"), Block::Heading { level: 1, .. }));
        // Four hashes fit none of the three prefixes.
        assert!(matches!(tokenize_line("#### too deep"), Block::Plain(_)));
        assert!(matches!(tokenize_line("#nospace"), Block::Plain(_)));
    }

    #[test]
    fn bold_runs_before_italic() {
        let nodes = tokenize_inline("**a** *b*");
        assert_eq!(
            nodes,
            vec![
                Inline::Bold(vec![text("a")]),
                text(" "),
                Inline::Italic(vec![text("b")]),
            ]
        );
    }

    #[test]
    fn italic_applies_inside_bold_content() {
        let nodes = tokenize_inline("**a *b* c**");
        assert_eq!(
            nodes,
            vec![Inline::Bold(vec![
                text("a "),
                Inline::Italic(vec![text("b")]),
                text(" c"),
            ])]
        );
    }

    #[test]
    fn unpaired_double_star_is_left_for_the_italic_pass() {
        let nodes = tokenize_inline("**a");
        assert_eq!(nodes, vec![Inline::Italic(vec![text("")]), text("a")]);
    }

    #[test]
    fn bang_selects_image_form() {
        let nodes = tokenize_inline("see ![alt](pic.png) and [go](there)");
        assert_eq!(
            nodes,
            vec![
                text("see "),
                Inline::Image {
                    alt: "alt".to_string(),
                    url: "pic.png".to_string(),
                },
                text(" and "),
                Inline::Link {
                    label: "go".to_string(),
                    url: "there".to_string(),
                },
            ]
        );
    }

    #[test]
    fn incomplete_bracket_span_stays_literal() {
        assert_eq!(tokenize_inline("[a] (b)"), vec![text("[a] (b)")]);
        assert_eq!(tokenize_inline("[a](b"), vec![text("[a](b")]);
    }

    #[test]
    fn list_marker_consumed_by_italic_is_no_longer_a_marker() {
        // `* hello` is a list item, but `* hello *world*` pairs the leading
        // star first and stops being one.
        assert!(matches!(tokenize_line("* hello"), Block::ListItem(_)));
        let block = tokenize_line("* hello *world*");
        assert!(matches!(block, Block::Plain(_)));
    }

    #[test]
    fn quote_requires_exact_prefix() {
        assert!(matches!(tokenize_line("> quoted"), Block::Quote(_)));
        assert!(matches!(tokenize_line(">tight"), Block::Plain(_)));
    }
}

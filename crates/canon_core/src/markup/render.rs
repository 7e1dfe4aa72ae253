//! Serializer from markup tokens to presentational elements.

use crate::markup::token::{Block, Inline};

pub(crate) fn render_block(block: &Block) -> String {
    match block {
        Block::Heading { level, content } => {
            format!("<h{level}>{}</h{level}>", render_inline(content))
        }
        Block::ListItem(content) => format!("<ul><li>{}</li></ul>", render_inline(content)),
        Block::Quote(content) => format!("<blockquote>{}</blockquote>", render_inline(content)),
        Block::Plain(content) => render_inline(content),
    }
}

/// Serializes inline tokens. Literal text is emitted verbatim; links open in
/// a new viewing context.
pub(crate) fn render_inline(nodes: &[Inline]) -> String {
    let mut out = String::new();
    for node in nodes {
        match node {
            Inline::Text(text) => out.push_str(text),
            Inline::Bold(children) => {
                out.push_str("<b>");
                out.push_str(&render_inline(children));
                out.push_str("</b>");
            }
            Inline::Italic(children) => {
                out.push_str("<i>");
                out.push_str(&render_inline(children));
                out.push_str("</i>");
            }
            Inline::Link { label, url } => {
                out.push_str(&format!(
                    "<a href=\"{url}\" target=\"_blank\">{label}</a>"
                ));
            }
            Inline::Image { alt, url } => {
                out.push_str(&format!("<img src=\"{url}\" alt=\"{alt}\">"));
            }
        }
    }
    out
}

//! Tag markup: the `<tag>word</tag>` text form of tagged output.
//!
//! Each token is wrapped in a pair of lowercase tag elements without
//! attributes, and tokens are joined by single spaces:
//!
//! ```text
//! <det>The</det> <jj>big</jj> <nn>cat</nn> <pp>.</pp>
//! ```
//!
//! # Examples
//!
//! ```
//! use engtag::analysis::token::TaggedToken;
//! use engtag::markup;
//! use engtag::tag::Tag;
//!
//! let tokens = vec![TaggedToken::new("big", Tag::Jj), TaggedToken::new("cat", Tag::Nn)];
//! let text = markup::render(&tokens, false);
//! assert_eq!(text, "<jj>big</jj> <nn>cat</nn>");
//! assert_eq!(markup::parse(&text), tokens);
//! ```

use log::debug;

use crate::analysis::token::TaggedToken;
use crate::tag::Tag;

/// Render tagged tokens as markup, using verbose tag names when `verbose`
/// is set.
pub fn render(tokens: &[TaggedToken], verbose: bool) -> String {
    tokens
        .iter()
        .map(|t| t.to_markup(verbose))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Render tagged tokens as `word/TAG` pairs.
pub fn render_readable(tokens: &[TaggedToken], verbose: bool) -> String {
    tokens
        .iter()
        .map(|t| t.to_readable(verbose))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Surfaces of `tokens`, space-joined.
pub fn surface(tokens: &[TaggedToken]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

fn resolve_tag(name: &str) -> Option<Tag> {
    name.parse().ok().or_else(|| Tag::from_verbose_name(name))
}

fn is_element_name(name: &str) -> bool {
    !name.is_empty() && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// Read markup back into tagged tokens.
///
/// Both short and verbose tag names are accepted. Elements with an unknown
/// name, and text outside elements, are skipped.
pub fn parse(markup: &str) -> Vec<TaggedToken> {
    let mut tokens = Vec::new();
    let mut rest = markup;

    while let Some(open) = rest.find('<') {
        let after_open = &rest[open + 1..];
        let Some(name_len) = after_open.find('>') else {
            break;
        };
        let name = &after_open[..name_len];
        if !is_element_name(name) {
            rest = after_open;
            continue;
        }

        let body = &after_open[name_len + 1..];
        let closing = format!("</{name}>");
        let Some(close) = body.find(&closing) else {
            rest = body;
            continue;
        };

        let text = body[..close].trim();
        match resolve_tag(name) {
            Some(tag) if !text.is_empty() => tokens.push(TaggedToken::new(text, tag)),
            Some(_) => {}
            None => debug!("skipping element with unknown tag <{name}>"),
        }
        rest = &body[close + closing.len()..];
    }

    tokens
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse() {
        let tokens = parse("<det>The</det> <nnp>BBC</nnp>  <pp>.</pp>");
        assert_eq!(
            tokens,
            vec![
                TaggedToken::new("The", Tag::Det),
                TaggedToken::new("BBC", Tag::Nnp),
                TaggedToken::new(".", Tag::Pp),
            ]
        );
    }

    #[test]
    fn test_parse_verbose_and_unknown() {
        let tokens = parse("<noun>cat</noun> <zz>what</zz> <vbd>sat</vbd>");
        assert_eq!(
            tokens,
            vec![TaggedToken::new("cat", Tag::Nn), TaggedToken::new("sat", Tag::Vbd)]
        );
    }

    #[test]
    fn test_parse_angle_bracket_surfaces() {
        let tokens = parse("<sym><</sym> <sym>></sym> <nn>a<b</nn>");
        assert_eq!(
            tokens,
            vec![
                TaggedToken::new("<", Tag::Sym),
                TaggedToken::new(">", Tag::Sym),
                TaggedToken::new("a<b", Tag::Nn),
            ]
        );
    }

    #[test]
    fn test_parse_plain_text() {
        assert!(parse("no markup here").is_empty());
        assert!(parse("").is_empty());
        assert!(parse("<nn>unclosed").is_empty());
    }

    #[test]
    fn test_render() {
        let tokens = vec![TaggedToken::new("Go", Tag::Vb), TaggedToken::new("!", Tag::Pp)];
        assert_eq!(render(&tokens, false), "<vb>Go</vb> <pp>!</pp>");
        assert_eq!(render_readable(&tokens, false), "Go/VB !/PP");
        assert_eq!(surface(&tokens), "Go !");
        assert_eq!(render(&[], false), "");
    }
}

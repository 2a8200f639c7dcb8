//! Markup stripping for HTML/XML input.

use lazy_static::lazy_static;
use regex::Regex;

use super::CharFilter;

lazy_static! {
    static ref ELEMENT: Regex = Regex::new(r"<[^<>]*>").unwrap();
}

// `&amp;` goes last so that "&amp;lt;" decodes to "&lt;", not "<".
const ENTITIES: &[(&str, &str)] = &[
    ("&lt;", "<"),
    ("&gt;", ">"),
    ("&quot;", "\""),
    ("&#39;", "'"),
    ("&apos;", "'"),
    ("&nbsp;", " "),
    ("&amp;", "&"),
];

/// A char filter that replaces markup elements with whitespace and decodes
/// the common character entities.
///
/// Elements become a single space so that words on either side of a tag
/// (`one<br>two`) stay separate.
#[derive(Clone, Debug, Default)]
pub struct MarkupCharFilter;

impl MarkupCharFilter {
    pub fn new() -> Self {
        MarkupCharFilter
    }
}

impl CharFilter for MarkupCharFilter {
    fn filter(&self, input: &str) -> String {
        let mut output = ELEMENT.replace_all(input, " ").into_owned();
        for (entity, decoded) in ENTITIES {
            if output.contains(entity) {
                output = output.replace(entity, decoded);
            }
        }
        output
    }

    fn name(&self) -> &'static str {
        "markup"
    }
}

//! Tagged tokens, the unit the tagger produces and the extractors consume.
//!
//! # Examples
//!
//! ```
//! use engtag::analysis::token::TaggedToken;
//! use engtag::tag::Tag;
//!
//! let token = TaggedToken::new("dogs", Tag::Nns);
//! assert_eq!(token.to_string(), "dogs/NNS");
//! assert_eq!(token.to_markup(false), "<nns>dogs</nns>");
//! assert_eq!(token.to_markup(true), "<noun_plural>dogs</noun_plural>");
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::tag::Tag;

/// A surface token and the tag assigned to it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TaggedToken {
    /// The token as it appeared after tokenization.
    pub text: String,

    /// The assigned part-of-speech tag.
    pub tag: Tag,
}

impl TaggedToken {
    pub fn new<S: Into<String>>(text: S, tag: Tag) -> Self {
        TaggedToken {
            text: text.into(),
            tag,
        }
    }

    /// `<tag>text</tag>`, with the verbose tag name when `verbose` is set.
    pub fn to_markup(&self, verbose: bool) -> String {
        let name = if verbose {
            self.tag.verbose_name()
        } else {
            self.tag.as_str()
        };
        format!("<{name}>{}</{name}>", self.text)
    }

    /// `text/TAG`, or `text/VERBOSE_NAME` when `verbose` is set.
    pub fn to_readable(&self, verbose: bool) -> String {
        let name = if verbose {
            self.tag.verbose_name()
        } else {
            self.tag.as_str()
        };
        format!("{}/{}", self.text, name.to_uppercase())
    }

    pub fn is_noun(&self) -> bool {
        self.tag.is_noun()
    }
}

impl fmt::Display for TaggedToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_readable(false))
    }
}

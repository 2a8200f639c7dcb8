//! Tokenizers that turn raw text into word and punctuation tokens.

/// Trait for tokenizers that split text into token strings.
pub trait Tokenizer: Send + Sync {
    /// Tokenize the given text. Tokenizing never fails; blank text yields
    /// no tokens.
    fn tokenize(&self, text: &str) -> Vec<String>;

    /// Get the name of this tokenizer (for debugging and configuration).
    fn name(&self) -> &'static str;
}

pub mod punct;

pub use punct::PunctTokenizer;

/// Word characters as the tokenizer rules understand them.
#[inline]
pub(crate) fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}

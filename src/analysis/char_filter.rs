//! Char filters that pre-process text before it is tokenized.
//!
//! # Available Filters
//!
//! - [`markup::MarkupCharFilter`] - Removes HTML/XML tags and decodes common entities

/// Trait for character filters that transform text before tokenization.
pub trait CharFilter: Send + Sync {
    /// Apply this filter to the input text.
    fn filter(&self, input: &str) -> String;

    /// Get the name of this char filter.
    fn name(&self) -> &'static str;
}

pub mod markup;

pub use markup::MarkupCharFilter;

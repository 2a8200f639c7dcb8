//! Stemmers used to normalize extracted terms.

/// Trait for stemming algorithms.
pub trait Stemmer: Send + Sync {
    /// Stem a word to its root form.
    fn stem(&self, word: &str) -> String;

    /// Get the name of this stemmer.
    fn name(&self) -> &'static str;
}

pub mod identity;
pub mod porter;

pub use identity::IdentityStemmer;
pub use porter::PorterStemmer;

/// The stemmer a tagger uses: Porter when `stem` is enabled, identity otherwise.
pub fn for_config(stem: bool) -> Box<dyn Stemmer> {
    if stem {
        Box::new(PorterStemmer::new())
    } else {
        Box::new(IdentityStemmer::new())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_config() {
        assert_eq!(for_config(true).name(), "porter");
        assert_eq!(for_config(true).stem("dogs"), "dog");
        assert_eq!(for_config(false).name(), "identity");
        assert_eq!(for_config(false).stem("dogs"), "dogs");
    }
}

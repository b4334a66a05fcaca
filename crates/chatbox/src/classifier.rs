//! Utterance classification: maps free text to an intent tag.

pub mod keyword;

pub use keyword::{KeywordClassifier, TagCandidate};

use crate::error::ChatResult;

/// Anything that can label an utterance with a tag.
pub trait Classifier {
    fn predict(&self, text: &str) -> ChatResult<String>;
}

impl<F> Classifier for F
where
    F: Fn(&str) -> ChatResult<String>,
{
    fn predict(&self, text: &str) -> ChatResult<String> {
        self(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ChatError;

    #[test]
    fn closures_act_as_classifiers() {
        let fixed = |text: &str| -> ChatResult<String> {
            match text {
                "hi" => Ok("greeting".to_string()),
                _ => Err(ChatError::Unclassified),
            }
        };
        assert_eq!(fixed.predict("hi").expect("predict"), "greeting");
        assert!(matches!(fixed.predict("what"), Err(ChatError::Unclassified)));
    }

    #[test]
    fn trait_objects_delegate() {
        let fixed = |_: &str| -> ChatResult<String> { Ok("any".to_string()) };
        let classifier: &dyn Classifier = &fixed;
        assert_eq!(classifier.predict("whatever").expect("predict"), "any");
    }
}

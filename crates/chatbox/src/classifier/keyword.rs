use super::Classifier;
use crate::error::{ChatError, ChatResult};
use crate::intent::IntentCatalog;

/// A tag that scored above zero for some input.
#[derive(Debug, Clone, PartialEq)]
pub struct TagCandidate {
    pub tag: String,
    pub score: u32,
}

#[derive(Debug, Clone)]
struct TagProfile {
    tag: String,
    /// Distinct lowercased words drawn from the tag's patterns.
    keywords: Vec<String>,
    /// Normalized patterns, each padded with a space on both sides.
    patterns: Vec<String>,
}

/// Classifies utterances by overlap with each intent's example patterns.
///
/// Scoring:
/// - Keyword match: +1 per distinct pattern word present in the input
/// - Pattern match: +4 per whole pattern found in the input
///
/// Ties go to the tag that appears first in the catalog.
#[derive(Debug, Clone, Default)]
pub struct KeywordClassifier {
    profiles: Vec<TagProfile>,
}

impl KeywordClassifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build profiles for every tag in `catalog`. Repeated tags fold into
    /// the profile of their first occurrence.
    pub fn from_catalog(catalog: &IntentCatalog) -> Self {
        let mut classifier = Self::new();
        for entry in catalog.entries() {
            classifier.register(&entry.tag, &entry.patterns);
        }
        tracing::debug!(
            "keyword classifier built with {} tags",
            classifier.profiles.len()
        );
        classifier
    }

    /// Add example patterns for `tag`.
    pub fn register(&mut self, tag: &str, patterns: &[String]) {
        let index = match self.profiles.iter().position(|p| p.tag == tag) {
            Some(index) => index,
            None => {
                self.profiles.push(TagProfile {
                    tag: tag.to_string(),
                    keywords: Vec::new(),
                    patterns: Vec::new(),
                });
                self.profiles.len() - 1
            }
        };
        let profile = &mut self.profiles[index];

        for pattern in patterns {
            let words = tokenize(pattern);
            if words.is_empty() {
                continue;
            }
            for word in &words {
                if !profile.keywords.contains(word) {
                    profile.keywords.push(word.clone());
                }
            }
            let padded = pad(&words);
            if !profile.patterns.contains(&padded) {
                profile.patterns.push(padded);
            }
        }
    }

    /// Score every tag against `text`, best first. Zero scores are dropped.
    pub fn rank(&self, text: &str) -> Vec<TagCandidate> {
        let tokens = tokenize(text);
        let padded_input = pad(&tokens);

        let mut candidates: Vec<TagCandidate> = self
            .profiles
            .iter()
            .filter_map(|profile| {
                let keyword_hits = profile
                    .keywords
                    .iter()
                    .filter(|kw| tokens.contains(kw))
                    .count() as u32;
                let pattern_hits = profile
                    .patterns
                    .iter()
                    .filter(|pattern| padded_input.contains(pattern.as_str()))
                    .count() as u32;

                let score = keyword_hits + pattern_hits * 4;
                if score > 0 {
                    Some(TagCandidate {
                        tag: profile.tag.clone(),
                        score,
                    })
                } else {
                    None
                }
            })
            .collect();

        // Stable sort keeps catalog order among equal scores.
        candidates.sort_by(|a, b| b.score.cmp(&a.score));
        candidates
    }
}

impl Classifier for KeywordClassifier {
    fn predict(&self, text: &str) -> ChatResult<String> {
        let best = self
            .rank(text)
            .into_iter()
            .next()
            .ok_or(ChatError::Unclassified)?;
        tracing::debug!("classified input as `{}` (score {})", best.tag, best.score);
        Ok(best.tag)
    }
}

/// Lowercase words; anything other than letters, digits and apostrophes separates them.
fn tokenize(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '\''))
        .filter(|word| !word.is_empty())
        .map(|word| word.to_string())
        .collect()
}

fn pad(words: &[String]) -> String {
    format!(" {} ", words.join(" "))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intent::IntentEntry;

    fn entry(tag: &str, patterns: &[&str]) -> IntentEntry {
        IntentEntry::new(tag, vec![format!("{tag} reply")])
            .with_patterns(patterns.iter().map(|s| s.to_string()).collect())
    }

    fn sample_catalog() -> IntentCatalog {
        IntentCatalog::new(vec![
            entry("greeting", &["Hi", "Hello", "How are you"]),
            entry("goodbye", &["Bye", "See you later"]),
            entry("thanks", &["Thanks", "Thank you"]),
        ])
    }

    #[test]
    fn exact_pattern_selects_its_tag() {
        let classifier = KeywordClassifier::from_catalog(&sample_catalog());

        assert_eq!(classifier.predict("Hello").expect("predict"), "greeting");
        assert_eq!(classifier.predict("See you later").expect("predict"), "goodbye");
        assert_eq!(classifier.predict("thank you").expect("predict"), "thanks");
    }

    #[test]
    fn punctuation_and_case_are_ignored() {
        let classifier = KeywordClassifier::from_catalog(&sample_catalog());
        assert_eq!(classifier.predict("SEE YOU LATER!!").expect("predict"), "goodbye");
        assert_eq!(classifier.predict("hi, friend").expect("predict"), "greeting");
    }

    #[test]
    fn pattern_match_outweighs_shared_words() {
        let classifier = KeywordClassifier::from_catalog(&sample_catalog());

        // "you" is a keyword of greeting, goodbye and thanks; only goodbye
        // has the whole pattern.
        let ranked = classifier.rank("ok see you later then");
        assert_eq!(ranked[0].tag, "goodbye");
        assert!(ranked.iter().any(|c| c.tag == "greeting"));
    }

    #[test]
    fn patterns_do_not_match_inside_words() {
        let classifier = KeywordClassifier::from_catalog(&sample_catalog());
        assert!(classifier.rank("this is ridiculous").is_empty());
    }

    #[test]
    fn ties_resolve_to_catalog_order() {
        let catalog = IntentCatalog::new(vec![entry("first", &["apple"]), entry("second", &["apple"])]);
        let classifier = KeywordClassifier::from_catalog(&catalog);

        let ranked = classifier.rank("apple");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].score, ranked[1].score);
        assert_eq!(classifier.predict("apple").expect("predict"), "first");
    }

    #[test]
    fn duplicate_tags_merge_into_first_profile() {
        let catalog = IntentCatalog::new(vec![
            entry("fruit", &["apple"]),
            entry("dessert", &["banana split"]),
            entry("fruit", &["banana"]),
        ]);
        let classifier = KeywordClassifier::from_catalog(&catalog);

        let ranked = classifier.rank("banana");
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0], TagCandidate { tag: "fruit".into(), score: 5 });
        assert_eq!(ranked[1], TagCandidate { tag: "dessert".into(), score: 1 });
    }

    #[test]
    fn no_overlap_is_unclassified() {
        let classifier = KeywordClassifier::from_catalog(&sample_catalog());
        assert!(matches!(
            classifier.predict("quantum chromodynamics"),
            Err(ChatError::Unclassified)
        ));
    }

    #[test]
    fn empty_classifier_is_unclassified() {
        let classifier = KeywordClassifier::new();
        assert!(matches!(classifier.predict("hello"), Err(ChatError::Unclassified)));
    }

    #[test]
    fn tags_without_patterns_are_never_predicted() {
        let catalog = IntentCatalog::new(vec![IntentEntry::new("bare", vec!["x".into()])]);
        let classifier = KeywordClassifier::from_catalog(&catalog);
        assert!(classifier.rank("bare").is_empty());
    }
}

//! Lexicon scorer for consumer-product content.

/// Maps text to a sentiment score in `[-1.0, 1.0]`.
///
/// The driver constructs one scorer and threads it through the scoring
/// step; implementations must return exactly `0.0` for empty or
/// whitespace-only text.
pub trait SentimentScorer {
    fn score(&self, text: &str) -> f64;
}

/// Word weights for consumer-product review language.
///
/// Keys are lowercase single words. Values in `(0.0, 1.0]` are positive,
/// in `[-1.0, 0.0)` are negative. The final score is clamped to
/// `[-1.0, 1.0]`.
const LEXICON: &[(&str, f64)] = &[
    // Positive signals
    ("great", 0.4),
    ("good", 0.3),
    ("excellent", 0.5),
    ("amazing", 0.5),
    ("love", 0.5),
    ("loved", 0.5),
    ("best", 0.5),
    ("recommend", 0.4),
    ("recommended", 0.4),
    ("quality", 0.3),
    ("reliable", 0.4),
    ("efficient", 0.4),
    ("silent", 0.3),
    ("quiet", 0.3),
    ("durable", 0.4),
    ("value", 0.3),
    ("worth", 0.3),
    ("impressed", 0.4),
    ("premium", 0.3),
    ("innovative", 0.4),
    // Negative signals
    ("bad", -0.4),
    ("terrible", -0.6),
    ("worst", -0.6),
    ("awful", -0.6),
    ("broken", -0.5),
    ("broke", -0.5),
    ("defective", -0.6),
    ("faulty", -0.6),
    ("noisy", -0.4),
    ("cheap", -0.3),
    ("overpriced", -0.4),
    ("disappointed", -0.5),
    ("disappointing", -0.5),
    ("refund", -0.4),
    ("return", -0.3),
    ("complaint", -0.4),
    ("problem", -0.3),
    ("issue", -0.3),
    ("failed", -0.4),
    ("failure", -0.4),
    ("avoid", -0.5),
    ("scam", -0.7),
];

/// Sentiment scorer backed by the word-weight lexicon.
#[derive(Debug, Clone, Copy, Default)]
pub struct LexiconScorer;

impl SentimentScorer for LexiconScorer {
    /// Splits text into lowercase words, sums matching weights, and clamps
    /// the result to `[-1.0, 1.0]`. Returns `0.0` for empty or unknown
    /// text.
    fn score(&self, text: &str) -> f64 {
        let mut score = 0.0_f64;
        for word in text.split_whitespace() {
            let w = word
                .trim_matches(|c: char| !c.is_alphabetic())
                .to_lowercase();
            for &(lex_word, weight) in LEXICON {
                if w == lex_word {
                    score += weight;
                    break;
                }
            }
        }
        score.clamp(-1.0, 1.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn score(text: &str) -> f64 {
        LexiconScorer.score(text)
    }

    #[test]
    fn empty_string_returns_zero() {
        assert_eq!(score(""), 0.0);
    }

    #[test]
    fn whitespace_only_returns_zero() {
        assert_eq!(score("   \t\n"), 0.0);
    }

    #[test]
    fn unknown_text_returns_zero() {
        assert_eq!(score("the quick brown fox"), 0.0);
    }

    #[test]
    fn positive_keyword_returns_positive() {
        let s = score("this fan is great");
        assert!(s > 0.0, "expected positive score, got {s}");
    }

    #[test]
    fn negative_keyword_returns_negative() {
        let s = score("arrived broken and noisy");
        assert!(s < 0.0, "expected negative score, got {s}");
    }

    #[test]
    fn mixed_text_stays_intermediate() {
        // great (+0.4) + disappointed (-0.5) = -0.1
        let s = score("great design but disappointed with the motor");
        assert!(s > -1.0 && s < 1.0, "expected intermediate score, got {s}");
    }

    #[test]
    fn score_clamps_to_positive_one() {
        let text = "great excellent best love recommend quality reliable durable impressed";
        assert_eq!(score(text), 1.0);
    }

    #[test]
    fn score_clamps_to_negative_one() {
        let text = "terrible worst awful broken defective disappointed scam avoid";
        assert_eq!(score(text), -1.0);
    }

    #[test]
    fn punctuation_stripped_from_words() {
        let s = score("great!");
        assert!(s > 0.0, "expected positive score for 'great!', got {s}");
    }
}

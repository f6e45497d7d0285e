//! Pure scoring functions.

/// Engagement score from view/like/comment counts.
///
/// `0.6·ln(1+views) + 0.3·ln(1+likes) + 0.1·ln(1+comments)`. Log
/// compression dampens outliers; the weights reflect relative signal
/// importance. Negative inputs are floored to zero, so the result is
/// always non-negative and monotone non-decreasing in each argument.
#[must_use]
pub fn engagement_score(views: f64, likes: f64, comments: f64) -> f64 {
    0.6 * views.max(0.0).ln_1p() + 0.3 * likes.max(0.0).ln_1p() + 0.1 * comments.max(0.0).ln_1p()
}

/// Sentiment-weighted item value.
///
/// Maps sentiment in `[-1, 1]` to a weight in `[0, 1]`: fully negative
/// content contributes nothing, neutral contributes half the engagement,
/// fully positive contributes all of it.
#[must_use]
pub fn wsov_weight(engagement: f64, sentiment: f64) -> f64 {
    engagement * (1.0 + sentiment) / 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_inputs_score_zero() {
        assert_eq!(engagement_score(0.0, 0.0, 0.0), 0.0);
    }

    #[test]
    fn engagement_is_monotone_in_each_argument() {
        let base = engagement_score(100.0, 10.0, 1.0);
        assert!(engagement_score(200.0, 10.0, 1.0) > base);
        assert!(engagement_score(100.0, 20.0, 1.0) > base);
        assert!(engagement_score(100.0, 10.0, 2.0) > base);
    }

    #[test]
    fn views_weigh_more_than_likes_than_comments() {
        let views_only = engagement_score(1000.0, 0.0, 0.0);
        let likes_only = engagement_score(0.0, 1000.0, 0.0);
        let comments_only = engagement_score(0.0, 0.0, 1000.0);
        assert!(views_only > likes_only);
        assert!(likes_only > comments_only);
    }

    #[test]
    fn negative_inputs_are_floored() {
        assert_eq!(engagement_score(-5.0, -1.0, 0.0), 0.0);
    }

    #[test]
    fn fully_negative_sentiment_zeroes_the_weight() {
        assert_eq!(wsov_weight(3.7, -1.0), 0.0);
    }

    #[test]
    fn fully_positive_sentiment_keeps_raw_engagement() {
        assert_eq!(wsov_weight(3.7, 1.0), 3.7);
    }

    #[test]
    fn neutral_sentiment_halves_engagement() {
        assert_eq!(wsov_weight(3.0, 0.0), 1.5);
    }
}

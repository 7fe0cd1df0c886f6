//! Per-class vocabulary estimation
//!
//! Builds the smoothed token log-probabilities for a single class from the
//! bodies of its training messages.

use crate::classifier::tokenizer::tokenize;
use crate::error::{Result, SpamFilterError};
use std::collections::HashMap;
use tracing::debug;

/// Smoothed token log-probabilities for one class.
///
/// For a class with token counts `c(w)`, `total` tokens and `V` distinct
/// tokens, every seen token gets `ln((c(w) + α) / (total + α(V + 1)))` and a
/// single reserved unknown-token entry gets `ln(α / (total + α(V + 1)))`.
/// The `+1` in the denominator reserves probability mass for tokens never
/// seen in this class, so the probabilities form a valid multinomial
/// distribution over the vocabulary plus the unknown symbol.
///
/// Immutable once estimated.
#[derive(Debug, Clone)]
pub struct ClassVocabulary {
    log_probs: HashMap<String, f64>,
    unknown_log_prob: f64,
    token_count: u64,
}

impl ClassVocabulary {
    /// Estimate the class model from the bodies of its training messages.
    ///
    /// `smoothing` must be positive and at least one message body (possibly
    /// empty) must be supplied; both are caller-input errors.
    pub fn estimate<I, S>(bodies: I, smoothing: f64) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if smoothing <= 0.0 {
            return Err(SpamFilterError::Config(format!(
                "smoothing must be positive, got {}",
                smoothing
            )));
        }

        let mut counts: HashMap<String, u64> = HashMap::new();
        let mut documents = 0usize;

        for body in bodies {
            documents += 1;
            for token in tokenize(body.as_ref()) {
                *counts.entry(token.to_string()).or_insert(0) += 1;
            }
        }

        if documents == 0 {
            return Err(SpamFilterError::Config(
                "cannot estimate probabilities from an empty corpus".to_string(),
            ));
        }

        let total: u64 = counts.values().sum();
        let vocab_size = counts.len();

        // One extra vocabulary slot is reserved for the unknown-token symbol
        let denominator = total as f64 + smoothing * (vocab_size as f64 + 1.0);

        let log_probs = counts
            .into_iter()
            .map(|(token, count)| {
                let prob = (count as f64 + smoothing) / denominator;
                (token, prob.ln())
            })
            .collect();

        let unknown_log_prob = (smoothing / denominator).ln();

        debug!(
            "Estimated {} distinct tokens over {} occurrences in {} messages",
            vocab_size, total, documents
        );

        Ok(Self {
            log_probs,
            unknown_log_prob,
            token_count: total,
        })
    }

    /// Log-probability of a token, falling back to the unknown-token entry
    /// for tokens never seen in this class.
    pub fn log_prob(&self, token: &str) -> f64 {
        self.log_probs
            .get(token)
            .copied()
            .unwrap_or(self.unknown_log_prob)
    }

    /// Log-probability reserved for unseen tokens.
    pub fn unknown_log_prob(&self) -> f64 {
        self.unknown_log_prob
    }

    /// Whether the token was observed in this class during training.
    pub fn contains(&self, token: &str) -> bool {
        self.log_probs.contains_key(token)
    }

    /// Distinct tokens observed during training.
    pub fn tokens(&self) -> impl Iterator<Item = &str> + '_ {
        self.log_probs.keys().map(String::as_str)
    }

    /// Number of distinct tokens observed during training.
    pub fn vocab_size(&self) -> usize {
        self.log_probs.len()
    }

    /// Total token occurrences observed during training.
    pub fn token_count(&self) -> u64 {
        self.token_count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TOLERANCE: f64 = 1e-9;

    #[test]
    fn test_smoothed_log_prob_formula() {
        // 10 tokens, 5 distinct, "e" seen once, smoothing 1.0:
        // ln((1 + 1) / (10 + 1 * 6)) = ln(2/16)
        let vocab = ClassVocabulary::estimate(["a a a b b c c d d e"], 1.0).unwrap();

        assert_eq!(vocab.token_count(), 10);
        assert_eq!(vocab.vocab_size(), 5);
        assert!((vocab.log_prob("e") - (2.0f64 / 16.0).ln()).abs() < TOLERANCE);
        assert!((vocab.log_prob("a") - (4.0f64 / 16.0).ln()).abs() < TOLERANCE);
        assert!((vocab.unknown_log_prob() - (1.0f64 / 16.0).ln()).abs() < TOLERANCE);
    }

    #[test]
    fn test_probability_mass_sums_to_one() {
        let vocab =
            ClassVocabulary::estimate(["free offer now", "free money", "wire the money"], 0.7)
                .unwrap();

        let mass: f64 = vocab
            .tokens()
            .map(|token| vocab.log_prob(token).exp())
            .sum::<f64>()
            + vocab.unknown_log_prob().exp();

        assert!((mass - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_unknown_token_fallback() {
        let vocab = ClassVocabulary::estimate(["one two"], 1.0).unwrap();

        assert!(vocab.contains("one"));
        assert!(!vocab.contains("three"));
        assert_eq!(vocab.log_prob("three"), vocab.unknown_log_prob());
        assert!(vocab.log_prob("one") > vocab.unknown_log_prob());
    }

    #[test]
    fn test_counts_accumulate_across_messages() {
        let vocab = ClassVocabulary::estimate(["spam spam", "spam eggs"], 1.0).unwrap();

        assert_eq!(vocab.token_count(), 4);
        assert_eq!(vocab.vocab_size(), 2);
        // c(spam) = 3: ln((3 + 1) / (4 + 1 * 3))
        assert!((vocab.log_prob("spam") - (4.0f64 / 7.0).ln()).abs() < TOLERANCE);
    }

    #[test]
    fn test_empty_bodies_are_valid() {
        let vocab = ClassVocabulary::estimate(["", "   \n"], 1.0).unwrap();

        assert_eq!(vocab.token_count(), 0);
        assert_eq!(vocab.vocab_size(), 0);
        // With no observations the unknown symbol holds all the mass
        assert!((vocab.unknown_log_prob().exp() - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn test_rejects_non_positive_smoothing() {
        for smoothing in [0.0, -1.0] {
            let result = ClassVocabulary::estimate(["some text"], smoothing);
            assert!(matches!(result, Err(SpamFilterError::Config(_))));
        }
    }

    #[test]
    fn test_rejects_empty_corpus() {
        let bodies: Vec<&str> = Vec::new();
        let result = ClassVocabulary::estimate(bodies, 1.0);
        assert!(matches!(result, Err(SpamFilterError::Config(_))));
    }
}

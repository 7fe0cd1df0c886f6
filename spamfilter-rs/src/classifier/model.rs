//! Naive Bayes classifier model
//!
//! Two per-class vocabulary models plus class priors, queried through the
//! log-space MAP decision rule and the indicative-word ranking.

use crate::classifier::tokenizer::tokenize;
use crate::classifier::types::{IndicativeWord, Label};
use crate::classifier::vocabulary::ClassVocabulary;
use crate::corpus;
use crate::error::{Result, SpamFilterError};
use std::collections::{HashMap, HashSet};
use std::path::Path;
use tracing::{debug, info};

/// Two-class Multinomial Naive Bayes spam model.
///
/// Built once from the two training corpora and immutable afterwards, so a
/// single model can safely serve any number of classification queries.
#[derive(Debug, Clone)]
pub struct SpamClassifier {
    spam: ClassVocabulary,
    ham: ClassVocabulary,
    log_spam_prior: f64,
    log_ham_prior: f64,
    vocabulary: HashSet<String>,
}

impl SpamClassifier {
    /// Build a model from in-memory message bodies.
    ///
    /// Both corpora must be non-empty; `smoothing` must be positive.
    pub fn build<S: AsRef<str>>(
        spam_bodies: &[S],
        ham_bodies: &[S],
        smoothing: f64,
    ) -> Result<Self> {
        if spam_bodies.is_empty() || ham_bodies.is_empty() {
            return Err(SpamFilterError::Config(
                "both training corpora must contain at least one message".to_string(),
            ));
        }

        let num_spam = spam_bodies.len() as f64;
        let num_ham = ham_bodies.len() as f64;
        let total = num_spam + num_ham;

        let log_spam_prior = (num_spam / total).ln();
        let log_ham_prior = (num_ham / total).ln();

        let spam =
            ClassVocabulary::estimate(spam_bodies.iter().map(|body| body.as_ref()), smoothing)?;
        let ham =
            ClassVocabulary::estimate(ham_bodies.iter().map(|body| body.as_ref()), smoothing)?;

        // Union of the two class vocabularies, used only for ranking
        let vocabulary: HashSet<String> = spam
            .tokens()
            .chain(ham.tokens())
            .map(str::to_string)
            .collect();

        info!(
            "Trained on {} spam / {} ham messages, {} distinct tokens",
            spam_bodies.len(),
            ham_bodies.len(),
            vocabulary.len()
        );

        Ok(Self {
            spam,
            ham,
            log_spam_prior,
            log_ham_prior,
            vocabulary,
        })
    }

    /// Train a model from two corpus directories.
    ///
    /// Every file in each directory is read as one message; a failed read
    /// aborts training.
    pub fn train<P: AsRef<Path>>(spam_dir: P, ham_dir: P, smoothing: f64) -> Result<Self> {
        let spam_bodies = corpus::load_corpus(spam_dir)?;
        let ham_bodies = corpus::load_corpus(ham_dir)?;

        Self::build(&spam_bodies, &ham_bodies, smoothing)
    }

    /// Per-class log scores `(spam, ham)` for a message body.
    ///
    /// Each score is the class log-prior plus the count-weighted token
    /// log-probabilities, with unseen tokens falling back to the class's
    /// unknown-token entry. Computed in log space; only the relative order
    /// of the two scores matters.
    pub fn scores(&self, body: &str) -> (f64, f64) {
        let mut counts: HashMap<&str, u64> = HashMap::new();
        for token in tokenize(body) {
            *counts.entry(token).or_insert(0) += 1;
        }

        let mut spam_score = self.log_spam_prior;
        let mut ham_score = self.log_ham_prior;

        for (token, count) in counts {
            spam_score += count as f64 * self.spam.log_prob(token);
            ham_score += count as f64 * self.ham.log_prob(token);
        }

        (spam_score, ham_score)
    }

    /// Classify a message body.
    ///
    /// Spam requires a strictly greater spam score; ties resolve to Ham. An
    /// empty body degenerates to comparing the class priors alone.
    pub fn classify(&self, body: &str) -> Label {
        let (spam_score, ham_score) = self.scores(body);

        debug!("Scores: spam={:.4} ham={:.4}", spam_score, ham_score);

        if spam_score > ham_score {
            Label::Spam
        } else {
            Label::Ham
        }
    }

    /// Rank vocabulary words by how strongly they indicate the given class.
    ///
    /// Only words observed at least once in both classes are eligible; a
    /// word scored through the class-independent unknown-token estimate
    /// carries no word-specific signal. Each eligible word is scored as
    /// `ln(P(w|class) / P(w))` with `P(w)` the marginal under the two-class
    /// mixture. Returns at most `n` words, sorted by descending score with
    /// ties broken by descending word order.
    pub fn most_indicative(&self, label: Label, n: usize) -> Vec<IndicativeWord> {
        let (target, other, target_prior, other_prior) = match label {
            Label::Spam => (
                &self.spam,
                &self.ham,
                self.log_spam_prior,
                self.log_ham_prior,
            ),
            Label::Ham => (
                &self.ham,
                &self.spam,
                self.log_ham_prior,
                self.log_spam_prior,
            ),
        };

        let mut scored: Vec<(f64, &str)> = Vec::new();

        for word in &self.vocabulary {
            if !target.contains(word) || !other.contains(word) {
                continue;
            }

            let target_log_prob = target.log_prob(word);
            let other_log_prob = other.log_prob(word);

            // P(w) = P(w|c) * P(c) + P(w|c') * P(c')
            let marginal = target_log_prob.exp() * target_prior.exp()
                + other_log_prob.exp() * other_prior.exp();

            scored.push((target_log_prob - marginal.ln(), word.as_str()));
        }

        scored.sort_by(|a, b| b.0.total_cmp(&a.0).then_with(|| b.1.cmp(a.1)));
        scored.truncate(n);

        scored
            .into_iter()
            .map(|(score, word)| IndicativeWord {
                word: word.to_string(),
                score,
            })
            .collect()
    }

    /// Log prior of the spam class.
    pub fn log_spam_prior(&self) -> f64 {
        self.log_spam_prior
    }

    /// Log prior of the ham class.
    pub fn log_ham_prior(&self) -> f64 {
        self.log_ham_prior
    }

    /// Distinct tokens observed across both classes.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }
}

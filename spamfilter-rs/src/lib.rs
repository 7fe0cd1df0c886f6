//! spamfilter-rs: Naive Bayes spam classifier
//!
//! A Multinomial Naive Bayes classifier for email, trained from two labeled
//! mail corpora on disk.
//!
//! # Features
//!
//! - **Training**: Lidstone-smoothed per-class token probabilities with a
//!   reserved unknown-token symbol
//! - **Classification**: log-space MAP decision rule, robust to long
//!   messages (no underflow from multiplying small probabilities)
//! - **Ranking**: the vocabulary words most indicative of spam or ham
//! - **Parsing**: RFC 5322 message bodies extracted with `mail-parser`,
//!   tolerant of malformed input
//!
//! # Example
//!
//! ```no_run
//! use spamfilter_rs::classifier::SpamClassifier;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let model = SpamClassifier::train("corpus/spam", "corpus/ham", 1.0)?;
//!
//!     let label = model.classify("limited time offer act now");
//!     println!("{}", label);
//!
//!     Ok(())
//! }
//! ```
//!
//! # Modules
//!
//! - [`classifier`]: Tokenizer, vocabulary estimation, and the model
//! - [`config`]: Configuration management
//! - [`corpus`]: Reading mail corpora from disk
//! - [`error`]: Error types and handling

pub mod classifier;
pub mod config;
pub mod corpus;
pub mod error;

// Re-export commonly used types
pub use classifier::{Label, SpamClassifier};
pub use config::Config;
pub use error::{Result, SpamFilterError};

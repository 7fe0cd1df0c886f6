//! CLI for training and querying the spam classifier
//!
//! # Usage
//!
//! ```bash
//! # Classify message files
//! spamfilter --spam-dir corpus/spam --ham-dir corpus/ham classify inbox/msg1.eml inbox/msg2.eml
//!
//! # Show the ten words most indicative of spam
//! spamfilter --spam-dir corpus/spam --ham-dir corpus/ham indicative --class spam -n 10
//!
//! # Report accuracy on held-out labeled directories
//! spamfilter --spam-dir corpus/spam --ham-dir corpus/ham evaluate \
//!     --test-spam-dir holdout/spam --test-ham-dir holdout/ham
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use spamfilter_rs::classifier::{Label, SpamClassifier};
use spamfilter_rs::config::Config;
use spamfilter_rs::corpus;
use std::path::PathBuf;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "spamfilter")]
#[command(about = "Naive Bayes spam classifier", long_about = None)]
struct Cli {
    /// Directory of spam training messages
    #[arg(long)]
    spam_dir: Option<PathBuf>,

    /// Directory of ham training messages
    #[arg(long)]
    ham_dir: Option<PathBuf>,

    /// Additive smoothing constant (must be positive)
    #[arg(long)]
    smoothing: Option<f64>,

    /// Path to a TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify one or more message files
    Classify {
        /// Message files to classify
        #[arg(required = true)]
        messages: Vec<PathBuf>,
    },
    /// Show the words most indicative of a class
    Indicative {
        /// Target class (spam or ham)
        #[arg(long, default_value = "spam")]
        class: String,
        /// Number of words to show
        #[arg(short = 'n', long, default_value_t = 10)]
        count: usize,
    },
    /// Classify held-out labeled directories and report accuracy
    Evaluate {
        /// Directory of held-out spam messages
        #[arg(long)]
        test_spam_dir: PathBuf,
        /// Directory of held-out ham messages
        #[arg(long)]
        test_ham_dir: PathBuf,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration; flags override file values
    let config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    // Initialize logging
    let level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();

    tracing::subscriber::set_global_default(subscriber)
        .expect("Failed to set tracing subscriber");

    let spam_dir = cli
        .spam_dir
        .unwrap_or_else(|| PathBuf::from(&config.corpus.spam_dir));
    let ham_dir = cli
        .ham_dir
        .unwrap_or_else(|| PathBuf::from(&config.corpus.ham_dir));
    let smoothing = cli.smoothing.unwrap_or(config.model.smoothing);

    info!("Training from {} and {}", spam_dir.display(), ham_dir.display());

    let model = SpamClassifier::train(&spam_dir, &ham_dir, smoothing)
        .context("Failed to train classifier")?;

    match cli.command {
        Commands::Classify { messages } => {
            for path in messages {
                let body = corpus::read_body(&path)
                    .with_context(|| format!("Failed to read {}", path.display()))?;
                println!("{}\t{}", model.classify(&body), path.display());
            }
        }
        Commands::Indicative { class, count } => {
            let label = match class.as_str() {
                "spam" => Label::Spam,
                "ham" => Label::Ham,
                other => {
                    eprintln!("Error: unknown class '{}', expected 'spam' or 'ham'", other);
                    std::process::exit(1);
                }
            };

            for entry in model.most_indicative(label, count) {
                println!("{:>10.4}  {}", entry.score, entry.word);
            }
        }
        Commands::Evaluate {
            test_spam_dir,
            test_ham_dir,
        } => {
            let spam_paths = corpus::list_messages(&test_spam_dir)?;
            let ham_paths = corpus::list_messages(&test_ham_dir)?;

            let total = spam_paths.len() + ham_paths.len();
            if total == 0 {
                eprintln!("Error: no messages found in the test directories");
                std::process::exit(1);
            }

            let mut spam_correct = 0usize;
            for path in &spam_paths {
                let body = corpus::read_body(path)?;
                if model.classify(&body) == Label::Spam {
                    spam_correct += 1;
                }
            }

            let mut ham_correct = 0usize;
            for path in &ham_paths {
                let body = corpus::read_body(path)?;
                if model.classify(&body) == Label::Ham {
                    ham_correct += 1;
                }
            }

            let correct = spam_correct + ham_correct;
            println!("Spam:    {}/{} correct", spam_correct, spam_paths.len());
            println!("Ham:     {}/{} correct", ham_correct, ham_paths.len());
            println!(
                "Overall: {}/{} correct ({:.1}%)",
                correct,
                total,
                100.0 * correct as f64 / total as f64
            );
        }
    }

    Ok(())
}

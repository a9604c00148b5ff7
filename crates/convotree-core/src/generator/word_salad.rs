//! Random word generator standing in for a language model

use super::ResponseGenerator;
use crate::error::{GeneratorError, GeneratorResult};
use crate::tree::Exchange;
use async_trait::async_trait;
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Words used when none are configured
pub const DEFAULT_WORDS: &[&str] = &[
    "apple",
    "banana",
    "cherry",
    "date",
    "elderberry",
    "fig",
    "grape",
    "honeydew",
    "kiwi",
    "lemon",
];

/// Longest reply, in words, when not configured
pub const DEFAULT_MAX_WORDS: usize = 10;

/// Replies with 1..=`max_words` words picked uniformly from a list.
/// Ignores the history entirely.
#[derive(Debug)]
pub struct WordSaladGenerator {
    words: Vec<String>,
    max_words: usize,
    rng: Mutex<StdRng>,
}

impl WordSaladGenerator {
    /// Create a generator; a seed makes the reply sequence reproducible
    pub fn new(words: Vec<String>, max_words: usize, seed: Option<u64>) -> GeneratorResult<Self> {
        if words.is_empty() {
            return Err(GeneratorError::InvalidConfig(
                "word list must not be empty".to_string(),
            ));
        }
        if max_words == 0 {
            return Err(GeneratorError::InvalidConfig(
                "max_words must be at least 1".to_string(),
            ));
        }

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };

        Ok(Self {
            words,
            max_words,
            rng: Mutex::new(rng),
        })
    }
}

impl Default for WordSaladGenerator {
    fn default() -> Self {
        Self {
            words: DEFAULT_WORDS.iter().map(|w| w.to_string()).collect(),
            max_words: DEFAULT_MAX_WORDS,
            rng: Mutex::new(StdRng::from_entropy()),
        }
    }
}

#[async_trait]
impl ResponseGenerator for WordSaladGenerator {
    async fn generate(&self, _history: &[Exchange]) -> GeneratorResult<String> {
        let mut rng = self.rng.lock();
        let count = rng.gen_range(1..=self.max_words);
        let reply: Vec<&str> = (0..count)
            .map(|_| self.words[rng.gen_range(0..self.words.len())].as_str())
            .collect();
        Ok(reply.join(" "))
    }

    fn name(&self) -> &'static str {
        "word-salad"
    }
}

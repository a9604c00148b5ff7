//! Response generation
//!
//! The tree never produces replies itself. A [`ResponseGenerator`] receives
//! the active branch's history and returns the next assistant reply; the
//! stand-ins here cover local runs and tests.

mod echo;
mod word_salad;

pub use echo::EchoGenerator;
pub use word_salad::{DEFAULT_MAX_WORDS, DEFAULT_WORDS, WordSaladGenerator};

use crate::config::{GeneratorConfig, GeneratorKind};
use crate::error::GeneratorResult;
use crate::tree::Exchange;
use async_trait::async_trait;
use std::sync::Arc;

/// Produces the assistant's reply for a linear conversation history
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ResponseGenerator: Send + Sync {
    /// Generate the next reply given the history so far (oldest first)
    async fn generate(&self, history: &[Exchange]) -> GeneratorResult<String>;

    /// Short name used in logs and error messages
    fn name(&self) -> &'static str;
}

/// Build the generator selected by configuration
pub fn build_generator(config: &GeneratorConfig) -> GeneratorResult<Arc<dyn ResponseGenerator>> {
    let generator: Arc<dyn ResponseGenerator> = match config.kind {
        GeneratorKind::WordSalad => {
            let words = config
                .words
                .clone()
                .unwrap_or_else(|| DEFAULT_WORDS.iter().map(|w| w.to_string()).collect());
            Arc::new(WordSaladGenerator::new(words, config.max_words, config.seed)?)
        }
        GeneratorKind::Echo => Arc::new(EchoGenerator),
    };
    Ok(generator)
}

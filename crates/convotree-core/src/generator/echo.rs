//! Deterministic echo generator

use super::ResponseGenerator;
use crate::error::GeneratorResult;
use crate::tree::Exchange;
use async_trait::async_trait;

/// Repeats the most recent user input
#[derive(Debug, Clone, Copy, Default)]
pub struct EchoGenerator;

#[async_trait]
impl ResponseGenerator for EchoGenerator {
    async fn generate(&self, history: &[Exchange]) -> GeneratorResult<String> {
        Ok(match history.last() {
            Some(last) => format!("echo: {}", last.user_input),
            None => "echo: (start of conversation)".to_string(),
        })
    }

    fn name(&self) -> &'static str {
        "echo"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_echo_repeats_last_input() {
        let history = vec![Exchange::new("first", "a"), Exchange::new("second", "b")];
        let reply = EchoGenerator.generate(&history).await.unwrap();
        assert_eq!(reply, "echo: second");
    }

    #[tokio::test]
    async fn test_echo_on_empty_history() {
        let reply = EchoGenerator.generate(&[]).await.unwrap();
        assert_eq!(reply, "echo: (start of conversation)");
    }
}

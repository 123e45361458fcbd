use std::io::Write;

use anyhow::Result;
use async_trait::async_trait;
use tokio::io::{AsyncBufReadExt, BufReader, Lines, Stdin};
use tokio::sync::Mutex;

use crate::feed::Confirm;

/// Where the command loop gets its input from.
#[async_trait(?Send)]
pub trait LineSource {
    /// `None` on end of input.
    async fn read_line(&self, prompt: &str) -> Result<Option<String>>;
}

/// Line reader over stdin shared by the command loop and confirmations.
pub struct Prompt {
    lines: Mutex<Lines<BufReader<Stdin>>>,
}

impl Prompt {
    pub fn stdin() -> Self {
        Self { lines: Mutex::new(BufReader::new(tokio::io::stdin()).lines()) }
    }
}

#[async_trait(?Send)]
impl LineSource for Prompt {
    async fn read_line(&self, prompt: &str) -> Result<Option<String>> {
        print!("{prompt}");
        std::io::stdout().flush()?;
        let mut lines = self.lines.lock().await;
        Ok(lines.next_line().await?)
    }
}

pub fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[async_trait(?Send)]
impl Confirm for Prompt {
    async fn confirm(&self, message: &str) -> bool {
        match self.read_line(&format!("{message} [y/N] ")).await {
            Ok(Some(answer)) => is_yes(&answer),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_explicit_yes_confirms() {
        assert!(is_yes("y"));
        assert!(is_yes(" YES \n"));
        assert!(!is_yes(""));
        assert!(!is_yes("n"));
        assert!(!is_yes("yep"));
    }
}

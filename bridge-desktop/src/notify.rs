//! Console Notifier Implementation
//!
//! Routes alerts to stderr and confirmation prompts to stdin. Intended for
//! terminal hosts and headless tooling; GUI shells provide their own
//! [`Notifier`] implementation.

use async_trait::async_trait;
use bridge_traits::notify::{Notifier, Severity};
use tracing::{error, info};

/// Notifier writing to the controlling terminal.
pub struct ConsoleNotifier {
    assume_yes: bool,
}

impl ConsoleNotifier {
    /// Interactive notifier: confirmation prompts read a `y`/`n` answer
    /// from stdin.
    pub fn new() -> Self {
        Self { assume_yes: false }
    }

    /// Non-interactive notifier: every confirmation is approved. For
    /// scripted use where prompting would hang.
    pub fn assume_yes() -> Self {
        Self { assume_yes: true }
    }
}

impl Default for ConsoleNotifier {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Notifier for ConsoleNotifier {
    fn alert(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Info => {
                info!(text = message, "user notification");
                eprintln!("{}", message);
            }
            Severity::Error => {
                error!(text = message, "user notification");
                eprintln!("error: {}", message);
            }
        }
    }

    async fn confirm(&self, message: &str) -> bool {
        if self.assume_yes {
            return true;
        }

        eprint!("{} [y/N] ", message);

        // Stdin reads block; keep them off the async runtime.
        let answer = tokio::task::spawn_blocking(|| {
            let mut line = String::new();
            std::io::stdin().read_line(&mut line).map(|_| line)
        })
        .await;

        match answer {
            Ok(Ok(line)) => matches!(line.trim(), "y" | "Y" | "yes" | "Yes"),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_assume_yes_confirms_without_prompting() {
        let notifier = ConsoleNotifier::assume_yes();
        assert!(notifier.confirm("Delete this entry permanently?").await);
    }

    #[test]
    fn test_alert_does_not_panic() {
        let notifier = ConsoleNotifier::new();
        notifier.alert(Severity::Info, "Upload complete");
        notifier.alert(Severity::Error, "Upload failed");
    }
}

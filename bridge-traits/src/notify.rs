//! User Notification Abstraction
//!
//! Forwards user-facing messages and confirmation prompts to the host shell.
//! The admin core never renders UI itself; every success or failure message
//! and every destructive-action prompt goes through this trait.

use async_trait::async_trait;

/// Severity of a user-facing notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// Routine outcome (upload complete, entry deleted)
    Info,
    /// Failed operation the user may want to retry
    Error,
}

/// Notification sink trait
///
/// Hosts route alerts into their own surface:
/// - **Desktop CLI**: stderr / terminal prompt
/// - **GUI shells**: toast or dialog
/// - **Tests**: recording sink asserting on emitted messages
///
/// Implementations must not block the async runtime inside
/// [`confirm`](Notifier::confirm); interactive prompts belong on a blocking
/// task.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Surface a message to the user.
    fn alert(&self, severity: Severity, message: &str);

    /// Ask the user to approve a destructive action. Returns `false` when
    /// the user declines or no answer can be obtained.
    async fn confirm(&self, message: &str) -> bool;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    struct SilentNotifier {
        seen: Mutex<Vec<(Severity, String)>>,
    }

    #[async_trait]
    impl Notifier for SilentNotifier {
        fn alert(&self, severity: Severity, message: &str) {
            self.seen.lock().unwrap().push((severity, message.to_string()));
        }

        async fn confirm(&self, _message: &str) -> bool {
            false
        }
    }

    #[tokio::test]
    async fn test_notifier_object_safety() {
        let notifier: Box<dyn Notifier> = Box::new(SilentNotifier {
            seen: Mutex::new(Vec::new()),
        });

        notifier.alert(Severity::Info, "Upload complete");
        assert!(!notifier.confirm("Delete this entry permanently?").await);
    }
}

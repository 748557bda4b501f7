//! Edit session state machine
//!
//! At most one row is under edit at any time, system-wide. The session is an
//! explicit value owned by the list manager and handed to row rendering; it
//! is never ambient state.

/// Single-slot edit state: either idle, or editing one entity with a staged
/// copy of its editable fields.
///
/// The staged copy is independent of the source entity, so cancelling never
/// mutates the original. Starting an edit while another is active replaces
/// it — last writer wins, with no confirmation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EditSession<Id, Staged> {
    Idle,
    Editing { id: Id, staged: Staged },
}

impl<Id, Staged> Default for EditSession<Id, Staged> {
    fn default() -> Self {
        Self::Idle
    }
}

impl<Id: PartialEq, Staged> EditSession<Id, Staged> {
    /// Begin editing `id`, discarding any session already active.
    pub fn start(&mut self, id: Id, staged: Staged) {
        *self = Self::Editing { id, staged };
    }

    /// Discard the staged fields and return to idle. No-op when idle.
    pub fn cancel(&mut self) {
        *self = Self::Idle;
    }

    pub fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }

    /// The id under edit, if any.
    pub fn editing_id(&self) -> Option<&Id> {
        match self {
            Self::Editing { id, .. } => Some(id),
            Self::Idle => None,
        }
    }

    /// Whether `id` is the row currently under edit. Drives which row
    /// renders input controls.
    pub fn is_editing(&self, id: &Id) -> bool {
        self.editing_id() == Some(id)
    }

    pub fn staged(&self) -> Option<&Staged> {
        match self {
            Self::Editing { staged, .. } => Some(staged),
            Self::Idle => None,
        }
    }

    pub fn staged_mut(&mut self) -> Option<&mut Staged> {
        match self {
            Self::Editing { staged, .. } => Some(staged),
            Self::Idle => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    type Session = EditSession<&'static str, String>;

    #[test]
    fn test_starts_idle() {
        let session = Session::default();
        assert!(session.is_idle());
        assert!(session.editing_id().is_none());
        assert!(session.staged().is_none());
    }

    #[test]
    fn test_start_then_cancel_returns_to_idle() {
        let mut session = Session::default();
        session.start("42", "staged".to_string());

        assert!(session.is_editing(&"42"));
        assert_eq!(session.staged().map(String::as_str), Some("staged"));

        session.cancel();
        assert!(session.is_idle());
        assert!(session.staged().is_none());
    }

    #[test]
    fn test_new_edit_replaces_active_session() {
        let mut session = Session::default();
        session.start("x", "staged-x".to_string());
        session.start("y", "staged-y".to_string());

        // X's staged edits are gone; only Y's session remains.
        assert!(!session.is_editing(&"x"));
        assert!(session.is_editing(&"y"));
        assert_eq!(session.staged().map(String::as_str), Some("staged-y"));
    }

    #[test]
    fn test_staged_mut_edits_copy_only() {
        let original = "original".to_string();
        let mut session = Session::default();
        session.start("42", original.clone());

        session.staged_mut().unwrap().push_str(" (edited)");

        assert_eq!(original, "original");
        assert_eq!(
            session.staged().map(String::as_str),
            Some("original (edited)")
        );
    }

    #[test]
    fn test_only_the_edited_row_shows_inputs() {
        let mut session = Session::default();
        session.start("42", String::new());

        assert!(session.is_editing(&"42"));
        assert!(!session.is_editing(&"7"));
    }
}

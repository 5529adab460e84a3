//! Edit-mode state for the interactive shell
//!
//! One focus register is shared by every record: at most one record is in
//! edit mode, and all edits go through the same text buffer. Starting an
//! edit on another record overwrites the buffer, dropping any unsaved text.

/// Which record is being edited, plus the shared edit buffer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditSession {
    editing_id: Option<i64>,
    buffer: String,
}

impl EditSession {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter edit mode on `id`, seeding the buffer with its current text
    pub fn begin(&mut self, id: i64, current: &str) {
        self.editing_id = Some(id);
        self.buffer = current.to_string();
    }

    /// Edit/Cancel button: leave edit mode if `id` is being edited,
    /// otherwise start editing it. Returns true when edit mode is now on.
    pub fn toggle(&mut self, id: i64, current: &str) -> bool {
        if self.editing_id == Some(id) {
            self.cancel();
            false
        } else {
            self.begin(id, current);
            true
        }
    }

    /// Leave edit mode. The buffer keeps its text until the next `begin`.
    pub fn cancel(&mut self) {
        self.editing_id = None;
    }

    pub fn set_buffer(&mut self, text: &str) {
        self.buffer = text.to_string();
    }

    pub fn editing_id(&self) -> Option<i64> {
        self.editing_id
    }

    pub fn buffer(&self) -> &str {
        &self.buffer
    }

    /// The edit to commit, if any
    pub fn pending(&self) -> Option<(i64, &str)> {
        self.editing_id.map(|id| (id, self.buffer.as_str()))
    }

    /// Leave edit mode after a committed edit
    pub fn finish(&mut self) {
        self.editing_id = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_is_idle() {
        let session = EditSession::new();
        assert_eq!(session.editing_id(), None);
        assert_eq!(session.pending(), None);
    }

    #[test]
    fn test_begin_seeds_buffer() {
        let mut session = EditSession::new();
        session.begin(1, "Alice");
        assert_eq!(session.pending(), Some((1, "Alice")));
    }

    #[test]
    fn test_switching_record_discards_buffer() {
        let mut session = EditSession::new();
        session.begin(1, "Alice");
        session.set_buffer("Alicia");

        session.begin(2, "Bob");

        assert_eq!(session.pending(), Some((2, "Bob")));
    }

    #[test]
    fn test_toggle_same_id_cancels() {
        let mut session = EditSession::new();
        assert!(session.toggle(3, "C"));
        assert!(!session.toggle(3, "C"));
        assert_eq!(session.editing_id(), None);
    }

    #[test]
    fn test_toggle_other_id_switches() {
        let mut session = EditSession::new();
        session.toggle(3, "C");
        assert!(session.toggle(4, "D"));
        assert_eq!(session.pending(), Some((4, "D")));
    }

    #[test]
    fn test_finish_leaves_edit_mode() {
        let mut session = EditSession::new();
        session.begin(1, "A");
        session.set_buffer("B");
        session.finish();
        assert_eq!(session.pending(), None);
    }
}

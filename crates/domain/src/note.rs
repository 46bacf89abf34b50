/// A private note a `User` keeps for a contest
#[derive(Debug, Clone, PartialEq)]
pub struct ContestNote {
    pub contest_id: i64,
    pub note: String,
    /// Timestamp in millis of the last time the note was written
    pub created: i64,
}

impl ContestNote {
    pub fn is_blank(&self) -> bool {
        is_blank(&self.note)
    }
}

pub(crate) fn is_blank(note: &str) -> bool {
    note.trim().is_empty()
}

/// Outcome of writing a note for a contest
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NoteChange {
    Created,
    Updated,
    Removed,
    /// A blank note was written for a contest without any note
    Rejected,
}

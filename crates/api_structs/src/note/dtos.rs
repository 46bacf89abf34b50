use battleboard_domain::ContestNote;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct NoteDTO {
    pub contest_id: i64,
    pub note: String,
    pub created_at: i64,
}

impl NoteDTO {
    pub fn new(note: ContestNote) -> Self {
        Self {
            contest_id: note.contest_id,
            note: note.note,
            created_at: note.created,
        }
    }
}

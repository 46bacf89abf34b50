use battleboard_domain::ContestNote;
use serde::{Deserialize, Serialize};

use crate::dtos::NoteDTO;

pub mod get_note {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub contest_id: i64,
    }

    pub type APIResponse = NoteDTO;
}

pub mod update_note {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub contest_id: i64,
        /// A blank note removes the existing note
        pub note: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        /// `None` when the note was removed
        pub note: Option<NoteDTO>,
    }

    impl APIResponse {
        pub fn saved(note: ContestNote) -> Self {
            Self {
                message: "Note saved".into(),
                note: Some(NoteDTO::new(note)),
            }
        }

        pub fn removed() -> Self {
            Self {
                message: "Note removed".into(),
                note: None,
            }
        }
    }
}

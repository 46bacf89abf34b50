use crate::{APIResponse, BaseClient};
use battleboard_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct NoteClient {
    base: Arc<BaseClient>,
}

pub struct UpdateNoteInput {
    pub contest_id: i64,
    pub note: String,
}

impl NoteClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get(&self, contest_id: i64) -> APIResponse<get_note::APIResponse> {
        self.base
            .get(format!("notes/{}", contest_id), StatusCode::OK)
            .await
    }

    pub async fn update(&self, input: UpdateNoteInput) -> APIResponse<update_note::APIResponse> {
        let body = update_note::RequestBody {
            contest_id: input.contest_id,
            note: input.note,
        };
        self.base.put(body, "notes".into(), StatusCode::OK).await
    }
}

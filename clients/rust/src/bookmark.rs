use crate::{APIResponse, BaseClient};
use battleboard_api_structs::*;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct BookmarkClient {
    base: Arc<BaseClient>,
}

impl BookmarkClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn add(&self, contest_id: i64) -> APIResponse<add_bookmark::APIResponse> {
        self.base
            .post((), format!("bookmarks/{}", contest_id), StatusCode::OK)
            .await
    }

    pub async fn remove(&self, contest_id: i64) -> APIResponse<remove_bookmark::APIResponse> {
        self.base
            .delete(format!("bookmarks/{}", contest_id), StatusCode::OK)
            .await
    }

    pub async fn get_all(&self) -> APIResponse<get_bookmarks::APIResponse> {
        self.base.get("bookmarks".into(), StatusCode::OK).await
    }
}

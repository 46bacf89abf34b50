use crate::{APIResponse, BaseClient};
use battleboard_api_structs::get_contests;
use reqwest::StatusCode;
use std::sync::Arc;

#[derive(Clone)]
pub struct ContestClient {
    base: Arc<BaseClient>,
}

impl ContestClient {
    pub(crate) fn new(base: Arc<BaseClient>) -> Self {
        Self { base }
    }

    pub async fn get_all(&self) -> APIResponse<get_contests::APIResponse> {
        self.base.get("contests".into(), StatusCode::OK).await
    }
}

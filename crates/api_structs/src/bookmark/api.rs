use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookmarksResponse {
    pub bookmarked_contests: Vec<i64>,
}

impl BookmarksResponse {
    pub fn new(bookmarked_contests: Vec<i64>) -> Self {
        Self {
            bookmarked_contests,
        }
    }
}

pub mod add_bookmark {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub contest_id: i64,
    }

    pub type APIResponse = BookmarksResponse;
}

pub mod remove_bookmark {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    pub struct PathParams {
        pub contest_id: i64,
    }

    pub type APIResponse = BookmarksResponse;
}

pub mod get_bookmarks {
    pub type APIResponse = crate::contest::api::ContestsResponse;
}

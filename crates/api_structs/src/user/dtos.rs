use battleboard_domain::{User, ID};
use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserDTO {
    pub id: ID,
    pub username: String,
    pub email: String,
    pub phone_number: Option<String>,
    pub bookmarked_contests: Vec<i64>,
    pub created_at: i64,
}

impl UserDTO {
    pub fn new(user: User) -> Self {
        Self {
            id: user.id,
            username: user.username,
            email: user.email,
            phone_number: user.phone_number,
            bookmarked_contests: user.bookmarked_contests,
            created_at: user.created,
        }
    }
}

mod base;
mod bookmark;
mod contest;
mod note;
mod reminder;
mod status;
mod user;

pub(crate) use base::BaseClient;
pub use base::{APIError, APIResponse};
use bookmark::BookmarkClient;
use contest::ContestClient;
use note::NoteClient;
pub use note::UpdateNoteInput;
use reminder::ReminderClient;
pub use reminder::SetReminderInput;
use status::StatusClient;
use std::sync::Arc;
use user::UserClient;
pub use user::{ContactFormInput, LoginUserInput, RegisterUserInput, UpdateMeInput};

pub use battleboard_api_structs::dtos::*;
pub use battleboard_domain::{Platform, ReminderMethod, ID};
pub use reqwest::StatusCode;

// Domain
pub use battleboard_api_structs::dtos::ContestDTO as Contest;
pub use battleboard_api_structs::dtos::NoteDTO as Note;
pub use battleboard_api_structs::dtos::ReminderPreferenceDTO as ReminderPreference;
pub use battleboard_api_structs::dtos::UserDTO as User;

/// BattleBoard Server SDK
///
/// The SDK contains methods for interacting with the BattleBoard server
/// API.
#[derive(Clone)]
pub struct BattleBoardSDK {
    pub bookmark: BookmarkClient,
    pub contest: ContestClient,
    pub note: NoteClient,
    pub reminder: ReminderClient,
    pub status: StatusClient,
    pub user: UserClient,
}

impl BattleBoardSDK {
    /// Client for the public endpoints
    pub fn new(address: String) -> Self {
        Self::create(BaseClient::new(address))
    }

    /// Client acting as the `User` the token was issued to
    pub fn with_token<T: Into<String>>(address: String, token: T) -> Self {
        let mut base = BaseClient::new(address);
        base.set_token(token.into());
        Self::create(base)
    }

    fn create(base: BaseClient) -> Self {
        let base = Arc::new(base);
        Self {
            bookmark: BookmarkClient::new(base.clone()),
            contest: ContestClient::new(base.clone()),
            note: NoteClient::new(base.clone()),
            reminder: ReminderClient::new(base.clone()),
            status: StatusClient::new(base.clone()),
            user: UserClient::new(base),
        }
    }
}

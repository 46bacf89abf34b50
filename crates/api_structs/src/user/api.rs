use battleboard_domain::User;
use serde::{Deserialize, Serialize};

use crate::dtos::UserDTO;

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserResponse {
    pub user: UserDTO,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new<T: Into<String>>(message: T) -> Self {
        Self {
            message: message.into(),
        }
    }
}

impl UserResponse {
    pub fn new(user: User) -> Self {
        Self {
            user: UserDTO::new(user),
        }
    }
}

pub mod register_user {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub username: String,
        pub email: String,
        pub password: String,
        #[serde(default)]
        pub phone_number: Option<String>,
    }

    pub type APIResponse = UserResponse;
}

pub mod login_user {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        /// Either the email or the username of the `User`
        pub email_or_username: String,
        pub password: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub token: String,
        pub user: UserDTO,
    }

    impl APIResponse {
        pub fn new(token: String, user: User) -> Self {
            Self {
                token,
                user: UserDTO::new(user),
            }
        }
    }
}

pub mod get_me {
    use super::*;

    pub type APIResponse = UserResponse;
}

pub mod update_me {
    use super::*;

    #[derive(Debug, Default, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        #[serde(default)]
        pub username: Option<String>,
        /// An empty string removes the phone number
        #[serde(default)]
        pub phone_number: Option<String>,
    }

    pub type APIResponse = UserResponse;
}

pub mod send_otp {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub email: String,
    }

    pub type APIResponse = MessageResponse;
}

pub mod verify_otp {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub email: String,
        pub otp: String,
    }

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct APIResponse {
        pub message: String,
        /// Bearer token for `register_user` and `reset_password`
        pub email_verification_token: String,
    }
}

pub mod reset_password {
    use super::*;

    #[derive(Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub new_password: String,
    }

    pub type APIResponse = MessageResponse;
}

pub mod submit_contact_form {
    use super::*;

    #[derive(Debug, Deserialize, Serialize)]
    #[serde(rename_all = "camelCase")]
    pub struct RequestBody {
        pub name: String,
        pub email: String,
        pub message: String,
    }

    pub type APIResponse = MessageResponse;
}

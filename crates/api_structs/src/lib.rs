mod bookmark;
mod contest;
mod note;
mod reminder;
mod status;
mod user;

pub mod dtos {
    pub use crate::contest::dtos::*;
    pub use crate::note::dtos::*;
    pub use crate::reminder::dtos::*;
    pub use crate::user::dtos::*;
}

pub use crate::bookmark::api::*;
pub use crate::contest::api::*;
pub use crate::note::api::*;
pub use crate::reminder::api::*;
pub use crate::status::api::*;
pub use crate::user::api::*;

mod contest;
mod credentials;
mod note;
mod otp;
mod phone;
mod reminder;
mod shared;
mod user;

pub use chrono_tz::Tz;
pub use contest::Contest;
pub use credentials::{is_strong_password, is_valid_email, normalize_email, MIN_PASSWORD_LEN};
pub use note::{ContestNote, NoteChange};
pub use otp::{OneTimePassword, OTP_LEN, OTP_LIFETIME_MILLIS};
pub use phone::{is_valid_phone_number, normalize_phone_number, DEFAULT_COUNTRY_CODE};
pub use reminder::{
    DeliveryTarget, DueWindow, Platform, ReminderMethod, ReminderNotification,
    ReminderPreference, UnknownVariantError, DEFAULT_MINUTES_BEFORE, MAX_MINUTES_BEFORE,
};
pub use shared::entity::{Entity, InvalidIDError, ID};
pub use user::User;

use super::IUserRepo;
use battleboard_domain::{ContestNote, Platform, ReminderMethod, ReminderPreference, User, ID};
use serde::{Deserialize, Serialize};
use sqlx::{
    types::{Json, Uuid},
    FromRow, PgPool,
};
use serde_json::Value;
use tracing::{error, warn};

pub struct PostgresUserRepo {
    pool: PgPool,
}

impl PostgresUserRepo {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Stored shape of a `ReminderPreference`. Older rows may lack the lead time,
/// the method or the contest start time.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ReminderPreferenceRaw {
    contest_id: i64,
    platform: Platform,
    #[serde(default)]
    method: ReminderMethod,
    #[serde(default = "default_time_before")]
    time_before: i64,
    #[serde(default)]
    contest_time: Option<i64>,
}

fn default_time_before() -> i64 {
    battleboard_domain::DEFAULT_MINUTES_BEFORE
}

impl From<&ReminderPreference> for ReminderPreferenceRaw {
    fn from(r: &ReminderPreference) -> Self {
        Self {
            contest_id: r.contest_id,
            platform: r.platform,
            method: r.method,
            time_before: r.minutes_before,
            contest_time: r.contest_ts,
        }
    }
}

impl From<ReminderPreferenceRaw> for ReminderPreference {
    fn from(r: ReminderPreferenceRaw) -> Self {
        Self {
            contest_id: r.contest_id,
            platform: r.platform,
            method: r.method,
            minutes_before: r.time_before,
            contest_ts: r.contest_time,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ContestNoteRaw {
    contest_id: i64,
    note: String,
    created_at: i64,
}

impl From<&ContestNote> for ContestNoteRaw {
    fn from(n: &ContestNote) -> Self {
        Self {
            contest_id: n.contest_id,
            note: n.note.clone(),
            created_at: n.created,
        }
    }
}

impl From<ContestNoteRaw> for ContestNote {
    fn from(n: ContestNoteRaw) -> Self {
        Self {
            contest_id: n.contest_id,
            note: n.note,
            created: n.created_at,
        }
    }
}

#[derive(Debug, FromRow)]
struct UserRaw {
    user_uid: Uuid,
    username: String,
    email: String,
    password_hash: String,
    phone_number: Option<String>,
    bookmarked_contests: Vec<i64>,
    /// Decoded one by one, see `decode_reminders`
    reminder_preferences: Json<Vec<Value>>,
    notes: Json<Vec<ContestNoteRaw>>,
    created: i64,
    updated: i64,
}

/// Decodes the stored reminders of a `User`, skipping the ones that do not
/// decode. Returns the reminders and how many were skipped.
fn decode_reminders(raw: Vec<Value>) -> (Vec<ReminderPreference>, usize) {
    let total = raw.len();
    let reminders = raw
        .into_iter()
        .filter_map(|value| serde_json::from_value::<ReminderPreferenceRaw>(value).ok())
        .map(ReminderPreference::from)
        .collect::<Vec<_>>();
    let skipped = total - reminders.len();
    (reminders, skipped)
}

impl From<UserRaw> for User {
    fn from(u: UserRaw) -> Self {
        let (reminder_preferences, skipped) = decode_reminders(u.reminder_preferences.0);
        if skipped > 0 {
            warn!(
                user_id = %u.user_uid,
                skipped,
                "Skipped stored reminder preferences that could not be decoded"
            );
        }
        Self {
            id: u.user_uid.into(),
            username: u.username,
            email: u.email,
            password_hash: u.password_hash,
            phone_number: u.phone_number,
            bookmarked_contests: u.bookmarked_contests,
            reminder_preferences,
            notes: u.notes.0.into_iter().map(Into::into).collect(),
            created: u.created,
            updated: u.updated,
        }
    }
}

fn reminders_raw(user: &User) -> Json<Vec<ReminderPreferenceRaw>> {
    Json(user.reminder_preferences.iter().map(Into::into).collect())
}

fn notes_raw(user: &User) -> Json<Vec<ContestNoteRaw>> {
    Json(user.notes.iter().map(Into::into).collect())
}

impl PostgresUserRepo {
    async fn find_one_where(&self, column: &str, value: &str) -> Option<User> {
        let query = format!("SELECT * FROM users WHERE {} = $1", column);
        match sqlx::query_as::<_, UserRaw>(&query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
        {
            Ok(user) => user.map(Into::into),
            Err(e) => {
                error!("Unable to find user by {}. Error: {:?}", column, e);
                None
            }
        }
    }
}

#[async_trait::async_trait]
impl IUserRepo for PostgresUserRepo {
    async fn insert(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            INSERT INTO users(user_uid, username, email, password_hash, phone_number,
                bookmarked_contests, reminder_preferences, notes, created, updated)
            VALUES($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.phone_number)
        .bind(&user.bookmarked_contests)
        .bind(reminders_raw(user))
        .bind(notes_raw(user))
        .bind(user.created)
        .bind(user.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn save(&self, user: &User) -> anyhow::Result<()> {
        sqlx::query(
            r#"
            UPDATE users
            SET username = $2,
            email = $3,
            password_hash = $4,
            phone_number = $5,
            bookmarked_contests = $6,
            reminder_preferences = $7,
            notes = $8,
            updated = $9
            WHERE user_uid = $1
            "#,
        )
        .bind(user.id.inner_ref())
        .bind(&user.username)
        .bind(&user.email)
        .bind(&user.password_hash)
        .bind(&user.phone_number)
        .bind(&user.bookmarked_contests)
        .bind(reminders_raw(user))
        .bind(notes_raw(user))
        .bind(user.updated)
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn find(&self, user_id: &ID) -> Option<User> {
        match sqlx::query_as::<_, UserRaw>("SELECT * FROM users WHERE user_uid = $1")
            .bind(user_id.inner_ref())
            .fetch_optional(&self.pool)
            .await
        {
            Ok(user) => user.map(Into::into),
            Err(e) => {
                error!("Unable to find user: {}. Error: {:?}", user_id, e);
                None
            }
        }
    }

    async fn find_by_email(&self, email: &str) -> Option<User> {
        self.find_one_where("email", email).await
    }

    async fn find_by_username(&self, username: &str) -> Option<User> {
        self.find_one_where("username", username).await
    }

    async fn find_with_reminders(&self) -> anyhow::Result<Vec<User>> {
        let users = sqlx::query_as::<_, UserRaw>(
            r#"
            SELECT * FROM users
            WHERE jsonb_array_length(reminder_preferences) > 0
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(users.into_iter().map(Into::into).collect())
    }
}

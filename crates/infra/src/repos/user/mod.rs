mod inmemory;
mod postgres;

use battleboard_domain::{User, ID};
pub use inmemory::InMemoryUserRepo;
pub use postgres::PostgresUserRepo;

#[async_trait::async_trait]
pub trait IUserRepo: Send + Sync {
    async fn insert(&self, user: &User) -> anyhow::Result<()>;
    async fn save(&self, user: &User) -> anyhow::Result<()>;
    async fn find(&self, user_id: &ID) -> Option<User>;
    /// Lookup by the lowercased email
    async fn find_by_email(&self, email: &str) -> Option<User>;
    async fn find_by_username(&self, username: &str) -> Option<User>;
    /// All `User`s that have at least one `ReminderPreference`. Unlike the other
    /// reads a failure is returned so that callers can tell it apart from no matches.
    async fn find_with_reminders(&self) -> anyhow::Result<Vec<User>>;
}

use crate::Platform;

/// A contest as listed by the contest listing provider
#[derive(Debug, Clone, PartialEq)]
pub struct Contest {
    pub id: i64,
    pub event: String,
    pub host: String,
    pub href: String,
    pub start_ts: i64,
    pub end_ts: i64,
    /// Duration in seconds
    pub duration: i64,
}

impl Contest {
    pub fn platform(&self) -> Option<Platform> {
        Platform::from_host(&self.host)
    }
}

use crate::phone::normalize_phone_number;
use chrono::{DateTime, TimeZone, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::{fmt::Display, str::FromStr};
use thiserror::Error;

/// Lead time used when the client does not specify one
pub const DEFAULT_MINUTES_BEFORE: i64 = 60;
/// Longest lead time a client may ask for (one week)
pub const MAX_MINUTES_BEFORE: i64 = 60 * 24 * 7;

const MILLIS_PER_MINUTE: i64 = 1000 * 60;

/// The contest platforms that reminders can be created for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Platform {
    Codeforces,
    Codechef,
    Leetcode,
}

impl Platform {
    pub fn all() -> [Platform; 3] {
        [Self::Codeforces, Self::Codechef, Self::Leetcode]
    }

    /// The host name used for this platform by the contest listing provider
    pub fn host(&self) -> &'static str {
        match self {
            Self::Codeforces => "codeforces.com",
            Self::Codechef => "codechef.com",
            Self::Leetcode => "leetcode.com",
        }
    }

    pub fn from_host(host: &str) -> Option<Self> {
        Self::all().into_iter().find(|p| p.host() == host)
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Codeforces => "Codeforces",
            Self::Codechef => "Codechef",
            Self::Leetcode => "Leetcode",
        };
        write!(f, "{}", name)
    }
}

#[derive(Error, Debug)]
#[error("Unknown value: `{0}`")]
pub struct UnknownVariantError(String);

impl FromStr for Platform {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|p| p.to_string() == s)
            .ok_or_else(|| UnknownVariantError(s.to_string()))
    }
}

/// How the owner of a `ReminderPreference` wants to be reminded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReminderMethod {
    Email,
    Sms,
}

impl Default for ReminderMethod {
    fn default() -> Self {
        Self::Email
    }
}

impl Display for ReminderMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Email => write!(f, "email"),
            Self::Sms => write!(f, "sms"),
        }
    }
}

impl FromStr for ReminderMethod {
    type Err = UnknownVariantError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "email" => Ok(Self::Email),
            "sms" => Ok(Self::Sms),
            _ => Err(UnknownVariantError(s.to_string())),
        }
    }
}

/// A `ReminderPreference` is a request from a `User` to be notified some
/// minutes before a contest starts.
///
/// A `User` has at most one `ReminderPreference` per contest.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderPreference {
    /// Identifier of the contest at the contest listing provider
    pub contest_id: i64,
    pub platform: Platform,
    pub method: ReminderMethod,
    /// Lead time in minutes
    pub minutes_before: i64,
    /// Start of the contest in millis. Stored preferences written by older
    /// clients may lack it, such preferences are never due.
    pub contest_ts: Option<i64>,
}

/// Half open interval `[start_ts, end_ts)` in millis
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DueWindow {
    pub start_ts: i64,
    pub end_ts: i64,
}

impl DueWindow {
    pub fn contains(&self, ts: i64) -> bool {
        self.start_ts <= ts && ts < self.end_ts
    }
}

impl ReminderPreference {
    pub fn new(contest_id: i64, platform: Platform, contest_ts: i64) -> Self {
        Self {
            contest_id,
            platform,
            method: Default::default(),
            minutes_before: DEFAULT_MINUTES_BEFORE,
            contest_ts: Some(contest_ts),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.has_valid_lead_time() && self.has_valid_contest_time()
    }

    pub fn has_valid_lead_time(&self) -> bool {
        self.minutes_before > 0 && self.minutes_before <= MAX_MINUTES_BEFORE
    }

    /// The contest time, if any, must be representable as a date
    pub fn has_valid_contest_time(&self) -> bool {
        match self.contest_ts {
            Some(contest_ts) => Utc.timestamp_millis_opt(contest_ts).single().is_some(),
            None => true,
        }
    }

    /// `None` when the contest time is missing or the window can not be
    /// represented in millis
    pub fn due_window(&self) -> Option<DueWindow> {
        let contest_ts = self.contest_ts?;
        let lead_ms = self.minutes_before.checked_mul(MILLIS_PER_MINUTE)?;
        Some(DueWindow {
            start_ts: contest_ts.checked_sub(lead_ms)?,
            end_ts: contest_ts,
        })
    }

    /// A reminder is due from `minutes_before` minutes before the contest
    /// starts until the contest has started.
    pub fn is_due(&self, now: i64) -> bool {
        match self.due_window() {
            Some(window) => window.contains(now),
            None => false,
        }
    }

    pub fn notification(&self) -> Option<ReminderNotification> {
        self.contest_ts.map(|contest_ts| ReminderNotification {
            contest_id: self.contest_id,
            platform: self.platform,
            contest_ts,
        })
    }
}

/// Where a reminder should be delivered
#[derive(Debug, Clone, PartialEq)]
pub enum DeliveryTarget {
    Email(String),
    /// Phone number in international format
    Sms(String),
}

impl DeliveryTarget {
    pub fn sms(phone_number: &str) -> Option<Self> {
        normalize_phone_number(phone_number).map(Self::Sms)
    }

    pub fn method(&self) -> ReminderMethod {
        match self {
            Self::Email(_) => ReminderMethod::Email,
            Self::Sms(_) => ReminderMethod::Sms,
        }
    }

    pub fn destination(&self) -> &str {
        match self {
            Self::Email(address) => address,
            Self::Sms(phone_number) => phone_number,
        }
    }
}

/// The content of a reminder that is sent to a `User`
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderNotification {
    pub contest_id: i64,
    pub platform: Platform,
    pub contest_ts: i64,
}

impl ReminderNotification {
    pub fn contest_start(&self, tz: &Tz) -> DateTime<Tz> {
        let start = Utc
            .timestamp_millis_opt(self.contest_ts)
            .single()
            .unwrap_or_else(Utc::now);
        start.with_timezone(tz)
    }

    /// Contest start rendered in the given timezone, e.g. `Mar 9, 2025, 08:05 PM`
    pub fn format_contest_start(&self, tz: &Tz) -> String {
        self.contest_start(tz)
            .format("%b %-d, %Y, %I:%M %p")
            .to_string()
    }
}
